#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod effects;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod logging;
pub mod shop;

/// Element the Yew panels mount into; falls back to `<body>`.
pub const ROOT_ID: &str = "shop-root";

/// Restore the session from the page and saved preferences, then wire the
/// page and mount the cart and search panels.
pub fn boot() {
    let session = shop::web_engine().create_session().unwrap_or_else(|err| {
        log::warn!("starting with an empty shop: {err:#}");
        shop::ShopSession::new(
            shop::Catalog::empty(),
            shop::web_config(),
            shop::Language::default(),
        )
    });
    log::info!(
        "{} products, language {}",
        session.catalog().len(),
        session.language()
    );

    i18n::set_lang(session.language());
    i18n::apply_translations();
    shop::sync_card_prices(&session.currency());
    effects::install();

    let props = app::AppProps { session };
    match dom::by_id(ROOT_ID) {
        Some(root) => {
            yew::Renderer::<app::App>::with_root_and_props(root, props).render();
        }
        None => {
            yew::Renderer::<app::App>::with_props(props).render();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();

    // Product cards must be parsed before the catalog is read.
    match dom::document() {
        Some(doc) if doc.ready_state() == "loading" => {
            dom::listen(&doc, "DOMContentLoaded", |_| boot());
        }
        _ => boot(),
    }
}
