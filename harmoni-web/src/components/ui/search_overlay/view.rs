use super::results::{SearchResultRow, result_count_label, row_key};
use crate::a11y::aria_hidden;
use crate::i18n;
use crate::shop::{CatalogItem, CurrencyFormat, Language};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Delay before the input takes focus, so the open transition can start.
pub const SEARCH_FOCUS_DELAY_MS: u32 = 150;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchOverlayProps {
    pub open: bool,
    pub query: AttrValue,
    /// Matches for `query`, already capped.
    pub results: Vec<CatalogItem>,
    pub currency: CurrencyFormat,
    pub lang: Language,
    pub on_query: Callback<String>,
    pub on_add: Callback<(String, u64)>,
    pub on_close: Callback<()>,
}

#[function_component(SearchOverlay)]
pub fn search_overlay(p: &SearchOverlayProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with(p.open, move |open| {
            if *open {
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(SEARCH_FOCUS_DELAY_MS).await;
                    if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                        let _ = input.focus();
                    }
                });
            }
        });
    }

    let on_input = {
        let cb = p.on_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.value());
            }
        })
    };

    // Only a click on the backdrop itself closes; clicks inside bubble here too.
    let on_backdrop = {
        let cb = p.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                cb.emit(());
            }
        })
    };

    let on_close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let has_query = !p.query.trim().is_empty();

    html! {
        <div id="search-overlay"
            class={classes!("search-overlay", p.open.then_some("active"))}
            aria-hidden={aria_hidden(p.open)}
            role="dialog"
            aria-label={i18n::t("search.title")}
            lang={p.lang.code()}
            onclick={on_backdrop}>
            <div class="search-container">
                <button id="search-close" class="search-close"
                    aria-label={i18n::t("search.close")}
                    onclick={on_close}>{ "×" }</button>
                <input id="search-input"
                    ref={input_ref}
                    type="search"
                    class="search-input"
                    autocomplete="off"
                    placeholder={i18n::t("search.placeholder")}
                    value={p.query.clone()}
                    oninput={on_input} />
                if has_query {
                    <p class="search-count" aria-live="polite">{ result_count_label(p.results.len()) }</p>
                }
                <div id="search-results" class="search-results">
                    { for p.results.iter().enumerate().map(|(idx, item)| html! {
                        <SearchResultRow
                            key={row_key(idx, &item.name)}
                            item={item.clone()}
                            currency={p.currency.clone()}
                            on_add={p.on_add.clone()}
                        />
                    }) }
                </div>
            </div>
        </div>
    }
}
