//! Hooks that connect static page markup to the reducer.
//!
//! Product cards, the header buttons and the language switch are plain HTML
//! outside the Yew root, so clicks are caught once at the document and
//! routed to the same callbacks the components use.

use crate::app::handlers::AppHandlers;
use crate::{dom, i18n};
use crate::shop::{Language, numbers::coerce_price};
use gloo::events::EventListener;
use web_sys::{Element, Event};
use yew::prelude::*;

pub const ADD_BUTTON_SELECTOR: &str = ".add-to-cart";
pub const CART_TOGGLE_SELECTOR: &str = "#cart-toggle";
pub const SEARCH_TOGGLE_SELECTOR: &str = "#search-toggle";
pub const LANG_BUTTON_SELECTOR: &str = "[data-lang]";

/// A click on static markup that the shop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageClick {
    Add { name: String, price: u64 },
    OpenCart,
    OpenSearch,
    Language(Language),
}

/// Purchasable `(name, price)` from a card's raw attributes.
///
/// Cards without a name or with a price that coerces to zero are skipped.
/// The name is kept exactly as written so it matches the catalog entry.
#[must_use]
pub fn card_purchase(name: Option<&str>, price: Option<&str>) -> Option<(String, u64)> {
    let name = name.filter(|n| !n.is_empty())?;
    let price = price.map_or(0, coerce_price);
    (price > 0).then(|| (name.to_string(), price))
}

fn classify(event: &Event) -> Option<PageClick> {
    if let Some(button) = dom::closest_from_event(event, ADD_BUTTON_SELECTOR) {
        let card = button.closest(crate::shop::CARD_SELECTOR).ok().flatten()?;
        let (name, price) = card_purchase(
            card.get_attribute("data-name").as_deref(),
            card.get_attribute("data-price").as_deref(),
        )?;
        return Some(PageClick::Add { name, price });
    }
    if dom::closest_from_event(event, CART_TOGGLE_SELECTOR).is_some() {
        return Some(PageClick::OpenCart);
    }
    if dom::closest_from_event(event, SEARCH_TOGGLE_SELECTOR).is_some() {
        return Some(PageClick::OpenSearch);
    }
    dom::closest_from_event(event, LANG_BUTTON_SELECTOR)
        .and_then(|el| el.get_attribute("data-lang"))
        .and_then(|code| Language::from_code(&code))
        .map(PageClick::Language)
}

fn route(click: PageClick, handlers: &AppHandlers) {
    match click {
        PageClick::Add { name, price } => handlers.add.emit((name, price)),
        PageClick::OpenCart => handlers.open_cart.emit(()),
        PageClick::OpenSearch => handlers.open_search.emit(()),
        PageClick::Language(lang) => handlers.lang_change.emit(lang),
    }
}

/// Install the delegated document click listener for the component's lifetime.
#[hook]
pub fn use_delegated_clicks(handlers: &AppHandlers) {
    let handlers = handlers.clone();
    use_effect_with((), move |()| {
        let listener = dom::document().map(|doc| {
            EventListener::new(&doc, "click", move |event: &Event| {
                if let Some(click) = classify(event) {
                    route(click, &handlers);
                }
            })
        });
        move || drop(listener)
    });
}

/// Keep the header badge in step with the cart count.
#[hook]
pub fn use_cart_badge(count: u64) {
    use_effect_with(count, |count| {
        if let Some(badge) = dom::by_id("cart-count") {
            badge.set_text_content(Some(&count.to_string()));
        }
    });
}

fn mark_active_language(buttons: &[Element], lang: Language) {
    for button in buttons {
        let code = button.get_attribute("data-lang");
        let on = code.as_deref() == Some(lang.code());
        dom::toggle_class(button, "active", on);
        let _ = button.set_attribute("aria-pressed", if on { "true" } else { "false" });
        if let Some(name) = code.as_deref().and_then(native_name) {
            let _ = button.set_attribute("title", name);
        }
    }
}

/// Native name of a shipped locale, for switch button tooltips.
#[must_use]
pub fn native_name(code: &str) -> Option<&'static str> {
    let lang = Language::from_code(code)?;
    i18n::locales()
        .iter()
        .find(|meta| meta.lang == lang)
        .map(|meta| meta.name)
}

/// Highlight the `[data-lang]` button for the active language.
#[hook]
pub fn use_language_buttons(lang: Language) {
    use_effect_with(lang, |lang| {
        mark_active_language(&dom::query_all(LANG_BUTTON_SELECTOR), *lang);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::{Cart, Catalog, RawCard};

    #[test]
    fn card_purchase_needs_name_and_price() {
        assert_eq!(
            card_purchase(Some("Batik Tulis"), Some("175000")),
            Some(("Batik Tulis".to_string(), 175_000))
        );
        assert_eq!(card_purchase(None, Some("175000")), None);
        assert_eq!(card_purchase(Some(""), Some("175000")), None);
        assert_eq!(card_purchase(Some("Batik"), None), None);
        assert_eq!(card_purchase(Some("Batik"), Some("abc")), None);
        assert_eq!(card_purchase(Some("Batik"), Some("0")), None);
    }

    #[test]
    fn card_and_search_adds_share_one_cart_line() {
        let name = " Batik ";
        let catalog = Catalog::from_cards([RawCard::new(Some(name), Some("1000"), None)]);
        let (card_name, card_price) =
            card_purchase(Some(name), Some("1000")).expect("card is purchasable");
        let found = catalog.find(name).expect("catalog keeps the written name");
        assert_eq!(card_name, found.name);

        let mut cart = Cart::new();
        cart.add_to_cart(&card_name, card_price).unwrap();
        cart.add_to_cart(&found.name, found.price).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn native_names_come_from_locale_table() {
        assert_eq!(native_name("en"), Some("English"));
        assert_eq!(native_name("id-ID"), Some("Bahasa Indonesia"));
        assert_eq!(native_name("fr"), None);
    }

    #[test]
    fn card_purchase_rounds_fractional_prices() {
        assert_eq!(
            card_purchase(Some("Songket"), Some(" 2500.6 ")),
            Some(("Songket".to_string(), 2501))
        );
    }
}
