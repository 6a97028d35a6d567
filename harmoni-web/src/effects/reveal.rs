use crate::dom;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Cards and sections that get `.animate` once they scroll into view.
pub const CARD_REVEAL_SELECTOR: &str =
    ".collection-card, .value-card, .testimonial-card, .about, .contact";
pub const CARD_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const ANIMATE_CLASS: &str = "animate";

/// Whole sections that start hidden and slide up into place.
pub const SECTION_REVEAL_SELECTOR: &str = ".about, .collections, .values, .contact";
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const SECTION_HIDDEN: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(50px)"),
    ("transition", "opacity 0.8s ease, transform 0.8s ease"),
];
pub const SECTION_SHOWN: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

fn animate(el: &Element) {
    dom::toggle_class(el, ANIMATE_CLASS, true);
}

fn show_section(el: &Element) {
    dom::set_styles(el, &SECTION_SHOWN);
}

/// Run `on_visible` for each target the first time it intersects.
fn observe(targets: &[Element], root_margin: &str, on_visible: fn(&Element)) {
    if targets.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                    && entry.is_intersecting()
                {
                    on_visible(&entry.target());
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for target in targets {
                observer.observe(target);
            }
            callback.forget();
        }
        Err(err) => {
            // No observer support: show everything straight away.
            log::warn!("reveal disabled: {}", dom::js_error_message(&err));
            for target in targets {
                on_visible(target);
            }
        }
    }
}

pub fn install() {
    observe(
        &dom::query_all(CARD_REVEAL_SELECTOR),
        CARD_ROOT_MARGIN,
        animate,
    );

    let sections = dom::query_all(SECTION_REVEAL_SELECTOR);
    for section in &sections {
        dom::set_styles(section, &SECTION_HIDDEN);
    }
    observe(&sections, SECTION_ROOT_MARGIN, show_section);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_state_overrides_every_hidden_property_but_the_transition() {
        let hidden: Vec<&str> = SECTION_HIDDEN
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| *name != "transition")
            .collect();
        let shown: Vec<&str> = SECTION_SHOWN.iter().map(|(name, _)| *name).collect();
        assert_eq!(hidden, shown);
    }

    #[test]
    fn sections_use_a_deeper_margin_than_cards() {
        assert_eq!(SECTION_ROOT_MARGIN, "0px 0px -100px 0px");
        assert_eq!(CARD_ROOT_MARGIN, "0px 0px -50px 0px");
        assert!(SECTION_REVEAL_SELECTOR.contains(".collections"));
    }
}
