use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

/// Retrieve the global `window` object, if running in a browser.
///
/// Always `None` off wasm, so DOM helpers degrade to no-ops in host tests.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Look up an element by id. Optional page sections simply return `None`.
#[must_use]
pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

/// Every element matching `selector`, in document order.
#[must_use]
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Nearest ancestor of the event target (inclusive) matching `selector`.
#[must_use]
pub fn closest_from_event(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

/// Add or remove a class, ignoring failures.
pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Write inline style properties, skipping elements that carry no style.
pub fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event, handler).forget();
}

/// Wrap `f` so it runs once, `wait_ms` after the last call in a burst.
pub fn debounced<F>(wait_ms: u32, f: F) -> impl FnMut(&Event) + 'static
where
    F: Fn() + 'static,
{
    let f = Rc::new(f);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move |_event: &Event| {
        let f = Rc::clone(&f);
        // Replacing the handle drops, and so cancels, the previous timer.
        pending.replace(Some(Timeout::new(wait_ms, move || f())));
    }
}
