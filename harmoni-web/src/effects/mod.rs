//! Page behaviour that lives outside the Yew tree: navigation, scroll and
//! hover effects, button ripples, reveal-on-scroll and the collections slider.
//!
//! The geometry is kept in plain functions so it can be tested on the host;
//! `install` does the DOM wiring and only makes sense in a browser.

pub mod hover;
pub mod nav;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod slider;
pub mod styles;

use crate::dom;

const LOADED_CLASS: &str = "loaded";

/// Attach every page-level listener. Call once, after the document is parsed.
pub fn install() {
    styles::inject();
    nav::install();
    scroll::install();
    reveal::install();
    slider::install();
    ripple::install();
    hover::install();
    mark_loaded_on_load();
}

fn mark_loaded_on_load() {
    let Some(doc) = dom::document() else {
        return;
    };
    // The module can finish loading after the window `load` event.
    if doc.ready_state() == "complete" {
        mark_loaded();
        return;
    }
    if let Some(win) = dom::window() {
        dom::listen(&win, "load", |_| mark_loaded());
    }
}

fn mark_loaded() {
    if let Some(body) = dom::document().and_then(|doc| doc.body()) {
        dom::toggle_class(&body, LOADED_CLASS, true);
    }
}
