use crate::dom;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Height of the fixed header subtracted from scroll targets.
pub const NAV_OFFSET_PX: f64 = 80.0;
/// How far below the viewport top a section must reach to count as current.
pub const ACTIVE_OFFSET_PX: f64 = 100.0;

const ACTIVE: &str = "active";

/// Vertical extent of one `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Where to scroll so a section starts just below the header.
#[must_use]
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - NAV_OFFSET_PX
}

/// Id of the section under the marker line. Later sections win on overlap.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let marker = scroll_y + ACTIVE_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(marker))
        .map(|section| section.id.as_str())
}

/// `#about` for `about`, matching nav link hrefs.
#[must_use]
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

fn close_menu() {
    for id in ["hamburger", "nav-menu"] {
        if let Some(el) = dom::by_id(id) {
            dom::toggle_class(&el, ACTIVE, false);
        }
    }
}

/// Smooth-scroll the window to an absolute offset.
pub fn smooth_scroll_to(top: f64) {
    let Some(win) = dom::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

fn section_bounds() -> Vec<SectionBounds> {
    dom::query_all("section[id]")
        .into_iter()
        .filter_map(|el| {
            let html = el.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds {
                id: html.id(),
                top: f64::from(html.offset_top()),
                height: f64::from(html.offset_height()),
            })
        })
        .collect()
}

/// Mark the nav link for the section currently in view.
pub fn update_active_link(scroll_y: f64) {
    let sections = section_bounds();
    let Some(current) = active_section(&sections, scroll_y) else {
        return;
    };
    let href = section_href(current);
    for link in dom::query_all(".nav-link") {
        let is_current = link.get_attribute("href").as_deref() == Some(href.as_str());
        dom::toggle_class(&link, ACTIVE, is_current);
    }
}

fn on_nav_link(link: &Element) {
    close_menu();
    let Some(target) = link
        .get_attribute("href")
        .filter(|href| href.starts_with('#') && href.len() > 1)
        .and_then(|href| dom::document()?.query_selector(&href).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    smooth_scroll_to(scroll_target(f64::from(target.offset_top())));
}

pub fn install() {
    if let Some(hamburger) = dom::by_id("hamburger") {
        dom::listen(&hamburger, "click", |_| {
            let Some(hamburger) = dom::by_id("hamburger") else {
                return;
            };
            let open = !hamburger.class_list().contains(ACTIVE);
            dom::toggle_class(&hamburger, ACTIVE, open);
            if let Some(menu) = dom::by_id("nav-menu") {
                dom::toggle_class(&menu, ACTIVE, open);
            }
        });
    }

    for link in dom::query_all(".nav-link") {
        let target = link.clone();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            on_nav_link(&target);
        });
    }
}
