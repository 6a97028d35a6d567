use crate::components::scroll_top::SCROLL_TOP_ID;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const NAVBAR_SCROLLED_PX: f64 = 100.0;
pub const PARALLAX_RATE: f64 = -0.5;
pub const SCROLL_TOP_VISIBLE_PX: f64 = 500.0;
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

/// Everything the scroll handler writes, derived from one `scrollY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub navbar_scrolled: bool,
    pub parallax_px: f64,
    pub scroll_top_visible: bool,
}

impl ScrollFrame {
    #[must_use]
    pub fn at(scroll_y: f64) -> Self {
        Self {
            navbar_scrolled: scroll_y > NAVBAR_SCROLLED_PX,
            // `+ 0.0` turns -0 into 0 at the top of the page.
            parallax_px: scroll_y * PARALLAX_RATE + 0.0,
            scroll_top_visible: scroll_y > SCROLL_TOP_VISIBLE_PX,
        }
    }

    #[must_use]
    pub fn parallax_transform(&self) -> String {
        format!("translateY({}px)", self.parallax_px)
    }

    /// Inline opacity and visibility for the back-to-top button.
    #[must_use]
    pub const fn scroll_top_styles(&self) -> [(&'static str, &'static str); 2] {
        if self.scroll_top_visible {
            [("opacity", "1"), ("visibility", "visible")]
        } else {
            [("opacity", "0"), ("visibility", "hidden")]
        }
    }
}

fn apply(frame: ScrollFrame) {
    if let Some(navbar) = dom::by_id("navbar") {
        dom::toggle_class(&navbar, "scrolled", frame.navbar_scrolled);
    }
    if let Some(hero) = dom::document()
        .and_then(|doc| doc.query_selector(".hero-background").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = hero
            .style()
            .set_property("transform", &frame.parallax_transform());
    }
    if let Some(button) = dom::by_id(SCROLL_TOP_ID) {
        dom::set_styles(&button, &frame.scroll_top_styles());
    }
}

fn on_scroll() {
    let Some(scroll_y) = dom::window().and_then(|win| win.scroll_y().ok()) else {
        return;
    };
    apply(ScrollFrame::at(scroll_y));
    super::nav::update_active_link(scroll_y);
}

pub fn install() {
    if let Some(win) = dom::window() {
        dom::listen(&win, "scroll", dom::debounced(SCROLL_DEBOUNCE_MS, on_scroll));
    }
    on_scroll();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_has_no_effects() {
        let frame = ScrollFrame::at(0.0);
        assert!(!frame.navbar_scrolled);
        assert!(!frame.scroll_top_visible);
        assert_eq!(frame.parallax_transform(), "translateY(0px)");
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert!(!ScrollFrame::at(100.0).navbar_scrolled);
        assert!(ScrollFrame::at(101.0).navbar_scrolled);
        assert!(!ScrollFrame::at(500.0).scroll_top_visible);
        assert!(ScrollFrame::at(501.0).scroll_top_visible);
    }

    #[test]
    fn scroll_top_button_fades_in_past_threshold() {
        assert_eq!(
            ScrollFrame::at(0.0).scroll_top_styles(),
            [("opacity", "0"), ("visibility", "hidden")]
        );
        assert_eq!(
            ScrollFrame::at(800.0).scroll_top_styles(),
            [("opacity", "1"), ("visibility", "visible")]
        );
    }

    #[test]
    fn parallax_moves_at_half_speed_upwards() {
        let frame = ScrollFrame::at(300.0);
        assert!((frame.parallax_px + 150.0).abs() < f64::EPSILON);
        assert_eq!(frame.parallax_transform(), "translateY(-150px)");
    }
}
