use crate::dom;
use web_sys::{ScrollBehavior, ScrollToOptions};

pub const CARDS_PER_VIEW: u32 = 4;
pub const SLIDER_GAP_PX: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Prev,
    Next,
}

impl SlideDirection {
    const fn sign(self) -> f64 {
        match self {
            Self::Prev => -1.0,
            Self::Next => 1.0,
        }
    }
}

/// Horizontal distance for one step: a card width plus the gap after it.
#[must_use]
pub fn slide_delta(track_width: f64, direction: SlideDirection) -> f64 {
    let per_view = f64::from(CARDS_PER_VIEW);
    let card_width = (track_width - (per_view - 1.0) * SLIDER_GAP_PX) / per_view;
    direction.sign() * (card_width + SLIDER_GAP_PX)
}

fn slide(direction: SlideDirection) {
    let Some(track) = dom::by_id("collections-track") else {
        return;
    };
    let width = track.get_bounding_client_rect().width();
    let opts = ScrollToOptions::new();
    opts.set_left(slide_delta(width, direction));
    opts.set_behavior(ScrollBehavior::Smooth);
    track.scroll_by_with_scroll_to_options(&opts);
}

pub fn install() {
    for (id, direction) in [
        ("slider-prev", SlideDirection::Prev),
        ("slider-next", SlideDirection::Next),
    ] {
        if let Some(button) = dom::by_id(id) {
            dom::listen(&button, "click", move |_| slide(direction));
        }
    }
}
