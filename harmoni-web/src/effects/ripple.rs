use crate::dom;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

pub const RIPPLE_SELECTOR: &str = ".cta-button";
pub const RIPPLE_CLASS: &str = "ripple";
/// Matches the 0.6s `ripple-animation`.
pub const RIPPLE_DURATION_MS: u32 = 600;

/// Client-space box of the clicked button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A square ripple centred on the pointer, in the button's coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    #[must_use]
    pub fn at(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            left: client_x - bounds.left - size / 2.0,
            top: client_y - bounds.top - size / 2.0,
        }
    }

    #[must_use]
    pub fn styles(&self) -> [(&'static str, String); 4] {
        [
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
        ]
    }
}

fn spawn_ripple(event: &Event) {
    let (Some(mouse), Some(button)) = (
        event.dyn_ref::<MouseEvent>(),
        event
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok()),
    ) else {
        return;
    };
    let Some(Ok(span)) = dom::document().map(|doc| doc.create_element("span")) else {
        return;
    };

    let rect = button.get_bounding_client_rect();
    let ripple = Ripple::at(
        Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        },
        f64::from(mouse.client_x()),
        f64::from(mouse.client_y()),
    );
    let styles = ripple.styles();
    let styles: Vec<(&str, &str)> = styles.iter().map(|(k, v)| (*k, v.as_str())).collect();
    dom::set_styles(&span, &styles);
    dom::toggle_class(&span, RIPPLE_CLASS, true);

    if button.append_child(&span).is_ok() {
        Timeout::new(RIPPLE_DURATION_MS, move || span.remove()).forget();
    }
}

pub fn install() {
    for button in dom::query_all(RIPPLE_SELECTOR) {
        dom::listen(&button, "click", spawn_ripple);
    }
}
