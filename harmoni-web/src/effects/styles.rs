use crate::dom;

pub const STYLE_ID: &str = "harmoni-effects";

/// Rules the effects rely on: ripple animation, active nav link and the
/// fade-in once `body.loaded` is set.
pub const EFFECTS_CSS: &str = "
.cta-button { position: relative; overflow: hidden; }
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: ripple-animation 0.6s linear;
    pointer-events: none;
}
@keyframes ripple-animation { to { transform: scale(4); opacity: 0; } }
.nav-link.active { color: #E95420; }
.nav-link.active::after { width: 100%; }
body { opacity: 0; transition: opacity 0.5s ease; }
body.loaded { opacity: 1; }
";

/// Add the effects stylesheet to `<head>` once.
pub fn inject() {
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (doc.create_element("style"), doc.head()) else {
        log::warn!("effects stylesheet not injected");
        return;
    };
    style.set_id(STYLE_ID);
    style.set_text_content(Some(EFFECTS_CSS));
    if head.append_child(&style).is_err() {
        log::warn!("effects stylesheet not injected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_covers_toggled_classes() {
        for selector in [".ripple", ".nav-link.active", "body.loaded", "@keyframes ripple-animation"] {
            assert!(EFFECTS_CSS.contains(selector), "missing {selector}");
        }
        assert_eq!(EFFECTS_CSS.matches('{').count(), EFFECTS_CSS.matches('}').count());
    }
}
