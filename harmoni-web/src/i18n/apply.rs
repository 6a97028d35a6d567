//! Text substitution for static markup tagged with `data-i18n` attributes.
use crate::dom;
use crate::i18n::render::t;

/// Attribute naming the key whose text replaces an element's content.
pub const TEXT_ATTR: &str = "data-i18n";
/// Attribute naming the key whose text becomes the element's `placeholder`.
pub const PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";
/// Attribute naming the key whose text becomes the element's `aria-label`.
pub const LABEL_ATTR: &str = "data-i18n-label";

/// Rewrite every tagged element on the page with the active language.
///
/// Returns how many elements were updated.
pub fn apply_translations() -> usize {
    let mut updated = 0;
    for el in dom::query_all(&format!("[{TEXT_ATTR}]")) {
        if let Some(key) = el.get_attribute(TEXT_ATTR) {
            el.set_text_content(Some(&t(&key)));
            updated += 1;
        }
    }
    for (attr, target) in [(PLACEHOLDER_ATTR, "placeholder"), (LABEL_ATTR, "aria-label")] {
        for el in dom::query_all(&format!("[{attr}]")) {
            if let Some(key) = el.get_attribute(attr)
                && el.set_attribute(target, &t(&key)).is_ok()
            {
                updated += 1;
            }
        }
    }
    log::debug!("i18n: updated {updated} elements");
    updated
}
