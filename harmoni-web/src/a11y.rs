// Accessibility helpers

/// `aria-hidden` value for a panel that is open or closed.
#[must_use]
pub const fn aria_hidden(open: bool) -> &'static str {
    if open { "false" } else { "true" }
}

/// Update the live region status for screen readers
///
/// Updates the text content of the #shop-status element if present.
/// This announces cart changes to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::by_id("shop-status") {
        node.set_text_content(Some(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aria_hidden_inverts_open_state() {
        assert_eq!(aria_hidden(true), "false");
        assert_eq!(aria_hidden(false), "true");
    }
}
