use crate::dom;
use web_sys::Element;

/// Transform swapped on `mouseenter` and `mouseleave`.
///
/// `target` selects a child of the hovered element; `None` moves the element
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverRule {
    pub host: &'static str,
    pub target: Option<&'static str>,
    pub enter: &'static str,
    pub leave: &'static str,
}

impl HoverRule {
    #[must_use]
    pub const fn transform(&self, hovered: bool) -> &'static str {
        if hovered { self.enter } else { self.leave }
    }

    fn target_of(&self, host: &Element) -> Option<Element> {
        match self.target {
            None => Some(host.clone()),
            Some(selector) => host.query_selector(selector).ok().flatten(),
        }
    }
}

pub const HOVER_RULES: [HoverRule; 3] = [
    HoverRule {
        host: ".collection-card",
        target: None,
        enter: "translateY(-10px) scale(1.02)",
        leave: "translateY(0) scale(1)",
    },
    HoverRule {
        host: ".value-card",
        target: Some(".value-icon"),
        enter: "scale(1.1) rotate(5deg)",
        leave: "scale(1) rotate(0deg)",
    },
    HoverRule {
        host: ".contact-item",
        target: Some(".contact-icon"),
        enter: "scale(1.1)",
        leave: "scale(1)",
    },
];

pub fn install() {
    for rule in HOVER_RULES {
        for host in dom::query_all(rule.host) {
            for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
                let el = host.clone();
                dom::listen(&host, event, move |_| {
                    if let Some(target) = rule.target_of(&el) {
                        dom::set_styles(&target, &[("transform", rule.transform(hovered))]);
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_restores_the_resting_transform() {
        let card = HOVER_RULES[0];
        assert_eq!(card.transform(true), "translateY(-10px) scale(1.02)");
        assert_eq!(card.transform(false), "translateY(0) scale(1)");
    }

    #[test]
    fn icon_rules_target_children() {
        let targets: Vec<_> = HOVER_RULES.iter().map(|rule| rule.target).collect();
        assert_eq!(targets, vec![None, Some(".value-icon"), Some(".contact-icon")]);
    }
}
