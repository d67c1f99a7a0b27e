//! In-page anchors

use serde::Serialize;

use crate::content::QUICK_LINKS;

/// Anchor for a navigation label: `"Why Choose Us"` -> `"#why-choose-us"`
pub fn anchor(label: &str) -> String {
    let slug = label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("#{slug}")
}

/// Target of a link label
///
/// Labels with an explicit footer target use it, anything else gets the
/// label's anchor.
pub fn resolve(label: &str) -> String {
    QUICK_LINKS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, href)| href.to_string())
        .unwrap_or_else(|| anchor(label))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: resolve(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_slug() {
        assert_eq!(anchor("Routes"), "#routes");
        assert_eq!(anchor("Why Choose Us"), "#why-choose-us");
        assert_eq!(anchor("  Contact   Us "), "#contact-us");
    }

    #[test]
    fn test_resolve_prefers_explicit_target() {
        assert_eq!(resolve("Why Choose Us"), "#features");
        assert_eq!(resolve("Features"), "#features");
        assert_eq!(resolve("Privacy Policy"), "#");
        assert_eq!(resolve("Gallery"), "#gallery");
    }
}
