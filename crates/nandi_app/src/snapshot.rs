use serde::Serialize;

use crate::sections::{ContactView, FeaturesView, FooterView, HeaderView, HeroView, RoutesView};

/// Everything needed to draw the page at one instant
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageSnapshot {
    /// Scheduler time the snapshot was taken at
    pub now_ms: u64,
    pub scroll_offset: f32,
    pub header: HeaderView,
    pub hero: HeroView,
    pub routes: RoutesView,
    pub features: FeaturesView,
    pub contact: ContactView,
    pub footer: FooterView,
}

impl PageSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Same page, ignoring the clock
    ///
    /// Used to skip redraws when only time moved on.
    pub fn same_content(&self, other: &PageSnapshot) -> bool {
        PageSnapshot {
            now_ms: other.now_ms,
            ..self.clone()
        } == *other
    }
}
