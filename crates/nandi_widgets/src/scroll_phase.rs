//! Scroll phase tracking
//!
//! The header is transparent over the hero and turns solid once the page has
//! scrolled past a small threshold. This tracker turns the raw scroll signal
//! into that boolean and only republishes when it flips.

use nandi_core::Tracked;
use serde::Serialize;

/// Default scroll offset (px) past which the header turns solid
pub const DEFAULT_THRESHOLD_PX: f32 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScrollPhase {
    pub past_threshold: bool,
}

impl ScrollPhase {
    /// Derive the phase from a scroll offset
    pub fn from_offset(offset: f32, threshold: f32) -> Self {
        Self {
            past_threshold: offset > threshold,
        }
    }
}

#[derive(Debug)]
pub struct ScrollPhaseTracker {
    threshold: f32,
    phase: Tracked<ScrollPhase>,
    subscribed: bool,
}

impl ScrollPhaseTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            phase: Tracked::new(ScrollPhase::default()),
            subscribed: false,
        }
    }

    /// Start listening to scroll signals
    pub fn mount(&mut self) {
        self.subscribed = true;
    }

    /// Stop listening. Signals delivered afterwards are ignored.
    pub fn unmount(&mut self) {
        self.subscribed = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.subscribed
    }

    /// Feed a scroll offset
    ///
    /// Returns the new phase when it changed, `None` when it stayed the same
    /// or the tracker is not mounted.
    pub fn on_scroll(&mut self, offset: f32) -> Option<ScrollPhase> {
        if !self.subscribed {
            return None;
        }
        let next = ScrollPhase::from_offset(offset, self.threshold);
        if self.phase.set_if_changed(next) {
            tracing::debug!(offset, past_threshold = next.past_threshold, "scroll phase changed");
            Some(next)
        } else {
            None
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        *self.phase.get()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn writes(&self) -> u64 {
        self.phase.writes()
    }
}

impl Default for ScrollPhaseTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut tracker = ScrollPhaseTracker::default();
        tracker.mount();

        assert_eq!(tracker.on_scroll(50.0), None);
        assert!(!tracker.phase().past_threshold);

        assert_eq!(
            tracker.on_scroll(50.5),
            Some(ScrollPhase {
                past_threshold: true
            })
        );
    }

    #[test]
    fn test_republishes_only_on_change() {
        let mut tracker = ScrollPhaseTracker::default();
        tracker.mount();

        for offset in [10.0, 20.0, 60.0, 400.0, 900.0, 30.0, 0.0] {
            tracker.on_scroll(offset);
        }
        // false -> true -> false
        assert_eq!(tracker.writes(), 2);
    }

    #[test]
    fn test_ignored_after_unmount() {
        let mut tracker = ScrollPhaseTracker::default();
        tracker.mount();
        tracker.unmount();

        assert_eq!(tracker.on_scroll(500.0), None);
        assert_eq!(tracker.writes(), 0);
    }
}
