//! One-shot section reveal
//!
//! Flips to revealed the first time enough of a section is inside the
//! viewport, then stays revealed for the lifetime of the component.

use nandi_core::Tracked;

/// Fraction (0.0 to 1.0) of a section that lies inside the viewport
///
/// A section with no height is never considered visible.
pub fn visible_fraction(
    viewport_top: f32,
    viewport_height: f32,
    section_top: f32,
    section_height: f32,
) -> f32 {
    if section_height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let top = viewport_top.max(section_top);
    let bottom = (viewport_top + viewport_height).min(section_top + section_height);
    ((bottom - top).max(0.0) / section_height).min(1.0)
}

#[derive(Debug)]
pub struct RevealLatch {
    threshold: f32,
    revealed: Tracked<bool>,
}

impl RevealLatch {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed: Tracked::new(false),
        }
    }

    /// Feed the current viewport and section geometry
    ///
    /// Returns `true` only on the observation that flips the latch.
    pub fn observe(
        &mut self,
        viewport_top: f32,
        viewport_height: f32,
        section_top: f32,
        section_height: f32,
    ) -> bool {
        if self.is_revealed() {
            return false;
        }
        let fraction = visible_fraction(viewport_top, viewport_height, section_top, section_height);
        if fraction >= self.threshold && fraction > 0.0 {
            self.revealed.set(true);
            tracing::debug!(fraction, threshold = self.threshold, "section revealed");
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        *self.revealed.get()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}
