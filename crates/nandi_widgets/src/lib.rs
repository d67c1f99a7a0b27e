//! Nandi Widget State Machines
//!
//! Interaction state for the page's widgets, independent of any view layer.
//! Each widget owns its state in a write-tracked cell, exposes update
//! functions that return the new snapshot (or whether anything changed), and
//! releases its timers on unmount.
//!
//! - [`ScrollPhaseTracker`] - header restyle once the page scrolls past a threshold
//! - [`HoverSelectionState`] - hovered and selected card within a card group
//! - [`FormSubmissionFlow`] - Idle -> Submitting -> Success -> Idle contact form
//! - [`MenuToggle`] - mobile navigation menu
//! - [`RevealLatch`] - one-shot "section has been seen" flag

pub mod form;
pub mod menu;
pub mod reveal;
pub mod scroll_phase;
pub mod selection;

pub use form::{FormPhase, FormState, FormSubmissionFlow, FormTimings};
pub use menu::MenuToggle;
pub use reveal::{visible_fraction, RevealLatch};
pub use scroll_phase::{ScrollPhase, ScrollPhaseTracker};
pub use selection::{CardEmphasis, CardEvent, CardInteraction, HoverSelectionState};
