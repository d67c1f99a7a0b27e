//! Nandi Animation System
//!
//! Timer-driven animations for the page runtime.
//!
//! # Features
//!
//! - **Interval carousels**: wrapping index cyclers that advance on a fixed period
//! - **Numeric tweens**: count-up animations from 0 to integer targets with
//!   floored linear interpolation and an exact final step
//! - **Mount/unmount lifecycle**: every animation owns at most one pending
//!   timer and releases it on teardown

pub mod carousel;
pub mod error;
pub mod tween;

pub use carousel::{CarouselState, IntervalCarousel};
pub use error::{AnimationError, Result};
pub use tween::{interpolate, NumericTween, TweenConfig, TweenState};
