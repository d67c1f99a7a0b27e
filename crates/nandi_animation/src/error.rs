//! Error types for nandi_animation

use thiserror::Error;

/// Errors raised when an animation is built with unusable parameters
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    /// A carousel needs at least one item to cycle through
    #[error("carousel must have at least one item")]
    EmptyCarousel,

    /// A carousel period of zero would fire continuously
    #[error("carousel period must be at least 1ms")]
    ZeroPeriod,

    /// A tween needs at least one step to reach its targets
    #[error("tween must have at least one step")]
    ZeroSteps,
}

/// Result type for nandi_animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
