//! Error types for nandi_app

use std::path::PathBuf;

use nandi_animation::AnimationError;
use thiserror::Error;

use crate::page::CardGroup;

/// Errors raised while building or driving the page
#[derive(Error, Debug)]
pub enum SiteError {
    /// Configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A timed component was configured with impossible parameters
    #[error(transparent)]
    Animation(#[from] AnimationError),

    /// A required contact field was blank on submit
    #[error("required field `{0}` is empty")]
    MissingField(String),

    /// A select field received a value that is not one of its options
    #[error("`{value}` is not an option for `{field}`")]
    InvalidOption { field: String, value: String },

    /// Event named a form field that does not exist
    #[error("unknown form field `{0}`")]
    UnknownField(String),

    /// Pointer event named a card that does not exist
    #[error("{group} card {index} is out of range ({count} cards)")]
    CardOutOfRange {
        group: CardGroup,
        index: usize,
        count: usize,
    },
}

/// Result type for nandi_app operations
pub type Result<T> = std::result::Result<T, SiteError>;
