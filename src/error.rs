// Typed errors with thiserror. Surface meaningful messages to JS.
// Runtime navigation never errors; only construction and serialization can fail.

use thiserror::Error;

/// Gallery engine error types.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::Serialization(err.to_string())
    }
}
