//! Error types for decoration operations.

use thiserror::Error;

/// Result type for decoration operations.
pub type DecorResult<T> = Result<T, DecorError>;

/// Errors that can occur while decorating the ball.
#[derive(Debug, Error)]
pub enum DecorError {
    /// Decoration not found in the collection.
    #[error("Decoration not found: {0}")]
    DecorationNotFound(String),

    /// Scale factor outside the accepted range.
    #[error("Invalid scale factor: {0}")]
    InvalidScale(f32),

    /// Zone dimensions that cannot hold a layout.
    #[error("Invalid zone size: {width}x{height}")]
    InvalidZone {
        /// Requested zone width.
        width: f32,
        /// Requested zone height.
        height: f32,
    },

    /// Configuration value rejected during validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
