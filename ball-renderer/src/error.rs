//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The layout cannot be drawn (e.g. zero-sized raster).
    #[error("Invalid export layout: {0}")]
    InvalidLayout(String),

    /// Rasterization or encoding failed.
    #[error("Export failed: {0}")]
    Export(String),
}
