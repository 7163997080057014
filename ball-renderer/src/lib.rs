//! # Ball Decorator Renderer
//!
//! Raster export of a decorated ball.
//!
//! ## Export Pipeline
//!
//! ```text
//! ┌──────────────┐    ┌───────────┐    ┌──────────────────┐
//! │ ExportLayout │ -> │ SVG string│ -> │ usvg/resvg raster│ -> PNG / JPEG
//! └──────────────┘    └───────────┘    └──────────────────┘
//! ```
//!
//! The browser host paints its live view with the 2D canvas API instead;
//! this crate serves native builds and tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod export;

pub use error::{RenderError, RenderResult};
pub use export::{BallExporter, ExportConfig, ExportFormat};
