//! # Ball Decorator Core
//!
//! Decoration logic for the New Year's ball decorator.
//! Compiles to WASM; the browser host only forwards events and paints.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               ball-core.wasm                │
//! ├─────────────────────────────────────────────┤
//! │  Decorations     │  Input Dispatch          │
//! │  - Kinds/glyphs  │  - Palette drop/click    │
//! │  - Zone clamping │  - Drag state machine    │
//! │  - Z-order       │  - Selection / delete    │
//! ├─────────────────────────────────────────────┤
//! │  View Settings   │  Export Layout           │
//! │  - Scale         │  - Zone -> raster map    │
//! │  - Sparkle/year  │  - Fixed square size     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod confirm;
pub mod decoration;
pub mod error;
pub mod event;
pub mod export;
pub mod manager;
pub mod settings;
pub mod zone;

pub use config::{DecoratorConfig, MAX_SCALE};
pub use confirm::{ConfirmPrompt, FixedAnswer};
pub use decoration::{Decoration, DecorationId, DecorationKind, Position};
pub use error::{DecorError, DecorResult};
pub use event::{EventOutcome, InputEvent, DELETE_KEY};
pub use export::{BallShape, ExportLayout, PlacedGlyph, EXPORT_FILE_NAME};
pub use manager::{DecorationManager, DragState, CLEAR_ALL_PROMPT};
pub use settings::ViewSettings;
pub use zone::DecorationZone;

/// Ball decorator core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
