//! Raster export layout.
//!
//! The export is a fixed-size square: a background fill, the ball as a
//! filled circle, then every glyph in z-order. Decoration positions are
//! mapped linearly from zone pixels to raster pixels, so the result matches
//! the on-screen arrangement regardless of the live view's scale.

use serde::{Deserialize, Serialize};

use crate::{Decoration, DecorationZone, DecoratorConfig};

/// Download name of the PNG export.
pub const EXPORT_FILE_NAME: &str = "newyear-ball.png";

/// The ball drawn behind the glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallShape {
    /// Centre X in raster pixels.
    pub cx: f32,
    /// Centre Y in raster pixels.
    pub cy: f32,
    /// Radius in raster pixels.
    pub radius: f32,
    /// Fill color as hex.
    pub color: String,
}

/// One glyph positioned in raster space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedGlyph {
    /// Emoji text.
    pub glyph: String,
    /// Left edge in raster pixels.
    pub x: f32,
    /// Text baseline in raster pixels.
    pub y: f32,
    /// Font size in raster pixels.
    pub font_size: f32,
}

/// Everything needed to paint the exported image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportLayout {
    /// Side length of the square raster in pixels.
    pub size: u32,
    /// Background color as hex.
    pub background: String,
    /// The ball primitive.
    pub ball: BallShape,
    /// Glyphs in z-order (first drawn first).
    pub glyphs: Vec<PlacedGlyph>,
}

impl ExportLayout {
    /// Map decorations from zone space into a raster layout.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute<'a>(
        config: &DecoratorConfig,
        zone: &DecorationZone,
        decorations: impl IntoIterator<Item = &'a Decoration>,
    ) -> Self {
        let size = config.export_size;
        let side = size as f32;
        let scale_x = side / zone.width;
        let scale_y = side / zone.height;

        let glyphs = decorations
            .into_iter()
            .map(|decoration| PlacedGlyph {
                glyph: decoration.glyph().to_string(),
                x: decoration.position.x * scale_x,
                y: decoration.position.y * scale_y,
                font_size: config.glyph_font_size,
            })
            .collect();

        Self {
            size,
            background: config.background.clone(),
            ball: BallShape {
                cx: side / 2.0,
                cy: side / 2.0,
                radius: config.ball_radius,
                color: config.ball_color.clone(),
            },
            glyphs,
        }
    }

    /// Number of glyphs in the layout.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}
