//! Decorator configuration.

use serde::{Deserialize, Serialize};

use crate::{DecorError, DecorResult};

/// Largest accepted view scale (200%).
pub const MAX_SCALE: f32 = 2.0;

/// Configuration for a decorator instance.
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoratorConfig {
    /// Decoration zone width in pixels.
    pub zone_width: f32,
    /// Decoration zone height in pixels.
    pub zone_height: f32,
    /// Square footprint of one decoration in pixels.
    pub item_size: f32,
    /// Side length of the exported raster in pixels.
    pub export_size: u32,
    /// Export background color as hex.
    pub background: String,
    /// Ball fill color as hex.
    pub ball_color: String,
    /// Ball radius in export pixels.
    pub ball_radius: f32,
    /// Glyph font size in export pixels.
    pub glyph_font_size: f32,
    /// Initial year label shown on the ball.
    pub year_label: String,
    /// Initial view scale.
    pub initial_scale: f32,
    /// Whether the sparkle effect starts enabled.
    pub initial_sparkle: bool,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            zone_width: 400.0,
            zone_height: 400.0,
            item_size: 40.0,
            export_size: 800,
            background: "#1a1a2e".to_string(),
            ball_color: "#FF4500".to_string(),
            ball_radius: 200.0,
            glyph_font_size: 40.0,
            year_label: "2026".to_string(),
            initial_scale: 1.0,
            initial_sparkle: false,
        }
    }
}

impl DecoratorConfig {
    /// Parse a configuration from JSON and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> DecorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> DecorResult<()> {
        if !(self.zone_width.is_finite() && self.zone_width > 0.0)
            || !(self.zone_height.is_finite() && self.zone_height > 0.0)
        {
            return Err(DecorError::InvalidZone {
                width: self.zone_width,
                height: self.zone_height,
            });
        }
        if !(self.item_size.is_finite() && self.item_size > 0.0) {
            return Err(DecorError::InvalidConfig(format!(
                "item_size must be positive, got {}",
                self.item_size
            )));
        }
        if self.export_size == 0 {
            return Err(DecorError::InvalidConfig(
                "export_size must be non-zero".to_string(),
            ));
        }
        if !(self.glyph_font_size.is_finite() && self.glyph_font_size > 0.0) {
            return Err(DecorError::InvalidConfig(format!(
                "glyph_font_size must be positive, got {}",
                self.glyph_font_size
            )));
        }
        if !(self.ball_radius.is_finite() && self.ball_radius >= 0.0) {
            return Err(DecorError::InvalidConfig(format!(
                "ball_radius must be non-negative, got {}",
                self.ball_radius
            )));
        }
        #[allow(clippy::cast_precision_loss)]
        let half_raster = self.export_size as f32 / 2.0;
        if self.ball_radius > half_raster {
            return Err(DecorError::InvalidConfig(format!(
                "ball_radius {} does not fit a {}px export",
                self.ball_radius, self.export_size
            )));
        }
        if !is_valid_scale(self.initial_scale) {
            return Err(DecorError::InvalidScale(self.initial_scale));
        }
        Ok(())
    }
}

/// Whether a view scale factor is accepted.
#[must_use]
pub fn is_valid_scale(scale: f32) -> bool {
    scale.is_finite() && scale > 0.0 && scale <= MAX_SCALE
}
