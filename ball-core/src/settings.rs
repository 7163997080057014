//! View settings shared by the live view.

use serde::{Deserialize, Serialize};

use crate::config::is_valid_scale;
use crate::{DecorError, DecorResult, DecoratorConfig};

/// Global display settings of one decorator.
///
/// These only influence the on-screen view; the raster export ignores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    scale: f32,
    sparkle: bool,
    year_label: String,
}

impl ViewSettings {
    /// Initial settings taken from a configuration.
    #[must_use]
    pub fn from_config(config: &DecoratorConfig) -> Self {
        Self {
            scale: config.initial_scale,
            sparkle: config.initial_sparkle,
            year_label: config.year_label.clone(),
        }
    }

    /// Current ball scale (1.0 = 100%).
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the ball scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is not finite or outside `(0, MAX_SCALE]`.
    pub fn set_scale(&mut self, factor: f32) -> DecorResult<()> {
        if !is_valid_scale(factor) {
            return Err(DecorError::InvalidScale(factor));
        }
        self.scale = factor;
        Ok(())
    }

    /// Scale as the percentage label shown next to the slider.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn scale_label(&self) -> String {
        format!("{}%", (self.scale * 100.0).round() as i32)
    }

    /// Whether the sparkle effect is on.
    #[must_use]
    pub fn sparkle(&self) -> bool {
        self.sparkle
    }

    /// Turn the sparkle effect on or off.
    pub fn set_sparkle(&mut self, enabled: bool) {
        self.sparkle = enabled;
    }

    /// Flip the sparkle effect, returning the new state.
    pub fn toggle_sparkle(&mut self) -> bool {
        self.sparkle = !self.sparkle;
        self.sparkle
    }

    /// Text shown on the ball.
    #[must_use]
    pub fn year_label(&self) -> &str {
        &self.year_label
    }

    /// Replace the text shown on the ball.
    pub fn set_year_label(&mut self, label: impl Into<String>) {
        self.year_label = label.into();
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&DecoratorConfig::default())
    }
}
