//! Decoration zone geometry.

use serde::{Deserialize, Serialize};

use crate::{DecorError, DecorResult, DecoratorConfig, Position};

/// The bounded area in which decorations are placed and dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecorationZone {
    /// Zone width in pixels.
    pub width: f32,
    /// Zone height in pixels.
    pub height: f32,
    /// Square footprint of a decoration in pixels.
    pub item_size: f32,
}

impl DecorationZone {
    /// Create a zone.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not a positive finite number.
    pub fn new(width: f32, height: f32, item_size: f32) -> DecorResult<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(DecorError::InvalidZone { width, height });
        }
        Ok(Self {
            width,
            height,
            item_size,
        })
    }

    /// Zone described by a configuration that has already passed
    /// [`DecoratorConfig::validate`].
    pub(crate) fn from_validated(config: &DecoratorConfig) -> Self {
        Self {
            width: config.zone_width,
            height: config.zone_height,
            item_size: config.item_size,
        }
    }

    /// Largest x a decoration's top-left corner may take.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        (self.width - self.item_size).max(0.0)
    }

    /// Largest y a decoration's top-left corner may take.
    #[must_use]
    pub fn max_y(&self) -> f32 {
        (self.height - self.item_size).max(0.0)
    }

    /// Clamp a position so the whole footprint stays inside the zone.
    ///
    /// NaN coordinates collapse to 0.
    #[must_use]
    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: clamp_axis(position.x, self.max_x()),
            y: clamp_axis(position.y, self.max_y()),
        }
    }

    /// Check that a position already satisfies [`Self::clamp`].
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        (0.0..=self.max_x()).contains(&position.x) && (0.0..=self.max_y()).contains(&position.y)
    }

    /// Zone centre, the click-to-place target.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.min(max).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> DecorationZone {
        DecorationZone::new(400.0, 300.0, 40.0).expect("zone")
    }

    #[test]
    fn clamp_keeps_inside_points() {
        let p = zone().clamp(Position::new(100.0, 100.0));
        assert_eq!(p, Position::new(100.0, 100.0));
    }

    #[test]
    fn clamp_limits_to_footprint() {
        let z = zone();
        assert_eq!(z.clamp(Position::new(395.0, 299.0)), Position::new(360.0, 260.0));
        assert_eq!(z.clamp(Position::new(-20.0, -1.0)), Position::new(0.0, 0.0));
    }

    #[test]
    fn clamp_handles_tiny_zone() {
        let z = DecorationZone::new(20.0, 20.0, 40.0).expect("zone");
        assert_eq!(z.clamp(Position::new(10.0, 5.0)), Position::new(0.0, 0.0));
    }

    #[test]
    fn clamp_handles_non_finite() {
        let z = zone();
        assert_eq!(z.clamp(Position::new(f32::NAN, f32::INFINITY)), Position::new(0.0, 260.0));
        assert_eq!(z.clamp(Position::new(f32::NEG_INFINITY, 0.0)), Position::new(0.0, 0.0));
    }

    #[test]
    fn center_of_zone() {
        assert_eq!(zone().center(), Position::new(200.0, 150.0));
    }

    #[test]
    fn rejects_degenerate_zone() {
        assert!(DecorationZone::new(0.0, 100.0, 40.0).is_err());
        assert!(DecorationZone::new(100.0, f32::NAN, 40.0).is_err());
    }

    #[test]
    fn contains_matches_clamp() {
        let z = zone();
        assert!(z.contains(Position::new(0.0, 260.0)));
        assert!(!z.contains(Position::new(361.0, 0.0)));
    }
}
