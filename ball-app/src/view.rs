//! Live view geometry.
//!
//! Pure arithmetic shared by the painter and the pointer mapping, kept free
//! of DOM types so it can be tested natively.

use std::f32::consts::TAU;

use ball_core::{DecorationZone, ViewSettings};

/// Ball radius as a fraction of the zone's shorter side, at 100% scale.
pub const BALL_RADIUS_RATIO: f32 = 0.4;

/// Number of sparkle glyphs drawn around the ball.
pub const SPARKLE_COUNT: usize = 8;

/// Where the ball sits in the live view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallGeometry {
    /// Centre X in zone pixels.
    pub cx: f32,
    /// Centre Y in zone pixels.
    pub cy: f32,
    /// Radius in zone pixels after applying the view scale.
    pub radius: f32,
}

impl BallGeometry {
    /// Ball centred in the zone, scaled uniformly by the view scale.
    #[must_use]
    pub fn for_view(zone: &DecorationZone, settings: &ViewSettings) -> Self {
        Self {
            cx: zone.width / 2.0,
            cy: zone.height / 2.0,
            radius: zone.width.min(zone.height) * BALL_RADIUS_RATIO * settings.scale(),
        }
    }

    /// Positions of the sparkle glyphs on a ring just outside the ball.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sparkle_points(&self) -> Vec<(f32, f32)> {
        let ring = self.radius * 1.15;
        (0..SPARKLE_COUNT)
            .map(|i| {
                let angle = TAU * i as f32 / SPARKLE_COUNT as f32;
                (self.cx + ring * angle.cos(), self.cy + ring * angle.sin())
            })
            .collect()
    }
}

/// Bounding box of the canvas element in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    /// Left edge in client coordinates.
    pub left: f64,
    /// Top edge in client coordinates.
    pub top: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

impl ClientRect {
    /// Map a client-space pointer position into zone pixels.
    ///
    /// The canvas may be displayed at a different CSS size than its backing
    /// store, so the offset is rescaled by zone size over rendered size.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_zone(&self, zone: &DecorationZone, client_x: f64, client_y: f64) -> (f32, f32) {
        let sx = if self.width > 0.0 {
            f64::from(zone.width) / self.width
        } else {
            1.0
        };
        let sy = if self.height > 0.0 {
            f64::from(zone.height) / self.height
        } else {
            1.0
        };
        (
            ((client_x - self.left) * sx) as f32,
            ((client_y - self.top) * sy) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> DecorationZone {
        DecorationZone::new(400.0, 300.0, 40.0).expect("zone")
    }

    #[test]
    fn ball_scales_with_view() {
        let mut settings = ViewSettings::default();
        let base = BallGeometry::for_view(&zone(), &settings);
        assert!((base.radius - 120.0).abs() < 1e-4);
        assert!((base.cx - 200.0).abs() < f32::EPSILON);
        assert!((base.cy - 150.0).abs() < f32::EPSILON);

        settings.set_scale(1.5).expect("scale");
        let scaled = BallGeometry::for_view(&zone(), &settings);
        assert!((scaled.radius - 180.0).abs() < 1e-4);
        assert!((scaled.cx - base.cx).abs() < f32::EPSILON);
    }

    #[test]
    fn sparkles_ring_the_ball() {
        let ball = BallGeometry {
            cx: 100.0,
            cy: 100.0,
            radius: 50.0,
        };
        let points = ball.sparkle_points();
        assert_eq!(points.len(), SPARKLE_COUNT);
        for (x, y) in points {
            let d = ((x - 100.0).powi(2) + (y - 100.0).powi(2)).sqrt();
            assert!((d - 57.5).abs() < 1e-3);
        }
    }

    #[test]
    fn client_points_map_to_zone() {
        let rect = ClientRect {
            left: 10.0,
            top: 20.0,
            width: 800.0,
            height: 600.0,
        };
        // Canvas shown at 2x its backing size.
        let (x, y) = rect.to_zone(&zone(), 410.0, 320.0);
        assert!((x - 200.0).abs() < 1e-4);
        assert!((y - 150.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_rect_uses_unit_scale() {
        let rect = ClientRect {
            left: 5.0,
            top: 5.0,
            width: 0.0,
            height: 0.0,
        };
        let (x, y) = rect.to_zone(&zone(), 15.0, 25.0);
        assert!((x - 10.0).abs() < f32::EPSILON);
        assert!((y - 20.0).abs() < f32::EPSILON);
    }
}
