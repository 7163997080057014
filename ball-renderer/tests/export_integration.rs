//! Integration tests for ball export (ball-renderer).
//!
//! Drives a real decoration manager and checks the encoded rasters:
//! dimensions, background and ball pixels, many-glyph scenes and the
//! independence of the export from the live view settings.

#![cfg(feature = "export")]

use ball_core::{DecorationKind, DecorationManager, DecoratorConfig, FixedAnswer};
use ball_renderer::{BallExporter, ExportConfig, ExportFormat};

fn exporter() -> BallExporter {
    BallExporter::new(ExportConfig {
        load_system_fonts: false,
        ..ExportConfig::default()
    })
}

fn manager() -> DecorationManager {
    DecorationManager::with_defaults(FixedAnswer::YES)
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode").to_rgba8()
}

// ==========================================================================
// Raster dimensions
// ==========================================================================

#[test]
fn test_png_is_fixed_square() {
    let mut m = manager();
    m.place(DecorationKind::Star, 100.0, 100.0);

    let png = exporter()
        .export(&m.export_layout(), ExportFormat::Png)
        .expect("png");
    let img = decode(&png);
    assert_eq!(img.dimensions(), (800, 800));
}

#[test]
fn test_scale_does_not_change_raster_size() {
    let mut m = manager();
    m.place(DecorationKind::Balloon, 50.0, 60.0);
    m.set_scale(1.5).expect("scale");
    m.set_sparkle(true);

    let png = exporter()
        .export(&m.export_layout(), ExportFormat::Png)
        .expect("png");
    assert_eq!(decode(&png).dimensions(), (800, 800));

    let jpeg = exporter()
        .export(&m.export_layout(), ExportFormat::Jpeg)
        .expect("jpeg");
    assert_eq!(decode(&jpeg).dimensions(), (800, 800));
}

#[test]
fn test_custom_export_size() {
    let config = DecoratorConfig {
        export_size: 256,
        ball_radius: 64.0,
        ..DecoratorConfig::default()
    };
    let m = DecorationManager::new(config, FixedAnswer::YES).expect("manager");

    let png = exporter()
        .export(&m.export_layout(), ExportFormat::Png)
        .expect("png");
    assert_eq!(decode(&png).dimensions(), (256, 256));
}

// ==========================================================================
// Pixel content
// ==========================================================================

#[test]
fn test_background_and_ball_pixels() {
    let m = manager();
    let png = exporter()
        .export(&m.export_layout(), ExportFormat::Png)
        .expect("png");
    let img = decode(&png);

    // Corner: background #1a1a2e
    assert_eq!(img.get_pixel(5, 5).0, [26, 26, 46, 255]);
    // Centre: ball #FF4500
    assert_eq!(img.get_pixel(400, 400).0, [255, 69, 0, 255]);
    // Just outside the ball's radius on the horizontal axis
    assert_eq!(img.get_pixel(400 + 210, 400).0, [26, 26, 46, 255]);
}

#[test]
fn test_jpeg_background_is_close() {
    let m = manager();
    let jpeg = exporter()
        .export(&m.export_layout(), ExportFormat::Jpeg)
        .expect("jpeg");
    let img = decode(&jpeg);
    let [r, g, b, _] = img.get_pixel(5, 5).0;
    // Lossy codec: allow a small drift.
    assert!(r.abs_diff(26) <= 6, "r = {r}");
    assert!(g.abs_diff(26) <= 6, "g = {g}");
    assert!(b.abs_diff(46) <= 6, "b = {b}");
}

// ==========================================================================
// Many glyphs
// ==========================================================================

#[test]
fn test_every_kind_appears_in_svg() {
    let mut m = manager();
    for (i, kind) in DecorationKind::ALL.into_iter().enumerate() {
        let offset = f32::from(u8::try_from(i).expect("small index")) * 20.0;
        m.place(kind, offset, offset);
    }

    let svg_bytes = exporter()
        .export(&m.export_layout(), ExportFormat::Svg)
        .expect("svg");
    let svg = String::from_utf8(svg_bytes).expect("utf8");
    for kind in DecorationKind::ALL {
        assert!(svg.contains(kind.glyph()), "missing {kind}");
    }
    assert_eq!(svg.matches("<text").count(), DecorationKind::ALL.len());
}

#[test]
fn test_cleared_scene_exports_only_ball() {
    let mut m = manager();
    for _ in 0..10 {
        m.place_at_center(DecorationKind::Firework);
    }
    assert!(m.clear_all());

    let svg = exporter().render_to_svg(&m.export_layout()).expect("svg");
    assert!(!svg.contains("<text"));
    assert!(svg.contains("<circle"));
}

#[test]
fn test_layout_json_roundtrip_exports_same_svg() {
    let mut m = manager();
    m.place(DecorationKind::Gift, 120.0, 40.0);
    let layout = m.export_layout();

    let json = serde_json::to_string(&layout).expect("serialize");
    let restored = serde_json::from_str(&json).expect("deserialize");

    let exporter = exporter();
    assert_eq!(
        exporter.render_to_svg(&layout).expect("svg"),
        exporter.render_to_svg(&restored).expect("svg")
    );
}
