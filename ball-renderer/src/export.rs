//! Decorated ball export to image formats.
//!
//! Renders an [`ExportLayout`] to SVG, then rasterizes it through the
//! usvg/resvg/tiny-skia pipeline for PNG and JPEG output.

use std::fmt::Write;

use ball_core::ExportLayout;

use crate::error::{RenderError, RenderResult};

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
    /// SVG vector graphics (returns the SVG XML string as UTF-8 bytes).
    Svg,
}

impl ExportFormat {
    /// Download file name for this format.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Png => ball_core::EXPORT_FILE_NAME,
            Self::Jpeg => "newyear-ball.jpg",
            Self::Svg => "newyear-ball.svg",
        }
    }

    /// MIME type of the encoded bytes.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// Configuration for export encoding.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// JPEG quality 1-100 (default: 85).
    pub jpeg_quality: u8,
    /// Load system fonts so glyphs can be rasterized.
    pub load_system_fonts: bool,
    /// Font stack used for glyph text.
    pub font_family: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 85,
            load_system_fonts: true,
            font_family: "Noto Color Emoji, Apple Color Emoji, Segoe UI Emoji, sans-serif"
                .to_string(),
        }
    }
}

/// Exports a decorated ball to image formats.
pub struct BallExporter {
    config: ExportConfig,
}

impl BallExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Export a layout to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout cannot be rendered or encoded.
    pub fn export(&self, layout: &ExportLayout, format: ExportFormat) -> RenderResult<Vec<u8>> {
        let bytes = match format {
            #[cfg(feature = "export")]
            ExportFormat::Png => self.render_to_png(layout)?,
            #[cfg(feature = "export")]
            ExportFormat::Jpeg => self.render_to_jpeg(layout)?,
            #[cfg(not(feature = "export"))]
            ExportFormat::Png | ExportFormat::Jpeg => {
                return Err(RenderError::Export(format!(
                    "{format:?} export requires the `export` feature"
                )));
            }
            ExportFormat::Svg => self.render_to_svg(layout)?.into_bytes(),
        };
        tracing::info!(
            "Exported {} glyphs as {} ({} bytes)",
            layout.glyph_count(),
            format.file_name(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Export the layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout has a zero-sized raster.
    pub fn render_to_svg(&self, layout: &ExportLayout) -> RenderResult<String> {
        if layout.size == 0 {
            return Err(RenderError::InvalidLayout(
                "raster size must be non-zero".to_string(),
            ));
        }
        let size = layout.size;

        let mut svg = String::with_capacity(1024 + layout.glyphs.len() * 160);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">",
        );

        let _ = write!(
            svg,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            escape_xml(&layout.background),
        );

        let ball = &layout.ball;
        let _ = write!(
            svg,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            ball.cx,
            ball.cy,
            ball.radius,
            escape_xml(&ball.color),
        );

        let family = escape_xml(&self.config.font_family);
        for glyph in &layout.glyphs {
            let _ = write!(
                svg,
                "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{family}\">{}</text>",
                glyph.x,
                glyph.y,
                glyph.font_size,
                escape_xml(&glyph.glyph),
            );
        }

        svg.push_str("</svg>");
        Ok(svg)
    }

    /// Export the layout to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails.
    #[cfg(feature = "export")]
    pub fn render_to_png(&self, layout: &ExportLayout) -> RenderResult<Vec<u8>> {
        let pixmap = self.rasterize(layout)?;

        pixmap
            .encode_png()
            .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))
    }

    /// Export the layout to JPEG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails.
    #[cfg(feature = "export")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render_to_jpeg(&self, layout: &ExportLayout) -> RenderResult<Vec<u8>> {
        use image::ImageEncoder;

        let pixmap = self.rasterize(layout)?;

        let (width, height) = (pixmap.width(), pixmap.height());
        let bg = parse_hex_rgb(&layout.background).unwrap_or([0, 0, 0]);
        let mut rgb_data = Vec::with_capacity((width * height * 3) as usize);
        for pixel in pixmap.data().chunks_exact(4) {
            // Pixmap data is premultiplied, so only the background needs weighting.
            let inv = 1.0 - f32::from(pixel[3]) / 255.0;
            for channel in 0..3 {
                let value = f32::from(bg[channel]).mul_add(inv, f32::from(pixel[channel]));
                rgb_data.push(value.round().min(255.0) as u8);
            }
        }

        let mut buf = std::io::Cursor::new(Vec::new());
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, self.config.jpeg_quality);
        encoder
            .write_image(&rgb_data, width, height, image::ColorType::Rgb8.into())
            .map_err(|e| RenderError::Export(format!("JPEG encoding failed: {e}")))?;

        Ok(buf.into_inner())
    }

    /// Rasterize the layout to a tiny-skia Pixmap of exactly `size x size`.
    #[cfg(feature = "export")]
    fn rasterize(&self, layout: &ExportLayout) -> RenderResult<tiny_skia::Pixmap> {
        let svg_string = self.render_to_svg(layout)?;

        let mut opt = usvg::Options::default();
        if self.config.load_system_fonts {
            opt.fontdb_mut().load_system_fonts();
        }
        let tree = usvg::Tree::from_str(&svg_string, &opt)
            .map_err(|e| RenderError::Export(format!("SVG parsing failed: {e}")))?;

        let mut pixmap = tiny_skia::Pixmap::new(layout.size, layout.size)
            .ok_or_else(|| RenderError::Export("Failed to create pixmap".to_string()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

/// Parse `#rrggbb` or `#rgb` into RGB bytes.
#[cfg_attr(not(feature = "export"), allow(dead_code))]
fn parse_hex_rgb(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some([r, g, b])
        }
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(hex.chars()) {
                let v = u8::try_from(c.to_digit(16)?).ok()?;
                *slot = v * 17;
            }
            Some(out)
        }
        _ => None,
    }
}

/// Escape special XML characters.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
