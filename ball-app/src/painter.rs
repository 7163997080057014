//! 2D canvas painting for the live view and the export raster.

use std::f64::consts::TAU;

use ball_core::{Decoration, DecorationManager, ExportLayout};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::view::BallGeometry;

const LIVE_BACKGROUND: &str = "#1a1a2e";
const SPARKLE_GLOW: &str = "#ffd700";
const SELECTION_STROKE: &str = "#00d4ff";
const YEAR_TEXT_COLOR: &str = "#ffffff";
const DRAGGING_ALPHA: f64 = 0.7;

/// Paints onto one canvas element.
pub(crate) struct DomPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl DomPainter {
    pub(crate) fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub(crate) fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub(crate) fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub(crate) fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    /// Paint the interactive view: ball, year label, sparkles, decorations.
    pub(crate) fn paint_view(&self, manager: &DecorationManager) -> Result<(), JsValue> {
        let zone = manager.zone();
        let settings = manager.settings();
        let ball = BallGeometry::for_view(zone, settings);

        self.ctx.set_fill_style_str(LIVE_BACKGROUND);
        self.ctx
            .fill_rect(0.0, 0.0, f64::from(zone.width), f64::from(zone.height));

        self.ctx.save();
        if settings.sparkle() {
            self.ctx.set_shadow_color(SPARKLE_GLOW);
            self.ctx.set_shadow_blur(f64::from(ball.radius) * 0.25);
        }
        self.fill_circle(
            f64::from(ball.cx),
            f64::from(ball.cy),
            f64::from(ball.radius),
            &manager.config().ball_color,
        )?;
        self.ctx.restore();

        let year_px = (ball.radius * 0.35).max(8.0);
        self.ctx.set_fill_style_str(YEAR_TEXT_COLOR);
        self.ctx.set_font(&format!("bold {year_px}px sans-serif"));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.fill_text(
            settings.year_label(),
            f64::from(ball.cx),
            f64::from(ball.cy),
        )?;

        if settings.sparkle() {
            let sparkle_px = (ball.radius * 0.15).max(8.0);
            self.ctx.set_font(&format!("{sparkle_px}px sans-serif"));
            for (x, y) in ball.sparkle_points() {
                self.ctx.fill_text("✨", f64::from(x), f64::from(y))?;
            }
        }

        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("top");
        let item_size = zone.item_size;
        self.ctx.set_font(&format!("{}px sans-serif", item_size * 0.8));
        for decoration in manager.decorations() {
            self.paint_decoration(decoration, f64::from(item_size))?;
        }
        Ok(())
    }

    fn paint_decoration(&self, decoration: &Decoration, item_size: f64) -> Result<(), JsValue> {
        let x = f64::from(decoration.position.x);
        let y = f64::from(decoration.position.y);

        self.ctx
            .set_global_alpha(if decoration.dragging { DRAGGING_ALPHA } else { 1.0 });
        self.ctx.fill_text(decoration.glyph(), x, y)?;
        self.ctx.set_global_alpha(1.0);

        if decoration.selected {
            self.ctx.set_stroke_style_str(SELECTION_STROKE);
            self.ctx.set_line_width(2.0);
            self.ctx.stroke_rect(x - 2.0, y - 2.0, item_size + 4.0, item_size + 4.0);
        }
        Ok(())
    }

    /// Paint the fixed-size export raster, resizing the canvas to match.
    pub(crate) fn paint_export(&self, layout: &ExportLayout) -> Result<(), JsValue> {
        self.resize(layout.size, layout.size);
        let side = f64::from(layout.size);

        self.ctx.set_fill_style_str(&layout.background);
        self.ctx.fill_rect(0.0, 0.0, side, side);

        let ball = &layout.ball;
        self.fill_circle(
            f64::from(ball.cx),
            f64::from(ball.cy),
            f64::from(ball.radius),
            &ball.color,
        )?;

        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("alphabetic");
        for glyph in &layout.glyphs {
            self.ctx.set_font(&format!("{}px Arial", glyph.font_size));
            self.ctx
                .fill_text(&glyph.glyph, f64::from(glyph.x), f64::from(glyph.y))?;
        }
        Ok(())
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.arc(cx, cy, radius, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}
