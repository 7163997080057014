//! # Ball Decorator WASM Application
//!
//! This crate provides the WASM bindings for the ball decorator,
//! enabling it to run in web browsers.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web ball-app
//! ```
//!
//! Then mount it on a canvas and forward the page's events:
//! ```javascript
//! import init, { BallDecoratorApp } from './pkg/ball_app.js';
//!
//! await init();
//! const app = new BallDecoratorApp('decorationZone');
//!
//! zone.addEventListener('drop', (e) => app.handleDrop(dragged.dataset.type, e.clientX, e.clientY));
//! zone.addEventListener('mousedown', (e) => app.handlePointerDown(e.clientX, e.clientY));
//! document.addEventListener('mousemove', (e) => app.handlePointerMove(e.clientX, e.clientY));
//! document.addEventListener('mouseup', () => app.handlePointerUp());
//! document.addEventListener('keydown', (e) => app.handleKey(e.key));
//! exportBtn.addEventListener('click', () => app.export());
//!
//! // On teardown:
//! app.unmount();
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod painter;
pub mod view;

use ball_core::{
    ConfirmPrompt, DecorError, DecorationManager, DecoratorConfig, InputEvent, EXPORT_FILE_NAME,
};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement, Url};

use crate::painter::DomPainter;
use crate::view::ClientRect;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
    tracing::info!("Ball decorator WASM initialized");
}

/// Errors raised while mounting or driving the app.
#[derive(Debug, Error)]
pub enum AppError {
    /// No global `window`.
    #[error("No window object")]
    NoWindow,

    /// No `document` on the window.
    #[error("No document object")]
    NoDocument,

    /// The mount target does not exist.
    #[error("Canvas element '{0}' not found")]
    CanvasNotFound(String),

    /// The mount target is not a canvas.
    #[error("Element is not a canvas")]
    NotACanvas,

    /// The canvas has no 2D context.
    #[error("2D context not available")]
    NoContext,

    /// Decorator configuration or operation failed.
    #[error(transparent)]
    Decor(#[from] DecorError),
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Blocking `window.confirm` prompt.
struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

fn document() -> Result<Document, AppError> {
    web_sys::window()
        .ok_or(AppError::NoWindow)?
        .document()
        .ok_or(AppError::NoDocument)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, AppError> {
    canvas
        .get_context("2d")
        .map_err(|_| AppError::NoContext)?
        .ok_or(AppError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| AppError::NoContext)
}

/// Build the mount configuration: optional JSON overrides, with the zone
/// sized to the canvas backing store.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the result does not validate.
#[allow(clippy::cast_precision_loss)]
pub fn mount_config(
    config_json: Option<&str>,
    canvas_width: u32,
    canvas_height: u32,
) -> Result<DecoratorConfig, AppError> {
    let mut config = match config_json {
        Some(json) => serde_json::from_str(json).map_err(DecorError::from)?,
        None => DecoratorConfig::default(),
    };
    config.zone_width = canvas_width as f32;
    config.zone_height = canvas_height as f32;
    config.validate()?;
    Ok(config)
}

/// Trigger a browser download of `blob`.
fn download_blob(blob: &Blob, file_name: &str) -> Result<(), JsValue> {
    let url = Url::create_object_url_with_blob(blob)?;
    let anchor = document()?
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| JsValue::from_str("Failed to create download link"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// The decorator bound to one mounted canvas.
///
/// Construct it when the view mounts and call `unmount` (or `free`) when it
/// goes away; it holds no global state.
#[wasm_bindgen]
pub struct BallDecoratorApp {
    manager: DecorationManager,
    painter: DomPainter,
}

#[wasm_bindgen]
impl BallDecoratorApp {
    /// Mount on the canvas with the given element ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is missing, has no 2D context, or the
    /// configuration JSON is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<BallDecoratorApp, JsValue> {
        let canvas = document()?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| AppError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::NotACanvas)?;
        let ctx = context_2d(&canvas)?;

        let config = mount_config(config_json.as_deref(), canvas.width(), canvas.height())?;
        let manager = DecorationManager::new(config, BrowserConfirm).map_err(AppError::from)?;

        let app = Self {
            manager,
            painter: DomPainter::new(canvas, ctx),
        };
        app.render();
        tracing::info!("Ball decorator mounted on #{canvas_id}");
        Ok(app)
    }

    /// Repaint the live view.
    pub fn render(&self) {
        if let Err(err) = self.painter.paint_view(&self.manager) {
            tracing::error!("Render error: {:?}", err);
        }
    }

    /// Tear the view down. The instance is consumed.
    pub fn unmount(self) {
        self.painter.clear();
        tracing::info!(
            "Ball decorator unmounted with {} decorations",
            self.manager.len()
        );
    }

    fn to_zone(&self, client_x: f64, client_y: f64) -> (f32, f32) {
        let rect = self.painter.canvas().get_bounding_client_rect();
        ClientRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
        .to_zone(self.manager.zone(), client_x, client_y)
    }

    fn dispatch(&mut self, event: &InputEvent) -> bool {
        let outcome = self.manager.handle_event(event);
        let changed = outcome.is_visible_change();
        if changed {
            self.render();
        }
        changed
    }

    /// A palette item was clicked: place it at the zone centre.
    #[wasm_bindgen(js_name = handlePaletteClick)]
    pub fn handle_palette_click(&mut self, kind: &str) -> bool {
        self.dispatch(&InputEvent::PaletteClick {
            kind: kind.to_string(),
        })
    }

    /// A palette item was dropped at the given client position.
    #[wasm_bindgen(js_name = handleDrop)]
    pub fn handle_drop(&mut self, kind: &str, client_x: f64, client_y: f64) -> bool {
        let (x, y) = self.to_zone(client_x, client_y);
        self.dispatch(&InputEvent::PaletteDrop {
            kind: kind.to_string(),
            x,
            y,
        })
    }

    /// Mouse button pressed over the zone.
    #[wasm_bindgen(js_name = handlePointerDown)]
    pub fn handle_pointer_down(&mut self, client_x: f64, client_y: f64) -> bool {
        let (x, y) = self.to_zone(client_x, client_y);
        self.dispatch(&InputEvent::PointerDown { x, y })
    }

    /// Mouse moved anywhere on the page.
    #[wasm_bindgen(js_name = handlePointerMove)]
    pub fn handle_pointer_move(&mut self, client_x: f64, client_y: f64) -> bool {
        let (x, y) = self.to_zone(client_x, client_y);
        self.dispatch(&InputEvent::PointerMove { x, y })
    }

    /// Mouse button released anywhere on the page.
    #[wasm_bindgen(js_name = handlePointerUp)]
    pub fn handle_pointer_up(&mut self) -> bool {
        self.dispatch(&InputEvent::PointerUp)
    }

    /// Single click in the zone: select, or deselect on empty space.
    #[wasm_bindgen(js_name = handleClick)]
    pub fn handle_click(&mut self, client_x: f64, client_y: f64) -> bool {
        let (x, y) = self.to_zone(client_x, client_y);
        self.dispatch(&InputEvent::Click { x, y })
    }

    /// Double click in the zone: remove the decoration under the pointer.
    #[wasm_bindgen(js_name = handleDoubleClick)]
    pub fn handle_double_click(&mut self, client_x: f64, client_y: f64) -> bool {
        let (x, y) = self.to_zone(client_x, client_y);
        self.dispatch(&InputEvent::DoubleClick { x, y })
    }

    /// Key pressed anywhere on the page.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.dispatch(&InputEvent::Key {
            key: key.to_string(),
        })
    }

    /// Set the ball scale and return the percentage label.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is out of range.
    #[wasm_bindgen(js_name = setScale)]
    pub fn set_scale(&mut self, factor: f32) -> Result<String, JsValue> {
        self.manager.set_scale(factor).map_err(AppError::from)?;
        self.render();
        Ok(self.manager.scale_label())
    }

    /// Current scale as a percentage label.
    #[wasm_bindgen(js_name = scaleLabel)]
    #[must_use]
    pub fn scale_label(&self) -> String {
        self.manager.scale_label()
    }

    /// Flip the sparkle effect and return the new state.
    #[wasm_bindgen(js_name = toggleSparkle)]
    pub fn toggle_sparkle(&mut self) -> bool {
        let enabled = self.manager.toggle_sparkle();
        self.render();
        enabled
    }

    /// Turn the sparkle effect on or off.
    #[wasm_bindgen(js_name = setSparkle)]
    pub fn set_sparkle(&mut self, enabled: bool) {
        self.manager.set_sparkle(enabled);
        self.render();
    }

    /// Replace the year label on the ball.
    #[wasm_bindgen(js_name = setYearLabel)]
    pub fn set_year_label(&mut self, label: &str) {
        self.manager.set_year_label(label);
        self.render();
    }

    /// Remove every decoration after the user confirms.
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) -> bool {
        let cleared = self.manager.clear_all();
        if cleared {
            self.render();
        }
        cleared
    }

    /// Resize the canvas and zone, re-clamping decorations.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is degenerate.
    #[allow(clippy::cast_precision_loss)]
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.manager
            .resize_zone(width as f32, height as f32)
            .map_err(AppError::from)?;
        self.painter.resize(width, height);
        self.render();
        Ok(())
    }

    /// Number of placed decorations.
    #[wasm_bindgen(js_name = decorationCount)]
    #[must_use]
    pub fn decoration_count(&self) -> usize {
        self.manager.len()
    }

    /// Placed decorations as JSON, in z-order.
    #[wasm_bindgen(js_name = getDecorationsJson)]
    #[must_use]
    pub fn get_decorations_json(&self) -> String {
        serde_json::to_string(self.manager.decorations()).unwrap_or_default()
    }

    /// The export layout as JSON.
    #[wasm_bindgen(js_name = getExportLayoutJson)]
    #[must_use]
    pub fn get_export_layout_json(&self) -> String {
        serde_json::to_string(&self.manager.export_layout()).unwrap_or_default()
    }

    /// Paint the export raster offscreen and download it as a PNG.
    ///
    /// Failures anywhere along the way are logged and no file is produced.
    pub fn export(&self) {
        report_export(self.start_export());
    }

    fn start_export(&self) -> Result<(), JsValue> {
        let layout = self.manager.export_layout();
        let canvas = document()?
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::NotACanvas)?;
        let ctx = context_2d(&canvas)?;
        let painter = DomPainter::new(canvas, ctx);
        painter.paint_export(&layout)?;

        let glyphs = layout.glyph_count();
        let on_blob = Closure::once_into_js(move |blob: Option<Blob>| match blob {
            Some(blob) => match download_blob(&blob, EXPORT_FILE_NAME) {
                Ok(()) => tracing::info!("Exported {glyphs} decorations to {EXPORT_FILE_NAME}"),
                Err(err) => tracing::error!("Export download failed: {:?}", err),
            },
            None => tracing::error!("Export produced no image data"),
        });
        painter
            .canvas()
            .to_blob(on_blob.unchecked_ref::<js_sys::Function>())?;
        Ok(())
    }
}

/// Log a failed export start. Returns `true` if encoding was handed off.
fn report_export<E: std::fmt::Debug>(started: Result<(), E>) -> bool {
    match started {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("Export failed: {:?}", err);
            false
        }
    }
}
