//! Browser glue: canvas lookup, context probing, alert-on-failure.

use glyph_render_core::render::RendererSession;
use glyph_render_core::{acquire_context, ContextKind, RenderConfig, RenderError, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

use crate::{failure_message, CONSOLE_LOG_LEVEL};

/// A canvas element viewed as a [`Surface`].
struct CanvasSurface(HtmlCanvasElement);

impl Surface for CanvasSurface {
    type Context = WebGlRenderingContext;

    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn try_context(&self, kind: ContextKind) -> Option<WebGlRenderingContext> {
        // getContext may throw; a throw counts as "unavailable".
        self.0
            .get_context(kind.as_str())
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<WebGlRenderingContext>().ok())
    }
}

fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{canvas_id}'")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("element '{canvas_id}' is not a canvas")))
}

fn setup(canvas: HtmlCanvasElement) -> Result<RendererSession, RenderError> {
    let surface = CanvasSurface(canvas);
    let context = acquire_context(&surface)?.map(glow::Context::from_webgl1_context);
    let config = RenderConfig {
        width: surface.width(),
        height: surface.height(),
        ..RenderConfig::default()
    };
    RendererSession::glyph(context, config)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        // Nothing more to do if the alert itself fails.
        let _ = window.alert_with_message(message);
    }
}

fn init_logging() {
    // A second startup on the same page finds the logger already set.
    let _ = console_log::init_with_level(CONSOLE_LOG_LEVEL);
}

/// Draws the glyph on the canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn startup(canvas_id: &str) -> Result<(), JsValue> {
    init_logging();
    let canvas = find_canvas(canvas_id)?;
    match setup(canvas) {
        Ok(mut session) => {
            session.render_frame();
            Ok(())
        }
        Err(e) => {
            let message = failure_message(&e);
            log::error!("{e}");
            alert(&message);
            Err(JsValue::from_str(&message))
        }
    }
}
