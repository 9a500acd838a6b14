#![deny(unsafe_code)]
//! WASM bindings for glyph-render.
//!
//! Exposes `startup(canvas_id)`, which acquires a WebGL context from the
//! canvas, builds a `RendererSession` through `glow`, and draws the glyph
//! once. Any setup failure is shown with a blocking `alert` and returned
//! to the caller as a JS error.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::startup;

use glyph_render_core::RenderError;

/// Most verbose level forwarded to the browser console. Setup milestones
/// logged at `debug` stay out of the console; failures reach it.
pub const CONSOLE_LOG_LEVEL: log::Level = log::Level::Info;

/// Message shown to the user when setup fails.
pub fn failure_message(error: &RenderError) -> String {
    match error {
        RenderError::ContextUnavailable { .. } => "Failed to create WebGL context!".to_string(),
        other => other.to_string(),
    }
}
