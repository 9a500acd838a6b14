#![deny(unsafe_code)]
//! CPU reference rendering for glyph-render.
//!
//! [`SoftwareTarget`] implements the same `FrameTarget` steps as the GL
//! session, so the CLI can produce the frame without a GPU and tests can
//! compare framebuffers bit for bit.

pub mod framebuffer;
pub mod target;

#[cfg(feature = "png")]
pub mod snapshot;

pub use framebuffer::Framebuffer;
pub use target::SoftwareTarget;

use glyph_render_core::{render_frame, RenderConfig, RenderError, VertexData, Viewport};

/// Renders `data` once at the configured size and returns the framebuffer.
///
/// # Errors
///
/// Returns `RenderError::InvalidDimensions` if the configured size is zero
/// or too large to allocate.
pub fn render(data: &VertexData, config: &RenderConfig) -> Result<Framebuffer, RenderError> {
    let mut target = SoftwareTarget::new(data, config.width, config.height, config.depth_test)?;
    render_frame(&mut target, Viewport::new(config.width, config.height), config);
    Ok(target.into_framebuffer())
}

/// Renders the built-in "I" glyph.
///
/// # Errors
///
/// See [`render`].
pub fn render_glyph(config: &RenderConfig) -> Result<Framebuffer, RenderError> {
    render(&VertexData::glyph(), config)
}
