//! PNG output of a [`Framebuffer`].
//!
//! Feature-gated behind `png` (default on) so that builds which only need
//! the in-memory framebuffer do not pull in the `image` crate.

use std::path::Path;

use glyph_render_core::RenderError;

use crate::framebuffer::Framebuffer;

/// Writes the framebuffer as an 8-bit RGBA PNG.
///
/// # Errors
///
/// Returns `RenderError::Io` if encoding or writing fails.
pub fn write_png(framebuffer: &Framebuffer, path: &Path) -> Result<(), RenderError> {
    let img = image::RgbaImage::from_raw(
        framebuffer.width(),
        framebuffer.height(),
        framebuffer.to_rgba8(),
    )
    .ok_or_else(|| RenderError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| RenderError::Io(e.to_string()))?;
    log::debug!(
        "wrote {}x{} snapshot to {}",
        framebuffer.width(),
        framebuffer.height(),
        path.display()
    );
    Ok(())
}
