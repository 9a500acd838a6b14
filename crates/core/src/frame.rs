//! The per-frame draw sequence.
//!
//! [`render_frame`] issues the same six steps against any [`FrameTarget`]:
//! the GL session, the CPU rasterizer, or a test recorder. Every call fully
//! re-executes all steps; nothing is cached between frames.

use glam::Mat4;

use crate::config::RenderConfig;
use crate::surface::Viewport;

/// Receiver of the frame steps.
///
/// This trait is **object-safe**: `&mut dyn FrameTarget` works.
pub trait FrameTarget {
    /// Number of vertices bound for drawing.
    fn vertex_count(&self) -> usize;

    /// Step 1: restrict drawing to `viewport`, anchored at the origin.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Step 2: clear color to `color` and depth to the far plane.
    fn clear(&mut self, color: [f32; 4]);

    /// Step 4: bind positions (arity 3) and colors (arity 4) to their
    /// attribute slots, tightly packed from offset 0.
    fn bind_vertex_attributes(&mut self);

    /// Step 5: upload the projection matrix to the matrix uniform.
    fn set_projection(&mut self, projection: &Mat4);

    /// Step 6: draw `count` vertices as a triangle list starting at `first`.
    fn draw_triangles(&mut self, first: usize, count: usize);
}

/// Draws one frame of the bound geometry into `target`.
pub fn render_frame(target: &mut dyn FrameTarget, viewport: Viewport, config: &RenderConfig) {
    target.set_viewport(viewport);
    target.clear(config.clear_color);

    // Recomputed every frame; the matrix is a pure function of the bounds.
    let projection = config.bounds.matrix();

    target.bind_vertex_attributes();
    target.set_projection(&projection);

    let count = target.vertex_count();
    target.draw_triangles(0, count);
}
