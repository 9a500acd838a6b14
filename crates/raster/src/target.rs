//! `SoftwareTarget`: a CPU implementation of the frame steps.
//!
//! Triangles are transformed by the bound projection, mapped to window
//! space through the viewport, and filled by sampling pixel centers with
//! edge functions. Colors and depth are interpolated barycentrically (the
//! projection is affine, so this matches the GPU's perspective-correct
//! interpolation exactly).

use glam::{Mat4, Vec3, Vec4};
use glyph_render_core::{FrameTarget, RenderError, VertexData, Viewport};

use crate::framebuffer::Framebuffer;

/// Renders `VertexData` into an owned [`Framebuffer`].
pub struct SoftwareTarget<'a> {
    data: &'a VertexData,
    framebuffer: Framebuffer,
    viewport: Viewport,
    projection: Mat4,
    attributes_bound: bool,
    depth_test: bool,
}

/// A vertex after projection and viewport mapping.
#[derive(Debug, Clone, Copy)]
struct WindowVertex {
    /// x, y in pixels (y up); z in [0, 1].
    pos: Vec3,
    color: Vec4,
}

impl<'a> SoftwareTarget<'a> {
    /// Creates a target with a `width` x `height` framebuffer.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidDimensions` if either dimension is zero.
    pub fn new(
        data: &'a VertexData,
        width: u32,
        height: u32,
        depth_test: bool,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            data,
            framebuffer: Framebuffer::new(width, height)?,
            viewport: Viewport::new(width, height),
            projection: Mat4::IDENTITY,
            attributes_bound: false,
            depth_test,
        })
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    fn to_window(&self, position: Vec3, color: Vec4) -> WindowVertex {
        let clip = self.projection * position.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        let vp = self.viewport;
        WindowVertex {
            pos: Vec3::new(
                (ndc.x + 1.0) * 0.5 * vp.width as f32,
                (ndc.y + 1.0) * 0.5 * vp.height as f32,
                (ndc.z + 1.0) * 0.5,
            ),
            color,
        }
    }

    fn fill_triangle(&mut self, tri: [WindowVertex; 3]) {
        let [a, b, c] = tri;
        let area = edge(a.pos, b.pos, c.pos);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        // Bounding box clamped to the viewport and to the framebuffer; a
        // viewport larger than the framebuffer keeps its scale and is clipped.
        let vp = self.viewport;
        let max_w = vp.width.min(self.framebuffer.width());
        let max_h = vp.height.min(self.framebuffer.height());
        let min_x = a.pos.x.min(b.pos.x).min(c.pos.x).floor().max(0.0) as u32;
        let min_y = a.pos.y.min(b.pos.y).min(c.pos.y).floor().max(0.0) as u32;
        let max_x = (a.pos.x.max(b.pos.x).max(c.pos.x).ceil() as u32).min(max_w);
        let max_y = (a.pos.y.max(b.pos.y).max(c.pos.y).ceil() as u32).min(max_h);

        for y in min_y..max_y {
            for x in min_x..max_x {
                let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);
                // Normalizing by the signed area makes both windings inside-positive.
                let w0 = edge(b.pos, c.pos, p) / area;
                let w1 = edge(c.pos, a.pos, p) / area;
                let w2 = edge(a.pos, b.pos, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let z = w0 * a.pos.z + w1 * b.pos.z + w2 * c.pos.z;
                if !(0.0..=1.0).contains(&z) {
                    continue;
                }
                let color = a.color * w0 + b.color * w1 + c.color * w2;
                self.framebuffer
                    .write_fragment(x, y, z, color.to_array(), self.depth_test);
            }
        }
    }
}

/// Twice the signed area of (a, b, p) in the xy plane.
fn edge(a: Vec3, b: Vec3, p: Vec3) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

impl FrameTarget for SoftwareTarget<'_> {
    fn vertex_count(&self) -> usize {
        self.data.vertex_count()
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.framebuffer.clear(color);
    }

    fn bind_vertex_attributes(&mut self) {
        self.attributes_bound = true;
    }

    fn set_projection(&mut self, projection: &Mat4) {
        self.projection = *projection;
    }

    fn draw_triangles(&mut self, first: usize, count: usize) {
        if !self.attributes_bound {
            log::warn!("draw issued before vertex attributes were bound; skipped");
            return;
        }

        let end = (first + count).min(self.data.vertex_count());
        let mut start = first;
        while start + 3 <= end {
            let mut tri = [WindowVertex {
                pos: Vec3::ZERO,
                color: Vec4::ZERO,
            }; 3];
            for (slot, index) in tri.iter_mut().zip(start..start + 3) {
                if let Some(v) = self.data.vertex(index) {
                    *slot = self.to_window(v.position, v.color);
                }
            }
            self.fill_triangle(tri);
            start += 3;
        }
    }
}
