//! Color + depth storage for the CPU frame target.

use glyph_render_core::RenderError;

/// Depth value written by a clear (the far plane in window space).
pub const CLEAR_DEPTH: f32 = 1.0;

/// Largest framebuffer accepted, in pixels (8192 x 8192).
pub const MAX_PIXELS: usize = 8192 * 8192;

/// An RGBA float color buffer with a matching depth buffer.
///
/// Rows are stored top to bottom (image order). Window coordinates used by
/// the rasterizer have y pointing up, so row `height - 1 - y` holds window
/// row `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: Vec<[f32; 4]>,
    depth: Vec<f32>,
}

impl Framebuffer {
    /// Allocates a framebuffer of transparent black at the far depth.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidDimensions` if either dimension is zero,
    /// if `width * height` overflows `usize` or exceeds [`MAX_PIXELS`], or
    /// if the buffers cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len <= MAX_PIXELS)
            .ok_or(RenderError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            color: filled(len, [0.0; 4])?,
            depth: filled(len, CLEAR_DEPTH)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills the whole color buffer with `color` and depth with the far plane.
    pub fn clear(&mut self, color: [f32; 4]) {
        self.color.fill(color);
        self.depth.fill(CLEAR_DEPTH);
    }

    /// Color at image coordinates (`x` right, `y` down).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.image_index(x, y).map(|i| self.color[i])
    }

    /// Depth at image coordinates (`x` right, `y` down).
    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        self.image_index(x, y).map(|i| self.depth[i])
    }

    pub fn colors(&self) -> &[[f32; 4]] {
        &self.color
    }

    /// Writes a fragment at window coordinates (`y` up). With `depth_test`
    /// the fragment only lands if `z` is strictly nearer than the stored
    /// depth (`LESS`). Returns whether it was written.
    pub fn write_fragment(&mut self, x: u32, y: u32, z: f32, color: [f32; 4], depth_test: bool) -> bool {
        let Some(i) = self.window_index(x, y) else {
            return false;
        };
        if depth_test && z >= self.depth[i] {
            return false;
        }
        self.color[i] = color;
        self.depth[i] = z;
        true
    }

    /// Quantizes to RGBA8 in image order, `width * height * 4` bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.color
            .iter()
            .flat_map(|c| c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8))
            .collect()
    }

    fn image_index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    fn window_index(&self, x: u32, y: u32) -> Option<usize> {
        if y >= self.height {
            return None;
        }
        self.image_index(x, self.height - 1 - y)
    }
}

fn filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, RenderError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| RenderError::InvalidDimensions)?;
    buf.resize(len, value);
    Ok(buf)
}
