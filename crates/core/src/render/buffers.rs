//! Static vertex buffers for the glyph geometry.

use crate::error::RenderError;
use crate::vertex::{VertexData, COLOR_ARITY, POSITION_ARITY};

/// A device buffer of tightly packed `f32` items.
#[derive(Debug, Clone, Copy)]
pub struct VertexBuffer {
    buffer: glow::Buffer,
    /// Floats per vertex.
    item_size: usize,
    /// Vertices stored.
    item_count: usize,
}

impl VertexBuffer {
    /// Allocates a `STATIC_DRAW` array buffer holding `data`.
    ///
    /// Leaves the new buffer bound to `ARRAY_BUFFER`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::BufferAllocation` if the device cannot create
    /// the buffer object.
    #[allow(unsafe_code)]
    pub fn upload(gl: &glow::Context, data: &[f32], item_size: usize) -> Result<Self, RenderError> {
        use glow::HasContext;

        // SAFETY: glow wraps raw GL calls as unsafe. The byte slice is a
        // reinterpretation of a live &[f32] and outlives the upload call.
        let buffer = unsafe { gl.create_buffer().map_err(RenderError::BufferAllocation)? };
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
        }

        Ok(Self {
            buffer,
            item_size,
            item_count: data.len() / item_size,
        })
    }

    pub fn buffer(&self) -> glow::Buffer {
        self.buffer
    }

    pub fn item_size(&self) -> usize {
        self.item_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Binds this buffer and points attribute `slot` at it (float items,
    /// not normalized, stride 0, offset 0).
    #[allow(unsafe_code)]
    pub fn bind_to(&self, gl: &glow::Context, slot: u32) {
        use glow::HasContext;

        // SAFETY: self.buffer is live; item_size is 3 or 4, within the
        // 1..=4 range GL accepts for attribute sizes.
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.buffer));
            gl.vertex_attrib_pointer_f32(slot, self.item_size as i32, glow::FLOAT, false, 0, 0);
        }
    }
}

/// Position and color buffers uploaded from one [`VertexData`].
#[derive(Debug, Clone, Copy)]
pub struct GeometryBuffers {
    position: VertexBuffer,
    color: VertexBuffer,
}

impl GeometryBuffers {
    /// Uploads both arrays of `data`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::BufferAllocation` if either buffer cannot be
    /// created; a position buffer created before the failure is deleted.
    #[allow(unsafe_code)]
    pub fn upload(gl: &glow::Context, data: &VertexData) -> Result<Self, RenderError> {
        use glow::HasContext;

        let position = VertexBuffer::upload(gl, data.positions(), POSITION_ARITY)?;
        let color = match VertexBuffer::upload(gl, data.colors(), COLOR_ARITY) {
            Ok(color) => color,
            Err(e) => {
                // SAFETY: position.buffer was created just above.
                unsafe { gl.delete_buffer(position.buffer) };
                return Err(e);
            }
        };

        log::debug!(
            "uploaded {} vertices ({} position floats, {} color floats)",
            data.vertex_count(),
            data.positions().len(),
            data.colors().len()
        );
        Ok(Self { position, color })
    }

    pub fn position(&self) -> &VertexBuffer {
        &self.position
    }

    pub fn color(&self) -> &VertexBuffer {
        &self.color
    }

    /// Vertex count shared by both buffers.
    pub fn vertex_count(&self) -> usize {
        self.position.item_count
    }

    /// Deletes both buffers.
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: both handles were created in upload().
        unsafe {
            gl.delete_buffer(self.position.buffer);
            gl.delete_buffer(self.color.buffer);
        }
    }
}
