//! `RendererSession`: everything set up once and reused by each frame.

use glam::Mat4;

use super::buffers::GeometryBuffers;
use super::program::ShaderProgram;
use super::sources::{GLYPH_FRAGMENT_SHADER, GLYPH_VERTEX_SHADER};
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::frame::{render_frame, FrameTarget};
use crate::surface::{GraphicsContext, Viewport};
use crate::vertex::VertexData;

/// Owns the GL context, the linked program, and the uploaded geometry.
///
/// Built once at startup and passed by reference to the frame renderer;
/// there is no module-level state.
pub struct RendererSession {
    gl: glow::Context,
    viewport: Viewport,
    config: RenderConfig,
    program: ShaderProgram,
    buffers: GeometryBuffers,
}

impl RendererSession {
    /// Builds the program from the built-in sources, uploads `data`, and
    /// applies the depth-test state from `config`.
    ///
    /// # Errors
    ///
    /// Returns the first setup failure: a shader error or a buffer
    /// allocation error. The program is deleted if buffer upload fails.
    pub fn new(
        context: GraphicsContext<glow::Context>,
        data: &VertexData,
        config: RenderConfig,
    ) -> Result<Self, RenderError> {
        let (gl, viewport) = context.into_parts();

        let program = ShaderProgram::build(&gl, GLYPH_VERTEX_SHADER, GLYPH_FRAGMENT_SHADER)?;
        let buffers = match GeometryBuffers::upload(&gl, data) {
            Ok(buffers) => buffers,
            Err(e) => {
                program.destroy(&gl);
                return Err(e);
            }
        };

        apply_fixed_state(&gl, &config);

        Ok(Self {
            gl,
            viewport,
            config,
            program,
            buffers,
        })
    }

    /// Session for the built-in "I" glyph.
    ///
    /// # Errors
    ///
    /// See [`RendererSession::new`].
    pub fn glyph(
        context: GraphicsContext<glow::Context>,
        config: RenderConfig,
    ) -> Result<Self, RenderError> {
        Self::new(context, &VertexData::glyph(), config)
    }

    /// Draws one full frame. Calling it again redraws the identical frame.
    pub fn render_frame(&mut self) {
        let viewport = self.viewport;
        let config = self.config;
        render_frame(self, viewport, &config);
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    pub fn buffers(&self) -> &GeometryBuffers {
        &self.buffers
    }

    /// Deletes the program and buffers and hands back the context.
    pub fn destroy(self) -> glow::Context {
        self.buffers.destroy(&self.gl);
        self.program.destroy(&self.gl);
        self.gl
    }
}

#[allow(unsafe_code)]
fn apply_fixed_state(gl: &glow::Context, config: &RenderConfig) {
    use glow::HasContext;

    // SAFETY: plain state setters with valid enums.
    unsafe {
        if config.depth_test {
            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);
        } else {
            gl.disable(glow::DEPTH_TEST);
        }
    }
}

impl FrameTarget for RendererSession {
    fn vertex_count(&self) -> usize {
        self.buffers.vertex_count()
    }

    #[allow(unsafe_code)]
    fn set_viewport(&mut self, viewport: Viewport) {
        use glow::HasContext;

        // SAFETY: viewport dimensions come from the surface and fit in i32
        // for any real canvas.
        unsafe {
            self.gl
                .viewport(0, 0, viewport.width as i32, viewport.height as i32);
        }
    }

    #[allow(unsafe_code)]
    fn clear(&mut self, color: [f32; 4]) {
        use glow::HasContext;

        let [r, g, b, a] = color;
        // SAFETY: plain state setter and clear with valid bit masks.
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn bind_vertex_attributes(&mut self) {
        self.buffers
            .position()
            .bind_to(&self.gl, self.program.position_attribute());
        self.buffers
            .color()
            .bind_to(&self.gl, self.program.color_attribute());
    }

    #[allow(unsafe_code)]
    fn set_projection(&mut self, projection: &Mat4) {
        use glow::HasContext;

        // SAFETY: the program is current (made so in ShaderProgram::build)
        // and the location belongs to it.
        unsafe {
            self.gl.uniform_matrix_4_f32_slice(
                Some(self.program.matrix_uniform()),
                false,
                &projection.to_cols_array(),
            );
        }
    }

    #[allow(unsafe_code)]
    fn draw_triangles(&mut self, first: usize, count: usize) {
        use glow::HasContext;

        // SAFETY: both attribute arrays are enabled and bound to buffers
        // holding at least `first + count` vertices.
        unsafe {
            self.gl
                .draw_arrays(glow::TRIANGLES, first as i32, count as i32);
        }
    }
}
