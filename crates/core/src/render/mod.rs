//! WebGL / OpenGL device implementation built on `glow`.
//!
//! This module is only available when the `render` feature is enabled.
//!
//! # Module overview
//!
//! - [`sources`] -- Built-in GLSL ES 1.00 shader pair and slot names.
//! - [`shader`] -- Stage compilation, linking, and error annotation.
//! - [`program`] -- The linked program with resolved attribute/uniform slots.
//! - [`buffers`] -- Static position and color vertex buffers.
//! - [`session`] -- `RendererSession`, the GL implementation of `FrameTarget`.

pub mod buffers;
pub mod program;
pub mod session;
pub mod shader;
pub mod sources;

#[cfg(all(test, target_os = "linux"))]
pub(crate) mod headless;

pub use buffers::{GeometryBuffers, VertexBuffer};
pub use program::ShaderProgram;
pub use session::RendererSession;
pub use shader::{
    annotate_source, compile_program, compile_shader, link_program, ShaderError, ShaderStage,
};
pub use sources::{GLYPH_FRAGMENT_SHADER, GLYPH_VERTEX_SHADER};
