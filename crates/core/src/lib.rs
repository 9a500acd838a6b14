#![deny(unsafe_code)]
//! Core types for glyph-render, which draws a multi-colored capital "I"
//! under an orthographic projection.
//!
//! Provides the validated `VertexData` tables, `OrthoBounds` projection,
//! `RenderConfig`, `Surface`-based context acquisition, and the
//! `FrameTarget` trait with the shared `render_frame` sequence. The
//! `render` feature adds the `glow` implementation (`RendererSession`).

pub mod config;
pub mod error;
pub mod frame;
pub mod projection;
pub mod surface;
pub mod vertex;

#[cfg(feature = "render")]
pub mod render;

pub use config::RenderConfig;
pub use error::RenderError;
pub use frame::{render_frame, FrameTarget};
pub use projection::OrthoBounds;
pub use surface::{acquire_context, ContextKind, GraphicsContext, Surface, Viewport};
pub use vertex::{Vertex, VertexData};
