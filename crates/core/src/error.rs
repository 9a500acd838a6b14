//! Error types for the glyph-render core.

use thiserror::Error;

#[cfg(feature = "render")]
use crate::render::ShaderError;

/// Errors produced while setting up or drawing the glyph.
///
/// Every variant is fatal to setup: callers surface the message to the
/// user and stop initialization.
#[derive(Debug, Error)]
pub enum RenderError {
    /// None of the candidate context kinds could be obtained from the surface.
    #[error("failed to create a rendering context (tried: {})", tried.join(", "))]
    ContextUnavailable {
        /// Context kind names in the order they were attempted.
        tried: Vec<String>,
    },

    /// Shader compilation, linking, or slot resolution failed.
    #[cfg(feature = "render")]
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// The device refused to allocate a vertex buffer.
    #[error("buffer allocation failed: {0}")]
    BufferAllocation(String),

    /// Vertex data was malformed (arity, emptiness, or count mismatch).
    #[error("invalid vertex data: {0}")]
    Validation(String),

    /// Width or height was zero, or the framebuffer would be too large.
    #[error("invalid dimensions: width and height must be non-zero, with at most 8192 x 8192 pixels")]
    InvalidDimensions,

    /// A configuration value was present but unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_unavailable_lists_tried_kinds() {
        let err = RenderError::ContextUnavailable {
            tried: vec!["webgl".into(), "experimental-webgl".into()],
        };
        let msg = format!("{err}");
        assert!(
            msg.contains("webgl, experimental-webgl"),
            "expected tried kinds in: {msg}"
        );
    }

    #[test]
    fn validation_includes_message() {
        let err = RenderError::Validation("30 positions vs 29 colors".into());
        let msg = format!("{err}");
        assert!(msg.contains("29 colors"), "missing detail in: {msg}");
    }

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = format!("{}", RenderError::InvalidDimensions);
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn buffer_allocation_includes_driver_message() {
        let err = RenderError::BufferAllocation("out of memory".into());
        assert!(format!("{err}").contains("out of memory"));
    }

    #[test]
    fn render_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RenderError>();
    }

    #[test]
    fn render_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<RenderError>();
    }
}
