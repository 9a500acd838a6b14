//! Built-in GLSL ES 1.00 sources for the glyph program.
//!
//! ES 1.00 is accepted by WebGL 1, WebGL 2, and GLES 2+ contexts, so the
//! same pair works with every context kind the surface may hand out.

/// Name of the per-vertex position attribute.
pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";

/// Name of the per-vertex color attribute.
pub const COLOR_ATTRIBUTE: &str = "aVertexColor";

/// Name of the projection (model-view) matrix uniform.
pub const MATRIX_UNIFORM: &str = "uMVMatrix";

/// Vertex stage: transforms positions by `uMVMatrix` and forwards color.
pub const GLYPH_VERTEX_SHADER: &str = r#"attribute vec3 aVertexPosition;
attribute vec4 aVertexColor;
uniform mat4 uMVMatrix;
varying vec4 vColor;
void main(void) {
    gl_Position = uMVMatrix * vec4(aVertexPosition, 1.0);
    vColor = aVertexColor;
}
"#;

/// Fragment stage: writes the interpolated vertex color.
pub const GLYPH_FRAGMENT_SHADER: &str = r#"precision mediump float;
varying vec4 vColor;
void main(void) {
    gl_FragColor = vColor;
}
"#;
