//! The linked glyph program and its resolved slots.

use super::shader::{compile_program, ShaderError};
use super::sources::{COLOR_ATTRIBUTE, MATRIX_UNIFORM, POSITION_ATTRIBUTE};

/// A linked program with its position/color attribute slots and the
/// projection-matrix uniform slot.
///
/// Building the program also makes it current and enables both attribute
/// arrays, so subsequent draws read from them.
pub struct ShaderProgram {
    program: glow::Program,
    position_attribute: u32,
    color_attribute: u32,
    matrix_uniform: glow::UniformLocation,
}

impl ShaderProgram {
    /// Compiles, links, and resolves slots, then activates the program.
    ///
    /// # Errors
    ///
    /// Returns `CompileError` or `LinkError` if the sources are rejected,
    /// and `MissingAttribute` / `MissingUniform` if a slot name does not
    /// resolve (for instance because the driver optimized it away). No
    /// program object survives a failure.
    #[allow(unsafe_code)]
    pub fn build(
        gl: &glow::Context,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        use glow::HasContext;

        let program = compile_program(gl, vertex_src, fragment_src)?;

        let resolved = resolve_slots(gl, program);
        let (position_attribute, color_attribute, matrix_uniform) = match resolved {
            Ok(slots) => slots,
            Err(e) => {
                // SAFETY: program is a live handle from compile_program.
                unsafe { gl.delete_program(program) };
                log::error!("{e}");
                return Err(e);
            }
        };

        // SAFETY: the program linked successfully and both attribute
        // indices were reported by the driver for it.
        unsafe {
            gl.use_program(Some(program));
            gl.enable_vertex_attrib_array(position_attribute);
            gl.enable_vertex_attrib_array(color_attribute);
        }
        log::debug!(
            "program ready: {POSITION_ATTRIBUTE}={position_attribute}, {COLOR_ATTRIBUTE}={color_attribute}"
        );

        Ok(Self {
            program,
            position_attribute,
            color_attribute,
            matrix_uniform,
        })
    }

    pub fn program(&self) -> glow::Program {
        self.program
    }

    pub fn position_attribute(&self) -> u32 {
        self.position_attribute
    }

    pub fn color_attribute(&self) -> u32 {
        self.color_attribute
    }

    pub fn matrix_uniform(&self) -> &glow::UniformLocation {
        &self.matrix_uniform
    }

    /// Deletes the program object.
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: self.program is the live handle created in build().
        unsafe {
            gl.use_program(None);
            gl.delete_program(self.program);
        }
    }
}

#[allow(unsafe_code)]
fn resolve_slots(
    gl: &glow::Context,
    program: glow::Program,
) -> Result<(u32, u32, glow::UniformLocation), ShaderError> {
    use glow::HasContext;

    // SAFETY: program is a successfully linked program handle; lookups by
    // name do not mutate GL state.
    unsafe {
        let position = gl
            .get_attrib_location(program, POSITION_ATTRIBUTE)
            .ok_or_else(|| ShaderError::MissingAttribute(POSITION_ATTRIBUTE.to_string()))?;
        let color = gl
            .get_attrib_location(program, COLOR_ATTRIBUTE)
            .ok_or_else(|| ShaderError::MissingAttribute(COLOR_ATTRIBUTE.to_string()))?;
        let matrix = gl
            .get_uniform_location(program, MATRIX_UNIFORM)
            .ok_or_else(|| ShaderError::MissingUniform(MATRIX_UNIFORM.to_string()))?;
        Ok((position, color, matrix))
    }
}
