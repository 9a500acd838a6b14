//! Shader stage compilation and program linking.
//!
//! The GL-facing functions need a live `glow::Context`; the error type and
//! [`annotate_source`] are pure and tested without a device.

use std::fmt;

use thiserror::Error;

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL enum used with `create_shader`.
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Errors from building a shader program.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// A stage failed to compile.
    #[error("shader compile error ({stage}):\n{log}")]
    CompileError {
        stage: ShaderStage,
        /// Annotated source followed by the compiler's info log.
        log: String,
    },
    /// The stages compiled but would not link.
    #[error("shader link error:\n{0}")]
    LinkError(String),
    /// The linked program has no active attribute with this name.
    #[error("attribute '{0}' not found in linked program")]
    MissingAttribute(String),
    /// The linked program has no active uniform with this name.
    #[error("uniform '{0}' not found in linked program")]
    MissingUniform(String),
}

/// Prefixes each source line with its right-aligned 1-based number and
/// appends the compiler log, so driver messages like `0:12: ...` can be
/// matched to the source at a glance.
pub fn annotate_source(source: &str, log: &str) -> String {
    let width = source.lines().count().max(1).to_string().len();
    let mut out: Vec<String> = source
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1))
        .collect();

    if !log.is_empty() {
        if !out.is_empty() {
            out.push(String::new());
        }
        out.push(log.trim_end().to_string());
    }
    out.join("\n")
}

/// Compiles one shader stage.
///
/// # Errors
///
/// Returns `ShaderError::CompileError` with the annotated source and the
/// info log. The shader object is deleted before returning.
#[allow(unsafe_code)]
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow wraps raw GL calls as unsafe. The stage enum maps to a
    // valid shader type, and the handle is deleted on the failure path.
    let shader = unsafe {
        gl.create_shader(stage.gl_type())
            .map_err(|log| ShaderError::CompileError { stage, log })?
    };

    let compiled = unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        gl.get_shader_compile_status(shader)
    };

    if compiled {
        log::debug!("{stage} shader compiled");
        return Ok(shader);
    }

    let info_log = unsafe { gl.get_shader_info_log(shader) };
    unsafe { gl.delete_shader(shader) };
    log::error!("{stage} shader failed to compile: {}", info_log.trim_end());
    Err(ShaderError::CompileError {
        stage,
        log: annotate_source(source, &info_log),
    })
}

/// Links a compiled vertex and fragment stage into a program.
///
/// The stages are detached after linking; the caller still owns them.
///
/// # Errors
///
/// Returns `ShaderError::LinkError` with the link log. The program object
/// is deleted before returning.
#[allow(unsafe_code)]
pub fn link_program(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    // SAFETY: both shader handles come from compile_shader; the program
    // handle is deleted on the failure path.
    let program = unsafe { gl.create_program().map_err(ShaderError::LinkError)? };

    let linked = unsafe {
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.get_program_link_status(program)
    };

    if linked {
        return Ok(program);
    }

    let info_log = unsafe { gl.get_program_info_log(program) };
    unsafe { gl.delete_program(program) };
    log::error!("program failed to link: {}", info_log.trim_end());
    Err(ShaderError::LinkError(info_log))
}

/// Compiles both stages and links them, deleting the stage objects
/// whatever the outcome.
///
/// # Errors
///
/// Propagates the first compile error, or the link error.
#[allow(unsafe_code)]
pub fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    let vert = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
    let frag = match compile_shader(gl, ShaderStage::Fragment, fragment_src) {
        Ok(frag) => frag,
        Err(e) => {
            // SAFETY: vert is a live handle from compile_shader.
            unsafe { gl.delete_shader(vert) };
            return Err(e);
        }
    };

    let program = link_program(gl, vert, frag);

    // SAFETY: both handles are live; a linked program keeps its own copy.
    unsafe {
        gl.delete_shader(vert);
        gl.delete_shader(frag);
    }

    program
}
