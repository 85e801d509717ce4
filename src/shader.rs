//! Shader compilation and program linking shared by every demo.

use std::fmt;

use crate::error::{Error, Result};
use crate::gl::GraphicsContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    /// The GL enum for this stage (`VERTEX_SHADER` / `FRAGMENT_SHADER`).
    pub const fn gl_enum(self) -> u32 {
        match self {
            Stage::Vertex => 0x8B31,
            Stage::Fragment => 0x8B30,
        }
    }

    /// Id of the markup element holding this stage's source for program
    /// `base`, e.g. `triangleVS` / `triangleFS`.
    pub fn element_id(self, base: &str) -> String {
        match self {
            Stage::Vertex => format!("{base}VS"),
            Stage::Fragment => format!("{base}FS"),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => f.write_str("vertex"),
            Stage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shader text tagged with the stage it is meant for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    stage: Stage,
    text: String,
}

impl ShaderSource {
    pub fn new(stage: Stage, text: impl Into<String>) -> Self {
        Self { stage, text: text.into() }
    }

    pub fn vertex(text: impl Into<String>) -> Self {
        Self::new(Stage::Vertex, text)
    }

    pub fn fragment(text: impl Into<String>) -> Self {
        Self::new(Stage::Fragment, text)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A shader object that compiled successfully and has not been linked yet.
#[derive(Debug)]
pub struct CompiledShader<S> {
    handle: S,
    stage: Stage,
}

impl<S> CompiledShader<S> {
    pub fn stage(&self) -> Stage {
        self.stage
    }
}

/// A linked program. Only [`link`] hands these out.
#[derive(Debug)]
pub struct Program<P> {
    handle: P,
}

impl<P> Program<P> {
    pub fn activate<G>(&self, gl: &G)
    where
        G: GraphicsContext<Program = P>,
    {
        gl.use_program(Some(&self.handle));
    }

    pub fn attrib_location<G>(&self, gl: &G, name: &str) -> i32
    where
        G: GraphicsContext<Program = P>,
    {
        gl.attrib_location(&self.handle, name)
    }

    pub fn uniform_location<G>(&self, gl: &G, name: &str) -> Option<G::UniformLocation>
    where
        G: GraphicsContext<Program = P>,
    {
        gl.uniform_location(&self.handle, name)
    }
}

/// Compiles one stage. A failed shader object is deleted before returning.
pub fn compile<G: GraphicsContext>(
    gl: &G,
    source: &ShaderSource,
) -> Result<CompiledShader<G::Shader>> {
    let stage = source.stage();
    if source.text().trim().is_empty() {
        let err = Error::Compile { stage, log: "empty shader source".into() };
        log::error!("{err}");
        return Err(err);
    }

    let shader = gl.create_shader(stage).ok_or(Error::Allocation("shader"))?;
    gl.shader_source(&shader, source.text());
    gl.compile_shader(&shader);

    if !gl.compile_status(&shader) {
        let log = gl.shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(&shader);
        let err = Error::Compile { stage, log };
        log::error!("{err}");
        return Err(err);
    }

    Ok(CompiledShader { handle: shader, stage })
}

/// Links a vertex/fragment pair. Both shader objects are detached and deleted
/// once linking has been attempted; a program that fails to link is deleted.
pub fn link<G: GraphicsContext>(
    gl: &G,
    vertex: CompiledShader<G::Shader>,
    fragment: CompiledShader<G::Shader>,
) -> Result<Program<G::Program>> {
    if vertex.stage != Stage::Vertex || fragment.stage != Stage::Fragment {
        let log = format!(
            "expected a vertex and a fragment shader, got {} and {}",
            vertex.stage, fragment.stage
        );
        gl.delete_shader(&vertex.handle);
        gl.delete_shader(&fragment.handle);
        let err = Error::Link { log };
        log::error!("{err}");
        return Err(err);
    }

    let Some(program) = gl.create_program() else {
        gl.delete_shader(&vertex.handle);
        gl.delete_shader(&fragment.handle);
        return Err(Error::Allocation("program"));
    };

    gl.attach_shader(&program, &vertex.handle);
    gl.attach_shader(&program, &fragment.handle);
    gl.link_program(&program);
    let linked = gl.link_status(&program);

    for shader in [&vertex.handle, &fragment.handle] {
        gl.detach_shader(&program, shader);
        gl.delete_shader(shader);
    }

    if !linked {
        let log = gl.program_info_log(&program).unwrap_or_default();
        gl.delete_program(&program);
        let err = Error::Link { log };
        log::error!("{err}");
        return Err(err);
    }

    Ok(Program { handle: program })
}

/// Compiles both stages and links them. No program object is created unless
/// both stages compiled.
pub fn load_program<G: GraphicsContext>(
    gl: &G,
    vertex: &ShaderSource,
    fragment: &ShaderSource,
) -> Result<Program<G::Program>> {
    let vs = compile(gl, vertex)?;
    let fs = match compile(gl, fragment) {
        Ok(fs) => fs,
        Err(err) => {
            gl.delete_shader(&vs.handle);
            return Err(err);
        }
    };
    link(gl, vs, fs)
}
