//! The slice of the WebGL API the demos talk to.
//!
//! Everything above this module is written against [`GraphicsContext`] so the
//! same compile/link/draw code drives a real `WebGl2RenderingContext` in the
//! browser and a recording fake in unit tests.

use crate::shader::Stage;

/// Primitive topology of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    TriangleFan,
}

impl Topology {
    /// The GL enum for this topology (`TRIANGLES` / `TRIANGLE_FAN`).
    pub const fn gl_enum(self) -> u32 {
        match self {
            Topology::Triangles => 0x0004,
            Topology::TriangleFan => 0x0006,
        }
    }
}

/// Value pushed to a single uniform location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec4([f32; 4]),
}

pub trait GraphicsContext {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    fn create_shader(&self, stage: Stage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn detach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: Option<&Self::Program>);

    /// Attribute index, or -1 when the program has no such active attribute.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: Option<&Self::Buffer>);
    /// Uploads `data` into the bound `ARRAY_BUFFER` with `STATIC_DRAW` usage.
    fn array_buffer_data(&self, data: &[f32]);
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Float attribute pointer; `stride` and `offset` are in bytes.
    fn vertex_attrib_pointer(&self, index: u32, size: i32, stride: i32, offset: i32);

    fn uniform(&self, location: &Self::UniformLocation, value: UniformValue);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, rgba: [f32; 4]);
    fn clear_color_buffer(&self);
    fn draw_arrays(&self, topology: Topology, first: i32, count: i32);
}
