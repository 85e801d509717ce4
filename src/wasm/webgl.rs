use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlRenderingContext,
    WebGlShader, WebGlUniformLocation,
};

use crate::error::{Error, Result};
use crate::gl::{GraphicsContext, Topology, UniformValue};
use crate::shader::Stage;

// WebGL1 and WebGL2 contexts expose the same calls under the same names and
// share the object types, so one body serves both.
macro_rules! impl_graphics_context {
    ($gl:ident) => {
        impl GraphicsContext for $gl {
            type Shader = WebGlShader;
            type Program = WebGlProgram;
            type Buffer = WebGlBuffer;
            type UniformLocation = WebGlUniformLocation;

            fn create_shader(&self, stage: Stage) -> Option<WebGlShader> {
                $gl::create_shader(self, stage.gl_enum())
            }

            fn shader_source(&self, shader: &WebGlShader, source: &str) {
                $gl::shader_source(self, shader, source);
            }

            fn compile_shader(&self, shader: &WebGlShader) {
                $gl::compile_shader(self, shader);
            }

            fn compile_status(&self, shader: &WebGlShader) -> bool {
                self.get_shader_parameter(shader, $gl::COMPILE_STATUS)
                    .as_bool()
                    .unwrap_or(false)
            }

            fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
                self.get_shader_info_log(shader)
            }

            fn delete_shader(&self, shader: &WebGlShader) {
                $gl::delete_shader(self, Some(shader));
            }

            fn create_program(&self) -> Option<WebGlProgram> {
                $gl::create_program(self)
            }

            fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
                $gl::attach_shader(self, program, shader);
            }

            fn detach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
                $gl::detach_shader(self, program, shader);
            }

            fn link_program(&self, program: &WebGlProgram) {
                $gl::link_program(self, program);
            }

            fn link_status(&self, program: &WebGlProgram) -> bool {
                self.get_program_parameter(program, $gl::LINK_STATUS)
                    .as_bool()
                    .unwrap_or(false)
            }

            fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
                self.get_program_info_log(program)
            }

            fn delete_program(&self, program: &WebGlProgram) {
                $gl::delete_program(self, Some(program));
            }

            fn use_program(&self, program: Option<&WebGlProgram>) {
                $gl::use_program(self, program);
            }

            fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
                self.get_attrib_location(program, name)
            }

            fn uniform_location(
                &self,
                program: &WebGlProgram,
                name: &str,
            ) -> Option<WebGlUniformLocation> {
                self.get_uniform_location(program, name)
            }

            fn create_buffer(&self) -> Option<WebGlBuffer> {
                $gl::create_buffer(self)
            }

            fn bind_array_buffer(&self, buffer: Option<&WebGlBuffer>) {
                self.bind_buffer($gl::ARRAY_BUFFER, buffer);
            }

            fn array_buffer_data(&self, data: &[f32]) {
                let array = js_sys::Float32Array::from(data);
                self.buffer_data_with_array_buffer_view($gl::ARRAY_BUFFER, &array, $gl::STATIC_DRAW);
            }

            fn enable_vertex_attrib_array(&self, index: u32) {
                $gl::enable_vertex_attrib_array(self, index);
            }

            fn vertex_attrib_pointer(&self, index: u32, size: i32, stride: i32, offset: i32) {
                self.vertex_attrib_pointer_with_i32(index, size, $gl::FLOAT, false, stride, offset);
            }

            fn uniform(&self, location: &WebGlUniformLocation, value: UniformValue) {
                let loc = Some(location);
                match value {
                    UniformValue::Float(v) => self.uniform1f(loc, v),
                    UniformValue::Vec2([x, y]) => self.uniform2f(loc, x, y),
                    UniformValue::Vec4([x, y, z, w]) => self.uniform4f(loc, x, y, z, w),
                }
            }

            fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
                $gl::viewport(self, x, y, width, height);
            }

            fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
                $gl::clear_color(self, r, g, b, a);
            }

            fn clear_color_buffer(&self) {
                self.clear($gl::COLOR_BUFFER_BIT);
            }

            fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
                $gl::draw_arrays(self, topology.gl_enum(), first, count);
            }
        }
    };
}

impl_graphics_context!(WebGl2RenderingContext);
impl_graphics_context!(WebGlRenderingContext);

/// Whichever WebGL context the canvas handed out.
#[derive(Debug, Clone)]
pub enum WebContext {
    Gl2(WebGl2RenderingContext),
    Gl1(WebGlRenderingContext),
}

impl WebContext {
    /// Asks for `webgl2`, then `webgl`, then `experimental-webgl`.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self> {
        if let Some(ctx) = canvas.get_context("webgl2")? {
            let gl = ctx.dyn_into::<WebGl2RenderingContext>().map_err(|_| Error::NoContext)?;
            return Ok(WebContext::Gl2(gl));
        }
        for name in ["webgl", "experimental-webgl"] {
            if let Some(ctx) = canvas.get_context(name)? {
                log::info!("WebGL2 not supported, using `{name}`");
                let gl = ctx.dyn_into::<WebGlRenderingContext>().map_err(|_| Error::NoContext)?;
                return Ok(WebContext::Gl1(gl));
            }
        }
        Err(Error::NoContext)
    }

    pub fn is_webgl2(&self) -> bool {
        matches!(self, WebContext::Gl2(_))
    }
}

macro_rules! dispatch {
    ($self:ident, $gl:ident => $call:expr) => {
        match $self {
            WebContext::Gl2($gl) => $call,
            WebContext::Gl1($gl) => $call,
        }
    };
}

impl GraphicsContext for WebContext {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, stage: Stage) -> Option<WebGlShader> {
        dispatch!(self, gl => GraphicsContext::create_shader(gl, stage))
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        dispatch!(self, gl => GraphicsContext::shader_source(gl, shader, source))
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        dispatch!(self, gl => GraphicsContext::compile_shader(gl, shader))
    }

    fn compile_status(&self, shader: &WebGlShader) -> bool {
        dispatch!(self, gl => GraphicsContext::compile_status(gl, shader))
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        dispatch!(self, gl => GraphicsContext::shader_info_log(gl, shader))
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        dispatch!(self, gl => GraphicsContext::delete_shader(gl, shader))
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        dispatch!(self, gl => GraphicsContext::create_program(gl))
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        dispatch!(self, gl => GraphicsContext::attach_shader(gl, program, shader))
    }

    fn detach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        dispatch!(self, gl => GraphicsContext::detach_shader(gl, program, shader))
    }

    fn link_program(&self, program: &WebGlProgram) {
        dispatch!(self, gl => GraphicsContext::link_program(gl, program))
    }

    fn link_status(&self, program: &WebGlProgram) -> bool {
        dispatch!(self, gl => GraphicsContext::link_status(gl, program))
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        dispatch!(self, gl => GraphicsContext::program_info_log(gl, program))
    }

    fn delete_program(&self, program: &WebGlProgram) {
        dispatch!(self, gl => GraphicsContext::delete_program(gl, program))
    }

    fn use_program(&self, program: Option<&WebGlProgram>) {
        dispatch!(self, gl => GraphicsContext::use_program(gl, program))
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        dispatch!(self, gl => GraphicsContext::attrib_location(gl, program, name))
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        dispatch!(self, gl => GraphicsContext::uniform_location(gl, program, name))
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        dispatch!(self, gl => GraphicsContext::create_buffer(gl))
    }

    fn bind_array_buffer(&self, buffer: Option<&WebGlBuffer>) {
        dispatch!(self, gl => GraphicsContext::bind_array_buffer(gl, buffer))
    }

    fn array_buffer_data(&self, data: &[f32]) {
        dispatch!(self, gl => GraphicsContext::array_buffer_data(gl, data))
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        dispatch!(self, gl => GraphicsContext::enable_vertex_attrib_array(gl, index))
    }

    fn vertex_attrib_pointer(&self, index: u32, size: i32, stride: i32, offset: i32) {
        dispatch!(self, gl => GraphicsContext::vertex_attrib_pointer(gl, index, size, stride, offset))
    }

    fn uniform(&self, location: &WebGlUniformLocation, value: UniformValue) {
        dispatch!(self, gl => GraphicsContext::uniform(gl, location, value))
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        dispatch!(self, gl => GraphicsContext::viewport(gl, x, y, width, height))
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        dispatch!(self, gl => GraphicsContext::clear_color(gl, rgba))
    }

    fn clear_color_buffer(&self) {
        dispatch!(self, gl => GraphicsContext::clear_color_buffer(gl))
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        dispatch!(self, gl => GraphicsContext::draw_arrays(gl, topology, first, count))
    }
}
