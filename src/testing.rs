//! Recording stand-in for the WebGL context used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::gl::{GraphicsContext, Topology, UniformValue};
use crate::shader::Stage;

pub const TRIANGLE_VS: &str = "
attribute vec2 position;
attribute vec4 color;
varying vec4 vColor;
void main() {
    vColor = color;
    gl_Position = vec4(position, 0.0, 1.0);
}";

pub const TRIANGLE_FS: &str = "
precision mediump float;
varying vec4 vColor;
void main() {
    gl_FragColor = vColor;
}";

pub const FLAT_FS: &str = "
precision mediump float;
uniform vec4 u_color;
void main() {
    gl_FragColor = u_color;
}";

pub const MOUSE_VS: &str = "
attribute vec2 position;
uniform vec2 u_mouse;
uniform vec2 u_resolution;
void main() {
    vec2 center = u_mouse / u_resolution * 2.0 - 1.0;
    gl_Position = vec4(center + position * 0.25, 0.0, 1.0);
}";

pub const POLYGON_VS: &str = "
attribute float index;
uniform vec2 u_center;
uniform vec2 u_resolution;
uniform float u_sides;
uniform float u_radius;
void main() {
    vec2 offset = vec2(0.0);
    if (index > 0.0) {
        float angle = (index - 1.0) / u_sides * 6.28318530718;
        offset = vec2(cos(angle), sin(angle)) * u_radius;
    }
    offset.x *= u_resolution.y / u_resolution.x;
    gl_Position = vec4(u_center + offset, 0.0, 1.0);
}";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(u32, Stage),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    BufferData(Vec<f32>),
    EnableAttrib(u32),
    AttribPointer { index: u32, size: i32, stride: i32, offset: i32 },
    Uniform(String, UniformValue),
    Viewport(i32, i32, i32, i32),
    ClearColor([f32; 4]),
    Clear,
    DrawArrays(Topology, i32, i32),
}

/// Compiles anything without a `#error` directive and links whatever it is
/// given unless built with [`RecordingGl::failing_link`]. Attribute and
/// uniform locations come from the declarations in the linked sources.
#[derive(Debug, Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    shaders: RefCell<HashMap<u32, String>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    linked: RefCell<HashMap<u32, Vec<String>>>,
    link_error: Option<String>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_link(mut self, log: &str) -> Self {
        self.link_error = Some(log.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn uniform_uploads(&self) -> Vec<(String, UniformValue)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Uniform(name, value) => Some((name.clone(), *value)),
                _ => None,
            })
            .collect()
    }

    pub fn draws(&self) -> Vec<(Topology, i32, i32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::DrawArrays(topology, first, count) => Some((*topology, *first, *count)),
                _ => None,
            })
            .collect()
    }

    /// Shader objects created and not yet deleted.
    pub fn live_shaders(&self) -> usize {
        self.shaders.borrow().len()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn declared(&self, program: u32, keyword: &str) -> Vec<String> {
        let linked = self.linked.borrow();
        let Some(sources) = linked.get(&program) else {
            return Vec::new();
        };
        sources
            .iter()
            .flat_map(|source| source.lines())
            .filter_map(|line| line.trim().strip_prefix(keyword))
            .filter_map(|rest| rest.trim_end_matches(';').split_whitespace().last())
            .map(str::to_string)
            .collect()
    }
}

impl GraphicsContext for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: Stage) -> Option<u32> {
        let id = self.next();
        self.shaders.borrow_mut().insert(id, String::new());
        self.record(Call::CreateShader(id, stage));
        Some(id)
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        self.shaders.borrow_mut().insert(*shader, source.to_string());
    }

    fn compile_shader(&self, shader: &u32) {
        self.record(Call::CompileShader(*shader));
    }

    fn compile_status(&self, shader: &u32) -> bool {
        self.shaders
            .borrow()
            .get(shader)
            .is_some_and(|source| !source.contains("#error"))
    }

    fn shader_info_log(&self, shader: &u32) -> Option<String> {
        let shaders = self.shaders.borrow();
        let line = shaders.get(shader)?.lines().find(|l| l.contains("#error"))?;
        Some(format!("ERROR: 0:1: '{}'", line.trim()))
    }

    fn delete_shader(&self, shader: &u32) {
        self.shaders.borrow_mut().remove(shader);
        self.record(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        let id = self.next();
        self.record(Call::CreateProgram(id));
        Some(id)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.attached.borrow_mut().entry(*program).or_default().push(*shader);
        self.record(Call::AttachShader(*program, *shader));
    }

    fn detach_shader(&self, program: &u32, shader: &u32) {
        if let Some(list) = self.attached.borrow_mut().get_mut(program) {
            list.retain(|s| s != shader);
        }
        self.record(Call::DetachShader(*program, *shader));
    }

    fn link_program(&self, program: &u32) {
        let shaders = self.shaders.borrow();
        let sources = self
            .attached
            .borrow()
            .get(program)
            .into_iter()
            .flatten()
            .filter_map(|id| shaders.get(id).cloned())
            .collect();
        self.linked.borrow_mut().insert(*program, sources);
        self.record(Call::LinkProgram(*program));
    }

    fn link_status(&self, _program: &u32) -> bool {
        self.link_error.is_none()
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        self.link_error.clone()
    }

    fn delete_program(&self, program: &u32) {
        self.linked.borrow_mut().remove(program);
        self.record(Call::DeleteProgram(*program));
    }

    fn use_program(&self, program: Option<&u32>) {
        self.record(Call::UseProgram(program.copied()));
    }

    fn attrib_location(&self, program: &u32, name: &str) -> i32 {
        self.declared(*program, "attribute ")
            .iter()
            .position(|n| n == name)
            .map_or(-1, |i| i as i32)
    }

    fn uniform_location(&self, program: &u32, name: &str) -> Option<String> {
        self.declared(*program, "uniform ")
            .into_iter()
            .find(|n| n == name)
    }

    fn create_buffer(&self) -> Option<u32> {
        let id = self.next();
        self.record(Call::CreateBuffer(id));
        Some(id)
    }

    fn bind_array_buffer(&self, buffer: Option<&u32>) {
        self.record(Call::BindArrayBuffer(buffer.copied()));
    }

    fn array_buffer_data(&self, data: &[f32]) {
        self.record(Call::BufferData(data.to_vec()));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableAttrib(index));
    }

    fn vertex_attrib_pointer(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.record(Call::AttribPointer { index, size, stride, offset });
    }

    fn uniform(&self, location: &String, value: UniformValue) {
        self.record(Call::Uniform(location.clone(), value));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(Call::ClearColor(rgba));
    }

    fn clear_color_buffer(&self) {
        self.record(Call::Clear);
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        self.record(Call::DrawArrays(topology, first, count));
    }
}
