//! Per-demo uniform state.

use crate::gl::{GraphicsContext, UniformValue};
use crate::shader::Program;

pub const MIN_SIDES: u32 = 3;
pub const MAX_SIDES: u32 = 20;

/// A scene value a uniform can be fed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MousePosition,
    Color,
    SideCount,
    Radius,
    ViewportSize,
}

/// A single assignment to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update {
    MousePosition([f32; 2]),
    Color([f32; 4]),
    SideCount(u32),
    Radius(f32),
    ViewportSize([u32; 2]),
}

/// Uniform `name` reads scene field `field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformSpec {
    pub name: &'static str,
    pub field: Field,
}

impl UniformSpec {
    pub const fn new(name: &'static str, field: Field) -> Self {
        Self { name, field }
    }
}

#[derive(Debug, Clone)]
pub struct UniformBinding<L> {
    pub name: &'static str,
    pub field: Field,
    /// `None` when the linked program has no active uniform by that name.
    pub location: Option<L>,
}

#[derive(Debug, Clone)]
pub struct SceneState<L> {
    mouse_position: [f32; 2],
    color: [f32; 4],
    side_count: u32,
    radius: f32,
    viewport_size: [u32; 2],
    bindings: Vec<UniformBinding<L>>,
}

impl<L> SceneState<L> {
    /// Resolves every uniform in `uniforms` against `program`. This is the
    /// only place locations are looked up, so it happens once per scene.
    pub fn new<G>(gl: &G, program: &Program<G::Program>, uniforms: &[UniformSpec]) -> Self
    where
        G: GraphicsContext<UniformLocation = L>,
    {
        program.activate(gl);
        let bindings = uniforms
            .iter()
            .map(|spec| {
                let location = program.uniform_location(gl, spec.name);
                if location.is_none() {
                    log::warn!("uniform `{}` is not active in the program", spec.name);
                }
                UniformBinding { name: spec.name, field: spec.field, location }
            })
            .collect();

        Self {
            mouse_position: [0.0; 2],
            color: [1.0, 1.0, 1.0, 1.0],
            side_count: MIN_SIDES,
            radius: 0.5,
            viewport_size: [0; 2],
            bindings,
        }
    }

    pub fn set(&mut self, update: Update) {
        match update {
            Update::MousePosition(pos) => self.mouse_position = pos,
            Update::Color(rgba) => self.color = rgba,
            Update::SideCount(n) => {
                let clamped = n.clamp(MIN_SIDES, MAX_SIDES);
                if clamped != n {
                    log::warn!("side count {n} outside [{MIN_SIDES}, {MAX_SIDES}], using {clamped}");
                }
                self.side_count = clamped;
            }
            Update::Radius(r) => self.radius = r,
            Update::ViewportSize(size) => self.viewport_size = size,
        }
    }

    pub fn mouse_position(&self) -> [f32; 2] {
        self.mouse_position
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn side_count(&self) -> u32 {
        self.side_count
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn viewport_size(&self) -> [u32; 2] {
        self.viewport_size
    }

    pub fn bindings(&self) -> &[UniformBinding<L>] {
        &self.bindings
    }

    pub fn value_of(&self, field: Field) -> UniformValue {
        match field {
            Field::MousePosition => UniformValue::Vec2(self.mouse_position),
            Field::Color => UniformValue::Vec4(self.color),
            Field::SideCount => UniformValue::Float(self.side_count as f32),
            Field::Radius => UniformValue::Float(self.radius),
            Field::ViewportSize => UniformValue::Vec2([
                self.viewport_size[0] as f32,
                self.viewport_size[1] as f32,
            ]),
        }
    }

    /// Current value of every resolved binding, in declaration order.
    pub fn uniform_values(&self) -> impl Iterator<Item = (&L, UniformValue)> + '_ {
        self.bindings
            .iter()
            .filter_map(|b| b.location.as_ref().map(|loc| (loc, self.value_of(b.field))))
    }
}
