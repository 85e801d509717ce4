//! One running demo: the context object every event handler is given.

use crate::config::DemoConfig;
use crate::error::Result;
use crate::geometry::VertexBuffer;
use crate::gl::GraphicsContext;
use crate::input::{self, InputEvent, Redraw};
use crate::render::{self, DrawCall};
use crate::scene::{SceneState, Update};
use crate::shader::{load_program, Program, ShaderSource};

pub struct Demo<G: GraphicsContext> {
    gl: G,
    config: DemoConfig,
    program: Program<G::Program>,
    state: SceneState<G::UniformLocation>,
    buffer: VertexBuffer<G::Buffer>,
}

impl<G: GraphicsContext> Demo<G> {
    /// Builds the program, scene and buffer for `config` and draws the first
    /// frame. Any compile or link error aborts before anything is drawn.
    pub fn init(
        gl: G,
        config: DemoConfig,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
        viewport: [u32; 2],
    ) -> Result<Self> {
        gl.clear_color(config.clear_color);

        let program = load_program(&gl, vertex, fragment)?;
        let mut state = SceneState::new(&gl, &program, &config.uniforms);
        let buffer = VertexBuffer::upload(&gl, &program, &config.geometry)?;

        state.set(Update::ViewportSize(viewport));
        state.set(Update::MousePosition(config.mouse_mapping.center(viewport)));
        state.set(Update::SideCount(config.side_count));
        state.set(Update::Radius(config.radius));
        state.set(Update::Color(config.color));

        let demo = Self { gl, config, program, state, buffer };
        let call = demo.redraw();
        log::debug!("program `{}` ready, first draw {call:?}", demo.config.program);
        Ok(demo)
    }

    pub fn redraw(&self) -> DrawCall {
        render::draw(&self.gl, &self.program, &self.state, &self.buffer, self.config.draw_mode)
    }

    /// Applies `event` and redraws if it asks for one.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<DrawCall>> {
        match input::apply(&mut self.state, self.config.mouse_mapping, event)? {
            Redraw::Requested => Ok(Some(self.redraw())),
            Redraw::Skipped => Ok(None),
        }
    }

    pub fn state(&self) -> &SceneState<G::UniformLocation> {
        &self.state
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }
}
