use crate::geometry::VertexBuffer;
use crate::gl::{GraphicsContext, Topology};
use crate::scene::SceneState;
use crate::shader::Program;

/// How a demo turns its buffer into one draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Fixed triangle list.
    Triangles { count: i32 },
    /// Triangle fan over `side_count + 2` vertices: center, one per side, and
    /// the closing vertex.
    Fan,
}

impl DrawMode {
    pub fn call_for<L>(self, state: &SceneState<L>) -> DrawCall {
        match self {
            DrawMode::Triangles { count } => DrawCall { topology: Topology::Triangles, count },
            DrawMode::Fan => DrawCall {
                topology: Topology::TriangleFan,
                count: state.side_count() as i32 + 2,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub topology: Topology,
    pub count: i32,
}

/// Pushes `state` into `program` and issues exactly one draw.
pub fn draw<G: GraphicsContext>(
    gl: &G,
    program: &Program<G::Program>,
    state: &SceneState<G::UniformLocation>,
    buffer: &VertexBuffer<G::Buffer>,
    mode: DrawMode,
) -> DrawCall {
    let [width, height] = state.viewport_size();
    gl.viewport(0, 0, width as i32, height as i32);
    gl.clear_color_buffer();

    program.activate(gl);
    for (location, value) in state.uniform_values() {
        gl.uniform(location, value);
    }

    buffer.bind(gl);
    let call = mode.call_for(state);
    debug_assert!(call.count as usize <= buffer.vertex_count());
    gl.draw_arrays(call.topology, 0, call.count);
    call
}
