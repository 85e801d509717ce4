//! Static vertex data and its upload.

use crate::error::{Error, Result};
use crate::gl::GraphicsContext;
use crate::scene::MAX_SIDES;
use crate::shader::Program;

const FLOAT_BYTES: i32 = 4;

/// Vertices in the fan ramp: center, `MAX_SIDES` perimeter points, and the
/// closing point that repeats the first perimeter point.
pub const FAN_VERTICES: usize = MAX_SIDES as usize + 2;

/// Where one float attribute lives inside the buffer. `stride` and `offset`
/// are in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLayout {
    pub name: &'static str,
    pub size: i32,
    pub stride: i32,
    pub offset: i32,
}

impl AttributeLayout {
    pub const fn new(name: &'static str, size: i32, stride: i32, offset: i32) -> Self {
        Self { name, size, stride, offset }
    }
}

/// CPU-side vertex data. Built once, never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    data: Vec<f32>,
    attributes: Vec<AttributeLayout>,
    vertex_count: usize,
}

impl Geometry {
    pub fn new(data: Vec<f32>, attributes: Vec<AttributeLayout>, vertex_count: usize) -> Self {
        Self { data, attributes, vertex_count }
    }

    /// Three 2D positions followed by one RGBA color per vertex, as two
    /// tightly packed blocks in the same buffer.
    pub fn colored_triangle() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -0.5, 0.5,
            0.0, -0.5,
            0.5, 0.5,
            1.0, 0.0, 0.0, 1.0,
            0.0, 1.0, 0.0, 1.0,
            0.0, 0.0, 1.0, 1.0,
        ];
        let colors_at = 2 * 3 * FLOAT_BYTES;
        Self::new(
            data,
            vec![
                AttributeLayout::new("position", 2, 2 * FLOAT_BYTES, 0),
                AttributeLayout::new("color", 4, 4 * FLOAT_BYTES, colors_at),
            ],
            3,
        )
    }

    /// A triangle around the origin, positions only.
    pub fn triangle() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -0.5, -0.5,
            0.5, -0.5,
            0.0, 0.5,
        ];
        Self::new(data, vec![AttributeLayout::new("position", 2, 2 * FLOAT_BYTES, 0)], 3)
    }

    /// `0.0, 1.0, .. FAN_VERTICES - 1` fed to attribute `index`; the vertex
    /// shader turns each index into a point on the polygon.
    pub fn index_ramp() -> Self {
        let data = (0..FAN_VERTICES).map(|i| i as f32).collect();
        Self::new(data, vec![AttributeLayout::new("index", 1, FLOAT_BYTES, 0)], FAN_VERTICES)
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn attributes(&self) -> &[AttributeLayout] {
        &self.attributes
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoundAttribute {
    index: u32,
    size: i32,
    stride: i32,
    offset: i32,
}

/// Geometry uploaded to the GPU with its attributes resolved against one
/// program.
#[derive(Debug)]
pub struct VertexBuffer<B> {
    buffer: B,
    attributes: Vec<BoundAttribute>,
    vertex_count: usize,
}

impl<B> VertexBuffer<B> {
    pub fn upload<G>(gl: &G, program: &Program<G::Program>, geometry: &Geometry) -> Result<Self>
    where
        G: GraphicsContext<Buffer = B>,
    {
        let buffer = gl.create_buffer().ok_or(Error::Allocation("buffer"))?;
        gl.bind_array_buffer(Some(&buffer));
        gl.array_buffer_data(geometry.data());

        let attributes = geometry
            .attributes()
            .iter()
            .filter_map(|layout| {
                let location = program.attrib_location(gl, layout.name);
                if location < 0 {
                    log::warn!("attribute `{}` is not active in the program", layout.name);
                    return None;
                }
                Some(BoundAttribute {
                    index: location as u32,
                    size: layout.size,
                    stride: layout.stride,
                    offset: layout.offset,
                })
            })
            .collect();

        Ok(Self { buffer, attributes, vertex_count: geometry.vertex_count() })
    }

    /// Binds the buffer and points every resolved attribute into it.
    pub fn bind<G>(&self, gl: &G)
    where
        G: GraphicsContext<Buffer = B>,
    {
        gl.bind_array_buffer(Some(&self.buffer));
        for attr in &self.attributes {
            gl.enable_vertex_attrib_array(attr.index);
            gl.vertex_attrib_pointer(attr.index, attr.size, attr.stride, attr.offset);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{load_program, ShaderSource};
    use crate::testing::{Call, RecordingGl, TRIANGLE_FS, TRIANGLE_VS};

    #[test]
    fn index_ramp_covers_largest_fan() {
        let ramp = Geometry::index_ramp();
        assert_eq!(ramp.vertex_count(), 22);
        assert_eq!(ramp.data().first(), Some(&0.0));
        assert_eq!(ramp.data().last(), Some(&21.0));
    }

    #[test]
    fn colored_triangle_layout_matches_blocks() {
        let tri = Geometry::colored_triangle();
        assert_eq!(tri.data().len(), 6 + 12);
        let color = tri.attributes()[1];
        assert_eq!((color.size, color.stride, color.offset), (4, 16, 24));
    }

    #[test]
    fn upload_resolves_attributes_and_binds_pointers() {
        let gl = RecordingGl::new();
        let program = load_program(
            &gl,
            &ShaderSource::vertex(TRIANGLE_VS),
            &ShaderSource::fragment(TRIANGLE_FS),
        )
        .unwrap();
        let geometry = Geometry::colored_triangle();
        let buffer = VertexBuffer::upload(&gl, &program, &geometry).unwrap();
        assert!(gl.calls().contains(&Call::BufferData(geometry.data().to_vec())));

        gl.clear_calls();
        buffer.bind(&gl);
        let calls = gl.calls();
        assert!(calls.contains(&Call::AttribPointer { index: 0, size: 2, stride: 8, offset: 0 }));
        assert!(calls.contains(&Call::AttribPointer { index: 1, size: 4, stride: 16, offset: 24 }));
    }

    #[test]
    fn inactive_attributes_are_skipped() {
        let gl = RecordingGl::new();
        let program = load_program(
            &gl,
            &ShaderSource::vertex(TRIANGLE_VS),
            &ShaderSource::fragment(TRIANGLE_FS),
        )
        .unwrap();
        let buffer = VertexBuffer::upload(&gl, &program, &Geometry::index_ramp()).unwrap();

        gl.clear_calls();
        buffer.bind(&gl);
        assert!(!gl.calls().iter().any(|c| matches!(c, Call::EnableAttrib(_))));
    }
}
