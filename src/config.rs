//! Built-in demo configurations.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::Geometry;
use crate::input::MouseMapping;
use crate::render::DrawMode;
use crate::scene::{Field, UniformSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoKind {
    /// The colored triangle.
    #[default]
    Basics,
    /// A triangle that follows the pointer.
    Mouse,
    /// A regular polygon with a side-count slider and a color picker.
    Polygon,
}

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [DemoKind::Basics, DemoKind::Mouse, DemoKind::Polygon];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::Basics => "basics",
            DemoKind::Mouse => "mouse",
            DemoKind::Polygon => "polygon",
        }
    }

    pub fn config(self) -> DemoConfig {
        match self {
            DemoKind::Basics => DemoConfig::basics(),
            DemoKind::Mouse => DemoConfig::mouse(),
            DemoKind::Polygon => DemoConfig::polygon(),
        }
    }
}

impl FromStr for DemoKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownDemo(s.to_string()))
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ids of the optional page controls a demo listens to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub side_slider: Option<&'static str>,
    pub side_label: Option<&'static str>,
    pub color_picker: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Shader sources are read from `<program>VS` / `<program>FS`.
    pub program: &'static str,
    pub clear_color: [f32; 4],
    pub geometry: Geometry,
    pub draw_mode: DrawMode,
    pub mouse_mapping: MouseMapping,
    pub uniforms: Vec<UniformSpec>,
    pub side_count: u32,
    pub radius: f32,
    pub color: [f32; 4],
    pub controls: Controls,
}

impl DemoConfig {
    pub fn basics() -> Self {
        Self {
            program: "triangle",
            clear_color: [0.4, 0.6, 1.0, 1.0],
            geometry: Geometry::colored_triangle(),
            draw_mode: DrawMode::Triangles { count: 3 },
            mouse_mapping: MouseMapping::ClipSpace,
            uniforms: Vec::new(),
            side_count: 3,
            radius: 0.5,
            color: [1.0, 1.0, 1.0, 1.0],
            controls: Controls::default(),
        }
    }

    pub fn mouse() -> Self {
        Self {
            program: "mouse",
            clear_color: [0.1, 0.1, 0.1, 1.0],
            geometry: Geometry::triangle(),
            draw_mode: DrawMode::Triangles { count: 3 },
            mouse_mapping: MouseMapping::PixelFlip,
            uniforms: vec![
                UniformSpec::new("u_mouse", Field::MousePosition),
                UniformSpec::new("u_resolution", Field::ViewportSize),
                UniformSpec::new("u_color", Field::Color),
            ],
            side_count: 3,
            radius: 0.5,
            color: [1.0, 0.5, 0.0, 1.0],
            controls: Controls::default(),
        }
    }

    pub fn polygon() -> Self {
        Self {
            program: "polygon",
            clear_color: [0.95, 0.95, 0.95, 1.0],
            geometry: Geometry::index_ramp(),
            draw_mode: DrawMode::Fan,
            mouse_mapping: MouseMapping::ClipSpace,
            uniforms: vec![
                UniformSpec::new("u_center", Field::MousePosition),
                UniformSpec::new("u_resolution", Field::ViewportSize),
                UniformSpec::new("u_sides", Field::SideCount),
                UniformSpec::new("u_radius", Field::Radius),
                UniformSpec::new("u_color", Field::Color),
            ],
            side_count: 5,
            radius: 0.5,
            color: [0.2, 0.4, 1.0, 1.0],
            controls: Controls {
                side_slider: Some("sides"),
                side_label: Some("sidesLabel"),
                color_picker: Some("color"),
            },
        }
    }
}
