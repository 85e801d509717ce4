//! UI events and how they land in the scene.

use crate::color::parse_hex_color;
use crate::error::Result;
use crate::scene::{SceneState, Update};

/// How a pointer position in canvas pixels (origin top-left) becomes the
/// value of the mouse uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseMapping {
    /// Pixels with the origin moved to the bottom-left: `(x, height - y)`.
    PixelFlip,
    /// Clip space, `[-1, 1]` on both axes with Y up.
    #[default]
    ClipSpace,
}

impl MouseMapping {
    pub fn map(self, [x, y]: [f32; 2], [width, height]: [u32; 2]) -> [f32; 2] {
        let (w, h) = (width as f32, height as f32);
        match self {
            MouseMapping::PixelFlip => [x, h - y],
            MouseMapping::ClipSpace if width == 0 || height == 0 => [0.0, 0.0],
            MouseMapping::ClipSpace => [x / w * 2.0 - 1.0, 1.0 - y / h * 2.0],
        }
    }

    /// The mapped position of the canvas center.
    pub fn center(self, viewport: [u32; 2]) -> [f32; 2] {
        self.map([viewport[0] as f32 / 2.0, viewport[1] as f32 / 2.0], viewport)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer position in canvas pixels.
    MouseMove([f32; 2]),
    SideCountChange(u32),
    /// Value of a color picker, `#rrggbb`.
    ColorChange(String),
    Resize(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Requested,
    Skipped,
}

/// Applies `event` to `state`. A color string that does not parse leaves the
/// state untouched and returns the error.
pub fn apply<L>(state: &mut SceneState<L>, mapping: MouseMapping, event: InputEvent) -> Result<Redraw> {
    match event {
        InputEvent::MouseMove(pixel) => {
            let mapped = mapping.map(pixel, state.viewport_size());
            state.set(Update::MousePosition(mapped));
            Ok(Redraw::Requested)
        }
        InputEvent::SideCountChange(count) => {
            state.set(Update::SideCount(count));
            Ok(Redraw::Requested)
        }
        InputEvent::ColorChange(hex) => {
            state.set(Update::Color(parse_hex_color(&hex)?));
            Ok(Redraw::Requested)
        }
        InputEvent::Resize(width, height) => {
            state.set(Update::ViewportSize([width, height]));
            Ok(Redraw::Skipped)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::scene::{Field, UniformSpec};
    use crate::shader::{load_program, ShaderSource};
    use crate::testing::{RecordingGl, FLAT_FS, MOUSE_VS};

    fn scene() -> SceneState<String> {
        let gl = RecordingGl::new();
        let program =
            load_program(&gl, &ShaderSource::vertex(MOUSE_VS), &ShaderSource::fragment(FLAT_FS))
                .unwrap();
        let mut state =
            SceneState::new(&gl, &program, &[UniformSpec::new("u_mouse", Field::MousePosition)]);
        state.set(Update::ViewportSize([200, 100]));
        state
    }

    #[test]
    fn pixel_flip_moves_origin_to_bottom_left() {
        assert_eq!(MouseMapping::PixelFlip.map([10.0, 30.0], [200, 100]), [10.0, 70.0]);
        assert_eq!(MouseMapping::PixelFlip.center([200, 100]), [100.0, 50.0]);
    }

    #[test]
    fn clip_space_spans_unit_square_with_y_up() {
        let m = MouseMapping::ClipSpace;
        assert_eq!(m.map([0.0, 0.0], [200, 100]), [-1.0, 1.0]);
        assert_eq!(m.map([200.0, 100.0], [200, 100]), [1.0, -1.0]);
        assert_eq!(m.center([200, 100]), [0.0, 0.0]);
        assert_eq!(m.map([5.0, 5.0], [0, 0]), [0.0, 0.0]);
    }

    #[test]
    fn mouse_move_uses_current_viewport() {
        let mut state = scene();
        let redraw = apply(&mut state, MouseMapping::ClipSpace, InputEvent::MouseMove([150.0, 25.0]));
        assert_eq!(redraw.unwrap(), Redraw::Requested);
        assert_eq!(state.mouse_position(), [0.5, 0.5]);
    }

    #[test]
    fn resize_keeps_sides_and_color_and_skips_redraw() {
        let mut state = scene();
        apply(&mut state, MouseMapping::default(), InputEvent::SideCountChange(9)).unwrap();
        apply(&mut state, MouseMapping::default(), InputEvent::ColorChange("#008000".into()))
            .unwrap();
        let color = state.color();

        let redraw = apply(&mut state, MouseMapping::default(), InputEvent::Resize(640, 360));
        assert_eq!(redraw.unwrap(), Redraw::Skipped);
        assert_eq!(state.viewport_size(), [640, 360]);
        assert_eq!(state.side_count(), 9);
        assert_eq!(state.color(), color);
    }

    #[test]
    fn bad_color_leaves_state_alone() {
        let mut state = scene();
        let before = state.color();
        let err = apply(&mut state, MouseMapping::default(), InputEvent::ColorChange("red".into()));
        assert!(matches!(err, Err(Error::InvalidColor(_))));
        assert_eq!(state.color(), before);
    }
}
