use geometry::Point;
use plinth::graphics::{Color, Surface, Vertex};

use crate::AnimationState;

/// The triangle, with palette indices 1..=3 matching the indexed palette's
/// red, green and blue entries.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex {
        position: Point::new(0, 1),
        color: Color::RED,
        index: 1,
    },
    Vertex {
        position: Point::new(-1, -1),
        color: Color::GREEN,
        index: 2,
    },
    Vertex {
        position: Point::new(1, -1),
        color: Color::BLUE,
        index: 3,
    },
];

/// Draws one frame, advancing the rotation first if animating.
pub fn render_frame(state: &mut AnimationState, surface: &mut dyn Surface) {
    surface.clear();
    state.advance();
    surface.set_rotation(state.rotation_angle);
    surface.draw_triangle(&TRIANGLE);
    surface.flush();
    surface.present();
}

#[cfg(test)]
mod tests {
    use plinth::headless::{Command, HeadlessSurface};

    use super::*;

    #[test]
    fn frame_command_order() {
        let mut state = AnimationState::new();
        let mut surface = HeadlessSurface::new();

        render_frame(&mut state, &mut surface);

        assert_eq!(
            surface.commands(),
            [
                Command::Clear,
                Command::SetRotation(AnimationState::ROTATION_STEP),
                Command::DrawTriangle(TRIANGLE),
                Command::Flush,
                Command::Present,
            ]
        );
    }

    #[test]
    fn paused_frames_keep_the_angle() {
        let mut state = AnimationState::new();
        let mut surface = HeadlessSurface::new();

        render_frame(&mut state, &mut surface);
        state.toggle();
        render_frame(&mut state, &mut surface);
        render_frame(&mut state, &mut surface);

        let angles: Vec<f32> = surface
            .commands()
            .iter()
            .filter_map(|command| match command {
                Command::SetRotation(degrees) => Some(*degrees),
                _ => None,
            })
            .collect();

        let step = AnimationState::ROTATION_STEP;
        assert_eq!(angles, [step, step, step]);
    }

    #[test]
    fn angle_never_decreases_while_animating() {
        let mut state = AnimationState::new();
        let mut surface = HeadlessSurface::new();

        let mut last = state.rotation_angle;
        for _ in 0..1000 {
            render_frame(&mut state, &mut surface);
            assert!(state.rotation_angle > last);
            last = state.rotation_angle;
        }
    }

    #[test]
    fn triangle_indices_and_colors() {
        let indices: Vec<_> = TRIANGLE.iter().map(|v| v.index).collect();
        assert_eq!(indices, [1, 2, 3]);

        let colors: Vec<_> = TRIANGLE.iter().map(|v| v.color).collect();
        assert_eq!(colors, [Color::RED, Color::GREEN, Color::BLUE]);
    }
}
