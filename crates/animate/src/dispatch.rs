use std::io::Write;

use geometry::{Extent, Rect};
use plinth::{
    graphics::Surface,
    input::{Key, MouseButton},
    window::{DispatchResult, Event},
};

use crate::{render::render_frame, AnimationState, StatusLog};

/// Applies one window event to the animation.
pub fn handle_event<W: Write>(
    event: Event,
    state: &mut AnimationState,
    surface: &mut dyn Surface,
    status: &mut StatusLog<W>,
) -> DispatchResult {
    match event {
        Event::Paint => {
            render_frame(state, surface);
            DispatchResult::Continue
        }
        Event::Resize(extent) => {
            let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
            let extent = Extent::new(clamp(extent.width), clamp(extent.height));
            surface.set_viewport(Rect::from_extent(extent));
            DispatchResult::RequestRepaint
        }
        Event::Key(Key::Escape) | Event::CloseRequested => DispatchResult::RequestQuit,
        Event::Key(Key::Space) => {
            state.toggle();
            DispatchResult::Continue
        }
        Event::Key(Key::Char(_)) => DispatchResult::Continue,
        Event::Activate { minimized } => {
            state.is_animating = !minimized;
            DispatchResult::Continue
        }
        Event::PaletteChanged { by_self: false } => {
            // Another window took the system palette; take our colors back.
            surface.realize_palette();
            DispatchResult::Continue
        }
        Event::PaletteChanged { by_self: true } | Event::QueryNewPalette => {
            DispatchResult::PaletteRealized(surface.realize_palette())
        }
        Event::DisplayPower(display) => {
            status.display_power(display);
            DispatchResult::Continue
        }
        Event::PointerPress {
            button: MouseButton::Left,
            ..
        } => {
            status.mouse_click();
            DispatchResult::Continue
        }
        Event::PointerPress { .. } => DispatchResult::Default,
    }
}
