//! A rotating triangle in a window.
//!
//! The program is an [`Animation`] handler plugged into plinth's message
//! loop: events go through [`dispatch::handle_event`], and every loop
//! iteration renders one frame with [`render::render_frame`]. Both share a
//! single [`AnimationState`].

pub mod app;
pub mod config;
pub mod dispatch;
pub mod render;
pub mod state;
pub mod status;

use std::io::Write;

use plinth::{
    graphics::Surface,
    window::{DispatchResult, Event, WindowHandler},
};

pub use state::AnimationState;
pub use status::StatusLog;

/// The program's window handler.
pub struct Animation<W: Write> {
    pub state: AnimationState,
    pub status: StatusLog<W>,
}

impl<W: Write> Animation<W> {
    #[must_use]
    pub fn new(status: StatusLog<W>) -> Self {
        Self {
            state: AnimationState::new(),
            status,
        }
    }
}

impl<W: Write> WindowHandler for Animation<W> {
    fn on_event(&mut self, surface: &mut dyn Surface, event: Event) -> DispatchResult {
        dispatch::handle_event(event, &mut self.state, surface, &mut self.status)
    }

    fn on_idle(&mut self, surface: &mut dyn Surface) {
        render::render_frame(&mut self.state, surface);
    }
}
