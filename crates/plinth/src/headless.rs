//! A windowless backend: a surface that records what was drawn, and a pump
//! that replays a fixed script of events.

use std::collections::VecDeque;

use geometry::{Rect, ScreenPx};

use crate::{
    event_loop::{MessagePump, PumpStatus},
    graphics::{PaletteTable, Surface, Vertex},
    window::{DispatchResult, Event, WindowHandler},
    Error,
};

/// A single call made on a [`HeadlessSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SetViewport(Rect<i32, ScreenPx>),
    Clear,
    SetRotation(f32),
    DrawTriangle([Vertex; 3]),
    Flush,
    Present,
    RealizePalette,
}

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    commands: Vec<Command>,
    palette: Option<PaletteTable>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_palette(palette: PaletteTable) -> Self {
        Self {
            commands: Vec::new(),
            palette: Some(palette),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl Surface for HeadlessSurface {
    fn set_viewport(&mut self, viewport: Rect<i32, ScreenPx>) {
        self.commands.push(Command::SetViewport(viewport));
    }

    fn clear(&mut self) {
        self.commands.push(Command::Clear);
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.commands.push(Command::SetRotation(degrees));
    }

    fn draw_triangle(&mut self, vertices: &[Vertex; 3]) {
        self.commands.push(Command::DrawTriangle(*vertices));
    }

    fn flush(&mut self) {
        self.commands.push(Command::Flush);
    }

    fn present(&mut self) {
        self.commands.push(Command::Present);
    }

    fn realize_palette(&mut self) -> bool {
        self.commands.push(Command::RealizePalette);
        self.palette.is_some()
    }
}

/// Replays batches of events. Each call to `drain` consumes one batch; once
/// the script runs out the pump reports `Quitting`.
#[derive(Debug, Default)]
pub struct ScriptedPump {
    script: VecDeque<Result<Vec<Event>, Error>>,
    surface: HeadlessSurface,
    results: Vec<DispatchResult>,
    repaints: usize,
    quit_posted: bool,
}

impl ScriptedPump {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_surface(surface: HeadlessSurface) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    /// Queues a batch of events to be delivered by one drain.
    #[must_use]
    pub fn batch(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.script.push_back(Ok(events.into_iter().collect()));
        self
    }

    /// Queues a drain with nothing pending.
    #[must_use]
    pub fn idle(mut self) -> Self {
        self.script.push_back(Ok(Vec::new()));
        self
    }

    /// Queues a drain that fails to read the event queue.
    #[must_use]
    pub fn fail(mut self) -> Self {
        self.script.push_back(Err(Error::MessageRetrieval));
        self
    }

    /// Every result the handler returned, in delivery order.
    #[must_use]
    pub fn results(&self) -> &[DispatchResult] {
        &self.results
    }

    #[must_use]
    pub fn repaints(&self) -> usize {
        self.repaints
    }
}

impl MessagePump for ScriptedPump {
    type Surface = HeadlessSurface;

    fn drain(&mut self, handler: &mut dyn WindowHandler) -> Result<PumpStatus, Error> {
        if self.quit_posted {
            return Ok(PumpStatus::Quitting);
        }

        let Some(batch) = self.script.pop_front() else {
            return Ok(PumpStatus::Quitting);
        };

        for event in batch? {
            let result = handler.on_event(&mut self.surface, event);
            match result {
                DispatchResult::RequestRepaint => self.repaints += 1,
                DispatchResult::RequestQuit => self.quit_posted = true,
                _ => {}
            }
            self.results.push(result);
        }

        if self.quit_posted {
            Ok(PumpStatus::Quitting)
        } else {
            Ok(PumpStatus::Running)
        }
    }

    fn surface(&mut self) -> &mut HeadlessSurface {
        &mut self.surface
    }
}
