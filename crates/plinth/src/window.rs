use geometry::{Extent, Offset, Point, ScreenPx};

use crate::{
    graphics::{Surface, SurfaceConfig},
    input::{DisplayState, Key, MouseButton},
};

/// A platform notification delivered to a [`WindowHandler`].
///
/// Messages that don't map onto one of these never reach the handler; the
/// platform handles them itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// The OS wants (part of) the window redrawn now.
    Paint,
    /// The client area changed size.
    Resize(Extent<u32, ScreenPx>),
    Key(Key),
    /// The window gained or lost activation. `minimized` is true if the
    /// window is iconic at the time of the change.
    Activate { minimized: bool },
    /// The system palette changed. `by_self` is true if this window's own
    /// palette realization caused it.
    PaletteChanged { by_self: bool },
    /// The window is about to receive focus and may realize its palette.
    QueryNewPalette,
    /// The console display was switched on, off, or dimmed.
    DisplayPower(DisplayState),
    PointerPress {
        button: MouseButton,
        at: Point<i32, ScreenPx>,
    },
    /// The user asked for the window to close (X button, Alt-F4, etc.)
    CloseRequested,
}

/// What the platform should do after a handler has seen an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchResult {
    /// Handled; nothing further to do.
    Continue,
    /// Schedule a paint for the whole window.
    RequestRepaint,
    /// Leave the message loop once pending messages are processed.
    RequestQuit,
    /// Report to the platform whether this window realized a palette.
    PaletteRealized(bool),
    /// Not handled; apply the platform's default behavior.
    Default,
}

/// Trait for handling window events.
pub trait WindowHandler {
    /// Called synchronously for each event the platform delivers.
    fn on_event(&mut self, surface: &mut dyn Surface, event: Event) -> DispatchResult;

    /// Called once per loop iteration, after all pending events have been
    /// handled.
    fn on_idle(&mut self, surface: &mut dyn Surface);
}

/// A description of the window to be created.
#[derive(Clone, Copy, Debug)]
pub struct WindowDesc<'a> {
    pub title: &'a str,
    pub position: Offset<i32, ScreenPx>,
    pub size: Extent<u32, ScreenPx>,
    pub surface: SurfaceConfig,
}
