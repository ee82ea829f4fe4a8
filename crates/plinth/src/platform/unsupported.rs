use crate::{
    event_loop::{MessagePump, PumpStatus},
    headless::HeadlessSurface,
    window::{WindowDesc, WindowHandler},
    Error,
};

/// Stand-in for targets without a windowing backend. It can never be
/// constructed.
pub enum Window {}

impl Window {
    pub fn new(desc: &WindowDesc) -> Result<Self, Error> {
        tracing::error!(title = desc.title, "no windowing backend for this target");
        Err(Error::Unsupported)
    }
}

impl MessagePump for Window {
    type Surface = HeadlessSurface;

    fn drain(&mut self, _handler: &mut dyn WindowHandler) -> Result<PumpStatus, Error> {
        match *self {}
    }

    fn surface(&mut self) -> &mut HeadlessSurface {
        match *self {}
    }
}

pub fn show_error(message: &str) {
    eprintln!("Error: {message}");
}
