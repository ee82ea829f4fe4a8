//! The Running/Quitting loop shared by every backend.
//!
//! One iteration drains the pending events through the handler, then lets
//! the handler render a frame. A quit request takes effect at the next
//! drain boundary; a failure to read events ends the loop with an error.

use crate::{graphics::Surface, window::WindowHandler, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PumpStatus {
    Running,
    Quitting,
}

/// A source of window events bound to a single surface.
pub trait MessagePump {
    type Surface: Surface;

    /// Delivers every pending event to `handler`.
    ///
    /// Returns `Quitting` once a quit has been requested and the events queued
    /// ahead of it have been handled.
    fn drain(&mut self, handler: &mut dyn WindowHandler) -> Result<PumpStatus, Error>;

    fn surface(&mut self) -> &mut Self::Surface;
}

pub fn run<Pump, Handler>(pump: &mut Pump, handler: &mut Handler) -> Result<(), Error>
where
    Pump: MessagePump,
    Handler: WindowHandler,
{
    loop {
        match pump.drain(handler)? {
            PumpStatus::Running => handler.on_idle(pump.surface()),
            PumpStatus::Quitting => {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }
}
