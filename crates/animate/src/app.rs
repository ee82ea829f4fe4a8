//! Arguments in, exit status out.

use std::io::Write;

use geometry::{Extent, Offset};
use plinth::{
    window::{WindowDesc, WindowHandler},
    Error,
};

use crate::{
    config::{Command, Config, USAGE},
    Animation, StatusLog,
};

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// Opens the window and reports fatal errors to the user.
pub trait Platform {
    fn run_window<H: WindowHandler>(
        &mut self,
        desc: &WindowDesc,
        handler: &mut H,
    ) -> Result<(), Error>;

    fn show_error(&mut self, message: &str);
}

/// The platform's own windowing backend.
pub struct Native;

impl Platform for Native {
    fn run_window<H: WindowHandler>(
        &mut self,
        desc: &WindowDesc,
        handler: &mut H,
    ) -> Result<(), Error> {
        plinth::run(desc, handler)
    }

    fn show_error(&mut self, message: &str) {
        plinth::show_error(message);
    }
}

#[must_use]
pub fn window_desc(config: &Config) -> WindowDesc<'static> {
    WindowDesc {
        title: "animate",
        position: Offset::new(0, 0),
        size: Extent::new(350, 700),
        surface: config.surface(),
    }
}

/// Runs the program with the arguments that follow its name. Usage text and
/// status lines go to `out`.
///
/// Returns [`SUCCESS`] after `-h` or a requested quit, and [`FAILURE`] if the
/// window could not be set up or its event queue could not be read. Setup
/// failures are also shown through [`Platform::show_error`].
pub fn run<P, I, S, W>(platform: &mut P, args: I, out: &mut W) -> u8
where
    P: Platform,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let config = match Command::from_args(args) {
        Command::Help => {
            if let Err(err) = out.write_all(USAGE.as_bytes()) {
                tracing::warn!(%err, "failed to print usage");
            }
            return SUCCESS;
        }
        Command::Run(config) => config,
    };

    tracing::info!(?config, "starting");

    let mut animation = Animation::new(StatusLog::new(out));

    match platform.run_window(&window_desc(&config), &mut animation) {
        Ok(()) => SUCCESS,
        Err(err) => {
            tracing::error!(%err, "exiting");
            if err.is_startup() {
                platform.show_error(&err.to_string());
            }
            FAILURE
        }
    }
}
