//! Timestamped status lines on standard output.

use std::io::{self, Write};

use chrono::{Local, NaiveDateTime};
use plinth::input::DisplayState;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes one line per notable event, prefixed with the local time.
///
/// Write failures are logged and otherwise ignored; a broken stdout must not
/// take the window down with it.
pub struct StatusLog<W: Write> {
    out: W,
    clock: fn() -> NaiveDateTime,
}

impl StatusLog<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StatusLog<W> {
    pub fn new(out: W) -> Self {
        Self::with_clock(out, local_now)
    }

    pub fn with_clock(out: W, clock: fn() -> NaiveDateTime) -> Self {
        Self { out, clock }
    }

    pub fn display_power(&mut self, state: DisplayState) {
        self.line(format_args!("Screen is {state} now"));
    }

    pub fn mouse_click(&mut self) {
        self.line(format_args!("Mouse click"));
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn line(&mut self, message: std::fmt::Arguments) {
        let timestamp = (self.clock)().format(TIMESTAMP_FORMAT);
        let result = writeln!(self.out, "{timestamp} {message}");

        if let Err(err) = result.and_then(|()| self.out.flush()) {
            tracing::warn!(%err, "failed to write status line");
        }
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
