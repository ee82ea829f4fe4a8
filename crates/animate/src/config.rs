//! Command-line configuration.
//!
//! The flags are exact single-dash words (`-sb`, `-ci`, `-h`) and anything
//! unrecognized is ignored, so they are matched directly.

use plinth::graphics::{BufferMode, ColorMode, SurfaceConfig};

pub const USAGE: &str = "animate [-ci] [-sb]\n  -sb   single buffered\n  -ci   color index\n";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub buffer_mode: BufferMode,
    pub color_mode: ColorMode,
}

impl Config {
    #[must_use]
    pub fn surface(&self) -> SurfaceConfig {
        SurfaceConfig {
            buffer_mode: self.buffer_mode,
            color_mode: self.color_mode,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    /// Print [`USAGE`] and exit without opening a window.
    Help,
}

impl Command {
    /// Parses the arguments following the program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();

        for arg in args {
            match arg.as_ref() {
                "-sb" => config.buffer_mode = BufferMode::Single,
                "-ci" => config.color_mode = ColorMode::Indexed,
                "-h" => return Self::Help,
                other => tracing::debug!(arg = other, "ignoring unrecognized argument"),
            }
        }

        Self::Run(config)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    /// Collects formatted log output.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn parse(args: &[&str]) -> Command {
        Command::from_args(args.iter().copied())
    }

    #[test]
    fn defaults() {
        assert_eq!(
            parse(&[]),
            Command::Run(Config {
                buffer_mode: BufferMode::Double,
                color_mode: ColorMode::Rgba,
            })
        );
    }

    #[test]
    fn flags() {
        assert_eq!(
            parse(&["-sb"]),
            Command::Run(Config {
                buffer_mode: BufferMode::Single,
                color_mode: ColorMode::Rgba,
            })
        );
        assert_eq!(
            parse(&["-ci", "-sb"]),
            Command::Run(Config {
                buffer_mode: BufferMode::Single,
                color_mode: ColorMode::Indexed,
            })
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["-h"]), Command::Help);
        assert_eq!(parse(&["-sb", "-h", "-ci"]), Command::Help);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        assert_eq!(parse(&["-xyz"]), parse(&[]));
        assert_eq!(parse(&["-SB", "--ci", "sb", "-ci"]), parse(&["-ci"]));
    }

    #[test]
    fn surface_config_follows_flags() {
        let Command::Run(config) = parse(&["-ci"]) else {
            panic!("expected a run command");
        };
        assert_eq!(config.surface().color_mode, ColorMode::Indexed);
        assert_eq!(config.surface().buffer_mode, BufferMode::Double);
    }

    #[test]
    fn ignored_arguments_are_logged() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let command = tracing::subscriber::with_default(subscriber, || parse(&["-xyz", "-sb"]));

        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(matches!(command, Command::Run(_)));
        assert!(logged.contains("ignoring unrecognized argument"), "{logged}");
        assert!(logged.contains("-xyz"), "{logged}");
        assert!(!logged.contains("-sb"), "{logged}");
    }
}
