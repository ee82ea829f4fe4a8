use std::fmt;

/// Mouse buttons (e.g. left, right, middle, etc.)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// An extra button, numbered from 1 as the platform reports it.
    Other(u16),
}

/// A key press, as the character it produced after keyboard translation.
///
/// Only the keys the program reacts to get their own variant; everything
/// else is carried as the translated character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    Char(char),
}

impl Key {
    pub const ESCAPE_CHAR: char = '\u{1b}';

    #[must_use]
    pub fn from_char(c: char) -> Self {
        match c {
            Self::ESCAPE_CHAR => Self::Escape,
            ' ' => Self::Space,
            other => Self::Char(other),
        }
    }
}

/// The console display state reported by a power-setting notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayState {
    Off,
    On,
    Dimmed,
}

impl DisplayState {
    /// Decodes the raw notification payload. 0 is off, 1 is on, and any
    /// other value is reported as dimmed.
    #[must_use]
    pub fn from_raw(value: u32) -> Self {
        match value {
            0 => Self::Off,
            1 => Self::On,
            _ => Self::Dimmed,
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::On => "on",
            Self::Dimmed => "dimmed",
        })
    }
}
