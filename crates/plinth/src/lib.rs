//! Platform plumbing for a single OpenGL window.
//!
//! ## Goals
//!
//! - One window, one surface, one thread.
//! - Platform messages are translated into a small [`window::Event`] enum
//!   and handed to a [`window::WindowHandler`] synchronously, so replies such
//!   as palette ownership can flow back to the platform.
//! - The drawing seam ([`graphics::Surface`]) is narrow enough that the
//!   whole program can be driven headless in tests.
//!
//! ## Development Timeline
//!
//! - Win32/WGL is the only backend. Other targets report
//!   [`Error::Unsupported`] at startup.

pub mod event_loop;
pub mod graphics;
pub mod headless;
pub mod input;
pub mod window;

mod error;
mod platform;

pub use error::Error;
pub use platform::show_error;

use window::{WindowDesc, WindowHandler};

/// Creates the described window and runs its message loop until the handler
/// requests a quit or the platform fails.
///
/// The window, its rendering context and palette are torn down before this
/// returns.
pub fn run<Handler: WindowHandler>(desc: &WindowDesc, handler: &mut Handler) -> Result<(), Error> {
    let mut window = platform::Window::new(desc)?;
    let result = event_loop::run(&mut window, handler);
    tracing::debug!(ok = result.is_ok(), "message loop finished");
    result
}
