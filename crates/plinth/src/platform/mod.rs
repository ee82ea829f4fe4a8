#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
mod active;

#[cfg(target_os = "windows")]
mod win32;

#[cfg(target_os = "windows")]
pub use win32::{show_error, Window};

#[cfg(not(target_os = "windows"))]
mod unsupported;

#[cfg(not(target_os = "windows"))]
pub use unsupported::{show_error, Window};
