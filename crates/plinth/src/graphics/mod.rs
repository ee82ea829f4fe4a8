pub mod palette;

use geometry::{ClipSpace, Point, Rect, ScreenPx};

pub use self::palette::{Channel, PaletteEntry, PaletteFlags, PaletteTable, PixelFormatInfo};

/// How finished frames reach the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BufferMode {
    /// Render into a back buffer and swap it in on present.
    #[default]
    Double,
    /// Render straight into the visible buffer. Present is a no-op.
    Single,
}

/// What a pixel of the surface stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Rgba,
    /// Each pixel is an index into the surface's palette.
    Indexed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub buffer_mode: BufferMode,
    pub color_mode: ColorMode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// A vertex carrying both a direct color and a palette index, so the same
/// geometry draws correctly in either [`ColorMode`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Point<i32, ClipSpace>,
    pub color: Color,
    pub index: i32,
}

/// The drawable target of a window.
///
/// None of these operations can fail once the surface exists.
pub trait Surface {
    fn set_viewport(&mut self, viewport: Rect<i32, ScreenPx>);

    /// Clears the color buffer.
    fn clear(&mut self);

    /// Replaces the model transform with a rotation of `degrees` about the
    /// z axis.
    fn set_rotation(&mut self, degrees: f32);

    fn draw_triangle(&mut self, vertices: &[Vertex; 3]);

    /// Flushes queued drawing commands to the device.
    fn flush(&mut self);

    /// Makes the frame visible. Swaps buffers when double buffered, does
    /// nothing otherwise.
    fn present(&mut self);

    /// Re-selects and realizes the surface's palette against the system
    /// palette. Returns true if the surface has a palette to realize.
    fn realize_palette(&mut self) -> bool;
}
