use geometry::{Rect, ScreenPx};

#[allow(clippy::wildcard_imports)]
use windows::Win32::{
    Foundation::HWND,
    Graphics::{Gdi::*, OpenGL::*},
};

use crate::{
    graphics::{
        BufferMode, Channel, ColorMode, PaletteTable, PixelFormatInfo, Surface, SurfaceConfig,
        Vertex,
    },
    Error,
};

/// An OpenGL surface on a window's device context.
///
/// The window class uses `CS_OWNDC`, so `hdc` stays valid for the lifetime
/// of the window and is only released in [`GlSurface::release`].
pub struct GlSurface {
    hdc: HDC,
    context: Option<HGLRC>,
    palette: Option<HPALETTE>,
}

impl GlSurface {
    pub fn new(hwnd: HWND) -> Self {
        Self {
            hdc: unsafe { GetDC(hwnd) },
            context: None,
            palette: None,
        }
    }

    /// Sets the pixel format, installs a palette if the granted format needs
    /// one, then creates and binds the rendering context.
    pub fn configure(&mut self, config: SurfaceConfig) -> Result<(), Error> {
        let format = self.set_pixel_format(config)?;
        tracing::info!(?format, "pixel format set");

        if let Some(table) = PaletteTable::for_format(&format) {
            self.palette = install_palette(self.hdc, &table);
        }

        let context = unsafe { wglCreateContext(self.hdc) }.map_err(|err| {
            tracing::error!(%err, "wglCreateContext");
            Error::CreateContext
        })?;
        self.context = Some(context);

        if !unsafe { wglMakeCurrent(self.hdc, context) }.as_bool() {
            return Err(Error::CreateContext);
        }

        Ok(())
    }

    fn set_pixel_format(&self, config: SurfaceConfig) -> Result<PixelFormatInfo, Error> {
        let mut flags = PFD_DRAW_TO_WINDOW | PFD_SUPPORT_OPENGL;
        if config.buffer_mode == BufferMode::Double {
            flags |= PFD_DOUBLEBUFFER;
        }

        let pixel_type = match config.color_mode {
            ColorMode::Rgba => PFD_TYPE_RGBA,
            ColorMode::Indexed => PFD_TYPE_COLORINDEX,
        };

        let mut pfd = PIXELFORMATDESCRIPTOR {
            nSize: std::mem::size_of::<PIXELFORMATDESCRIPTOR>() as u16,
            nVersion: 1,
            dwFlags: flags,
            iPixelType: pixel_type,
            cColorBits: 32,
            ..Default::default()
        };

        let format = unsafe { ChoosePixelFormat(self.hdc, &pfd) };
        if format == 0 {
            return Err(Error::ChoosePixelFormat);
        }

        if !unsafe { SetPixelFormat(self.hdc, format, &pfd) }.as_bool() {
            return Err(Error::SetPixelFormat);
        }

        // Read back what we were actually given.
        unsafe {
            DescribePixelFormat(
                self.hdc,
                format,
                std::mem::size_of::<PIXELFORMATDESCRIPTOR>() as u32,
                Some(&mut pfd as *mut _),
            );
        }

        Ok(PixelFormatInfo {
            color_mode: if pfd.iPixelType == PFD_TYPE_COLORINDEX {
                ColorMode::Indexed
            } else {
                ColorMode::Rgba
            },
            needs_palette: pfd.dwFlags.0 & PFD_NEED_PALETTE.0 != 0,
            color_bits: pfd.cColorBits,
            red: Channel {
                bits: pfd.cRedBits,
                shift: pfd.cRedShift,
            },
            green: Channel {
                bits: pfd.cGreenBits,
                shift: pfd.cGreenShift,
            },
            blue: Channel {
                bits: pfd.cBlueBits,
                shift: pfd.cBlueShift,
            },
        })
    }

    /// Unbinds and deletes the context, releases the device context and
    /// deletes the palette. Safe to call on a partially configured surface.
    pub fn release(&mut self, hwnd: HWND) {
        unsafe {
            wglMakeCurrent(HDC::default(), HGLRC::default());
            ReleaseDC(hwnd, self.hdc);

            if let Some(context) = self.context.take() {
                wglDeleteContext(context);
            }

            if let Some(palette) = self.palette.take() {
                DeleteObject(HGDIOBJ(palette.0));
            }
        }
    }
}

impl Surface for GlSurface {
    fn set_viewport(&mut self, viewport: Rect<i32, ScreenPx>) {
        let origin = viewport.top_left();
        let extent = viewport.extent();
        unsafe { glViewport(origin.x, origin.y, extent.width, extent.height) };
    }

    fn clear(&mut self) {
        unsafe { glClear(GL_COLOR_BUFFER_BIT) };
    }

    fn set_rotation(&mut self, degrees: f32) {
        unsafe {
            glMatrixMode(GL_MODELVIEW);
            glLoadIdentity();
            glRotatef(degrees, 0.0, 0.0, 1.0);
        }
    }

    fn draw_triangle(&mut self, vertices: &[Vertex; 3]) {
        unsafe {
            glBegin(GL_TRIANGLES);
            for vertex in vertices {
                glIndexi(vertex.index);
                glColor3f(vertex.color.r, vertex.color.g, vertex.color.b);
                glVertex2i(vertex.position.x, vertex.position.y);
            }
            glEnd();
        }
    }

    fn flush(&mut self) {
        unsafe { glFlush() };
    }

    fn present(&mut self) {
        // no-op on single-buffered formats
        unsafe { SwapBuffers(self.hdc) };
    }

    fn realize_palette(&mut self) -> bool {
        let Some(palette) = self.palette else {
            return false;
        };

        unsafe {
            UnrealizeObject(HGDIOBJ(palette.0));
            SelectPalette(self.hdc, palette, false);
            RealizePalette(self.hdc);
        }

        true
    }
}

/// `LOGPALETTE` with room for a full 256-entry table.
#[repr(C)]
struct LogPalette {
    version: u16,
    num_entries: u16,
    entries: [PALETTEENTRY; PaletteTable::MAX_ENTRIES],
}

fn install_palette(hdc: HDC, table: &PaletteTable) -> Option<HPALETTE> {
    let mut log = LogPalette {
        version: 0x300,
        num_entries: table.len() as u16,
        entries: [PALETTEENTRY::default(); PaletteTable::MAX_ENTRIES],
    };

    for (dst, src) in log.entries.iter_mut().zip(table.entries()) {
        *dst = PALETTEENTRY {
            peRed: src.red,
            peGreen: src.green,
            peBlue: src.blue,
            peFlags: src.flags.bits(),
        };
    }

    let palette = unsafe { CreatePalette((&log as *const LogPalette).cast::<LOGPALETTE>()) };
    if palette.0 == 0 {
        tracing::warn!(
            entries = table.len(),
            "CreatePalette failed, continuing without one"
        );
        return None;
    }

    unsafe {
        SelectPalette(hdc, palette, false);
        RealizePalette(hdc);
    }

    tracing::info!(entries = table.len(), "palette installed");
    Some(palette)
}
