use std::ffi::CString;

use geometry::{Extent, Point};
#[allow(clippy::wildcard_imports)]
use windows::{
    core::PCSTR,
    s,
    Win32::{
        Foundation::{HANDLE, HWND, LPARAM, LRESULT, WPARAM},
        Graphics::Gdi::{BeginPaint, EndPaint, InvalidateRect, UpdateWindow, PAINTSTRUCT},
        System::{
            LibraryLoader::GetModuleHandleA,
            Power::{
                RegisterPowerSettingNotification, UnregisterPowerSettingNotification, HPOWERNOTIFY,
                POWERBROADCAST_SETTING,
            },
            SystemServices::GUID_CONSOLE_DISPLAY_STATE,
        },
        UI::WindowsAndMessaging::*,
    },
};

use super::active;
use crate::{
    event_loop::{MessagePump, PumpStatus},
    input::{DisplayState, Key, MouseButton},
    window::{DispatchResult, Event, WindowDesc, WindowHandler},
    Error,
};

mod surface;

pub use surface::GlSurface;

const CLASS_NAME: PCSTR = s!("plinth");

/// A top-level window with an OpenGL surface.
pub struct Window {
    hwnd: HWND,
    surface: GlSurface,
    power_notify: Option<HPOWERNOTIFY>,
    shown: bool,
}

impl Window {
    pub fn new(desc: &WindowDesc) -> Result<Self, Error> {
        let hwnd = create_window(desc)?;

        // From here on, dropping `window` tears down whatever was set up.
        let mut window = Self {
            hwnd,
            surface: GlSurface::new(hwnd),
            power_notify: None,
            shown: false,
        };

        window.surface.configure(desc.surface)?;

        window.power_notify = match unsafe {
            RegisterPowerSettingNotification(
                HANDLE(hwnd.0),
                &GUID_CONSOLE_DISPLAY_STATE,
                DEVICE_NOTIFY_WINDOW_HANDLE.0,
            )
        } {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(%err, "display state notifications unavailable");
                None
            }
        };

        tracing::info!(title = desc.title, "window created");
        Ok(window)
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe {
            if let Some(handle) = self.power_notify.take() {
                UnregisterPowerSettingNotification(handle);
            }

            self.surface.release(self.hwnd);
            DestroyWindow(self.hwnd);
        }
    }
}

impl MessagePump for Window {
    type Surface = GlSurface;

    fn drain(&mut self, handler: &mut dyn WindowHandler) -> Result<PumpStatus, Error> {
        let mut context = Context {
            handler,
            surface: &mut self.surface,
        };
        let _active = active::install(&mut context);

        if !self.shown {
            // Showing the window sends the first resize and paint, which the
            // handler needs to see.
            unsafe {
                ShowWindow(self.hwnd, SW_SHOW);
                UpdateWindow(self.hwnd);
            }
            self.shown = true;
        }

        let mut msg = MSG::default();
        while unsafe { PeekMessageA(&mut msg, None, 0, 0, PM_NOREMOVE) }.as_bool() {
            match unsafe { GetMessageA(&mut msg, None, 0, 0) }.0 {
                -1 => return Err(Error::MessageRetrieval),
                0 => return Ok(PumpStatus::Quitting),
                _ => unsafe {
                    TranslateMessage(&msg);
                    DispatchMessageA(&msg);
                },
            }
        }

        Ok(PumpStatus::Running)
    }

    fn surface(&mut self) -> &mut GlSurface {
        &mut self.surface
    }
}

/// Displays a blocking error dialog.
pub fn show_error(message: &str) {
    let text = CString::new(message).unwrap_or_default();
    unsafe {
        MessageBoxA(None, PCSTR(text.as_ptr().cast()), s!("Error"), MB_OK);
    }
}

fn create_window(desc: &WindowDesc) -> Result<HWND, Error> {
    let instance = unsafe { GetModuleHandleA(None) }.map_err(|_| Error::RegisterClass)?;

    let class = WNDCLASSA {
        style: CS_OWNDC,
        lpfnWndProc: Some(window_proc),
        hInstance: instance.into(),
        hIcon: unsafe { LoadIconW(None, IDI_WINLOGO) }.unwrap_or_default(),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default(),
        lpszClassName: CLASS_NAME,
        ..Default::default()
    };

    if unsafe { RegisterClassA(&class) } == 0 {
        return Err(Error::RegisterClass);
    }

    let title = CString::new(desc.title).unwrap_or_default();
    let hwnd = unsafe {
        CreateWindowExA(
            WINDOW_EX_STYLE::default(),
            CLASS_NAME,
            PCSTR(title.as_ptr().cast()),
            WS_OVERLAPPEDWINDOW | WS_CLIPSIBLINGS | WS_CLIPCHILDREN,
            desc.position.x,
            desc.position.y,
            i32::try_from(desc.size.width).unwrap_or(i32::MAX),
            i32::try_from(desc.size.height).unwrap_or(i32::MAX),
            None,
            None,
            instance,
            None,
        )
    };

    if hwnd.0 == 0 {
        return Err(Error::CreateWindow);
    }

    Ok(hwnd)
}

/// The handler and surface of the window currently being drained, reachable
/// from `window_proc` through [`active`].
struct Context<'a> {
    handler: &'a mut dyn WindowHandler,
    surface: &'a mut GlSurface,
}

unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let Some(event) = translate(hwnd, msg, wparam, lparam) else {
        return DefWindowProcA(hwnd, msg, wparam, lparam);
    };

    tracing::trace!(?event, "dispatch");

    // Messages sent while the handler is running (a palette realized from
    // inside `on_event` broadcasts WM_PALETTECHANGED) find the slot empty.
    let Some(result) = active::with::<Context, _>(|context| {
        context.handler.on_event(&mut *context.surface, event)
    }) else {
        return DefWindowProcA(hwnd, msg, wparam, lparam);
    };

    if msg == WM_PAINT {
        // The handler has drawn; validate the update region.
        let mut ps = PAINTSTRUCT::default();
        BeginPaint(hwnd, &mut ps);
        EndPaint(hwnd, &ps);
    }

    match result {
        DispatchResult::Continue if msg == WM_POWERBROADCAST => LRESULT(1),
        DispatchResult::Continue => LRESULT(0),
        DispatchResult::RequestRepaint => {
            InvalidateRect(hwnd, None, false);
            LRESULT(0)
        }
        DispatchResult::RequestQuit => {
            PostQuitMessage(0);
            LRESULT(0)
        }
        DispatchResult::PaletteRealized(owned) => LRESULT(isize::from(owned)),
        DispatchResult::Default => DefWindowProcA(hwnd, msg, wparam, lparam),
    }
}

#[allow(clippy::cast_possible_truncation)]
unsafe fn translate(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<Event> {
    let low_word = (lparam.0 & 0xFFFF) as u16;
    let high_word = ((lparam.0 >> 16) & 0xFFFF) as u16;

    let pointer = |button| Event::PointerPress {
        button,
        // client coordinates are signed
        at: Point::new(i32::from(low_word as i16), i32::from(high_word as i16)),
    };

    let event = match msg {
        WM_PAINT => Event::Paint,
        WM_SIZE => Event::Resize(Extent::new(u32::from(low_word), u32::from(high_word))),
        WM_CHAR => Event::Key(Key::from_char(char::from_u32(wparam.0 as u32)?)),
        WM_ACTIVATE => Event::Activate {
            minimized: IsIconic(hwnd).as_bool(),
        },
        WM_PALETTECHANGED => Event::PaletteChanged {
            by_self: wparam.0 as isize == hwnd.0,
        },
        WM_QUERYNEWPALETTE => Event::QueryNewPalette,
        WM_POWERBROADCAST if wparam.0 as u32 == PBT_POWERSETTINGCHANGE => {
            let setting = (lparam.0 as *const POWERBROADCAST_SETTING).as_ref()?;
            if setting.PowerSetting != GUID_CONSOLE_DISPLAY_STATE {
                return None;
            }
            let value = std::ptr::read_unaligned(setting.Data.as_ptr().cast::<u32>());
            Event::DisplayPower(DisplayState::from_raw(value))
        }
        WM_LBUTTONDOWN => pointer(MouseButton::Left),
        WM_MBUTTONDOWN => pointer(MouseButton::Middle),
        WM_RBUTTONDOWN => pointer(MouseButton::Right),
        WM_XBUTTONDOWN => pointer(MouseButton::Other(((wparam.0 >> 16) & 0xFFFF) as u16)),
        WM_CLOSE => Event::CloseRequested,
        _ => return None,
    };

    Some(event)
}
