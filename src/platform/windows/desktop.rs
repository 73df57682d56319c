//! `Desktop` over the Win32 window manager.
//!
//! Every call re-derives the `HWND` from the opaque [`WindowId`]; nothing is
//! cached, so a recycled or destroyed handle is caught by the OS call itself.

use std::ffi::c_void;
use std::mem::size_of;

use windows::core::PWSTR;
use windows::Win32::Foundation::{GetLastError, SetLastError, COLORREF, HWND, POINT, RECT, WIN32_ERROR};
use windows::Win32::UI::WindowsAndMessaging::{
    GetAncestor, GetForegroundWindow, GetLayeredWindowAttributes, GetMenuItemCount,
    GetMenuItemInfoW, GetSystemMenu, GetWindowLongPtrW, GetWindowRect, InsertMenuItemW, IsWindow,
    SetLayeredWindowAttributes, SetMenuItemInfoW, SetWindowLongPtrW, SetWindowPos,
    WindowFromPoint, GA_ROOT, GWL_EXSTYLE, GWL_STYLE, HMENU, HWND_NOTOPMOST, HWND_TOPMOST,
    LAYERED_WINDOW_ATTRIBUTES_FLAGS, MENUITEMINFOW, MENU_ITEM_MASK, MFS_CHECKED, MFS_UNCHECKED, MFT_STRING,
    MIIM_FTYPE, MIIM_ID, MIIM_STATE, MIIM_STRING, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE,
    SWP_NOSIZE, SWP_NOZORDER, WINDOW_LONG_PTR_INDEX,
};

use crate::desktop::{Desktop, Fault, Point, WindowId};
use crate::model::LayeredAttributes;

/// The live Win32 desktop. Stateless; every method goes straight to the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Desktop;

pub(crate) fn hwnd(window: WindowId) -> HWND {
    HWND(window.0 as *mut c_void)
}

pub(crate) fn window_id(hwnd: HWND) -> Option<WindowId> {
    if hwnd.0.is_null() {
        None
    } else {
        Some(WindowId(hwnd.0 as isize))
    }
}

fn os_fault(op: &'static str, err: windows::core::Error) -> Fault {
    Fault::Os {
        op,
        code: err.code().0 as u32,
    }
}

fn menu_item_info(mask: MENU_ITEM_MASK) -> MENUITEMINFOW {
    MENUITEMINFOW {
        cbSize: size_of::<MENUITEMINFOW>() as u32,
        fMask: mask,
        ..Default::default()
    }
}

impl Win32Desktop {
    fn read_long(
        &self,
        window: WindowId,
        index: WINDOW_LONG_PTR_INDEX,
        op: &'static str,
    ) -> Result<u32, Fault> {
        unsafe {
            // Zero is a valid style word; only a set last-error means failure.
            SetLastError(WIN32_ERROR(0));
            let value = GetWindowLongPtrW(hwnd(window), index);
            if value == 0 {
                let err = GetLastError();
                if err.0 != 0 {
                    return Err(Fault::Os { op, code: err.0 });
                }
            }
            Ok(value as u32)
        }
    }

    fn write_long(
        &self,
        window: WindowId,
        index: WINDOW_LONG_PTR_INDEX,
        value: u32,
        op: &'static str,
    ) -> Result<(), Fault> {
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let previous = SetWindowLongPtrW(hwnd(window), index, value as isize);
            if previous == 0 {
                let err = GetLastError();
                if err.0 != 0 {
                    return Err(Fault::Os { op, code: err.0 });
                }
            }
            Ok(())
        }
    }

    fn system_menu(&self, window: WindowId) -> Result<HMENU, Fault> {
        let menu = unsafe { GetSystemMenu(hwnd(window), false) };
        if menu.0.is_null() {
            Err(Fault::NoSystemMenu(window))
        } else {
            Ok(menu)
        }
    }
}

impl Desktop for Win32Desktop {
    fn foreground_window(&self) -> Option<WindowId> {
        window_id(unsafe { GetForegroundWindow() })
    }

    fn is_alive(&self, window: WindowId) -> bool {
        unsafe { IsWindow(Some(hwnd(window))).as_bool() }
    }

    fn style(&self, window: WindowId) -> Result<u32, Fault> {
        self.read_long(window, GWL_STYLE, "GetWindowLongPtrW(GWL_STYLE)")
    }

    fn set_style(&self, window: WindowId, style: u32) -> Result<(), Fault> {
        self.write_long(window, GWL_STYLE, style, "SetWindowLongPtrW(GWL_STYLE)")
    }

    fn ex_style(&self, window: WindowId) -> Result<u32, Fault> {
        self.read_long(window, GWL_EXSTYLE, "GetWindowLongPtrW(GWL_EXSTYLE)")
    }

    fn set_ex_style(&self, window: WindowId, ex_style: u32) -> Result<(), Fault> {
        self.write_long(window, GWL_EXSTYLE, ex_style, "SetWindowLongPtrW(GWL_EXSTYLE)")
    }

    fn layered_attributes(&self, window: WindowId) -> Result<Option<LayeredAttributes>, Fault> {
        let mut key = COLORREF(0);
        let mut alpha = 0u8;
        let mut flags = LAYERED_WINDOW_ATTRIBUTES_FLAGS(0);
        let read = unsafe {
            GetLayeredWindowAttributes(
                hwnd(window),
                Some(&mut key as *mut COLORREF),
                Some(&mut alpha as *mut u8),
                Some(&mut flags as *mut LAYERED_WINDOW_ATTRIBUTES_FLAGS),
            )
        };
        match read {
            Ok(()) => Ok(Some(LayeredAttributes {
                color_key: key.0,
                alpha,
                flags: flags.0,
            })),
            // Layered windows driven by UpdateLayeredWindow have no triple.
            Err(_) if self.is_alive(window) => Ok(None),
            Err(_) => Err(Fault::WindowGone(window)),
        }
    }

    fn set_layered_attributes(
        &self,
        window: WindowId,
        attributes: LayeredAttributes,
    ) -> Result<(), Fault> {
        unsafe {
            SetLayeredWindowAttributes(
                hwnd(window),
                COLORREF(attributes.color_key),
                attributes.alpha,
                LAYERED_WINDOW_ATTRIBUTES_FLAGS(attributes.flags),
            )
        }
        .map_err(|e| os_fault("SetLayeredWindowAttributes", e))
    }

    fn set_topmost(&self, window: WindowId, topmost: bool) -> Result<(), Fault> {
        let insert_after = if topmost { HWND_TOPMOST } else { HWND_NOTOPMOST };
        unsafe {
            SetWindowPos(
                hwnd(window),
                Some(insert_after),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE,
            )
        }
        .map_err(|e| os_fault("SetWindowPos(topmost)", e))
    }

    fn refresh_frame(&self, window: WindowId) -> Result<(), Fault> {
        unsafe {
            SetWindowPos(
                hwnd(window),
                None,
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE | SWP_FRAMECHANGED,
            )
        }
        .map_err(|e| os_fault("SetWindowPos(frame)", e))
    }

    fn root_window_at(&self, point: Point) -> Option<WindowId> {
        unsafe {
            let under = WindowFromPoint(POINT {
                x: point.x,
                y: point.y,
            });
            if under.0.is_null() {
                return None;
            }
            window_id(GetAncestor(under, GA_ROOT))
        }
    }

    fn window_origin(&self, window: WindowId) -> Result<Point, Fault> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd(window), &mut rect) }
            .map_err(|e| os_fault("GetWindowRect", e))?;
        Ok(Point::new(rect.left, rect.top))
    }

    fn move_window(&self, window: WindowId, origin: Point) -> Result<(), Fault> {
        unsafe {
            SetWindowPos(
                hwnd(window),
                None,
                origin.x,
                origin.y,
                0,
                0,
                SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| os_fault("SetWindowPos(move)", e))
    }

    fn menu_item_count(&self, window: WindowId) -> Result<Option<u32>, Fault> {
        let menu = self.system_menu(window)?;
        let count = unsafe { GetMenuItemCount(Some(menu)) };
        Ok(u32::try_from(count).ok())
    }

    fn menu_has_item(&self, window: WindowId, id: u32) -> Result<bool, Fault> {
        let menu = self.system_menu(window)?;
        let mut probe = menu_item_info(MIIM_ID);
        Ok(unsafe { GetMenuItemInfoW(menu, id, false, &mut probe) }.is_ok())
    }

    fn insert_menu_item(
        &self,
        window: WindowId,
        position: u32,
        id: u32,
        label: &str,
    ) -> Result<(), Fault> {
        let menu = self.system_menu(window)?;
        // The OS copies the caption during the call.
        let mut text: Vec<u16> = label.encode_utf16().chain(std::iter::once(0)).collect();
        let item = MENUITEMINFOW {
            fType: MFT_STRING,
            fState: MFS_UNCHECKED,
            wID: id,
            dwTypeData: PWSTR(text.as_mut_ptr()),
            ..menu_item_info(MIIM_STATE | MIIM_FTYPE | MIIM_ID | MIIM_STRING)
        };
        unsafe { InsertMenuItemW(menu, position, true, &item) }
            .map_err(|e| os_fault("InsertMenuItemW", e))
    }

    fn set_menu_item_checked(
        &self,
        window: WindowId,
        id: u32,
        checked: bool,
    ) -> Result<(), Fault> {
        let menu = self.system_menu(window)?;
        let item = MENUITEMINFOW {
            fState: if checked { MFS_CHECKED } else { MFS_UNCHECKED },
            ..menu_item_info(MIIM_STATE)
        };
        unsafe { SetMenuItemInfoW(menu, id, false, &item) }
            .map_err(|e| os_fault("SetMenuItemInfoW", e))
    }

    fn reset_system_menu(&self, window: WindowId) -> Result<(), Fault> {
        // Reverting returns no menu; there is nothing to check.
        unsafe {
            GetSystemMenu(hwnd(window), true);
        }
        Ok(())
    }
}
