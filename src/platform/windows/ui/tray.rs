//! System tray (notification area) icon for Windows.
//!
//! The icon exists only so the user can end the session: its context menu
//! has a single "Exit" entry that posts the quit message.

use std::cell::RefCell;

use log::warn;
use windows::core::w;
use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NOTIFYICONDATAW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, LoadIconW, SetForegroundWindow,
    TrackPopupMenu, HICON, HMENU, IDI_APPLICATION, MF_STRING, TPM_BOTTOMALIGN, TPM_LEFTALIGN,
    TPM_RIGHTBUTTON, WM_APP, WM_CONTEXTMENU, WM_LBUTTONDBLCLK, WM_RBUTTONUP,
};

use crate::model::constants::APP_NAME;

// Custom message for tray icon events
pub const WM_TRAYICON: u32 = WM_APP + 1;

// Menu item IDs
pub const MENU_EXIT: u32 = 40001;

// Tray icon ID
const TRAY_ICON_ID: u32 = 1;

thread_local! {
    static TRAY_HWND: RefCell<Option<HWND>> = const { RefCell::new(None) };
    static TRAY_MENU: RefCell<Option<HMENU>> = const { RefCell::new(None) };
}

/// Whether a `WM_TRAYICON` notification should open the menu.
pub fn opens_menu(event: u32) -> bool {
    matches!(event, WM_RBUTTONUP | WM_CONTEXTMENU | WM_LBUTTONDBLCLK)
}

/// Install the tray icon and build its menu.
///
/// Failures are logged and leave the session without a tray icon.
pub fn install_tray_icon(hwnd: HWND) {
    unsafe {
        TRAY_HWND.with(|h| *h.borrow_mut() = Some(hwnd));

        let hicon = LoadIconW(None, IDI_APPLICATION).unwrap_or(HICON::default());

        let mut nid = NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: hwnd,
            uID: TRAY_ICON_ID,
            uFlags: NIF_ICON | NIF_MESSAGE | NIF_TIP,
            uCallbackMessage: WM_TRAYICON,
            hIcon: hicon,
            ..Default::default()
        };

        // Tooltip, NUL-terminated by the zeroed default
        let tip_wide: Vec<u16> = APP_NAME.encode_utf16().collect();
        let max = nid.szTip.len() - 1;
        for (i, &c) in tip_wide.iter().enumerate().take(max) {
            nid.szTip[i] = c;
        }

        if !Shell_NotifyIconW(NIM_ADD, &nid).as_bool() {
            warn!("tray icon could not be added");
        }

        match CreatePopupMenu() {
            Ok(menu) => {
                let _ = AppendMenuW(menu, MF_STRING, MENU_EXIT as usize, w!("Exit"));
                TRAY_MENU.with(|m| *m.borrow_mut() = Some(menu));
            }
            Err(e) => warn!("tray menu could not be created: {e}"),
        }
    }
}

/// Remove the tray icon and free its menu.
pub fn remove_tray_icon() {
    TRAY_HWND.with(|h| {
        if let Some(hwnd) = h.borrow_mut().take() {
            unsafe {
                let nid = NOTIFYICONDATAW {
                    cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
                    hWnd: hwnd,
                    uID: TRAY_ICON_ID,
                    ..Default::default()
                };
                let _ = Shell_NotifyIconW(NIM_DELETE, &nid);
            }
        }
    });

    TRAY_MENU.with(|m| {
        if let Some(menu) = m.borrow_mut().take() {
            unsafe {
                let _ = DestroyMenu(menu);
            }
        }
    });
}

/// Show the context menu at the cursor position.
///
/// The chosen entry arrives at `hwnd` as `WM_COMMAND`.
pub fn show_tray_menu(hwnd: HWND) {
    TRAY_MENU.with(|m| {
        if let Some(menu) = *m.borrow() {
            unsafe {
                let mut pt = POINT::default();
                let _ = GetCursorPos(&mut pt);

                // Required for menu to close when clicking outside
                let _ = SetForegroundWindow(hwnd);

                let _ = TrackPopupMenu(
                    menu,
                    TPM_BOTTOMALIGN | TPM_LEFTALIGN | TPM_RIGHTBUTTON,
                    pt.x,
                    pt.y,
                    None, // nReserved - must be None/0
                    hwnd,
                    None,
                );
            }
        }
    });
}
