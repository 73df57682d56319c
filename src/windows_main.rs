//! Windows-specific entry point and application logic.
//!
//! Owns the session: single-instance guard, logging, settings, a hidden
//! message-only window for the tray icon, the three listeners and the
//! shutdown sweep that undoes every change before exit.

use env_logger::{Builder, Env, Target};
use log::{info, warn};
use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    PostQuitMessage, RegisterClassW, TranslateMessage, HWND_MESSAGE, MSG, WINDOW_EX_STYLE,
    WINDOW_STYLE, WM_COMMAND, WM_CREATE, WNDCLASSW,
};

use window_wrangler::model::constants::{APP_NAME, SINGLETON_MUTEX_NAME};
use window_wrangler::platform::windows::app::{
    callback_barrier, init_engine, SingleInstance,
};
use window_wrangler::platform::windows::input::install_listeners;
use window_wrangler::platform::windows::storage::{load_settings, open_log_file};
use window_wrangler::platform::windows::ui::tray::{
    self, opens_menu, MENU_EXIT, WM_TRAYICON,
};
use window_wrangler::platform::windows::Win32Desktop;
use window_wrangler::Engine;

/// Main entry point for Windows. Always exits with status 0.
pub fn run() {
    // A second launch leaves silently.
    let Some(_instance) = SingleInstance::acquire(SINGLETON_MUTEX_NAME) else {
        return;
    };

    init_logging();
    info!("{APP_NAME} {} starting", env!("CARGO_PKG_VERSION"));

    let settings = load_settings();
    let engine = init_engine(settings);

    if let Err(e) = run_app(engine) {
        warn!("session ended early: {e}");
    }
    info!("{APP_NAME} exiting");
}

/// Route `log` output to the session log file, or stderr if it can't be
/// opened. `WRANGLER_LOG` overrides the default `info` filter.
fn init_logging() {
    let mut builder = Builder::from_env(Env::default().filter_or("WRANGLER_LOG", "info"));
    if let Some(file) = open_log_file() {
        builder.target(Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
}

fn run_app(engine: &'static Engine<Win32Desktop>) -> windows::core::Result<()> {
    unsafe {
        let instance = GetModuleHandleW(None)?;
        let class_name = w!("WindowWranglerHost");

        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        // Message-only window: receives tray notifications, never shown
        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Window Wrangler"),
            WINDOW_STYLE::default(),
            0,
            0,
            0,
            0,
            Some(HWND_MESSAGE),
            None,
            Some(instance.into()),
            None,
        )?;

        tray::install_tray_icon(hwnd);
        let listeners = install_listeners();

        // The window focused at launch gets its entries without a focus change
        engine.on_focus_changed();

        // Message loop (also pumps the low-level hook and WinEvent callbacks)
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).0 > 0 {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        // Cleanup
        listeners.uninstall();
        engine.shutdown_sweep();
        tray::remove_tray_icon();
        let _ = DestroyWindow(hwnd);

        Ok(())
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_CREATE => LRESULT(0),

        // System tray icon messages
        msg if msg == WM_TRAYICON => {
            let event = (lparam.0 as u32) & 0xFFFF;
            if opens_menu(event) {
                callback_barrier("tray", || tray::show_tray_menu(hwnd));
            }
            LRESULT(0)
        }

        // Context menu commands
        WM_COMMAND => {
            let cmd = (wparam.0 & 0xFFFF) as u32;
            if cmd == MENU_EXIT {
                info!("exit requested from tray");
                unsafe { PostQuitMessage(0) };
            }
            LRESULT(0)
        }

        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
