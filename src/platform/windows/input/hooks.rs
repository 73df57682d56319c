//! Low-level mouse hook and the two WinEvent listeners.
//!
//! Each callback is a fault-barrier unit: its body runs inside
//! [`callback_barrier`] and engine faults are already swallowed below it, so
//! nothing propagates back into the OS.

use std::sync::atomic::{AtomicIsize, Ordering};

use log::{info, warn};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Accessibility::{SetWinEventHook, UnhookWinEvent, HWINEVENTHOOK};
use windows::Win32::UI::Input::KeyboardAndMouse::GetAsyncKeyState;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, EVENT_OBJECT_FOCUS,
    EVENT_OBJECT_INVOKED, HC_ACTION, HHOOK, MSLLHOOKSTRUCT, WH_MOUSE_LL, WINEVENT_OUTOFCONTEXT,
    WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE,
};

use crate::desktop::Point;
use crate::engine::{HookVerdict, MouseEvent};
use crate::model::DragModifier;
use crate::platform::windows::app::{callback_barrier, engine};

/// Global mouse hook handle (must be static for the hook callback).
static MOUSE_HOOK: AtomicIsize = AtomicIsize::new(0);

fn modifier_held(modifier: DragModifier) -> bool {
    modifier
        .virtual_keys()
        .iter()
        .any(|&vk| (unsafe { GetAsyncKeyState(vk as i32) } as u16) & 0x8000 != 0)
}

fn mouse_event(wparam: WPARAM, info: &MSLLHOOKSTRUCT) -> MouseEvent {
    let pt = Point::new(info.pt.x, info.pt.y);
    match wparam.0 as u32 {
        WM_LBUTTONDOWN => MouseEvent::LeftDown(pt),
        WM_MOUSEMOVE => MouseEvent::Move(pt),
        WM_LBUTTONUP => MouseEvent::LeftUp(pt),
        _ => MouseEvent::Other,
    }
}

/// Low-level mouse hook procedure driving the drag-to-move gesture.
pub extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if ncode == HC_ACTION as i32 && lparam.0 != 0 {
        let info = unsafe { &*(lparam.0 as *const MSLLHOOKSTRUCT) };
        let event = mouse_event(wparam, info);
        if event != MouseEvent::Other {
            let verdict = callback_barrier("mouse hook", || {
                engine().map(|e| e.on_mouse(event, modifier_held(e.settings().drag_modifier)))
            })
            .flatten()
            .unwrap_or(HookVerdict::PassThrough);

            if verdict == HookVerdict::Consume {
                return LRESULT(1);
            }
        }
    }

    let hook = MOUSE_HOOK.load(Ordering::SeqCst);
    unsafe { CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam) }
}

/// `EVENT_OBJECT_FOCUS`: resync the foreground window's system menu.
pub unsafe extern "system" fn focus_event_proc(
    _hook: HWINEVENTHOOK,
    event: u32,
    _hwnd: HWND,
    _id_object: i32,
    _id_child: i32,
    _event_thread: u32,
    _event_time: u32,
) {
    if event != EVENT_OBJECT_FOCUS {
        return;
    }
    callback_barrier("focus", || {
        if let Some(e) = engine() {
            e.on_focus_changed();
        }
    });
}

/// `EVENT_OBJECT_INVOKED`: the child id carries the menu command id.
pub unsafe extern "system" fn invoke_event_proc(
    _hook: HWINEVENTHOOK,
    event: u32,
    _hwnd: HWND,
    _id_object: i32,
    id_child: i32,
    _event_thread: u32,
    _event_time: u32,
) {
    if event != EVENT_OBJECT_INVOKED {
        return;
    }
    callback_barrier("invoke", || {
        if let Some(e) = engine() {
            e.on_invoked(id_child as u32);
        }
    });
}

/// The three installed listeners. A listener that failed to install is
/// `None` and its feature is simply absent for the session.
#[derive(Debug)]
pub struct Listeners {
    mouse: Option<HHOOK>,
    focus: Option<HWINEVENTHOOK>,
    invoke: Option<HWINEVENTHOOK>,
}

fn win_event_hook(
    event: u32,
    callback: unsafe extern "system" fn(HWINEVENTHOOK, u32, HWND, i32, i32, u32, u32),
) -> Option<HWINEVENTHOOK> {
    let hook = unsafe {
        SetWinEventHook(event, event, None, Some(callback), 0, 0, WINEVENT_OUTOFCONTEXT)
    };
    (!hook.0.is_null()).then_some(hook)
}

/// Install drag hook, focus observer and command dispatcher, in that order.
pub fn install_listeners() -> Listeners {
    let mouse = match unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) } {
        Ok(hook) => {
            MOUSE_HOOK.store(hook.0 as isize, Ordering::SeqCst);
            Some(hook)
        }
        Err(e) => {
            warn!("mouse hook unavailable, drag gesture disabled: {e}");
            None
        }
    };

    let focus = win_event_hook(EVENT_OBJECT_FOCUS, focus_event_proc);
    if focus.is_none() {
        warn!("focus hook unavailable, menus will not be augmented");
    }

    let invoke = win_event_hook(EVENT_OBJECT_INVOKED, invoke_event_proc);
    if invoke.is_none() {
        warn!("invoke hook unavailable, menu commands will be ignored");
    }

    info!(
        "listeners installed: mouse={} focus={} invoke={}",
        mouse.is_some(),
        focus.is_some(),
        invoke.is_some()
    );
    Listeners {
        mouse,
        focus,
        invoke,
    }
}

impl Listeners {
    /// Uninstall in reverse order of installation.
    pub fn uninstall(self) {
        unsafe {
            if let Some(hook) = self.invoke {
                let _ = UnhookWinEvent(hook);
            }
            if let Some(hook) = self.focus {
                let _ = UnhookWinEvent(hook);
            }
            if let Some(hook) = self.mouse {
                let _ = UnhookWindowsHookEx(hook);
                MOUSE_HOOK.store(0, Ordering::SeqCst);
            }
        }
        info!("listeners uninstalled");
    }
}
