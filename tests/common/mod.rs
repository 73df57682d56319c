//! In-memory `Desktop` for integration tests.
//!
//! Windows are plain records behind a mutex. A window can be scheduled to
//! vanish after a number of further OS calls, which is how the tests stage a
//! window that closes in the middle of an operation.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use window_wrangler::model::constants::*;
use window_wrangler::model::LayeredAttributes;
use window_wrangler::{Desktop, Fault, Point, WindowId};

pub const SC_RESTORE: u32 = 0xF120;
pub const SC_MOVE: u32 = 0xF010;
pub const SC_SIZE: u32 = 0xF000;
pub const SC_MINIMIZE: u32 = 0xF020;
pub const SC_MAXIMIZE: u32 = 0xF030;
pub const SC_CLOSE: u32 = 0xF060;

/// A default top-level window style: caption + sysmenu + thick frame.
pub const WS_OVERLAPPEDWINDOW: u32 = 0x00CF_0000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: u32,
    pub label: String,
    pub checked: bool,
}

impl MenuEntry {
    fn new(id: u32, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            checked: false,
        }
    }
}

pub fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(SC_RESTORE, "Restore"),
        MenuEntry::new(SC_MOVE, "Move"),
        MenuEntry::new(SC_SIZE, "Size"),
        MenuEntry::new(SC_MINIMIZE, "Minimize"),
        MenuEntry::new(SC_MAXIMIZE, "Maximize"),
        MenuEntry::new(0, ""),
        MenuEntry::new(SC_CLOSE, "Close"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeWindow {
    pub style: u32,
    pub ex_style: u32,
    pub attributes: Option<LayeredAttributes>,
    pub origin: Point,
    /// `None` models a window without a system menu.
    pub menu: Option<Vec<MenuEntry>>,
    /// The next item count read fails until the menu is reverted.
    pub menu_broken: bool,
}

impl FakeWindow {
    pub fn plain() -> Self {
        Self {
            style: WS_OVERLAPPEDWINDOW,
            ex_style: 0,
            attributes: None,
            origin: Point::new(100, 100),
            menu: Some(default_menu()),
            menu_broken: false,
        }
    }

    pub fn layered(attributes: Option<LayeredAttributes>) -> Self {
        Self {
            ex_style: WS_EX_LAYERED,
            attributes,
            ..Self::plain()
        }
    }
}

#[derive(Debug, Default)]
struct State {
    windows: HashMap<WindowId, FakeWindow>,
    next_id: isize,
    foreground: Option<WindowId>,
    under_pointer: Option<WindowId>,
    /// (window, remaining calls) - destroy `window` when the count hits 0.
    doom: Option<(WindowId, usize)>,
    os_calls: usize,
    /// Name of the next window call to fail on a live window.
    fail_next: Option<&'static str>,
    moves: Vec<(WindowId, Point)>,
}

#[derive(Debug, Default)]
pub struct FakeDesktop {
    state: Mutex<State>,
}

impl FakeDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, window: FakeWindow) -> WindowId {
        let mut s = self.state.lock().unwrap();
        s.next_id += 0x10;
        let id = WindowId(0x1000 + s.next_id);
        s.windows.insert(id, window);
        id
    }

    pub fn add_plain(&self) -> WindowId {
        self.add(FakeWindow::plain())
    }

    pub fn set_foreground(&self, window: Option<WindowId>) {
        self.state.lock().unwrap().foreground = window;
    }

    pub fn set_under_pointer(&self, window: Option<WindowId>) {
        self.state.lock().unwrap().under_pointer = window;
    }

    pub fn destroy(&self, window: WindowId) {
        self.state.lock().unwrap().windows.remove(&window);
    }

    /// Destroy `window` right before the `calls`-th window call from now
    /// (1 = the very next call fails).
    pub fn destroy_after(&self, window: WindowId, calls: usize) {
        self.state.lock().unwrap().doom = Some((window, calls));
    }

    /// Make the next `op` call fail with access denied, leaving the window
    /// alive and untouched.
    pub fn fail_next(&self, op: &'static str) {
        self.state.lock().unwrap().fail_next = Some(op);
    }

    pub fn window(&self, window: WindowId) -> Option<FakeWindow> {
        self.state.lock().unwrap().windows.get(&window).cloned()
    }

    pub fn update(&self, window: WindowId, f: impl FnOnce(&mut FakeWindow)) {
        let mut s = self.state.lock().unwrap();
        if let Some(w) = s.windows.get_mut(&window) {
            f(w);
        }
    }

    pub fn menu(&self, window: WindowId) -> Vec<MenuEntry> {
        self.window(window)
            .and_then(|w| w.menu)
            .unwrap_or_default()
    }

    pub fn menu_ids(&self, window: WindowId) -> Vec<u32> {
        self.menu(window).iter().map(|e| e.id).collect()
    }

    pub fn checked(&self, window: WindowId, id: u32) -> Option<bool> {
        self.menu(window)
            .into_iter()
            .find(|e| e.id == id)
            .map(|e| e.checked)
    }

    pub fn moves(&self) -> Vec<(WindowId, Point)> {
        self.state.lock().unwrap().moves.clone()
    }

    pub fn os_calls(&self) -> usize {
        self.state.lock().unwrap().os_calls
    }

    /// Count one window call and run `f` on the window if it is still there.
    fn with<T>(
        &self,
        window: WindowId,
        op: &'static str,
        f: impl FnOnce(&mut FakeWindow) -> Result<T, Fault>,
    ) -> Result<T, Fault> {
        let mut s = self.state.lock().unwrap();
        s.os_calls += 1;
        if let Some((doomed, remaining)) = s.doom {
            if remaining <= 1 {
                s.windows.remove(&doomed);
                s.doom = None;
            } else {
                s.doom = Some((doomed, remaining - 1));
            }
        }
        if s.fail_next == Some(op) && s.windows.contains_key(&window) {
            s.fail_next = None;
            return Err(Fault::Os { op, code: 5 }); // ERROR_ACCESS_DENIED
        }
        match s.windows.get_mut(&window) {
            Some(w) => f(w),
            None => Err(Fault::Os { op, code: 1400 }), // ERROR_INVALID_WINDOW_HANDLE
        }
    }
}

impl Desktop for FakeDesktop {
    fn foreground_window(&self) -> Option<WindowId> {
        self.state.lock().unwrap().foreground
    }

    fn is_alive(&self, window: WindowId) -> bool {
        self.state.lock().unwrap().windows.contains_key(&window)
    }

    fn style(&self, window: WindowId) -> Result<u32, Fault> {
        self.with(window, "style", |w| Ok(w.style))
    }

    fn set_style(&self, window: WindowId, style: u32) -> Result<(), Fault> {
        self.with(window, "set_style", |w| {
            w.style = style;
            Ok(())
        })
    }

    fn ex_style(&self, window: WindowId) -> Result<u32, Fault> {
        self.with(window, "ex_style", |w| Ok(w.ex_style))
    }

    fn set_ex_style(&self, window: WindowId, ex_style: u32) -> Result<(), Fault> {
        self.with(window, "set_ex_style", |w| {
            // Dropping the layered bit discards the attributes, as the OS does.
            if ex_style & WS_EX_LAYERED == 0 {
                w.attributes = None;
            }
            w.ex_style = ex_style;
            Ok(())
        })
    }

    fn layered_attributes(&self, window: WindowId) -> Result<Option<LayeredAttributes>, Fault> {
        self.with(window, "layered_attributes", |w| Ok(w.attributes))
    }

    fn set_layered_attributes(
        &self,
        window: WindowId,
        attributes: LayeredAttributes,
    ) -> Result<(), Fault> {
        self.with(window, "set_layered_attributes", |w| {
            if w.ex_style & WS_EX_LAYERED == 0 {
                return Err(Fault::Os {
                    op: "set_layered_attributes",
                    code: 87, // ERROR_INVALID_PARAMETER
                });
            }
            w.attributes = Some(attributes);
            Ok(())
        })
    }

    fn set_topmost(&self, window: WindowId, topmost: bool) -> Result<(), Fault> {
        self.with(window, "set_topmost", |w| {
            if topmost {
                w.ex_style |= WS_EX_TOPMOST;
            } else {
                w.ex_style &= !WS_EX_TOPMOST;
            }
            Ok(())
        })
    }

    fn refresh_frame(&self, window: WindowId) -> Result<(), Fault> {
        self.with(window, "refresh_frame", |_| Ok(()))
    }

    fn root_window_at(&self, _point: Point) -> Option<WindowId> {
        self.state.lock().unwrap().under_pointer
    }

    fn window_origin(&self, window: WindowId) -> Result<Point, Fault> {
        self.with(window, "window_origin", |w| Ok(w.origin))
    }

    fn move_window(&self, window: WindowId, origin: Point) -> Result<(), Fault> {
        self.with(window, "move_window", |w| {
            w.origin = origin;
            Ok(())
        })?;
        self.state.lock().unwrap().moves.push((window, origin));
        Ok(())
    }

    fn menu_item_count(&self, window: WindowId) -> Result<Option<u32>, Fault> {
        self.with(window, "menu_item_count", |w| match &w.menu {
            None => Err(Fault::NoSystemMenu(window)),
            Some(_) if w.menu_broken => Ok(None),
            Some(items) => Ok(Some(items.len() as u32)),
        })
    }

    fn menu_has_item(&self, window: WindowId, id: u32) -> Result<bool, Fault> {
        self.with(window, "menu_has_item", |w| match &w.menu {
            None => Err(Fault::NoSystemMenu(window)),
            Some(items) => Ok(items.iter().any(|e| e.id == id)),
        })
    }

    fn insert_menu_item(
        &self,
        window: WindowId,
        position: u32,
        id: u32,
        label: &str,
    ) -> Result<(), Fault> {
        self.with(window, "insert_menu_item", |w| match &mut w.menu {
            None => Err(Fault::NoSystemMenu(window)),
            Some(items) => {
                let at = (position as usize).min(items.len());
                items.insert(at, MenuEntry::new(id, label));
                Ok(())
            }
        })
    }

    fn set_menu_item_checked(
        &self,
        window: WindowId,
        id: u32,
        checked: bool,
    ) -> Result<(), Fault> {
        self.with(window, "set_menu_item_checked", |w| {
            let entry = w
                .menu
                .as_mut()
                .and_then(|items| items.iter_mut().find(|e| e.id == id));
            match entry {
                Some(entry) => {
                    entry.checked = checked;
                    Ok(())
                }
                None => Err(Fault::Os {
                    op: "set_menu_item_checked",
                    code: 1456, // ERROR_MENU_ITEM_NOT_FOUND
                }),
            }
        })
    }

    fn reset_system_menu(&self, window: WindowId) -> Result<(), Fault> {
        self.with(window, "reset_system_menu", |w| {
            if w.menu.is_some() {
                w.menu = Some(default_menu());
                w.menu_broken = false;
            }
            Ok(())
        })
    }
}

/// The three reserved command ids.
pub fn reserved_ids() -> [u32; 3] {
    [CMD_ALWAYS_ON_TOP, CMD_HIDE_TITLEBAR, CMD_GHOST_MODE]
}
