//! The window-manager surface the engine works against.
//!
//! The engine never owns a window. It reads and writes attributes of foreign
//! windows through [`Desktop`], which the Win32 layer implements for real and
//! the tests implement in memory.

use std::fmt;

use crate::model::LayeredAttributes;

/// Opaque, OS-assigned window handle.
///
/// A handle is only meaningful while the OS considers the window alive and
/// may be recycled afterwards, so liveness must be re-checked before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub isize);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A point in absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A failure while touching a foreign window.
///
/// Faults are expected: windows come and go outside our control. Callers
/// log them and move on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    #[error("window {0} no longer exists")]
    WindowGone(WindowId),

    #[error("{op} failed with OS error {code:#x}")]
    Os { op: &'static str, code: u32 },

    #[error("window {0} has no usable system menu")]
    NoSystemMenu(WindowId),

    #[error("panic while running {0}")]
    Panicked(&'static str),
}

/// Read/write access to the windows of the current session.
///
/// Every method that touches a window may fail with a [`Fault`] because the
/// window can be destroyed at any moment.
pub trait Desktop {
    // --- identity ---

    /// The window that currently has the foreground, if any.
    fn foreground_window(&self) -> Option<WindowId>;

    /// Whether `window` still refers to a live window.
    fn is_alive(&self, window: WindowId) -> bool;

    // --- style words ---

    /// The basic style word (`GWL_STYLE`).
    fn style(&self, window: WindowId) -> Result<u32, Fault>;

    fn set_style(&self, window: WindowId, style: u32) -> Result<(), Fault>;

    /// The extended style word (`GWL_EXSTYLE`).
    fn ex_style(&self, window: WindowId) -> Result<u32, Fault>;

    fn set_ex_style(&self, window: WindowId, ex_style: u32) -> Result<(), Fault>;

    /// Current layered attributes, or `None` if the window has none set.
    fn layered_attributes(&self, window: WindowId) -> Result<Option<LayeredAttributes>, Fault>;

    fn set_layered_attributes(
        &self,
        window: WindowId,
        attributes: LayeredAttributes,
    ) -> Result<(), Fault>;

    // --- placement ---

    /// Move `window` into or out of the topmost band without moving or
    /// resizing it.
    fn set_topmost(&self, window: WindowId, topmost: bool) -> Result<(), Fault>;

    /// Ask the window manager to re-read the frame of `window` without
    /// moving, resizing or reordering it.
    fn refresh_frame(&self, window: WindowId) -> Result<(), Fault>;

    /// The top-level window under `point`, if any.
    fn root_window_at(&self, point: Point) -> Option<WindowId>;

    /// Screen position of the top-left corner of `window`.
    fn window_origin(&self, window: WindowId) -> Result<Point, Fault>;

    /// Move `window` so its top-left corner is at `origin`, without
    /// resizing, reordering or activating it.
    fn move_window(&self, window: WindowId, origin: Point) -> Result<(), Fault>;

    // --- system menu ---

    /// Number of entries in the system menu of `window`.
    ///
    /// Returns `Ok(None)` if the menu exists but its item count cannot be
    /// read, and `Err(Fault::NoSystemMenu)` if there is no menu at all.
    fn menu_item_count(&self, window: WindowId) -> Result<Option<u32>, Fault>;

    /// Whether the system menu of `window` has an entry with command `id`.
    fn menu_has_item(&self, window: WindowId, id: u32) -> Result<bool, Fault>;

    /// Insert an unchecked string entry at `position`.
    fn insert_menu_item(
        &self,
        window: WindowId,
        position: u32,
        id: u32,
        label: &str,
    ) -> Result<(), Fault>;

    fn set_menu_item_checked(&self, window: WindowId, id: u32, checked: bool)
        -> Result<(), Fault>;

    /// Throw away any customisation of the system menu of `window` and
    /// rebuild it from the OS default.
    fn reset_system_menu(&self, window: WindowId) -> Result<(), Fault>;
}
