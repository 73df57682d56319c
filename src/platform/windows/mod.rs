//! Windows-specific implementation using the Win32 API.
//!
//! This module contains all Windows-specific code:
//! - `Desktop` over Win32 window styles, layered attributes and system menus
//! - Process-wide engine context and single-instance guard
//! - Input handling (low-level mouse hook, WinEvent listeners)
//! - UI (tray icon)
//! - Storage (JSON config file and log file locations)

pub mod app;
pub mod desktop;
pub mod input;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use desktop::Win32Desktop;
pub use storage::*;
pub use ui::*;
