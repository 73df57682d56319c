//! Platform-specific implementations.
//!
//! Only Windows has system menus, layered windows and low-level mouse hooks
//! in the shape the engine needs. The submodule provides:
//! - the `Desktop` implementation over Win32
//! - input and WinEvent hooks
//! - the tray icon and single-instance guard
//! - config file loading

#[cfg(target_os = "windows")]
pub mod windows;
