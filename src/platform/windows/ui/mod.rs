//! UI components for Windows.

pub mod tray;

pub use tray::*;
