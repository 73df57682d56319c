//! Input and notification hooks for Windows.

pub mod hooks;

pub use hooks::{install_listeners, Listeners};
