//! File locations for Windows.
//!
//! Reads settings from %APPDATA%/WindowWrangler/config.json and writes the
//! session log next to it.

mod config;

pub use config::*;
