//! Application domain model.
//!
//! This module contains pure data definitions (no FFI dependencies):
//! the closed command set, ghost-mode backups, user settings and the
//! constants shared by the engine and the Win32 layer.
//!
//! The config file location is resolved in `platform::windows::storage`.

pub mod backup;
pub mod command;
pub mod constants;
pub mod settings;

pub use backup::{AttributeBackup, LayeredAttributes};
pub use command::Command;
pub use constants::*;
pub use settings::{ConfigError, DragModifier, MenuLabels, Settings};
