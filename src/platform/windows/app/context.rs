//! The engine shared by every OS callback.
//!
//! Win32 hook procedures take no user data, so the process-lifetime
//! [`Engine`] lives in a `OnceLock` and the callbacks reach it through
//! [`engine()`]. The engine itself is `Sync`; its shared maps are only
//! reachable through the lock-guarded store operations.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::OnceLock;

use log::error;

use crate::engine::Engine;
use crate::model::Settings;
use crate::platform::windows::desktop::Win32Desktop;

static ENGINE: OnceLock<Engine<Win32Desktop>> = OnceLock::new();

/// Create the engine. Later calls return the first one unchanged.
pub fn init_engine(settings: Settings) -> &'static Engine<Win32Desktop> {
    ENGINE.get_or_init(|| Engine::new(Win32Desktop, settings))
}

/// The engine, once initialised.
pub fn engine() -> Option<&'static Engine<Win32Desktop>> {
    ENGINE.get()
}

/// Run one callback body so that no panic unwinds into the OS.
///
/// Returns `None` if the body panicked.
pub fn callback_barrier<T>(name: &'static str, body: impl FnOnce() -> T) -> Option<T> {
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => Some(value),
        Err(_) => {
            error!("{name} callback panicked; event dropped");
            None
        }
    }
}
