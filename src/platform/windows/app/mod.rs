//! Process-lifetime state and session bootstrap for Windows.

pub mod context;
pub mod instance;

pub use context::{callback_barrier, engine, init_engine};
pub use instance::SingleInstance;
