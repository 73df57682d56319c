//! Window Wrangler: augments any top-level window with pin-on-top, titlebar
//! hiding, click-through "ghost" mode and a modifier + drag move gesture.
//!
//! The engine is pure Rust written against the [`desktop::Desktop`] trait so
//! it can be exercised by normal integration tests. The Win32 side lives in
//! `platform::windows`.

pub mod desktop;
pub mod engine;
pub mod model;
pub mod platform;

// Re-export the main types for convenience
pub use desktop::{Desktop, Fault, Point, WindowId};
pub use engine::{Engine, HookVerdict, MouseEvent, SweepReport};
pub use model::{Command, Settings};
