//! Application constants.
//!
//! This module contains the reserved system-menu command ids, default
//! captions, ghost-mode alpha limits and the window-manager bit values the
//! engine reads and writes. The bit values mirror the Win32 headers so the
//! pure engine can compute toggles without linking against `windows`.

// === Application ===

/// Display name used for the tray tooltip and the config directory.
pub const APP_NAME: &str = "Window Wrangler";

/// Directory under `%APPDATA%` holding config and log files.
pub const APP_DIR_NAME: &str = "WindowWrangler";

/// Name of the session-wide single-instance mutex.
pub const SINGLETON_MUTEX_NAME: &str = "WinWra.Singleton";

// === Reserved Command IDs ===

/// System-menu command id for "On top".
pub const CMD_ALWAYS_ON_TOP: u32 = 0xBEEF_BABE;

/// System-menu command id for "Hide titlebar".
pub const CMD_HIDE_TITLEBAR: u32 = 0xBABE_BABE;

/// System-menu command id for "Click-through".
pub const CMD_GHOST_MODE: u32 = 0xDEAF_BABE;

// === Menu Layout ===

/// Entries are inserted this many positions above the end of the system menu
/// (just above "Close").
pub const MENU_OFFSET_FROM_BOTTOM: u32 = 1;

/// Default caption for the always-on-top entry.
pub const DEFAULT_LABEL_ALWAYS_ON_TOP: &str = "On top";

/// Default caption for the hide-titlebar entry.
pub const DEFAULT_LABEL_HIDE_TITLEBAR: &str = "Hide titlebar";

/// Default caption for the ghost-mode entry.
pub const DEFAULT_LABEL_GHOST_MODE: &str = "Click-through";

// === Ghost Mode ===

/// Default alpha applied to every ghosted window.
pub const DEFAULT_GHOST_ALPHA: u8 = 200;

/// Lowest alpha accepted from the config file.
pub const MIN_GHOST_ALPHA: u8 = 32;

/// Alpha a layered window is reset to when no usable backup triple exists.
pub const OPAQUE_ALPHA: u8 = 255;

// === Window Style Bits ===

/// `WS_CAPTION` (title bar + border).
pub const WS_CAPTION: u32 = 0x00C0_0000;

/// `WS_EX_TOPMOST`.
pub const WS_EX_TOPMOST: u32 = 0x0000_0008;

/// `WS_EX_TRANSPARENT` (click-through).
pub const WS_EX_TRANSPARENT: u32 = 0x0000_0020;

/// `WS_EX_LAYERED`.
pub const WS_EX_LAYERED: u32 = 0x0008_0000;

// === Layered Window Flags ===

/// `LWA_COLORKEY`.
pub const LWA_COLORKEY: u32 = 0x0000_0001;

/// `LWA_ALPHA`.
pub const LWA_ALPHA: u32 = 0x0000_0002;

/// Both layered-attribute flags together.
pub const LWA_ALPHA_COLORKEY: u32 = LWA_ALPHA | LWA_COLORKEY;
