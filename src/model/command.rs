//! The closed set of augmentation commands.
//!
//! Raw command ids only exist at the notification boundary. They are
//! resolved into [`Command`] once and everything downstream matches on the
//! variant.

use super::constants::*;

/// One of the three commands this application adds to system menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AlwaysOnTop,
    HideTitlebar,
    GhostMode,
}

impl Command {
    /// All commands, in the order they are inserted into a system menu.
    ///
    /// Every entry goes in at the same position, so the last one inserted
    /// ends up on top: the menu reads On top / Hide titlebar / Click-through.
    pub const INSERTION_ORDER: [Command; 3] =
        [Command::GhostMode, Command::HideTitlebar, Command::AlwaysOnTop];

    /// Resolve a raw command id. Ids that are not ours yield `None`.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            CMD_ALWAYS_ON_TOP => Some(Command::AlwaysOnTop),
            CMD_HIDE_TITLEBAR => Some(Command::HideTitlebar),
            CMD_GHOST_MODE => Some(Command::GhostMode),
            _ => None,
        }
    }

    /// The reserved system-menu id for this command.
    pub fn id(self) -> u32 {
        match self {
            Command::AlwaysOnTop => CMD_ALWAYS_ON_TOP,
            Command::HideTitlebar => CMD_HIDE_TITLEBAR,
            Command::GhostMode => CMD_GHOST_MODE,
        }
    }

    /// Whether this command's menu entry should be checked for a window with
    /// the given basic and extended style words.
    pub fn is_checked(self, style: u32, ex_style: u32) -> bool {
        match self {
            Command::AlwaysOnTop => ex_style & WS_EX_TOPMOST != 0,
            Command::HideTitlebar => style & WS_CAPTION == 0,
            Command::GhostMode => ex_style & WS_EX_TRANSPARENT != 0,
        }
    }
}
