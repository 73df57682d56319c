//! Focus and invoke notification handlers.
//!
//! Both handlers ignore the object the notification names and act on the
//! current foreground window instead: focus events arrive for many
//! sub-objects of one top-level window, and a system-menu command always
//! belongs to the window that owns the foreground.

use log::{debug, info};

use super::{mutator, Engine};
use crate::desktop::{Desktop, WindowId};
use crate::model::constants::WS_EX_TRANSPARENT;
use crate::model::Command;

impl<D: Desktop> Engine<D> {
    /// Input focus moved somewhere: resync the foreground window's menu.
    pub fn on_focus_changed(&self) {
        if let Some(window) = self.desktop().foreground_window() {
            self.sync_menu(window);
        }
    }

    /// A menu entry or control was invoked with command id `raw_id`.
    pub fn on_invoked(&self, raw_id: u32) {
        let Some(cmd) = Command::from_id(raw_id) else {
            return;
        };
        let Some(window) = self.desktop().foreground_window() else {
            return;
        };
        self.dispatch(cmd, window);
    }

    /// Apply `cmd` to `window`, then resync its menu.
    ///
    /// A fault while mutating is swallowed; the trailing sync always runs.
    pub fn dispatch(&self, cmd: Command, window: WindowId) {
        let alpha = self.settings().ghost_alpha;
        let result = mutator::try_mutate(self.desktop(), window, |d| match cmd {
            Command::AlwaysOnTop => mutator::toggle_always_on_top(d, window),
            Command::HideTitlebar => mutator::toggle_titlebar(d, window),
            Command::GhostMode => {
                if d.ex_style(window)? & WS_EX_TRANSPARENT == 0 {
                    mutator::enable_ghost(d, self.store(), window, alpha)
                } else {
                    mutator::disable_ghost(d, self.store(), window)
                }
            }
        });

        match result {
            Ok(()) => info!("{cmd:?} applied to window {window}"),
            Err(fault) => {
                debug!("{cmd:?} on window {window} failed: {fault}");
                if !self.desktop().is_alive(window) && self.store().end_ghost(window).is_some() {
                    debug!("dropped backup of vanished window {window}");
                }
            }
        }

        self.sync_menu(window);
    }
}
