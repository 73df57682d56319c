//! Shutdown sweep.
//!
//! Runs once, after every listener is uninstalled, so nothing can add to the
//! store while it drains. Each restore is its own fault barrier: one stuck
//! window cannot keep the rest from being cleaned up.

use log::{debug, info};

use super::{mutator, Engine};
use crate::desktop::Desktop;

/// Outcome of a shutdown sweep, for the exit log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Ghosted windows restored to their backup.
    pub restored: usize,
    /// Touched windows whose system menu was rebuilt.
    pub menus_reset: usize,
    /// Entries skipped because the window was already gone.
    pub skipped: usize,
    /// Restores or rebuilds that faulted.
    pub failed: usize,
}

impl<D: Desktop> Engine<D> {
    /// Restore every still-live ghosted window and rebuild every still-live
    /// touched window's system menu from the OS default.
    pub fn shutdown_sweep(&self) -> SweepReport {
        self.drag().reset();
        let drained = self.store().drain_all();
        let mut report = SweepReport::default();

        for (window, backup) in &drained.backups {
            if !self.desktop().is_alive(*window) {
                report.skipped += 1;
                continue;
            }
            match mutator::try_mutate(self.desktop(), *window, |d| {
                mutator::restore_ghost(d, *window, backup)
            }) {
                Ok(()) => report.restored += 1,
                Err(fault) => {
                    debug!("restore of {window} failed: {fault}");
                    report.failed += 1;
                }
            }
        }

        for window in &drained.touched {
            if !self.desktop().is_alive(*window) {
                report.skipped += 1;
                continue;
            }
            match mutator::try_mutate(self.desktop(), *window, |d| d.reset_system_menu(*window)) {
                Ok(()) => report.menus_reset += 1,
                Err(fault) => {
                    debug!("menu reset of {window} failed: {fault}");
                    report.failed += 1;
                }
            }
        }

        info!(
            "shutdown sweep: {} restored, {} menus reset, {} gone, {} failed",
            report.restored, report.menus_reset, report.skipped, report.failed
        );
        report
    }
}
