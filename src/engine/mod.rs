//! The window-mutation engine.
//!
//! [`Engine`] is the process-lifetime context shared by the three OS
//! callbacks (mouse hook, focus notification, invoke notification) and the
//! shutdown sweep. It owns the desktop handle, the settings, the lock-guarded
//! [`WindowStore`] and the drag tracker.
//!
//! - [`store`]: ghost backups + touched-window set
//! - [`mutator`]: style/attribute toggles and the `try_mutate` fault barrier
//! - [`menu`]: system-menu synchronisation
//! - [`drag`]: drag-to-move state machine
//! - [`dispatch`]: focus and invoke handlers
//! - [`session`]: shutdown sweep

pub mod dispatch;
pub mod drag;
pub mod menu;
pub mod mutator;
pub mod session;
pub mod store;

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::desktop::{Desktop, WindowId};
use crate::model::Settings;

pub use drag::{DragPlan, DragState, DragTracker, HookVerdict, MouseEvent};
pub use session::SweepReport;
pub use store::{Drained, WindowStore};

pub struct Engine<D> {
    desktop: D,
    settings: Settings,
    store: WindowStore,
    drag: Mutex<DragTracker>,
}

impl<D: Desktop> Engine<D> {
    pub fn new(desktop: D, mut settings: Settings) -> Self {
        settings.validate();
        Self {
            desktop,
            settings,
            store: WindowStore::new(),
            drag: Mutex::new(DragTracker::new()),
        }
    }

    pub fn desktop(&self) -> &D {
        &self.desktop
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn drag_state(&self) -> DragState {
        self.drag().state()
    }

    fn drag(&self) -> MutexGuard<'_, DragTracker> {
        self.drag.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Synchronise the system menu of `window`, swallowing faults.
    pub fn sync_menu(&self, window: WindowId) {
        let result = mutator::try_mutate(&self.desktop, window, |d| {
            menu::sync(d, &self.store, &self.settings.labels, window)
        });
        if let Err(fault) = result {
            debug!("menu sync skipped for {window}: {fault}");
        }
    }

    /// Feed one low-level mouse event through the drag gesture.
    pub fn on_mouse(&self, event: MouseEvent, modifier_held: bool) -> HookVerdict {
        let plan = self.drag().plan(event, modifier_held);
        match plan {
            DragPlan::Ignore => HookVerdict::PassThrough,
            DragPlan::Begin(pt) => {
                let Some(window) = self.desktop.root_window_at(pt) else {
                    return HookVerdict::PassThrough;
                };
                match self.desktop.window_origin(window) {
                    Ok(origin) => {
                        debug!("drag start: window {window} at {origin:?}");
                        self.drag().begin(window, pt - origin);
                        HookVerdict::Consume
                    }
                    Err(fault) => {
                        debug!("drag not started: {fault}");
                        HookVerdict::PassThrough
                    }
                }
            }
            DragPlan::Follow { window, origin } => {
                if let Err(fault) = self.desktop.move_window(window, origin) {
                    debug!("drag dropped: {fault}");
                    self.drag().abandon(window);
                }
                HookVerdict::PassThrough
            }
            DragPlan::Cancel => {
                debug!("drag released: modifier up");
                self.drag().reset();
                HookVerdict::PassThrough
            }
            DragPlan::Finish => {
                self.drag().reset();
                HookVerdict::Consume
            }
        }
    }
}
