//! Shared state written from the hook callbacks and drained at shutdown.
//!
//! Both the ghost-mode backups and the set of windows whose system menu was
//! extended live behind one mutex. Every operation holds the lock only for a
//! single map operation and never while calling into the OS.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::desktop::WindowId;
use crate::model::AttributeBackup;

#[derive(Debug, Default)]
struct Inner {
    backups: HashMap<WindowId, AttributeBackup>,
    touched: HashSet<WindowId>,
}

/// Everything the shutdown sweep needs, taken out of the store in one go.
#[derive(Debug, Default)]
pub struct Drained {
    pub backups: Vec<(WindowId, AttributeBackup)>,
    pub touched: Vec<WindowId>,
}

/// Lock-guarded backup store and touched-window set.
#[derive(Debug, Default)]
pub struct WindowStore {
    inner: Mutex<Inner>,
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section is a single map operation, so a poisoned lock
    // still guards consistent maps.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `backup` for `window` unless one already exists.
    ///
    /// Returns `true` if the backup was stored, `false` if an earlier backup
    /// was kept.
    pub fn begin_ghost(&self, window: WindowId, backup: AttributeBackup) -> bool {
        let mut inner = self.lock();
        if inner.backups.contains_key(&window) {
            return false;
        }
        inner.backups.insert(window, backup);
        true
    }

    /// Remove and return the backup for `window`.
    pub fn end_ghost(&self, window: WindowId) -> Option<AttributeBackup> {
        self.lock().backups.remove(&window)
    }

    pub fn has_backup(&self, window: WindowId) -> bool {
        self.lock().backups.contains_key(&window)
    }

    /// Remember that the system menu of `window` was extended.
    pub fn mark_touched(&self, window: WindowId) {
        self.lock().touched.insert(window);
    }

    pub fn is_touched(&self, window: WindowId) -> bool {
        self.lock().touched.contains(&window)
    }

    /// Empty both collections atomically and hand their contents over.
    pub fn drain_all(&self) -> Drained {
        let mut inner = self.lock();
        Drained {
            backups: inner.backups.drain().collect(),
            touched: inner.touched.drain().collect(),
        }
    }
}
