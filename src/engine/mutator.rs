//! Style and layered-attribute mutations on foreign windows.
//!
//! Each operation reads the live style word, computes the toggled value,
//! writes it back and asks for a frame refresh. Nothing here caches window
//! state; the only memory is the ghost-mode backup in [`WindowStore`].

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::debug;

use super::store::WindowStore;
use crate::desktop::{Desktop, Fault, WindowId};
use crate::model::constants::*;
use crate::model::{AttributeBackup, LayeredAttributes};

/// Run `op` against `window` behind a fault barrier.
///
/// The window is re-validated first. A panic inside `op` is contained, and
/// an OS failure on a window that died meanwhile is reported as
/// [`Fault::WindowGone`].
pub fn try_mutate<D, F>(desktop: &D, window: WindowId, op: F) -> Result<(), Fault>
where
    D: Desktop + ?Sized,
    F: FnOnce(&D) -> Result<(), Fault>,
{
    if !desktop.is_alive(window) {
        return Err(Fault::WindowGone(window));
    }
    let result = catch_unwind(AssertUnwindSafe(|| op(desktop)))
        .unwrap_or(Err(Fault::Panicked("window mutation")));
    match result {
        Err(Fault::Os { .. }) if !desktop.is_alive(window) => Err(Fault::WindowGone(window)),
        other => other,
    }
}

/// Flip the topmost ordering of `window`.
pub fn toggle_always_on_top<D: Desktop + ?Sized>(desktop: &D, window: WindowId) -> Result<(), Fault> {
    let ex = desktop.ex_style(window)?;
    let topmost = ex & WS_EX_TOPMOST != 0;
    debug!("window {window}: topmost {topmost} -> {}", !topmost);
    desktop.set_topmost(window, !topmost)
}

/// Flip the caption/border bits of `window` and force a frame redraw.
pub fn toggle_titlebar<D: Desktop + ?Sized>(desktop: &D, window: WindowId) -> Result<(), Fault> {
    let style = desktop.style(window)?;
    let new_style = if style & WS_CAPTION == 0 {
        style | WS_CAPTION
    } else {
        style & !WS_CAPTION
    };
    debug!("window {window}: style {style:#x} -> {new_style:#x}");
    desktop.set_style(window, new_style)?;
    desktop.refresh_frame(window)
}

/// Make `window` layered, click-through and semi-transparent.
///
/// The pre-ghost state is backed up the first time only; a later call while
/// a backup exists keeps the original. A fresh backup is dropped again if the
/// style write fails or the window dies; a live window that already went
/// click-through keeps it, so a later toggle can still restore it.
pub fn enable_ghost<D: Desktop + ?Sized>(
    desktop: &D,
    store: &WindowStore,
    window: WindowId,
    alpha: u8,
) -> Result<(), Fault> {
    let ex = desktop.ex_style(window)?;

    // Capture outside the lock; the store only does the map insert.
    let created = if store.has_backup(window) {
        false
    } else {
        let attributes = if ex & WS_EX_LAYERED != 0 {
            desktop.layered_attributes(window)?
        } else {
            None
        };
        store.begin_ghost(window, AttributeBackup::capture(ex, attributes))
    };

    if let Err(fault) = desktop.set_ex_style(window, ex | WS_EX_LAYERED | WS_EX_TRANSPARENT) {
        if created {
            store.end_ghost(window);
        }
        return Err(fault);
    }

    // The window is click-through from here on; the backup stays unless the
    // window itself is gone.
    let finished = desktop
        .set_layered_attributes(window, LayeredAttributes::alpha(alpha))
        .and_then(|()| desktop.refresh_frame(window));
    if let Err(fault) = finished {
        if created && !desktop.is_alive(window) {
            store.end_ghost(window);
        }
        return Err(fault);
    }
    debug!("window {window}: ghost on (alpha {alpha}, new backup {created})");
    Ok(())
}

/// Undo ghost mode on `window`.
///
/// With a backup, the exact pre-ghost attributes come back. Without one only
/// the click-through bit is cleared and the layered bit is left alone, since
/// this window was not ghosted by us.
pub fn disable_ghost<D: Desktop + ?Sized>(
    desktop: &D,
    store: &WindowStore,
    window: WindowId,
) -> Result<(), Fault> {
    match store.end_ghost(window) {
        Some(backup) => restore_ghost(desktop, window, &backup),
        None => {
            debug!("window {window}: no backup, clearing click-through only");
            let ex = desktop.ex_style(window)?;
            desktop.set_ex_style(window, ex & !WS_EX_TRANSPARENT)?;
            desktop.refresh_frame(window)
        }
    }
}

/// Write `backup` back onto `window`.
pub fn restore_ghost<D: Desktop + ?Sized>(
    desktop: &D,
    window: WindowId,
    backup: &AttributeBackup,
) -> Result<(), Fault> {
    let ex = backup.restored_ex_style(desktop.ex_style(window)?);
    desktop.set_ex_style(window, ex)?;
    let still_layered = desktop.ex_style(window)? & WS_EX_LAYERED != 0;
    if let Some(attributes) = backup.restored_attributes(still_layered) {
        desktop.set_layered_attributes(window, attributes)?;
    }
    desktop.refresh_frame(window)?;
    debug!("window {window}: ghost off, restored {backup:?}");
    Ok(())
}
