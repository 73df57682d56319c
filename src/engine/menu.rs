//! Keeps the three augmentation entries in a window's system menu.
//!
//! Entries are identified by their reserved command id, so a sync is
//! idempotent: an entry that already exists is left where it is. Checkmarks
//! are always derived from the live style words, never from memory.

use log::debug;

use super::store::WindowStore;
use crate::desktop::{Desktop, Fault, WindowId};
use crate::model::constants::MENU_OFFSET_FROM_BOTTOM;
use crate::model::{Command, MenuLabels};

/// Position the entries are inserted at, given the current item count.
pub fn insertion_position(count: u32) -> u32 {
    count.saturating_sub(MENU_OFFSET_FROM_BOTTOM)
}

/// Make sure `window`'s system menu carries the three entries with
/// up-to-date checkmarks.
///
/// The window is recorded as touched as soon as its entries are in place, so
/// the shutdown sweep rebuilds its menu even if setting a checkmark fails.
pub fn sync<D: Desktop + ?Sized>(
    desktop: &D,
    store: &WindowStore,
    labels: &MenuLabels,
    window: WindowId,
) -> Result<(), Fault> {
    let count = match desktop.menu_item_count(window)? {
        Some(count) => count,
        None => {
            // The menu exists but is in a bad state; rebuild it once.
            debug!("window {window}: unreadable system menu, reverting");
            desktop.reset_system_menu(window)?;
            desktop
                .menu_item_count(window)?
                .ok_or(Fault::NoSystemMenu(window))?
        }
    };

    let position = insertion_position(count);
    for cmd in Command::INSERTION_ORDER {
        if !desktop.menu_has_item(window, cmd.id())? {
            desktop.insert_menu_item(window, position, cmd.id(), labels.label(cmd))?;
        }
    }
    store.mark_touched(window);

    let style = desktop.style(window)?;
    let ex_style = desktop.ex_style(window)?;
    for cmd in Command::INSERTION_ORDER {
        desktop.set_menu_item_checked(window, cmd.id(), cmd.is_checked(style, ex_style))?;
    }
    Ok(())
}
