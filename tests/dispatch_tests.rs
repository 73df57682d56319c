mod common;

use common::{FakeDesktop, SC_CLOSE};
use window_wrangler::model::constants::*;
use window_wrangler::{Command, Desktop, Engine, Settings};

fn engine() -> Engine<FakeDesktop> {
    Engine::new(FakeDesktop::new(), Settings::default())
}

#[test]
fn toggle_always_on_top_twice() {
    let e = engine();
    let w = e.desktop().add_plain();
    e.desktop().set_foreground(Some(w));

    e.on_invoked(CMD_ALWAYS_ON_TOP);
    assert_ne!(e.desktop().window(w).unwrap().ex_style & WS_EX_TOPMOST, 0);
    assert_eq!(e.desktop().checked(w, CMD_ALWAYS_ON_TOP), Some(true));

    e.on_invoked(CMD_ALWAYS_ON_TOP);
    assert_eq!(e.desktop().window(w).unwrap().ex_style & WS_EX_TOPMOST, 0);
    assert_eq!(e.desktop().checked(w, CMD_ALWAYS_ON_TOP), Some(false));
}

#[test]
fn toggle_titlebar_flips_caption_bits() {
    let e = engine();
    let w = e.desktop().add_plain();
    let original = e.desktop().window(w).unwrap().style;

    e.dispatch(Command::HideTitlebar, w);
    assert_eq!(e.desktop().window(w).unwrap().style & WS_CAPTION, 0);
    assert_eq!(e.desktop().checked(w, CMD_HIDE_TITLEBAR), Some(true));

    e.dispatch(Command::HideTitlebar, w);
    assert_eq!(e.desktop().window(w).unwrap().style, original);
    assert_eq!(e.desktop().checked(w, CMD_HIDE_TITLEBAR), Some(false));
}

#[test]
fn foreign_command_ids_are_ignored() {
    let e = engine();
    let w = e.desktop().add_plain();
    e.desktop().set_foreground(Some(w));
    let before = e.desktop().window(w);

    for id in [SC_CLOSE, 0, 1, u32::MAX, CMD_GHOST_MODE + 1] {
        e.on_invoked(id);
    }

    assert_eq!(e.desktop().window(w), before);
    assert_eq!(e.desktop().os_calls(), 0);
}

#[test]
fn invoke_without_foreground_is_ignored() {
    let e = engine();
    let w = e.desktop().add_plain();
    e.on_invoked(CMD_GHOST_MODE);
    assert!(!e.store().has_backup(w));
}

#[test]
fn invoke_acts_on_the_foreground_window() {
    let e = engine();
    let a = e.desktop().add_plain();
    let b = e.desktop().add_plain();
    e.desktop().set_foreground(Some(b));

    e.on_invoked(CMD_GHOST_MODE);

    assert!(!e.store().has_backup(a));
    assert!(e.store().has_backup(b));
}

#[test]
fn window_vanishing_mid_dispatch_leaves_no_backup() {
    // Every point at which the window can die while ghost mode is applied.
    for calls in 1..=5 {
        let e = engine();
        let w = e.desktop().add_plain();
        e.desktop().set_foreground(Some(w));
        e.desktop().destroy_after(w, calls);

        e.on_invoked(CMD_GHOST_MODE);

        assert!(!e.desktop().is_alive(w), "window survived at {calls}");
        assert!(!e.store().has_backup(w), "backup left behind at {calls}");
    }
}

#[test]
fn vanished_window_is_not_recorded_as_touched() {
    let e = engine();
    let w = e.desktop().add_plain();
    e.desktop().destroy(w);
    e.dispatch(Command::AlwaysOnTop, w);
    assert!(!e.store().is_touched(w));
}

#[test]
fn ghosting_from_many_threads_keeps_one_backup_per_window() {
    let e = engine();
    let windows: Vec<_> = (0..8).map(|_| e.desktop().add_plain()).collect();

    std::thread::scope(|s| {
        for &w in &windows {
            let e = &e;
            s.spawn(move || {
                e.dispatch(Command::GhostMode, w);
            });
        }
    });

    for &w in &windows {
        assert!(e.store().has_backup(w));
        assert!(e.store().is_touched(w));
        assert_ne!(e.desktop().window(w).unwrap().ex_style & WS_EX_TRANSPARENT, 0);
    }
}
