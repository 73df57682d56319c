//! Modifier + left-drag moves the window under the pointer.
//!
//! The tracker is a two-state machine fed by the low-level mouse hook. It
//! never holds more than one window: a button-down is only looked at while
//! idle.
//!
//! Moving a foreign window can pump sent messages on the hook thread, which
//! may re-enter the hook. The tracker therefore only *plans* a step; the
//! engine performs OS calls without holding the tracker and commits the
//! outcome afterwards.

use crate::desktop::{Point, WindowId};

/// Mouse events the hook forwards. Everything else passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    LeftDown(Point),
    Move(Point),
    LeftUp(Point),
    Other,
}

/// What the hook should do with the event it just handed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookVerdict {
    /// Hand the event on to the next hook and the target application.
    PassThrough,
    /// Swallow the event.
    Consume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        window: WindowId,
        /// Pointer position relative to the window's top-left corner.
        offset: Point,
    },
}

/// The step the engine should take for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPlan {
    /// Not ours; pass the event on.
    Ignore,
    /// Armed button-down while idle: resolve the window under `Point`.
    Begin(Point),
    /// Move the dragged window so its top-left corner lands on `origin`.
    Follow { window: WindowId, origin: Point },
    /// Modifier released mid-drag: back to idle, event passes.
    Cancel,
    /// Button released: back to idle, swallow the release.
    Finish,
}

#[derive(Debug, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The window being dragged, if any.
    pub fn dragged_window(&self) -> Option<WindowId> {
        match self.state {
            DragState::Dragging { window, .. } => Some(window),
            DragState::Idle => None,
        }
    }

    /// Decide what `event` means in the current state. Does not change state.
    pub fn plan(&self, event: MouseEvent, modifier_held: bool) -> DragPlan {
        match (self.state, event) {
            (DragState::Idle, MouseEvent::LeftDown(pt)) if modifier_held => DragPlan::Begin(pt),
            (DragState::Dragging { .. }, MouseEvent::Move(_)) if !modifier_held => DragPlan::Cancel,
            (DragState::Dragging { window, offset }, MouseEvent::Move(pt)) => DragPlan::Follow {
                window,
                origin: pt - offset,
            },
            (DragState::Dragging { .. }, MouseEvent::LeftUp(_)) => DragPlan::Finish,
            _ => DragPlan::Ignore,
        }
    }

    /// Start tracking `window`. Ignored unless idle.
    pub fn begin(&mut self, window: WindowId, offset: Point) {
        if self.state == DragState::Idle {
            self.state = DragState::Dragging { window, offset };
        }
    }

    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Drop the drag, but only if it is still about `window`.
    pub fn abandon(&mut self, window: WindowId) {
        if self.dragged_window() == Some(window) {
            self.state = DragState::Idle;
        }
    }
}
