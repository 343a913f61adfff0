//! Leptos DragDrop Utilities
//!
//! Row reordering for Leptos using native HTML5 drag events.
//! The transient drag state is a tagged enum so a hover target can never
//! exist without a drag source.

use std::fmt::Display;

use leptos::prelude::*;

/// Ids that can be dragged: cheap to copy, comparable, and printable
/// (the id is written into the `DataTransfer` payload).
pub trait DragId: Copy + PartialEq + Display + Send + Sync + 'static {}

impl<T> DragId for T where T: Copy + PartialEq + Display + Send + Sync + 'static {}

/// Drag gesture state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState<Id> {
    #[default]
    Idle,
    /// A row was picked up but has not been dragged over another row yet
    Dragging { source: Id },
    /// The source row is currently over `target`
    Hovering { source: Id, target: Id },
}

impl<Id: Copy + PartialEq> DragState<Id> {
    /// drag-start: any previous gesture is discarded
    pub fn start(&mut self, source: Id) {
        *self = DragState::Dragging { source };
    }

    /// drag-over: retarget, keeping the source. Ignored when idle.
    pub fn over(&mut self, target: Id) {
        if let Some(source) = self.source() {
            *self = DragState::Hovering { source, target };
        }
    }

    /// drop: returns `(source, target)` when a drag was in progress
    pub fn drop_on(&mut self, target: Id) -> Option<(Id, Id)> {
        let pair = self.source().map(|source| (source, target));
        *self = DragState::Idle;
        pair
    }

    /// drag-end (including a drop outside any row)
    pub fn end(&mut self) {
        *self = DragState::Idle;
    }

    pub fn source(&self) -> Option<Id> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { source } | DragState::Hovering { source, .. } => Some(source),
        }
    }

    pub fn is_source(&self, id: Id) -> bool {
        self.source() == Some(id)
    }

    /// True when another row is hovering over `id`
    pub fn is_hover_target(&self, id: Id) -> bool {
        matches!(*self, DragState::Hovering { source, target } if target == id && source != id)
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DragSignals<Id: DragId> {
    pub state: ReadSignal<DragState<Id>>,
    pub set_state: WriteSignal<DragState<Id>>,
}

impl<Id: DragId> DragSignals<Id> {
    /// Apply a transition, notifying subscribers only when the state changed.
    /// `dragover` fires continuously, so most calls are no-ops.
    fn transition<R>(&self, f: impl FnOnce(&mut DragState<Id>) -> R) -> R {
        let current = self.state.get_untracked();
        let mut next = current;
        let out = f(&mut next);
        if next != current {
            self.set_state.set(next);
        }
        out
    }
}

pub fn create_drag_signal<Id: DragId>() -> DragSignals<Id> {
    let (state, set_state) = signal(DragState::<Id>::Idle);
    DragSignals { state, set_state }
}

/// `text/plain` payload carried by a dragged row
fn drag_payload<Id: Display>(id: Id) -> String {
    id.to_string()
}

/// Create dragstart handler for a draggable row
pub fn make_on_dragstart<Id: DragId>(drag: DragSignals<Id>, id: Id) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        // Firefox refuses to start a drag without payload
        if let Some(dt) = ev.data_transfer() {
            if let Err(e) = dt.set_data("text/plain", &drag_payload(id)) {
                log::warn!("[DND] failed to set drag payload for {}: {:?}", id, e);
            }
            dt.set_effect_allowed("move");
        }
        drag.transition(|s| s.start(id));
    }
}

/// Create dragover handler; marks the row as a valid drop target
pub fn make_on_dragover<Id: DragId>(drag: DragSignals<Id>, id: Id) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        drag.transition(|s| s.over(id));
    }
}

/// Create drop handler; `on_drop(source, target)` runs when a drag was in progress
pub fn make_on_drop<Id, F>(drag: DragSignals<Id>, id: Id, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    Id: DragId,
    F: Fn(Id, Id) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some((source, target)) = drag.transition(|s| s.drop_on(id)) {
            on_drop(source, target);
        }
    }
}

/// Create dragend handler; always returns to idle
pub fn make_on_dragend<Id: DragId>(drag: DragSignals<Id>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        drag.transition(|s| s.end());
    }
}
