//! Drag state machine
//!
//! A pane is idle, being dragged by a pointer, or settling towards a resting
//! offset. The tracker owns the single [`DragState`] and moves it only through
//! [`StateTransitions::on_event`] with the ids in
//! [`drag_events`](crate::events::drag_events).

use std::fmt::Debug;
use std::hash::Hash;

use crate::events::{drag_events, EventType};

/// Trait for state types that handle event transitions
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// Drag state of the tracked pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    /// Not being dragged and not animating
    #[default]
    Idle,
    /// Following a pointer
    Dragging,
    /// Sliding to a target after release or a programmatic slide
    Settling,
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging)
    }

    pub fn is_settling(&self) -> bool {
        matches!(self, DragState::Settling)
    }

    /// Numeric id, matching the `STATE_*` constants of platform drag helpers
    pub fn as_id(&self) -> u32 {
        match self {
            DragState::Idle => 0,
            DragState::Dragging => 1,
            DragState::Settling => 2,
        }
    }
}

impl StateTransitions for DragState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use drag_events::*;
        match (self, event) {
            (DragState::Idle, CAPTURE) => Some(DragState::Dragging),
            // A pointer can catch a settling pane
            (DragState::Settling, CAPTURE) => Some(DragState::Dragging),
            (DragState::Dragging, SETTLE) => Some(DragState::Settling),
            // Programmatic slides start from rest
            (DragState::Idle, SETTLE) => Some(DragState::Settling),
            (DragState::Settling, SETTLED) => Some(DragState::Idle),
            (DragState::Dragging, DROP) => Some(DragState::Idle),
            (DragState::Dragging | DragState::Settling, ABORT) => Some(DragState::Idle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::drag_events::*;

    #[test]
    fn test_drag_then_settle_cycle() {
        let mut state = DragState::Idle;

        state = state.on_event(CAPTURE).unwrap();
        assert_eq!(state, DragState::Dragging);

        state = state.on_event(SETTLE).unwrap();
        assert_eq!(state, DragState::Settling);

        state = state.on_event(SETTLED).unwrap();
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_release_in_place() {
        assert_eq!(DragState::Dragging.on_event(DROP), Some(DragState::Idle));
        assert_eq!(DragState::Settling.on_event(DROP), None);
    }

    #[test]
    fn test_recapture_while_settling() {
        assert_eq!(
            DragState::Settling.on_event(CAPTURE),
            Some(DragState::Dragging)
        );
        // Already dragging: no transition
        assert_eq!(DragState::Dragging.on_event(CAPTURE), None);
    }

    #[test]
    fn test_abort_from_any_active_state() {
        assert_eq!(DragState::Dragging.on_event(ABORT), Some(DragState::Idle));
        assert_eq!(DragState::Settling.on_event(ABORT), Some(DragState::Idle));
        assert_eq!(DragState::Idle.on_event(ABORT), None);
    }

    #[test]
    fn test_state_ids() {
        assert_eq!(DragState::Idle.as_id(), 0);
        assert_eq!(DragState::Dragging.as_id(), 1);
        assert_eq!(DragState::Settling.as_id(), 2);
    }
}
