//! Pointer event model
//!
//! Platform-agnostic motion events. Platform crates convert their native touch
//! input into [`MotionEvent`]s; coordinates are in container space and event
//! times are milliseconds on the host's monotonic clock.

use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Pointer identifier, stable for the lifetime of one touch
pub type PointerId = u32;

/// Events driving the drag state machine
pub mod drag_events {
    use super::EventType;

    /// A pointer captured the pane
    pub const CAPTURE: EventType = 1;
    /// The pane started sliding towards a settle target
    pub const SETTLE: EventType = 2;
    /// The settle animation reached its target
    pub const SETTLED: EventType = 3;
    /// The captured pane was released with nowhere to go
    pub const DROP: EventType = 4;
    /// Tracking was aborted
    pub const ABORT: EventType = 5;
}

/// Motion action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionAction {
    /// First pointer went down
    Down,
    /// An additional pointer went down
    PointerDown,
    /// One or more pointers moved
    Move,
    /// A non-primary pointer went up
    PointerUp,
    /// Last pointer went up
    Up,
    /// The gesture was cancelled by the system
    Cancel,
}

/// Coordinates of one pointer within an event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerCoords {
    pub id: PointerId,
    pub x: f32,
    pub y: f32,
}

impl PointerCoords {
    pub const fn new(id: PointerId, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// A motion event carrying every active pointer
#[derive(Clone, Debug, PartialEq)]
pub struct MotionEvent {
    action: MotionAction,
    action_index: usize,
    pointers: SmallVec<[PointerCoords; 2]>,
    event_time: u64,
}

impl MotionEvent {
    /// Create an event from its parts
    ///
    /// `action_index` selects the pointer that went up or down for
    /// `Down`/`PointerDown`/`Up`/`PointerUp`; it is ignored otherwise.
    pub fn new(
        action: MotionAction,
        action_index: usize,
        pointers: impl IntoIterator<Item = PointerCoords>,
        event_time: u64,
    ) -> Self {
        Self {
            action,
            action_index,
            pointers: pointers.into_iter().collect(),
            event_time,
        }
    }

    /// Single-pointer down
    pub fn down(id: PointerId, x: f32, y: f32, event_time: u64) -> Self {
        Self::new(MotionAction::Down, 0, [PointerCoords::new(id, x, y)], event_time)
    }

    /// Single-pointer move
    pub fn move_to(id: PointerId, x: f32, y: f32, event_time: u64) -> Self {
        Self::new(MotionAction::Move, 0, [PointerCoords::new(id, x, y)], event_time)
    }

    /// Single-pointer up
    pub fn up(id: PointerId, x: f32, y: f32, event_time: u64) -> Self {
        Self::new(MotionAction::Up, 0, [PointerCoords::new(id, x, y)], event_time)
    }

    /// Cancellation, carries no pointers
    pub fn cancel(event_time: u64) -> Self {
        Self::new(MotionAction::Cancel, 0, [], event_time)
    }

    pub fn action(&self) -> MotionAction {
        self.action
    }

    pub fn action_index(&self) -> usize {
        self.action_index
    }

    /// The pointer that went up or down
    pub fn action_pointer(&self) -> Option<&PointerCoords> {
        self.pointers.get(self.action_index)
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn pointers(&self) -> &[PointerCoords] {
        &self.pointers
    }

    pub fn pointer(&self, index: usize) -> Option<&PointerCoords> {
        self.pointers.get(index)
    }

    /// Index of the pointer with the given id
    pub fn find_pointer_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    /// Event time in milliseconds
    pub fn event_time(&self) -> u64 {
        self.event_time
    }
}

/// Edges of the container that can start a tracked drag
///
/// Only the left edge is tracked; the flag set keeps the representation the
/// tracker and listeners share.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeFlags {
    bits: u8,
}

impl EdgeFlags {
    pub const NONE: EdgeFlags = EdgeFlags { bits: 0 };
    pub const LEFT: EdgeFlags = EdgeFlags { bits: 0b0001 };

    /// Create from raw bits
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    pub const fn bits(&self) -> u8 {
        self.bits
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Check if every flag in `other` is set
    pub const fn contains(&self, other: EdgeFlags) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Check if any flag in `other` is set
    pub const fn intersects(&self, other: EdgeFlags) -> bool {
        self.bits & other.bits != 0
    }
}

impl std::ops::BitAnd for EdgeFlags {
    type Output = EdgeFlags;

    fn bitand(self, rhs: EdgeFlags) -> EdgeFlags {
        EdgeFlags::from_bits(self.bits & rhs.bits)
    }
}

impl std::ops::BitOr for EdgeFlags {
    type Output = EdgeFlags;

    fn bitor(self, rhs: EdgeFlags) -> EdgeFlags {
        EdgeFlags::from_bits(self.bits | rhs.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pointer_constructors() {
        let down = MotionEvent::down(0, 10.0, 20.0, 5);
        assert_eq!(down.action(), MotionAction::Down);
        assert_eq!(down.pointer_count(), 1);
        assert_eq!(down.action_pointer(), Some(&PointerCoords::new(0, 10.0, 20.0)));
        assert_eq!(down.event_time(), 5);

        let cancel = MotionEvent::cancel(9);
        assert_eq!(cancel.pointer_count(), 0);
        assert!(cancel.action_pointer().is_none());
    }

    #[test]
    fn test_find_pointer_index() {
        let event = MotionEvent::new(
            MotionAction::PointerDown,
            1,
            [PointerCoords::new(3, 0.0, 0.0), PointerCoords::new(7, 5.0, 5.0)],
            0,
        );
        assert_eq!(event.find_pointer_index(7), Some(1));
        assert_eq!(event.find_pointer_index(4), None);
        assert_eq!(event.action_pointer().map(|p| p.id), Some(7));
    }

    #[test]
    fn test_edge_flags() {
        let flags = EdgeFlags::LEFT;
        assert!(flags.contains(EdgeFlags::LEFT));
        assert!(flags.intersects(EdgeFlags::LEFT));
        assert!(!EdgeFlags::NONE.intersects(EdgeFlags::LEFT));
        assert!(EdgeFlags::NONE.is_empty());
        assert_eq!(flags & EdgeFlags::NONE, EdgeFlags::NONE);
        assert_eq!(EdgeFlags::NONE | EdgeFlags::LEFT, EdgeFlags::LEFT);
    }
}
