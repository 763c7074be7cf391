//! Android touch input handling
//!
//! Converts Android touch events to swipe-back motion events.

use swipeback_core::{MotionAction, MotionEvent, PointerCoords, PointerId};

/// Touch pointer state
#[derive(Debug, Clone, Copy)]
pub struct TouchPointer {
    /// Pointer ID (for multi-touch)
    pub id: i32,
    /// X coordinate in window space
    pub x: f32,
    /// Y coordinate in window space
    pub y: f32,
    /// Pressure (0.0 - 1.0)
    pub pressure: f32,
    /// Touch size
    pub size: f32,
}

impl TouchPointer {
    fn coords(&self) -> Option<PointerCoords> {
        let id = PointerId::try_from(self.id).ok()?;
        Some(PointerCoords::new(id, self.x, self.y))
    }
}

/// Touch event types, as delivered by activity glue
#[derive(Debug, Clone)]
pub enum TouchEvent {
    /// A touch started; `pointers` includes `pointer`
    Down {
        pointer: TouchPointer,
        pointers: Vec<TouchPointer>,
    },
    /// Touch position changed
    Move { pointers: Vec<TouchPointer> },
    /// A touch ended; `pointers` includes `pointer`
    Up {
        pointer: TouchPointer,
        pointers: Vec<TouchPointer>,
    },
    /// Touch cancelled (e.g., system gesture)
    Cancel,
}

/// Collect pointer coordinates, dropping pointers with negative ids
fn collect_coords(pointers: &[TouchPointer]) -> Vec<PointerCoords> {
    pointers.iter().filter_map(TouchPointer::coords).collect()
}

/// Build an up or down event for `pointer`
///
/// With other pointers still present the action becomes the non-primary
/// variant.
fn transition_event(
    primary: MotionAction,
    secondary: MotionAction,
    pointer: &TouchPointer,
    pointers: &[TouchPointer],
    event_time: u64,
) -> Option<MotionEvent> {
    let action_pointer = pointer.coords()?;
    let mut coords = collect_coords(pointers);
    let index = match coords.iter().position(|p| p.id == action_pointer.id) {
        Some(index) => index,
        None => {
            coords.push(action_pointer);
            coords.len() - 1
        }
    };
    let action = if coords.len() > 1 { secondary } else { primary };
    Some(MotionEvent::new(action, index, coords, event_time))
}

/// Convert a touch event to a motion event stamped with `event_time` in ms
///
/// Returns None for events without a usable pointer.
pub fn to_motion_event(event: &TouchEvent, event_time: u64) -> Option<MotionEvent> {
    match event {
        TouchEvent::Down { pointer, pointers } => transition_event(
            MotionAction::Down,
            MotionAction::PointerDown,
            pointer,
            pointers,
            event_time,
        ),
        TouchEvent::Move { pointers } => {
            let coords = collect_coords(pointers);
            if coords.is_empty() {
                return None;
            }
            Some(MotionEvent::new(MotionAction::Move, 0, coords, event_time))
        }
        TouchEvent::Up { pointer, pointers } => transition_event(
            MotionAction::Up,
            MotionAction::PointerUp,
            pointer,
            pointers,
            event_time,
        ),
        TouchEvent::Cancel => Some(MotionEvent::cancel(event_time)),
    }
}

/// Converts an Android MotionEvent to a swipe-back MotionEvent
#[cfg(target_os = "android")]
pub fn convert_motion_event(event: &ndk::event::MotionEvent) -> Option<MotionEvent> {
    use ndk::event::MotionAction as NdkAction;

    let action = match event.action() {
        NdkAction::Down => MotionAction::Down,
        NdkAction::PointerDown => MotionAction::PointerDown,
        NdkAction::Move => MotionAction::Move,
        NdkAction::PointerUp => MotionAction::PointerUp,
        NdkAction::Up => MotionAction::Up,
        NdkAction::Cancel => MotionAction::Cancel,
        _ => return None,
    };

    // Event time is in nanoseconds on the uptime clock
    let event_time = (event.event_time().max(0) / 1_000_000) as u64;
    if action == MotionAction::Cancel {
        return Some(MotionEvent::cancel(event_time));
    }

    let coords: Vec<PointerCoords> = event
        .pointers()
        .filter_map(|p| {
            let id = PointerId::try_from(p.pointer_id()).ok()?;
            Some(PointerCoords::new(id, p.x(), p.y()))
        })
        .collect();
    if coords.is_empty() {
        return None;
    }

    Some(MotionEvent::new(action, event.pointer_index(), coords, event_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(id: i32, x: f32) -> TouchPointer {
        TouchPointer {
            id,
            x,
            y: 100.0,
            pressure: 1.0,
            size: 0.0,
        }
    }

    #[test]
    fn test_single_touch_down_and_up() {
        let down = TouchEvent::Down {
            pointer: pointer(0, 5.0),
            pointers: vec![],
        };
        let event = to_motion_event(&down, 16).unwrap();
        assert_eq!(event.action(), MotionAction::Down);
        assert_eq!(event.action_pointer().unwrap().x, 5.0);
        assert_eq!(event.event_time(), 16);

        let up = TouchEvent::Up {
            pointer: pointer(0, 50.0),
            pointers: vec![pointer(0, 50.0)],
        };
        assert_eq!(to_motion_event(&up, 32).unwrap().action(), MotionAction::Up);
    }

    #[test]
    fn test_second_pointer_is_non_primary() {
        let down = TouchEvent::Down {
            pointer: pointer(1, 30.0),
            pointers: vec![pointer(0, 5.0), pointer(1, 30.0)],
        };
        let event = to_motion_event(&down, 0).unwrap();
        assert_eq!(event.action(), MotionAction::PointerDown);
        assert_eq!(event.action_index(), 1);
        assert_eq!(event.action_pointer().unwrap().id, 1);

        let up = TouchEvent::Up {
            pointer: pointer(0, 5.0),
            pointers: vec![pointer(0, 5.0), pointer(1, 30.0)],
        };
        let event = to_motion_event(&up, 0).unwrap();
        assert_eq!(event.action(), MotionAction::PointerUp);
        assert_eq!(event.action_index(), 0);
    }

    #[test]
    fn test_negative_ids_are_dropped() {
        let down = TouchEvent::Down {
            pointer: pointer(-1, 5.0),
            pointers: vec![pointer(-1, 5.0)],
        };
        assert!(to_motion_event(&down, 0).is_none());

        let moved = TouchEvent::Move {
            pointers: vec![pointer(-1, 5.0), pointer(2, 8.0)],
        };
        let event = to_motion_event(&moved, 0).unwrap();
        assert_eq!(event.pointer_count(), 1);
        assert_eq!(event.pointer(0).unwrap().id, 2);

        let empty = TouchEvent::Move { pointers: vec![] };
        assert!(to_motion_event(&empty, 0).is_none());
    }

    #[test]
    fn test_cancel() {
        let event = to_motion_event(&TouchEvent::Cancel, 48).unwrap();
        assert_eq!(event.action(), MotionAction::Cancel);
        assert_eq!(event.pointer_count(), 0);
    }
}
