//! Policy hooks consulted by the drag tracker

use swipeback_core::{DragState, EdgeFlags, PointerId};

/// Decisions and notifications for a [`ViewDragTracker`](crate::ViewDragTracker)
///
/// Only [`try_capture_view`](DragCallback::try_capture_view) is required. The
/// defaults describe a pane that cannot move on either axis.
pub trait DragCallback {
    /// The drag state changed
    fn on_view_drag_state_changed(&mut self, _state: DragState) {}

    /// The pane moved to `(left, top)`, by `(dx, dy)` since the last report
    ///
    /// `state` is the tracker's state at the time of the move.
    fn on_view_position_changed(
        &mut self,
        _left: i32,
        _top: i32,
        _dx: i32,
        _dy: i32,
        _state: DragState,
    ) {
    }

    /// The pane was captured by `pointer_id`
    fn on_view_captured(&mut self, _pointer_id: PointerId) {}

    /// The capturing pointer let go with the given velocity in px/s
    ///
    /// Return the offset the pane should settle at, or `None` to leave it
    /// where it is.
    fn on_view_released(&mut self, _xvel: f32, _yvel: f32) -> Option<(i32, i32)> {
        None
    }

    /// A pointer went down inside a tracked edge zone
    fn on_edge_touched(&mut self, _edges: EdgeFlags, _pointer_id: PointerId) {}

    /// Whether a drag along an edge should be ignored for the rest of the gesture
    fn on_edge_lock(&mut self, _edges: EdgeFlags) -> bool {
        false
    }

    /// A pointer that started in an edge zone moved past the touch slop
    fn on_edge_drag_started(&mut self, _edges: EdgeFlags, _pointer_id: PointerId) {}

    /// Whether `pointer_id` may take hold of the pane
    ///
    /// `edges` are the tracked edges that pointer touched when it went down.
    fn try_capture_view(&mut self, pointer_id: PointerId, edges: EdgeFlags) -> bool;

    /// Horizontal range the pane can move; zero disables horizontal slop checks
    fn view_horizontal_drag_range(&self) -> i32 {
        0
    }

    /// Vertical range the pane can move; zero disables vertical slop checks
    fn view_vertical_drag_range(&self) -> i32 {
        0
    }

    /// Restrict a proposed horizontal offset
    fn clamp_view_position_horizontal(&self, _left: i32, _dx: i32) -> i32 {
        0
    }

    /// Restrict a proposed vertical offset
    fn clamp_view_position_vertical(&self, _top: i32, _dy: i32) -> i32 {
        0
    }
}
