//! Integration tests for the drag tracker
//!
//! These tests verify that:
//! - Flings are reported with their velocity, slow releases with zero
//! - A second pointer can take over a drag when the first lifts
//! - A settling pane can be caught by a new touch
//! - The frame scheduler can drive a settle to completion

use swipeback_animation::FrameScheduler;
use swipeback_core::{
    DisplayMetrics, DragState, EdgeFlags, MotionAction, MotionEvent, PointerCoords, PointerId,
};
use swipeback_drag::{DragCallback, ViewDragTracker};

/// Edge-swipe policy: capture at the left edge, settle open on fling
#[derive(Default)]
struct Swipe {
    released: Vec<(f32, f32)>,
    states: Vec<DragState>,
    captures: Vec<PointerId>,
    edge_drags: usize,
    left: i32,
}

impl DragCallback for Swipe {
    fn on_view_drag_state_changed(&mut self, state: DragState) {
        self.states.push(state);
    }

    fn on_view_position_changed(&mut self, left: i32, _: i32, _: i32, _: i32, _: DragState) {
        self.left = left;
    }

    fn on_view_captured(&mut self, pointer_id: PointerId) {
        self.captures.push(pointer_id);
    }

    fn on_view_released(&mut self, xvel: f32, yvel: f32) -> Option<(i32, i32)> {
        self.released.push((xvel, yvel));
        Some(if xvel > 0.0 { (1000, 0) } else { (0, 0) })
    }

    fn on_edge_drag_started(&mut self, _edges: EdgeFlags, _pointer_id: PointerId) {
        self.edge_drags += 1;
    }

    fn try_capture_view(&mut self, _pointer_id: PointerId, edges: EdgeFlags) -> bool {
        edges.contains(EdgeFlags::LEFT)
    }

    fn view_horizontal_drag_range(&self) -> i32 {
        500
    }

    fn clamp_view_position_horizontal(&self, left: i32, _dx: i32) -> i32 {
        left.clamp(0, 1000)
    }
}

fn tracker() -> ViewDragTracker {
    let mut tracker = ViewDragTracker::new(&DisplayMetrics::new(1000, 2000, 1.0));
    tracker.set_edge_tracking_enabled(EdgeFlags::LEFT);
    tracker.set_edge_size(500);
    tracker
}

fn two_pointers(action: MotionAction, index: usize, a: f32, b: f32, time: u64) -> MotionEvent {
    MotionEvent::new(
        action,
        index,
        [PointerCoords::new(0, a, 100.0), PointerCoords::new(1, b, 300.0)],
        time,
    )
}

#[test]
fn test_fling_reports_velocity() {
    let mut tracker = tracker();
    let mut swipe = Swipe::default();

    tracker
        .process_touch_event(&MotionEvent::down(0, 10.0, 100.0, 0), &mut swipe)
        .unwrap();
    for step in 1..=5u64 {
        let x = 10.0 + step as f32 * 40.0;
        tracker
            .process_touch_event(&MotionEvent::move_to(0, x, 100.0, step * 10), &mut swipe)
            .unwrap();
    }
    tracker
        .process_touch_event(&MotionEvent::up(0, 210.0, 100.0, 55), &mut swipe)
        .unwrap();

    let (xvel, yvel) = swipe.released[0];
    assert!(xvel > 50.0, "fling too slow: {xvel}");
    assert!(xvel <= 8000.0);
    assert_eq!(yvel, 0.0);
    assert_eq!(tracker.state(), DragState::Settling);
}

#[test]
fn test_slow_release_reports_zero() {
    let mut tracker = tracker();
    tracker.set_min_velocity(100_000.0);
    tracker.set_max_velocity(200_000.0);
    let mut swipe = Swipe::default();

    tracker
        .process_touch_event(&MotionEvent::down(0, 10.0, 100.0, 0), &mut swipe)
        .unwrap();
    tracker
        .process_touch_event(&MotionEvent::move_to(0, 30.0, 100.0, 10), &mut swipe)
        .unwrap();
    tracker
        .process_touch_event(&MotionEvent::up(0, 40.0, 100.0, 20), &mut swipe)
        .unwrap();

    assert_eq!(swipe.released, vec![(0.0, 0.0)]);
}

#[test]
fn test_second_pointer_takes_over() {
    let mut tracker = tracker();
    let mut swipe = Swipe::default();

    tracker
        .process_touch_event(&MotionEvent::down(0, 10.0, 100.0, 0), &mut swipe)
        .unwrap();
    tracker
        .process_touch_event(
            &two_pointers(MotionAction::PointerDown, 1, 10.0, 20.0, 10),
            &mut swipe,
        )
        .unwrap();
    tracker
        .process_touch_event(&two_pointers(MotionAction::PointerUp, 0, 10.0, 20.0, 20), &mut swipe)
        .unwrap();

    assert_eq!(tracker.active_pointer_id(), Some(1));
    assert_eq!(tracker.state(), DragState::Dragging);
    assert!(swipe.released.is_empty());
    assert_eq!(swipe.captures, vec![0, 1]);

    let moved = MotionEvent::move_to(1, 120.0, 300.0, 30);
    tracker.process_touch_event(&moved, &mut swipe).unwrap();
    assert_eq!(swipe.left, 100);
}

#[test]
fn test_edge_drag_started_once() {
    let mut tracker = tracker();
    let mut swipe = Swipe::default();

    tracker
        .should_intercept_touch_event(&MotionEvent::down(0, 10.0, 100.0, 0), &mut swipe)
        .unwrap();
    for (i, x) in [40.0, 80.0, 120.0].into_iter().enumerate() {
        let event = MotionEvent::move_to(0, x, 100.0, (i as u64 + 1) * 16);
        tracker.should_intercept_touch_event(&event, &mut swipe).unwrap();
    }

    assert_eq!(swipe.edge_drags, 1);
    assert_eq!(tracker.state(), DragState::Dragging);
}

#[test]
fn test_touch_catches_settling_pane() {
    let mut tracker = tracker();
    let mut swipe = Swipe::default();
    assert!(tracker.smooth_slide_view_to(300, 0, 0, &mut swipe));
    assert!(!tracker.continue_settling(1000, &mut swipe));
    assert_eq!(tracker.pane_frame().left, 300);

    assert!(tracker.smooth_slide_view_to(0, 0, 1000, &mut swipe));
    tracker.continue_settling(1016, &mut swipe);
    let left = tracker.pane_frame().left;
    assert!(left > 0 && left < 300);

    let catching = MotionEvent::down(0, left as f32 + 50.0, 100.0, 1020);
    let intercepted = tracker
        .should_intercept_touch_event(&catching, &mut swipe)
        .unwrap();
    assert!(intercepted);
    assert_eq!(tracker.state(), DragState::Dragging);
}

#[test]
fn test_scheduler_drives_settle() {
    let scheduler = FrameScheduler::new(0);
    let mut tracker = tracker();
    let mut swipe = Swipe::default();

    assert!(tracker.smooth_slide_view_to(400, 0, scheduler.now_ms(), &mut swipe));
    scheduler.request_frame();
    let frames = scheduler.run_until_idle(120, |now| {
        if tracker.continue_settling(now, &mut swipe) {
            scheduler.request_frame();
        }
    });

    assert!(frames > 1);
    assert_eq!(swipe.left, 400);
    assert_eq!(tracker.state(), DragState::Idle);
    assert_eq!(swipe.states, vec![DragState::Settling, DragState::Idle]);
}
