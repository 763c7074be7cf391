//! Edge-aware drag tracker
//!
//! [`ViewDragTracker`] follows the pointers of a gesture and moves a single
//! pane inside its parent. It owns the pane's frame while tracking and the
//! [`DragState`] machine; every decision about capture, clamping and where
//! to settle is delegated to a [`DragCallback`] passed into each call.
//!
//! Motion history is kept per pointer id. A move that names a pointer whose
//! down was never seen reports [`SwipeError::PointerIndexOutOfBounds`].

use swipeback_animation::{Easing, Scroller};
use swipeback_core::events::drag_events;
use swipeback_core::{
    error::check_sensitivity, DisplayMetrics, DragState, EdgeFlags, EventType, MotionAction,
    MotionEvent, PointerCoords, PointerId, Result, StateTransitions, SwipeError,
    ViewConfiguration,
};

use crate::callback::DragCallback;
use crate::velocity::VelocityTracker;

/// Default edge zone width in dp
const EDGE_SIZE_DP: f32 = 20.0;

/// Settle duration for a zero-velocity slide across the full drag range
const BASE_SETTLE_DURATION_MS: u64 = 256;

/// Upper bound on any settle
const MAX_SETTLE_DURATION_MS: u64 = 600;

/// Pointer ids tracked in the pointers-down mask
const MAX_POINTER_ID: PointerId = 31;

/// Position and size of the tracked pane in parent coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaneFrame {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl PaneFrame {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Whether a point falls on the pane
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left as f32
            && x < self.right() as f32
            && y >= self.top as f32
            && y < self.bottom() as f32
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct MotionHistory {
    initial_x: f32,
    initial_y: f32,
    last_x: f32,
    last_y: f32,
    initial_edges: EdgeFlags,
    edge_drags_in_progress: EdgeFlags,
    edges_locked: EdgeFlags,
}

/// Clamp the magnitude of `value`: below `abs_min` becomes 0, above `abs_max`
/// becomes `±abs_max`
pub fn clamp_mag(value: f32, abs_min: f32, abs_max: f32) -> f32 {
    let abs = value.abs();
    if abs < abs_min {
        0.0
    } else if abs > abs_max {
        abs_max.copysign(value)
    } else {
        value
    }
}

fn clamp_mag_int(value: i32, abs_min: i32, abs_max: i32) -> i32 {
    let abs = value.abs();
    if abs < abs_min {
        0
    } else if abs > abs_max {
        abs_max * value.signum()
    } else {
        value
    }
}

/// Map a distance ratio onto a smaller snap-duration influence
fn distance_influence_for_snap_duration(f: f32) -> f32 {
    let f = (f - 0.5) * 0.3 * std::f32::consts::PI / 2.0;
    f.sin()
}

/// Tracks pointer input and drives a single draggable pane
#[derive(Debug)]
pub struct ViewDragTracker {
    state: DragState,
    base_touch_slop: f32,
    touch_slop: f32,
    sensitivity: f32,
    active_pointer_id: Option<PointerId>,
    /// Indexed by pointer id
    history: Vec<MotionHistory>,
    /// Bit per pointer id
    pointers_down: u32,
    velocity_tracker: VelocityTracker,
    min_velocity: f32,
    max_velocity: f32,
    edge_size: i32,
    tracking_edges: EdgeFlags,
    scroller: Scroller,
    pane: PaneFrame,
    captured: bool,
    parent_width: i32,
    parent_height: i32,
}

impl ViewDragTracker {
    /// Create a tracker for a display
    ///
    /// The parent and pane both start out covering the whole display.
    pub fn new(metrics: &DisplayMetrics) -> Self {
        let config = ViewConfiguration::from_metrics(metrics);
        let width = metrics.width_pixels as i32;
        let height = metrics.height_pixels as i32;
        Self {
            state: DragState::Idle,
            base_touch_slop: config.scaled_touch_slop(),
            touch_slop: config.scaled_touch_slop(),
            sensitivity: 1.0,
            active_pointer_id: None,
            history: Vec::new(),
            pointers_down: 0,
            velocity_tracker: VelocityTracker::new(),
            min_velocity: config.scaled_min_fling_velocity(),
            max_velocity: config.scaled_max_fling_velocity(),
            edge_size: (metrics.dp_to_px(EDGE_SIZE_DP) + 0.5) as i32,
            tracking_edges: EdgeFlags::NONE,
            scroller: Scroller::new(Easing::EaseOutQuint),
            pane: PaneFrame::new(0, 0, width, height),
            captured: false,
            parent_width: width,
            parent_height: height,
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Scale the touch slop by `1 / sensitivity`
    ///
    /// Higher sensitivity makes drags start sooner. Must lie in `(0, 1]`.
    pub fn set_sensitivity(&mut self, sensitivity: f32) -> Result<()> {
        let sensitivity = check_sensitivity(sensitivity)?;
        self.sensitivity = sensitivity;
        self.touch_slop = self.base_touch_slop / sensitivity;
        Ok(())
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Distance in pixels a pointer must travel before a drag starts
    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// Curve used by settle animations started after this call
    pub fn set_settle_easing(&mut self, easing: Easing) {
        self.scroller.set_easing(easing);
    }

    pub fn settle_easing(&self) -> Easing {
        self.scroller.easing()
    }

    pub fn set_min_velocity(&mut self, min_velocity: f32) {
        self.min_velocity = min_velocity;
    }

    pub fn min_velocity(&self) -> f32 {
        self.min_velocity
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) {
        self.max_velocity = max_velocity;
    }

    pub fn max_velocity(&self) -> f32 {
        self.max_velocity
    }

    /// Width in pixels of the zone along each tracked edge
    pub fn set_edge_size(&mut self, size: i32) {
        self.edge_size = size.max(0);
    }

    pub fn edge_size(&self) -> i32 {
        self.edge_size
    }

    /// Enable edge tracking for the given edges
    pub fn set_edge_tracking_enabled(&mut self, edges: EdgeFlags) {
        self.tracking_edges = edges;
    }

    pub fn set_parent_size(&mut self, width: i32, height: i32) {
        self.parent_width = width;
        self.parent_height = height;
    }

    pub fn parent_size(&self) -> (i32, i32) {
        (self.parent_width, self.parent_height)
    }

    /// Place the pane, e.g. after the host measured it
    pub fn set_pane_frame(&mut self, frame: PaneFrame) {
        self.pane = frame;
    }

    pub fn pane_frame(&self) -> PaneFrame {
        self.pane
    }

    // =========================================================================
    // State queries
    // =========================================================================

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn active_pointer_id(&self) -> Option<PointerId> {
        self.active_pointer_id
    }

    /// Whether the pane is held by a pointer or a programmatic slide
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn is_pointer_down(&self, pointer_id: PointerId) -> bool {
        pointer_id <= MAX_POINTER_ID && self.pointers_down & (1 << pointer_id) != 0
    }

    /// Whether `pointer_id` went down inside any of `edges`
    pub fn is_edge_touched(&self, edges: EdgeFlags, pointer_id: PointerId) -> bool {
        self.edges_for(pointer_id).intersects(edges)
    }

    /// Edges the pointer touched at its down, if it is still down
    fn edges_for(&self, pointer_id: PointerId) -> EdgeFlags {
        if !self.is_pointer_down(pointer_id) {
            return EdgeFlags::NONE;
        }
        self.history
            .get(pointer_id as usize)
            .map(|h| h.initial_edges)
            .unwrap_or(EdgeFlags::NONE)
    }

    fn edges_touched(&self, x: f32, _y: f32) -> EdgeFlags {
        if x < self.edge_size as f32 {
            EdgeFlags::LEFT
        } else {
            EdgeFlags::NONE
        }
    }

    // =========================================================================
    // Motion history
    // =========================================================================

    fn history(&self, pointer_id: PointerId) -> Result<&MotionHistory> {
        self.history
            .get(pointer_id as usize)
            .ok_or(SwipeError::PointerIndexOutOfBounds { pointer_id })
    }

    fn history_mut(&mut self, pointer_id: PointerId) -> Result<&mut MotionHistory> {
        self.history
            .get_mut(pointer_id as usize)
            .ok_or(SwipeError::PointerIndexOutOfBounds { pointer_id })
    }

    fn save_initial_motion(&mut self, pointer: &PointerCoords) {
        if pointer.id > MAX_POINTER_ID {
            tracing::debug!(pointer_id = pointer.id, "pointer id out of tracking range");
            return;
        }
        let index = pointer.id as usize;
        if self.history.len() <= index {
            self.history.resize(index + 1, MotionHistory::default());
        }
        let edges = self.edges_touched(pointer.x, pointer.y);
        self.history[index] = MotionHistory {
            initial_x: pointer.x,
            initial_y: pointer.y,
            last_x: pointer.x,
            last_y: pointer.y,
            initial_edges: edges,
            edge_drags_in_progress: EdgeFlags::NONE,
            edges_locked: EdgeFlags::NONE,
        };
        self.pointers_down |= 1 << pointer.id;
    }

    /// Fail if any pointer in a move has no recorded history
    fn check_known_pointers(&self, event: &MotionEvent) -> Result<()> {
        for pointer in event.pointers() {
            self.history(pointer.id)?;
        }
        Ok(())
    }

    fn save_last_motion(&mut self, event: &MotionEvent) -> Result<()> {
        for pointer in event.pointers() {
            let history = self.history_mut(pointer.id)?;
            history.last_x = pointer.x;
            history.last_y = pointer.y;
        }
        Ok(())
    }

    /// Forget every pointer; the history keeps its capacity
    fn clear_all_motion_history(&mut self) {
        self.history.fill(MotionHistory::default());
        self.pointers_down = 0;
    }

    fn clear_motion_history(&mut self, pointer_id: PointerId) {
        if let Some(history) = self.history.get_mut(pointer_id as usize) {
            *history = MotionHistory::default();
        }
        if pointer_id <= MAX_POINTER_ID {
            self.pointers_down &= !(1 << pointer_id);
        }
    }

    // =========================================================================
    // State machine
    // =========================================================================

    fn transition(&mut self, event: EventType, cb: &mut dyn DragCallback) {
        let Some(next) = self.state.on_event(event) else {
            return;
        };
        if next == self.state {
            return;
        }
        tracing::debug!(from = ?self.state, to = ?next, "drag state changed");
        self.state = next;
        cb.on_view_drag_state_changed(next);
        if next.is_idle() {
            self.captured = false;
        }
    }

    /// Give the pane to `pointer_id` and start dragging
    pub fn capture_view(&mut self, pointer_id: PointerId, cb: &mut dyn DragCallback) {
        self.captured = true;
        self.active_pointer_id = Some(pointer_id);
        cb.on_view_captured(pointer_id);
        self.transition(drag_events::CAPTURE, cb);
    }

    fn try_capture_view_for_drag(
        &mut self,
        pointer_id: PointerId,
        cb: &mut dyn DragCallback,
    ) -> bool {
        if self.captured && self.active_pointer_id == Some(pointer_id) {
            return true;
        }
        let edges = self.edges_for(pointer_id);
        if cb.try_capture_view(pointer_id, edges) {
            self.capture_view(pointer_id, cb);
            return true;
        }
        false
    }

    fn report_edge_touch(&self, pointer_id: PointerId, cb: &mut dyn DragCallback) {
        let edges = self.edges_for(pointer_id) & self.tracking_edges;
        if !edges.is_empty() {
            cb.on_edge_touched(edges, pointer_id);
        }
    }

    fn report_new_edge_drags(
        &mut self,
        dx: f32,
        dy: f32,
        pointer_id: PointerId,
        cb: &mut dyn DragCallback,
    ) -> Result<()> {
        if self.check_new_edge_drag(dx, dy, pointer_id, EdgeFlags::LEFT, cb)? {
            let history = self.history_mut(pointer_id)?;
            history.edge_drags_in_progress = history.edge_drags_in_progress | EdgeFlags::LEFT;
            cb.on_edge_drag_started(EdgeFlags::LEFT, pointer_id);
        }
        Ok(())
    }

    fn check_new_edge_drag(
        &mut self,
        delta: f32,
        odelta: f32,
        pointer_id: PointerId,
        edge: EdgeFlags,
        cb: &mut dyn DragCallback,
    ) -> Result<bool> {
        let history = *self.history(pointer_id)?;
        let abs_delta = delta.abs();
        let abs_odelta = odelta.abs();

        if !history.initial_edges.contains(edge)
            || !self.tracking_edges.contains(edge)
            || history.edges_locked.contains(edge)
            || history.edge_drags_in_progress.contains(edge)
            || (abs_delta <= self.touch_slop && abs_odelta <= self.touch_slop)
        {
            return Ok(false);
        }
        if abs_delta < abs_odelta * 0.5 && cb.on_edge_lock(edge) {
            let history = self.history_mut(pointer_id)?;
            history.edges_locked = history.edges_locked | edge;
            return Ok(false);
        }
        Ok(abs_delta > self.touch_slop)
    }

    /// Whether a movement of `(dx, dy)` is past the slop on a draggable axis
    fn check_touch_slop(&self, dx: f32, dy: f32, cb: &dyn DragCallback) -> bool {
        let horizontal = cb.view_horizontal_drag_range() > 0;
        let vertical = cb.view_vertical_drag_range() > 0;
        match (horizontal, vertical) {
            (true, true) => dx * dx + dy * dy > self.touch_slop * self.touch_slop,
            (true, false) => dx.abs() > self.touch_slop,
            (false, true) => dy.abs() > self.touch_slop,
            (false, false) => false,
        }
    }

    /// Look for a pointer that has moved far enough to start a drag
    fn check_pointers_for_drag(
        &mut self,
        event: &MotionEvent,
        cb: &mut dyn DragCallback,
    ) -> Result<()> {
        for pointer in event.pointers() {
            let history = *self.history(pointer.id)?;
            let dx = pointer.x - history.initial_x;
            let dy = pointer.y - history.initial_y;

            self.report_new_edge_drags(dx, dy, pointer.id, cb)?;
            if self.state.is_dragging() {
                break;
            }
            if self.pane.contains(history.initial_x, history.initial_y)
                && self.check_touch_slop(dx, dy, cb)
                && self.try_capture_view_for_drag(pointer.id, cb)
            {
                break;
            }
        }
        self.save_last_motion(event)
    }

    // =========================================================================
    // Touch input
    // =========================================================================

    /// Watch an event on its way to the container's children
    ///
    /// Returns true once a drag has started and the container should take
    /// over the rest of the gesture.
    pub fn should_intercept_touch_event(
        &mut self,
        event: &MotionEvent,
        cb: &mut dyn DragCallback,
    ) -> Result<bool> {
        let action = event.action();
        if action == MotionAction::Move {
            // Reject before anything is moved or recorded
            self.check_known_pointers(event)?;
        }
        if action == MotionAction::Down {
            self.cancel();
        }
        self.velocity_tracker.add_movement(event);

        match action {
            MotionAction::Down => {
                if let Some(pointer) = event.action_pointer().copied() {
                    self.save_initial_motion(&pointer);
                    // A pointer can catch a settling pane
                    if self.state.is_settling()
                        && self.captured
                        && self.pane.contains(pointer.x, pointer.y)
                    {
                        self.try_capture_view_for_drag(pointer.id, cb);
                    }
                    self.report_edge_touch(pointer.id, cb);
                }
            }
            MotionAction::PointerDown => {
                if let Some(pointer) = event.action_pointer().copied() {
                    self.save_initial_motion(&pointer);
                    if self.state.is_idle() {
                        self.report_edge_touch(pointer.id, cb);
                    } else if self.state.is_settling()
                        && self.captured
                        && self.pane.contains(pointer.x, pointer.y)
                    {
                        self.try_capture_view_for_drag(pointer.id, cb);
                    }
                }
            }
            MotionAction::Move => self.check_pointers_for_drag(event, cb)?,
            MotionAction::PointerUp => {
                if let Some(pointer) = event.action_pointer() {
                    self.clear_motion_history(pointer.id);
                }
            }
            MotionAction::Up | MotionAction::Cancel => self.cancel(),
        }

        Ok(self.state.is_dragging())
    }

    /// Handle an event the container received directly
    pub fn process_touch_event(
        &mut self,
        event: &MotionEvent,
        cb: &mut dyn DragCallback,
    ) -> Result<()> {
        let action = event.action();
        let now = event.event_time();
        if action == MotionAction::Move {
            self.check_known_pointers(event)?;
        }
        if action == MotionAction::Down {
            self.cancel();
        }
        self.velocity_tracker.add_movement(event);

        match action {
            MotionAction::Down => {
                if let Some(pointer) = event.action_pointer().copied() {
                    self.save_initial_motion(&pointer);
                    if self.pane.contains(pointer.x, pointer.y) {
                        self.try_capture_view_for_drag(pointer.id, cb);
                    }
                    self.report_edge_touch(pointer.id, cb);
                }
            }
            MotionAction::PointerDown => {
                if let Some(pointer) = event.action_pointer().copied() {
                    self.save_initial_motion(&pointer);
                    if self.state.is_idle() {
                        if self.pane.contains(pointer.x, pointer.y) {
                            self.try_capture_view_for_drag(pointer.id, cb);
                        }
                        self.report_edge_touch(pointer.id, cb);
                    } else if self.captured && self.pane.contains(pointer.x, pointer.y) {
                        self.try_capture_view_for_drag(pointer.id, cb);
                    }
                }
            }
            MotionAction::Move => {
                if self.state.is_dragging() {
                    let Some(active) = self.active_pointer_id else {
                        return Ok(());
                    };
                    let pointer = event
                        .find_pointer_index(active)
                        .and_then(|index| event.pointer(index))
                        .copied()
                        .ok_or(SwipeError::PointerIndexOutOfBounds { pointer_id: active })?;
                    let history = *self.history(active)?;
                    let idx = (pointer.x - history.last_x) as i32;
                    let idy = (pointer.y - history.last_y) as i32;

                    self.drag_to(self.pane.left + idx, self.pane.top + idy, idx, idy, cb);
                    self.save_last_motion(event)?;
                } else {
                    self.check_pointers_for_drag(event, cb)?;
                }
            }
            MotionAction::PointerUp => {
                if let Some(pointer) = event.action_pointer().copied() {
                    if self.state.is_dragging() && self.active_pointer_id == Some(pointer.id) {
                        // Hand the pane to another pointer still on it
                        let handed_off = event.pointers().iter().any(|other| {
                            other.id != pointer.id
                                && self.pane.contains(other.x, other.y)
                                && self.try_capture_view_for_drag(other.id, cb)
                        });
                        if !handed_off {
                            self.release_view_for_pointer_up(now, cb);
                        }
                    }
                    self.clear_motion_history(pointer.id);
                }
            }
            MotionAction::Up => {
                if self.state.is_dragging() {
                    self.release_view_for_pointer_up(now, cb);
                }
                self.cancel();
            }
            MotionAction::Cancel => {
                if self.state.is_dragging() {
                    self.dispatch_view_released(0.0, 0.0, now, cb);
                }
                self.cancel();
            }
        }
        Ok(())
    }

    fn drag_to(&mut self, left: i32, top: i32, dx: i32, dy: i32, cb: &mut dyn DragCallback) {
        let old_left = self.pane.left;
        let old_top = self.pane.top;
        let mut clamped_x = left;
        let mut clamped_y = top;
        if dx != 0 {
            clamped_x = cb.clamp_view_position_horizontal(left, dx);
            self.pane.left = clamped_x;
        }
        if dy != 0 {
            clamped_y = cb.clamp_view_position_vertical(top, dy);
            self.pane.top = clamped_y;
        }
        if dx != 0 || dy != 0 {
            tracing::trace!(left = clamped_x, top = clamped_y, "pane dragged");
            cb.on_view_position_changed(
                clamped_x,
                clamped_y,
                clamped_x - old_left,
                clamped_y - old_top,
                self.state,
            );
        }
    }

    fn release_view_for_pointer_up(&mut self, now_ms: u64, cb: &mut dyn DragCallback) {
        let (vx, vy) = self
            .active_pointer_id
            .map(|id| self.velocity_tracker.compute_velocity(id, self.max_velocity))
            .unwrap_or_default();
        let xvel = clamp_mag(vx, self.min_velocity, self.max_velocity);
        let yvel = clamp_mag(vy, self.min_velocity, self.max_velocity);
        self.dispatch_view_released(xvel, yvel, now_ms, cb);
    }

    fn dispatch_view_released(
        &mut self,
        xvel: f32,
        yvel: f32,
        now_ms: u64,
        cb: &mut dyn DragCallback,
    ) {
        tracing::debug!(xvel, yvel, left = self.pane.left, "pane released");
        if let Some((left, top)) = cb.on_view_released(xvel, yvel) {
            self.force_settle_captured_view_at(left, top, xvel as i32, yvel as i32, now_ms, cb);
        }
        if self.state.is_dragging() {
            self.transition(drag_events::DROP, cb);
        }
    }

    /// Cancel the gesture and forget every pointer
    pub fn cancel(&mut self) {
        self.active_pointer_id = None;
        self.clear_all_motion_history();
        self.velocity_tracker.clear();
    }

    /// Cancel the gesture and jump a settling pane to its target
    pub fn abort(&mut self, cb: &mut dyn DragCallback) {
        self.cancel();
        if self.state.is_settling() {
            self.scroller.abort_animation();
            let new_x = self.scroller.curr_x();
            let new_y = self.scroller.curr_y();
            let dx = new_x - self.pane.left;
            let dy = new_y - self.pane.top;
            self.pane.left = new_x;
            self.pane.top = new_y;
            cb.on_view_position_changed(new_x, new_y, dx, dy, self.state);
            self.transition(drag_events::ABORT, cb);
        }
    }

    // =========================================================================
    // Settling
    // =========================================================================

    /// Settle the captured pane at `(left, top)` using the active pointer's
    /// velocity
    pub fn settle_captured_view_at(
        &mut self,
        left: i32,
        top: i32,
        now_ms: u64,
        cb: &mut dyn DragCallback,
    ) -> bool {
        if !self.captured {
            return false;
        }
        let (xvel, yvel) = self
            .active_pointer_id
            .map(|id| self.velocity_tracker.compute_velocity(id, self.max_velocity))
            .unwrap_or_default();
        self.force_settle_captured_view_at(left, top, xvel as i32, yvel as i32, now_ms, cb)
    }

    /// Animate the pane to `(left, top)` without a pointer
    ///
    /// Returns true if a settle started; call
    /// [`continue_settling`](Self::continue_settling) every frame until it
    /// returns false.
    pub fn smooth_slide_view_to(
        &mut self,
        left: i32,
        top: i32,
        now_ms: u64,
        cb: &mut dyn DragCallback,
    ) -> bool {
        self.captured = true;
        self.active_pointer_id = None;
        self.force_settle_captured_view_at(left, top, 0, 0, now_ms, cb)
    }

    fn force_settle_captured_view_at(
        &mut self,
        final_left: i32,
        final_top: i32,
        xvel: i32,
        yvel: i32,
        now_ms: u64,
        cb: &mut dyn DragCallback,
    ) -> bool {
        let start_left = self.pane.left;
        let start_top = self.pane.top;
        let dx = final_left - start_left;
        let dy = final_top - start_top;

        if dx == 0 && dy == 0 {
            self.scroller.abort_animation();
            let event = if self.state.is_dragging() {
                drag_events::DROP
            } else {
                drag_events::ABORT
            };
            self.transition(event, cb);
            return false;
        }

        let duration = self.compute_settle_duration(dx, dy, xvel, yvel, cb);
        tracing::debug!(final_left, final_top, duration, "settle started");
        self.scroller
            .start_scroll(start_left, start_top, dx, dy, duration, now_ms);
        self.transition(drag_events::SETTLE, cb);
        true
    }

    fn compute_settle_duration(
        &self,
        dx: i32,
        dy: i32,
        xvel: i32,
        yvel: i32,
        cb: &dyn DragCallback,
    ) -> u64 {
        let xvel = clamp_mag_int(xvel, self.min_velocity as i32, self.max_velocity as i32);
        let yvel = clamp_mag_int(yvel, self.min_velocity as i32, self.max_velocity as i32);
        let abs_dx = dx.abs() as f32;
        let abs_dy = dy.abs() as f32;
        let abs_xvel = xvel.abs() as f32;
        let abs_yvel = yvel.abs() as f32;
        let added_vel = abs_xvel + abs_yvel;
        let added_distance = abs_dx + abs_dy;

        let x_weight = if xvel != 0 {
            abs_xvel / added_vel
        } else {
            abs_dx / added_distance
        };
        let y_weight = if yvel != 0 {
            abs_yvel / added_vel
        } else {
            abs_dy / added_distance
        };

        let x_duration = self.compute_axis_duration(dx, xvel, cb.view_horizontal_drag_range());
        let y_duration = self.compute_axis_duration(dy, yvel, cb.view_vertical_drag_range());

        (x_duration as f32 * x_weight + y_duration as f32 * y_weight) as u64
    }

    fn compute_axis_duration(&self, delta: i32, velocity: i32, motion_range: i32) -> u64 {
        if delta == 0 {
            return 0;
        }

        let width = self.parent_width.max(1) as f32;
        let half_width = width / 2.0;
        let distance_ratio = (delta.abs() as f32 / width).min(1.0);
        let distance =
            half_width + half_width * distance_influence_for_snap_duration(distance_ratio);

        let velocity = velocity.abs();
        let duration = if velocity > 0 {
            4.0 * (1000.0 * (distance / velocity as f32).abs()).round()
        } else if motion_range > 0 {
            let range = delta.abs() as f32 / motion_range as f32;
            (range + 1.0) * BASE_SETTLE_DURATION_MS as f32
        } else {
            MAX_SETTLE_DURATION_MS as f32
        };
        (duration as u64).min(MAX_SETTLE_DURATION_MS)
    }

    /// Advance a settle to `now_ms`
    ///
    /// Returns true while the pane is still settling. The frame that lands
    /// on the target moves the tracker back to idle.
    pub fn continue_settling(&mut self, now_ms: u64, cb: &mut dyn DragCallback) -> bool {
        if self.state.is_settling() {
            let mut keep_going = self.scroller.compute_scroll_offset(now_ms);
            let x = self.scroller.curr_x();
            let y = self.scroller.curr_y();
            let dx = x - self.pane.left;
            let dy = y - self.pane.top;
            self.pane.left = x;
            self.pane.top = y;

            if dx != 0 || dy != 0 {
                tracing::trace!(left = x, top = y, "pane settling");
                cb.on_view_position_changed(x, y, dx, dy, self.state);
            }

            if keep_going && x == self.scroller.final_x() && y == self.scroller.final_y() {
                self.scroller.abort_animation();
                keep_going = false;
            }

            if !keep_going {
                self.transition(drag_events::SETTLED, cb);
            }
        }
        self.state.is_settling()
    }
}
