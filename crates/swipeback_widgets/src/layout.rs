//! Swipe-back container
//!
//! [`SwipeBackLayout`] sits between a screen and its content pane. It watches
//! touches on their way to the content; a touch that starts in the left edge
//! zone and moves past the slop takes the pane, which then follows the
//! pointer horizontally. On release the pane either slides back or slides
//! out, in which case the screen is dismissed.
//!
//! Gesture policy lives in [`SwipeGesture`], the tracker's [`DragCallback`].
//! The tracker and the gesture are separate fields so the tracker can call
//! back into the gesture while both are borrowed from the layout.

use std::rc::{Rc, Weak};

use swipeback_animation::Easing;
use swipeback_core::error::{check_edge_percent, check_threshold};
use swipeback_core::{DisplayMetrics, DragState, EdgeFlags, MotionEvent, PointerId, Result};
use swipeback_drag::{DragCallback, PaneFrame, ViewDragTracker};
use swipeback_paint::{Drawable, EdgeShadow, PaintContext};

use crate::host::{ContentPane, HostScreen, RedrawRequester};
use crate::listener::{SwipeListener, SwipeListeners};
use crate::overlay;

/// Progress past which a release without velocity closes the screen
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 0.3;

/// Scrim color at rest, 0xAARRGGBB
pub const DEFAULT_SCRIM_COLOR: u32 = 0x9900_0000;

/// Minimum fling velocity in dp per second; the maximum is twice this
pub const MIN_FLING_VELOCITY_DP: f32 = 400.0;

/// Extra distance the pane travels past fully hidden when closing
pub const OVERSCROLL_DISTANCE: i32 = 10;

/// Drag policy and progress bookkeeping
struct SwipeGesture {
    screen: Weak<dyn HostScreen>,
    content: Rc<dyn ContentPane>,
    redraw: Rc<dyn RedrawRequester>,
    listeners: SwipeListeners,
    scroll_threshold: f32,
    scroll_percent: f32,
    content_left: i32,
    content_top: i32,
    edge_size: i32,
    shadow_width: i32,
    /// Armed while progress may still cross the threshold upwards
    scroll_over_valid: bool,
}

impl SwipeGesture {
    /// Offset at which the pane and its shadow are fully off screen
    fn close_target(&self) -> i32 {
        self.content.width() + self.shadow_width + OVERSCROLL_DISTANCE
    }

    fn dismiss_screen(&self) {
        let Some(screen) = self.screen.upgrade() else {
            tracing::debug!("host screen dropped before dismissal");
            return;
        };
        if screen.is_finishing() {
            return;
        }
        tracing::debug!("content slid out, finishing screen");
        self.listeners.notify_scroll_to_close();
        screen.finish();
    }
}

impl DragCallback for SwipeGesture {
    fn on_view_drag_state_changed(&mut self, state: DragState) {
        self.listeners
            .notify_state_change(state, self.scroll_percent);
    }

    fn on_view_position_changed(&mut self, left: i32, top: i32, _dx: i32, _dy: i32, state: DragState) {
        let width = self.content.width();
        let span = (width + self.shadow_width).max(1);
        self.scroll_percent = (left as f32 / span as f32).abs();
        self.content_left = left;
        self.content_top = top;
        self.content
            .layout(left, top, left + width, top + self.content.height());
        self.redraw.invalidate();

        if self.scroll_percent < self.scroll_threshold && !self.scroll_over_valid {
            self.scroll_over_valid = true;
        }
        self.listeners.notify_scroll(self.scroll_percent, left);
        if state.is_dragging()
            && self.scroll_percent >= self.scroll_threshold
            && self.scroll_over_valid
        {
            self.scroll_over_valid = false;
            tracing::debug!(percent = self.scroll_percent, "scroll passed close threshold");
            self.listeners.notify_scroll_over_threshold();
        }

        if self.scroll_percent >= 1.0 {
            self.dismiss_screen();
        }
    }

    fn on_view_released(&mut self, xvel: f32, _yvel: f32) -> Option<(i32, i32)> {
        let close = xvel > 0.0 || (xvel == 0.0 && self.scroll_percent > self.scroll_threshold);
        let left = if close { self.close_target() } else { 0 };
        self.redraw.invalidate();
        Some((left, 0))
    }

    fn try_capture_view(&mut self, _pointer_id: PointerId, edges: EdgeFlags) -> bool {
        let captured = edges.contains(EdgeFlags::LEFT);
        if captured {
            self.listeners.notify_edge_touch(EdgeFlags::LEFT);
            self.scroll_over_valid = true;
        }
        captured
    }

    fn view_horizontal_drag_range(&self) -> i32 {
        self.edge_size
    }

    fn view_vertical_drag_range(&self) -> i32 {
        0
    }

    fn clamp_view_position_horizontal(&self, left: i32, _dx: i32) -> i32 {
        left.max(0).min(self.content.width())
    }
}

/// Container that lets its screen be dismissed by swiping from the left edge
pub struct SwipeBackLayout {
    tracker: ViewDragTracker,
    gesture: SwipeGesture,
    metrics: DisplayMetrics,
    enabled: bool,
    scrim_color: u32,
    scrim_opacity: f32,
    shadow: Box<dyn Drawable>,
    width: i32,
    height: i32,
}

impl SwipeBackLayout {
    /// Wrap a screen's content pane
    ///
    /// The edge zone covers half the display width. Fling velocities are
    /// scaled from [`MIN_FLING_VELOCITY_DP`] by the display density.
    pub fn attach(
        screen: &Rc<dyn HostScreen>,
        content: Rc<dyn ContentPane>,
        redraw: Rc<dyn RedrawRequester>,
        metrics: DisplayMetrics,
    ) -> Self {
        let shadow = EdgeShadow::for_density(metrics.density);
        let min_velocity = metrics.dp_to_px(MIN_FLING_VELOCITY_DP);
        let edge_size = (metrics.width_pixels / 2) as i32;
        let width = content.width();
        let height = content.height();

        let mut tracker = ViewDragTracker::new(&metrics);
        tracker.set_min_velocity(min_velocity);
        tracker.set_max_velocity(min_velocity * 2.0);
        tracker.set_edge_tracking_enabled(EdgeFlags::LEFT);
        tracker.set_edge_size(edge_size);
        tracker.set_parent_size(width, height);
        tracker.set_pane_frame(PaneFrame::new(0, 0, width, height));

        tracing::debug!(width, height, edge_size, "swipe-back layout attached");

        Self {
            tracker,
            gesture: SwipeGesture {
                screen: Rc::downgrade(screen),
                content,
                redraw,
                listeners: SwipeListeners::new(),
                scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
                scroll_percent: 0.0,
                content_left: 0,
                content_top: 0,
                edge_size,
                shadow_width: shadow.intrinsic_width() as i32,
                scroll_over_valid: false,
            },
            metrics,
            enabled: true,
            scrim_color: DEFAULT_SCRIM_COLOR,
            scrim_opacity: 0.0,
            shadow: Box::new(shadow),
            width,
            height,
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Turn gesture handling on or off
    ///
    /// A drag already captured keeps its state, and a running settle keeps
    /// advancing in [`compute_scroll`](Self::compute_scroll).
    pub fn set_enable_gesture(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the progress past which a slow release closes the screen
    ///
    /// Must lie strictly between 0 and 1.
    pub fn set_scroll_threshold(&mut self, threshold: f32) -> Result<()> {
        self.gesture.scroll_threshold = check_threshold(threshold)?;
        Ok(())
    }

    pub fn scroll_threshold(&self) -> f32 {
        self.gesture.scroll_threshold
    }

    /// Set the scrim color in 0xAARRGGBB
    pub fn set_scrim_color(&mut self, color: u32) {
        self.scrim_color = color;
        self.gesture.redraw.invalidate();
    }

    pub fn scrim_color(&self) -> u32 {
        self.scrim_color
    }

    /// Width in pixels of the zone along the left edge that starts a swipe
    pub fn set_edge_size(&mut self, size: i32) {
        let size = size.max(0);
        self.gesture.edge_size = size;
        self.tracker.set_edge_size(size);
    }

    /// Size the edge zone as a fraction of the display width, in `(0, 1]`
    pub fn set_edge_size_percent(&mut self, percent: f32) -> Result<()> {
        let percent = check_edge_percent(percent)?;
        self.set_edge_size((self.metrics.width_pixels as f32 * percent) as i32);
        Ok(())
    }

    pub fn edge_size(&self) -> i32 {
        self.gesture.edge_size
    }

    /// Scale the touch slop by `1 / sensitivity`; `sensitivity` in `(0, 1]`
    pub fn set_sensitivity(&mut self, sensitivity: f32) -> Result<()> {
        self.tracker.set_sensitivity(sensitivity)
    }

    pub fn set_min_velocity(&mut self, min_velocity: f32) {
        self.tracker.set_min_velocity(min_velocity);
    }

    /// Curve for the slide back or out after release
    pub fn set_settle_easing(&mut self, easing: Easing) {
        self.tracker.set_settle_easing(easing);
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) {
        self.tracker.set_max_velocity(max_velocity);
    }

    /// Replace the shadow drawn along the content edge
    pub fn set_shadow(&mut self, shadow: Box<dyn Drawable>) {
        self.gesture.shadow_width = shadow.intrinsic_width() as i32;
        self.shadow = shadow;
        self.gesture.redraw.invalidate();
    }

    pub fn add_swipe_listener(&mut self, listener: Rc<dyn SwipeListener>) {
        self.gesture.listeners.add(listener);
    }

    /// Remove the first registration of `listener`
    pub fn remove_swipe_listener(&mut self, listener: &Rc<dyn SwipeListener>) -> bool {
        self.gesture.listeners.remove(listener)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Progress of the swipe, `|left| / (content width + shadow width)`
    pub fn scroll_percent(&self) -> f32 {
        self.gesture.scroll_percent
    }

    pub fn content_offset(&self) -> (i32, i32) {
        (self.gesture.content_left, self.gesture.content_top)
    }

    pub fn drag_state(&self) -> DragState {
        self.tracker.state()
    }

    pub fn scrim_opacity(&self) -> f32 {
        self.scrim_opacity
    }

    pub fn tracker(&self) -> &ViewDragTracker {
        &self.tracker
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Decide whether to take over the gesture from the content
    pub fn on_intercept_touch_event(&mut self, event: &MotionEvent) -> bool {
        if !self.enabled {
            return false;
        }
        match self
            .tracker
            .should_intercept_touch_event(event, &mut self.gesture)
        {
            Ok(intercept) => intercept,
            Err(err) => {
                tracing::debug!(%err, "touch history fault, not intercepting");
                false
            }
        }
    }

    /// Handle a touch the content did not consume
    pub fn on_touch_event(&mut self, event: &MotionEvent) -> bool {
        if !self.enabled {
            return false;
        }
        if let Err(err) = self.tracker.process_touch_event(event, &mut self.gesture) {
            tracing::debug!(%err, "touch history fault, ignoring event");
        }
        true
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Per-frame step: refresh the scrim and advance any settle
    pub fn compute_scroll(&mut self, now_ms: u64) {
        self.scrim_opacity = 1.0 - self.gesture.scroll_percent;
        if self.tracker.continue_settling(now_ms, &mut self.gesture) {
            self.gesture.redraw.post_invalidate_on_animation();
        }
    }

    /// Draw the shadow and scrim after the host drew the content pane
    pub fn draw_overlay(&self, ctx: &mut PaintContext) {
        if self.scrim_opacity <= 0.0 || self.tracker.state().is_idle() {
            return;
        }
        let pane = self.tracker.pane_frame();
        overlay::draw_shadow(
            ctx,
            self.shadow.as_ref(),
            pane.left,
            pane.top,
            pane.height,
            self.scrim_opacity,
        );
        overlay::draw_scrim(ctx, self.scrim_color, pane.left, self.height, self.scrim_opacity);
    }

    /// Place the content pane at the current offset
    pub fn on_layout(&mut self) {
        let content = &self.gesture.content;
        let (left, top) = (self.gesture.content_left, self.gesture.content_top);
        let (width, height) = (content.width(), content.height());
        content.layout(left, top, left + width, top + height);
        self.tracker
            .set_pane_frame(PaneFrame::new(left, top, width, height));
    }

    /// The container was resized
    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.tracker.set_parent_size(width, height);
        self.on_layout();
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Slide the content out and dismiss the screen
    pub fn scroll_to_finish_screen(&mut self, now_ms: u64) {
        let left = self.gesture.close_target();
        tracing::debug!(left, "scrolling to finish screen");
        self.tracker
            .smooth_slide_view_to(left, 0, now_ms, &mut self.gesture);
        self.gesture.redraw.invalidate();
    }
}

impl std::fmt::Debug for SwipeBackLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeBackLayout")
            .field("enabled", &self.enabled)
            .field("state", &self.tracker.state())
            .field("scroll_percent", &self.gesture.scroll_percent)
            .field("content_offset", &self.content_offset())
            .field("listeners", &self.gesture.listeners)
            .finish()
    }
}
