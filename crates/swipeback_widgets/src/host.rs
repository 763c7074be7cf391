//! Capabilities the host UI framework provides to the container
//!
//! All handles are shared on the UI thread, so every method takes `&self`;
//! implementors use interior mutability where they need it.

use swipeback_animation::FrameScheduler;

/// The screen that hosts a swipe-back container
pub trait HostScreen {
    /// Whether the screen is already being dismissed
    fn is_finishing(&self) -> bool;

    /// Dismiss the screen
    fn finish(&self);
}

/// The view the gesture moves
pub trait ContentPane {
    /// Measured width in pixels
    fn width(&self) -> i32;

    /// Measured height in pixels
    fn height(&self) -> i32;

    /// Place the pane at the given edges in container coordinates
    fn layout(&self, left: i32, top: i32, right: i32, bottom: i32);
}

/// Hook for asking the host to draw again
pub trait RedrawRequester {
    /// Redraw at the next opportunity
    fn invalidate(&self);

    /// Redraw on the next display frame, used while animating
    fn post_invalidate_on_animation(&self);
}

impl RedrawRequester for FrameScheduler {
    fn invalidate(&self) {
        self.request_frame();
    }

    fn post_invalidate_on_animation(&self) {
        self.request_frame();
    }
}
