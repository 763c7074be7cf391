//! Swipe progress listeners

use std::rc::Rc;

use swipeback_core::{DragState, EdgeFlags};

/// Receives swipe progress from a [`SwipeBackLayout`](crate::SwipeBackLayout)
///
/// Calls are synchronous, on the UI thread, in registration order.
pub trait SwipeListener {
    /// The drag state changed; `scroll_percent` is the progress at that moment
    fn on_scroll_state_change(&self, state: DragState, scroll_percent: f32);

    /// A drag was captured at `edge`
    fn on_edge_touch(&self, edge: EdgeFlags);

    /// Progress rose to the close threshold during a drag
    ///
    /// Fires once per upward crossing; progress must drop below the
    /// threshold again before it can fire a second time.
    fn on_scroll_over_threshold(&self);

    /// The content moved; `offset_px` is its left edge
    fn on_scroll(&self, _scroll_percent: f32, _offset_px: i32) {}

    /// The content slid fully out and the screen is about to be dismissed
    fn on_scroll_to_close(&self) {}
}

/// Ordered listener registry
///
/// Duplicates are allowed; removal takes out the first registration of the
/// same object.
#[derive(Clone, Default)]
pub struct SwipeListeners {
    listeners: Vec<Rc<dyn SwipeListener>>,
}

impl SwipeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: Rc<dyn SwipeListener>) {
        self.listeners.push(listener);
    }

    /// Remove the first registration of `listener`
    ///
    /// Returns false if it was not registered.
    pub fn remove(&mut self, listener: &Rc<dyn SwipeListener>) -> bool {
        let target = Rc::as_ptr(listener) as *const ();
        match self
            .listeners
            .iter()
            .position(|l| Rc::as_ptr(l) as *const () == target)
        {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn SwipeListener>> {
        self.listeners.iter()
    }

    pub(crate) fn notify_state_change(&self, state: DragState, scroll_percent: f32) {
        for listener in &self.listeners {
            listener.on_scroll_state_change(state, scroll_percent);
        }
    }

    pub(crate) fn notify_edge_touch(&self, edge: EdgeFlags) {
        for listener in &self.listeners {
            listener.on_edge_touch(edge);
        }
    }

    pub(crate) fn notify_scroll_over_threshold(&self) {
        for listener in &self.listeners {
            listener.on_scroll_over_threshold();
        }
    }

    pub(crate) fn notify_scroll(&self, scroll_percent: f32, offset_px: i32) {
        for listener in &self.listeners {
            listener.on_scroll(scroll_percent, offset_px);
        }
    }

    pub(crate) fn notify_scroll_to_close(&self) {
        for listener in &self.listeners {
            listener.on_scroll_to_close();
        }
    }
}

impl std::fmt::Debug for SwipeListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}
