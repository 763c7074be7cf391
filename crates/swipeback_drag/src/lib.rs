//! Swipeback Drag
//!
//! Pointer tracking for dragging a single pane inside a parent container.
//!
//! The [`ViewDragTracker`] consumes [`MotionEvent`](swipeback_core::MotionEvent)s,
//! decides when a gesture becomes a drag, moves the pane while the pointer is
//! down, and animates it to a resting position after release. Policy lives in
//! a [`DragCallback`] supplied by the container on every call.

pub mod callback;
pub mod tracker;
pub mod velocity;

pub use callback::DragCallback;
pub use tracker::{PaneFrame, ViewDragTracker};
pub use velocity::VelocityTracker;
