//! Swipeback Animation
//!
//! Time-driven motion for settling panes.
//!
//! # Features
//!
//! - **Easing**: quintic ease-out used by drag trackers, plus the viscous-fluid curve
//! - **Scroller**: scripted slide from a start offset to a target over a duration
//! - **Frame scheduler**: cooperative display-refresh loop for single-threaded hosts

pub mod easing;
pub mod scheduler;
pub mod scroller;

pub use easing::Easing;
pub use scheduler::FrameScheduler;
pub use scroller::Scroller;
