//! Swipeback Core
//!
//! Foundational types shared by the swipe-back crates:
//!
//! - **Pointer Events**: platform-agnostic motion events with per-pointer coordinates
//! - **Drag State Machine**: `Idle → Dragging → Settling → Idle` transitions
//! - **Display Metrics**: density-scaled touch slop and fling velocities
//! - **Errors**: configuration faults and the pointer-history fault
//!
//! # Example
//!
//! ```rust
//! use swipeback_core::events::drag_events;
//! use swipeback_core::{DragState, StateTransitions};
//!
//! let state = DragState::Idle;
//! let dragging = state.on_event(drag_events::CAPTURE);
//! assert_eq!(dragging, Some(DragState::Dragging));
//! ```

pub mod error;
pub mod events;
pub mod fsm;
pub mod metrics;

pub use error::{Result, SwipeError};
pub use events::{EdgeFlags, EventType, MotionAction, MotionEvent, PointerCoords, PointerId};
pub use fsm::{DragState, StateTransitions};
pub use metrics::{DisplayMetrics, ViewConfiguration};
