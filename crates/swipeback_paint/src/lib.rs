//! Swipeback Paint API
//!
//! A small recording canvas used by the swipe container to draw the
//! translucent scrim over the uncovered area and the shadow along the
//! content edge. Commands are recorded into a [`PaintContext`] and replayed
//! by the host renderer.

pub mod color;
pub mod context;
pub mod drawable;
pub mod gradient;
pub mod primitives;

pub use color::Color;
pub use context::{FillStyle, PaintCommand, PaintContext};
pub use drawable::{Drawable, EdgeShadow};
pub use gradient::{Gradient, GradientStop};
pub use primitives::*;
