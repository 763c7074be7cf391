//! Swipeback Widgets
//!
//! Edge-swipe dismissal for screens:
//!
//! - [`SwipeBackLayout`]: container that drags the screen's content pane
//!   from the left edge, draws the scrim and shadow, and dismisses the screen
//!   once the pane slides out
//! - [`SwipeListener`]: progress notifications, delivered in registration order
//! - [`SwipeBackPage`] / [`SwipeBackHelper`]: per-screen configuration that
//!   can be set before the container exists, and a stack of live pages
//!
//! The host UI framework supplies its screen, content pane and redraw hook
//! through the traits in [`host`].

pub mod helper;
pub mod host;
pub mod layout;
pub mod listener;
pub mod overlay;
pub mod page;

pub use helper::{PageId, ScreenId, SwipeBackHelper};
pub use host::{ContentPane, HostScreen, RedrawRequester};
pub use layout::SwipeBackLayout;
pub use listener::{SwipeListener, SwipeListeners};
pub use page::{PageSwipeListener, SwipeBackPage};
