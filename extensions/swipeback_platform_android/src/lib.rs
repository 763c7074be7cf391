//! Swipeback Android Platform
//!
//! Glue for hosting swipe-back screens in an Android activity:
//!
//! - [`input`]: touch events to [`MotionEvent`](swipeback_core::MotionEvent)s
//! - [`display_metrics`]: density from the configuration's dpi bucket
//! - [`logging`]: logcat output for `log` and `tracing`

pub mod input;
pub mod logging;

pub use input::{to_motion_event, TouchEvent, TouchPointer};
pub use logging::init_logging;

#[cfg(target_os = "android")]
pub use input::convert_motion_event;

use swipeback_core::DisplayMetrics;

/// Baseline dpi, where one dp is one pixel
pub const DENSITY_DEFAULT_DPI: u32 = 160;

/// Display metrics for a window of `width` x `height` pixels
///
/// Missing or zero dpi falls back to the baseline density.
pub fn display_metrics(width: u32, height: u32, density_dpi: Option<u32>) -> DisplayMetrics {
    let dpi = density_dpi
        .filter(|&dpi| dpi > 0)
        .unwrap_or(DENSITY_DEFAULT_DPI);
    DisplayMetrics::new(width, height, dpi as f32 / DENSITY_DEFAULT_DPI as f32)
}

/// Display metrics from an activity's configuration
#[cfg(target_os = "android")]
pub fn metrics_from_configuration(
    config: &ndk::configuration::Configuration,
    width: u32,
    height: u32,
) -> DisplayMetrics {
    display_metrics(width, height, config.density())
}
