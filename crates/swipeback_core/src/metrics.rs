//! Display metrics and density-scaled gesture constants
//!
//! Gesture thresholds are specified in density-independent pixels (dp) and
//! scaled by the display density, matching platform view configuration.

/// Touch slop in dp. Movement below this is treated as jitter.
pub const TOUCH_SLOP_DP: f32 = 8.0;

/// Minimum fling velocity in dp per second
pub const MIN_FLING_VELOCITY_DP: f32 = 50.0;

/// Maximum fling velocity in dp per second
pub const MAX_FLING_VELOCITY_DP: f32 = 8000.0;

/// Physical display characteristics supplied by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Display width in pixels
    pub width_pixels: u32,
    /// Display height in pixels
    pub height_pixels: u32,
    /// Scale from dp to pixels (1.0 = 160 dpi)
    pub density: f32,
}

impl DisplayMetrics {
    pub const fn new(width_pixels: u32, height_pixels: u32, density: f32) -> Self {
        Self {
            width_pixels,
            height_pixels,
            density,
        }
    }

    /// Convert density-independent pixels to pixels
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1080, 1920, 2.625)
    }
}

/// Gesture constants scaled for one display
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfiguration {
    touch_slop: f32,
    min_fling_velocity: f32,
    max_fling_velocity: f32,
}

impl ViewConfiguration {
    pub fn from_metrics(metrics: &DisplayMetrics) -> Self {
        Self {
            touch_slop: metrics.dp_to_px(TOUCH_SLOP_DP),
            min_fling_velocity: metrics.dp_to_px(MIN_FLING_VELOCITY_DP),
            max_fling_velocity: metrics.dp_to_px(MAX_FLING_VELOCITY_DP),
        }
    }

    /// Distance in pixels a pointer may wander before a drag starts
    pub fn scaled_touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// Minimum velocity in pixels per second to count as a fling
    pub fn scaled_min_fling_velocity(&self) -> f32 {
        self.min_fling_velocity
    }

    /// Maximum velocity in pixels per second reported for a fling
    pub fn scaled_max_fling_velocity(&self) -> f32 {
        self.max_fling_velocity
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::from_metrics(&DisplayMetrics::default())
    }
}
