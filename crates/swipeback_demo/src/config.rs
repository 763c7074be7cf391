//! Demo configuration file handling

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use swipeback_animation::Easing;
use swipeback_core::error::{check_edge_percent, check_sensitivity, check_threshold};

/// Top-level demo configuration (swipeback.toml)
#[derive(Debug, Default, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub swipe: SwipeConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
}

/// Simulated display
#[derive(Debug, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_density")]
    pub density: f32,
}

fn default_width() -> u32 {
    1080
}

fn default_height() -> u32 {
    1920
}

fn default_density() -> f32 {
    2.75
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            density: default_density(),
        }
    }
}

/// Swipe-back settings, applied through the page facade
#[derive(Debug, Default, Deserialize)]
pub struct SwipeConfig {
    /// Edge zone in pixels
    #[serde(default)]
    pub edge_size: Option<i32>,
    /// Edge zone as a fraction of the display width; wins over `edge_size`
    #[serde(default)]
    pub edge_percent: Option<f32>,
    #[serde(default)]
    pub close_percent: Option<f32>,
    #[serde(default)]
    pub sensitivity: Option<f32>,
    /// "#AARRGGBB" or "#RRGGBB"
    #[serde(default)]
    pub scrim_color: Option<String>,
    /// Settle curve name, e.g. "ease_out_quint" or "viscous_fluid"
    #[serde(default)]
    pub settle_easing: Option<String>,
}

/// Scripted pointer motion
#[derive(Debug, Deserialize)]
pub struct GestureConfig {
    /// Pointer x where the finger goes down
    #[serde(default = "default_start_x")]
    pub start_x: f32,
    /// Pointer x where the finger lifts
    #[serde(default = "default_end_x")]
    pub end_x: f32,
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Milliseconds between move events
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
    /// Keep the finger still before lifting, so the release has no velocity
    #[serde(default)]
    pub hold: bool,
}

fn default_start_x() -> f32 {
    10.0
}

fn default_end_x() -> f32 {
    400.0
}

fn default_steps() -> u32 {
    12
}

fn default_step_ms() -> u64 {
    16
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            start_x: default_start_x(),
            end_x: default_end_x(),
            steps: default_steps(),
            step_ms: default_step_ms(),
            hold: false,
        }
    }
}

impl DemoConfig {
    /// Load configuration from a file, or a directory holding swipeback.toml
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("swipeback.toml")
        };

        if !config_path.exists() {
            anyhow::bail!("No swipeback.toml found in {}", path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        let swipe = &config.swipe;
        if let Some(percent) = swipe.close_percent {
            check_threshold(percent).context("Invalid swipe.close_percent")?;
        }
        if let Some(sensitivity) = swipe.sensitivity {
            check_sensitivity(sensitivity).context("Invalid swipe.sensitivity")?;
        }
        if let Some(percent) = swipe.edge_percent {
            check_edge_percent(percent).context("Invalid swipe.edge_percent")?;
        }
        if let Some(color) = &swipe.scrim_color {
            parse_color(color)?;
        }
        if let Some(name) = &swipe.settle_easing {
            parse_easing(name)?;
        }
        Ok(config)
    }
}

/// Parse "#AARRGGBB" or "#RRGGBB" into 0xAARRGGBB; six digits are opaque
pub fn parse_color(text: &str) -> Result<u32> {
    let digits = text.trim().trim_start_matches('#');
    let value = u32::from_str_radix(digits, 16)
        .with_context(|| format!("Invalid color {text:?}"))?;
    match digits.len() {
        8 => Ok(value),
        6 => Ok(0xFF00_0000 | value),
        _ => anyhow::bail!("Invalid color {text:?}, expected #AARRGGBB or #RRGGBB"),
    }
}

pub fn parse_easing(name: &str) -> Result<Easing> {
    Easing::from_name(name.trim())
        .with_context(|| format!("Unknown easing {name:?}"))
}
