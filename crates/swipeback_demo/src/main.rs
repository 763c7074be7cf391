//! Swipeback Demo - replay an edge swipe against a simulated screen
//!
//! Builds a screen with a swipe-back page, feeds it a scripted pointer
//! gesture the way a host UI would (intercept first, then direct touch
//! handling), and drives frames until the content settles. Progress,
//! listener callbacks, and the drawn overlay are logged.

mod config;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use swipeback_animation::FrameScheduler;
use swipeback_core::{DisplayMetrics, DragState, EdgeFlags, MotionAction, MotionEvent};
use swipeback_paint::PaintContext;
use swipeback_widgets::{
    ContentPane, HostScreen, RedrawRequester, SwipeBackHelper, SwipeBackLayout, SwipeListener,
};

use crate::config::{parse_color, parse_easing, DemoConfig};

/// Frame budget for the settle animation
const MAX_FRAMES: usize = 600;

const SCREEN_ID: u64 = 1;

/// Replay an edge swipe against a simulated screen
#[derive(Parser, Debug)]
#[command(name = "swipeback-demo")]
#[command(about = "Replay an edge swipe against a simulated screen")]
#[command(version)]
struct Cli {
    /// Configuration file, or a directory holding swipeback.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pointer x where the finger lifts
    #[arg(long)]
    drag_to: Option<f32>,

    /// Hold still before lifting, so the release carries no velocity
    #[arg(long)]
    hold: bool,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct DemoScreen {
    finishing: Cell<bool>,
}

impl HostScreen for DemoScreen {
    fn is_finishing(&self) -> bool {
        self.finishing.get()
    }

    fn finish(&self) {
        tracing::info!("screen finished");
        self.finishing.set(true);
    }
}

struct DemoPane {
    width: i32,
    height: i32,
}

impl ContentPane for DemoPane {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn layout(&self, left: i32, top: i32, right: i32, bottom: i32) {
        tracing::trace!(left, top, right, bottom, "content laid out");
    }
}

/// Logs every container callback
struct LogListener;

impl SwipeListener for LogListener {
    fn on_scroll_state_change(&self, state: DragState, scroll_percent: f32) {
        tracing::info!(?state, scroll_percent, "scroll state changed");
    }

    fn on_edge_touch(&self, edge: EdgeFlags) {
        tracing::info!(edge = edge.bits(), "edge touched");
    }

    fn on_scroll_over_threshold(&self) {
        tracing::info!("scroll over threshold");
    }

    fn on_scroll(&self, scroll_percent: f32, offset_px: i32) {
        tracing::debug!(scroll_percent, offset_px, "scroll");
    }

    fn on_scroll_to_close(&self) {
        tracing::info!("scroll to close");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(x) = cli.drag_to {
        config.gesture.end_x = x;
    }
    config.gesture.hold |= cli.hold;

    run(&config)
}

fn run(config: &DemoConfig) -> Result<()> {
    let metrics = DisplayMetrics::new(
        config.screen.width,
        config.screen.height,
        config.screen.density,
    );
    tracing::info!(
        width = metrics.width_pixels,
        height = metrics.height_pixels,
        density = metrics.density,
        "starting swipe-back demo"
    );

    let screen = Rc::new(DemoScreen {
        finishing: Cell::new(false),
    });
    let host: Rc<dyn HostScreen> = screen.clone();
    let content: Rc<dyn ContentPane> = Rc::new(DemoPane {
        width: metrics.width_pixels as i32,
        height: metrics.height_pixels as i32,
    });
    let scheduler = Rc::new(FrameScheduler::new(0));
    let redraw: Rc<dyn RedrawRequester> = scheduler.clone();

    let mut helper = SwipeBackHelper::new(metrics);
    {
        let page = helper.on_create(SCREEN_ID);
        if let Some(size) = config.swipe.edge_size {
            page.set_swipe_edge(size);
        }
        if let Some(percent) = config.swipe.edge_percent {
            page.set_swipe_edge_percent(percent)?;
        }
        if let Some(percent) = config.swipe.close_percent {
            page.set_close_percent(percent)?;
        }
        if let Some(sensitivity) = config.swipe.sensitivity {
            page.set_swipe_sensitivity(sensitivity)?;
        }
        if let Some(color) = &config.swipe.scrim_color {
            page.set_scrim_color(parse_color(color)?);
        }
    }

    let Some(page) = helper.on_post_create(SCREEN_ID, &host, content, redraw)? else {
        anyhow::bail!("screen {SCREEN_ID} has no swipe-back page");
    };
    let Some(layout) = page.layout_mut() else {
        anyhow::bail!("swipe-back page was not attached");
    };
    if let Some(name) = &config.swipe.settle_easing {
        layout.set_settle_easing(parse_easing(name)?);
    }
    layout.add_swipe_listener(Rc::new(LogListener));

    let end_time = replay_gesture(layout, &scheduler, config);
    tracing::info!(
        offset = layout.content_offset().0,
        percent = layout.scroll_percent(),
        state = ?layout.drag_state(),
        "finger lifted"
    );

    scheduler.advance_to(end_time);
    let frames = scheduler.run_until_idle(MAX_FRAMES, |now| {
        layout.compute_scroll(now);
        let mut ctx = PaintContext::new();
        layout.draw_overlay(&mut ctx);
        tracing::trace!(now, commands = ctx.commands().len(), "frame drawn");
    });

    tracing::info!(
        frames,
        offset = layout.content_offset().0,
        percent = layout.scroll_percent(),
        finished = screen.is_finishing(),
        "settled"
    );
    Ok(())
}

/// Deliver an event the way a host view tree would
///
/// The simulated content consumes nothing, so after the down has been
/// offered for interception every event goes to the container directly.
fn dispatch(layout: &mut SwipeBackLayout, scheduler: &FrameScheduler, event: MotionEvent) {
    scheduler.advance_to(event.event_time());
    if event.action() == MotionAction::Down && layout.on_intercept_touch_event(&event) {
        tracing::debug!("container intercepted the down");
    }
    layout.on_touch_event(&event);
}

/// Send the scripted gesture through the container; returns the lift time
fn replay_gesture(
    layout: &mut SwipeBackLayout,
    scheduler: &FrameScheduler,
    config: &DemoConfig,
) -> u64 {
    let gesture = &config.gesture;
    let y = config.screen.height as f32 / 2.0;
    let mut time = 0;

    dispatch(layout, scheduler, MotionEvent::down(0, gesture.start_x, y, time));

    let steps = gesture.steps.max(1);
    for step in 1..=steps {
        time += gesture.step_ms;
        let x = gesture.start_x + (gesture.end_x - gesture.start_x) * step as f32 / steps as f32;
        dispatch(layout, scheduler, MotionEvent::move_to(0, x, y, time));
    }

    if gesture.hold {
        time += 200;
        dispatch(layout, scheduler, MotionEvent::move_to(0, gesture.end_x, y, time));
        time += 100;
    } else {
        time += gesture.step_ms / 2;
    }
    dispatch(layout, scheduler, MotionEvent::up(0, gesture.end_x, y, time));
    time
}
