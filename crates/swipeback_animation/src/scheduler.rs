//! Frame scheduler
//!
//! A single-threaded display-refresh source. Widgets request a frame when
//! they have motion pending; the host loop asks for the next frame time and
//! drives every requester on it. Time is virtual: the host advances it from
//! the platform's vsync timestamps, or tests advance it by hand.

use std::cell::Cell;

/// Default refresh interval (60 fps)
const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Cooperative frame source shared by widgets on the UI thread
#[derive(Debug)]
pub struct FrameScheduler {
    /// Current frame time in milliseconds
    frame_time: Cell<u64>,
    /// Time between frames in milliseconds
    interval: Cell<u64>,
    /// Whether someone asked for another frame
    redraw_requested: Cell<bool>,
    /// Frames produced so far
    frames: Cell<u64>,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FrameScheduler {
    /// Create a scheduler whose clock starts at `start_ms`
    pub fn new(start_ms: u64) -> Self {
        Self {
            frame_time: Cell::new(start_ms),
            interval: Cell::new(DEFAULT_FRAME_INTERVAL_MS),
            redraw_requested: Cell::new(false),
            frames: Cell::new(0),
        }
    }

    /// Set the target frame rate
    pub fn set_target_fps(&self, fps: u32) {
        let interval = 1000 / u64::from(fps.max(1));
        self.interval.set(interval.max(1));
    }

    pub fn frame_interval(&self) -> u64 {
        self.interval.get()
    }

    /// Current frame time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.frame_time.get()
    }

    /// Ask for another frame
    pub fn request_frame(&self) {
        self.redraw_requested.set(true);
    }

    pub fn has_pending_frame(&self) -> bool {
        self.redraw_requested.get()
    }

    /// Consume a pending request and advance the clock by one interval
    ///
    /// Returns the new frame time, or `None` when nothing asked for a frame.
    pub fn next_frame(&self) -> Option<u64> {
        if !self.redraw_requested.replace(false) {
            return None;
        }
        let time = self.frame_time.get() + self.interval.get();
        self.frame_time.set(time);
        self.frames.set(self.frames.get() + 1);
        Some(time)
    }

    /// Move the clock forward to `time_ms` without producing a frame
    pub fn advance_to(&self, time_ms: u64) {
        if time_ms > self.frame_time.get() {
            self.frame_time.set(time_ms);
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frames.get()
    }

    /// Drive frames until no one requests another, or `max_frames` is reached
    ///
    /// Returns the number of frames produced.
    pub fn run_until_idle(&self, max_frames: usize, mut on_frame: impl FnMut(u64)) -> usize {
        let mut produced = 0;
        while produced < max_frames {
            let Some(time) = self.next_frame() else {
                break;
            };
            on_frame(time);
            produced += 1;
        }
        if produced == max_frames && self.has_pending_frame() {
            tracing::debug!(max_frames, "frame loop stopped with a frame still pending");
        }
        produced
    }
}
