//! Scripted scroller
//!
//! Computes the position of a slide from a start offset to a target over a
//! fixed duration. Callers pass the frame time into every step, so the same
//! scroller runs under any frame source and is deterministic in tests.

use crate::easing::Easing;

/// A time-driven slide between two integer offsets
#[derive(Clone, Debug)]
pub struct Scroller {
    easing: Easing,
    start_x: i32,
    start_y: i32,
    final_x: i32,
    final_y: i32,
    curr_x: i32,
    curr_y: i32,
    start_time: u64,
    duration: u64,
    finished: bool,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}

impl Scroller {
    /// Create a finished scroller using the given curve
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            start_x: 0,
            start_y: 0,
            final_x: 0,
            final_y: 0,
            curr_x: 0,
            curr_y: 0,
            start_time: 0,
            duration: 0,
            finished: true,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn curr_x(&self) -> i32 {
        self.curr_x
    }

    pub fn curr_y(&self) -> i32 {
        self.curr_y
    }

    pub fn final_x(&self) -> i32 {
        self.final_x
    }

    pub fn final_y(&self) -> i32 {
        self.final_y
    }

    /// Duration of the current slide in milliseconds
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Start sliding from `(start_x, start_y)` by `(dx, dy)`
    pub fn start_scroll(
        &mut self,
        start_x: i32,
        start_y: i32,
        dx: i32,
        dy: i32,
        duration_ms: u64,
        now_ms: u64,
    ) {
        self.start_x = start_x;
        self.start_y = start_y;
        self.curr_x = start_x;
        self.curr_y = start_y;
        self.final_x = start_x + dx;
        self.final_y = start_y + dy;
        self.start_time = now_ms;
        self.duration = duration_ms;
        self.finished = false;

        tracing::trace!(
            start_x,
            dx,
            duration_ms,
            "scroller started"
        );
    }

    /// Advance to `now_ms`
    ///
    /// Returns true while the slide was in progress at the start of this call;
    /// the call that lands on the target still returns true, the next one false.
    pub fn compute_scroll_offset(&mut self, now_ms: u64) -> bool {
        if self.finished {
            return false;
        }

        let elapsed = now_ms.saturating_sub(self.start_time);
        if elapsed < self.duration {
            let progress = self.easing.apply(elapsed as f32 / self.duration as f32);
            self.curr_x = self.start_x + (progress * (self.final_x - self.start_x) as f32).round() as i32;
            self.curr_y = self.start_y + (progress * (self.final_y - self.start_y) as f32).round() as i32;
        } else {
            self.curr_x = self.final_x;
            self.curr_y = self.final_y;
            self.finished = true;
        }
        true
    }

    /// Stop the slide and jump to the target
    pub fn abort_animation(&mut self) {
        self.curr_x = self.final_x;
        self.curr_y = self.final_y;
        self.finished = true;
    }
}
