//! Per-pointer velocity tracking
//!
//! Velocity is estimated with the impulse strategy: the pointer is treated as
//! a unit mass and the work done between consecutive samples is accumulated
//! into kinetic energy, which is converted back to a velocity.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use swipeback_core::{MotionAction, MotionEvent, PointerId};

/// Samples retained per pointer
const HISTORY_SIZE: usize = 20;

/// Only samples this close to the newest one contribute
const HORIZON_MS: u64 = 100;

/// A gap this long between samples means the pointer stopped
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: u64,
    x: f32,
    y: f32,
}

#[derive(Clone, Debug, Default)]
struct PointerHistory {
    /// Oldest first
    samples: SmallVec<[Sample; HISTORY_SIZE]>,
}

impl PointerHistory {
    fn push(&mut self, sample: Sample) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.remove(0);
        }
        self.samples.push(sample);
    }

    /// Samples inside the horizon, newest first, without stop gaps
    fn recent(&self) -> SmallVec<[Sample; HISTORY_SIZE]> {
        let mut out = SmallVec::new();
        let Some(newest) = self.samples.last() else {
            return out;
        };
        let mut previous_time = newest.time_ms;
        for sample in self.samples.iter().rev() {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous_time.saturating_sub(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            out.push(*sample);
            previous_time = sample.time_ms;
        }
        out
    }

    fn velocity(&self) -> (f32, f32) {
        let recent = self.recent();
        if recent.len() < 2 {
            return (0.0, 0.0);
        }
        let newest = recent[0].time_ms;
        let times: SmallVec<[f32; HISTORY_SIZE]> = recent
            .iter()
            .map(|s| -(newest.saturating_sub(s.time_ms) as f32))
            .collect();
        let xs: SmallVec<[f32; HISTORY_SIZE]> = recent.iter().map(|s| s.x).collect();
        let ys: SmallVec<[f32; HISTORY_SIZE]> = recent.iter().map(|s| s.y).collect();

        (
            impulse_velocity(&xs, &times) * 1000.0,
            impulse_velocity(&ys, &times) * 1000.0,
        )
    }
}

/// Velocity in units per millisecond from positions ordered newest first
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let count = positions.len();
    if count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let start = count - 1;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        let v_curr = (positions[i] - positions[i - 1]) / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

/// Tracks the recent motion of every pointer in a gesture
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    histories: FxHashMap<PointerId, PointerHistory>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pointer positions of an event
    ///
    /// A primary down starts a new gesture. Cancel carries no motion.
    pub fn add_movement(&mut self, event: &MotionEvent) {
        match event.action() {
            MotionAction::Cancel => return,
            MotionAction::Down => self.clear(),
            _ => {}
        }
        for pointer in event.pointers() {
            self.histories.entry(pointer.id).or_default().push(Sample {
                time_ms: event.event_time(),
                x: pointer.x,
                y: pointer.y,
            });
        }
    }

    /// Velocity of a pointer in pixels per second
    pub fn velocity(&self, pointer_id: PointerId) -> (f32, f32) {
        self.histories
            .get(&pointer_id)
            .map(PointerHistory::velocity)
            .unwrap_or((0.0, 0.0))
    }

    /// Velocity of a pointer with each axis capped to `max_velocity`
    pub fn compute_velocity(&self, pointer_id: PointerId, max_velocity: f32) -> (f32, f32) {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return (0.0, 0.0);
        }
        let cap = |v: f32| {
            if v.is_nan() {
                0.0
            } else {
                v.clamp(-max_velocity, max_velocity)
            }
        };
        let (vx, vy) = self.velocity(pointer_id);
        (cap(vx), cap(vy))
    }

    pub fn clear(&mut self) {
        self.histories.clear();
    }

    pub fn clear_pointer(&mut self, pointer_id: PointerId) {
        self.histories.remove(&pointer_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(tracker: &mut VelocityTracker, points: &[(u64, f32)]) {
        let (t0, x0) = points[0];
        tracker.add_movement(&MotionEvent::down(0, x0, 0.0, t0));
        for &(t, x) in &points[1..] {
            tracker.add_movement(&MotionEvent::move_to(0, x, 0.0, t));
        }
    }

    #[test]
    fn test_empty_tracker_returns_zero() {
        let tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(0), (0.0, 0.0));
    }

    #[test]
    fn test_single_point_returns_zero() {
        let mut tracker = VelocityTracker::new();
        drag(&mut tracker, &[(0, 100.0)]);
        assert_eq!(tracker.velocity(0), (0.0, 0.0));
    }

    #[test]
    fn test_constant_velocity() {
        let mut tracker = VelocityTracker::new();
        // 100 px per 10 ms
        drag(&mut tracker, &[(0, 0.0), (10, 100.0), (20, 200.0), (30, 300.0)]);

        let (vx, vy) = tracker.velocity(0);
        assert!((vx - 10_000.0).abs() < 1000.0, "expected ~10000, got {vx}");
        assert_eq!(vy, 0.0);
    }

    #[test]
    fn test_negative_velocity() {
        let mut tracker = VelocityTracker::new();
        drag(&mut tracker, &[(0, 300.0), (10, 200.0), (20, 100.0)]);
        assert!(tracker.velocity(0).0 < 0.0);
    }

    #[test]
    fn test_pause_before_release_reads_as_stopped() {
        let mut tracker = VelocityTracker::new();
        drag(&mut tracker, &[(0, 0.0), (10, 100.0), (20, 200.0)]);
        tracker.add_movement(&MotionEvent::up(0, 200.0, 0.0, 200));
        assert_eq!(tracker.velocity(0).0, 0.0);
    }

    #[test]
    fn test_compute_velocity_caps() {
        let mut tracker = VelocityTracker::new();
        drag(&mut tracker, &[(0, 0.0), (10, 100.0), (20, 200.0)]);
        let (vx, _) = tracker.compute_velocity(0, 2000.0);
        assert_eq!(vx, 2000.0);
        assert_eq!(tracker.compute_velocity(0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_down_starts_new_gesture() {
        let mut tracker = VelocityTracker::new();
        drag(&mut tracker, &[(0, 0.0), (10, 100.0)]);
        tracker.add_movement(&MotionEvent::down(0, 50.0, 0.0, 15));
        assert_eq!(tracker.velocity(0), (0.0, 0.0));
    }

    #[test]
    fn test_cancel_is_ignored_and_clear_pointer() {
        let mut tracker = VelocityTracker::new();
        drag(&mut tracker, &[(0, 0.0), (10, 100.0)]);
        tracker.add_movement(&MotionEvent::cancel(12));
        assert!(tracker.velocity(0).0 > 0.0);
        tracker.clear_pointer(0);
        assert_eq!(tracker.velocity(0), (0.0, 0.0));
    }
}
