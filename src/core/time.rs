//! Frame clock with frame-rate limiting

use std::time::{Duration, Instant};

/// Measures time between ticks and paces the loop to a target frame rate.
#[derive(Debug)]
pub struct Clock {
    /// Minimum time per frame, `None` when unlimited
    frame_budget: Option<Duration>,
    /// When the previous tick returned
    last_tick: Instant,
    /// Duration of the previous tick
    delta: Duration,
    /// Seconds since the clock started
    elapsed: f64,
}

impl Clock {
    /// Create a clock targeting `target_fps` frames per second (0 for unlimited)
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: frame_budget(target_fps),
            last_tick: Instant::now(),
            delta: Duration::ZERO,
            elapsed: 0.0,
        }
    }

    /// Wait out the rest of the frame budget, then return seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let busy = self.last_tick.elapsed();
        if let Some(wait) = pacing_delay(busy, self.frame_budget) {
            std::thread::sleep(wait);
        }

        let now = Instant::now();
        self.delta = now - self.last_tick;
        self.last_tick = now;
        self.elapsed += self.delta.as_secs_f64();
        self.delta.as_secs_f32()
    }

    /// Restart timing from now, so the next tick measures from this call
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.delta = Duration::ZERO;
    }

    /// Duration of the previous tick
    #[must_use]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Seconds since the clock started
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Minimum frame duration for a target frame rate
#[must_use]
pub fn frame_budget(target_fps: u32) -> Option<Duration> {
    (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(target_fps)))
}

/// How long to sleep after a frame that took `busy`, if at all
#[must_use]
pub fn pacing_delay(busy: Duration, budget: Option<Duration>) -> Option<Duration> {
    budget
        .and_then(|budget| budget.checked_sub(busy))
        .filter(|wait| !wait.is_zero())
}
