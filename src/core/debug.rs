//! Frame statistics

use std::collections::VecDeque;
use std::time::Duration;

/// Rolling frame-time statistics
#[derive(Debug)]
pub struct FrameStats {
    /// Frame time history for averaging
    frame_times: VecDeque<Duration>,
    /// Maximum samples to keep
    max_samples: usize,
    /// Total frames recorded
    total_frames: u64,
    /// Time accumulated since the last report
    since_report: Duration,
}

impl FrameStats {
    /// Interval between periodic reports
    pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

    /// Create a new frame stats tracker
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(120),
            max_samples: 120,
            total_frames: 0,
            since_report: Duration::ZERO,
        }
    }

    /// Record a frame. Returns true when a report interval has elapsed.
    pub fn record_frame(&mut self, delta: Duration) -> bool {
        self.total_frames += 1;

        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(delta);

        self.since_report += delta;
        if self.since_report >= Self::REPORT_INTERVAL {
            self.since_report = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Frames per second over the sample window
    pub fn fps(&self) -> f32 {
        let total: Duration = self.frame_times.iter().sum();
        let total_secs = total.as_secs_f32();
        if total_secs > 0.0 {
            self.frame_times.len() as f32 / total_secs
        } else {
            0.0
        }
    }

    /// Average frame time in milliseconds
    pub fn avg_frame_time_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: Duration = self.frame_times.iter().sum();
        total.as_secs_f32() * 1000.0 / self.frame_times.len() as f32
    }

    /// Get total frames recorded
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Get a formatted stats string
    pub fn format_stats(&self) -> String {
        format!(
            "FPS: {:.1} | Frame: {:.2}ms | Frames: {}",
            self.fps(),
            self.avg_frame_time_ms(),
            self.total_frames
        )
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
