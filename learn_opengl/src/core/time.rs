/// Implements timing for the application. Computes delta times between frames
/// and counts how many frames were rendered so far.
use std::time::{Duration, Instant};

pub struct Time {
    start_time: Instant,
    last_time: Instant,
    delta_time: Duration,
    frame_count: u64,
}

impl Time {
    pub fn new(current_instant: Instant) -> Self {
        Time {
            start_time: current_instant,
            last_time: current_instant,
            delta_time: Duration::ZERO,
            frame_count: 0,
        }
    }

    #[inline(always)]
    pub fn delta_seconds(&self) -> f32 {
        self.delta_time.as_secs_f32()
    }

    #[inline(always)]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Time elapsed between creation and the last step
    pub fn elapsed(&self) -> Duration {
        self.last_time.saturating_duration_since(self.start_time)
    }

    /// Start a new frame at `instant`. Instants older than the previous step
    /// produce a zero delta.
    pub fn step(&mut self, instant: Instant) {
        self.delta_time = instant.saturating_duration_since(self.last_time);
        self.last_time = instant.max(self.last_time);
        self.frame_count += 1;
    }
}
