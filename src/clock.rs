//! Frame timing for the animation loop.
//!
//! One clock per engine: per-frame delta, elapsed time that excludes paused
//! spans, frame counting, and a periodically refreshed FPS estimate. The raw
//! delta is clamped so a stall (debugger, suspended laptop, occluded window)
//! cannot inject a huge physics step; an optional fixed delta bypasses the
//! clamp for deterministic stepping in tests and benches.

use std::time::{Duration, Instant};

/// Upper bound on the measured per-frame delta, in seconds.
pub const MAX_DELTA: f32 = 0.05;

/// How often the FPS estimate refreshes.
const FPS_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

/// Frame clock for the animation loop.
#[derive(Debug)]
pub struct FrameClock {
    /// When the clock was created.
    start: Instant,
    /// When the last tick occurred.
    last_tick: Instant,
    /// Total unpaused time in seconds (cached).
    elapsed_secs: f32,
    /// Delta of the most recent tick in seconds.
    delta_secs: f32,
    /// Total ticks since start.
    frame_count: u64,
    /// FPS estimate (refreshed periodically).
    fps: f32,
    /// Frame count at the last FPS refresh.
    fps_frame_count: u64,
    /// Time of the last FPS refresh.
    fps_update_time: Instant,
    /// Whether the clock is paused.
    paused: bool,
    /// Accumulated paused time, excluded from `elapsed_secs`.
    pause_elapsed: Duration,
    /// Fixed delta for deterministic stepping (optional).
    fixed_delta: Option<f32>,
}

impl FrameClock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            paused: false,
            pause_elapsed: Duration::ZERO,
            fixed_delta: None,
        }
    }

    /// Advance the clock by one frame and return the delta in seconds.
    ///
    /// While paused this returns 0.0 and advances nothing.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();

        if self.paused {
            self.delta_secs = 0.0;
            return 0.0;
        }

        let raw_delta = now.duration_since(self.last_tick).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or_else(|| raw_delta.min(MAX_DELTA));
        self.last_tick = now;

        let raw_elapsed = now.duration_since(self.start) - self.pause_elapsed;
        self.elapsed_secs = raw_elapsed.as_secs_f32();

        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= FPS_UPDATE_INTERVAL {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.delta_secs
    }

    /// Total unpaused time in seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    /// Delta of the most recent tick in seconds.
    #[inline]
    pub fn delta_secs(&self) -> f32 {
        self.delta_secs
    }

    /// Total ticks since start.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current FPS estimate.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop the clock; `tick` returns 0.0 until resumed.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
        }
    }

    /// Resume after a pause. The paused span is excluded from elapsed time
    /// and from the next delta.
    pub fn resume(&mut self) {
        if self.paused {
            let now = Instant::now();
            self.pause_elapsed += now.duration_since(self.last_tick);
            self.last_tick = now;
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Use a fixed delta instead of measured time.
    ///
    /// The fixed value is returned as-is, without the [`MAX_DELTA`] clamp.
    /// Pass `None` to go back to real frame timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Reset to the initial state, keeping any fixed delta.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
        self.elapsed_secs = 0.0;
        self.delta_secs = 0.0;
        self.frame_count = 0;
        self.fps = 0.0;
        self.fps_frame_count = 0;
        self.fps_update_time = now;
        self.paused = false;
        self.pause_elapsed = Duration::ZERO;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
