//! Frame timing utilities

use std::time::{Duration, Instant};

const MILLIS_PER_SECOND: f32 = 1000.0;

/// Frame clock with an optional frames-per-second limiter
///
/// [`Clock::tick`] is called once per frame and returns the milliseconds
/// elapsed since the previous call. Frames are counted in windows that close
/// after `limit` ticks or one accumulated second, whichever comes first.
/// When `limit` ticks land before the second is up, the next tick sleeps out
/// the rest of it.
#[derive(Debug, Default)]
pub struct Clock {
    last_tick: Option<Instant>,
    window_frames: u32,
    window_ms: f32,
}

impl Clock {
    /// Create a clock; its first tick returns 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock and return milliseconds since the last tick
    ///
    /// A `limit` of 0 disables the limiter.
    pub fn tick(&mut self, limit: u32) -> f32 {
        if let Some(wait) = self.throttle_delay(limit) {
            log::trace!("Frame limit {limit} reached, sleeping {wait:?}");
            std::thread::sleep(wait);
        }
        self.tick_at(Instant::now(), limit)
    }

    /// How long the next tick has to wait to stay within `limit` frames per second
    pub fn throttle_delay(&self, limit: u32) -> Option<Duration> {
        if limit == 0 || self.window_frames < limit || self.window_ms >= MILLIS_PER_SECOND {
            return None;
        }
        Some(Duration::from_secs_f32(
            (MILLIS_PER_SECOND - self.window_ms) / MILLIS_PER_SECOND,
        ))
    }

    /// Frames counted in the current limiter window
    pub const fn window_frames(&self) -> u32 {
        self.window_frames
    }

    fn tick_at(&mut self, now: Instant, limit: u32) -> f32 {
        if self.window_frames >= limit || self.window_ms >= MILLIS_PER_SECOND {
            self.window_frames = 0;
            self.window_ms = 0.0;
        }

        let elapsed = self.last_tick.map_or(0.0, |last| {
            now.saturating_duration_since(last).as_secs_f32() * MILLIS_PER_SECOND
        });
        self.last_tick = Some(now);

        self.window_frames += 1;
        self.window_ms += elapsed;
        elapsed
    }
}
