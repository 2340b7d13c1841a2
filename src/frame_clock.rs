//! Fixed-rate frame pacing for the game loop.

use std::time::{Duration, Instant};

/// Paces simulation ticks at a fixed frame rate and reports the real time
/// that passed since the previous tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(frame_ms: u32, now: Instant) -> Self {
        Self {
            frame: Duration::from_millis(frame_ms as u64),
            last_tick: now,
        }
    }

    /// How long input polling may block before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.frame
            .checked_sub(now.saturating_duration_since(self.last_tick))
            .unwrap_or(Duration::ZERO)
    }

    /// Milliseconds to feed the simulation when a frame is due, measured from
    /// the previous tick. A slow frame reports its full length.
    pub fn tick_due(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.frame {
            return None;
        }
        self.last_tick = now;
        Some(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn not_due_before_a_full_frame() {
        let start = Instant::now();
        let mut clock = FrameClock::new(16, start);
        assert_eq!(clock.tick_due(start + ms(15)), None);
        assert_eq!(clock.timeout(start + ms(10)), ms(6));
    }

    #[test]
    fn reports_measured_time_for_slow_frames() {
        let start = Instant::now();
        let mut clock = FrameClock::new(16, start);

        assert_eq!(clock.tick_due(start + ms(16)), Some(16));
        // A stalled frame hands the whole gap to the simulation.
        assert_eq!(clock.tick_due(start + ms(16 + 90)), Some(90));
        assert_eq!(clock.tick_due(start + ms(16 + 90 + 5)), None);
    }

    #[test]
    fn timeout_is_zero_once_overdue() {
        let start = Instant::now();
        let clock = FrameClock::new(16, start);
        assert_eq!(clock.timeout(start + ms(40)), Duration::ZERO);
    }
}
