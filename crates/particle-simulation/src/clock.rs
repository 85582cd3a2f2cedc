//! Frame clocks supplying delta time to the simulation loop

use std::time::{Duration, Instant};

use crate::params::MAX_DELTA_TIME;

/// Source of per-frame delta time
pub trait Clock {
    /// Seconds elapsed since the previous call. Never negative.
    fn next_delta_time(&mut self) -> f64;
}

/// Wall-clock timer that paces the loop to a target frame rate.
///
/// `next_delta_time` sleeps until one frame interval has passed since the
/// previous tick, then reports the real elapsed time, capped at
/// `MAX_DELTA_TIME`.
pub struct FrameClock {
    frame_interval: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// A `target_fps` of zero disables pacing
    pub fn new(target_fps: u32) -> Self {
        let frame_interval = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        };

        Self {
            frame_interval,
            last_tick: Instant::now(),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

impl Clock for FrameClock {
    fn next_delta_time(&mut self) -> f64 {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.frame_interval {
            std::thread::sleep(self.frame_interval - elapsed);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;

        if dt > MAX_DELTA_TIME {
            log::warn!("Frame took {:.3}s, clamping to {:.3}s", dt, MAX_DELTA_TIME);
        }
        dt.min(MAX_DELTA_TIME)
    }
}

/// Deterministic clock returning the same delta every frame
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    dt: f64,
}

impl FixedClock {
    pub fn new(dt: f64) -> Self {
        Self { dt: dt.max(0.0) }
    }
}

impl Clock for FixedClock {
    fn next_delta_time(&mut self) -> f64 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::new(0.5);
        assert_eq!(clock.next_delta_time(), 0.5);
        assert_eq!(clock.next_delta_time(), 0.5);
    }

    #[test]
    fn test_fixed_clock_rejects_negative() {
        let mut clock = FixedClock::new(-1.0);
        assert_eq!(clock.next_delta_time(), 0.0);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(FrameClock::new(0).frame_interval(), Duration::ZERO);
        assert_eq!(
            FrameClock::new(100).frame_interval(),
            Duration::from_secs_f64(0.01)
        );
    }

    #[test]
    fn test_frame_clock_paces_to_target() {
        let mut clock = FrameClock::new(200);
        for _ in 0..3 {
            let dt = clock.next_delta_time();
            assert!(dt >= 0.005, "expected at least one frame interval, got {dt}");
            assert!(dt <= MAX_DELTA_TIME);
        }
    }

    #[test]
    fn test_frame_clock_clamps_stalled_frame() {
        let mut clock = FrameClock::new(100);
        std::thread::sleep(Duration::from_secs_f64(MAX_DELTA_TIME + 0.05));
        assert_eq!(clock.next_delta_time(), MAX_DELTA_TIME);
    }

    #[test]
    fn test_unpaced_clock_is_non_negative() {
        let mut clock = FrameClock::new(0);
        for _ in 0..10 {
            assert!(clock.next_delta_time() >= 0.0);
        }
    }
}
