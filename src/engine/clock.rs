//! Clocks used to timestamp input
//!
//! The combo engine only ever looks at differences between two readings, so
//! the epoch is arbitrary. `SystemClock` follows wall time from its creation;
//! `ManualClock` is advanced by the host (fixed-step games, replays, tests).

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic time source, in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Seconds elapsed since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start_time: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        Instant::now()
            .duration_since(self.start_time)
            .as_secs_f64()
    }
}

/// Host-driven clock
///
/// Clones share the same reading, so the host can keep one handle to advance
/// while the combo engine owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock reading `seconds`
    pub fn starting_at(seconds: f64) -> Self {
        let clock = Self::new();
        clock.set(seconds);
        clock
    }

    /// Move the clock forward. Negative steps are ignored.
    pub fn advance(&self, seconds: f64) {
        if seconds > 0.0 {
            self.now.set(self.now.get() + seconds);
        }
    }

    /// Jump to an absolute reading. Moving backwards is ignored.
    pub fn set(&self, seconds: f64) {
        if seconds > self.now.get() {
            self.now.set(seconds);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let first = clock.now();
        thread::sleep(Duration::from_millis(10));
        let second = clock.now();
        assert!(second - first >= 0.010);
    }

    #[test]
    fn test_manual_clock_starts_at_zero() {
        assert_eq!(ManualClock::new().now(), 0.0);
    }

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new();
        clock.advance(0.3);
        clock.advance(0.3);
        assert_relative_eq!(clock.now(), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::starting_at(5.0);
        clock.advance(-1.0);
        clock.set(2.0);
        assert_relative_eq!(clock.now(), 5.0);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let reader = clock.clone();
        clock.advance(1.5);
        assert_relative_eq!(reader.now(), 1.5);
    }
}
