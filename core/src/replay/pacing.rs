//! Timeline pacing
//!
//! Compresses the recorded gap between two events into a short, bounded wait.

use std::time::Duration;

/// Milliseconds of playback per recorded second
pub const DEFAULT_SCALE_FACTOR: f64 = 100.0;

/// Longest single wait, in milliseconds
pub const DEFAULT_MAX_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    pub scale_factor: f64,
    pub max_delay_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}

impl Pacing {
    pub fn new(scale_factor: f64, max_delay_ms: u64) -> Self {
        Self {
            scale_factor,
            max_delay_ms,
        }
    }

    /// Pacing that never waits
    pub fn instant() -> Self {
        Self::new(0.0, 0)
    }

    /// Wait before showing an event at `current_t` after one at `previous_t`
    ///
    /// Always within `[0, max_delay_ms]`; backwards gaps and NaN yield zero,
    /// an unbounded gap yields the cap.
    pub fn delay(&self, previous_t: f64, current_t: f64) -> Duration {
        let ms = (current_t - previous_t) * self.scale_factor;
        if ms.is_nan() || ms <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_millis(ms.min(self.max_delay_ms as f64) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_delay() {
        let pacing = Pacing::default();
        assert_eq!(pacing.delay(0.0, 0.0), Duration::ZERO);
        assert_eq!(pacing.delay(0.0, 5.0), Duration::from_millis(500));
        assert_eq!(pacing.delay(10.0, 12.5), Duration::from_millis(250));
    }

    #[test]
    fn test_delay_is_capped() {
        let pacing = Pacing::default();
        assert_eq!(pacing.delay(0.0, 20.0), Duration::from_millis(2000));
        assert_eq!(pacing.delay(0.0, 3600.0), Duration::from_millis(2000));
    }

    #[test]
    fn test_backwards_gap_never_waits() {
        let pacing = Pacing::default();
        assert_eq!(pacing.delay(5.0, -3.0), Duration::ZERO);
        assert_eq!(pacing.delay(100.0, 99.0), Duration::ZERO);
    }

    #[test]
    fn test_delay_bounds_over_range() {
        let pacing = Pacing::default();
        for t0 in 0..50 {
            for gap in 0..50 {
                let t0 = t0 as f64 * 1.7;
                let d = pacing.delay(t0, t0 + gap as f64 * 0.9);
                assert!(d <= Duration::from_millis(2000));
            }
        }
    }

    #[test]
    fn test_non_finite_gap() {
        let pacing = Pacing::default();
        assert_eq!(pacing.delay(0.0, f64::NAN), Duration::ZERO);
        assert_eq!(pacing.delay(0.0, f64::INFINITY), Duration::from_millis(2000));
        assert_eq!(pacing.delay(0.0, f64::NEG_INFINITY), Duration::ZERO);
        assert_eq!(pacing.delay(f64::INFINITY, f64::INFINITY), Duration::ZERO);
    }

    #[test]
    fn test_instant_and_custom() {
        assert_eq!(Pacing::instant().delay(0.0, 60.0), Duration::ZERO);
        let fast = Pacing::new(10.0, 300);
        assert_eq!(fast.delay(0.0, 5.0), Duration::from_millis(50));
        assert_eq!(fast.delay(0.0, 50.0), Duration::from_millis(300));
    }
}
