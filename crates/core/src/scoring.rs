//! Scoring module - row-clear points and the difficulty ramp
//!
//! - Each lock adds `rows_cleared * 100` (a lock that clears nothing adds 0).
//! - Each time `score / 1000` reaches a band above the last one recorded, the base
//!   fall interval shrinks to 9/10 of itself, never below 100ms. Crossing several
//!   bands in one lock still applies a single reduction.

use std::time::Duration;

use crate::types::{
    BASE_FALL_INTERVAL, FALL_INTERVAL_FLOOR, POINTS_PER_ROW, SPEEDUP_DENOMINATOR,
    SPEEDUP_NUMERATOR, SPEEDUP_SCORE_STEP,
};

/// Points for clearing `rows` rows in one lock
pub fn line_clear_score(rows: usize) -> u32 {
    (rows as u32).saturating_mul(POINTS_PER_ROW)
}

/// Score band used by the difficulty ramp
pub fn score_band(score: u32) -> u32 {
    score / SPEEDUP_SCORE_STEP
}

/// Apply the 9/10 speed-up to an interval, clamped to the floor.
///
/// Integer nanosecond arithmetic keeps repeated reductions exact.
pub fn speed_up(interval: Duration) -> Duration {
    let nanos = interval.as_nanos() as u64 * SPEEDUP_NUMERATOR / SPEEDUP_DENOMINATOR;
    Duration::from_nanos(nanos).max(FALL_INTERVAL_FLOOR)
}

/// Base fall interval plus the last score band that triggered a speed-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyRamp {
    base_interval: Duration,
    last_band: u32,
}

impl DifficultyRamp {
    pub fn new() -> Self {
        Self::with_base(BASE_FALL_INTERVAL)
    }

    pub fn with_base(base_interval: Duration) -> Self {
        Self {
            base_interval,
            last_band: 0,
        }
    }

    /// Interval new pieces are spawned with
    pub fn base_interval(&self) -> Duration {
        self.base_interval
    }

    pub fn last_band(&self) -> u32 {
        self.last_band
    }

    /// Evaluate the ramp after a lock. Returns true when the interval shrank.
    pub fn on_lock(&mut self, score: u32) -> bool {
        let band = score_band(score);
        if band <= self.last_band {
            return false;
        }
        self.base_interval = speed_up(self.base_interval);
        self.last_band = band;
        true
    }
}

impl Default for DifficultyRamp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 200);
        assert_eq!(line_clear_score(4), 400);
    }

    #[test]
    fn test_speed_up_is_exact() {
        let once = speed_up(BASE_FALL_INTERVAL);
        assert_eq!(once, Duration::from_millis(450));
        let twice = speed_up(once);
        assert_eq!(twice, Duration::from_millis(405));
        assert_eq!(speed_up(twice), Duration::from_micros(364_500));
    }

    #[test]
    fn test_speed_up_clamps_to_floor() {
        assert_eq!(speed_up(Duration::from_millis(105)), FALL_INTERVAL_FLOOR);
        assert_eq!(speed_up(FALL_INTERVAL_FLOOR), FALL_INTERVAL_FLOOR);
    }

    #[test]
    fn test_ramp_triggers_once_per_band() {
        let mut ramp = DifficultyRamp::new();
        assert!(!ramp.on_lock(900));
        assert_eq!(ramp.base_interval(), BASE_FALL_INTERVAL);

        assert!(ramp.on_lock(1000));
        assert_eq!(ramp.base_interval(), Duration::from_millis(450));
        assert!(!ramp.on_lock(1500));
        assert!(!ramp.on_lock(1900));
        assert_eq!(ramp.base_interval(), Duration::from_millis(450));

        assert!(ramp.on_lock(2000));
        assert_eq!(ramp.base_interval(), Duration::from_millis(405));
        assert_eq!(ramp.last_band(), 2);
    }

    #[test]
    fn test_ramp_skipping_bands_applies_single_step() {
        let mut ramp = DifficultyRamp::new();
        assert!(ramp.on_lock(3100));
        assert_eq!(ramp.base_interval(), Duration::from_millis(450));
        assert_eq!(ramp.last_band(), 3);
        assert!(!ramp.on_lock(3900));
    }

    #[test]
    fn test_ramp_reaches_floor() {
        let mut ramp = DifficultyRamp::new();
        for band in 1..=40 {
            ramp.on_lock(band * 1000);
        }
        assert_eq!(ramp.base_interval(), FALL_INTERVAL_FLOOR);
    }
}
