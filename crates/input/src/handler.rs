//! Held-key tracking for soft drop.
//!
//! Supports terminals that do not emit key release events by using a timeout
//! that auto-repeat presses keep refreshing.

use std::time::Duration;

use crate::types::Intent;

/// Release timeout used when the terminal cannot report releases.
///
/// Longer than a typical auto-repeat delay so a held key stays held.
pub const DEFAULT_RELEASE_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    held: bool,
    since_refresh: Duration,
    /// `None` when real release events arrive
    release_timeout: Option<Duration>,
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_release_timeout(Some(DEFAULT_RELEASE_TIMEOUT))
    }

    pub fn with_release_timeout(release_timeout: Option<Duration>) -> Self {
        Self {
            held: false,
            since_refresh: Duration::ZERO,
            release_timeout,
        }
    }

    pub fn release_timeout(&self) -> Option<Duration> {
        self.release_timeout
    }

    pub fn held(&self) -> bool {
        self.held
    }

    /// Key down (first press or auto-repeat).
    pub fn press(&mut self) -> Option<Intent> {
        self.since_refresh = Duration::ZERO;
        if self.held {
            None
        } else {
            self.held = true;
            Some(Intent::SoftDropStart)
        }
    }

    pub fn release(&mut self) -> Option<Intent> {
        self.since_refresh = Duration::ZERO;
        if self.held {
            self.held = false;
            Some(Intent::SoftDropStop)
        } else {
            None
        }
    }

    /// Advance the release timeout.
    pub fn update(&mut self, elapsed: Duration) -> Option<Intent> {
        let timeout = self.release_timeout?;
        if !self.held {
            return None;
        }
        self.since_refresh = self.since_refresh.saturating_add(elapsed);
        if self.since_refresh > timeout {
            self.release()
        } else {
            None
        }
    }

    /// Forget the held state without emitting anything (screen changed).
    pub fn reset(&mut self) {
        self.held = false;
        self.since_refresh = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_starts_once() {
        let mut latch = SoftDropLatch::new();
        assert_eq!(latch.press(), Some(Intent::SoftDropStart));
        assert_eq!(latch.press(), None);
        assert!(latch.held());
        assert_eq!(latch.release(), Some(Intent::SoftDropStop));
        assert_eq!(latch.release(), None);
    }

    #[test]
    fn test_timeout_releases() {
        let mut latch = SoftDropLatch::new();
        latch.press();
        assert_eq!(latch.update(Duration::from_millis(300)), None);
        assert_eq!(latch.update(Duration::from_millis(300)), Some(Intent::SoftDropStop));
        assert!(!latch.held());
    }

    #[test]
    fn test_repeat_refreshes_timeout() {
        let mut latch = SoftDropLatch::new();
        latch.press();
        for _ in 0..10 {
            assert_eq!(latch.update(Duration::from_millis(400)), None);
            assert_eq!(latch.press(), None);
        }
        assert!(latch.held());
    }

    #[test]
    fn test_no_timeout_with_release_events() {
        let mut latch = SoftDropLatch::with_release_timeout(None);
        latch.press();
        assert_eq!(latch.update(Duration::from_secs(10)), None);
        assert!(latch.held());
        assert_eq!(latch.release(), Some(Intent::SoftDropStop));
    }

    #[test]
    fn test_reset_is_silent() {
        let mut latch = SoftDropLatch::new();
        latch.press();
        latch.reset();
        assert!(!latch.held());
        assert_eq!(latch.update(Duration::from_secs(1)), None);
        assert_eq!(latch.press(), Some(Intent::SoftDropStart));
    }
}
