// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Standup countdown.
//!
//! The countdown is a plain value: the one-second tick is delivered from
//! outside (see `util::ticker`), which keeps this type deterministic.

/// Default standup duration (15 minutes).
pub const DEFAULT_DURATION_SECS: u32 = 900;

/// Default increment for the +/- buttons (5 minutes).
pub const DEFAULT_STEP_SECS: u32 = 300;

/// A pausable, adjustable countdown that stops at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
    running: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl Countdown {
    pub fn new(initial_secs: u32) -> Self {
        Self {
            initial: initial_secs,
            remaining: initial_secs,
            running: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start counting down. Has no effect once the countdown reached zero.
    pub fn start(&mut self) {
        if self.remaining > 0 {
            self.running = true;
        }
    }

    /// Pause, keeping the remaining time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and restore the configured initial duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.initial;
    }

    /// Add (or remove, for negative `delta`) seconds, clamped at zero.
    pub fn adjust(&mut self, delta: i64) {
        let adjusted = (self.remaining as i64).saturating_add(delta);
        self.remaining = adjusted.clamp(0, u32::MAX as i64) as u32;
    }

    /// Advance by one second. Returns true on the tick that expires the
    /// countdown.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_decrements_only_while_running() {
        let mut countdown = Countdown::new(10);
        countdown.tick();
        assert_eq!(countdown.remaining(), 10);

        countdown.start();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining(), 8);
        assert!(countdown.is_running());
    }

    #[test]
    fn test_expiry_stops_at_zero() {
        let mut countdown = Countdown::new(2);
        countdown.start();
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_running());

        // Further ticks never go negative or restart the countdown
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_start_at_zero_stays_stopped() {
        let mut countdown = Countdown::new(0);
        countdown.start();
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_adjust_never_goes_negative() {
        let mut countdown = Countdown::new(120);
        countdown.adjust(-300);
        assert_eq!(countdown.remaining(), 0);

        countdown.adjust(300);
        assert_eq!(countdown.remaining(), 300);

        countdown.adjust(-300);
        for delta in [-1, -299, -1_000_000, i64::MIN] {
            countdown.adjust(delta);
            assert_eq!(countdown.remaining(), 0);
        }
    }

    #[test]
    fn test_adjust_keeps_running_state() {
        let mut countdown = Countdown::new(600);
        countdown.start();
        countdown.adjust(-300);
        assert!(countdown.is_running());

        countdown.stop();
        countdown.adjust(300);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_stop_keeps_remaining_and_reset_restores_initial() {
        let mut countdown = Countdown::new(900);
        countdown.start();
        countdown.tick();
        countdown.stop();
        assert_eq!(countdown.remaining(), 899);

        countdown.start();
        countdown.adjust(300);
        countdown.reset();
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining(), 900);
    }
}
