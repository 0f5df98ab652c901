// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Automatic downward scrolling.

/// Auto-scroll mode: an on/off switch plus a speed in pixels per frame.
///
/// While enabled, the view follows the growing bottom of the history the
/// way a tail-anchored list follows new items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoScroll {
    enabled: bool,
    speed: u32,
}

impl AutoScroll {
    /// Slowest speed.
    pub const MIN_SPEED: u32 = 1;
    /// Fastest speed.
    pub const MAX_SPEED: u32 = 10;

    /// Creates a disabled auto-scroll with `speed` clamped to the valid range.
    #[must_use]
    pub fn new(speed: u32) -> Self {
        Self {
            enabled: false,
            speed: speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED),
        }
    }

    /// Returns `true` if the view scrolls every frame.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current speed in whole pixels per frame.
    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Flips between enabled and disabled and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Raises the speed by one, saturating at [`AutoScroll::MAX_SPEED`].
    pub fn faster(&mut self) -> u32 {
        self.speed = (self.speed + 1).min(Self::MAX_SPEED);
        self.speed
    }

    /// Lowers the speed by one, saturating at [`AutoScroll::MIN_SPEED`].
    pub fn slower(&mut self) -> u32 {
        self.speed = self.speed.saturating_sub(1).max(Self::MIN_SPEED);
        self.speed
    }
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::new(Self::MIN_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::AutoScroll;

    #[test]
    fn starts_disabled_and_toggles() {
        let mut auto = AutoScroll::default();
        assert!(!auto.is_enabled());
        assert!(auto.toggle());
        assert!(!auto.toggle());
    }

    #[test]
    fn speed_saturates_at_both_ends() {
        let mut auto = AutoScroll::new(9);
        assert_eq!(auto.faster(), 10);
        assert_eq!(auto.faster(), 10);

        let mut auto = AutoScroll::new(2);
        assert_eq!(auto.slower(), 1);
        assert_eq!(auto.slower(), 1);
    }

    #[test]
    fn new_clamps_speed() {
        assert_eq!(AutoScroll::new(0).speed(), 1);
        assert_eq!(AutoScroll::new(40).speed(), 10);
    }
}
