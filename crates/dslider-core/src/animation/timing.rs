#![forbid(unsafe_code)]

//! Fixed-duration tween.
//!
//! A [`Timing`] holds its start value for `delay`, then moves to the target
//! over `duration`, shaping progress with an [`Easing`] curve. The value is a
//! pure function of total elapsed time.
//!
//! # Failure Modes
//!
//! - Zero duration: the value jumps to the target as soon as the delay has
//!   elapsed.

use std::time::Duration;

use super::{Animation, Easing};

/// Tween from `from` to `to`.
#[derive(Debug, Clone)]
pub struct Timing {
    from: f64,
    to: f64,
    duration: Duration,
    delay: Duration,
    easing: Easing,
    elapsed: Duration,
}

impl Timing {
    /// Tween over `duration` using [`Easing::InOutEase`] and no delay.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing: Easing::default(),
            elapsed: Duration::ZERO,
        }
    }

    /// Set the start delay (builder pattern).
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[inline]
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Total time from start to completion.
    #[inline]
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }

    /// Linear progress in `[0, 1]`, before easing.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.elapsed < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let active = self.elapsed - self.delay;
        (active.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

impl Animation for Timing {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.total());
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.total()
    }

    fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    fn target(&self) -> f64 {
        self.to
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
