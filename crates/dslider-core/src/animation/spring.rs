#![forbid(unsafe_code)]

//! Damped harmonic oscillator (spring) animation in value space.
//!
//! Classical damped spring with unit mass:
//!
//!   a = -stiffness × (position - target) - damping × velocity
//!
//! # Parameters
//!
//! - **stiffness** (k): restoring force strength.
//! - **damping** (c): velocity drag. `c < 2√k` overshoots before settling,
//!   `c ≈ 2√k` is critically damped.
//! - **tension / friction**: the Origami-style pair many design tools use.
//!   [`Spring::from_origami`] converts them with
//!   `k = (tension - 30) × 3.62 + 194` and `c = (friction - 8) × 3 + 25`.
//!
//! # Integration
//!
//! Semi-implicit Euler, subdivided into steps of at most 4ms.
//!
//! # Invariants
//!
//! 1. A spring at rest does not move until [`Spring::set_target`] or
//!    [`Animation::reset`] is called.
//! 2. On coming to rest the position snaps exactly to the target.
//! 3. Stiffness is at least 0.1 and damping is non-negative.
//!
//! # Failure Modes
//!
//! - Zero damping: the spring oscillates forever and never completes.
//! - Friction low enough to make the converted damping negative is clamped
//!   to zero damping.

use std::time::Duration;

use super::Animation;

/// Maximum dt per integration step (4ms).
const MAX_STEP_SECS: f64 = 0.004;

const REST_THRESHOLD: f64 = 0.001;

const VELOCITY_THRESHOLD: f64 = 0.01;

const MIN_STIFFNESS: f64 = 0.1;

/// Convert Origami tension to stiffness.
#[inline]
#[must_use]
pub fn stiffness_from_tension(tension: f64) -> f64 {
    (tension - 30.0) * 3.62 + 194.0
}

/// Convert Origami friction to damping.
#[inline]
#[must_use]
pub fn damping_from_friction(friction: f64) -> f64 {
    (friction - 8.0) * 3.0 + 25.0
}

/// A damped spring moving a value from `initial` toward `target`.
///
/// ```
/// use std::time::Duration;
/// use dslider_core::animation::{Animation, Spring};
///
/// let mut spring = Spring::from_origami(0.0, 5.0, 100.0, 7.0);
/// for _ in 0..120 {
///     spring.tick(Duration::from_millis(16));
/// }
/// assert!(spring.is_complete());
/// assert_eq!(spring.value(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    stiffness: f64,
    damping: f64,
    at_rest: bool,
}

impl Spring {
    /// Spring with the default Origami parameters (tension 100, friction 7).
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        Self::from_origami(initial, target, 100.0, 7.0)
    }

    /// Spring parameterized by Origami tension and friction.
    #[must_use]
    pub fn from_origami(initial: f64, target: f64, tension: f64, friction: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target,
            initial,
            stiffness: MIN_STIFFNESS,
            damping: 0.0,
            at_rest: initial == target,
        }
        .with_stiffness(stiffness_from_tension(tension))
        .with_damping(damping_from_friction(friction))
    }

    /// Set stiffness (builder pattern). Clamped to minimum 0.1.
    #[must_use]
    pub fn with_stiffness(mut self, k: f64) -> Self {
        self.stiffness = if k.is_finite() { k.max(MIN_STIFFNESS) } else { MIN_STIFFNESS };
        self
    }

    /// Set damping (builder pattern). Clamped to minimum 0.0.
    #[must_use]
    pub fn with_damping(mut self, c: f64) -> Self {
        self.damping = if c.is_finite() { c.max(0.0) } else { 0.0 };
        self
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[inline]
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Change the target. Wakes the spring if it was at rest.
    pub fn set_target(&mut self, target: f64) {
        if (self.target - target).abs() > REST_THRESHOLD {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Damping at which the spring converges without overshoot.
    #[must_use]
    pub fn critical_damping(&self) -> f64 {
        2.0 * self.stiffness.sqrt()
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance by `dt`, subdividing for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let mut remaining = dt.as_secs_f64();
        if remaining <= 0.0 {
            return;
        }
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        let pos_delta = (self.position - self.target).abs();
        if pos_delta < REST_THRESHOLD && self.velocity.abs() < VELOCITY_THRESHOLD {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    fn value(&self) -> f64 {
        self.position
    }

    fn target(&self) -> f64 {
        self.target
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.at_rest = self.initial == self.target;
    }
}
