#![forbid(unsafe_code)]

//! Value-space animation primitives.
//!
//! Every animation here moves a single `f64` from a start value toward a
//! target and is advanced by explicit [`Duration`] steps. Nothing reads a
//! wall clock, so a run is fully determined by the sequence of `dt` values
//! fed to [`Animation::tick`]; tests drive animations with fixed frames.
//!
//! - [`Timing`]: fixed-duration tween through an [`Easing`] curve, with an
//!   optional start delay.
//! - [`Spring`]: damped harmonic oscillator; settles instead of ending at a
//!   fixed time.
//! - [`Animator`]: the capability that turns an [`AnimationSpec`] into a
//!   boxed [`Animation`]. Hosts or tests can substitute their own driver.

use std::fmt;
use std::time::Duration;

pub mod easing;
pub mod spec;
pub mod spring;
pub mod timing;

pub use easing::{
    CubicBezier, Easing, EasingFn, ease, ease_in, ease_in_cubic, ease_in_out, ease_out,
    ease_out_cubic, in_out, linear,
};
pub use spec::{
    AnimationKind, AnimationOverrides, AnimationSpec, Animator, PhysicsAnimator, SpringParams,
    TimingParams,
};
pub use spring::Spring;
pub use timing::Timing;

/// A value moving toward a target over time.
///
/// # Invariants
///
/// 1. Once `is_complete()` is true, `value() == target()` and further ticks
///    do not change the value.
/// 2. `tick(Duration::ZERO)` never changes the value.
/// 3. `reset()` returns to the start value.
pub trait Animation: fmt::Debug {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached (and settled on) its target.
    fn is_complete(&self) -> bool;

    /// Current value.
    fn value(&self) -> f64;

    /// Value the animation is heading toward.
    fn target(&self) -> f64;

    /// Restart from the initial value.
    fn reset(&mut self);
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn tick(&mut self, dt: Duration) {
        (**self).tick(dt);
    }

    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }

    fn value(&self) -> f64 {
        (**self).value()
    }

    fn target(&self) -> f64 {
        (**self).target()
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
