#![forbid(unsafe_code)]

//! Animation selection and parameter resolution.
//!
//! A transition is described by an [`AnimationKind`] plus optional
//! [`AnimationOverrides`]. [`AnimationSpec::resolve`] merges the overrides
//! over the kind's defaults, and an [`Animator`] turns the resolved spec into
//! a running [`Animation`].
//!
//! Defaults:
//!
//! | kind   | parameters                                       |
//! |--------|--------------------------------------------------|
//! | spring | tension 100, friction 7                          |
//! | timing | 150ms, [`Easing::InOutEase`], no delay           |
//!
//! Overrides for the other kind are ignored.

use std::time::Duration;

use super::spring::{damping_from_friction, stiffness_from_tension};
use super::{Animation, Easing, Spring, Timing};

pub const DEFAULT_TENSION: f64 = 100.0;
pub const DEFAULT_FRICTION: f64 = 7.0;
pub const DEFAULT_DURATION: Duration = Duration::from_millis(150);

/// Which family of motion drives a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnimationKind {
    Spring,
    #[default]
    Timing,
}

/// Caller-supplied parameter overrides, merged over the kind's defaults.
///
/// For springs, explicit `stiffness`/`damping` win over values converted
/// from `tension`/`friction`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationOverrides {
    pub tension: Option<f64>,
    pub friction: Option<f64>,
    pub stiffness: Option<f64>,
    pub damping: Option<f64>,
    #[cfg_attr(feature = "serde", serde(with = "opt_duration_ms"))]
    pub duration: Option<Duration>,
    #[cfg_attr(feature = "serde", serde(with = "opt_duration_ms"))]
    pub delay: Option<Duration>,
    pub easing: Option<Easing>,
}

impl AnimationOverrides {
    /// Name of the first non-finite or negative numeric field, if any.
    #[must_use]
    pub fn invalid_field(&self) -> Option<&'static str> {
        [
            ("tension", self.tension),
            ("friction", self.friction),
            ("stiffness", self.stiffness),
            ("damping", self.damping),
        ]
        .into_iter()
        .find_map(|(name, v)| match v {
            Some(v) if !v.is_finite() || v < 0.0 => Some(name),
            _ => None,
        })
    }
}

/// Resolved spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringParams {
    #[must_use]
    pub fn from_origami(tension: f64, friction: f64) -> Self {
        Self {
            stiffness: stiffness_from_tension(tension),
            damping: damping_from_friction(friction),
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::from_origami(DEFAULT_TENSION, DEFAULT_FRICTION)
    }
}

/// Resolved tween parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingParams {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::InOutEase,
            delay: Duration::ZERO,
        }
    }
}

/// Fully-resolved description of one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationSpec {
    Spring(SpringParams),
    Timing(TimingParams),
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::Timing(TimingParams::default())
    }
}

impl AnimationSpec {
    /// Merge `overrides` over the defaults for `kind`.
    #[must_use]
    pub fn resolve(kind: AnimationKind, overrides: &AnimationOverrides) -> Self {
        match kind {
            AnimationKind::Spring => {
                let base = SpringParams::from_origami(
                    overrides.tension.unwrap_or(DEFAULT_TENSION),
                    overrides.friction.unwrap_or(DEFAULT_FRICTION),
                );
                Self::Spring(SpringParams {
                    stiffness: overrides.stiffness.unwrap_or(base.stiffness),
                    damping: overrides.damping.unwrap_or(base.damping),
                })
            }
            AnimationKind::Timing => {
                let base = TimingParams::default();
                Self::Timing(TimingParams {
                    duration: overrides.duration.unwrap_or(base.duration),
                    easing: overrides.easing.unwrap_or(base.easing),
                    delay: overrides.delay.unwrap_or(base.delay),
                })
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        match self {
            Self::Spring(_) => AnimationKind::Spring,
            Self::Timing(_) => AnimationKind::Timing,
        }
    }
}

/// Capability that starts a value animation.
///
/// The slider never interpolates on its own; it asks an `Animator` for an
/// [`Animation`] and samples it on each frame. Replace the default
/// [`PhysicsAnimator`] to plug in a different motion backend.
pub trait Animator {
    fn animate(&self, from: f64, to: f64, spec: &AnimationSpec) -> Box<dyn Animation>;
}

/// Default [`Animator`] backed by [`Spring`] and [`Timing`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicsAnimator;

impl Animator for PhysicsAnimator {
    fn animate(&self, from: f64, to: f64, spec: &AnimationSpec) -> Box<dyn Animation> {
        match *spec {
            AnimationSpec::Spring(p) => Box::new(
                Spring::new(from, to)
                    .with_stiffness(p.stiffness)
                    .with_damping(p.damping),
            ),
            AnimationSpec::Timing(p) => Box::new(
                Timing::new(from, to, p.duration)
                    .with_delay(p.delay)
                    .with_easing(p.easing),
            ),
        }
    }
}

/// Optional durations as whole milliseconds. Sub-millisecond parts are
/// dropped on the way out; durations past `u64::MAX` ms saturate.
#[cfg(feature = "serde")]
mod opt_duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}
