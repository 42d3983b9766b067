#![forbid(unsafe_code)]

//! Value/animation store.
//!
//! Two independent cells hold the left and right thumb values. The
//! highlight segment is a projection `(min, max)` of those cells, recomputed
//! after every write and every animation frame, so the segment can never lag
//! behind a thumb. A transition moves a cell and, through the projection, its
//! highlight bound with one [`Animation`]: both observe the same target,
//! parameters, and clock.
//!
//! # Invariants
//!
//! 1. `highlight().low <= highlight().high` at all times, whatever the order
//!    of the two cells.
//! 2. Every write to a cell cancels that cell's transition (last write wins).
//! 3. `version()` increases whenever a cell's value actually changes.
//!
//! # Failure Modes
//!
//! - A transition is anchored at the first frame timestamp it sees. Frames
//!   with a timestamp earlier than the previous frame advance by zero.

use std::fmt;
use std::time::Duration;

use dslider_core::ValueRange;
use dslider_core::animation::{Animation, AnimationSpec, Animator, PhysicsAnimator};
use web_time::Instant;

use crate::router::ThumbId;

/// Lower and upper bound of the highlighted segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlight {
    pub low: f64,
    pub high: f64,
}

impl Highlight {
    #[must_use]
    pub fn of(left: f64, right: f64) -> Self {
        Self {
            low: left.min(right),
            high: left.max(right),
        }
    }
}

struct Transition {
    animation: Box<dyn Animation>,
    last_frame: Option<Instant>,
}

impl Transition {
    fn advance_to(&mut self, now: Instant) {
        let dt = match self.last_frame {
            Some(prev) => now.checked_duration_since(prev).unwrap_or(Duration::ZERO),
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        self.animation.tick(dt);
    }
}

struct Cell {
    value: f64,
    transition: Option<Transition>,
}

pub struct ValueStore {
    cells: [Cell; 2],
    highlight: Highlight,
    animator: Box<dyn Animator>,
    version: u64,
}

impl fmt::Debug for ValueStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueStore")
            .field("left", &self.cells[0].value)
            .field("right", &self.cells[1].value)
            .field("highlight", &self.highlight)
            .field("left_animating", &self.is_animating(ThumbId::Left))
            .field("right_animating", &self.is_animating(ThumbId::Right))
            .field("version", &self.version)
            .finish()
    }
}

impl ValueStore {
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            cells: [
                Cell {
                    value: left,
                    transition: None,
                },
                Cell {
                    value: right,
                    transition: None,
                },
            ],
            highlight: Highlight::of(left, right),
            animator: Box::new(PhysicsAnimator),
            version: 0,
        }
    }

    /// Replace the animation driver (builder pattern).
    #[must_use]
    pub fn with_animator(mut self, animator: Box<dyn Animator>) -> Self {
        self.animator = animator;
        self
    }

    #[inline]
    #[must_use]
    pub fn value(&self, thumb: ThumbId) -> f64 {
        self.cells[thumb.index()].value
    }

    /// Literal `(left, right)` pair; not ordered.
    #[inline]
    #[must_use]
    pub fn values(&self) -> (f64, f64) {
        (self.cells[0].value, self.cells[1].value)
    }

    #[inline]
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Bumped on every visible value change.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn is_animating(&self, thumb: ThumbId) -> bool {
        self.cells[thumb.index()].transition.is_some()
    }

    #[must_use]
    pub fn any_animating(&self) -> bool {
        self.cells.iter().any(|c| c.transition.is_some())
    }

    /// Target of the running transition on `thumb`, if any.
    #[must_use]
    pub fn transition_target(&self, thumb: ThumbId) -> Option<f64> {
        self.cells[thumb.index()]
            .transition
            .as_ref()
            .map(|t| t.animation.target())
    }

    /// Write `value` now, dropping any transition on the cell.
    pub fn set_immediate(&mut self, thumb: ThumbId, value: f64) {
        let cell = &mut self.cells[thumb.index()];
        cell.transition = None;
        self.write(thumb, value);
    }

    /// Start a transition of `thumb` toward `target`.
    ///
    /// Replaces any running transition on that cell, starting from the
    /// cell's current (possibly mid-flight) value. A target equal to the
    /// current value settles the cell immediately.
    pub fn animate_to(&mut self, thumb: ThumbId, target: f64, spec: &AnimationSpec) {
        let from = self.value(thumb);
        if from == target {
            self.set_immediate(thumb, target);
            return;
        }
        let animation = self.animator.animate(from, target, spec);
        self.cells[thumb.index()].transition = Some(Transition {
            animation,
            last_frame: None,
        });
    }

    /// Advance every running transition to frame time `now`.
    ///
    /// Returns `true` if any value changed.
    pub fn advance_to(&mut self, now: Instant) -> bool {
        let before = self.version;
        for thumb in ThumbId::ORDER {
            let cell = &mut self.cells[thumb.index()];
            let Some(transition) = cell.transition.as_mut() else {
                continue;
            };
            transition.advance_to(now);
            let value = transition.animation.value();
            if transition.animation.is_complete() {
                cell.transition = None;
            }
            self.write(thumb, value);
        }
        self.version != before
    }

    /// Bring both cells inside `range` after a range change.
    ///
    /// A cell whose value or transition target falls outside the range is
    /// settled at the clamped endpoint (its clamped target when a transition
    /// was running) and its transition is dropped.
    pub fn clamp_into(&mut self, range: &ValueRange) {
        let inside = |v: f64| v >= range.minimum() && v <= range.maximum();
        for thumb in ThumbId::ORDER {
            let cell = &self.cells[thumb.index()];
            let target = cell.transition.as_ref().map(|t| t.animation.target());
            if inside(cell.value) && target.is_none_or(inside) {
                continue;
            }
            let settle = range.clamp(target.unwrap_or(cell.value));
            self.set_immediate(thumb, settle);
        }
    }

    fn write(&mut self, thumb: ThumbId, value: f64) {
        let cell = &mut self.cells[thumb.index()];
        if cell.value != value {
            cell.value = value;
            self.version = self.version.wrapping_add(1);
        }
        self.highlight = Highlight::of(self.cells[0].value, self.cells[1].value);
    }
}
