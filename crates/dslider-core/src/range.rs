#![forbid(unsafe_code)]

//! Value mapping between a numeric range and a pixel track.
//!
//! [`ValueRange`] is the pure, stateless half of the slider: it converts a
//! value in `[minimum, maximum]` to a pixel offset in `[0, usable_length]`
//! and back, applying step quantization and right-to-left mirroring. Geometry
//! is always passed in explicitly; nothing here remembers a measurement.
//!
//! # Invariants
//!
//! 1. `minimum <= maximum` and `0 <= step <= maximum - minimum`, enforced by
//!    [`ValueRange::new`].
//! 2. [`ValueRange::from_offset`] always returns a value inside
//!    `[minimum, maximum]`.
//! 3. With `step > 0`, every result of `from_offset` is
//!    `minimum + k * step` for some integer `k` (or one of the bounds when
//!    the span is not a multiple of the step).
//!
//! # Failure Modes
//!
//! - Degenerate range (`maximum == minimum`): [`ratio`](ValueRange::ratio)
//!   returns `0.0` instead of dividing by zero.
//! - Non-positive usable length: the pixel ratio `offset / length` is taken
//!   as `0.0`.
//! - Step ties (`.5` quotients) use `f64::round`, i.e. half away from zero.
//!   Negative quotients only occur below `minimum`, where the final clamp
//!   yields `minimum` under either tie policy.

use thiserror::Error;

/// Rejected range configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("range field `{field}` must be finite (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("range minimum {minimum} exceeds maximum {maximum}")]
    Inverted { minimum: f64, maximum: f64 },
    #[error("step {step} must lie within [0, {span}]")]
    StepOutOfBounds { step: f64, span: f64 },
}

/// A validated numeric range with optional step quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    minimum: f64,
    maximum: f64,
    step: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::UNIT
    }
}

impl ValueRange {
    /// The unstepped `[0, 1]` range.
    pub const UNIT: Self = Self {
        minimum: 0.0,
        maximum: 1.0,
        step: 0.0,
    };

    /// Validate and build a range.
    pub fn new(minimum: f64, maximum: f64, step: f64) -> Result<Self, RangeError> {
        for (field, value) in [("minimum", minimum), ("maximum", maximum), ("step", step)] {
            if !value.is_finite() {
                return Err(RangeError::NonFinite { field, value });
            }
        }
        if minimum > maximum {
            return Err(RangeError::Inverted { minimum, maximum });
        }
        let span = maximum - minimum;
        if step < 0.0 || step > span {
            return Err(RangeError::StepOutOfBounds { step, span });
        }
        Ok(Self {
            minimum,
            maximum,
            step,
        })
    }

    #[inline]
    #[must_use]
    pub const fn minimum(&self) -> f64 {
        self.minimum
    }

    #[inline]
    #[must_use]
    pub const fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Step size; `0.0` means continuous.
    #[inline]
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// `maximum - minimum`.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Whether `maximum == minimum`.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Clamp `value` into `[minimum, maximum]`.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.minimum, self.maximum)
    }

    /// Normalized position of `value` in the range.
    ///
    /// Not clamped: values outside the range produce ratios outside `[0, 1]`.
    /// Returns `0.0` for a degenerate range.
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (value - self.minimum) / span
    }

    /// Snap to the nearest step multiple from `minimum`, then clamp.
    ///
    /// With `step == 0` this is a plain clamp.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        if self.step > 0.0 {
            let steps = ((value - self.minimum) / self.step).round();
            self.clamp(self.minimum + steps * self.step)
        } else {
            self.clamp(value)
        }
    }

    /// Pixel offset of `value` along a track of `usable_length` pixels.
    ///
    /// When `mirrored`, increasing values move toward the start of the track.
    #[must_use]
    pub fn to_offset(&self, value: f64, usable_length: f64, mirrored: bool) -> f64 {
        let mut r = self.ratio(value);
        if mirrored {
            r = 1.0 - r;
        }
        r * usable_length
    }

    /// Inverse of [`to_offset`](Self::to_offset): quantized, clamped value at
    /// pixel `offset`.
    #[must_use]
    pub fn from_offset(&self, offset: f64, usable_length: f64, mirrored: bool) -> f64 {
        let mut r = if usable_length > 0.0 {
            offset / usable_length
        } else {
            0.0
        };
        if mirrored {
            r = 1.0 - r;
        }
        self.snap(self.minimum + r * self.span())
    }
}

/// Draggable length of the track: container width minus one thumb width,
/// never negative.
#[inline]
#[must_use]
pub fn usable_length(container_width: f64, thumb_width: f64) -> f64 {
    let len = container_width - thumb_width;
    if len.is_finite() && len > 0.0 { len } else { 0.0 }
}
