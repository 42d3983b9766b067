#![forbid(unsafe_code)]

//! Slider configuration.
//!
//! [`SliderConfig`] is the full set of host inputs. It is validated as a
//! whole on construction and on every change; a rejected configuration never
//! partially applies.
//!
//! `min_value` and `max_value` are *uncontrolled* inputs: they seed the thumb
//! positions and later act as programmatic overrides only when they differ
//! from the previously supplied inputs. Between such changes the thumbs
//! drift freely under user drags.

use dslider_core::animation::{AnimationKind, AnimationOverrides, AnimationSpec};
use dslider_core::{RangeError, Size, ValueRange};
use thiserror::Error;

/// Rejected configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("`{field}` must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("thumb touch size must be finite and non-negative (got {width}x{height})")]
    InvalidTouchSize { width: f64, height: f64 },
    #[error("animation override `{field}` must be finite and non-negative")]
    InvalidAnimationOverride { field: &'static str },
}

/// Reading direction of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayoutDirection {
    #[default]
    Ltr,
    /// Increasing values move toward the visual start of the track.
    Rtl,
}

impl LayoutDirection {
    #[inline]
    #[must_use]
    pub const fn is_mirrored(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

pub const DEFAULT_TOUCH_SIZE: Size = Size {
    width: 40.0,
    height: 40.0,
};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    pub minimum_value: f64,
    pub maximum_value: f64,
    /// Initial (and programmatically overridden) left thumb value.
    pub min_value: f64,
    /// Initial (and programmatically overridden) right thumb value.
    pub max_value: f64,
    /// Quantization step; `0` is continuous.
    pub step: f64,
    pub disabled: bool,
    pub thumb_touch_size: Size,
    /// Animate programmatic value changes instead of jumping.
    pub animate_transitions: bool,
    pub animation_type: AnimationKind,
    pub animation_config: AnimationOverrides,
    pub layout_direction: LayoutDirection,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 1.0,
            min_value: 0.0,
            max_value: 1.0,
            step: 0.0,
            disabled: false,
            thumb_touch_size: DEFAULT_TOUCH_SIZE,
            animate_transitions: false,
            animation_type: AnimationKind::Timing,
            animation_config: AnimationOverrides::default(),
            layout_direction: LayoutDirection::Ltr,
        }
    }
}

impl SliderConfig {
    /// Set the value range. Thumb values default to the range ends.
    #[must_use]
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum_value = minimum;
        self.maximum_value = maximum;
        self.min_value = minimum;
        self.max_value = maximum;
        self
    }

    #[must_use]
    pub fn with_values(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_thumb_touch_size(mut self, size: Size) -> Self {
        self.thumb_touch_size = size;
        self
    }

    #[must_use]
    pub fn with_animated_transitions(mut self, kind: AnimationKind) -> Self {
        self.animate_transitions = true;
        self.animation_type = kind;
        self
    }

    #[must_use]
    pub fn with_animation_config(mut self, overrides: AnimationOverrides) -> Self {
        self.animation_config = overrides;
        self
    }

    #[must_use]
    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Check every field and build the value range.
    pub fn validate(&self) -> Result<ValueRange, ConfigError> {
        let range = ValueRange::new(self.minimum_value, self.maximum_value, self.step)?;
        for (field, value) in [("min_value", self.min_value), ("max_value", self.max_value)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { field });
            }
        }
        let Size { width, height } = self.thumb_touch_size;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(ConfigError::InvalidTouchSize { width, height });
        }
        if let Some(field) = self.animation_config.invalid_field() {
            return Err(ConfigError::InvalidAnimationOverride { field });
        }
        Ok(range)
    }

    /// Resolved animation parameters for programmatic transitions.
    #[must_use]
    pub fn animation_spec(&self) -> AnimationSpec {
        AnimationSpec::resolve(self.animation_type, &self.animation_config)
    }

    #[inline]
    #[must_use]
    pub fn is_mirrored(&self) -> bool {
        self.layout_direction.is_mirrored()
    }
}
