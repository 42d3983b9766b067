#![forbid(unsafe_code)]

//! Touch router: which thumb, if any, owns a new touch.
//!
//! Each thumb gets a touch rectangle of the configured touch size, centered
//! horizontally on the thumb and vertically on the container. Touch points
//! are in the coordinate space of the hit region, which is the container
//! grown by half the touch overflow on every side.
//!
//! # Invariants
//!
//! 1. Hit testing is ordered: the left thumb is tested first and wins when
//!    both rectangles contain the point.
//! 2. Before the geometry is ready no rectangle exists and nothing is
//!    claimed.

use dslider_core::{Size, TouchRect, ValueRange};

use crate::layout::GeometryModel;

/// One of the two thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThumbId {
    Left,
    Right,
}

impl ThumbId {
    /// Hit-test order.
    pub const ORDER: [Self; 2] = [Self::Left, Self::Right];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Hit-testing view over the current geometry, range, and touch settings.
#[derive(Debug, Clone, Copy)]
pub struct TouchRouter<'a> {
    geometry: &'a GeometryModel,
    range: &'a ValueRange,
    touch_size: Size,
    mirrored: bool,
}

impl<'a> TouchRouter<'a> {
    #[must_use]
    pub fn new(
        geometry: &'a GeometryModel,
        range: &'a ValueRange,
        touch_size: Size,
        mirrored: bool,
    ) -> Self {
        Self {
            geometry,
            range,
            touch_size: touch_size.sanitized(),
            mirrored,
        }
    }

    /// Touch rectangle for a thumb currently at `value`.
    #[must_use]
    pub fn touch_rect(&self, value: f64) -> Option<TouchRect> {
        let overflow = self.geometry.touch_overflow(self.touch_size)?;
        let thumb = self.geometry.thumb();
        let container = self.geometry.container();
        let offset = self
            .range
            .to_offset(value, self.geometry.usable_length(), self.mirrored);
        Some(TouchRect::new(
            overflow.width / 2.0 + offset + (thumb.width - self.touch_size.width) / 2.0,
            overflow.height / 2.0 + (container.height - self.touch_size.height) / 2.0,
            self.touch_size.width,
            self.touch_size.height,
        ))
    }

    /// Owner of a touch at `(x, y)` given the thumbs' current values.
    #[must_use]
    pub fn route(&self, x: f64, y: f64, left: f64, right: f64) -> Option<ThumbId> {
        ThumbId::ORDER.into_iter().find(|thumb| {
            let value = match thumb {
                ThumbId::Left => left,
                ThumbId::Right => right,
            };
            self.touch_rect(value)
                .is_some_and(|rect| rect.contains_point(x, y))
        })
    }
}
