#![forbid(unsafe_code)]

//! Geometry model: measured sizes reported by the host layout.
//!
//! The host measures four elements and reports each size as it becomes
//! known. The model is *ready* once all four have reported at least once;
//! until then there are no hit rectangles and the control renders hidden.
//!
//! # Invariants
//!
//! 1. Stored sizes are always finite and non-negative.
//! 2. Readiness never reverts: once every element has reported, later
//!    reports only update sizes.
//! 3. A report identical to the stored size is ignored.
//!
//! Both thumbs share the *left* thumb's size for layout math.

use dslider_core::{Size, usable_length};

/// Host element whose size is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayoutElement {
    Container,
    Track,
    LeftThumb,
    RightThumb,
}

impl LayoutElement {
    pub const ALL: [Self; 4] = [
        Self::Container,
        Self::Track,
        Self::LeftThumb,
        Self::RightThumb,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Container => 0,
            Self::Track => 1,
            Self::LeftThumb => 2,
            Self::RightThumb => 3,
        }
    }
}

/// Result of one size report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutUpdate {
    /// Same size as already stored.
    Unchanged,
    /// Size stored; the model was already ready (or still is not).
    Updated,
    /// This report completed the set and made the model ready.
    BecameReady,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryModel {
    reported: [Option<Size>; 4],
    ready: bool,
}

impl GeometryModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measured size for `element`. Malformed sizes are sanitized.
    pub fn report(&mut self, element: LayoutElement, size: Size) -> LayoutUpdate {
        let size = size.sanitized();
        let slot = &mut self.reported[element.index()];
        if *slot == Some(size) {
            return LayoutUpdate::Unchanged;
        }
        *slot = Some(size);
        if !self.ready && self.reported.iter().all(Option::is_some) {
            self.ready = true;
            return LayoutUpdate::BecameReady;
        }
        LayoutUpdate::Updated
    }

    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Last reported size of `element`, if any.
    #[must_use]
    pub fn size_of(&self, element: LayoutElement) -> Option<Size> {
        self.reported[element.index()]
    }

    /// Container size, or zero before readiness.
    #[must_use]
    pub fn container(&self) -> Size {
        self.ready_size(LayoutElement::Container)
    }

    /// Thumb size used for layout (the left thumb's), or zero before readiness.
    #[must_use]
    pub fn thumb(&self) -> Size {
        self.ready_size(LayoutElement::LeftThumb)
    }

    /// Draggable track length: `container.width - thumb.width`, never negative.
    #[must_use]
    pub fn usable_length(&self) -> f64 {
        usable_length(self.container().width, self.thumb().width)
    }

    /// Margin by which the hit region extends past the container so that
    /// touch targets larger than the thumb are not clipped.
    ///
    /// `None` before readiness.
    #[must_use]
    pub fn touch_overflow(&self, touch: Size) -> Option<Size> {
        if !self.ready {
            return None;
        }
        Some(Size::new(
            (touch.width - self.thumb().width).max(0.0),
            (touch.height - self.container().height).max(0.0),
        ))
    }

    fn ready_size(&self, element: LayoutElement) -> Size {
        if !self.ready {
            return Size::ZERO;
        }
        self.reported[element.index()].unwrap_or(Size::ZERO)
    }
}
