#![forbid(unsafe_code)]

//! Render projection.
//!
//! [`SliderFrame`] is everything a renderer needs for one frame, derived
//! from geometry, range, and the store. Thumb translations follow the
//! reading direction; the highlight insets are measured from the track's
//! physical start and end.

use dslider_core::{Size, TouchRect, ValueRange};

use crate::layout::GeometryModel;
use crate::router::{ThumbId, TouchRouter};
use crate::store::ValueStore;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SliderFrame {
    /// False until every element has been measured; render at zero opacity.
    pub visible: bool,
    /// Horizontal translation of the left thumb from its resting slot.
    pub left_translate: f64,
    pub right_translate: f64,
    /// Distance from the container start to the highlight start.
    pub highlight_start_inset: f64,
    /// Distance from the container end to the highlight end.
    pub highlight_end_inset: f64,
    /// Margin the hit region extends past the container, split evenly
    /// between opposite sides.
    pub touch_overflow: Size,
    pub left_touch_rect: Option<TouchRect>,
    pub right_touch_rect: Option<TouchRect>,
    /// Store version this frame was projected from.
    pub version: u64,
}

impl SliderFrame {
    #[must_use]
    pub fn project(
        geometry: &GeometryModel,
        range: &ValueRange,
        store: &ValueStore,
        touch_size: Size,
        mirrored: bool,
    ) -> Self {
        let length = geometry.usable_length();
        let half_thumb = geometry.thumb().width / 2.0;
        let direction = if mirrored { -1.0 } else { 1.0 };
        let translate = |thumb: ThumbId| direction * range.ratio(store.value(thumb)) * length;
        let highlight = store.highlight();
        let router = TouchRouter::new(geometry, range, touch_size, mirrored);

        Self {
            visible: geometry.is_ready(),
            left_translate: translate(ThumbId::Left),
            right_translate: translate(ThumbId::Right),
            highlight_start_inset: range.ratio(highlight.low) * length + half_thumb,
            highlight_end_inset: (1.0 - range.ratio(highlight.high)) * length + half_thumb,
            touch_overflow: geometry.touch_overflow(touch_size).unwrap_or(Size::ZERO),
            left_touch_rect: router.touch_rect(store.value(ThumbId::Left)),
            right_touch_rect: router.touch_rect(store.value(ThumbId::Right)),
            version: store.version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutElement;

    const TOUCH: Size = Size {
        width: 40.0,
        height: 40.0,
    };

    fn ready() -> GeometryModel {
        let mut g = GeometryModel::new();
        g.report(LayoutElement::Container, Size::new(300.0, 30.0));
        g.report(LayoutElement::Track, Size::new(300.0, 4.0));
        g.report(LayoutElement::LeftThumb, Size::new(20.0, 20.0));
        g.report(LayoutElement::RightThumb, Size::new(20.0, 20.0));
        g
    }

    #[test]
    fn hidden_before_measurement() {
        let range = ValueRange::UNIT;
        let store = ValueStore::new(0.0, 1.0);
        let frame = SliderFrame::project(&GeometryModel::new(), &range, &store, TOUCH, false);
        assert!(!frame.visible);
        assert_eq!(frame.left_touch_rect, None);
        assert_eq!(frame.touch_overflow, Size::ZERO);
        assert_eq!(frame.right_translate, 0.0);
    }

    #[test]
    fn ltr_projection() {
        let range = ValueRange::new(0.0, 10.0, 0.0).expect("valid");
        let store = ValueStore::new(2.5, 7.5);
        let frame = SliderFrame::project(&ready(), &range, &store, TOUCH, false);
        assert!(frame.visible);
        assert_eq!(frame.left_translate, 70.0);
        assert_eq!(frame.right_translate, 210.0);
        assert_eq!(frame.highlight_start_inset, 80.0);
        assert_eq!(frame.highlight_end_inset, 80.0);
        assert_eq!(frame.touch_overflow, Size::new(20.0, 10.0));
        assert_eq!(frame.left_touch_rect.map(|r| r.x), Some(70.0));
    }

    #[test]
    fn rtl_translates_backwards() {
        let range = ValueRange::UNIT;
        let store = ValueStore::new(0.25, 1.0);
        let frame = SliderFrame::project(&ready(), &range, &store, TOUCH, true);
        assert_eq!(frame.left_translate, -70.0);
        assert_eq!(frame.right_translate, -280.0);
        // Touch rects live in physical coordinates.
        assert_eq!(frame.left_touch_rect.map(|r| r.x), Some(210.0));
    }

    #[test]
    fn crossed_thumbs_use_ordered_highlight() {
        let range = ValueRange::UNIT;
        let store = ValueStore::new(0.75, 0.25);
        let frame = SliderFrame::project(&ready(), &range, &store, TOUCH, false);
        assert_eq!(frame.highlight_start_inset, 80.0);
        assert_eq!(frame.highlight_end_inset, 80.0);
    }

    #[test]
    fn degenerate_range_projects_to_start() {
        let range = ValueRange::new(4.0, 4.0, 0.0).expect("valid");
        let store = ValueStore::new(4.0, 4.0);
        let frame = SliderFrame::project(&ready(), &range, &store, TOUCH, false);
        assert_eq!(frame.left_translate, 0.0);
        assert_eq!(frame.highlight_start_inset, 10.0);
        assert_eq!(frame.highlight_end_inset, 290.0);
    }
}
