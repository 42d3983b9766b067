#![forbid(unsafe_code)]

//! The [`DoubleSlider`] control.
//!
//! Wires the geometry model, touch router, interaction machine, value store,
//! and host callbacks together. All entry points are synchronous and meant
//! to be called from one event loop:
//!
//! - layout: [`report_layout`](DoubleSlider::report_layout)
//! - gestures: [`claims_touch_start`](DoubleSlider::claims_touch_start),
//!   [`handle_touch`](DoubleSlider::handle_touch),
//!   [`cancel`](DoubleSlider::cancel)
//! - host inputs: [`set_config`](DoubleSlider::set_config),
//!   [`set_value`](DoubleSlider::set_value)
//! - frames: [`tick`](DoubleSlider::tick), [`frame`](DoubleSlider::frame)
//!
//! # Value ownership
//!
//! After construction the two thumb values belong to the slider. They drift
//! under drags and are overwritten from outside only when the host sends a
//! *different* `min_value`/`max_value` than it sent before, or calls
//! [`set_value`](DoubleSlider::set_value). A programmatic write during a drag
//! applies immediately; the next drag move overwrites it again (last write
//! wins).

use dslider_core::{Size, ValueRange};
use tracing::{debug, debug_span, info, warn};
use web_time::Instant;

use crate::config::SliderConfig;
use crate::error::{Result, SliderError};
use crate::frame::SliderFrame;
use crate::interaction::{
    DragContext, InteractionEffect, InteractionMachine, InteractionState, InteractionTransition,
    TouchEvent,
};
use crate::layout::{GeometryModel, LayoutElement, LayoutUpdate};
use crate::notify::{Notification, SliderCallbacks};
use crate::router::{ThumbId, TouchRouter};
use crate::store::{Highlight, ValueStore};

#[derive(Debug)]
pub struct DoubleSlider {
    config: SliderConfig,
    range: ValueRange,
    geometry: GeometryModel,
    machine: InteractionMachine,
    store: ValueStore,
    callbacks: SliderCallbacks,
}

impl DoubleSlider {
    /// Build a slider. Initial thumb values are clamped into the range.
    pub fn new(config: SliderConfig, callbacks: SliderCallbacks) -> Result<Self> {
        let range = validate(&config)?;
        let store = ValueStore::new(range.clamp(config.min_value), range.clamp(config.max_value));
        Ok(Self {
            config,
            range,
            geometry: GeometryModel::new(),
            machine: InteractionMachine::new(),
            store,
            callbacks,
        })
    }

    /// Replace the animation driver (builder pattern).
    #[must_use]
    pub fn with_animator(mut self, animator: Box<dyn dslider_core::animation::Animator>) -> Self {
        self.store = self.store.with_animator(animator);
        self
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    #[inline]
    #[must_use]
    pub fn geometry(&self) -> &GeometryModel {
        &self.geometry
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    #[inline]
    #[must_use]
    pub fn callbacks(&self) -> &SliderCallbacks {
        &self.callbacks
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.machine.state()
    }

    /// Literal `(left, right)` values.
    #[inline]
    #[must_use]
    pub fn values(&self) -> (f64, f64) {
        self.store.values()
    }

    #[inline]
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        self.store.highlight()
    }

    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.geometry.is_ready()
    }

    /// Apply a new configuration.
    ///
    /// Rejected configurations leave the previous one fully in effect. A
    /// range change re-clamps both thumbs. A `min_value`/`max_value` that
    /// differs from the previously configured one is written to its thumb,
    /// animated when the new configuration asks for it.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<()> {
        let range = validate(&config)?;
        let previous = std::mem::replace(&mut self.config, config);
        if range != self.range {
            debug!(
                minimum = range.minimum(),
                maximum = range.maximum(),
                step = range.step(),
                "slider range changed"
            );
            self.range = range;
            self.store.clamp_into(&range);
        }
        if previous.min_value != self.config.min_value {
            self.write_programmatic(ThumbId::Left, self.config.min_value);
        }
        if previous.max_value != self.config.max_value {
            self.write_programmatic(ThumbId::Right, self.config.max_value);
        }
        Ok(())
    }

    /// Programmatically move one thumb, clamped into the range.
    ///
    /// Animated when the configuration enables transitions.
    pub fn set_value(&mut self, thumb: ThumbId, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(SliderError::NonFiniteValue { thumb, value });
        }
        self.write_programmatic(thumb, value);
        Ok(())
    }

    /// Record a measured element size.
    pub fn report_layout(&mut self, element: LayoutElement, size: Size) -> LayoutUpdate {
        let update = self.geometry.report(element, size);
        if update == LayoutUpdate::BecameReady {
            info!(
                container_width = self.geometry.container().width,
                thumb_width = self.geometry.thumb().width,
                usable_length = self.geometry.usable_length(),
                "slider geometry ready"
            );
        }
        update
    }

    /// Whether a touch starting at `(x, y)` should be handed to the slider.
    #[must_use]
    pub fn claims_touch_start(&self, x: f64, y: f64) -> bool {
        if self.machine.is_active() {
            return false;
        }
        let (left, right) = self.store.values();
        self.router().route(x, y, left, right).is_some()
    }

    /// Always `false`: a gesture that started elsewhere is never taken over.
    #[inline]
    #[must_use]
    pub fn claims_touch_move(&self) -> bool {
        self.machine.claims_touch_move()
    }

    /// Whether a competing recognizer may take the current gesture.
    #[inline]
    #[must_use]
    pub fn allows_termination(&self) -> bool {
        self.machine.allows_termination()
    }

    /// Feed one touch event through the interaction machine and deliver the
    /// resulting host notification.
    pub fn handle_touch(&mut self, event: TouchEvent) -> InteractionTransition {
        let _span = debug_span!("dslider.touch", owner = ?self.machine.state().owner()).entered();
        let mut ctx = DragContext {
            geometry: &self.geometry,
            range: &self.range,
            touch_size: self.config.thumb_touch_size,
            mirrored: self.config.is_mirrored(),
            disabled: self.config.disabled,
            store: &mut self.store,
        };
        let transition = self.machine.apply_event(event, &mut ctx);
        self.dispatch(&transition);
        transition
    }

    /// Force the current session to end without a final write or
    /// "sliding complete". No-op when idle.
    pub fn cancel(&mut self) -> Option<InteractionTransition> {
        let transition = self.machine.force_cancel()?;
        self.dispatch(&transition);
        Some(transition)
    }

    /// Advance running transitions to frame time `now`. Returns `true` when
    /// a value changed and the slider should be redrawn.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.store.advance_to(now)
    }

    #[must_use]
    pub fn frame(&self) -> SliderFrame {
        SliderFrame::project(
            &self.geometry,
            &self.range,
            &self.store,
            self.config.thumb_touch_size,
            self.config.is_mirrored(),
        )
    }

    fn router(&self) -> TouchRouter<'_> {
        TouchRouter::new(
            &self.geometry,
            &self.range,
            self.config.thumb_touch_size,
            self.config.is_mirrored(),
        )
    }

    fn write_programmatic(&mut self, thumb: ThumbId, value: f64) {
        let target = self.range.clamp(value);
        if self.config.animate_transitions {
            let spec = self.config.animation_spec();
            debug!(thumb = thumb.as_str(), target, ?spec, "programmatic transition");
            self.store.animate_to(thumb, target, &spec);
        } else {
            debug!(thumb = thumb.as_str(), target, "programmatic write");
            self.store.set_immediate(thumb, target);
        }
    }

    fn dispatch(&mut self, transition: &InteractionTransition) {
        debug!(
            transition_id = transition.transition_id,
            from = ?transition.from,
            to = ?transition.to,
            effect = ?transition.effect,
            "slider transition"
        );
        let kind = match transition.effect {
            InteractionEffect::Granted { .. } => Notification::SlidingStart,
            InteractionEffect::Moved { .. } => Notification::ValueChanged,
            InteractionEffect::Released { .. } => Notification::SlidingComplete,
            _ => return,
        };
        let (left, right) = self.store.values();
        self.callbacks.emit(kind, left, right);
    }
}

fn validate(config: &SliderConfig) -> Result<ValueRange> {
    config.validate().map_err(|err| {
        warn!(error = %err, "slider configuration rejected");
        SliderError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use dslider_core::RangeError;
    use dslider_core::animation::AnimationKind;

    fn measured(config: SliderConfig) -> DoubleSlider {
        let mut s = DoubleSlider::new(config, SliderCallbacks::new()).expect("valid config");
        s.report_layout(LayoutElement::Container, Size::new(300.0, 40.0));
        s.report_layout(LayoutElement::Track, Size::new(300.0, 4.0));
        s.report_layout(LayoutElement::LeftThumb, Size::new(20.0, 20.0));
        s.report_layout(LayoutElement::RightThumb, Size::new(20.0, 20.0));
        s
    }

    #[test]
    fn initial_values_are_clamped() {
        let s = DoubleSlider::new(
            SliderConfig::default().with_values(-3.0, 0.4),
            SliderCallbacks::new(),
        )
        .expect("valid config");
        assert_eq!(s.values(), (0.0, 0.4));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let err = DoubleSlider::new(
            SliderConfig::default().with_range(1.0, 0.0),
            SliderCallbacks::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SliderError::Config(ConfigError::Range(RangeError::Inverted { .. }))
        ));
    }

    #[test]
    fn rejected_update_keeps_previous_config() {
        let mut s = measured(SliderConfig::default().with_step(0.25));
        let bad = SliderConfig::default().with_step(5.0).with_values(0.5, 0.5);
        assert!(s.set_config(bad).is_err());
        assert_eq!(s.config().step, 0.25);
        assert_eq!(s.values(), (0.0, 1.0));
    }

    #[test]
    fn unchanged_input_does_not_snap_back() {
        let mut s = measured(SliderConfig::default());
        s.handle_touch(TouchEvent::Start { x: 20.0, y: 20.0 });
        s.handle_touch(TouchEvent::Release { dx: 70.0, dy: 0.0 });
        assert_eq!(s.values(), (0.25, 1.0));
        s.set_config(SliderConfig::default().with_disabled(true))
            .expect("valid config");
        assert_eq!(s.values(), (0.25, 1.0), "same min_value is not a new input");
    }

    #[test]
    fn changed_input_writes_immediately_without_animation() {
        let mut s = measured(SliderConfig::default());
        s.set_config(SliderConfig::default().with_values(0.3, 0.9))
            .expect("valid config");
        assert_eq!(s.values(), (0.3, 0.9));
        assert!(!s.store().any_animating());
    }

    #[test]
    fn update_uses_its_own_animation_settings() {
        let mut s = measured(SliderConfig::default());
        s.set_config(
            SliderConfig::default()
                .with_values(0.5, 1.0)
                .with_animated_transitions(AnimationKind::Timing),
        )
        .expect("valid config");
        assert_eq!(s.values(), (0.0, 1.0), "animated, not written");
        assert_eq!(s.store().transition_target(ThumbId::Left), Some(0.5));

        // Turning transitions off in the same update writes immediately.
        s.set_config(SliderConfig::default().with_values(0.2, 1.0))
            .expect("valid config");
        assert_eq!(s.values(), (0.2, 1.0));
        assert!(!s.store().any_animating());
    }

    #[test]
    fn range_change_reclamps() {
        let mut s = measured(SliderConfig::default().with_range(0.0, 10.0));
        // Same thumb inputs as before, narrower range.
        let narrowed = SliderConfig::default()
            .with_range(0.0, 4.0)
            .with_values(0.0, 10.0);
        s.set_config(narrowed).expect("valid config");
        assert_eq!(s.values(), (0.0, 4.0));
        assert_eq!(s.range().maximum(), 4.0);
    }

    #[test]
    fn set_value_rejects_nan() {
        let mut s = measured(SliderConfig::default());
        let err = s.set_value(ThumbId::Left, f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            SliderError::NonFiniteValue {
                thumb: ThumbId::Left,
                ..
            }
        ));
        assert_eq!(s.values(), (0.0, 1.0));
    }

    #[test]
    fn set_value_clamps() {
        let mut s = measured(SliderConfig::default());
        s.set_value(ThumbId::Right, 4.0).expect("finite");
        assert_eq!(s.values(), (0.0, 1.0));
        s.set_value(ThumbId::Left, 0.6).expect("finite");
        assert_eq!(s.values(), (0.6, 1.0));
    }

    #[test]
    fn claims_only_thumb_touches() {
        let mut s = measured(SliderConfig::default());
        assert!(s.claims_touch_start(20.0, 20.0));
        assert!(!s.claims_touch_start(150.0, 20.0));
        assert!(!s.claims_touch_move());
        assert!(s.allows_termination());
        s.handle_touch(TouchEvent::Start { x: 20.0, y: 20.0 });
        assert!(!s.allows_termination());
        assert!(!s.claims_touch_start(300.0, 20.0), "one session at a time");
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s = measured(SliderConfig::default());
        assert!(s.cancel().is_none());
        s.handle_touch(TouchEvent::Start { x: 20.0, y: 20.0 });
        assert!(s.cancel().is_some());
        assert_eq!(s.state(), InteractionState::Idle);
    }
}
