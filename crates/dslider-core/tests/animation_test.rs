//! Integration tests for the animation module.

use dslider_core::animation::*;
use std::time::Duration;

const MS_16: Duration = Duration::from_millis(16);

fn run_to_completion(anim: &mut dyn Animation, max_frames: usize) -> usize {
    for frame in 0..max_frames {
        if anim.is_complete() {
            return frame;
        }
        anim.tick(MS_16);
    }
    max_frames
}

#[test]
fn default_timing_converges_in_ten_frames() {
    let mut anim = PhysicsAnimator.animate(0.0, 5.0, &AnimationSpec::default());
    let frames = run_to_completion(anim.as_mut(), 100);
    assert_eq!(frames, 10, "150ms at 16ms frames");
    assert_eq!(anim.value(), 5.0);
}

#[test]
fn default_spring_converges() {
    let spec = AnimationSpec::resolve(AnimationKind::Spring, &AnimationOverrides::default());
    let mut anim = PhysicsAnimator.animate(0.0, 5.0, &spec);
    let frames = run_to_completion(anim.as_mut(), 600);
    assert!(frames < 600, "spring never settled");
    assert_eq!(anim.value(), 5.0);
}

#[test]
fn same_frames_same_values() {
    let spec = AnimationSpec::resolve(AnimationKind::Spring, &AnimationOverrides::default());
    let mut a = PhysicsAnimator.animate(1.0, -3.0, &spec);
    let mut b = PhysicsAnimator.animate(1.0, -3.0, &spec);
    for _ in 0..50 {
        a.tick(MS_16);
        b.tick(MS_16);
        assert_eq!(a.value(), b.value());
    }
}

#[test]
fn two_animations_with_one_spec_stay_in_lockstep() {
    let overrides = AnimationOverrides {
        duration: Some(Duration::from_millis(400)),
        easing: Some(Easing::EaseOut),
        ..AnimationOverrides::default()
    };
    let spec = AnimationSpec::resolve(AnimationKind::Timing, &overrides);
    let mut value = PhysicsAnimator.animate(2.0, 8.0, &spec);
    let mut highlight = PhysicsAnimator.animate(2.0, 8.0, &spec);
    for _ in 0..30 {
        value.tick(MS_16);
        highlight.tick(MS_16);
        assert_eq!(value.value(), highlight.value());
        assert_eq!(value.is_complete(), highlight.is_complete());
    }
    assert!(value.is_complete());
}

#[test]
fn timing_delay_then_motion() {
    let overrides = AnimationOverrides {
        delay: Some(Duration::from_millis(100)),
        ..AnimationOverrides::default()
    };
    let spec = AnimationSpec::resolve(AnimationKind::Timing, &overrides);
    let mut anim = PhysicsAnimator.animate(0.0, 1.0, &spec);
    anim.tick(Duration::from_millis(96));
    assert_eq!(anim.value(), 0.0, "still inside the delay");
    anim.tick(Duration::from_millis(80));
    assert!(anim.value() > 0.0 && anim.value() < 1.0);
    anim.tick(Duration::from_millis(200));
    assert!(anim.is_complete());
}

#[test]
fn timing_is_monotonic_for_every_easing() {
    let curves = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::InOutEase,
    ];
    for easing in curves {
        let mut t = Timing::new(0.0, 10.0, Duration::from_millis(160)).with_easing(easing);
        let mut prev = t.value();
        for _ in 0..10 {
            t.tick(MS_16);
            assert!(t.value() >= prev - 1e-9, "{easing:?} went backwards");
            prev = t.value();
        }
        assert_eq!(t.value(), 10.0);
    }
}

#[test]
fn boxed_animation_resets() {
    let mut anim: Box<dyn Animation> = Box::new(Spring::new(0.0, 1.0));
    anim.tick(Duration::from_millis(100));
    assert_ne!(anim.value(), 0.0);
    anim.reset();
    assert_eq!(anim.value(), 0.0);
}
