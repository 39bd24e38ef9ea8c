// Host-side tests for easing and the tween set.

mod common;

use common::core::tween::*;
use glam::Vec3;

#[test]
fn easing_curves_hit_endpoints() {
    for ease in [Ease::Power1Out, Ease::Power3InOut] {
        assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
        assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
        // input is clamped
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
    assert!((Ease::Power3InOut.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn flight_easing_is_quartic() {
    let e = Ease::Power3InOut;
    assert!((e.apply(0.25) - 0.03125).abs() < 1e-6);
    assert!((e.apply(0.75) - 0.96875).abs() < 1e-6);
    assert!((e.apply(0.1) - 0.0008).abs() < 1e-6);
    // symmetric about the midpoint
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-5);
    }
}

#[test]
fn hover_easing_is_quadratic_out() {
    let e = Ease::Power1Out;
    assert!((e.apply(0.5) - 0.75).abs() < 1e-6);
    assert!((e.apply(0.25) - 0.4375).abs() < 1e-6);
}

#[test]
fn easing_curves_are_monotonic() {
    for ease in [Ease::Power1Out, Ease::Power3InOut] {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev, "{:?} dipped at step {}", ease, i);
            prev = v;
        }
    }
}

#[test]
fn finished_tween_lands_exactly_on_target() {
    let to = Vec3::new(0.0, 5.0, 30.0);
    let tween = Tween {
        from: Vec3::new(3.3, -7.1, 12.9),
        to,
        start: 0.25,
        duration: 2.0,
        ease: Ease::Power3InOut,
    };
    assert_eq!(tween.value(0.25), tween.from);
    assert!(!tween.is_done(1.0));
    assert_eq!(tween.value(2.25), to);
    assert_eq!(tween.value(10.0), to);
    assert!(tween.is_done(2.25));
}

#[test]
fn advance_applies_and_retires_tweens() {
    let mut tweens = Tweens::default();
    tweens.start(
        TweenTarget::BeaconScale(0),
        Vec3::ONE,
        Vec3::splat(1.5),
        0.3,
        Ease::Power1Out,
        0.0,
    );
    let mut seen = Vec::new();
    tweens.advance(0.15, |t, v| seen.push((t, v)));
    assert_eq!(seen.len(), 1);
    assert!(seen[0].1.x > 1.0 && seen[0].1.x < 1.5);
    assert_eq!(tweens.len(), 1);

    seen.clear();
    tweens.advance(0.3, |t, v| seen.push((t, v)));
    assert_eq!(seen, vec![(TweenTarget::BeaconScale(0), Vec3::splat(1.5))]);
    assert!(tweens.is_empty());
}

#[test]
fn newer_tween_replaces_older_on_same_property() {
    let mut tweens = Tweens::default();
    tweens.start(
        TweenTarget::CameraEye,
        Vec3::ZERO,
        Vec3::X * 10.0,
        1.5,
        Ease::Power3InOut,
        0.0,
    );
    tweens.start(
        TweenTarget::OrbitTarget,
        Vec3::ONE,
        Vec3::ZERO,
        1.5,
        Ease::Power3InOut,
        0.0,
    );
    tweens.start(
        TweenTarget::CameraEye,
        Vec3::X * 2.0,
        Vec3::Y * 30.0,
        2.0,
        Ease::Power3InOut,
        0.5,
    );
    assert_eq!(tweens.len(), 2);

    let mut eye = Vec3::ZERO;
    tweens.advance(2.5, |t, v| {
        if t == TweenTarget::CameraEye {
            eye = v;
        }
    });
    assert_eq!(eye, Vec3::Y * 30.0);
    assert!(tweens.is_empty());
}

#[test]
fn zero_duration_completes_immediately() {
    let tween = Tween {
        from: Vec3::ZERO,
        to: Vec3::ONE,
        start: 1.0,
        duration: 0.0,
        ease: Ease::Power1Out,
    };
    assert_eq!(tween.value(1.0), Vec3::ONE);
}
