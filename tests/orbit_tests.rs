// Host-side tests for the damped orbit controls.

mod common;

use common::approx_eq;
use common::core::constants::*;
use common::core::orbit::*;
use glam::Vec3;

#[test]
fn idle_controls_leave_eye_bit_identical() {
    let mut controls = OrbitControls::default();
    let mut eye = INITIAL_CAMERA_EYE;
    for _ in 0..10 {
        assert!(!controls.update(&mut eye));
    }
    assert_eq!(eye, INITIAL_CAMERA_EYE);
}

#[test]
fn zoom_is_clamped_to_distance_range() {
    let mut controls = OrbitControls::default();
    let mut eye = INITIAL_CAMERA_EYE;
    for _ in 0..200 {
        controls.dolly(-1.0);
        controls.update(&mut eye);
    }
    assert!(approx_eq(eye.length(), ORBIT_MIN_DISTANCE), "{}", eye.length());

    for _ in 0..200 {
        controls.dolly(1.0);
        controls.update(&mut eye);
    }
    assert!(approx_eq(eye.length(), ORBIT_MAX_DISTANCE), "{}", eye.length());
}

#[test]
fn out_of_range_eye_is_pulled_back() {
    let mut controls = OrbitControls::default();
    let mut eye = Vec3::new(0.0, 0.0, 5.0);
    assert!(controls.update(&mut eye));
    assert!(approx_eq(eye.length(), ORBIT_MIN_DISTANCE));
}

#[test]
fn rotation_is_damped_and_settles() {
    let mut controls = OrbitControls::default();
    let mut eye = INITIAL_CAMERA_EYE;
    let radius = eye.length();
    controls.rotate_by_pixels(100.0, 0.0, 800.0);

    let first = eye;
    controls.update(&mut eye);
    let step1 = (eye - first).length();
    let before = eye;
    controls.update(&mut eye);
    let step2 = (eye - before).length();
    assert!(step1 > 0.0);
    assert!(step2 < step1, "damping should shrink steps: {} vs {}", step2, step1);

    for _ in 0..2000 {
        controls.update(&mut eye);
    }
    assert!(!controls.has_pending_motion());
    assert!(approx_eq(eye.length(), radius));
    // horizontal drag keeps the height
    assert!((eye.y - INITIAL_CAMERA_EYE.y).abs() < 1e-3);
}

#[test]
fn vertical_drag_cannot_flip_over_the_pole() {
    let mut controls = OrbitControls::default();
    let mut eye = INITIAL_CAMERA_EYE;
    controls.rotate_by_pixels(0.0, 100_000.0, 100.0);
    for _ in 0..500 {
        controls.update(&mut eye);
    }
    assert!(eye.is_finite());
    assert!(eye.y <= eye.length());
    assert!(approx_eq(eye.length(), INITIAL_CAMERA_EYE.length()));
}

#[test]
fn idle_eye_on_polar_axis_is_moved_off_it() {
    for y in [20.0, -20.0] {
        let mut controls = OrbitControls::default();
        let mut eye = Vec3::new(0.0, y, 0.0);
        controls.update(&mut eye);
        assert!(eye.is_finite());
        assert!(approx_eq(eye.length(), 20.0));
        let off_axis = eye.x.hypot(eye.z);
        assert!(off_axis > 0.0, "eye still on the axis: {:?}", eye);

        // once off the axis it stays put
        let settled = eye;
        assert!(!controls.update(&mut eye));
        assert_eq!(eye, settled);
    }
}
