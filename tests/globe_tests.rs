// Host-side tests for beacons, hover/selection and camera flights.

mod common;

use common::core::beacons::*;
use common::core::constants::*;
use common::core::globe::GlobeState;
use common::core::interaction::{ClickOutcome, Cursor, Interaction};
use common::core::spots::{demo_spots, Spot};
use common::core::tween::TweenTarget;
use glam::{Vec2, Vec3, Vec4Swizzles};

fn spot(name: &str, lat: f32, lon: f32) -> Spot {
    Spot {
        name: name.to_string(),
        lat,
        lon,
        ..Default::default()
    }
}

/// Latitude of the point on the globe straight between the startup eye and
/// the origin; longitude -90 faces +Z.
fn facing_lat() -> f32 {
    (INITIAL_CAMERA_EYE.y / INITIAL_CAMERA_EYE.z).atan().to_degrees()
}

fn two_spot_globe() -> GlobeState {
    GlobeState::new(
        vec![spot("Front", facing_lat(), -90.0), spot("Side", 20.0, -75.0)],
        1.0,
    )
}

fn ndc_of(globe: &GlobeState, i: usize) -> Vec2 {
    let clip = globe.view_proj() * globe.beacons[i].position.extend(1.0);
    clip.xy() / clip.w
}

#[test]
fn one_beacon_per_spot_on_the_surface() {
    let spots = demo_spots();
    let beacons = build_beacons(&spots, GLOBE_RADIUS);
    assert_eq!(beacons.len(), spots.len());
    for (i, b) in beacons.iter().enumerate() {
        assert_eq!(b.spot, i);
        assert_eq!(b.scale, IDLE_SCALE);
        assert!((b.position.length() - GLOBE_RADIUS).abs() < 1e-3);
    }
}

#[test]
fn ring_pulse_follows_the_sine_and_rings_alternate() {
    let start = ring_pulse(0.0, 0.0);
    assert!((start.scale - 1.5).abs() < 1e-6);
    assert!((start.opacity - 0.5).abs() < 1e-6);

    let mut beacon = Beacon::new(0, 0.0, 0.0, GLOBE_RADIUS);
    for i in 0..50 {
        beacon.pulse(i as f32 * 0.137);
        let [a, b] = beacon.rings;
        for r in [a, b] {
            assert!((1.0..=2.0).contains(&r.scale));
            assert!((0.0..=1.0).contains(&r.opacity));
            assert!((r.scale + r.opacity - 2.0).abs() < 1e-5);
        }
        // half a cycle apart: when one ring is large the other is small
        assert!((a.scale + b.scale - 3.0).abs() < 1e-4);
    }
}

#[test]
fn beacons_face_the_camera() {
    let mut beacon = Beacon::new(0, 35.0, 139.0, GLOBE_RADIUS);
    for eye in [INITIAL_CAMERA_EYE, Vec3::new(-20.0, 3.0, 1.0), Vec3::new(0.0, 40.0, 0.0)] {
        beacon.face(eye);
        let facing = beacon.rotation * Vec3::Z;
        let want = (eye - beacon.position).normalize();
        assert!(facing.abs_diff_eq(want, 1e-4), "{:?} vs {:?}", facing, want);
    }
}

#[test]
fn hover_enlarges_and_switches_exclusively() {
    let mut globe = two_spot_globe();
    globe.tick(0.0, None);
    let front = ndc_of(&globe, 0);
    let side = ndc_of(&globe, 1);

    let out = globe.tick(0.0, Some(front));
    assert_eq!(out.cursor, Some(Cursor::Pointer));
    assert_eq!(globe.interaction.hovered(), Some(0));

    globe.tick(0.3, Some(front));
    assert_eq!(globe.beacons[0].scale, HOVER_SCALE);

    let out = globe.tick(1.0, Some(side));
    assert_eq!(out.cursor, None);
    assert_eq!(globe.interaction.hovered(), Some(1));

    globe.tick(2.0, Some(side));
    assert_eq!(globe.beacons[0].scale, IDLE_SCALE);
    assert_eq!(globe.beacons[1].scale, HOVER_SCALE);

    let out = globe.tick(3.0, None);
    assert_eq!(out.cursor, Some(Cursor::Default));
    assert_eq!(globe.interaction.hovered(), None);
    globe.tick(4.0, None);
    assert_eq!(globe.beacons[1].scale, IDLE_SCALE);
}

#[test]
fn stacked_beacons_hover_only_one() {
    let mut globe = GlobeState::new(
        vec![spot("A", facing_lat(), -90.0), spot("B", facing_lat(), -90.0)],
        1.0,
    );
    globe.tick(0.0, Some(Vec2::ZERO));
    assert_eq!(globe.interaction.hovered(), Some(0));
    globe.tick(1.0, Some(Vec2::ZERO));
    assert_eq!(globe.beacons[0].scale, HOVER_SCALE);
    assert_eq!(globe.beacons[1].scale, IDLE_SCALE);
}

#[test]
fn click_selects_and_flies_out_along_the_radial() {
    let mut globe = two_spot_globe();
    globe.tick(0.0, Some(Vec2::ZERO));
    assert_eq!(globe.click(0.5), ClickOutcome::Selected(0));
    assert_eq!(globe.selected_spot().map(|s| s.name.as_str()), Some("Front"));
    assert!(globe.tweens.is_animating(TweenTarget::CameraEye));

    globe.tick(1.0, None);
    assert_ne!(globe.camera.eye, INITIAL_CAMERA_EYE);

    globe.tick(0.5 + FLY_TO_SEC, None);
    let dest = globe.beacons[0].position * FLY_TO_DISTANCE_FACTOR;
    assert_eq!(globe.camera.eye, dest);
    assert_eq!(globe.controls.target, INITIAL_ORBIT_TARGET);
    assert!(!globe.tweens.is_animating(TweenTarget::CameraEye));
    // the panel stays up after the pointer leaves
    assert_eq!(globe.interaction.selected(), Some(0));
}

#[test]
fn flying_to_a_pole_keeps_the_camera_usable() {
    for lat in [90.0, -90.0] {
        let mut globe = GlobeState::new(vec![spot("Pole", lat, 0.0)], 1.0);
        globe.tick(0.0, None);
        let ndc = ndc_of(&globe, 0);
        globe.tick(0.0, Some(ndc));
        assert_eq!(globe.click(0.0), ClickOutcome::Selected(0));

        globe.tick(FLY_TO_SEC + 0.1, None);
        let eye = globe.camera.eye;
        assert!(eye.is_finite());
        assert!((eye.length() - GLOBE_RADIUS * FLY_TO_DISTANCE_FACTOR).abs() < 1e-3);
        assert!(eye.y.signum() == lat.signum());
        assert!(globe.view_proj().is_finite(), "lat {}: {:?}", lat, eye);

        // the beacon under the screen centre can still be picked
        globe.tick(FLY_TO_SEC + 0.2, Some(Vec2::ZERO));
        assert_eq!(globe.interaction.hovered(), Some(0));
    }
}

#[test]
fn click_on_empty_space_dismisses_without_moving() {
    let mut globe = two_spot_globe();
    globe.tick(0.0, Some(Vec2::ZERO));
    globe.click(0.1);
    globe.tick(2.0, Some(Vec2::new(0.9, -0.9)));
    let eye = globe.camera.eye;

    assert_eq!(globe.click(2.0), ClickOutcome::Dismissed);
    assert_eq!(globe.selected_spot(), None);
    assert!(!globe.tweens.is_animating(TweenTarget::CameraEye));
    globe.tick(3.0, None);
    assert_eq!(globe.camera.eye, eye);
}

#[test]
fn reset_returns_exactly_to_startup_view() {
    let mut globe = two_spot_globe();
    globe.tick(0.0, Some(Vec2::ZERO));
    globe.click(0.0);
    globe.controls.rotate_by_pixels(40.0, 10.0, 600.0);
    // let the drag's damping run out
    for i in 1..=500 {
        globe.tick(i as f32 * 0.01, None);
    }
    assert!(!globe.controls.has_pending_motion());
    assert_ne!(globe.camera.eye, INITIAL_CAMERA_EYE);

    globe.reset(5.0);
    assert_eq!(globe.interaction.selected(), None);
    globe.tick(5.0 + RESET_SEC, None);
    assert_eq!(globe.camera.eye, INITIAL_CAMERA_EYE);
    assert_eq!(globe.controls.target, INITIAL_ORBIT_TARGET);
}

#[test]
fn reset_overrides_a_flight_in_progress() {
    let mut globe = two_spot_globe();
    globe.tick(0.0, Some(Vec2::ZERO));
    globe.click(0.0);
    globe.tick(0.5, None);
    globe.reset(0.5);
    globe.tick(0.5 + FLY_TO_SEC, None);
    globe.tick(0.5 + RESET_SEC, None);
    assert_eq!(globe.camera.eye, INITIAL_CAMERA_EYE);
}

#[test]
fn close_hides_panel_and_keeps_camera() {
    let mut globe = two_spot_globe();
    globe.tick(0.0, Some(Vec2::ZERO));
    globe.click(0.0);
    globe.tick(FLY_TO_SEC, None);
    let eye = globe.camera.eye;

    globe.close();
    assert_eq!(globe.selected_spot(), None);
    globe.tick(FLY_TO_SEC + 1.0, None);
    assert_eq!(globe.camera.eye, eye);
}

#[test]
fn empty_globe_still_ticks() {
    let mut globe = GlobeState::new(Vec::new(), 1.5);
    assert!(globe.beacons.is_empty());
    let out = globe.tick(0.0, Some(Vec2::ZERO));
    assert_eq!(out.cursor, None);
    assert_eq!(globe.click(0.0), ClickOutcome::Dismissed);
}

#[test]
fn interaction_reports_cursor_changes_only_once() {
    let mut state = Interaction::default();
    let first = state.update_hover(Some(2));
    assert_eq!(first.entered, Some(2));
    assert_eq!(first.cursor, Some(Cursor::Pointer));
    assert_eq!(state.update_hover(Some(2)), Default::default());

    let switch = state.update_hover(Some(3));
    assert_eq!((switch.left, switch.entered, switch.cursor), (Some(2), Some(3), None));

    assert_eq!(state.click(), ClickOutcome::Selected(3));
    state.dismiss();
    assert_eq!(state.selected(), None);
    assert_eq!(Cursor::Pointer.css(), "pointer");
    assert_eq!(Cursor::Default.css(), "default");
}
