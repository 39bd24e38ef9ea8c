// Host-side tests for ray construction and disc hit-testing.

mod common;

use common::approx_eq;
use common::core::camera::{Camera, Ray};
use common::core::constants::*;
use common::core::pick::*;
use glam::{Vec2, Vec3};

fn facing_disc(z: f32, radius: f32) -> Disc {
    Disc {
        center: Vec3::new(0.0, 0.0, z),
        normal: Vec3::Z,
        radius,
    }
}

fn down_the_z_axis() -> Ray {
    Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        dir: -Vec3::Z,
    }
}

#[test]
fn ray_hits_disc_in_front() {
    let t = ray_disc(&down_the_z_axis(), &facing_disc(0.0, 1.0));
    assert!(matches!(t, Some(t) if approx_eq(t, 5.0)));
}

#[test]
fn ray_hits_disc_from_behind_face() {
    let disc = Disc {
        normal: -Vec3::Z,
        ..facing_disc(0.0, 1.0)
    };
    assert!(ray_disc(&down_the_z_axis(), &disc).is_some());
}

#[test]
fn ray_misses_outside_radius_behind_origin_and_parallel() {
    let offset = Ray {
        origin: Vec3::new(2.0, 0.0, 5.0),
        dir: -Vec3::Z,
    };
    assert_eq!(ray_disc(&offset, &facing_disc(0.0, 1.0)), None);

    assert_eq!(ray_disc(&down_the_z_axis(), &facing_disc(9.0, 1.0)), None);

    let parallel = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        dir: Vec3::X,
    };
    assert_eq!(ray_disc(&parallel, &facing_disc(0.0, 100.0)), None);
}

#[test]
fn nearest_hit_prefers_closest_disc() {
    let discs = [
        facing_disc(-3.0, 1.0),
        facing_disc(2.0, 1.0),
        facing_disc(0.0, 1.0),
    ];
    let (i, t) = nearest_hit(&down_the_z_axis(), discs).expect("hit");
    assert_eq!(i, 1);
    assert!(approx_eq(t, 3.0));
}

#[test]
fn nearest_hit_keeps_first_of_equal_distance() {
    let discs = [facing_disc(0.0, 1.0), facing_disc(0.0, 1.0)];
    let (i, _) = nearest_hit(&down_the_z_axis(), discs).expect("hit");
    assert_eq!(i, 0);
    assert_eq!(nearest_hit(&down_the_z_axis(), Vec::<Disc>::new()), None);
}

#[test]
fn center_of_screen_looks_at_target() {
    let camera = Camera::new(16.0 / 9.0);
    let ray = camera.ray_from_ndc(Vec2::ZERO, INITIAL_ORBIT_TARGET);
    assert_eq!(ray.origin, INITIAL_CAMERA_EYE);
    let expected = (INITIAL_ORBIT_TARGET - INITIAL_CAMERA_EYE).normalize();
    assert!(ray.dir.abs_diff_eq(expected, 1e-4), "{:?}", ray.dir);
}

#[test]
fn screen_edges_map_to_opposite_sides() {
    let camera = Camera::new(1.0);
    let left = camera.ray_from_ndc(Vec2::new(-1.0, 0.0), Vec3::ZERO);
    let right = camera.ray_from_ndc(Vec2::new(1.0, 0.0), Vec3::ZERO);
    assert!(left.dir.x < 0.0 && right.dir.x > 0.0);
    let up = camera.ray_from_ndc(Vec2::new(0.0, 1.0), Vec3::ZERO);
    let down = camera.ray_from_ndc(Vec2::new(0.0, -1.0), Vec3::ZERO);
    assert!(up.dir.y > down.dir.y);
}

#[test]
fn degenerate_aspect_falls_back_to_square() {
    let mut camera = Camera::new(0.0);
    assert_eq!(camera.aspect, 1.0);
    camera.set_aspect(f32::NAN);
    assert_eq!(camera.aspect, 1.0);
    camera.set_aspect(2.0);
    assert_eq!(camera.aspect, 2.0);
}

#[test]
fn looking_straight_down_keeps_a_finite_view() {
    let mut camera = Camera::new(1.0);
    for eye in [Vec3::new(0.0, 20.0, 0.0), Vec3::new(0.0, -20.0, 0.0)] {
        camera.eye = eye;
        assert!(camera.view_proj(Vec3::ZERO).is_finite());
        let ray = camera.ray_from_ndc(Vec2::ZERO, Vec3::ZERO);
        assert!(ray.dir.abs_diff_eq(-eye.normalize(), 1e-4), "{:?}", ray.dir);
    }
}
