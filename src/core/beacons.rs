use super::constants::{CORE_RADIUS, IDLE_SCALE, PULSE_RATE, RING_PHASE_OFFSET};
use super::geo::lat_lon_to_vec3;
use super::pick::Disc;
use super::spots::Spot;
use glam::{Mat3, Mat4, Quat, Vec3};

/// Scale/opacity of one halo ring at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPulse {
    pub scale: f32,
    pub opacity: f32,
}

impl Default for RingPulse {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

/// Ring grows from 1x to 2x while fading out, then shrinks back in.
#[inline]
pub fn ring_pulse(elapsed: f32, phase_offset: f32) -> RingPulse {
    let k = ((elapsed * PULSE_RATE + phase_offset).sin() + 1.0) / 2.0;
    RingPulse {
        scale: 1.0 + k,
        opacity: 1.0 - k,
    }
}

/// Rotation that points the local +Z axis from `position` toward `eye`.
pub fn billboard_rotation(position: Vec3, eye: Vec3) -> Quat {
    let z = (eye - position).normalize_or_zero();
    if z == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let up = if z.cross(Vec3::Y).length_squared() < 1e-8 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

/// Runtime marker for one spot: core disc plus two halo rings.
#[derive(Clone, Debug)]
pub struct Beacon {
    pub spot: usize,
    pub position: Vec3,
    pub scale: f32,
    pub rotation: Quat,
    pub rings: [RingPulse; 2],
}

impl Beacon {
    pub fn new(spot: usize, lat: f32, lon: f32, radius: f32) -> Self {
        Self {
            spot,
            position: lat_lon_to_vec3(lat, lon, radius),
            scale: IDLE_SCALE,
            rotation: Quat::IDENTITY,
            rings: [RingPulse::default(); 2],
        }
    }

    /// Advance both halo rings; the second trails the first by half a cycle.
    pub fn pulse(&mut self, elapsed: f32) {
        self.rings = [
            ring_pulse(elapsed, 0.0),
            ring_pulse(elapsed, RING_PHASE_OFFSET),
        ];
    }

    pub fn face(&mut self, eye: Vec3) {
        self.rotation = billboard_rotation(self.position, eye);
    }

    /// Group transform (translation, billboard rotation, hover scale).
    pub fn model(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }

    /// Hit target for the core disc in its current pose.
    pub fn core_disc(&self) -> Disc {
        Disc {
            center: self.position,
            normal: self.rotation * Vec3::Z,
            radius: CORE_RADIUS * self.scale,
        }
    }
}

/// One beacon per spot, placed on a sphere of `radius`.
pub fn build_beacons(spots: &[Spot], radius: f32) -> Vec<Beacon> {
    spots
        .iter()
        .enumerate()
        .map(|(i, s)| Beacon::new(i, s.lat, s.lon, radius))
        .collect()
}
