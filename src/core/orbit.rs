use super::constants::{
    INITIAL_ORBIT_TARGET, ORBIT_DAMPING, ORBIT_EPS, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP,
};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Damped orbit controls: rotate around `target` and dolly in/out.
/// Panning is not supported, so the target only moves when tweened.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    delta_theta: f32,
    delta_phi: f32,
    zoom_scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: INITIAL_ORBIT_TARGET,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_speed: ORBIT_ROTATE_SPEED,
            delta_theta: 0.0,
            delta_phi: 0.0,
            zoom_scale: 1.0,
        }
    }
}

impl OrbitControls {
    /// Accumulate a drag of `dx`,`dy` CSS pixels on a viewport `viewport_h` tall.
    /// A drag across the full height turns the camera once around.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_h: f32) {
        let h = viewport_h.max(1.0);
        self.delta_theta -= TAU * dx / h * self.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.rotate_speed;
    }

    /// Wheel input: negative `delta_y` moves closer.
    pub fn dolly(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.zoom_scale *= ORBIT_ZOOM_STEP;
        } else if delta_y > 0.0 {
            self.zoom_scale /= ORBIT_ZOOM_STEP;
        }
    }

    pub fn has_pending_motion(&self) -> bool {
        self.delta_theta != 0.0 || self.delta_phi != 0.0 || self.zoom_scale != 1.0
    }

    /// Apply damped motion to `eye`. Returns true when the eye moved.
    /// With no pending motion, the eye inside the distance range and off the
    /// poles, `eye` is left untouched. An eye on the polar axis is always
    /// nudged off it so the view keeps a usable up vector.
    pub fn update(&mut self, eye: &mut Vec3) -> bool {
        let offset = *eye - self.target;
        let radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        let in_range = radius >= self.min_distance && radius <= self.max_distance;
        let off_pole = (ORBIT_EPS..=PI - ORBIT_EPS).contains(&phi);
        if !self.has_pending_motion() && in_range && off_pole {
            return false;
        }

        theta += self.delta_theta * self.damping;
        phi += self.delta_phi * self.damping;
        phi = phi.clamp(ORBIT_EPS, PI - ORBIT_EPS);

        let new_radius = (radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);

        let next = self.target
            + Vec3::new(
                new_radius * phi.sin() * theta.sin(),
                new_radius * phi.cos(),
                new_radius * phi.sin() * theta.cos(),
            );

        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;
        if self.delta_theta.abs() < ORBIT_EPS {
            self.delta_theta = 0.0;
        }
        if self.delta_phi.abs() < ORBIT_EPS {
            self.delta_phi = 0.0;
        }
        self.zoom_scale = 1.0;

        let moved = (next - *eye).length_squared() > ORBIT_EPS;
        *eye = next;
        moved
    }
}
