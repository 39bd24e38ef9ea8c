use super::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, INITIAL_CAMERA_EYE};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// World-space ray with a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Perspective camera looking at an externally owned target (the orbit target).
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: INITIAL_CAMERA_EYE,
            fov_y_deg: CAMERA_FOV_DEG,
            aspect: sanitize_aspect(aspect),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    /// World +Y is up unless the camera looks straight along it.
    pub fn view(&self, target: Vec3) -> Mat4 {
        let forward = (target - self.eye).normalize_or_zero();
        let up = if forward.cross(Vec3::Y).length_squared() < 1e-10 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(self.eye, target, up)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self, target: Vec3) -> Mat4 {
        self.projection() * self.view(target)
    }

    /// Ray from the eye through a point given in normalized device coordinates
    /// (x right, y up, both in -1..1).
    pub fn ray_from_ndc(&self, ndc: Vec2, target: Vec3) -> Ray {
        let inv = self.view_proj(target).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize_or_zero(),
        }
    }
}

#[inline]
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
