use super::camera::Ray;
use glam::Vec3;

/// A flat circular hit target.
#[derive(Clone, Copy, Debug)]
pub struct Disc {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
}

/// Distance along `ray` to `disc`, hitting either face.
#[inline]
pub fn ray_disc(ray: &Ray, disc: &Disc) -> Option<f32> {
    let denom = disc.normal.dot(ray.dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (disc.center - ray.origin).dot(disc.normal) / denom;
    if t < 0.0 {
        return None;
    }
    let hit = ray.origin + ray.dir * t;
    ((hit - disc.center).length_squared() <= disc.radius * disc.radius).then_some(t)
}

/// Index of the disc hit closest to the ray origin.
pub fn nearest_hit<I>(ray: &Ray, discs: I) -> Option<(usize, f32)>
where
    I: IntoIterator<Item = Disc>,
{
    let mut best = None::<(usize, f32)>;
    for (i, disc) in discs.into_iter().enumerate() {
        if let Some(t) = ray_disc(ray, &disc) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best
}
