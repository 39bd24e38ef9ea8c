use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

/// Map a latitude/longitude pair (degrees) onto a sphere of `radius`.
///
/// The polar axis is +Y and longitude -180 lies on the texture's left edge,
/// matching the UV layout produced by [`SphereMesh::uv_sphere`].
#[inline]
pub fn lat_lon_to_vec3(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    Vec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Indexed triangle mesh of a sphere with equirectangular UVs.
#[derive(Clone, Debug, Default)]
pub struct SphereMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Rows run from the north pole (v = 0) to the south pole (v = 1); columns
    /// wrap once around the axis with a duplicated seam column.
    pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let width_segments = width_segments.max(3);
        let height_segments = height_segments.max(2);
        let stride = width_segments + 1;
        let vertex_count = (stride * (height_segments + 1)) as usize;

        let mut mesh = SphereMesh {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity((width_segments * height_segments * 6) as usize),
        };

        for iy in 0..=height_segments {
            let v = iy as f32 / height_segments as f32;
            let polar = v * PI;
            for ix in 0..=width_segments {
                let u = ix as f32 / width_segments as f32;
                let azimuth = u * TAU;
                let n = Vec3::new(
                    -azimuth.cos() * polar.sin(),
                    polar.cos(),
                    azimuth.sin() * polar.sin(),
                );
                mesh.positions.push(n * radius);
                mesh.normals.push(n);
                mesh.uvs.push(Vec2::new(u, v));
            }
        }

        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = iy * stride + ix;
                let b = a + 1;
                let c = a + stride;
                let d = c + 1;
                // degenerate pole triangles are skipped
                if iy != 0 {
                    mesh.indices.extend_from_slice(&[a, c, b]);
                }
                if iy != height_segments - 1 {
                    mesh.indices.extend_from_slice(&[b, c, d]);
                }
            }
        }
        mesh
    }
}

/// Deterministic, uniformly distributed points on a sphere shell.
pub fn random_sphere_points(count: usize, radius: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let y: f32 = rng.gen_range(-1.0..=1.0);
            let azimuth: f32 = rng.gen_range(0.0..TAU);
            let ring = (1.0 - y * y).max(0.0).sqrt();
            Vec3::new(ring * azimuth.cos(), y, ring * azimuth.sin()) * radius
        })
        .collect()
}
