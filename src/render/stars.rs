use crate::constants::{STAR_COUNT, STAR_SEED};
use crate::core::{random_sphere_points, STARFIELD_RADIUS};
use wgpu::util::DeviceExt;

const STAR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

pub(crate) fn star_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (std::mem::size_of::<f32>() * 3) as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &STAR_ATTRS,
    }
}

pub(crate) struct Starfield {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) count: u32,
}

impl Starfield {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let points: Vec<[f32; 3]> = random_sphere_points(STAR_COUNT, STARFIELD_RADIUS, STAR_SEED)
            .into_iter()
            .map(|p| p.to_array())
            .collect();
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stars_vb"),
            contents: bytemuck::cast_slice(&points),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertices,
            count: points.len() as u32,
        }
    }
}
