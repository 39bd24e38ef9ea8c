use crate::core::{
    Beacon, BEACON_COLOR, CORE_RADIUS, RING_INNER_RADIUS, RING_OUTER_RADIUS,
};
use glam::{Mat4, Vec3};

/// Per-instance data for one camera-facing quad (a core disc or a ring).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BeaconInstance {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    radii: [f32; 4],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    0 => Float32x4,
    1 => Float32x4,
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4
];

pub(crate) const QUADS_PER_BEACON: usize = 3;

impl BeaconInstance {
    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BeaconInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        }
    }

    fn new(model: Mat4, alpha: f32, inner: f32, outer: f32) -> Self {
        let [r, g, b] = BEACON_COLOR;
        Self {
            model: model.to_cols_array_2d(),
            color: [r, g, b, alpha.clamp(0.0, 1.0)],
            radii: [inner, outer, 0.0, 0.0],
        }
    }
}

/// Core disc followed by both rings, in that order, for every beacon.
pub(crate) fn pack_instances(beacons: &[Beacon], out: &mut Vec<BeaconInstance>) {
    out.clear();
    for b in beacons {
        let group = b.model();
        out.push(BeaconInstance::new(group, 1.0, 0.0, CORE_RADIUS));
        for ring in &b.rings {
            let model = group * Mat4::from_scale(Vec3::splat(ring.scale));
            out.push(BeaconInstance::new(
                model,
                ring.opacity,
                RING_INNER_RADIUS,
                RING_OUTER_RADIUS,
            ));
        }
    }
}
