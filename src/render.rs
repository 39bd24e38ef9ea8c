use crate::constants::{
    AMBIENT_INTENSITY, BUMP_SCALE, CLOUD_OPACITY, SHININESS, SPECULAR_STRENGTH,
    SPHERE_HEIGHT_SEGMENTS, SPHERE_WIDTH_SEGMENTS, SUN_INTENSITY, SUN_POSITION,
};
use crate::core::{GlobeState, SphereMesh, CLOUD_RADIUS, GLOBE_RADIUS};
use glam::Vec3;
use web_sys as web;

mod beacons;
mod globe;
mod helpers;
mod stars;
mod targets;
pub mod textures;

use beacons::{pack_instances, BeaconInstance, QUADS_PER_BEACON};
use globe::{create_material, create_material_layout, SphereBuffers, SphereVertex};
use helpers::{make_pipeline, uniform_layout_entry, PipelineSpec};
use stars::{star_layout, Starfield};
use targets::RenderTargets;
use textures::TextureSlot;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light: [f32; 4],
    params: [f32; 4],
    bump: [f32; 4],
}

struct SlotTexture {
    // kept alive for the view
    _tex: wgpu::Texture,
    view: wgpu::TextureView,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    material_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    surface_tex: SlotTexture,
    specular_tex: SlotTexture,
    clouds_tex: SlotTexture,
    bump_tex: SlotTexture,
    globe_material: wgpu::BindGroup,
    clouds_material: wgpu::BindGroup,

    stars_pipeline: wgpu::RenderPipeline,
    globe_pipeline: wgpu::RenderPipeline,
    clouds_pipeline: wgpu::RenderPipeline,
    beacon_pipeline: wgpu::RenderPipeline,

    globe_mesh: SphereBuffers,
    cloud_mesh: SphereBuffers,
    starfield: Starfield,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<BeaconInstance>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, beacon_count: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let targets = RenderTargets::new(&device, width, height);

        // Shared per-frame uniforms (group 0 of every pipeline)
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Materials start on 1x1 fallbacks; images replace them as they arrive
        let material_layout = create_material_layout(&device);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let fallback = |slot| {
            let (tex, view) = textures::create_fallback(&device, &queue, slot);
            SlotTexture { _tex: tex, view }
        };
        let surface_tex = fallback(TextureSlot::Surface);
        let specular_tex = fallback(TextureSlot::Specular);
        let clouds_tex = fallback(TextureSlot::Clouds);
        let bump_tex = fallback(TextureSlot::Bump);
        let globe_material = create_material(
            &device,
            &material_layout,
            "globe_material",
            &surface_tex.view,
            &sampler,
            &specular_tex.view,
            &bump_tex.view,
        );
        let clouds_material = create_material(
            &device,
            &material_layout,
            "clouds_material",
            &clouds_tex.view,
            &sampler,
            &specular_tex.view,
            &bump_tex.view,
        );

        // Pipelines
        let sphere_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::GLOBE_WGSL.into()),
        });
        let beacon_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("beacon_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::BEACON_WGSL.into()),
        });
        let stars_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stars_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::STARS_WGSL.into()),
        });
        let pl_sphere = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_sphere"),
            bind_group_layouts: &[&globals_layout, &material_layout],
            push_constant_ranges: &[],
        });
        let pl_globals = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_globals"),
            bind_group_layouts: &[&globals_layout],
            push_constant_ranges: &[],
        });
        let sphere_buffers = [SphereVertex::layout()];
        let stars_pipeline = make_pipeline(
            &device,
            PipelineSpec {
                label: "stars_pipeline",
                layout: &pl_globals,
                shader: &stars_shader,
                vs_entry: "vs_stars",
                fs_entry: "fs_stars",
                buffers: &[star_layout()],
                topology: wgpu::PrimitiveTopology::PointList,
                color_format: format,
                blend: None,
                depth_write: false,
            },
        );
        let globe_pipeline = make_pipeline(
            &device,
            PipelineSpec {
                label: "globe_pipeline",
                layout: &pl_sphere,
                shader: &sphere_shader,
                vs_entry: "vs_sphere",
                fs_entry: "fs_globe",
                buffers: &sphere_buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format: format,
                blend: None,
                depth_write: true,
            },
        );
        let clouds_pipeline = make_pipeline(
            &device,
            PipelineSpec {
                label: "clouds_pipeline",
                layout: &pl_sphere,
                shader: &sphere_shader,
                vs_entry: "vs_sphere",
                fs_entry: "fs_clouds",
                buffers: &sphere_buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format: format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );
        let beacon_pipeline = make_pipeline(
            &device,
            PipelineSpec {
                label: "beacon_pipeline",
                layout: &pl_globals,
                shader: &beacon_shader,
                vs_entry: "vs_beacon",
                fs_entry: "fs_beacon",
                buffers: &[BeaconInstance::layout()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format: format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );

        // Geometry
        let globe_mesh = SphereBuffers::new(
            &device,
            "globe_mesh",
            &SphereMesh::uv_sphere(GLOBE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS),
        );
        let cloud_mesh = SphereBuffers::new(
            &device,
            "cloud_mesh",
            &SphereMesh::uv_sphere(CLOUD_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS),
        );
        let starfield = Starfield::new(&device);
        let instance_capacity = (beacon_count * QUADS_PER_BEACON).max(1);
        let instance_buffer = create_instance_buffer(&device, instance_capacity);

        log::info!(
            "[gpu] {}x{} {:?}, {} beacon quads",
            width,
            height,
            format,
            instance_capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            globals_buffer,
            globals_bg,
            material_layout,
            sampler,
            surface_tex,
            specular_tex,
            clouds_tex,
            bump_tex,
            globe_material,
            clouds_material,
            stars_pipeline,
            globe_pipeline,
            clouds_pipeline,
            beacon_pipeline,
            globe_mesh,
            cloud_mesh,
            starfield,
            instance_buffer,
            instance_capacity,
            instances: Vec::with_capacity(instance_capacity),
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Swap a decoded image in for the fallback texture of `slot`.
    pub fn upload_texture(&mut self, slot: TextureSlot, bitmap: web::ImageBitmap) {
        let (tex, view) = textures::upload_bitmap(&self.device, &self.queue, slot, bitmap);
        let loaded = SlotTexture { _tex: tex, view };
        match slot {
            TextureSlot::Surface => self.surface_tex = loaded,
            TextureSlot::Specular => self.specular_tex = loaded,
            TextureSlot::Clouds => self.clouds_tex = loaded,
            TextureSlot::Bump => self.bump_tex = loaded,
        }
        self.rebuild_materials();
        log::info!("[texture] {:?} loaded", slot);
    }

    pub fn render(&mut self, state: &GlobeState) -> Result<(), wgpu::SurfaceError> {
        let eye = state.camera.eye;
        let sun = Vec3::from_array(SUN_POSITION).normalize();
        let globals = Globals {
            view_proj: state.view_proj().to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            light: [sun.x, sun.y, sun.z, SUN_INTENSITY],
            params: [AMBIENT_INTENSITY, SHININESS, CLOUD_OPACITY, SPECULAR_STRENGTH],
            bump: [BUMP_SCALE, GLOBE_RADIUS, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        pack_instances(&state.beacons, &mut self.instances);
        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len();
            self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
        }
        if !self.instances.is_empty() {
            self.queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&self.instances),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            rpass.set_pipeline(&self.stars_pipeline);
            rpass.set_vertex_buffer(0, self.starfield.vertices.slice(..));
            rpass.draw(0..self.starfield.count, 0..1);

            rpass.set_pipeline(&self.globe_pipeline);
            rpass.set_bind_group(1, &self.globe_material, &[]);
            self.globe_mesh.draw(&mut rpass);

            rpass.set_pipeline(&self.clouds_pipeline);
            rpass.set_bind_group(1, &self.clouds_material, &[]);
            self.cloud_mesh.draw(&mut rpass);

            if !self.instances.is_empty() {
                rpass.set_pipeline(&self.beacon_pipeline);
                rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
                rpass.draw(0..6, 0..self.instances.len() as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> GpuState<'a> {
    fn rebuild_materials(&mut self) {
        self.globe_material = create_material(
            &self.device,
            &self.material_layout,
            "globe_material",
            &self.surface_tex.view,
            &self.sampler,
            &self.specular_tex.view,
            &self.bump_tex.view,
        );
        self.clouds_material = create_material(
            &self.device,
            &self.material_layout,
            "clouds_material",
            &self.clouds_tex.view,
            &self.sampler,
            &self.specular_tex.view,
            &self.bump_tex.view,
        );
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("beacon_instances"),
        size: (capacity.max(1) * std::mem::size_of::<BeaconInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
