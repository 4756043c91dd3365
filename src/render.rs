mod cards;
mod helpers;
mod post;
mod targets;

pub use cards::CardInstance;

use crate::atlas::Atlas;
use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD};
use cards::{CardUniforms, CardsResources};
use galaxy_core::BACKGROUND_RGB;
use glam::{Mat4, Vec3};
use post::{PostChain, PostUniforms};
use targets::{RenderTargets, HDR_FORMAT};
use web_sys as web;

/// Per-frame camera inputs for the card pass.
pub struct SceneView {
    pub view_proj: Mat4,
    /// Parallax rig transform applied to rigged instances.
    pub group: Mat4,
    pub cam_right: Vec3,
    pub cam_up: Vec3,
}

// The scene target is linear; the sRGB surface encodes on present.
fn srgb_to_linear(c: f32) -> f64 {
    let c = c as f64;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    cards: CardsResources,
    post: PostChain,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
    ambient_energy: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    // Default limits avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
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
        let cards = CardsResources::new(&device, &queue, HDR_FORMAT);
        let post = PostChain::new(&device, &targets, format);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let [r, g, b] = BACKGROUND_RGB;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            cards,
            post,
            width,
            height,
            clear_color: wgpu::Color {
                r: srgb_to_linear(r),
                g: srgb_to_linear(g),
                b: srgb_to_linear(b),
                a: 1.0,
            },
            time_accum: 0.0,
            ambient_energy: 0.0,
        })
    }

    pub fn upload_atlas(&mut self, atlas: &Atlas) {
        self.cards.upload_atlas(
            &self.device,
            &self.queue,
            atlas.width,
            atlas.height,
            &atlas.pixels,
        );
        log::info!("[gpu] atlas uploaded {}x{}", atlas.width, atlas.height);
    }

    /// Overall music energy in [0, 1]; scales the bloom.
    pub fn set_ambient(&mut self, energy01: f32) {
        self.ambient_energy = energy01.clamp(0.0, 1.0);
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
            self.post.rebuild_bind_groups(&self.device, &self.targets);
        }
    }

    /// Configure the surface again after it was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        scene: &SceneView,
        instances: &[CardInstance],
        delta_sec: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += delta_sec;
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = CardUniforms {
            view_proj: scene.view_proj.to_cols_array_2d(),
            group: scene.group.to_cols_array_2d(),
            cam_right: scene.cam_right.extend(0.0).to_array(),
            cam_up: scene.cam_up.extend(0.0).to_array(),
        };
        self.queue
            .write_buffer(&self.cards.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.cards
            .write_instances(&self.device, &self.queue, instances);

        let (bw, bh) = RenderTargets::bloom_size(self.width, self.height);
        self.post.write_uniforms(
            &self.queue,
            PostUniforms {
                resolution: [bw as f32, bh as f32],
                time: self.time_accum,
                ambient: self.ambient_energy,
                blur_dir: [0.0, 0.0],
                bloom_strength: BLOOM_STRENGTH,
                threshold: BLOOM_THRESHOLD,
            },
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if !instances.is_empty() {
                rpass.set_pipeline(&self.cards.pipeline);
                rpass.set_bind_group(0, &self.cards.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.cards.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.cards.instance_vb.slice(..));
                rpass.draw(0..6, 0..instances.len() as u32);
            }
        }
        self.post.encode(&mut encoder, &self.targets, &view);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
