use super::helpers;
use super::targets::{RenderTargets, HDR_FORMAT};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) ambient: f32,
    pub(crate) blur_dir: [f32; 2],
    pub(crate) bloom_strength: f32,
    pub(crate) threshold: f32,
}

/// Bright pass, separable blur and composite.
///
/// Each pass that needs different uniforms gets its own buffer; writes to a
/// single buffer would all land before the encoder is submitted.
pub(crate) struct PostChain {
    bgl0: wgpu::BindGroupLayout,
    bgl1: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    base_uniforms: wgpu::Buffer,
    blur_h_uniforms: wgpu::Buffer,
    blur_v_uniforms: wgpu::Buffer,
    bg_hdr: wgpu::BindGroup,
    bg_blur_h: wgpu::BindGroup,
    bg_blur_v: wgpu::BindGroup,
    bg_bloom: wgpu::BindGroup,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
}

struct PostBindGroups {
    hdr: wgpu::BindGroup,
    blur_h: wgpu::BindGroup,
    blur_v: wgpu::BindGroup,
    bloom: wgpu::BindGroup,
}

impl PostChain {
    pub(crate) fn new(
        device: &wgpu::Device,
        targets: &RenderTargets,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(galaxy_core::POST_WGSL.into()),
        });
        let sampler = helpers::linear_sampler(device, "post_sampler");
        let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl0"),
            entries: &[
                helpers::texture_entry(0),
                helpers::sampler_entry(1),
                helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl1"),
            entries: &[helpers::texture_entry(0), helpers::sampler_entry(1)],
        });
        let single_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("post_pl_single"),
            bind_group_layouts: &[&bgl0],
            push_constant_ranges: &[],
        });
        let dual_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("post_pl_dual"),
            bind_group_layouts: &[&bgl0, &bgl1],
            push_constant_ranges: &[],
        });
        let bright_pipeline = helpers::make_post_pipeline(
            device,
            "bright_pipeline",
            &single_pl,
            &shader,
            "fs_bright",
            HDR_FORMAT,
            None,
        );
        let blur_pipeline = helpers::make_post_pipeline(
            device,
            "blur_pipeline",
            &single_pl,
            &shader,
            "fs_blur",
            HDR_FORMAT,
            None,
        );
        let composite_pipeline = helpers::make_post_pipeline(
            device,
            "composite_pipeline",
            &dual_pl,
            &shader,
            "fs_composite",
            surface_format,
            None,
        );

        let make_uniforms = |label: &str| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<PostUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let base_uniforms = make_uniforms("post_uniforms");
        let blur_h_uniforms = make_uniforms("blur_h_uniforms");
        let blur_v_uniforms = make_uniforms("blur_v_uniforms");

        let groups = Self::create_bind_groups(
            device,
            &bgl0,
            &bgl1,
            &sampler,
            [&base_uniforms, &blur_h_uniforms, &blur_v_uniforms],
            targets,
        );

        Self {
            bgl0,
            bgl1,
            sampler,
            base_uniforms,
            blur_h_uniforms,
            blur_v_uniforms,
            bg_hdr: groups.hdr,
            bg_blur_h: groups.blur_h,
            bg_blur_v: groups.blur_v,
            bg_bloom: groups.bloom,
            bright_pipeline,
            blur_pipeline,
            composite_pipeline,
        }
    }

    fn create_bind_groups(
        device: &wgpu::Device,
        bgl0: &wgpu::BindGroupLayout,
        bgl1: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        uniforms: [&wgpu::Buffer; 3],
        targets: &RenderTargets,
    ) -> PostBindGroups {
        let with_uniforms = |label: &str, view: &wgpu::TextureView, buf: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: bgl0,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: buf.as_entire_binding(),
                    },
                ],
            })
        };
        let [base, blur_h, blur_v] = uniforms;
        PostBindGroups {
            hdr: with_uniforms("bg_hdr", &targets.hdr_view, base),
            // bloom_a -> bloom_b horizontally, then back vertically
            blur_h: with_uniforms("bg_blur_h", &targets.bloom_a_view, blur_h),
            blur_v: with_uniforms("bg_blur_v", &targets.bloom_b_view, blur_v),
            bloom: device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("bg_bloom"),
                layout: bgl1,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            }),
        }
    }

    /// Must be called after the render targets were recreated.
    pub(crate) fn rebuild_bind_groups(&mut self, device: &wgpu::Device, targets: &RenderTargets) {
        let groups = Self::create_bind_groups(
            device,
            &self.bgl0,
            &self.bgl1,
            &self.sampler,
            [
                &self.base_uniforms,
                &self.blur_h_uniforms,
                &self.blur_v_uniforms,
            ],
            targets,
        );
        self.bg_hdr = groups.hdr;
        self.bg_blur_h = groups.blur_h;
        self.bg_blur_v = groups.blur_v;
        self.bg_bloom = groups.bloom;
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, base: PostUniforms) {
        queue.write_buffer(&self.base_uniforms, 0, bytemuck::bytes_of(&base));
        let h = PostUniforms {
            blur_dir: [1.0, 0.0],
            ..base
        };
        queue.write_buffer(&self.blur_h_uniforms, 0, bytemuck::bytes_of(&h));
        let v = PostUniforms {
            blur_dir: [0.0, 1.0],
            ..base
        };
        queue.write_buffer(&self.blur_v_uniforms, 0, bytemuck::bytes_of(&v));
    }

    /// Encode bright, blur H, blur V and composite into `output`.
    pub(crate) fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        output: &wgpu::TextureView,
    ) {
        blit(
            encoder,
            "bright_pass",
            &targets.bloom_a_view,
            &self.bright_pipeline,
            &self.bg_hdr,
            None,
        );
        blit(
            encoder,
            "blur_h",
            &targets.bloom_b_view,
            &self.blur_pipeline,
            &self.bg_blur_h,
            None,
        );
        blit(
            encoder,
            "blur_v",
            &targets.bloom_a_view,
            &self.blur_pipeline,
            &self.bg_blur_v,
            None,
        );
        blit(
            encoder,
            "composite",
            output,
            &self.composite_pipeline,
            &self.bg_hdr,
            Some(&self.bg_bloom),
        );
    }
}

fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
