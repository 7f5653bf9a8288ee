use std::marker::PhantomData;

use anyhow::{Context, Result};
use bytemuck::Pod;

use super::{RenderCtx, Texture};

/// Pipeline description for a [`TexturedProgram`].
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    /// WGSL source with `vs_main` / `fs_main` entry points.
    pub source: &'a str,
    /// Vertex buffer layouts, slot 0 first.
    pub vertex_layouts: &'a [wgpu::VertexBufferLayout<'a>],
    pub textures: [&'a Texture; 2],
    /// Enables depth test + write against the frame depth buffer.
    pub depth_test: bool,
}

/// Render pipeline sampling two textures, driven by one uniform block `U`.
///
/// Bind group 0 layout:
/// - 0: uniform `U` (vertex + fragment)
/// - 1: first texture, 2: its sampler
/// - 3: second texture, 4: its sampler
pub struct TexturedProgram<U: Pod> {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    depth_test: bool,
    _uniform: PhantomData<U>,
}

impl<U: Pod> TexturedProgram<U> {
    pub fn new(ctx: &RenderCtx<'_>, desc: ProgramDesc<'_>) -> Result<Self> {
        let uniform_size = std::mem::size_of::<U>() as u64;
        anyhow::ensure!(
            uniform_size % 16 == 0,
            "{}: uniform block is {uniform_size} bytes, expected a multiple of 16",
            desc.label
        );
        let min_binding_size =
            wgpu::BufferSize::new(uniform_size).context("uniform block must not be empty")?;

        let depth_stencil = if desc.depth_test {
            let format = ctx
                .depth_format
                .with_context(|| format!("{}: depth test requested without a depth buffer", desc.label))?;
            Some(wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            })
        } else {
            None
        };

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.label),
            source: wgpu::ShaderSource::Wgsl(desc.source.into()),
        });

        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(desc.label),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(min_binding_size),
                    },
                    count: None,
                },
                texture_entry(1),
                sampler_entry(2),
                texture_entry(3),
                sampler_entry(4),
            ],
        });

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(desc.label),
            size: uniform_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let [tex1, tex2] = desc.textures;
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(desc.label),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(tex1.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(tex1.sampler()),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(tex2.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(tex2.sampler()),
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(desc.label),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: desc.vertex_layouts,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("created program {}", desc.label);

        Ok(Self {
            pipeline,
            bind_group,
            uniform_buffer,
            depth_test: desc.depth_test,
            _uniform: PhantomData,
        })
    }

    /// Whether passes using this program need the depth attachment.
    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    /// Uploads the uniform block; takes effect for draws submitted after it.
    pub fn set_uniforms(&self, queue: &wgpu::Queue, uniforms: &U) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Makes this program current on `pass`.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
    }
}
