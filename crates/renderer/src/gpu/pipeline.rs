use crate::compile::{compile_shader, ShaderBlob};
use crate::types::{SceneVariant, SetupError};

use super::geometry::Vertex;

/// Builds the uniform bind group layout shared by both scene pipelines.
pub(crate) fn uniform_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("uniform layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// The compiled two-stage program bound to the surface pixel format.
pub(crate) struct ScenePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub scene: SceneVariant,
}

impl ScenePipeline {
    /// Compiles `blob` and links it into a render pipeline for `scene`.
    ///
    /// Compile and link failures are fatal; each is reported with the stage
    /// that failed so the host can surface a usable diagnostic.
    pub fn new(
        device: &wgpu::Device,
        uniform_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
        scene: SceneVariant,
        blob: &ShaderBlob,
    ) -> Result<Self, SetupError> {
        let module = compile_shader(device, blob)?;

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene pipeline layout"),
            bind_group_layouts: &[uniform_layout],
            push_constant_ranges: &[],
        });

        // The raymarch variant owns no geometry; its vertex stage synthesizes
        // a full-screen triangle from the vertex index. The cube variant
        // fetches explicit vertices and culls back faces.
        let vertex_buffers: &[wgpu::VertexBufferLayout<'_>] = match scene {
            SceneVariant::Raymarch => &[],
            SceneVariant::Cube => &[Vertex::layout()],
        };
        let cull_mode = match scene {
            SceneVariant::Raymarch => None,
            SceneVariant::Cube => Some(wgpu::Face::Back),
        };

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                buffers: vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview: None,
            cache: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(SetupError::PipelineCreation {
                name: blob.name().to_string(),
                message: error.to_string(),
            });
        }

        Ok(Self { pipeline, scene })
    }
}
