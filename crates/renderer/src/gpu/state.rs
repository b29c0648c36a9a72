use std::time::{Duration, Instant};

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use tracing::debug;
use winit::dpi::PhysicalSize;

use crate::compile::ShaderBlob;
use crate::runtime::TimeSample;
use crate::types::{RendererConfig, SceneVariant, SetupError};

use super::context::GpuContext;
use super::geometry::CubeGeometry;
use super::pipeline::{uniform_bind_group_layout, ScenePipeline};
use super::uniforms::{CubeUniforms, RaymarchUniforms, UNIFORM_BUFFER_SIZE};

/// Owns the GPU bootstrap products and drives one frame at a time.
///
/// Everything except the uniform buffer contents is immutable after
/// construction; the per-frame path recomputes the uniforms, uploads them,
/// encodes one pass with one draw, submits, and presents.
pub(crate) struct GpuState {
    context: GpuContext,
    pipeline: ScenePipeline,
    geometry: Option<CubeGeometry>,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    last_fps_update: Instant,
    frames_since_last_update: u32,
}

impl GpuState {
    pub(crate) fn new<T>(
        target: &T,
        initial_size: PhysicalSize<u32>,
        config: &RendererConfig,
    ) -> Result<Self, SetupError>
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        let context = GpuContext::new(target, initial_size)?;

        let uniform_layout = uniform_bind_group_layout(&context.device);
        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniform buffer"),
            size: UNIFORM_BUFFER_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("uniform bind group"),
                layout: &uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });

        let blob = ShaderBlob::resolve(config.scene, &config.shader)?;
        let pipeline = ScenePipeline::new(
            &context.device,
            &uniform_layout,
            context.surface_format,
            config.scene,
            &blob,
        )?;

        let geometry = match config.scene {
            SceneVariant::Raymarch => None,
            SceneVariant::Cube => Some(CubeGeometry::upload(&context.device)),
        };

        tracing::info!(
            scene = %config.scene,
            shader = %blob.name(),
            width = context.size.width,
            height = context.size.height,
            "pipeline ready"
        );

        Ok(Self {
            context,
            pipeline,
            geometry,
            uniform_buffer,
            uniform_bind_group,
            last_fps_update: Instant::now(),
            frames_since_last_update: 0,
        })
    }

    pub(crate) fn size(&self) -> PhysicalSize<u32> {
        self.context.size
    }

    pub(crate) fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.context.resize(new_size);
    }

    /// Renders and presents one frame at the given time sample.
    ///
    /// Surface errors bubble up untouched; the run loop decides which are
    /// retryable. Nothing here waits on GPU completion.
    pub(crate) fn render(&mut self, sample: TimeSample) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.surface.get_current_texture()?;

        self.upload_uniforms(sample);

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("render encoder"),
                });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.pipeline.pipeline);
            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);

            match (&self.pipeline.scene, self.geometry.as_ref()) {
                (SceneVariant::Raymarch, _) => {
                    render_pass.draw(0..3, 0..1);
                }
                (SceneVariant::Cube, Some(geometry)) => {
                    render_pass.set_vertex_buffer(0, geometry.vertex_buffer.slice(..));
                    render_pass
                        .set_index_buffer(geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                    render_pass.draw_indexed(0..geometry.index_count, 0, 0..1);
                }
                (SceneVariant::Cube, None) => unreachable!("cube pipeline without geometry"),
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        self.update_frame_stats(sample);
        Ok(())
    }

    fn upload_uniforms(&mut self, sample: TimeSample) {
        let size = self.context.size;
        match self.pipeline.scene {
            SceneVariant::Raymarch => {
                let uniforms = RaymarchUniforms::new(sample, size.width, size.height);
                self.context
                    .queue
                    .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
            }
            SceneVariant::Cube => {
                let uniforms = CubeUniforms::new(sample, size.width, size.height);
                self.context
                    .queue
                    .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
            }
        }
    }

    fn update_frame_stats(&mut self, sample: TimeSample) {
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_fps_update);
        if elapsed >= Duration::from_secs(1) {
            let fps = self.frames_since_last_update as f32 / elapsed.as_secs_f32();
            debug!(
                fps = fps.round(),
                frame = sample.frame_index,
                time = sample.seconds,
                "render stats"
            );
            self.frames_since_last_update = 0;
            self.last_fps_update = now;
        }
    }
}
