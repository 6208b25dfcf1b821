use crate::batch::GeometryBatch;
use crate::coords::{Mat4, Rgba};
use crate::shape::{CircleShape, EllipseShape, LineShape, RectShape, TriangleShape};

use super::buffer::BufferSlot;
use super::{RenderCtx, RenderTarget};

const TRANSFORM_BYTES: u64 = 64; // mat4x4<f32>

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

/// Canvas configuration.
#[derive(Debug, Clone)]
pub struct CanvasOptions {
    /// 1 (no multisampling) or 4 (MSAA with a resolve into the surface view).
    pub sample_count: u32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self { sample_count: 4 }
    }
}

/// Immediate-mode drawing surface.
///
/// Per frame: record shapes through the builder entry points, then call
/// [`draw`](Canvas::draw) exactly once. `draw` tessellates the pending
/// shapes, reconciles the GPU buffers, records one render pass with a single
/// indexed draw call, and resets the batch. The caller submits the encoder.
///
/// The transform uniform is independent of that cycle: it is written through
/// [`set_transform`](Canvas::set_transform) whenever called and applies to
/// every vertex of every subsequent frame.
pub struct Canvas {
    batch: GeometryBatch,

    pipeline: wgpu::RenderPipeline,
    pipeline_format: wgpu::TextureFormat,
    bind_group: wgpu::BindGroup,
    transform_ubo: wgpu::Buffer,

    position_vbo: BufferSlot,
    color_vbo: BufferSlot,
    index_buf: BufferSlot,

    sample_count: u32,
    msaa: Option<MsaaTarget>,

    clear_color: Rgba,
}

struct MsaaTarget {
    view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Builds the fixed pipeline against `surface_format` and creates the
    /// transform uniform (initialized to identity).
    ///
    /// `sample_count` values other than 1 or 4 fall back to 1 with a warning.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        options: CanvasOptions,
    ) -> Self {
        let sample_count = match options.sample_count {
            1 | 4 => options.sample_count,
            other => {
                log::warn!("unsupported sample count {other}; multisampling disabled");
                1
            }
        };

        let transform_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vesper transform ubo"),
            size: TRANSFORM_BYTES,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&transform_ubo, 0, bytemuck::bytes_of(&Mat4::IDENTITY.to_cols_array()));

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vesper shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shape.wgsl").into()),
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("vesper transform bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(
                            std::num::NonZeroU64::new(TRANSFORM_BYTES)
                                .expect("transform uniform has non-zero size by construction"),
                        ),
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("vesper transform bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_ubo.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vesper shape pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        // Slot 0: positions (3 floats), slot 1: colors (4 floats), both
        // per-vertex. Parallel streams rather than interleaved, matching the
        // batch layout so uploads are straight memcpys.
        let vertex_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: 3 * std::mem::size_of::<f32>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &POSITION_ATTRS,
            },
            wgpu::VertexBufferLayout {
                array_stride: 4 * std::mem::size_of::<f32>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &COLOR_ATTRS,
            },
        ];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("vesper shape pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &vertex_layouts,
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },

            multiview_mask: None,
            cache: None,
        });

        Self {
            batch: GeometryBatch::new(),
            pipeline,
            pipeline_format: surface_format,
            bind_group,
            transform_ubo,
            position_vbo: BufferSlot::new("vesper position vbo", wgpu::BufferUsages::VERTEX),
            color_vbo: BufferSlot::new("vesper color vbo", wgpu::BufferUsages::VERTEX),
            index_buf: BufferSlot::new("vesper index buffer", wgpu::BufferUsages::INDEX),
            sample_count,
            msaa: None,
            clear_color: Rgba::TRANSPARENT,
        }
    }

    // ── shape recording ───────────────────────────────────────────────────

    #[inline]
    pub fn rect(&mut self) -> &mut RectShape {
        self.batch.rect()
    }

    #[inline]
    pub fn circle(&mut self) -> &mut CircleShape {
        self.batch.circle()
    }

    #[inline]
    pub fn ellipse(&mut self) -> &mut EllipseShape {
        self.batch.ellipse()
    }

    #[inline]
    pub fn triangle(&mut self) -> &mut TriangleShape {
        self.batch.triangle()
    }

    #[inline]
    pub fn line(&mut self) -> &mut LineShape {
        self.batch.line()
    }

    /// Discards everything recorded since the last draw.
    #[inline]
    pub fn clear(&mut self) {
        self.batch.clear();
    }

    #[inline]
    pub fn batch(&self) -> &GeometryBatch {
        &self.batch
    }

    // ── frame state ───────────────────────────────────────────────────────

    /// Sets the color the pass clears to before shapes are drawn.
    #[inline]
    pub fn background(&mut self, color: Rgba) {
        self.clear_color = color;
    }

    /// Grayscale convenience for [`background`](Canvas::background).
    #[inline]
    pub fn background_value(&mut self, v: f32, a: f32) {
        self.clear_color = Rgba::value(v, a);
    }

    /// Writes the 4×4 transform uniform. The uniform's size never changes,
    /// so this is always a plain in-place write.
    pub fn set_transform(&mut self, queue: &wgpu::Queue, transform: Mat4) {
        queue.write_buffer(&self.transform_ubo, 0, bytemuck::bytes_of(&transform.to_cols_array()));
    }

    // ── pass assembly ─────────────────────────────────────────────────────

    /// Tessellates pending shapes, reconciles GPU buffers, records the frame's
    /// render pass, and resets the batch.
    ///
    /// The pass always runs (it performs the clear) even when no shapes were
    /// recorded; the draw call is skipped in that case.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        debug_assert_eq!(
            ctx.surface_format, self.pipeline_format,
            "canvas was built for a different surface format"
        );

        self.batch.tessellate_pending();

        let index_count = self.batch.index_count() as u32;
        if index_count > 0 {
            self.position_vbo
                .sync(ctx.device, ctx.queue, bytemuck::cast_slice(self.batch.positions()));
            self.color_vbo
                .sync(ctx.device, ctx.queue, bytemuck::cast_slice(self.batch.colors()));
            self.index_buf
                .sync(ctx.device, ctx.queue, bytemuck::cast_slice(self.batch.indices()));
        }

        if self.sample_count > 1 {
            self.ensure_msaa_target(ctx);
        }

        // MSAA renders into the owned multisampled view and resolves into the
        // presentable surface view; without MSAA the surface view is drawn
        // directly.
        let (view, resolve_target) = match &self.msaa {
            Some(msaa) => (&msaa.view, Some(target.color_view)),
            None => (target.color_view, None),
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vesper shape pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: self.clear_color.r as f64,
                        g: self.clear_color.g as f64,
                        b: self.clear_color.b as f64,
                        a: self.clear_color.a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if index_count > 0 {
            if let (Some(positions), Some(colors), Some(indices)) = (
                self.position_vbo.buffer(),
                self.color_vbo.buffer(),
                self.index_buf.buffer(),
            ) {
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.set_vertex_buffer(0, positions.slice(..));
                rpass.set_vertex_buffer(1, colors.slice(..));
                rpass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..index_count, 0, 0..1);
            }
        }
        drop(rpass);

        self.batch.clear();
    }

    fn ensure_msaa_target(&mut self, ctx: &RenderCtx<'_>) {
        let (w, h) = (ctx.width.max(1), ctx.height.max(1));
        if let Some(msaa) = &self.msaa {
            if msaa.width == w && msaa.height == h {
                return;
            }
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("vesper msaa target"),
            size: wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: self.sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: self.pipeline_format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        self.msaa = Some(MsaaTarget {
            view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
            width: w,
            height: h,
        });
    }
}
