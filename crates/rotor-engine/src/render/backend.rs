use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::coords::Color;

use super::common::{color_layout, entry_points, position_layout, TransformUniform};
use super::recorder::{Command, CommandList, DrawCall};
use super::state::RasterState;
use super::target::{RenderCtx, RenderTarget};
use super::types::Primitive;

/// One render pass worth of work: an optional clear followed by draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PassPlan {
    pub clear_color: Option<Color>,
    pub clear_depth: Option<f32>,
    /// Positions in the command list's draw order.
    pub draws: Vec<usize>,
}

/// Splits a command list into render passes.
///
/// Every clear that follows a draw opens a new pass (wgpu can only clear at
/// pass start); back-to-back clears merge, the later one winning per channel.
/// Always yields at least one pass so the frame gets presented with defined
/// load ops.
pub(crate) fn plan_passes(commands: &CommandList) -> Vec<PassPlan> {
    let mut passes = vec![PassPlan::default()];
    let mut draw_index = 0;

    for cmd in commands.iter() {
        match cmd {
            Command::Clear { color, depth } => {
                let needs_new = passes.last().is_some_and(|p| !p.draws.is_empty());
                if needs_new {
                    passes.push(PassPlan::default());
                }
                if let Some(pass) = passes.last_mut() {
                    pass.clear_color = color.or(pass.clear_color);
                    pass.clear_depth = depth.or(pass.clear_depth);
                }
            }
            Command::Draw(_) => {
                if let Some(pass) = passes.last_mut() {
                    pass.draws.push(draw_index);
                }
                draw_index += 1;
            }
        }
    }

    passes
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct PipelineKey {
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    primitive: Primitive,
    raster: RasterState,
}

/// GPU resources for one recorded draw. Built before the pass begins so the
/// pass can borrow them.
struct PreparedDraw {
    key: PipelineKey,
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
    bind_group: wgpu::BindGroup,
}

/// Executes recorded fixed-function commands with wgpu.
///
/// Pipelines are compiled lazily per distinct (formats, primitive, raster
/// state) and cached for the life of the device. Vertex data is uploaded
/// fresh for every draw, matching client-array semantics.
#[derive(Default)]
pub struct FixedFunctionRenderer {
    shader: Option<wgpu::ShaderModule>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    pipeline_layout: Option<wgpu::PipelineLayout>,
    pipelines: HashMap<PipelineKey, wgpu::RenderPipeline>,
}

impl FixedFunctionRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pipelines compiled so far.
    pub fn pipeline_count(&self) -> usize {
        self.pipelines.len()
    }

    /// Records `commands` into `target`.
    pub fn execute(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        commands: &CommandList,
    ) {
        self.ensure_shared(ctx);

        let draws: Vec<&DrawCall> = commands.draws().collect();
        let mut prepared = Vec::with_capacity(draws.len());
        for draw in &draws {
            let key = PipelineKey {
                color_format: ctx.color_format,
                depth_format: ctx.depth_format,
                primitive: draw.primitive,
                raster: draw.raster,
            };
            self.ensure_pipeline(ctx, key);
            match self.prepare_draw(ctx, key, draw) {
                Some(p) => prepared.push(p),
                None => return,
            }
        }

        let (target_w, target_h) = (ctx.size.width, ctx.size.height);

        for (pass_index, plan) in plan_passes(commands).iter().enumerate() {
            let color_load = match plan.clear_color {
                Some(c) => wgpu::LoadOp::Clear(c.to_wgpu()),
                None => wgpu::LoadOp::Load,
            };
            let depth_load = match plan.clear_depth {
                Some(d) => wgpu::LoadOp::Clear(d),
                None => wgpu::LoadOp::Load,
            };

            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rotor fixed-function pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: color_load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: target.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: depth_load,
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            for &i in &plan.draws {
                let (Some(draw), Some(gpu)) = (draws.get(i), prepared.get(i)) else {
                    continue;
                };
                let Some(pipeline) = self.pipelines.get(&gpu.key) else {
                    continue;
                };
                let Some((x, y, w, h)) = draw.viewport.to_target_rect(target_w, target_h) else {
                    log::trace!("pass {pass_index}: draw {i} viewport outside target");
                    continue;
                };

                rpass.set_viewport(x, y, w, h, 0.0, 1.0);
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(0, &gpu.bind_group, &[]);
                rpass.set_vertex_buffer(0, gpu.positions.slice(..));
                rpass.set_vertex_buffer(1, gpu.colors.slice(..));
                rpass.set_index_buffer(gpu.indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..gpu.index_count, 0, 0..1);
            }
        }
    }

    fn ensure_shared(&mut self, ctx: &RenderCtx<'_>) {
        if self.shader.is_some() && self.bind_group_layout.is_some() && self.pipeline_layout.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("rotor fixed-function shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/fixed_function.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("rotor transform bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<TransformUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("rotor fixed-function pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        self.shader = Some(shader);
        self.bind_group_layout = Some(bind_group_layout);
        self.pipeline_layout = Some(pipeline_layout);
        self.pipelines.clear();
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, key: PipelineKey) {
        if self.pipelines.contains_key(&key) {
            return;
        }
        let (Some(shader), Some(layout)) = (self.shader.as_ref(), self.pipeline_layout.as_ref())
        else {
            return;
        };

        let raster = key.raster;
        let (vs_entry, fs_entry) = entry_points(&raster);

        // With the depth test off GL neither tests nor writes depth.
        let (depth_write_enabled, depth_compare) = if raster.depth_test {
            (true, raster.depth_func.to_wgpu())
        } else {
            (false, wgpu::CompareFunction::Always)
        };

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("rotor fixed-function pipeline"),
            layout: Some(layout),

            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(vs_entry),
                compilation_options: Default::default(),
                buffers: &[position_layout(), color_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fs_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: key.color_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: key.primitive.to_wgpu(),
                strip_index_format: key
                    .primitive
                    .is_strip()
                    .then_some(wgpu::IndexFormat::Uint16),
                front_face: raster.front_face.to_wgpu(),
                cull_mode: raster.cull_face.then_some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: key.depth_format,
                depth_write_enabled,
                depth_compare,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "compiled pipeline #{} for {:?} {:?}",
            self.pipelines.len() + 1,
            key.primitive,
            raster
        );
        self.pipelines.insert(key, pipeline);
    }

    fn prepare_draw(
        &self,
        ctx: &RenderCtx<'_>,
        key: PipelineKey,
        draw: &DrawCall,
    ) -> Option<PreparedDraw> {
        let bgl = self.bind_group_layout.as_ref()?;

        let positions = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("rotor position array"),
            contents: bytemuck::cast_slice(&draw.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let colors = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("rotor color array"),
            contents: bytemuck::cast_slice(&draw.colors),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("rotor index array"),
            contents: bytemuck::cast_slice(&draw.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform = TransformUniform::from_gl_clip(draw.clip);
        let ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("rotor transform ubo"),
            contents: bytemuck::bytes_of(&uniform),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("rotor transform bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        Some(PreparedDraw {
            key,
            positions,
            colors,
            indices,
            index_count: draw.indices.len() as u32,
            bind_group,
        })
    }
}
