//! GPU-side layouts shared by the backend.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::state::RasterState;
use super::types::{HintMode, ShadeModel};

/// Maps GL clip-space depth `[-w, w]` onto wgpu's `[0, w]`.
pub(super) const GL_TO_WGPU_DEPTH: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.5, 0.0, //
    0.0, 0.0, 0.5, 1.0, //
]);

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct TransformUniform {
    pub clip: [[f32; 4]; 4],
}

impl TransformUniform {
    pub(super) fn from_gl_clip(clip: Mat4) -> Self {
        Self {
            clip: (GL_TO_WGPU_DEPTH * clip).to_cols_array_2d(),
        }
    }
}

// ── vertex streams ────────────────────────────────────────────────────────
//
// Positions and colors stay in separate buffers, one per client array.

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

pub(super) fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

pub(super) fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}

/// Shader entry points `(vertex, fragment)` for the raster state's color
/// interpolation. Flat shading wins over the perspective hint.
pub(super) fn entry_points(raster: &RasterState) -> (&'static str, &'static str) {
    match (raster.shade_model, raster.perspective_hint) {
        (ShadeModel::Flat, _) => ("vs_flat", "fs_flat"),
        (ShadeModel::Smooth, HintMode::Fastest) => ("vs_linear", "fs_linear"),
        (ShadeModel::Smooth, _) => ("vs_smooth", "fs_smooth"),
    }
}
