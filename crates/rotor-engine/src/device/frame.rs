/// A single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// one. Hand it back through [`Gpu::submit`](super::Gpu::submit) to present.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
