use winit::dpi::PhysicalSize;

/// Depth attachment sized to the surface.
pub(crate) struct DepthBuffer {
    pub(crate) format: wgpu::TextureFormat,
    // The view keeps the texture alive on its own, but holding both keeps
    // ownership obvious.
    _texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthBuffer {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        size: PhysicalSize<u32>,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("rotor depth buffer"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            format,
            _texture: texture,
            view,
        }
    }
}
