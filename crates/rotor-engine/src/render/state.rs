use crate::coords::{Color, Viewport};

use super::types::{Capability, DepthFunc, FrontFace, HintMode, ShadeModel};

/// A bound client array, already expanded to four components per vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientArrayBinding {
    pub enabled: bool,
    /// Components per vertex as bound by the caller.
    pub size: u32,
    pub data: Vec<[f32; 4]>,
}

impl ClientArrayBinding {
    /// Replaces the bound data, padding each element to four components with
    /// `fill` supplying the missing tail.
    pub(crate) fn bind(&mut self, size: u32, data: &[f32], fill: [f32; 4]) {
        let n = size as usize;
        self.size = size;
        self.data.clear();
        self.data.extend(data.chunks_exact(n).map(|c| {
            let mut v = fill;
            v[..n].copy_from_slice(c);
            v
        }));
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Pipeline-affecting state captured with every draw.
///
/// This is also the cache key for compiled pipelines, minus the surface
/// formats which the backend adds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RasterState {
    pub depth_test: bool,
    pub depth_func: DepthFunc,
    pub cull_face: bool,
    pub front_face: FrontFace,
    pub shade_model: ShadeModel,
    pub perspective_hint: HintMode,
}

/// Everything a GL context would remember between calls.
///
/// Lives as long as the rendering surface; recreated from defaults when the
/// surface is, which is what obliges renderers to redo their setup in
/// `on_surface_created`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedFunctionState {
    pub clear_color: Color,
    pub clear_depth: f32,

    pub depth_test: bool,
    pub cull_face: bool,
    /// No wgpu counterpart; tracked so callers can query it.
    pub dither: bool,

    pub depth_func: DepthFunc,
    pub perspective_hint: HintMode,
    pub shade_model: ShadeModel,
    pub front_face: FrontFace,
    pub viewport: Viewport,

    pub vertex_array: ClientArrayBinding,
    pub color_array: ClientArrayBinding,
}

impl Default for FixedFunctionState {
    fn default() -> Self {
        Self {
            clear_color: Color::TRANSPARENT,
            clear_depth: 1.0,
            depth_test: false,
            cull_face: false,
            dither: true,
            depth_func: DepthFunc::Less,
            perspective_hint: HintMode::DontCare,
            shade_model: ShadeModel::Smooth,
            front_face: FrontFace::Ccw,
            viewport: Viewport::default(),
            vertex_array: ClientArrayBinding::default(),
            color_array: ClientArrayBinding::default(),
        }
    }
}

impl FixedFunctionState {
    /// Fresh state for a surface of the given size; like a newly current GL
    /// context, the viewport starts out covering the whole surface.
    pub fn for_surface(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::full(width, height),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self, cap: Capability) -> bool {
        match cap {
            Capability::DepthTest => self.depth_test,
            Capability::CullFace => self.cull_face,
            Capability::Dither => self.dither,
        }
    }

    pub(crate) fn set_enabled(&mut self, cap: Capability, on: bool) {
        match cap {
            Capability::DepthTest => self.depth_test = on,
            Capability::CullFace => self.cull_face = on,
            Capability::Dither => self.dither = on,
        }
    }

    pub fn raster_state(&self) -> RasterState {
        RasterState {
            depth_test: self.depth_test,
            depth_func: self.depth_func,
            cull_face: self.cull_face,
            front_face: self.front_face,
            shade_model: self.shade_model,
            perspective_hint: self.perspective_hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_gl_context() {
        let s = FixedFunctionState::for_surface(320, 240);
        assert_eq!(s.clear_color, Color::TRANSPARENT);
        assert_eq!(s.clear_depth, 1.0);
        assert!(!s.is_enabled(Capability::DepthTest));
        assert!(!s.is_enabled(Capability::CullFace));
        assert!(s.is_enabled(Capability::Dither));
        assert_eq!(s.depth_func, DepthFunc::Less);
        assert_eq!(s.front_face, FrontFace::Ccw);
        assert_eq!(s.shade_model, ShadeModel::Smooth);
        assert_eq!(s.viewport, Viewport::full(320, 240));
    }

    #[test]
    fn bind_pads_positions_with_w_one() {
        let mut b = ClientArrayBinding::default();
        b.bind(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(b.size, 3);
        assert_eq!(b.data, vec![[1.0, 2.0, 3.0, 1.0], [4.0, 5.0, 6.0, 1.0]]);
    }

    #[test]
    fn bind_drops_trailing_partial_element() {
        let mut b = ClientArrayBinding::default();
        b.bind(2, &[1.0, 2.0, 3.0], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(b.len(), 1);
    }
}
