//! Call-recording [`RenderContext`] for unit tests.

use rotor_engine::coords::{Color, Transform, Viewport};
use rotor_engine::render::{
    Capability, ClearMask, ClientArray, DepthFunc, FrontFace, HintMode, HintTarget, IndexType,
    Indices, Primitive, RenderContext, ShadeModel,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ClearColor(Color),
    ClearDepth(f32),
    Enable(Capability),
    Disable(Capability),
    DepthFunc(DepthFunc),
    Hint(HintTarget, HintMode),
    ShadeModel(ShadeModel),
    Viewport(Viewport),
    Clear(ClearMask),
    FrontFace(FrontFace),
    EnableClientState(ClientArray),
    DisableClientState(ClientArray),
    VertexPointer { size: u32, len: usize },
    ColorPointer { size: u32, len: usize },
    DrawElements {
        mode: Primitive,
        count: usize,
        index_type: IndexType,
        transform: Transform,
    },
}

#[derive(Debug, Default)]
pub struct CallLog {
    pub calls: Vec<Call>,
}

impl CallLog {
    pub fn draws(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::DrawElements { .. }))
            .collect()
    }
}

impl RenderContext for CallLog {
    fn set_clear_color(&mut self, color: Color) {
        self.calls.push(Call::ClearColor(color));
    }

    fn set_clear_depth(&mut self, depth: f32) {
        self.calls.push(Call::ClearDepth(depth));
    }

    fn enable(&mut self, cap: Capability) {
        self.calls.push(Call::Enable(cap));
    }

    fn disable(&mut self, cap: Capability) {
        self.calls.push(Call::Disable(cap));
    }

    fn set_depth_func(&mut self, func: DepthFunc) {
        self.calls.push(Call::DepthFunc(func));
    }

    fn hint(&mut self, target: HintTarget, mode: HintMode) {
        self.calls.push(Call::Hint(target, mode));
    }

    fn set_shade_model(&mut self, model: ShadeModel) {
        self.calls.push(Call::ShadeModel(model));
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.calls.push(Call::Viewport(viewport));
    }

    fn clear(&mut self, mask: ClearMask) {
        self.calls.push(Call::Clear(mask));
    }

    fn set_front_face(&mut self, face: FrontFace) {
        self.calls.push(Call::FrontFace(face));
    }

    fn enable_client_state(&mut self, array: ClientArray) {
        self.calls.push(Call::EnableClientState(array));
    }

    fn disable_client_state(&mut self, array: ClientArray) {
        self.calls.push(Call::DisableClientState(array));
    }

    fn vertex_pointer(&mut self, size: u32, data: &[f32]) {
        self.calls.push(Call::VertexPointer { size, len: data.len() });
    }

    fn color_pointer(&mut self, size: u32, data: &[f32]) {
        self.calls.push(Call::ColorPointer { size, len: data.len() });
    }

    fn draw_elements(&mut self, mode: Primitive, indices: Indices<'_>, transform: &Transform) {
        self.calls.push(Call::DrawElements {
            mode,
            count: indices.len(),
            index_type: indices.index_type(),
            transform: *transform,
        });
    }
}
