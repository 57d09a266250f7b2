use crate::coords::{Color, Transform, Viewport};

use super::types::{
    Capability, ClearMask, ClientArray, DepthFunc, FrontFace, HintMode, HintTarget, Indices,
    Primitive, ShadeModel,
};

/// Fixed-function rendering context.
///
/// The command set mirrors GL ES 1.x closely enough that tutorial-style
/// renderers port line for line, except that there is no matrix stack: every
/// draw receives its [`Transform`] explicitly.
///
/// Callers receive this as `&mut dyn RenderContext`; a context handle is
/// always present and current for the duration of a callback.
pub trait RenderContext {
    fn set_clear_color(&mut self, color: Color);

    /// Depth written by `clear`, clamped to `[0, 1]`.
    fn set_clear_depth(&mut self, depth: f32);

    fn enable(&mut self, cap: Capability);
    fn disable(&mut self, cap: Capability);

    fn set_depth_func(&mut self, func: DepthFunc);

    fn hint(&mut self, target: HintTarget, mode: HintMode);

    fn set_shade_model(&mut self, model: ShadeModel);

    fn set_viewport(&mut self, viewport: Viewport);

    fn clear(&mut self, mask: ClearMask);

    fn set_front_face(&mut self, face: FrontFace);

    fn enable_client_state(&mut self, array: ClientArray);
    fn disable_client_state(&mut self, array: ClientArray);

    /// Binds tightly packed positions with `size` components per vertex.
    fn vertex_pointer(&mut self, size: u32, data: &[f32]);

    /// Binds tightly packed colors with `size` components per vertex.
    fn color_pointer(&mut self, size: u32, data: &[f32]);

    /// Draws `indices.len()` elements from the enabled client arrays.
    fn draw_elements(&mut self, mode: Primitive, indices: Indices<'_>, transform: &Transform);
}
