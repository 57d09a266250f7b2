use glam::Mat4;

use crate::coords::{Color, Transform, Viewport};

use super::context::RenderContext;
use super::state::{ClientArrayBinding, FixedFunctionState, RasterState};
use super::types::{
    Capability, ClearMask, ClientArray, DepthFunc, FrontFace, GlError, HintMode, HintTarget,
    IndexType, Indices, Primitive, ShadeModel,
};

const POSITION_FILL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const COLOR_FILL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One recorded draw, self-contained: arrays are copied out of the client
/// bindings at call time, exactly as GL reads client memory during the call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub raster: RasterState,
    pub viewport: Viewport,
    /// Projection * model-view, GL clip space.
    pub clip: Mat4,
    pub positions: Vec<[f32; 4]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u16>,
    /// Width the caller supplied before widening.
    pub index_type: IndexType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `None` channels keep their previous contents.
    Clear {
        color: Option<Color>,
        depth: Option<f32>,
    },
    Draw(DrawCall),
}

/// Commands recorded during one callback, in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn draws(&self) -> impl Iterator<Item = &DrawCall> {
        self.commands.iter().filter_map(|c| match c {
            Command::Draw(d) => Some(d),
            Command::Clear { .. } => None,
        })
    }
}

/// [`RenderContext`] that updates persistent [`FixedFunctionState`] and
/// records clears/draws for the GPU backend to execute.
pub struct Recorder<'s> {
    state: &'s mut FixedFunctionState,
    commands: Vec<Command>,
    error: Option<GlError>,
}

impl<'s> Recorder<'s> {
    pub fn new(state: &'s mut FixedFunctionState) -> Self {
        Self {
            state,
            commands: Vec::new(),
            error: None,
        }
    }

    pub fn state(&self) -> &FixedFunctionState {
        self.state
    }

    /// Returns and clears the first error recorded since the last call.
    pub fn take_error(&mut self) -> Option<GlError> {
        self.error.take()
    }

    pub fn finish(self) -> CommandList {
        CommandList {
            commands: self.commands,
        }
    }

    fn latch(&mut self, err: GlError, what: &str) {
        log::warn!("{what}: {err}");
        // First error sticks until read.
        self.error.get_or_insert(err);
    }

    fn binding_mut(&mut self, array: ClientArray) -> &mut ClientArrayBinding {
        match array {
            ClientArray::Vertex => &mut self.state.vertex_array,
            ClientArray::Color => &mut self.state.color_array,
        }
    }
}

impl RenderContext for Recorder<'_> {
    fn set_clear_color(&mut self, color: Color) {
        self.state.clear_color = color.clamped();
    }

    fn set_clear_depth(&mut self, depth: f32) {
        self.state.clear_depth = depth.clamp(0.0, 1.0);
    }

    fn enable(&mut self, cap: Capability) {
        self.state.set_enabled(cap, true);
    }

    fn disable(&mut self, cap: Capability) {
        self.state.set_enabled(cap, false);
    }

    fn set_depth_func(&mut self, func: DepthFunc) {
        self.state.depth_func = func;
    }

    fn hint(&mut self, target: HintTarget, mode: HintMode) {
        match target {
            HintTarget::PerspectiveCorrection => self.state.perspective_hint = mode,
        }
    }

    fn set_shade_model(&mut self, model: ShadeModel) {
        self.state.shade_model = model;
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
    }

    fn clear(&mut self, mask: ClearMask) {
        if mask.is_empty() {
            return;
        }
        self.commands.push(Command::Clear {
            color: mask.color.then_some(self.state.clear_color),
            depth: mask.depth.then_some(self.state.clear_depth),
        });
    }

    fn set_front_face(&mut self, face: FrontFace) {
        self.state.front_face = face;
    }

    fn enable_client_state(&mut self, array: ClientArray) {
        self.binding_mut(array).enabled = true;
    }

    fn disable_client_state(&mut self, array: ClientArray) {
        self.binding_mut(array).enabled = false;
    }

    fn vertex_pointer(&mut self, size: u32, data: &[f32]) {
        if !(2..=4).contains(&size) {
            self.latch(GlError::InvalidValue, "vertex_pointer size must be 2, 3 or 4");
            return;
        }
        self.state.vertex_array.bind(size, data, POSITION_FILL);
    }

    fn color_pointer(&mut self, size: u32, data: &[f32]) {
        if !(3..=4).contains(&size) {
            self.latch(GlError::InvalidValue, "color_pointer size must be 3 or 4");
            return;
        }
        self.state.color_array.bind(size, data, COLOR_FILL);
    }

    fn draw_elements(&mut self, mode: Primitive, indices: Indices<'_>, transform: &Transform) {
        if indices.is_empty() {
            return;
        }

        let vertices = &self.state.vertex_array;
        if !vertices.enabled || vertices.is_empty() {
            self.latch(GlError::InvalidOperation, "draw_elements without a position array");
            return;
        }
        let vertex_count = vertices.len();

        if indices.max().is_some_and(|m| usize::from(m) >= vertex_count) {
            self.latch(GlError::InvalidValue, "draw_elements index out of range");
            return;
        }

        let colors = &self.state.color_array;
        let colors = if colors.enabled {
            if colors.len() < vertex_count {
                self.latch(GlError::InvalidValue, "color array shorter than position array");
                return;
            }
            colors.data[..vertex_count].to_vec()
        } else {
            vec![COLOR_FILL; vertex_count]
        };

        if self.state.viewport.is_empty() {
            return;
        }

        log::trace!("draw_elements {mode:?} x{}", indices.len());

        self.commands.push(Command::Draw(DrawCall {
            primitive: mode,
            raster: self.state.raster_state(),
            viewport: self.state.viewport,
            clip: transform.clip(),
            positions: self.state.vertex_array.data.clone(),
            colors,
            indices: indices.widen(),
            index_type: indices.index_type(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const TRI_POS: [f32; 9] = [0.0, 1.0, 0.0, -1.0, -1.0, 0.0, 1.0, -1.0, 0.0];
    const TRI_COL: [f32; 12] = [1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0];

    fn bind_triangle(r: &mut Recorder<'_>) {
        r.enable_client_state(ClientArray::Vertex);
        r.vertex_pointer(3, &TRI_POS);
        r.enable_client_state(ClientArray::Color);
        r.color_pointer(4, &TRI_COL);
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn state_changes_persist_after_recorder_is_dropped() {
        let mut state = FixedFunctionState::for_surface(100, 100);
        {
            let mut r = Recorder::new(&mut state);
            r.set_clear_color(Color::BLACK);
            r.enable(Capability::DepthTest);
            r.set_depth_func(DepthFunc::LessEqual);
            r.disable(Capability::Dither);
            r.hint(HintTarget::PerspectiveCorrection, HintMode::Nicest);
            assert!(r.finish().is_empty());
        }
        assert_eq!(state.clear_color, Color::BLACK);
        assert!(state.depth_test);
        assert!(!state.dither);
        assert_eq!(state.depth_func, DepthFunc::LessEqual);
        assert_eq!(state.perspective_hint, HintMode::Nicest);
    }

    #[test]
    fn clear_values_are_clamped() {
        let mut state = FixedFunctionState::default();
        let mut r = Recorder::new(&mut state);
        r.set_clear_color(Color::new(2.0, -1.0, 0.5, 1.0));
        r.set_clear_depth(3.0);
        assert_eq!(r.state().clear_color, Color::new(1.0, 0.0, 0.5, 1.0));
        assert_eq!(r.state().clear_depth, 1.0);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_snapshots_current_clear_values() {
        let mut state = FixedFunctionState::default();
        let mut r = Recorder::new(&mut state);
        r.set_clear_color(Color::BLACK);
        r.clear(ClearMask::COLOR_DEPTH);
        r.set_clear_color(Color::WHITE);
        r.clear(ClearMask::COLOR);
        r.clear(ClearMask::default());

        let list = r.finish();
        let cmds: Vec<_> = list.iter().cloned().collect();
        assert_eq!(
            cmds,
            vec![
                Command::Clear { color: Some(Color::BLACK), depth: Some(1.0) },
                Command::Clear { color: Some(Color::WHITE), depth: None },
            ]
        );
    }

    // ── draw_elements ─────────────────────────────────────────────────────

    #[test]
    fn draw_captures_arrays_state_and_matrix() {
        let mut state = FixedFunctionState::for_surface(640, 480);
        let mut r = Recorder::new(&mut state);
        r.enable(Capability::DepthTest);
        bind_triangle(&mut r);

        let t = Transform::new(Mat4::IDENTITY, Mat4::from_translation(Vec3::new(0.0, 0.0, -6.0)));
        r.draw_elements(Primitive::Triangles, Indices::U8(&[0, 1, 2]), &t);
        assert_eq!(r.take_error(), None);

        let list = r.finish();
        let draws: Vec<_> = list.draws().collect();
        assert_eq!(draws.len(), 1);
        let d = draws[0];
        assert_eq!(d.primitive, Primitive::Triangles);
        assert_eq!(d.index_type, IndexType::UnsignedByte);
        assert_eq!(d.indices, vec![0, 1, 2]);
        assert_eq!(d.positions[0], [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(d.colors[2], [0.0, 0.0, 1.0, 1.0]);
        assert!(d.raster.depth_test);
        assert_eq!(d.viewport, Viewport::full(640, 480));
        assert_eq!(d.clip, t.clip());
    }

    #[test]
    fn disabled_color_array_draws_white() {
        let mut state = FixedFunctionState::for_surface(10, 10);
        let mut r = Recorder::new(&mut state);
        bind_triangle(&mut r);
        r.disable_client_state(ClientArray::Color);
        r.draw_elements(Primitive::Triangles, Indices::U8(&[0, 1, 2]), &Transform::IDENTITY);

        let list = r.finish();
        let d = list.draws().next().expect("one draw");
        assert!(d.colors.iter().all(|c| *c == [1.0; 4]));
    }

    #[test]
    fn draw_without_positions_is_invalid_operation() {
        let mut state = FixedFunctionState::for_surface(10, 10);
        let mut r = Recorder::new(&mut state);
        r.draw_elements(Primitive::Triangles, Indices::U8(&[0, 1, 2]), &Transform::IDENTITY);
        assert_eq!(r.take_error(), Some(GlError::InvalidOperation));
        assert_eq!(r.take_error(), None);
        assert!(r.finish().is_empty());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut state = FixedFunctionState::for_surface(10, 10);
        let mut r = Recorder::new(&mut state);
        bind_triangle(&mut r);
        r.draw_elements(Primitive::Triangles, Indices::U16(&[0, 1, 3]), &Transform::IDENTITY);
        assert_eq!(r.take_error(), Some(GlError::InvalidValue));
        assert_eq!(r.finish().draws().count(), 0);
    }

    #[test]
    fn bad_component_count_keeps_previous_binding() {
        let mut state = FixedFunctionState::for_surface(10, 10);
        let mut r = Recorder::new(&mut state);
        bind_triangle(&mut r);
        r.vertex_pointer(5, &[0.0; 10]);
        assert_eq!(r.take_error(), Some(GlError::InvalidValue));
        assert_eq!(r.state().vertex_array.len(), 3);
    }

    #[test]
    fn first_error_sticks_until_taken() {
        let mut state = FixedFunctionState::for_surface(10, 10);
        let mut r = Recorder::new(&mut state);
        r.color_pointer(1, &[0.0]);
        r.draw_elements(Primitive::Points, Indices::U8(&[0]), &Transform::IDENTITY);
        assert_eq!(r.take_error(), Some(GlError::InvalidValue));
    }

    #[test]
    fn empty_viewport_records_nothing() {
        let mut state = FixedFunctionState::for_surface(10, 10);
        let mut r = Recorder::new(&mut state);
        r.set_viewport(Viewport::full(0, 0));
        bind_triangle(&mut r);
        r.draw_elements(Primitive::Triangles, Indices::U8(&[0, 1, 2]), &Transform::IDENTITY);
        assert_eq!(r.take_error(), None);
        assert!(r.finish().is_empty());
    }
}
