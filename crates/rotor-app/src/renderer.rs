use glam::{Mat4, Vec3};

use rotor_engine::coords::{rotation_deg, Color, Perspective, Transform, Viewport};
use rotor_engine::core::SurfaceRenderer;
use rotor_engine::render::{
    Capability, ClearMask, DepthFunc, HintMode, HintTarget, RenderContext, ShadeModel,
};

use crate::shapes::Shape;

/// Tunables for [`FrameRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Degrees added to the rotation angle after every frame.
    pub rotation_speed: f32,
    /// Where the shape sits in eye space.
    pub translation: Vec3,
    /// Axis the shape spins about; normalized when the matrix is built.
    pub rotation_axis: Vec3,
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub clear_color: Color,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.5,
            translation: Vec3::new(-1.5, 0.0, -6.0),
            // Same vector as the translation: the shape tumbles about an
            // axis pointing at it from the eye.
            rotation_axis: Vec3::new(-1.5, 0.0, -6.0),
            fov_y_deg: 45.0,
            near: 0.1,
            far: 100.0,
            clear_color: Color::BLACK,
        }
    }
}

/// Spins one shape in front of the camera, one step per frame.
///
/// The angle advances per frame, not per unit time, so animation speed
/// follows the display refresh rate.
pub struct FrameRenderer<S> {
    shape: S,
    config: RendererConfig,

    angle: f32,
    projection: Perspective,
    model_view: Mat4,
}

impl<S: Shape> FrameRenderer<S> {
    pub fn new(shape: S) -> Self {
        Self::with_config(shape, RendererConfig::default())
    }

    pub fn with_config(shape: S, config: RendererConfig) -> Self {
        let projection = Perspective::new(config.fov_y_deg, 1.0, config.near, config.far);
        Self {
            shape,
            config,
            angle: 0.0,
            projection,
            model_view: Mat4::IDENTITY,
        }
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Current rotation in degrees. Grows without bound; never wrapped.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn projection(&self) -> &Perspective {
        &self.projection
    }

    /// Model-view used by the most recent frame.
    pub fn model_view(&self) -> Mat4 {
        self.model_view
    }

    fn frame_model_view(&self) -> Mat4 {
        Mat4::from_translation(self.config.translation)
            * rotation_deg(self.angle, self.config.rotation_axis)
    }
}

impl<S: Shape> SurfaceRenderer for FrameRenderer<S> {
    fn on_surface_created(&mut self, gl: &mut dyn RenderContext) {
        log::info!("surface created, drawing {}", self.shape.name());

        gl.set_clear_color(self.config.clear_color);
        gl.set_clear_depth(1.0);
        gl.enable(Capability::DepthTest);
        gl.set_depth_func(DepthFunc::LessEqual);
        gl.hint(HintTarget::PerspectiveCorrection, HintMode::Nicest);
        gl.set_shade_model(ShadeModel::Smooth);
        gl.disable(Capability::Dither);
    }

    fn on_surface_changed(&mut self, gl: &mut dyn RenderContext, width: u32, height: u32) {
        let height = height.max(1);
        log::info!("surface changed to {width}x{height}");

        gl.set_viewport(Viewport::full(width, height));

        let aspect = width as f32 / height as f32;
        self.projection =
            Perspective::new(self.config.fov_y_deg, aspect, self.config.near, self.config.far);
        self.model_view = Mat4::IDENTITY;
    }

    fn on_draw_frame(&mut self, gl: &mut dyn RenderContext) {
        gl.clear(ClearMask::COLOR_DEPTH);

        self.model_view = self.frame_model_view();
        let transform = Transform::new(self.projection.matrix(), self.model_view);
        self.shape.draw(gl, &transform);

        self.angle += self.config.rotation_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Pyramid, Triangle};
    use crate::testing::{Call, CallLog};
    use rotor_engine::render::{ClientArray, FixedFunctionState, IndexType, Primitive, Recorder};

    #[test]
    fn setup_issues_the_expected_state() {
        let mut r = FrameRenderer::new(Triangle::new());
        let mut log = CallLog::default();
        r.on_surface_created(&mut log);

        assert_eq!(
            log.calls,
            vec![
                Call::ClearColor(Color::BLACK),
                Call::ClearDepth(1.0),
                Call::Enable(Capability::DepthTest),
                Call::DepthFunc(DepthFunc::LessEqual),
                Call::Hint(HintTarget::PerspectiveCorrection, HintMode::Nicest),
                Call::ShadeModel(ShadeModel::Smooth),
                Call::Disable(Capability::Dither),
            ]
        );
    }

    #[test]
    fn zero_height_is_treated_as_one() {
        let mut a = FrameRenderer::new(Triangle::new());
        let mut b = FrameRenderer::new(Triangle::new());
        let mut log_a = CallLog::default();
        let mut log_b = CallLog::default();

        a.on_surface_changed(&mut log_a, 800, 0);
        b.on_surface_changed(&mut log_b, 800, 1);

        assert_eq!(a.projection(), b.projection());
        assert_eq!(a.projection().aspect, 800.0);
        assert_eq!(log_a.calls, vec![Call::Viewport(Viewport::full(800, 1))]);
        assert_eq!(log_a.calls, log_b.calls);
    }

    #[test]
    fn aspect_follows_surface_size() {
        let mut r = FrameRenderer::new(Pyramid::new());
        r.on_surface_changed(&mut CallLog::default(), 1920, 1080);

        let p = r.projection();
        assert!((p.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(p.fov_y_deg, 45.0);
        assert_eq!(p.near, 0.1);
        assert_eq!(p.far, 100.0);
    }

    #[test]
    fn angle_advances_half_a_degree_per_frame() {
        let mut r = FrameRenderer::new(Triangle::new());
        let mut log = CallLog::default();
        r.on_surface_changed(&mut log, 640, 480);

        for _ in 0..720 {
            r.on_draw_frame(&mut log);
        }
        // 0.5 is exact in binary, so the sum stays exact.
        assert_eq!(r.angle(), 360.0);
    }

    #[test]
    fn angle_is_not_wrapped() {
        let mut r = FrameRenderer::with_config(
            Triangle::new(),
            RendererConfig {
                rotation_speed: 90.0,
                ..RendererConfig::default()
            },
        );
        let mut log = CallLog::default();
        for _ in 0..5 {
            r.on_draw_frame(&mut log);
        }
        assert_eq!(r.angle(), 450.0);
    }

    #[test]
    fn frame_clears_then_draws_with_current_angle() {
        let mut r = FrameRenderer::new(Triangle::new());
        r.on_surface_changed(&mut CallLog::default(), 640, 480);

        let mut log = CallLog::default();
        r.on_draw_frame(&mut log);

        assert_eq!(log.calls.first(), Some(&Call::Clear(ClearMask::COLOR_DEPTH)));
        let expected = Transform::new(
            r.projection().matrix(),
            Mat4::from_translation(Vec3::new(-1.5, 0.0, -6.0)),
        );
        assert_eq!(
            log.draws(),
            vec![&Call::DrawElements {
                mode: Primitive::Triangles,
                count: 3,
                index_type: IndexType::UnsignedByte,
                transform: expected,
            }]
        );

        let enables = log
            .calls
            .iter()
            .filter(|c| matches!(c, Call::EnableClientState(_)))
            .count();
        let disables = log
            .calls
            .iter()
            .filter(|c| matches!(c, Call::DisableClientState(_)))
            .count();
        assert_eq!(enables, 2);
        assert_eq!(disables, 2);
        assert_eq!(
            log.calls.last(),
            Some(&Call::DisableClientState(ClientArray::Color))
        );
    }

    #[test]
    fn model_view_pins_translation_times_rotation() {
        let mut r = FrameRenderer::new(Triangle::new());
        let mut log = CallLog::default();
        // Advance to 90 degrees, then draw once more to capture it.
        for _ in 0..180 {
            r.on_draw_frame(&mut log);
        }
        r.on_draw_frame(&mut log);

        let axis = Vec3::new(-1.5, 0.0, -6.0).normalize();
        let expected = Mat4::from_translation(Vec3::new(-1.5, 0.0, -6.0))
            * Mat4::from_axis_angle(axis, 90f32.to_radians());
        assert!(r.model_view().abs_diff_eq(expected, 1e-5));

        // The translation column survives the rotation untouched.
        let w = r.model_view().w_axis;
        assert!(w.abs_diff_eq(glam::Vec4::new(-1.5, 0.0, -6.0, 1.0), 1e-6));
        // Rotation leaves its own axis fixed.
        let rotated = rotation_deg(r.angle() - 0.5, axis).transform_vector3(axis);
        assert!(rotated.abs_diff_eq(axis, 1e-5));
    }

    #[test]
    fn full_lifecycle_on_a_real_recorder_yields_clear_and_draw() {
        let mut r = FrameRenderer::new(Pyramid::new());
        let mut state = FixedFunctionState::for_surface(1280, 720);

        let mut gl = Recorder::new(&mut state);
        r.on_surface_created(&mut gl);
        r.on_surface_changed(&mut gl, 1280, 720);
        assert!(gl.finish().is_empty());

        assert!(state.depth_test);
        assert!(!state.dither);
        assert_eq!(state.depth_func, DepthFunc::LessEqual);
        assert_eq!(state.clear_color, Color::BLACK);

        let mut gl = Recorder::new(&mut state);
        r.on_draw_frame(&mut gl);
        assert_eq!(gl.take_error(), None);
        let list = gl.finish();

        assert_eq!(list.len(), 2);
        let draw = list.draws().next().expect("one draw");
        assert!(draw.raster.depth_test);
        assert_eq!(draw.viewport, Viewport::full(1280, 720));
        assert_eq!(draw.indices.len(), 12);
    }
}
