use crate::render::RenderContext;

/// Surface callbacks, invoked sequentially on the event-loop thread.
///
/// Ordering guaranteed by [`Lifecycle`](super::Lifecycle):
/// `on_surface_created` first (again after every surface loss), then
/// `on_surface_changed` with the initial size, then any mix of size changes
/// and frames.
pub trait SurfaceRenderer {
    /// The rendering context was (re)created with default state.
    fn on_surface_created(&mut self, gl: &mut dyn RenderContext);

    /// The drawable size changed, in physical pixels. `height` may be zero.
    fn on_surface_changed(&mut self, gl: &mut dyn RenderContext, width: u32, height: u32);

    /// Render one frame.
    fn on_draw_frame(&mut self, gl: &mut dyn RenderContext);
}

impl<R: SurfaceRenderer + ?Sized> SurfaceRenderer for Box<R> {
    fn on_surface_created(&mut self, gl: &mut dyn RenderContext) {
        (**self).on_surface_created(gl)
    }

    fn on_surface_changed(&mut self, gl: &mut dyn RenderContext, width: u32, height: u32) {
        (**self).on_surface_changed(gl, width, height)
    }

    fn on_draw_frame(&mut self, gl: &mut dyn RenderContext) {
        (**self).on_draw_frame(gl)
    }
}
