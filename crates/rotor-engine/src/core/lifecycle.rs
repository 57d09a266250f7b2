use crate::render::RenderContext;

use super::SurfaceRenderer;

/// Whether a rendering surface currently exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SurfaceState {
    /// Before the first surface, or after it was lost.
    #[default]
    Absent,
    Active { width: u32, height: u32 },
}

/// Drives a [`SurfaceRenderer`] through the surface state machine.
///
/// Calls that are invalid for the current state are dropped (and reported as
/// `false`) rather than forwarded, so a renderer never sees a size change or a
/// frame without a live context.
pub struct Lifecycle<R> {
    renderer: R,
    state: SurfaceState,
}

impl<R: SurfaceRenderer> Lifecycle<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            state: SurfaceState::Absent,
        }
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// A fresh surface exists: runs `on_surface_created`, then
    /// `on_surface_changed` with its size.
    pub fn created(&mut self, gl: &mut dyn RenderContext, width: u32, height: u32) {
        log::info!("surface created ({width}x{height})");
        self.renderer.on_surface_created(gl);
        self.renderer.on_surface_changed(gl, width, height);
        self.state = SurfaceState::Active { width, height };
    }

    /// Forwards a size change. Unchanged sizes are not re-announced.
    pub fn resized(&mut self, gl: &mut dyn RenderContext, width: u32, height: u32) -> bool {
        match self.state {
            SurfaceState::Absent => false,
            SurfaceState::Active { width: w, height: h } if (w, h) == (width, height) => false,
            SurfaceState::Active { .. } => {
                log::debug!("surface changed to {width}x{height}");
                self.renderer.on_surface_changed(gl, width, height);
                self.state = SurfaceState::Active { width, height };
                true
            }
        }
    }

    pub fn draw(&mut self, gl: &mut dyn RenderContext) -> bool {
        match self.state {
            SurfaceState::Absent => false,
            SurfaceState::Active { .. } => {
                self.renderer.on_draw_frame(gl);
                true
            }
        }
    }

    /// The surface and everything on it is gone.
    pub fn lost(&mut self) {
        if self.state != SurfaceState::Absent {
            log::info!("surface lost");
        }
        self.state = SurfaceState::Absent;
    }
}
