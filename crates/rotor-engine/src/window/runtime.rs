use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{Lifecycle, SurfaceRenderer};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::render::{FixedFunctionRenderer, FixedFunctionState, Recorder, RenderCtx, RenderTarget};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "rotor".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `renderer` until the window is closed.
    ///
    /// Returns an error if the event loop cannot start, the surface cannot be
    /// created, or the GPU reports a fatal surface error.
    pub fn run<R>(config: RuntimeConfig, gpu_init: GpuInit, renderer: R) -> Result<()>
    where
        R: SurfaceRenderer + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, renderer);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Everything that lives exactly as long as the rendering surface.
#[self_referencing]
struct SurfaceEntry {
    clock: FrameClock,
    gl_state: FixedFunctionState,
    backend: FixedFunctionRenderer,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

enum FrameOutcome {
    Presented,
    Skipped,
    Fatal,
}

struct AppState<R>
where
    R: SurfaceRenderer + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    lifecycle: Lifecycle<R>,

    surface: Option<SurfaceEntry>,
    fatal: Option<anyhow::Error>,
}

impl<R> AppState<R>
where
    R: SurfaceRenderer + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, renderer: R) -> Self {
        Self {
            config,
            gpu_init,
            lifecycle: Lifecycle::new(renderer),
            surface: None,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal.get_or_insert(err);
        event_loop.exit();
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let mut entry = SurfaceEntryTryBuilder {
            clock: FrameClock::default(),
            gl_state: FixedFunctionState::default(),
            backend: FixedFunctionRenderer::new(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        let lifecycle = &mut self.lifecycle;
        entry.with_mut(|fields| {
            let PhysicalSize { width, height } = fields.gpu.size();
            *fields.gl_state = FixedFunctionState::for_surface(width, height);

            let mut gl = Recorder::new(fields.gl_state);
            lifecycle.created(&mut gl, width, height);
            discard_outside_frame(gl);

            fields.window.request_redraw();
        });

        self.surface = Some(entry);
        Ok(())
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let (lifecycle, Some(entry)) = (&mut self.lifecycle, self.surface.as_mut()) else {
            return;
        };

        entry.with_mut(|fields| {
            fields.gpu.resize(new_size);

            let mut gl = Recorder::new(fields.gl_state);
            lifecycle.resized(&mut gl, new_size.width, new_size.height);
            discard_outside_frame(gl);

            fields.window.request_redraw();
        });
    }

    fn draw_frame(&mut self) -> FrameOutcome {
        let (lifecycle, Some(entry)) = (&mut self.lifecycle, self.surface.as_mut()) else {
            return FrameOutcome::Skipped;
        };

        entry.with_mut(|fields| {
            if !fields.gpu.is_drawable() {
                return FrameOutcome::Skipped;
            }

            let mut frame = match fields.gpu.begin_frame() {
                Ok(f) => f,
                Err(err) => {
                    log::debug!("surface error: {err}");
                    return match fields.gpu.handle_surface_error(err) {
                        SurfaceErrorAction::Fatal => FrameOutcome::Fatal,
                        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                            FrameOutcome::Skipped
                        }
                    };
                }
            };

            let commands = {
                let mut gl = Recorder::new(fields.gl_state);
                lifecycle.draw(&mut gl);
                gl.finish()
            };

            {
                let ctx = RenderCtx::from_gpu(fields.gpu);
                let mut target =
                    RenderTarget::new(&mut frame.encoder, &frame.view, fields.gpu.depth_view());
                fields.backend.execute(&ctx, &mut target, &commands);
            }

            fields.window.pre_present_notify();
            fields.gpu.submit(frame);

            let ft = fields.clock.tick();
            if let Some(fps) = ft.fps_report {
                log::debug!(
                    "frame {}: {fps:.1} fps, {} pipelines",
                    ft.frame_index,
                    fields.backend.pipeline_count()
                );
            }

            FrameOutcome::Presented
        })
    }
}

/// Draw commands issued from setup callbacks have no frame to land in; GL
/// would render them into a buffer that is never presented.
fn discard_outside_frame(gl: Recorder<'_>) {
    let commands = gl.finish();
    if !commands.is_empty() {
        log::debug!("discarding {} commands recorded outside a frame", commands.len());
    }
}

impl<R> ApplicationHandler for AppState<R>
where
    R: SurfaceRenderer + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        if let Err(err) = self.create_surface(event_loop) {
            self.fail(event_loop, err.context("failed to create rendering surface"));
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Mobile platforms revoke the native window while suspended; drop every
        // GPU object with it and rebuild on resume.
        self.surface = None;
        self.lifecycle.lost();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous animation; FIFO presentation paces it to the display.
        if let Some(entry) = self.surface.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let ours = self
            .surface
            .as_ref()
            .is_some_and(|e| e.with_window(|w| w.id()) == window_id);
        if !ours {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.surface = None;
                self.lifecycle.lost();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self
                    .surface
                    .as_ref()
                    .map(|e| e.with_window(|w| w.inner_size()))
                {
                    self.resize(size);
                }
            }

            WindowEvent::RedrawRequested => match self.draw_frame() {
                FrameOutcome::Presented | FrameOutcome::Skipped => {}
                FrameOutcome::Fatal => {
                    self.surface = None;
                    self.lifecycle.lost();
                    self.fail(event_loop, anyhow::anyhow!("fatal surface error (out of memory)"));
                }
            },

            _ => {}
        }
    }
}
