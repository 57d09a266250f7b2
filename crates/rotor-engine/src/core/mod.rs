//! Contract between the runtime and application renderers.
//!
//! The runtime owns the platform loop and the GPU; applications implement
//! [`SurfaceRenderer`] and only ever see a `&mut dyn RenderContext`.

mod lifecycle;
mod renderer;

pub use lifecycle::{Lifecycle, SurfaceState};
pub use renderer::SurfaceRenderer;
