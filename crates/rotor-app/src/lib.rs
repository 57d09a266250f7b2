//! Rotating-shape demo built on the rotor fixed-function context.
//!
//! - [`shapes`]: static geometry holders (triangle, pyramid) that know how to
//!   draw themselves through a [`RenderContext`](rotor_engine::render::RenderContext)
//! - [`renderer`]: the surface renderer that spins one shape

pub mod renderer;
pub mod shapes;

#[cfg(test)]
mod testing;

pub use renderer::{FrameRenderer, RendererConfig};
pub use shapes::{Pyramid, Shape, Triangle};
