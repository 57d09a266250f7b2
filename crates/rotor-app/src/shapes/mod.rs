//! Static shape geometry.
//!
//! Each shape owns CPU-side position, color and index arrays built once from
//! constants. They are handed to the context on every draw, so nothing needs
//! rebuilding when the rendering surface is recreated.

mod geometry;
mod pyramid;
mod triangle;

pub use geometry::Geometry;
pub use pyramid::Pyramid;
pub use triangle::Triangle;

use rotor_engine::coords::Transform;
use rotor_engine::render::RenderContext;

/// A drawable shape backed by immutable [`Geometry`].
pub trait Shape {
    fn name(&self) -> &'static str;

    fn geometry(&self) -> &Geometry;

    fn draw(&self, gl: &mut dyn RenderContext, transform: &Transform) {
        self.geometry().draw(gl, transform);
    }
}

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 2] = ["triangle", "pyramid"];

/// Looks up a built-in shape by its [`Shape::name`].
pub fn by_name(name: &str) -> Option<Box<dyn Shape>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "triangle" => Some(Box::new(Triangle::new())),
        "pyramid" => Some(Box::new(Pyramid::new())),
        _ => None,
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn geometry(&self) -> &Geometry {
        (**self).geometry()
    }

    fn draw(&self, gl: &mut dyn RenderContext, transform: &Transform) {
        (**self).draw(gl, transform)
    }
}
