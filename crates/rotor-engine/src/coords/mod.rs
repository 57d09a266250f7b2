//! Coordinate, color and matrix value types shared by the rendering context
//! and its callers.
//!
//! Conventions follow fixed-function GL:
//! - viewports are in physical pixels with a bottom-left origin
//! - eye space is right-handed, the camera looks down -Z
//! - projections produce GL clip space (depth in [-1, 1]); the wgpu backend
//!   remaps depth when it builds the final clip matrix

mod color;
mod projection;
mod transform;
mod viewport;

pub use color::Color;
pub use projection::Perspective;
pub use transform::{rotation_deg, Transform};
pub use viewport::Viewport;
