//! Rotor engine crate.
//!
//! Platform + GPU runtime for fixed-function style renderers: a winit window
//! loop, wgpu device/surface management, and a GL ES 1.x-shaped rendering
//! context emulated on wgpu.

pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
