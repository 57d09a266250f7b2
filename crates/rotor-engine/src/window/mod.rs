//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single rendering window, and maps
//! platform lifecycle events onto surface callbacks.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
