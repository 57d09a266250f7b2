//! Fixed-function rendering context on top of wgpu.
//!
//! Callers program against [`RenderContext`], a GL ES 1.x-shaped command set
//! without a matrix stack. The runtime hands them a [`Recorder`], which keeps
//! the persistent [`FixedFunctionState`] and snapshots clears and draws into a
//! [`CommandList`]; [`FixedFunctionRenderer`] then turns that list into render
//! passes.
//!
//! Convention:
//! - client arrays are copied at draw time and uploaded fresh every frame
//! - projection/model-view arrive with each draw as a [`Transform`](crate::coords::Transform)

mod backend;
mod common;
mod context;
mod recorder;
mod state;
mod target;
mod types;

pub use backend::FixedFunctionRenderer;
pub use context::RenderContext;
pub use recorder::{Command, CommandList, DrawCall, Recorder};
pub use state::{ClientArrayBinding, FixedFunctionState, RasterState};
pub use target::{RenderCtx, RenderTarget};
pub use types::{
    Capability, ClearMask, ClientArray, DepthFunc, FrontFace, GlError, HintMode, HintTarget,
    IndexType, Indices, Primitive, ShadeModel,
};
