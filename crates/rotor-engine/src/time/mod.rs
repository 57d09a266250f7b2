//! Frame timing.
//!
//! One `FrameClock` lives in each window entry and is ticked once per
//! presented frame. It only feeds diagnostics; animation in this workspace is
//! frame-counted, not time-based.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
