//! Frame timing.
//!
//! One `FrameClock` per render loop; [`crate::core::run`] ticks it once per
//! frame and passes the resulting `FrameTime` to the application.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
