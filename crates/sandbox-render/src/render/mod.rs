//! Frame clearing and draw submission.
//!
//! Convention:
//! - indexed draws use `u32` indices and triangle lists
//! - the caller owns every resource; the renderer only borrows them per call

mod renderer;
mod topology;

pub use renderer::{Renderer, RendererConfig};
pub use topology::Topology;
