//! OpenGL access and the error-check discipline around it.
//!
//! This module is responsible for:
//! - the [`GraphicsApi`] seam and its glow-backed implementation
//! - the shared [`GlContext`] every GPU object is created from
//! - draining and decoding `glGetError` around each wrapped call

mod api;
mod context;
pub mod debug;
#[cfg(test)]
pub(crate) mod headless;
mod native;

pub use api::GraphicsApi;
pub use context::{ErrorPolicy, GlConfig, GlContext};
pub use debug::{ErrorCategory, GlError};
#[cfg(test)]
pub(crate) use headless::{headless_context, Call, HeadlessApi, UniformValue};
pub use native::GlowApi;
