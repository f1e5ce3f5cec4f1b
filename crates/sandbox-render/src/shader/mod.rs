//! Shader programs.
//!
//! A program starts as a single `#shader` file (split by `sandbox-shader`),
//! each stage is compiled on its own and the stages are linked into one
//! program object. Compile and link failures carry the driver's info log.

mod compile;
mod program;
mod uniform;

pub use compile::{compile_stage, link, stage_kind};
pub use program::Shader;
pub use sandbox_shader::{ShaderSource, Stage};
