//! Sandbox rendering core.
//!
//! A thin layer over an OpenGL 3.3 core context: vertex and index buffers,
//! vertex layouts and arrays, `#shader` programs with cached uniforms, and a
//! renderer that clears and draws. Every GL call goes through
//! [`GlContext::call`], which drains and reports `glGetError` around it.
//!
//! The host owns the window and makes the context current, then wraps it:
//!
//! ```no_run
//! # fn host_context() -> glow::Context { unimplemented!() }
//! use sandbox_render::{GlConfig, GlContext, GlowApi, Renderer, RendererConfig, Shader};
//!
//! # fn main() -> Result<(), sandbox_render::Error> {
//! // SAFETY: the host made this context current on this thread.
//! let gl = GlContext::new(unsafe { GlowApi::new(host_context()) }, GlConfig::default());
//! let shader = Shader::from_file(&gl, "res/shaders/basic.shader")?;
//! let renderer = Renderer::new(&gl, RendererConfig::default());
//!
//! renderer.clear();
//! shader.set_uniform_1f("time", 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! Wrappers hold an `Rc` to the context, so they stay on the thread that
//! owns it.

pub mod buffer;
pub mod core;
pub mod error;
pub mod gl;
pub mod logging;
pub mod render;
pub mod shader;
pub mod time;
pub mod vertex;

pub use buffer::{IndexBuffer, VertexBuffer};
pub use error::{Error, ShaderFileError};
pub use gl::{ErrorPolicy, GlConfig, GlContext, GlError, GlowApi, GraphicsApi};
pub use render::{Renderer, RendererConfig, Topology};
pub use shader::{Shader, ShaderSource, Stage};
pub use vertex::{VertexArray, VertexBufferLayout};
