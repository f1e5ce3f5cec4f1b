use std::rc::Rc;

use crate::buffer::IndexBuffer;
use crate::gl::{ErrorCategory, GlContext, GraphicsApi};
use crate::shader::Shader;
use crate::vertex::VertexArray;

use super::topology::Topology;

/// Renderer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    /// RGBA color the color buffer is cleared to.
    pub clear_color: [f32; 4],
    /// Also clear the depth buffer in [`Renderer::clear`].
    pub clear_depth: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            clear_depth: true,
        }
    }
}

/// Stateless draw helper.
///
/// Every draw binds what it uses right before issuing the call, so results do
/// not depend on whatever was bound earlier.
pub struct Renderer<G: GraphicsApi> {
    gl: Rc<GlContext<G>>,
    config: RendererConfig,
}

impl<G: GraphicsApi> Renderer<G> {
    pub fn new(gl: &Rc<GlContext<G>>, config: RendererConfig) -> Self {
        Self {
            gl: Rc::clone(gl),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn set_clear_color(&mut self, rgba: [f32; 4]) {
        self.config.clear_color = rgba;
    }

    /// Clears the color buffer (and depth, if configured).
    pub fn clear(&self) {
        let [r, g, b, a] = self.config.clear_color;
        self.gl.call("clear_color", |api| api.clear_color(r, g, b, a));

        let mut mask = glow::COLOR_BUFFER_BIT;
        if self.config.clear_depth {
            mask |= glow::DEPTH_BUFFER_BIT;
        }
        self.gl.call("clear", |api| api.clear(mask));
    }

    /// Indexed triangle draw over the whole index buffer.
    pub fn draw(&self, vertex_array: &VertexArray<G>, indices: &IndexBuffer<G>, shader: &Shader<G>) {
        shader.bind();
        vertex_array.bind();
        indices.bind();

        let Ok(count) = i32::try_from(indices.count()) else {
            self.gl.reject("draw_elements", ErrorCategory::InvalidValue);
            return;
        };
        self.gl.call("draw_elements", |api| {
            api.draw_elements(Topology::Triangles.gl_enum(), count, glow::UNSIGNED_INT, 0)
        });
    }

    /// Non-indexed draw of the first `count` vertices.
    ///
    /// A `count` above `i32::MAX` is reported as `GL_INVALID_VALUE` and
    /// nothing is drawn.
    pub fn draw_arrays(
        &self,
        vertex_array: &VertexArray<G>,
        shader: &Shader<G>,
        count: u32,
        topology: Topology,
    ) {
        shader.bind();
        vertex_array.bind();

        let Ok(count) = i32::try_from(count) else {
            self.gl.reject("draw_arrays", ErrorCategory::InvalidValue);
            return;
        };
        self.gl.call("draw_arrays", |api| {
            api.draw_arrays(topology.gl_enum(), 0, count)
        });
    }
}
