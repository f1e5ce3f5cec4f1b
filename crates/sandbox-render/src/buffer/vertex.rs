use std::rc::Rc;

use bytemuck::Pod;

use super::raw::GpuBuffer;
use crate::error::Error;
use crate::gl::{GlContext, GraphicsApi};

/// Vertex attribute data on `ARRAY_BUFFER`.
///
/// The buffer is opaque bytes; a [`VertexBufferLayout`](crate::vertex::VertexBufferLayout)
/// describes how to read it when it is added to a vertex array.
pub struct VertexBuffer<G: GraphicsApi> {
    buffer: GpuBuffer<G>,
}

impl<G: GraphicsApi> VertexBuffer<G> {
    pub fn new<T: Pod>(gl: &Rc<GlContext<G>>, data: &[T]) -> Result<Self, Error> {
        let buffer = GpuBuffer::new(gl, glow::ARRAY_BUFFER, bytemuck::cast_slice(data))?;
        Ok(Self { buffer })
    }

    pub fn bind(&self) {
        self.buffer.bind();
    }

    pub fn unbind(&self) {
        self.buffer.unbind();
    }

    pub fn handle(&self) -> G::Buffer {
        self.buffer.handle()
    }

    /// Uploaded size in bytes.
    pub fn size(&self) -> usize {
        self.buffer.size()
    }
}
