use std::rc::Rc;

use super::raw::GpuBuffer;
use crate::error::Error;
use crate::gl::{GlContext, GraphicsApi};

/// `u32` indices on `ELEMENT_ARRAY_BUFFER`.
///
/// [`count`](Self::count) is what [`Renderer::draw`](crate::render::Renderer::draw)
/// passes as the element count.
pub struct IndexBuffer<G: GraphicsApi> {
    buffer: GpuBuffer<G>,
    count: usize,
}

impl<G: GraphicsApi> IndexBuffer<G> {
    pub fn new(gl: &Rc<GlContext<G>>, indices: &[u32]) -> Result<Self, Error> {
        let buffer = GpuBuffer::new(gl, glow::ELEMENT_ARRAY_BUFFER, bytemuck::cast_slice(indices))?;
        Ok(Self {
            count: buffer.size() / size_of::<u32>(),
            buffer,
        })
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

    /// Number of indices.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Uploaded size in bytes.
    pub fn size(&self) -> usize {
        self.buffer.size()
    }
}
