use std::rc::Rc;

use crate::error::Error;
use crate::gl::{GlContext, GraphicsApi};

/// One GL buffer name bound to a fixed target.
pub(super) struct GpuBuffer<G: GraphicsApi> {
    gl: Rc<GlContext<G>>,
    handle: G::Buffer,
    target: u32,
    size: usize,
}

impl<G: GraphicsApi> GpuBuffer<G> {
    /// Creates the buffer and uploads `bytes` immutably.
    ///
    /// Leaves the buffer bound to `target`.
    pub(super) fn new(gl: &Rc<GlContext<G>>, target: u32, bytes: &[u8]) -> Result<Self, Error> {
        let handle = gl
            .call("create_buffer", |api| api.create_buffer())
            .map_err(|message| Error::Allocation {
                object: "buffer",
                message,
            })?;

        let buffer = Self {
            gl: Rc::clone(gl),
            handle,
            target,
            size: bytes.len(),
        };
        buffer.bind();
        gl.call("buffer_data_u8_slice", |api| {
            api.buffer_data_u8_slice(target, bytes, glow::STATIC_DRAW)
        });

        log::debug!("created buffer {handle:?} ({} bytes, target 0x{target:04X})", bytes.len());
        Ok(buffer)
    }

    pub(super) fn bind(&self) {
        self.gl
            .call("bind_buffer", |api| api.bind_buffer(self.target, Some(self.handle)));
    }

    pub(super) fn unbind(&self) {
        self.gl.call("bind_buffer", |api| api.bind_buffer(self.target, None));
    }

    pub(super) fn handle(&self) -> G::Buffer {
        self.handle
    }

    pub(super) fn size(&self) -> usize {
        self.size
    }
}

impl<G: GraphicsApi> Drop for GpuBuffer<G> {
    fn drop(&mut self) {
        log::debug!("deleting buffer {:?}", self.handle);
        self.gl.call("delete_buffer", |api| api.delete_buffer(self.handle));
    }
}
