use std::rc::Rc;

use crate::buffer::VertexBuffer;
use crate::error::Error;
use crate::gl::{GlContext, GraphicsApi};

use super::layout::{VertexAttribute, VertexBufferLayout};

/// An attribute index wired up by [`VertexArray::add_buffer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeSlot {
    /// Shader attribute location (`layout(location = N)`).
    pub index: u32,
    pub attribute: VertexAttribute,
    /// Stride of the layout the attribute came from.
    pub stride: u32,
}

/// A vertex array object collecting attribute bindings from one or more
/// vertex buffers.
///
/// Attribute indices are handed out sequentially across every
/// [`add_buffer`](Self::add_buffer) call: the first buffer's attributes start
/// at 0 and later buffers continue where the previous one stopped. Add
/// buffers in the order the shader declares its input locations.
pub struct VertexArray<G: GraphicsApi> {
    gl: Rc<GlContext<G>>,
    handle: G::VertexArray,
    slots: Vec<AttributeSlot>,
}

impl<G: GraphicsApi> VertexArray<G> {
    pub fn new(gl: &Rc<GlContext<G>>) -> Result<Self, Error> {
        let handle = gl
            .call("create_vertex_array", |api| api.create_vertex_array())
            .map_err(|message| Error::Allocation {
                object: "vertex array",
                message,
            })?;
        log::debug!("created vertex array {handle:?}");

        Ok(Self {
            gl: Rc::clone(gl),
            handle,
            slots: Vec::new(),
        })
    }

    /// Binds `buffer` into this array using `layout`, one attribute index per
    /// layout attribute.
    pub fn add_buffer(&mut self, buffer: &VertexBuffer<G>, layout: &VertexBufferLayout) {
        self.bind();
        buffer.bind();

        let stride = layout.stride();
        for attribute in layout.attributes() {
            let index = self.next_index();
            self.gl.call("enable_vertex_attrib_array", |api| {
                api.enable_vertex_attrib_array(index)
            });
            let (size, ty) = (attribute.count as i32, attribute.ty.gl_enum());
            let offset = attribute.offset as i32;
            if attribute.ty.is_integer() {
                self.gl.call("vertex_attrib_pointer_i32", |api| {
                    api.vertex_attrib_pointer_i32(index, size, ty, stride as i32, offset)
                });
            } else {
                self.gl.call("vertex_attrib_pointer_f32", |api| {
                    api.vertex_attrib_pointer_f32(
                        index,
                        size,
                        ty,
                        attribute.normalized,
                        stride as i32,
                        offset,
                    )
                });
            }
            self.slots.push(AttributeSlot {
                index,
                attribute: *attribute,
                stride,
            });
        }
    }

    pub fn bind(&self) {
        self.gl
            .call("bind_vertex_array", |api| api.bind_vertex_array(Some(self.handle)));
    }

    pub fn unbind(&self) {
        self.gl.call("bind_vertex_array", |api| api.bind_vertex_array(None));
    }

    pub fn handle(&self) -> G::VertexArray {
        self.handle
    }

    /// Attribute index the next added attribute will get.
    #[inline]
    pub fn next_index(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Every attribute wired so far, in index order.
    #[inline]
    pub fn slots(&self) -> &[AttributeSlot] {
        &self.slots
    }
}

impl<G: GraphicsApi> Drop for VertexArray<G> {
    fn drop(&mut self) {
        log::debug!("deleting vertex array {:?}", self.handle);
        self.gl
            .call("delete_vertex_array", |api| api.delete_vertex_array(self.handle));
    }
}
