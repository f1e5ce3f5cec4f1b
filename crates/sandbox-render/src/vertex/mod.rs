//! Vertex layouts and vertex array objects.
//!
//! A [`VertexBufferLayout`] says how the bytes of a vertex buffer decompose
//! into typed attributes; a [`VertexArray`] binds (buffer, layout) pairs to
//! sequential shader attribute indices.

mod array;
mod layout;

pub use array::{AttributeSlot, VertexArray};
pub use layout::{AttribType, VertexAttribute, VertexBufferLayout};
