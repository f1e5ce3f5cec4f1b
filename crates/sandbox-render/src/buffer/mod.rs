//! GPU buffer objects.
//!
//! Every buffer is uploaded once at creation with `STATIC_DRAW`; there is no
//! update path. The GPU name is released when the wrapper is dropped.

mod index;
mod raw;
mod vertex;

pub use index::IndexBuffer;
pub use vertex::VertexBuffer;
