/// Component type of a vertex attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttribType {
    F32,
    I32,
    U32,
    U8,
}

impl AttribType {
    pub const fn size_bytes(self) -> u32 {
        match self {
            AttribType::F32 | AttribType::I32 | AttribType::U32 => 4,
            AttribType::U8 => 1,
        }
    }

    /// `I32`/`U32` reach the shader as `int`/`uint`; the rest as floats.
    pub const fn is_integer(self) -> bool {
        matches!(self, AttribType::I32 | AttribType::U32)
    }

    pub const fn gl_enum(self) -> u32 {
        match self {
            AttribType::F32 => glow::FLOAT,
            AttribType::I32 => glow::INT,
            AttribType::U32 => glow::UNSIGNED_INT,
            AttribType::U8 => glow::UNSIGNED_BYTE,
        }
    }
}

/// One attribute inside a vertex.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    pub ty: AttribType,
    /// Components per vertex (1..=4 for GL; not enforced here).
    pub count: u32,
    pub normalized: bool,
    /// Byte offset from the start of the vertex.
    pub offset: u32,
}

impl VertexAttribute {
    #[inline]
    pub fn size_bytes(&self) -> u32 {
        self.count * self.ty.size_bytes()
    }
}

/// How the bytes of one vertex split into attributes.
///
/// Attributes are tightly packed in push order: each offset is the sum of the
/// sizes before it and the stride is the sum of all of them.
///
/// ```
/// use sandbox_render::vertex::VertexBufferLayout;
///
/// let mut layout = VertexBufferLayout::new();
/// layout.push_f32(3).push_f32(2);
/// assert_eq!(layout.stride(), 20);
/// assert_eq!(layout.attributes()[1].offset, 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexBufferLayout {
    attributes: Vec<VertexAttribute>,
    stride: u32,
}

impl VertexBufferLayout {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute at the current end of the vertex.
    pub fn push(&mut self, ty: AttribType, count: u32, normalized: bool) -> &mut Self {
        let attribute = VertexAttribute {
            ty,
            count,
            normalized,
            offset: self.stride,
        };
        self.stride += attribute.size_bytes();
        self.attributes.push(attribute);
        self
    }

    pub fn push_f32(&mut self, count: u32) -> &mut Self {
        self.push(AttribType::F32, count, false)
    }

    /// Integer components, read by the shader as `int`/`ivecN`.
    pub fn push_i32(&mut self, count: u32) -> &mut Self {
        self.push(AttribType::I32, count, false)
    }

    /// Integer components, read by the shader as `uint`/`uvecN`.
    pub fn push_u32(&mut self, count: u32) -> &mut Self {
        self.push(AttribType::U32, count, false)
    }

    /// Byte components, normalized to `0.0..=1.0` (e.g. RGBA8 colors).
    pub fn push_u8(&mut self, count: u32) -> &mut Self {
        self.push(AttribType::U8, count, true)
    }

    #[inline]
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Bytes per vertex.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
