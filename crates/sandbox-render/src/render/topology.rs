/// Primitive assembly mode for a draw call.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Topology {
    Points,
    Lines,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl Topology {
    pub const fn gl_enum(self) -> u32 {
        match self {
            Topology::Points => glow::POINTS,
            Topology::Lines => glow::LINES,
            Topology::LineStrip => glow::LINE_STRIP,
            Topology::Triangles => glow::TRIANGLES,
            Topology::TriangleStrip => glow::TRIANGLE_STRIP,
            Topology::TriangleFan => glow::TRIANGLE_FAN,
        }
    }
}
