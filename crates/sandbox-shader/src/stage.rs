use std::fmt;

/// Programmable pipeline stage a source section is compiled for.
///
/// Ordering follows the pipeline (vertex first), which is also the order
/// sections are emitted when a [`ShaderSource`](crate::ShaderSource) is
/// serialized.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Stage {
    Vertex,
    Geometry,
    Fragment,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Vertex, Stage::Geometry, Stage::Fragment];

    /// Keyword used after `#shader` to select this stage.
    pub const fn keyword(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex",
            Stage::Geometry => "geometry",
            Stage::Fragment => "fragment",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Stage> {
        Stage::ALL.into_iter().find(|s| s.keyword() == keyword)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
