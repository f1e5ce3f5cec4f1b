use std::fmt;

use crate::stage::Stage;

/// What went wrong while splitting a shader source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A source line appeared before any `#shader` marker selected a stage.
    LineBeforeMarker,
    /// A `#shader` marker with no stage keyword after it.
    MissingStage,
    /// A `#shader` marker naming a stage outside the known vocabulary.
    UnknownStage(String),
    /// A declared stage ended up with no (non-whitespace) source text.
    EmptyStage(Stage),
    /// The input declared no stage at all.
    NoStages,
}

/// A parse error from the `#shader` source format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based source line number where the error occurred.
    pub line: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self { kind, line }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shader source error at line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::LineBeforeMarker => {
                f.write_str("source line before any `#shader <stage>` marker")
            }
            ParseErrorKind::MissingStage => f.write_str("`#shader` marker without a stage name"),
            ParseErrorKind::UnknownStage(name) => write!(
                f,
                "unknown stage `{name}` (expected one of: {})",
                Stage::ALL.map(Stage::keyword).join(", ")
            ),
            ParseErrorKind::EmptyStage(stage) => write!(f, "{stage} stage has no source"),
            ParseErrorKind::NoStages => f.write_str("no `#shader <stage>` section found"),
        }
    }
}

impl std::error::Error for ParseError {}
