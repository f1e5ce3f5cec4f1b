use std::collections::BTreeMap;
use std::fmt;

use crate::parser::MARKER;
use crate::stage::Stage;

/// Per-stage source text split out of one `#shader` file.
///
/// Each section holds the verbatim lines of its stage, every line terminated
/// by `\n`. Marker lines themselves are not part of any section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    sections: BTreeMap<Stage, String>,
}

impl ShaderSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for inline sources.
    pub fn with_stage(mut self, stage: Stage, text: impl Into<String>) -> Self {
        self.insert(stage, text);
        self
    }

    /// Sets the text of `stage`, returning the previous text if any.
    pub fn insert(&mut self, stage: Stage, text: impl Into<String>) -> Option<String> {
        self.sections.insert(stage, text.into())
    }

    pub fn get(&self, stage: Stage) -> Option<&str> {
        self.sections.get(&stage).map(String::as_str)
    }

    pub fn contains(&self, stage: Stage) -> bool {
        self.sections.contains_key(&stage)
    }

    /// Declared stages in pipeline order.
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.sections.keys().copied()
    }

    /// `(stage, text)` pairs in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &str)> + '_ {
        self.sections.iter().map(|(s, t)| (*s, t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub(crate) fn append_line(&mut self, stage: Stage, line: &str) {
        let text = self.sections.entry(stage).or_default();
        text.push_str(line);
        text.push('\n');
    }

    pub(crate) fn declare(&mut self, stage: Stage) {
        self.sections.entry(stage).or_default();
    }
}

/// Serializes back into the `#shader` file format.
impl fmt::Display for ShaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (stage, text) in self.iter() {
            writeln!(f, "{MARKER} {stage}")?;
            f.write_str(text)?;
            if !text.is_empty() && !text.ends_with('\n') {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
