use std::collections::BTreeMap;

use crate::error::{ParseError, ParseErrorKind};
use crate::source::ShaderSource;
use crate::stage::Stage;

/// Token that starts a stage-declaration line.
pub const MARKER: &str = "#shader";

/// Splits a `#shader` source into its stage sections.
///
/// ```text
/// #shader vertex
/// ...vertex source...
/// #shader fragment
/// ...fragment source...
/// ```
///
/// Blank lines ahead of the first marker are skipped; any other line there is
/// an error, since it has no stage to belong to. Declaring a stage again
/// resumes appending to its existing section. A leading byte-order mark is
/// ignored.
pub fn parse_str(src: &str) -> Result<ShaderSource, ParseError> {
    let src = src.strip_prefix('\u{FEFF}').unwrap_or(src);
    let mut source = ShaderSource::new();
    // first marker line per stage, for error reporting
    let mut declared: BTreeMap<Stage, usize> = BTreeMap::new();
    let mut active: Option<Stage> = None;

    for (idx, line) in src.lines().enumerate() {
        let line_no = idx + 1;

        if let Some(rest) = marker_args(line) {
            let stage = parse_marker(rest, line_no)?;
            declared.entry(stage).or_insert(line_no);
            source.declare(stage);
            active = Some(stage);
            continue;
        }

        match active {
            Some(stage) => source.append_line(stage, line),
            None if line.trim().is_empty() => {}
            None => return Err(ParseError::new(ParseErrorKind::LineBeforeMarker, line_no)),
        }
    }

    if declared.is_empty() {
        return Err(ParseError::new(ParseErrorKind::NoStages, src.lines().count().max(1)));
    }

    let empty = declared
        .iter()
        .filter(|(stage, _)| source.get(**stage).is_none_or(|t| t.trim().is_empty()))
        .min_by_key(|(_, line)| **line);
    if let Some((stage, line)) = empty {
        return Err(ParseError::new(ParseErrorKind::EmptyStage(*stage), *line));
    }

    Ok(source)
}

/// Returns the text after `#shader` when `line` is a marker line.
fn marker_args(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(MARKER)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        // `#shaderfoo` is not a marker
        Some(_) => None,
    }
}

fn parse_marker(args: &str, line: usize) -> Result<Stage, ParseError> {
    let keyword = args
        .split_whitespace()
        .next()
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingStage, line))?;
    Stage::from_keyword(keyword)
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnknownStage(keyword.to_string()), line))
}
