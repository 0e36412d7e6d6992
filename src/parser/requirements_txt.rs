//! requirements.txt parser
//!
//! Each non-blank line pins one package as `name<operator><version>`.
//! Comments, extras and environment markers are not supported.
//!
//! Operators are searched in the order of [`Operator::ALL`] and the first one
//! contained anywhere in the line decides the split point, so
//! `foo>1.0==2` splits at `==`, not at `>`.

use std::iter::{Enumerate, FusedIterator};
use std::str::Lines;

use tracing::info;

use crate::parser::error::ParseError;
use crate::parser::types::{ManifestEntry, Operator};

/// Parser for requirements.txt manifests
pub struct RequirementsTxtParser;

impl RequirementsTxtParser {
    pub fn new() -> Self {
        Self
    }

    /// Lazily parse `content`, one entry per non-blank line
    pub fn entries<'a>(&self, content: &'a str) -> ManifestEntries<'a> {
        ManifestEntries {
            lines: content.lines().enumerate(),
        }
    }
}

impl Default for RequirementsTxtParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-pass iterator over the entries of a manifest, in file order
pub struct ManifestEntries<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl Iterator for ManifestEntries<'_> {
    type Item = Result<ManifestEntry, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line_num, line) = self.lines.find(|(_, line)| !line.trim().is_empty())?;
        let line = line.trim_end();

        info!("{}", line);

        Some(parse_line(line_num, line))
    }
}

impl FusedIterator for ManifestEntries<'_> {}

/// Parse a single manifest line
pub fn parse_line(line_num: usize, line: &str) -> Result<ManifestEntry, ParseError> {
    let Some((operator, (name, version))) = Operator::ALL
        .into_iter()
        .find_map(|op| line.split_once(op.as_str()).map(|parts| (op, parts)))
    else {
        return Err(ParseError::NoOperator {
            line: line_num,
            content: line.to_string(),
        });
    };

    let name = name.trim();
    let version = version.trim();

    if name.is_empty() {
        return Err(ParseError::MissingName {
            line: line_num,
            content: line.to_string(),
        });
    }

    if version.is_empty() {
        return Err(ParseError::MissingVersion {
            line: line_num,
            content: line.to_string(),
        });
    }

    Ok(ManifestEntry {
        name: name.to_string(),
        operator,
        version: version.to_string(),
        line: line_num,
    })
}
