//! Document splitting and outline extraction.
//!
//! A [`Document`] is the flat line sequence of a markdown file. Its outline is
//! the ordered list of ATX headings found in it, recomputed on every call.

pub mod utils;

use serde::Serialize;

/// A single ATX heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    /// Zero-based index of the heading line
    #[serde(rename = "line")]
    pub line_index: usize,
    /// Heading level (1-6)
    pub level: usize,
    /// Heading text without the `#` markers, trimmed
    pub title: String,
}

/// A markdown document as an ordered sequence of lines.
///
/// Lines are split on `\n` only, so joining them back with `\n` reproduces
/// the original text exactly, including a trailing newline (kept as a final
/// empty line) and any `\r` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<String>,
}

impl Document {
    /// Split `text` into a document.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Extract all headings in document order.
    pub fn outline(&self) -> Vec<HeadingRecord> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(line_index, line)| {
                utils::parse_heading_line(line).map(|(level, title)| HeadingRecord {
                    line_index,
                    level,
                    title: title.to_string(),
                })
            })
            .collect()
    }
}

/// Extract the heading outline of `text`.
///
/// # Examples
///
/// ```
/// use mdsection::parser::extract_outline;
///
/// let outline = extract_outline("# Title\nbody\n## Part\n");
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline[1].line_index, 2);
/// assert_eq!(outline[1].title, "Part");
/// ```
pub fn extract_outline(text: &str) -> Vec<HeadingRecord> {
    Document::new(text).outline()
}
