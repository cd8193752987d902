//! Section rewriting.
//!
//! Both operations are pure: they read a [`Document`] and return the new
//! full text. New content is always surrounded by exactly one blank line on
//! each side.

use super::{SectionError, SectionRange};
use crate::parser::Document;

/// The mutation applied to a located section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Replace the section body, keeping its heading line
    Replace,
    /// Insert content after the section body, before the next heading
    Append,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Replace => write!(f, "replace"),
            Operation::Append => write!(f, "append"),
        }
    }
}

/// Split content into lines after dropping trailing newlines.
///
/// # Errors
///
/// Returns [`SectionError::EmptyContent`] for empty or whitespace-only content.
fn content_lines(content: &str) -> Result<Vec<&str>, SectionError> {
    if content.trim().is_empty() {
        return Err(SectionError::EmptyContent);
    }
    Ok(content.trim_end_matches('\n').split('\n').collect())
}

/// Splice `content` between `doc.lines[..keep]` and `doc.lines[resume..]`.
fn splice(doc: &Document, keep: usize, resume: usize, content: &str) -> Result<String, SectionError> {
    let inserted = content_lines(content)?;

    let mut lines: Vec<&str> = Vec::with_capacity(doc.line_count() + inserted.len() + 2);
    lines.extend(doc.lines[..keep].iter().map(String::as_str));
    lines.push("");
    lines.extend(inserted);
    lines.push("");
    lines.extend(doc.lines[resume..].iter().map(String::as_str));

    Ok(lines.join("\n"))
}

/// Replace the body of `range` with `content`.
///
/// The heading line is kept; everything after it up to `range.end_line` is
/// discarded.
///
/// # Examples
///
/// ```
/// use mdsection::parser::Document;
/// use mdsection::section::{apply_replace, SectionRange};
///
/// let doc = Document::new("# A\ntext1\n## B\ntext2\n# C\ntext3");
/// let range = SectionRange::new(0, 4, 1).unwrap();
/// assert_eq!(apply_replace(&doc, &range, "new").unwrap(), "# A\n\nnew\n\n# C\ntext3");
/// ```
pub fn apply_replace(doc: &Document, range: &SectionRange, content: &str) -> Result<String, SectionError> {
    range.check_bounds(doc.line_count())?;
    splice(doc, range.start_line + 1, range.end_line, content)
}

/// Insert `content` right after the body of `range`.
///
/// The section, including nested subsections, is kept unchanged.
pub fn apply_append(doc: &Document, range: &SectionRange, content: &str) -> Result<String, SectionError> {
    range.check_bounds(doc.line_count())?;
    splice(doc, range.end_line, range.end_line, content)
}

/// Dispatch to [`apply_replace`] or [`apply_append`].
pub fn apply_operation(
    doc: &Document,
    range: &SectionRange,
    operation: Operation,
    content: &str,
) -> Result<String, SectionError> {
    match operation {
        Operation::Replace => apply_replace(doc, range, content),
        Operation::Append => apply_append(doc, range, content),
    }
}
