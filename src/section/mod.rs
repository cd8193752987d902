//! Locating and rewriting heading-delimited sections.
//!
//! The pipeline is pure: text is split into a [`Document`], its outline is
//! extracted, the target section is located and the requested [`Operation`]
//! produces the new full text. Nothing is cached between calls.

mod error;
pub mod locate;
pub mod mutate;

pub use error::SectionError;
pub use locate::{MatchMode, SectionRange, find_heading_index, locate_section, range_at};
pub use mutate::{Operation, apply_append, apply_operation, apply_replace};

use tracing::debug;

use crate::parser::{Document, HeadingRecord};

/// A located section together with its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundSection {
    pub heading: HeadingRecord,
    pub range: SectionRange,
}

/// Result of a successful [`edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The rewritten document text
    pub text: String,
    /// Heading of the section that was edited
    pub heading: HeadingRecord,
    /// Extent of the section in the original document
    pub range: SectionRange,
}

/// Locate `title` in `doc`, returning the matched heading and its range.
///
/// # Errors
///
/// Returns [`SectionError::SectionNotFound`] when no heading matches.
pub fn find_section(doc: &Document, title: &str, mode: MatchMode) -> Result<FoundSection, SectionError> {
    let outline = doc.outline();
    debug!(headings = outline.len(), "extracted outline");

    let idx = find_heading_index(&outline, title, mode).ok_or_else(|| {
        SectionError::SectionNotFound {
            title: title.to_string(),
        }
    })?;
    let range = range_at(&outline, idx, doc.line_count())?;

    Ok(FoundSection {
        heading: outline[idx].clone(),
        range,
    })
}

/// Apply `operation` with `content` to the section titled `title`.
///
/// # Errors
///
/// Returns [`SectionError::EmptyContent`] for blank content (checked before
/// the lookup), [`SectionError::SectionNotFound`] when no heading matches.
///
/// # Examples
///
/// ```
/// use mdsection::section::{edit, MatchMode, Operation};
///
/// let text = "# A\ntext1\n## B\ntext2\n# C\ntext3";
/// let outcome = edit(text, "A", Operation::Replace, "new", MatchMode::First).unwrap();
/// assert_eq!(outcome.text, "# A\n\nnew\n\n# C\ntext3");
/// assert_eq!(outcome.heading.title, "A");
/// ```
pub fn edit(
    text: &str,
    title: &str,
    operation: Operation,
    content: &str,
    mode: MatchMode,
) -> Result<EditOutcome, SectionError> {
    if content.trim().is_empty() {
        return Err(SectionError::EmptyContent);
    }

    let doc = Document::new(text);
    let FoundSection { heading, range } = find_section(&doc, title, mode)?;
    let text = apply_operation(&doc, &range, operation, content)?;

    debug!(%operation, heading = %heading.title, "applied section edit");

    Ok(EditOutcome {
        text,
        heading,
        range,
    })
}
