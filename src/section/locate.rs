//! Section lookup by title.
//!
//! A section runs from its heading line up to, but not including, the next
//! heading whose level is equal or shallower. Deeper headings in between are
//! part of the section body.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SectionError;
use crate::parser::HeadingRecord;

/// How a target title is matched against heading titles.
///
/// Both modes compare case-insensitively and accept a heading whose title
/// contains the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// First heading (in document order) that equals or contains the target.
    ///
    /// A short target such as `"B"` matches `"Build"` if it comes before a
    /// heading titled exactly `"B"`.
    #[default]
    First,
    /// An exact (case-insensitive) title anywhere in the outline wins;
    /// otherwise the first substring match.
    PreferExact,
}

/// Line extent of a located section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    /// Index of the heading line
    pub start_line: usize,
    /// Index of the first line after the section (exclusive)
    pub end_line: usize,
    /// Level of the section heading
    pub level: usize,
}

impl SectionRange {
    /// Build a range, rejecting `start_line >= end_line`.
    pub fn new(start_line: usize, end_line: usize, level: usize) -> Result<Self, SectionError> {
        if start_line >= end_line {
            return Err(SectionError::MalformedRange {
                start: start_line,
                end: end_line,
            });
        }
        Ok(Self {
            start_line,
            end_line,
            level,
        })
    }

    /// Check the range still fits a document of `line_count` lines.
    pub fn check_bounds(&self, line_count: usize) -> Result<(), SectionError> {
        if self.start_line >= self.end_line || self.end_line > line_count {
            return Err(SectionError::MalformedRange {
                start: self.start_line,
                end: self.end_line,
            });
        }
        Ok(())
    }
}

fn title_matches(title: &str, target_lower: &str) -> bool {
    let title_lower = title.to_lowercase();
    title_lower == target_lower || title_lower.contains(target_lower)
}

/// Index into `outline` of the heading selected by `target` under `mode`.
pub fn find_heading_index(outline: &[HeadingRecord], target: &str, mode: MatchMode) -> Option<usize> {
    let target_lower = target.to_lowercase();

    if mode == MatchMode::PreferExact {
        if let Some(idx) = outline
            .iter()
            .position(|h| h.title.to_lowercase() == target_lower)
        {
            return Some(idx);
        }
    }

    outline
        .iter()
        .position(|h| title_matches(&h.title, &target_lower))
}

/// Range of the section whose heading is `outline[idx]`.
///
/// The section ends at the first later heading with a level equal to or
/// shallower than its own, or at `line_count`. An `idx` past the outline or
/// an outline that does not fit `line_count` is a [`SectionError::MalformedRange`].
pub fn range_at(outline: &[HeadingRecord], idx: usize, line_count: usize) -> Result<SectionRange, SectionError> {
    let heading = outline.get(idx).ok_or(SectionError::MalformedRange {
        start: idx,
        end: line_count,
    })?;
    let end_line = outline[idx + 1..]
        .iter()
        .find(|next| next.level <= heading.level)
        .map_or(line_count, |next| next.line_index);

    let range = SectionRange::new(heading.line_index, end_line, heading.level)?;
    range.check_bounds(line_count)?;
    Ok(range)
}

/// Locate the section titled `target` in a document of `line_count` lines.
///
/// # Errors
///
/// Returns [`SectionError::SectionNotFound`] when no heading matches, and
/// [`SectionError::MalformedRange`] if the outline does not fit the line count.
///
/// # Examples
///
/// ```
/// use mdsection::parser::Document;
/// use mdsection::section::{MatchMode, locate_section};
///
/// let doc = Document::new("# A\ntext1\n## B\ntext2\n# C\ntext3");
/// let range = locate_section(&doc.outline(), "a", doc.line_count(), MatchMode::First).unwrap();
/// assert_eq!((range.start_line, range.end_line, range.level), (0, 4, 1));
/// ```
pub fn locate_section(
    outline: &[HeadingRecord],
    target: &str,
    line_count: usize,
    mode: MatchMode,
) -> Result<SectionRange, SectionError> {
    let idx = find_heading_index(outline, target, mode).ok_or_else(|| {
        SectionError::SectionNotFound {
            title: target.to_string(),
        }
    })?;

    let range = range_at(outline, idx, line_count)?;

    debug!(
        title = target,
        heading = %outline[idx].title,
        start = range.start_line,
        end = range.end_line,
        "located section"
    );

    Ok(range)
}
