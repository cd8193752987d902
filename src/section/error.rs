use thiserror::Error;

/// Errors produced while locating or rewriting a section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    /// No heading matches the requested title.
    #[error("Section '{title}' not found.")]
    SectionNotFound { title: String },

    /// A mutating operation was given no content.
    #[error("no content supplied for section update")]
    EmptyContent,

    /// A section range that does not satisfy `start < end <= line count`.
    #[error("malformed section range: start {start}, end {end}")]
    MalformedRange { start: usize, end: usize },
}
