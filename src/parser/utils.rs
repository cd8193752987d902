//! Utility functions for heading detection.
//!
//! Shared helpers used by the outline extractor.

use regex::Regex;
use std::sync::OnceLock;

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)").unwrap())
}

/// Split a line into its heading level and trimmed title.
///
/// Returns `Some((level, title))` if the line starts with 1-6 `#` characters
/// followed by at least one whitespace character, or `None` otherwise.
/// Indented lines are not headings.
///
/// # Examples
///
/// ```
/// # use mdsection::parser::utils::parse_heading_line;
/// assert_eq!(parse_heading_line("## Usage "), Some((2, "Usage")));
/// assert_eq!(parse_heading_line("#NoSpace"), None);
/// assert_eq!(parse_heading_line("####### Too deep"), None);
/// ```
pub fn parse_heading_line(line: &str) -> Option<(usize, &str)> {
    let caps = heading_pattern().captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let title = caps.get(2).map_or("", |m| m.as_str()).trim();
    Some((level, title))
}

/// Render the `#` marker run for a heading level.
pub fn heading_marker(level: usize) -> String {
    "#".repeat(level)
}
