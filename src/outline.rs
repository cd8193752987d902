//! Outline rendering for `--list-sections`.

use serde::Serialize;

use crate::parser::HeadingRecord;
use crate::parser::utils::heading_marker;

/// Render one line per heading, indented two spaces per level below 1.
///
/// # Examples
///
/// ```
/// use mdsection::{outline::list_outline, parser::extract_outline};
///
/// let lines = list_outline(&extract_outline("# Top\n## Child\n### Leaf"));
/// assert_eq!(lines, vec!["# Top", "  ## Child", "    ### Leaf"]);
/// ```
pub fn list_outline(outline: &[HeadingRecord]) -> Vec<String> {
    outline
        .iter()
        .map(|heading| {
            let indent = "  ".repeat(heading.level.saturating_sub(1));
            format!("{}{} {}", indent, heading_marker(heading.level), heading.title)
        })
        .collect()
}

#[derive(Serialize)]
struct OutlineOutput<'a> {
    #[serde(rename = "headingCount")]
    heading_count: usize,
    headings: &'a [HeadingRecord],
}

/// Render the outline as pretty-printed JSON.
pub fn outline_json(outline: &[HeadingRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&OutlineOutput {
        heading_count: outline.len(),
        headings: outline,
    })
}
