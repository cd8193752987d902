//! # mdsection
//!
//! Edit markdown documents one heading-delimited section at a time.
//!
//! A section is a heading line plus every following line up to, but not
//! including, the next heading of the same or a shallower level. Deeper
//! headings belong to the section body. This library finds a section by
//! title and either replaces its body or appends content after it.
//!
//! ## Example
//!
//! ```rust
//! use mdsection::{MatchMode, Operation, edit, extract_outline};
//!
//! let markdown = "# A\ntext1\n## B\ntext2\n# C\ntext3";
//!
//! let outline = extract_outline(markdown);
//! assert_eq!(outline.len(), 3);
//!
//! let outcome = edit(markdown, "A", Operation::Replace, "new", MatchMode::First).unwrap();
//! assert_eq!(outcome.text, "# A\n\nnew\n\n# C\ntext3");
//! ```

/// Configuration loaded from `config.toml`.
pub mod config;

/// Reading the document and new content from files, stdin or arguments.
pub mod input;

/// Logging setup for the command-line tool.
pub mod logging;

/// Outline rendering.
pub mod outline;

/// Line splitting and heading extraction.
pub mod parser;

/// Section lookup and mutation.
pub mod section;

/// Atomic document writes.
pub mod writer;

// Re-export commonly used types for convenience
pub use config::Config;
pub use parser::{Document, HeadingRecord, extract_outline};
pub use section::{
    EditOutcome, MatchMode, Operation, SectionError, SectionRange, apply_append, apply_replace,
    edit, locate_section,
};
