//! Reading the target document and the replacement content.

use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read content from stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Where the new section content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Read from a file on disk
    File(PathBuf),
    /// Read all of standard input
    Stdin,
    /// Content passed directly on the command line
    Inline(String),
}

impl ContentSource {
    /// Read the content into memory.
    pub fn read_content(&self) -> Result<String, InputError> {
        match self {
            ContentSource::File(path) => read_text(path),
            ContentSource::Stdin => read_from(std::io::stdin().lock()).map_err(InputError::Stdin),
            ContentSource::Inline(text) => Ok(text.clone()),
        }
    }
}

fn read_from(mut reader: impl Read) -> std::io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Read a UTF-8 text file, reporting a missing file distinctly.
pub fn read_text(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
