//! Persisting an edited document.

use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Cannot determine parent directory of {0}")]
    NoParent(PathBuf),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Write `text` to `path`.
///
/// With `atomic` set the text goes to a temp file in the same directory which
/// is then renamed over `path`, so readers never see a partial file.
pub fn write_document(path: &Path, text: &str, atomic: bool) -> Result<(), WriteError> {
    let io_err = |source: std::io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    if !atomic {
        std::fs::write(path, text).map_err(io_err)?;
        info!(path = %path.display(), bytes = text.len(), "wrote document");
        return Ok(());
    }

    // Write through symlinks to the file they point at.
    let target = if path.exists() {
        std::fs::canonicalize(path).map_err(io_err)?
    } else {
        path.to_path_buf()
    };

    // A bare file name has an empty parent; use the current directory.
    let parent_dir = match target.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(WriteError::NoParent(target.clone())),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent_dir).map_err(io_err)?;
    temp_file.write_all(text.as_bytes()).map_err(io_err)?;
    temp_file.flush().map_err(io_err)?;

    // Temp files are created private; keep the existing file's mode.
    if let Ok(metadata) = std::fs::metadata(&target) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(io_err)?;
    }

    // Same filesystem, so the rename is atomic
    temp_file.persist(&target)?;

    info!(path = %target.display(), bytes = text.len(), "wrote document atomically");
    Ok(())
}
