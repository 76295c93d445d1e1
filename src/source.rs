use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File '{}' not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("Error reading file '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("File '{}' is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

pub type Error = SourceError;
pub type Result<T> = std::result::Result<T, SourceError>;

/// Reads an assembly source file as UTF-8 text.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| {
        warn!(path = %path.display(), error = %err, "cannot read source");
        match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    })?;

    let text = String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "source loaded");
    Ok(text)
}
