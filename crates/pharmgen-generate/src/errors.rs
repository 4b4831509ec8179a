use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("dataset error: {0}")]
    Dataset(#[from] pharmgen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("cannot create output directory '{}': {source}", path.display())]
    OutputDir { path: PathBuf, source: io::Error },
    #[error("cannot write document '{}': {source}", path.display())]
    Document { path: PathBuf, source: io::Error },
    #[error("cannot write statements '{}': {source}", path.display())]
    Statements { path: PathBuf, source: io::Error },
    #[error("archive source '{}' is missing or unreadable: {source}", path.display())]
    ArchiveSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("verification failed: {0}")]
    Verification(String),
}

impl GenerationError {
    /// Attach `path` to an I/O failure using the `wrap` variant; other errors
    /// pass through unchanged.
    pub(crate) fn at_path(self, path: &Path, wrap: fn(PathBuf, io::Error) -> Self) -> Self {
        match self {
            GenerationError::Io(source) => wrap(path.to_path_buf(), source),
            GenerationError::Json(err) if err.is_io() => wrap(path.to_path_buf(), err.into()),
            other => other,
        }
    }

    pub(crate) fn document(path: PathBuf, source: io::Error) -> Self {
        GenerationError::Document { path, source }
    }

    pub(crate) fn statements(path: PathBuf, source: io::Error) -> Self {
        GenerationError::Statements { path, source }
    }
}
