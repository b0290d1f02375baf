use std::path::PathBuf;

use thiserror::Error;

/// Failures callers may want to tell apart from plain I/O errors.
#[derive(Debug, Error)]
pub(crate) enum PublishError {
    #[error("File not found: {0:?}")]
    FileNotFound(PathBuf),
}
