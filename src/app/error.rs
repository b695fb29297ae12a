use thiserror::Error;

use crate::loader::LoaderError;

// Application-level errors; every variant ends the run with a failure status.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("expected exactly two packages")]
    Usage,
    #[error("Loading package {pkg:?}: {source}")]
    Load { pkg: String, source: LoaderError },
    #[error("Loading package {pkg:?}: got {count} packages, want 1")]
    AmbiguousRoot { pkg: String, count: usize },
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}
