use thiserror::Error;

/// Core error type shared across Seedforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration rejected before any generation work started.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Filesystem failure while writing output artifacts.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Seedforge crates.
pub type Result<T> = std::result::Result<T, Error>;
