//! Error types for autosync.
//!
//! Uses `thiserror` for library errors; the binary boundary reports them
//! through `anyhow`.

use thiserror::Error;

/// Result type alias for autosync operations
pub type AutosyncResult<T> = Result<T, AutosyncError>;

/// Main error type for autosync operations
#[derive(Error, Debug)]
pub enum AutosyncError {
    /// The external sync binary is missing; checked once at startup,
    /// before any watcher setup.
    #[error("can't find the `rsync` program on PATH, you need to install it")]
    RsyncNotFound,

    /// Watch setup or notification error from the OS facility
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
