//! Error types for shell setup.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors detected before the desktop runtime starts.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The index document has no element to mount the app into
    #[error("mount point #{id} not found in index document")]
    MissingMountPoint { id: String },

    /// The custom index document could not be read
    #[error("failed to read index document {}: {source}", path.display())]
    ReadIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Window dimensions are zero, negative or not finite
    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize { width: f64, height: f64 },
}

/// Result type for shell setup
pub type ShellResult<T> = Result<T, ShellError>;
