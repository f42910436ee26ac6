//! Error types for reading sample dumps

use std::path::PathBuf;

use thiserror::Error;

/// Error type for dump reading
#[derive(Error, Debug)]
pub enum DumpError {
    /// The dump file could not be opened (missing, permission denied, ...)
    #[error("cannot open sample dump {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dump file was opened but reading its bytes failed
    #[error("failed reading sample dump {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for dump reading
pub type Result<T> = std::result::Result<T, DumpError>;
