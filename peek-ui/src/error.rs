//! Presentation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for results within the ui crate.
pub type Result<T> = std::result::Result<T, PeekError>;

#[derive(Debug, Error)]
pub enum PeekError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unable to read skin \"{}\": {source}", .path.display())]
    Skin {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("skin \"{}\" is empty", .path.display())]
    EmptySkin { path: PathBuf },
}
