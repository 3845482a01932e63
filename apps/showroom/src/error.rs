//! # Application Errors
//!
//! Everything the CLI and server can fail with. The core only fails on
//! configuration and replay input; the rest is I/O at the edges.

use showroom_core::ShowroomError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid configuration or replay input rejected by the core.
    #[error(transparent)]
    Core(#[from] ShowroomError),

    /// Reading or writing a file failed.
    #[error("{path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Socket or stdout I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or encode failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured listen address does not parse.
    #[error("invalid listen address '{addr}': {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl AppError {
    /// Attach a path to an I/O failure.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}
