//! Request-level error taxonomy
//!
//! Both variants end the request they belong to and nothing else.

use hyper::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    /// Entry is missing, cannot be stat'ed, or lies outside the root
    #[error("File {} not found!", .path.display())]
    NotFound { path: PathBuf },

    /// Entry exists but its contents could not be read
    #[error("Error getting the file.")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ServeError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ReadFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
