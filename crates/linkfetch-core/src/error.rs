//! Conditions that abort a whole run.
//!
//! Per-link problems are not errors; they are recorded as
//! [`LinkOutcome`](crate::downloader::LinkOutcome) values and counted.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// The output directory was missing and could not be created.
    #[error("Failed to create directory: {}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The links file does not exist.
    #[error("Links file not found: {}", .path.display())]
    LinksFileNotFound { path: PathBuf },

    /// The links file exists but could not be read as text.
    #[error("Failed to read links file: {}", .path.display())]
    LinksFileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
