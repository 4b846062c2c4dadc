//! Custom error types for the backup tool.
//!
//! Remote fetch failures are deliberately *not* represented here; they
//! carry their own taxonomy (`api::FetchError`) and are swallowed at
//! the point of use so one broken sub-resource never aborts the walk.
//! This enum covers the failures that are allowed to stop a run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("Failed to write artifact {path:?}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Another instance is already running (lock file {0:?} exists)")]
    Locked(PathBuf),

    #[error("Remote service error: {0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, BackupError>;
