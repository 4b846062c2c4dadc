//! Utility modules for the backup tool.

pub mod errors;
pub mod lock;
pub mod logger;

pub use errors::{BackupError, Result};
