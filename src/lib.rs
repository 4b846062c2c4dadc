//! Telephony Backup Library
//!
//! Walks the remote telephony configuration tree along declarative
//! schemas and mirrors every fetched object to a local YAML tree.

pub mod api;
pub mod config;
pub mod engine;
pub mod fs;
pub mod schema;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use utils::errors::BackupError;
pub type Result<T> = std::result::Result<T, BackupError>;
