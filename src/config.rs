//! Configuration management for the backup tool.
//!
//! Loads configuration from a TOML file; every field has a default so
//! the tool runs without any config file at all.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub backup: BackupConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote configuration API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token for the remote API; empty means unauthenticated
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Destination root for the mirrored YAML tree
    #[serde(default = "default_rootdir")]
    pub rootdir: PathBuf,

    /// Single-instance lock file location
    #[serde(default = "default_lock_file")]
    pub lock_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_endpoint() -> String {
    "https://eu.api.ovh.com/1.0".to_string()
}

fn default_rootdir() -> PathBuf {
    PathBuf::from("/home/backup-telephony")
}

fn default_lock_file() -> PathBuf {
    PathBuf::from("/var/run/telephony-backup.lock")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: String::new(),
        }
    }
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            rootdir: default_rootdir(),
            lock_file: default_lock_file(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            backup: BackupConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from an explicit path, or fall back to defaults.
    ///
    /// An explicit path that does not exist is an error; a missing
    /// default config is not.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
