//! Artifact persistence.
//!
//! Turns an absolute resource path into a destination file under the
//! configured root and writes the fetched document there as YAML. The
//! layout mirrors the remote tree with the API prefix stripped, so
//! `/telephony/GROUP1/line/0123456789/options` lands at
//! `<rootdir>/GROUP1/line/0123456789/options.yml`.

use crate::api::{Document, API_PREFIX};
use crate::utils::errors::{BackupError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension of every persisted artifact.
const ARTIFACT_EXTENSION: &str = "yml";

/// Writes fetched documents into the mirrored destination tree.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    rootdir: PathBuf,
}

impl ArtifactStore {
    pub fn new(rootdir: impl Into<PathBuf>) -> Self {
        Self {
            rootdir: rootdir.into(),
        }
    }

    pub fn rootdir(&self) -> &Path {
        &self.rootdir
    }

    /// Destination file for a resource path.
    ///
    /// The API prefix is stripped as a named segment, not a byte
    /// offset, so a prefix change cannot silently corrupt the layout.
    pub fn destination(&self, resource_path: &str) -> PathBuf {
        let relative = resource_path
            .strip_prefix(API_PREFIX)
            .unwrap_or(resource_path)
            .trim_start_matches('/');
        self.rootdir
            .join(format!("{}.{}", relative, ARTIFACT_EXTENSION))
    }

    /// Persist a document for `resource_path`, overwriting any previous
    /// artifact. Parent directories are created as needed.
    ///
    /// Storage failures are fatal: a destination that cannot be written
    /// means the whole run is pointless, so they propagate instead of
    /// being downgraded to per-node warnings.
    pub fn write(&self, resource_path: &str, document: &Document) -> Result<PathBuf> {
        let destination = self.destination(resource_path);

        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent).map_err(|source| BackupError::Store {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_yaml::to_string(document)?;
        std::fs::write(&destination, content).map_err(|source| BackupError::Store {
            path: destination.clone(),
            source,
        })?;

        debug!("saved {} to {}", resource_path, destination.display());
        Ok(destination)
    }
}
