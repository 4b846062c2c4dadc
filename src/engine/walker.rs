//! Recursive traversal engine.
//!
//! Executes one depth-first descent over a subtree: fetch and persist
//! the nodes the schema marks for saving, expand collection endpoints,
//! recurse. The contract is best-effort subtree materialization — a
//! missing or broken sub-resource is logged and skipped so its siblings
//! and the rest of the tree still get backed up. Only storage failures
//! propagate.
//!
//! Depth is bounded by the schema, which is finite and acyclic by
//! construction, so the walk always terminates regardless of what the
//! remote returns.

use crate::api::client::document_is_empty;
use crate::api::{FetchError, RemoteApi};
use crate::fs::ArtifactStore;
use crate::schema::SchemaNode;
use crate::utils::errors::Result;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tracing::{debug, warn, Instrument};

/// Walks a live resource subtree along a schema.
pub struct Walker<'a> {
    api: &'a dyn RemoteApi,
    store: &'a ArtifactStore,
}

impl<'a> Walker<'a> {
    pub fn new(api: &'a dyn RemoteApi, store: &'a ArtifactStore) -> Self {
        Self { api, store }
    }

    /// Descend into `(path, node)`: save the node itself if requested,
    /// then children in declared order, then lists in declared order.
    ///
    /// Recursion goes through a boxed future; each frame holds only its
    /// own path string and schema reference.
    pub fn walk<'s>(&'s self, path: String, node: &'s SchemaNode) -> BoxFuture<'s, Result<()>> {
        let span = tracing::debug_span!("walk", path = %path);
        async move {
            if node.save() {
                self.save_node(&path).await?;
            }

            for (name, child) in node.children() {
                self.walk(format!("{}/{}", path, name), child).await?;
            }

            for (name, member_schema) in node.lists() {
                let list_path = format!("{}/{}", path, name);
                let members = match self.api.list_members(&list_path).await {
                    Ok(members) => members,
                    Err(err) => {
                        log_fetch_failure(&err);
                        Vec::new()
                    }
                };
                for member in members {
                    self.walk(format!("{}/{}", list_path, member), member_schema)
                        .await?;
                }
            }

            Ok(())
        }
        .instrument(span)
        .boxed()
    }

    /// Fetch one node and persist it. Fetch failures and empty payloads
    /// leave nothing behind and are not errors.
    async fn save_node(&self, path: &str) -> Result<()> {
        let document = match self.api.get_document(path).await {
            Ok(document) => document,
            Err(err) => {
                log_fetch_failure(&err);
                return Ok(());
            }
        };

        if document_is_empty(&document) {
            debug!("{} returned no data, nothing to save", path);
            return Ok(());
        }

        self.store.write(path, &document)?;
        Ok(())
    }
}

fn log_fetch_failure(err: &FetchError) {
    if err.is_missing() {
        warn!("{}", err);
    } else {
        warn!(error = ?err, "unexpected remote failure");
    }
}
