//! Group-level orchestrator.
//!
//! A group is a top-level tenant of the telephony service. Before any
//! sub-resource is touched its lifecycle status is checked; closed or
//! expired groups are skipped entirely. Otherwise every resource type
//! in the catalog is enumerated and each member handed to the walker.
//! All resource types run to completion for every group.

use crate::api::{RemoteApi, API_PREFIX};
use crate::engine::Walker;
use crate::fs::ArtifactStore;
use crate::schema::catalog;
use crate::utils::errors::Result;
use tracing::{debug, info, warn};

/// Lifecycle states meaning a group no longer carries live
/// configuration and must not be backed up.
const STATUS_TO_SKIP: [&str; 2] = ["closed", "expired"];

/// Backs up one group at a time against a remote API and a store.
pub struct GroupBackup<'a> {
    api: &'a dyn RemoteApi,
    store: &'a ArtifactStore,
}

impl<'a> GroupBackup<'a> {
    pub fn new(api: &'a dyn RemoteApi, store: &'a ArtifactStore) -> Self {
        Self { api, store }
    }

    /// Back up every resource type of `group`, unless its status
    /// excludes it. An unreachable status endpoint skips the group with
    /// a warning so the remaining groups still run.
    pub async fn run(&self, group: &str) -> Result<()> {
        let group_path = format!("{}/{}", API_PREFIX, group);

        let overview = match self.api.get_document(&group_path).await {
            Ok(document) => document,
            Err(err) => {
                warn!("cannot check status of group {}: {}", group, err);
                return Ok(());
            }
        };

        if let Some(status) = overview.get("status").and_then(|v| v.as_str()) {
            if STATUS_TO_SKIP.contains(&status) {
                debug!("service {}, skipping group {}", status, group);
                return Ok(());
            }
        }

        info!("backup of group {} started", group);
        let walker = Walker::new(self.api, self.store);

        for (resource_type, schema) in catalog::resource_types() {
            let type_path = format!("{}/{}", group_path, resource_type);
            let members = match self.api.list_members(&type_path).await {
                Ok(members) => members,
                Err(err) => {
                    warn!("{}", err);
                    continue;
                }
            };

            for member in &members {
                info!("backup {} {}", resource_type, member);
                walker
                    .walk(format!("{}/{}", type_path, member), &schema)
                    .await?;
            }
        }

        info!("backup of group {} ended", group);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Document, FetchError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct StubApi {
        documents: HashMap<String, Document>,
        lists: HashMap<String, Vec<String>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubApi {
        fn with_document(mut self, path: &str, document: Document) -> Self {
            self.documents.insert(path.to_string(), document);
            self
        }

        fn with_list(mut self, path: &str, members: &[&str]) -> Self {
            self.lists.insert(
                path.to_string(),
                members.iter().map(|m| m.to_string()).collect(),
            );
            self
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl RemoteApi for StubApi {
        async fn get_document(&self, path: &str) -> std::result::Result<Document, FetchError> {
            self.calls.lock().unwrap().push(format!("get {}", path));
            self.documents
                .get(path)
                .cloned()
                .ok_or_else(|| FetchError::NotFound(path.to_string()))
        }

        async fn list_members(&self, path: &str) -> std::result::Result<Vec<String>, FetchError> {
            self.calls.lock().unwrap().push(format!("list {}", path));
            self.lists
                .get(path)
                .cloned()
                .ok_or_else(|| FetchError::NotFound(path.to_string()))
        }
    }

    #[tokio::test]
    async fn test_closed_group_makes_only_the_status_call() {
        let temp_dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(temp_dir.path());
        let api =
            StubApi::default().with_document("/telephony/G1", json!({"status": "closed"}));

        GroupBackup::new(&api, &store).run("G1").await.unwrap();

        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_expired_group_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(temp_dir.path());
        let api =
            StubApi::default().with_document("/telephony/G1", json!({"status": "expired"}));

        GroupBackup::new(&api, &store).run("G1").await.unwrap();

        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_group_is_skipped_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(temp_dir.path());
        let api = StubApi::default();

        GroupBackup::new(&api, &store).run("G1").await.unwrap();

        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_active_group_enumerates_every_resource_type() {
        let temp_dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(temp_dir.path());
        let api = StubApi::default().with_document("/telephony/G1", json!({"status": "ok"}));

        GroupBackup::new(&api, &store).run("G1").await.unwrap();

        // one status check plus one listing per catalog entry, all of
        // which fail soft without aborting the run
        assert_eq!(api.call_count(), 1 + catalog::resource_types().len());
    }

    #[tokio::test]
    async fn test_members_flow_into_the_walker() {
        let temp_dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(temp_dir.path());
        let api = StubApi::default()
            .with_document("/telephony/G1", json!({"status": "ok"}))
            .with_list("/telephony/G1/number", &["0042"])
            .with_document("/telephony/G1/number/0042", json!({"description": "desk"}));

        GroupBackup::new(&api, &store).run("G1").await.unwrap();

        let artifact = temp_dir.path().join("G1/number/0042.yml");
        assert!(artifact.exists());
        let content = std::fs::read_to_string(artifact).unwrap();
        assert!(content.contains("description: desk"));
    }

    #[tokio::test]
    async fn test_later_resource_types_still_run_after_earlier_members() {
        // resource types ordered after easyPabx must still run once
        // its members are done
        let temp_dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(temp_dir.path());
        let api = StubApi::default()
            .with_document("/telephony/G1", json!({"status": "ok"}))
            .with_list("/telephony/G1/easyPabx", &["p1"])
            .with_document("/telephony/G1/easyPabx/p1", json!({"name": "p1"}))
            .with_list("/telephony/G1/timeCondition", &["tc1"])
            .with_document("/telephony/G1/timeCondition/tc1", json!({"slot": 1}));

        GroupBackup::new(&api, &store).run("G1").await.unwrap();

        assert!(temp_dir.path().join("G1/easyPabx/p1.yml").exists());
        assert!(temp_dir.path().join("G1/timeCondition/tc1.yml").exists());
    }
}
