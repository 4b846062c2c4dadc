//! Remote API client.
//!
//! The traversal engine only sees the [`RemoteApi`] trait, so tests run
//! against an in-memory stub and the walk never knows it is talking
//! HTTP. Fetch failures come back as a tagged [`FetchError`] instead of
//! a generic error: the engine needs to tell "this resource does not
//! exist" apart from "something else went wrong", and it must never
//! treat either as fatal.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::config::ApiConfig;

/// A fetched payload. Key order is preserved end to end so that two
/// runs over an unchanged remote tree produce byte-identical artifacts.
pub type Document = serde_json::Value;

/// Categorized outcome of a failed remote call.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The path does not exist on the remote service.
    #[error("{0} is not available: resource not found")]
    NotFound(String),

    /// The path or query was rejected as malformed.
    #[error("{0} is not available: bad parameters")]
    BadParameters(String),

    /// Transport failure or any other unexpected remote response.
    #[error("request to {path} failed: {message}")]
    Remote { path: String, message: String },
}

impl FetchError {
    /// True for the "no data here, keep walking" cases.
    pub fn is_missing(&self) -> bool {
        matches!(self, FetchError::NotFound(_) | FetchError::BadParameters(_))
    }
}

/// Read access to the remote resource tree.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Fetch the document at `path`.
    async fn get_document(&self, path: &str) -> Result<Document, FetchError>;

    /// Enumerate the member identifiers of the collection at `path`.
    async fn list_members(&self, path: &str) -> Result<Vec<String>, FetchError>;
}

/// HTTP implementation of [`RemoteApi`] over the telephony REST API.
pub struct HttpRemoteApi {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpRemoteApi {
    pub fn new(config: &ApiConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    async fn get_json(&self, path: &str) -> Result<Document, FetchError> {
        let url = format!("{}{}", self.endpoint, path);
        debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }

        let response = request.send().await.map_err(|e| FetchError::Remote {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        if let Some(err) = classify_status(response.status(), path) {
            return Err(err);
        }

        response.json().await.map_err(|e| FetchError::Remote {
            path: path.to_string(),
            message: format!("invalid response body: {}", e),
        })
    }
}

#[async_trait]
impl RemoteApi for HttpRemoteApi {
    async fn get_document(&self, path: &str) -> Result<Document, FetchError> {
        self.get_json(path).await
    }

    async fn list_members(&self, path: &str) -> Result<Vec<String>, FetchError> {
        let document = self.get_json(path).await?;
        Ok(members_from(&document))
    }
}

/// Map a non-success HTTP status to the fetch taxonomy.
fn classify_status(status: StatusCode, path: &str) -> Option<FetchError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::NOT_FOUND => FetchError::NotFound(path.to_string()),
        StatusCode::BAD_REQUEST => FetchError::BadParameters(path.to_string()),
        other => FetchError::Remote {
            path: path.to_string(),
            message: format!("HTTP {}", other),
        },
    })
}

/// Extract member identifiers from a listing response.
///
/// The service returns a JSON array; identifiers may be strings (line
/// numbers, sound names) or plain integers (pabx ids), so both scalar
/// forms are accepted. Anything else is not an identifier and is
/// ignored.
fn members_from(document: &Document) -> Vec<String> {
    let Some(entries) = document.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}

/// True when a payload carries nothing worth persisting.
pub fn document_is_empty(document: &Document) -> bool {
    match document {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(a) => a.is_empty(),
        serde_json::Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_status() {
        assert!(classify_status(StatusCode::OK, "/p").is_none());
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND, "/p"),
            Some(FetchError::NotFound(_))
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST, "/p"),
            Some(FetchError::BadParameters(_))
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, "/p"),
            Some(FetchError::Remote { .. })
        ));
    }

    #[test]
    fn test_is_missing() {
        assert!(FetchError::NotFound("/p".into()).is_missing());
        assert!(FetchError::BadParameters("/p".into()).is_missing());
        assert!(!FetchError::Remote {
            path: "/p".into(),
            message: "HTTP 500".into()
        }
        .is_missing());
    }

    #[test]
    fn test_members_from_mixed_scalars() {
        let doc = json!(["0123456789", 42, "sound.wav", {"not": "an id"}]);
        assert_eq!(members_from(&doc), vec!["0123456789", "42", "sound.wav"]);
    }

    #[test]
    fn test_members_from_non_array() {
        assert!(members_from(&json!({"status": "ok"})).is_empty());
        assert!(members_from(&json!(null)).is_empty());
    }

    #[test]
    fn test_document_is_empty() {
        assert!(document_is_empty(&json!(null)));
        assert!(document_is_empty(&json!({})));
        assert!(document_is_empty(&json!([])));
        assert!(document_is_empty(&json!("")));
        assert!(!document_is_empty(&json!({"status": "ok"})));
        assert!(!document_is_empty(&json!(0)));
    }
}
