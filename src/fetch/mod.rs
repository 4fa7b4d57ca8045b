//! The single network boundary: fetch one robot's task list.

pub mod browse_ai;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;

pub use browse_ai::BrowseAiClient;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Browse AI API error (status {status}): {body}")]
    Status { status: u16, body: String },
    #[error("Browse AI request timed out after {secs}s")]
    Timeout { secs: u64 },
    #[error("Browse AI request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Browse AI returned a body that is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Where task records come from. Implemented by the live HTTP client and by
/// test doubles.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetch the raw task payload. The body is returned as decoded, with no
    /// schema checks.
    async fn fetch_tasks(&self, config: &Config) -> Result<Value, FetchError>;
}
