use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use super::{FetchError, TaskSource};
use crate::config::Config;

/// Live client for `GET /v2/robots/{robot_id}/tasks`.
#[derive(Debug, Clone, Default)]
pub struct BrowseAiClient {
    client: Client,
}

impl BrowseAiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl TaskSource for BrowseAiClient {
    async fn fetch_tasks(&self, config: &Config) -> Result<Value, FetchError> {
        let url = config.tasks_url();
        log::debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", config.api_key))
            .timeout(config.request_timeout())
            .send()
            .await
            .map_err(|e| classify(e, config))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                classify(e, config)
            } else {
                FetchError::Decode(e)
            }
        })?;
        log::info!("fetched tasks for robot {}", config.robot_id);
        Ok(data)
    }
}

fn classify(err: reqwest::Error, config: &Config) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            secs: config.request_timeout_secs,
        }
    } else {
        FetchError::Request(err)
    }
}
