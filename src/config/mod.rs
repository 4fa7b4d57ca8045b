//! Startup configuration read from the environment and an optional dotenv file.
//!
//! Two values are required: `API_KEY` (the Browse AI bearer token) and
//! `ROBOT_ID` (the robot whose tasks are fetched). Both are checked once,
//! before anything touches the network.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::consts::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing {var} (set it in the environment or .env)")]
    Missing { var: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub robot_id: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Config {
    /// Build a config from arbitrary key/value pairs. Empty required values
    /// count as missing.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Config = envy::from_iter(vars).map_err(|e| match e {
            envy::Error::MissingValue(field) => ConfigError::Missing {
                var: field.to_uppercase(),
            },
            envy::Error::Custom(msg) => ConfigError::Invalid(msg),
        })?;

        if config.api_key.trim().is_empty() {
            return Err(ConfigError::Missing {
                var: "API_KEY".to_string(),
            });
        }
        if config.robot_id.trim().is_empty() {
            return Err(ConfigError::Missing {
                var: "ROBOT_ID".to_string(),
            });
        }
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `{base}/v2/robots/{robot_id}/tasks`
    pub fn tasks_url(&self) -> String {
        format!(
            "{}/v2/robots/{}/tasks",
            self.api_base_url.trim_end_matches('/'),
            self.robot_id
        )
    }
}

/// Collect configuration variables: the dotenv file first, then `process_vars`
/// (normally `std::env::vars()`) on top, so real environment variables always
/// win.
///
/// A dotenv file that does not exist is skipped.
pub fn gather_env<I>(env_file: &Path, process_vars: I) -> Result<Vec<(String, String)>, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut vars: HashMap<String, String> = HashMap::new();

    match dotenvy::from_path_iter(env_file) {
        Ok(iter) => {
            for item in iter {
                let (key, value) = item.map_err(|source| ConfigError::EnvFile {
                    path: env_file.display().to_string(),
                    source,
                })?;
                vars.insert(key, value);
            }
            log::debug!("loaded env from {}", env_file.display());
        }
        Err(err) if err.not_found() => {
            log::debug!("no env file at {}", env_file.display());
        }
        Err(source) => {
            return Err(ConfigError::EnvFile {
                path: env_file.display().to_string(),
                source,
            });
        }
    }

    vars.extend(process_vars);
    Ok(vars.into_iter().collect())
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
