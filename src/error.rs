//! The two fatal error kinds surfaced at startup.

use crate::config::ConfigError;
use crate::fetch::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
