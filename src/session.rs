//! One-shot startup: configuration, fetch, flatten.

use crate::config::Config;
use crate::error::Result;
use crate::fetch::TaskSource;
use crate::flatten::{ScrapedContext, extract_text};

/// Everything the prompt loop needs, captured once per run.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub context: ScrapedContext,
}

/// Validate configuration, fetch tasks, flatten them. Configuration is
/// checked before the source is called, so a bad environment never reaches
/// the network.
pub async fn bootstrap<I>(vars: I, source: &dyn TaskSource) -> Result<Session>
where
    I: IntoIterator<Item = (String, String)>,
{
    let config = Config::from_vars(vars)?;
    let data = source.fetch_tasks(&config).await?;
    let context = extract_text(&data);
    log::info!(
        "loaded {} record(s), {} char(s) of context",
        context.records(),
        context.char_count()
    );
    Ok(Session { config, context })
}
