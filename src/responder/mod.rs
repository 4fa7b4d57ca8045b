pub mod snippet;

use async_trait::async_trait;

pub use snippet::SnippetResponder;

/// Produces the reply for one prompt against the scraped context.
///
/// The REPL only knows this trait, so a real reasoning backend can replace
/// the placeholder without touching the loop or the fetch.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, prompt: &str, context: &str) -> String;
}
