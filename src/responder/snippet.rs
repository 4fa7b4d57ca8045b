use async_trait::async_trait;

use super::Responder;
use crate::consts::{CONTEXT_CHAR_LIMIT, NO_DATA_MESSAGE};

/// Placeholder responder: echoes the prompt next to the head of the context.
/// No reasoning happens here; swap in a real backend behind [`Responder`].
#[derive(Debug, Clone, Copy)]
pub struct SnippetResponder {
    limit: usize,
}

impl SnippetResponder {
    pub fn new() -> Self {
        Self {
            limit: CONTEXT_CHAR_LIMIT,
        }
    }

    pub fn answer(&self, prompt: &str, context: &str) -> String {
        if context.trim().is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }
        format!(
            "Prompt: {prompt}\n\nContext:\n{}",
            truncate_chars(context, self.limit)
        )
    }
}

impl Default for SnippetResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for SnippetResponder {
    async fn respond(&self, prompt: &str, context: &str) -> String {
        self.answer(prompt, context)
    }
}

/// The first `max` characters of `s`, never splitting a character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_gives_no_data_message() {
        let r = SnippetResponder::new();
        assert_eq!(r.answer("summarize", ""), "No data available from Browse AI.");
    }

    #[test]
    fn whitespace_context_gives_no_data_message() {
        let r = SnippetResponder::new();
        assert_eq!(r.answer("anything", " \n\t "), NO_DATA_MESSAGE);
    }

    #[test]
    fn short_context_is_untruncated() {
        let r = SnippetResponder::new();
        assert_eq!(
            r.answer("summarize", "Hello\na\nb\ny"),
            "Prompt: summarize\n\nContext:\nHello\na\nb\ny"
        );
    }

    #[test]
    fn long_context_is_cut_at_limit() {
        let r = SnippetResponder::new();
        let context: String = (0..5000).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let reply = r.answer("q", &context);
        let snippet = reply.strip_prefix("Prompt: q\n\nContext:\n").unwrap();
        assert_eq!(snippet, &context[..2000]);
    }

    #[test]
    fn context_of_exactly_limit_is_kept_whole() {
        let r = SnippetResponder::new();
        let context = "x".repeat(2000);
        assert!(r.answer("q", &context).ends_with(&context));
    }

    #[test]
    fn truncation_counts_characters() {
        let context = "é".repeat(2500);
        let cut = truncate_chars(&context, 2000);
        assert_eq!(cut.chars().count(), 2000);
        assert_eq!(cut.len(), 4000);
    }

    #[test]
    fn truncate_shorter_than_limit_is_identity() {
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 10), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn prompt_is_kept_verbatim() {
        let r = SnippetResponder::new();
        let reply = r.answer("  spaced prompt ", "ctx");
        assert!(reply.starts_with("Prompt:   spaced prompt \n"));
    }

    #[tokio::test]
    async fn respond_matches_answer() {
        let r = SnippetResponder::new();
        assert_eq!(r.respond("p", "c").await, r.answer("p", "c"));
    }
}
