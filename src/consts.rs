//! Project-wide constants.

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Browse AI API root. Overridable with `API_BASE_URL`.
pub const DEFAULT_API_BASE_URL: &str = "https://api.browse.ai";

/// How long the single task fetch may take before giving up.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Dotenv file read at startup unless `--env-file` says otherwise.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Maximum number of context characters echoed back per response.
pub const CONTEXT_CHAR_LIMIT: usize = 2000;

/// Reply used when the fetched tasks produced no text at all.
pub const NO_DATA_MESSAGE: &str = "No data available from Browse AI.";

/// Format a character count with a unit (e.g. `1 char`, `2,048 chars`).
pub fn format_chars(n: usize) -> String {
    let s = n.to_string();
    let mut grouped = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n == 1 {
        format!("{grouped} char")
    } else {
        format!("{grouped} chars")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!AUTHOR.is_empty());
        assert!(!REPO.is_empty());
        assert!(!DEFAULT_API_BASE_URL.is_empty());
        assert!(!NO_DATA_MESSAGE.is_empty());
    }

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
    }

    #[test]
    fn format_chars_singular() {
        assert_eq!(format_chars(1), "1 char");
    }

    #[test]
    fn format_chars_small() {
        assert_eq!(format_chars(0), "0 chars");
        assert_eq!(format_chars(999), "999 chars");
    }

    #[test]
    fn format_chars_groups_thousands() {
        assert_eq!(format_chars(2_000), "2,000 chars");
        assert_eq!(format_chars(1_234_567), "1,234,567 chars");
    }
}
