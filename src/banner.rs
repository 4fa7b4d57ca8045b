//! Startup banner and session summary display.

use crate::consts::{AUTHOR, REPO, format_chars};
use crate::repl::ReplStats;

/// What was loaded at startup, for display.
pub struct BannerInfo<'a> {
    pub robot_id: &'a str,
    pub records: usize,
    pub context_chars: usize,
}

pub fn render_banner(info: &BannerInfo) -> String {
    format!(
        r#"
   browse-prompt {}
   by        {}
   repo      {}
   robot     {}
   tasks     {}
   context   {}
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.robot_id,
        info.records,
        format_chars(info.context_chars),
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", render_banner(info));
}

/// Print the session summary (prompts answered + farewell).
pub fn print_session_summary(stats: ReplStats) {
    if stats.answered > 0 {
        let noun = if stats.answered == 1 { "prompt" } else { "prompts" };
        println!("session: answered {} {}", stats.answered, noun);
    }
    println!("goodbye.");
}
