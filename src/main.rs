use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use tokio::io::BufReader;

use browse_prompt::banner::{BannerInfo, print_banner, print_session_summary};
use browse_prompt::config::gather_env;
use browse_prompt::consts::DEFAULT_ENV_FILE;
use browse_prompt::fetch::BrowseAiClient;
use browse_prompt::repl::{self, ReplStats};
use browse_prompt::responder::SnippetResponder;
use browse_prompt::session;
use browse_prompt::spinner::with_spinner;

#[derive(Parser)]
#[command(
    name = "browse-prompt",
    version,
    about = "Ask questions against the latest Browse AI robot tasks."
)]
struct Cli {
    /// Dotenv file with API_KEY and ROBOT_ID (process environment wins)
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Answer a single prompt and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let vars = gather_env(&cli.env_file, std::env::vars()).context("reading configuration")?;
    let client = BrowseAiClient::new();

    let session = with_spinner(
        "Fetching Browse AI data...",
        session::bootstrap(vars, &client),
    )
    .await?;

    let responder = SnippetResponder::new();
    let mut stdout = io::stdout();

    // Single prompt mode
    if let Some(prompt) = cli.run {
        if prompt.trim().is_empty() {
            anyhow::bail!("--run needs a non-empty prompt");
        }
        repl::answer_one(&mut stdout, &responder, &session.context, &prompt).await?;
        print_session_summary(ReplStats { answered: 1 });
        return Ok(());
    }

    print_banner(&BannerInfo {
        robot_id: &session.config.robot_id,
        records: session.context.records(),
        context_chars: session.context.char_count(),
    });
    println!("Ready. Enter a prompt (Ctrl+C to exit):");

    let stdin = BufReader::new(tokio::io::stdin());
    let stats = repl::run(stdin, &mut stdout, &responder, &session.context).await?;

    print_session_summary(stats);
    Ok(())
}
