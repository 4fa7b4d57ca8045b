//! Terminal spinner shown on stderr while the task fetch is in flight.

use std::future::Future;
use std::io::{IsTerminal, Write};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// A spinner running as a background task. Writes to stderr only, and only
/// animates when stderr is a terminal; otherwise the message is printed once.
pub struct Spinner {
    handle: Option<JoinHandle<()>>,
    cancel: watch::Sender<bool>,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let (cancel, mut cancel_rx) = watch::channel(false);

        if !std::io::stderr().is_terminal() {
            eprintln!("{message}");
            return Self {
                handle: None,
                cancel,
            };
        }

        let message = message.to_string();
        let handle = tokio::spawn(async move {
            let mut i = 0;
            loop {
                let frame = FRAMES[i % FRAMES.len()];
                // \x1b[2K clears the line, \r returns to column 0
                eprint!("\x1b[2K\r{frame} {message}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
                i += 1;
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle: Some(handle),
            cancel,
        }
    }

    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        if let Some(handle) = self.handle {
            let _ = handle.await;
        }
    }
}

/// Await `fut` with a spinner showing `message`, clearing it afterwards
/// whether the future succeeded or not.
pub async fn with_spinner<F, T>(message: &str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = Spinner::start(message);
    let out = fut.await;
    spinner.stop().await;
    out
}
