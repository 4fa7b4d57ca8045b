//! The prompt loop: read a line, answer it, repeat until EOF or Ctrl+C.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::flatten::ScrapedContext;
use crate::responder::Responder;

pub const PROMPT: &str = "\n> ";
pub const RESPONSE_HEADER: &str = "\n--- Response ---";
pub const RESPONSE_FOOTER: &str = "----------------";

/// What happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplStats {
    pub answered: usize,
}

/// Answer one prompt and write it framed by the response delimiters.
pub async fn answer_one<W: Write>(
    out: &mut W,
    responder: &dyn Responder,
    context: &ScrapedContext,
    prompt: &str,
) -> Result<()> {
    let response = responder.respond(prompt, context.as_str()).await;
    writeln!(out, "{RESPONSE_HEADER}")?;
    writeln!(out, "{response}")?;
    writeln!(out, "{RESPONSE_FOOTER}")?;
    out.flush()?;
    Ok(())
}

/// Run the loop. Blank lines are skipped without output. There is no quit
/// command; the loop ends only on end of input or Ctrl+C.
pub async fn run<R, W>(
    mut input: R,
    out: &mut W,
    responder: &dyn Responder,
    context: &ScrapedContext,
) -> Result<ReplStats>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf: Vec<u8> = Vec::new();
    let mut stats = ReplStats::default();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        buf.clear();
        tokio::select! {
            result = input.read_until(b'\n', &mut buf) => {
                if result? == 0 {
                    // Ctrl+D (EOF)
                    writeln!(out)?;
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                writeln!(out)?;
                break;
            }
        }

        let line = decode_line(&buf);
        if line.trim().is_empty() {
            continue;
        }

        answer_one(out, responder, context, &line).await?;
        stats.answered += 1;
    }

    Ok(stats)
}

/// Strip the line terminator and decode, replacing invalid UTF-8 so one bad
/// line never ends the session.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_line_strips_terminators() {
        assert_eq!(decode_line(b"hello\n"), "hello");
        assert_eq!(decode_line(b"hello\r\n"), "hello");
        assert_eq!(decode_line(b"no newline"), "no newline");
        assert_eq!(decode_line(b"\n"), "");
    }

    #[test]
    fn decode_line_replaces_invalid_utf8() {
        assert_eq!(decode_line(b"ok \xff\n"), "ok \u{FFFD}");
    }
}
