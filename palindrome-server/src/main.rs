//! Palindrome Server
//!
//! JSON-RPC server exposing palindrome candidate checks.
//! Communicates via stdin/stdout for easy subprocess management.

use std::io::{self, BufRead, Write};
use anyhow::Result;
use tracing::{info, error, debug};
use tracing_subscriber::EnvFilter;
use palindrome_core::protocol::RpcMessage;
use palindrome_core::{Request, Response};

mod handler;

fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is for JSON-RPC)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("palindrome-server starting...");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let handler = handler::Handler::new();

    serve(stdin.lock(), &mut stdout, &handler)?;

    info!("palindrome-server shutting down");
    Ok(())
}

/// Answer one JSON-RPC request per input line until EOF or `shutdown`.
fn serve(input: impl BufRead, output: &mut impl Write, handler: &handler::Handler) -> Result<()> {
    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Failed to read line: {}", e);
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        debug!("Received: {}", line);

        let mut shutdown = false;
        let response = match serde_json::from_str::<RpcMessage<Request>>(&line) {
            Ok(msg) => {
                shutdown = matches!(msg.content, Request::Shutdown);
                let result = handler.handle(&msg.content);
                RpcMessage::new(msg.id.unwrap_or(0), result)
            }
            Err(e) => RpcMessage::new(0, Response::error(format!("Parse error: {}", e))),
        };

        let response_json = serde_json::to_string(&response)?;
        debug!("Sending: {}", response_json);
        writeln!(output, "{}", response_json)?;
        output.flush()?;

        if shutdown {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> Vec<String> {
        let mut output = Vec::new();
        serve(Cursor::new(input), &mut output, &handler::Handler::new()).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert!(run("\n   \n\n").is_empty());
    }

    #[test]
    fn test_malformed_line_answers_with_id_zero() {
        let lines = run("not json\n");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(r#"{"jsonrpc":"2.0","id":0,"error":"Parse error: "#));
    }

    #[test]
    fn test_execute_round_trip() {
        let lines = run(
            "{\"jsonrpc\":\"2.0\",\"id\":5,\"method\":\"execute\",\"params\":{\"input\":\"abcdef\"}}\n",
        );
        assert_eq!(
            lines,
            vec![r#"{"jsonrpc":"2.0","id":5,"message":"palindrome placeholder"}"#]
        );
    }

    #[test]
    fn test_shutdown_is_acknowledged_and_stops_the_loop() {
        let input = concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"shutdown\"}\n",
            "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"check\",\"params\":{\"input\":\"abc\"}}\n",
        );
        let lines = run(input);
        assert_eq!(lines, vec![r#"{"jsonrpc":"2.0","id":1,"ok":true}"#]);
    }
}
