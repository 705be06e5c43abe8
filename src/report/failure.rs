//! Failure output for runs that produced no check result.

use super::json::render_json_error;
use crate::config::OutputFormat;
use crate::error_handling::CheckError;

const USAGE: &str = "Usage: og_check <url> [--json] [--ci] [--timeout=<ms>] (see --help)";

/// Where a failure message is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Renders a failed run for the chosen output format.
///
/// Usage errors always go to stderr with a usage line. Every other failure
/// is a `{ "error": ... }` document on stdout in JSON mode, so callers
/// parsing stdout always get JSON, and a message (plus hint) on stderr
/// otherwise.
pub fn render_failure(error: &CheckError, output: OutputFormat) -> (Stream, String) {
    if let CheckError::Usage(e) = error {
        return (Stream::Stderr, format!("og_check: {e}\n{USAGE}"));
    }

    match output {
        OutputFormat::Json => (Stream::Stdout, render_json_error(&error.to_string())),
        OutputFormat::Terminal => {
            let mut message = format!("og_check error: {error}");
            if let CheckError::Fetch(e) = error {
                if let Some(hint) = e.hint() {
                    message.push_str("\nHint: ");
                    message.push_str(hint);
                }
            }
            (Stream::Stderr, message)
        }
    }
}
