//! Confirmation prompt for destructive operations
//!
//! Only an explicit `y` accepts. Empty input, any other text, end of input
//! and Ctrl-C all decline.

use crate::cli::output::Console;
use crate::infra::input::{LineReader, ReadOutcome};

/// Suffix appended to every prompt
pub const PROMPT_SUFFIX: &str = " [y/N]: ";

/// Returns true if `response` accepts the prompt
pub fn is_acceptance(response: &str) -> bool {
    response.trim().to_lowercase() == "y"
}

/// Ask `prompt` and read one line of input
///
/// Read errors decline as well; they are logged, not propagated.
pub async fn confirm<I: LineReader>(prompt: &str, input: &mut I, console: &Console) -> bool {
    console.prompt(&format!("{prompt}{PROMPT_SUFFIX}"));

    match input.read_line().await {
        Ok(ReadOutcome::Line(response)) => is_acceptance(&response),
        Ok(ReadOutcome::Interrupted | ReadOutcome::Eof) => {
            console.newline();
            false
        }
        Err(e) => {
            tracing::warn!("failed to read confirmation: {e}");
            false
        }
    }
}
