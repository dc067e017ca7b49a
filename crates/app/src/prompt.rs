use std::io::{self, BufRead, IsTerminal, Write};

use common::prelude::{Confirm, ConfirmPrompt};

/// Asks on stderr and reads the answer from stdin.
///
/// Without a terminal on stdin nobody can answer, so the operation is declined.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            tracing::warn!("{}", non_interactive_hint(prompt));
            return false;
        }

        let mut stderr = io::stderr().lock();
        let asked = write!(stderr, "{}", question(prompt)).and_then(|_| stderr.flush());
        if asked.is_err() {
            return false;
        }

        let mut answer = String::new();
        match stdin.lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                tracing::debug!(error = %err, "failed to read confirmation");
                false
            }
        }
    }
}

fn question(prompt: &ConfirmPrompt) -> String {
    format!("{prompt} Continue? [y/N] ")
}

fn non_interactive_hint(prompt: &ConfirmPrompt) -> String {
    format!(
        "{} needs confirmation but stdin is not a terminal; pass --force to run it",
        prompt.command
    )
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
