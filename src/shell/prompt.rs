//! Yes/no confirmation over a line-based terminal.

use crate::core::{Confirm, ConfirmPrompt, Decision};
use std::io::{BufRead, Write};
use tracing::warn;

/// Asks confirmation questions on `output` and reads the answer from `input`.
///
/// Only `y` or `yes` (any case) confirm. Anything else, end of input, or an
/// I/O failure cancels.
pub struct LineConfirm<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> LineConfirm<'a, R, W> {
    /// Borrows the terminal streams for the length of one question.
    pub const fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &ConfirmPrompt) -> std::io::Result<Decision> {
        write!(self.output, "{}: {} [y/N] ", prompt.title, prompt.message)?;
        self.output.flush()?;

        let mut answer = Vec::new();
        self.input.read_until(b'\n', &mut answer)?;

        let answer = String::from_utf8_lossy(&answer);
        let decision = match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Decision::Confirmed,
            _ => Decision::Cancelled,
        };
        Ok(decision)
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<'_, R, W> {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision {
        self.ask(prompt).unwrap_or_else(|e| {
            warn!("Confirmation prompt failed, treating as cancelled: {}", e);
            Decision::Cancelled
        })
    }
}
