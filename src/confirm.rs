//! One-shot confirmation gate before any mutation.

use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Proceed,
    Cancelled,
}

/// Asks the user once whether a mutating run may start
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> ConfirmOutcome;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> ConfirmOutcome,
{
    fn confirm(&mut self, prompt: &str) -> ConfirmOutcome {
        self(prompt)
    }
}

/// Line-based confirmation: any line proceeds, end of input cancels.
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Confirmation on the process terminal
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> ConfirmOutcome {
        let _ = write!(self.output, "\n{}", prompt);
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => ConfirmOutcome::Cancelled,
            Ok(_) => ConfirmOutcome::Proceed,
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                ConfirmOutcome::Cancelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_enter_proceeds() {
        let mut out = Vec::new();
        let mut confirm = LineConfirm::new(Cursor::new("\n"), &mut out);
        assert_eq!(confirm.confirm("Press Enter"), ConfirmOutcome::Proceed);
        assert_eq!(String::from_utf8(out).unwrap(), "\nPress Enter");
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut confirm = LineConfirm::new(Cursor::new(""), Vec::new());
        assert_eq!(confirm.confirm("Press Enter"), ConfirmOutcome::Cancelled);
    }

    #[test]
    fn test_closure_confirm() {
        let mut asked = Vec::new();
        let mut confirm = |prompt: &str| {
            asked.push(prompt.to_string());
            ConfirmOutcome::Cancelled
        };
        assert_eq!(confirm.confirm("go?"), ConfirmOutcome::Cancelled);
        assert_eq!(asked, vec!["go?"]);
    }
}
