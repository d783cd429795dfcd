use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::errors::BallotError;

/// Interactive questions asked before a transaction is sent.
pub trait Prompter {
    /// Prints `text` and returns the trimmed answer. EOF yields an empty answer.
    fn ask(&mut self, text: &str) -> Result<String, BallotError>;

    /// Anything but `n`/`no` (any case) confirms, including an empty answer.
    fn confirm(&mut self, text: &str) -> Result<bool, BallotError> {
        let answer = self.ask(text)?;
        Ok(is_confirmation(&answer))
    }
}

pub fn is_confirmation(answer: &str) -> bool {
    let answer = answer.trim().to_ascii_lowercase();
    answer != "n" && answer != "no"
}

/// Line-oriented prompter over any reader/writer pair.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Locks stdin for the lifetime of the prompter; dropping it releases the lock.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, text: &str) -> Result<String, BallotError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_negative_answers_cancel() {
        for answer in ["n", "N", "no", "No", "NO", " n \n"] {
            assert!(!is_confirmation(answer), "{:?} should cancel", answer);
        }
    }

    #[test]
    fn test_everything_else_confirms() {
        for answer in ["", "y", "Y", "yes", "nope", "never", "0", "\n"] {
            assert!(is_confirmation(answer), "{:?} should confirm", answer);
        }
    }

    #[test]
    fn test_ask_reads_lines_in_order() {
        let mut prompter = prompter("0xabc\r\nsecond line\n");
        assert_eq!(prompter.ask("Key: ").unwrap(), "0xabc");
        assert_eq!(prompter.ask("Other: ").unwrap(), "second line");

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "Key: Other: ");
    }

    #[test]
    fn test_eof_confirms() {
        let mut prompter = prompter("");
        assert!(prompter.confirm("Confirm? (Y/n): ").unwrap());
    }

    #[test]
    fn test_confirm_cancels_on_n() {
        let mut prompter = prompter("n\n");
        assert!(!prompter.confirm("Confirm? (Y/n): ").unwrap());
    }
}
