//! Line-based fallback prompt.

use super::{Decision, YesNoAsker};
use crate::error::ConfirmError;
use std::io::{self, BufRead, BufReader, Write};

/// Plain `question [y/N]:` prompt over any reader/writer pair.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl LinePrompt<BufReader<io::Stdin>, io::Stderr> {
    /// Prompt on stderr, read the answer from stdin.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Case-insensitive `y` / `yes`; everything else is a no.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

impl<R: BufRead, W: Write> YesNoAsker for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<Decision, ConfirmError> {
        write!(self.writer, "{} [y/N]: ", question).map_err(ConfirmError::Input)?;
        self.writer.flush().map_err(ConfirmError::Input)?;

        // Raw bytes: an answer that is not UTF-8 is still just "not yes"
        let mut line = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut line)
            .map_err(ConfirmError::Input)?;

        if read == 0 {
            // EOF: keep following output off the prompt line
            writeln!(self.writer).map_err(ConfirmError::Input)?;
        }

        Ok(Decision::answered(is_affirmative(&String::from_utf8_lossy(&line))))
    }
}
