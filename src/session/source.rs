//! Feedback sources
//!
//! A session asks a source for feedback on every word it plays: either a
//! person at a prompt or an oracle that knows the hidden answer.

use crate::core::{Feedback, Word};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Supplies feedback for a played word
pub trait FeedbackSource {
    /// Feedback for `guess`
    ///
    /// # Errors
    ///
    /// Returns an error if feedback cannot be obtained (e.g. input closed).
    fn feedback(&mut self, guess: &Word) -> Result<Feedback>;
}

/// Computes feedback against a known answer
#[derive(Debug, Clone)]
pub struct Oracle {
    target: Word,
}

impl Oracle {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl FeedbackSource for Oracle {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback> {
        Ok(Feedback::calculate(guess, &self.target))
    }
}

/// Asks a person for feedback, re-prompting until it is well formed
pub struct Prompt<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> FeedbackSource for Prompt<R, W> {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback> {
        writeln!(
            self.writer,
            "\nSuggestion: {}",
            guess.text().to_uppercase().bright_yellow().bold()
        )?;

        loop {
            write!(
                self.writer,
                "Input feedback [x: not present, o: wrong position, g: correct]: "
            )?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                bail!("input closed while waiting for feedback on {guess}");
            }

            match Feedback::parse(line.trim()) {
                Ok(feedback) => return Ok(feedback),
                Err(e) => writeln!(self.writer, "{} {e}", "Invalid feedback:".red())?,
            }
        }
    }
}
