//! Interactive prompts with computed defaults.
//!
//! Every question this tool asks follows the same shape: show a label with
//! its default in brackets, read one line, and treat an empty answer (or
//! EOF) as accepting the default. `Prompter` is generic over its reader and
//! writer so tests can feed canned answers instead of real stdin.

use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a free-form question; empty input accepts the default
    pub fn ask(&mut self, label: &str, default: &str) -> Result<String> {
        let answer = self.read_answer(label, default)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Ask a question whose answer must parse as `T`; empty input accepts
    /// the default. A non-empty answer that fails to parse is a fatal error.
    pub fn ask_parsed<T>(&mut self, label: &str, default: T) -> Result<T>
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        let answer = self.read_answer(label, &default.to_string())?;
        if answer.is_empty() {
            return Ok(default);
        }
        answer
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {}: {} ({})", label.to_lowercase(), answer, e))
    }

    /// Write a line to the prompter's output stream
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Consume the prompter, returning its output stream
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, label: &str, default: &str) -> Result<String> {
        write!(self.output, "{} [{}]: ", label, default)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .with_context(|| format!("failed to read answer for {}", label))?;

        // read_line returns 0 bytes at EOF; both that and a bare newline
        // fall through as the empty answer.
        Ok(line.trim().to_string())
    }
}
