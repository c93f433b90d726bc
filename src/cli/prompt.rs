//! Line-oriented prompts for the interactive session.

use anyhow::{Result, bail};
use dialoguer::Input;
use std::io::{BufRead, Write};

pub trait Prompter {
    /// Shows `message` and returns the user's answer without the line ending.
    fn prompt(&mut self, message: &str) -> Result<String>;
}

/// Prompts on an interactive terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, message: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Prompts over plain reader/writer pairs, e.g. piped stdin.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{message}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            bail!("Input ended while waiting for: {message}");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
