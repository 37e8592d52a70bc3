//! Console Interaction
//!
//! Line-oriented operator dialogue over any reader/writer pair.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crate::entity::{prompt_worker, Worker};
use crate::error::{ClientError, Result};
use super::Interaction;

/// Interaction over a buffered reader and a writer
pub struct ConsoleInteraction<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInteraction<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Get the underlying writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.display(prompt)?;
        Ok(self.read_line()?.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Interaction for ConsoleInteraction<R, W> {
    fn read_line(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut raw)
            .map_err(ClientError::Console)?;
        if read == 0 {
            return Err(ClientError::InputClosed);
        }
        // Undecodable bytes become U+FFFD and fail as an unknown command
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn read_bounded(&mut self, prompt: &str, min: f64, max: f64, allow_empty: bool) -> Result<String> {
        loop {
            let answer = self.prompt(prompt)?;
            if answer.is_empty() {
                if allow_empty {
                    return Ok(answer);
                }
                self.display("The value must not be empty")?;
                continue;
            }
            match answer.parse::<f64>() {
                Ok(value) if value >= min && value <= max => return Ok(answer),
                Ok(_) => self.display(&format!("The value must be between {} and {}", min, max))?,
                Err(_) => self.display("The value must be a number")?,
            }
        }
    }

    fn read_unbounded(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        loop {
            let answer = self.prompt(prompt)?;
            if !answer.is_empty() || allow_empty {
                return Ok(answer);
            }
            self.display("The value must not be empty")?;
        }
    }

    fn read_entity(&mut self) -> Result<Worker> {
        prompt_worker(self)
    }

    fn display(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message).map_err(ClientError::Console)?;
        self.writer.flush().map_err(ClientError::Console)
    }
}
