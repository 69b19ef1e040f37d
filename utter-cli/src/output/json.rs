//! JSON output formatter

use super::OutputFormatter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one document listing the tokens of every input
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    inputs: Vec<InputData>,
}

/// Tokens of one input
#[derive(Debug, Serialize, Deserialize)]
pub struct InputData {
    /// Input name (file path or `<stdin>`)
    pub source: String,
    /// Tokens in order
    pub tokens: Vec<TokenData>,
}

/// One token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenData {
    /// Position within its input
    pub index: usize,
    /// Token text
    pub text: String,
    /// Length in characters
    pub chars: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            inputs: Vec::new(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_input(&mut self, source: &str) -> Result<()> {
        self.inputs.push(InputData {
            source: source.to_string(),
            tokens: Vec::new(),
        });
        Ok(())
    }

    fn format_token(&mut self, index: usize, token: &str) -> Result<()> {
        let input = self
            .inputs
            .last_mut()
            .context("token written before any input was started")?;
        input.tokens.push(TokenData {
            index,
            text: token.to_string(),
            chars: token.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.inputs)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.inputs)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
