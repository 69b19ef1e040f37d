//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one token per line
///
/// Several inputs are separated by a blank line.
pub struct TextFormatter<W: Write> {
    writer: W,
    inputs: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, inputs: 0 }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_input(&mut self, _source: &str) -> Result<()> {
        if self.inputs > 0 {
            writeln!(self.writer)?;
        }
        self.inputs += 1;
        Ok(())
    }

    fn format_token(&mut self, _index: usize, token: &str) -> Result<()> {
        writeln!(self.writer, "{token}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
