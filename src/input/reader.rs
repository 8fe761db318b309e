use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::LineInput;

/// Reads operator lines from any buffered reader.
///
/// Nothing echoes piped input, so each line read is written back after its
/// prompt to keep the visible session readable.
pub struct LineReader<R, W> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub const fn new(reader: R, echo: W) -> Self {
        Self { reader, echo }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.echo)
    }
}

impl<R: BufRead, W: Write> LineInput for LineReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.echo, "{prompt} ")?;
        self.echo.flush()?;

        let mut line = String::new();
        let bytes_read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            writeln!(self.echo)?;
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        writeln!(self.echo, "{line}")?;
        Ok(Some(line))
    }
}
