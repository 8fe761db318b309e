//! Line input from the operator.
//!
//! Interactive terminals get `inquire` prompts; anything else (pipes,
//! redirected files) is read line by line so sessions can be scripted.

use anyhow::Result;
use std::io::{self, IsTerminal};

mod prompt;
mod reader;

pub use prompt::PromptInput;
pub use reader::LineReader;

/// A blocking source of operator input lines.
pub trait LineInput {
    /// Shows `prompt` and waits for one line.
    ///
    /// The line comes back exactly as typed, minus its line terminator.
    /// `Ok(None)` means the input was closed (EOF). An interrupt (Ctrl+C)
    /// fails with [`SessionError::Aborted`](crate::error::SessionError).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl<T: LineInput + ?Sized> LineInput for Box<T> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Picks the input source for the process's stdin.
pub fn stdin_input() -> Box<dyn LineInput> {
    if io::stdin().is_terminal() {
        Box::new(PromptInput::new())
    } else {
        Box::new(LineReader::new(io::stdin().lock(), io::stderr()))
    }
}
