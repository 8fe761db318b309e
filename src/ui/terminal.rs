//! The operator's terminal as seen by a chat session.

use anyhow::Result;
use crossterm::cursor::{MoveTo, MoveToPreviousLine};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, IsTerminal, Stderr};

use crate::input::LineInput;

/// Line input plus the two display operations a session needs.
pub trait Terminal: LineInput {
    /// Removes the most recently printed line.
    fn erase_last_line(&mut self) -> Result<()>;

    /// Wipes everything visible.
    fn clear_screen(&mut self) -> Result<()>;
}

/// The real console: prompts and session output live on stderr.
///
/// Display operations are skipped when stderr is not a terminal, so piped
/// runs never see raw escape sequences.
pub struct ConsoleTerminal<I> {
    input: I,
    out: Stderr,
    interactive: bool,
}

impl<I: LineInput> ConsoleTerminal<I> {
    pub fn new(input: I) -> Self {
        let out = io::stderr();
        let interactive = out.is_terminal();
        Self {
            input,
            out,
            interactive,
        }
    }
}

impl<I: LineInput> LineInput for ConsoleTerminal<I> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.input.read_line(prompt)
    }
}

impl<I: LineInput> Terminal for ConsoleTerminal<I> {
    fn erase_last_line(&mut self) -> Result<()> {
        if self.interactive {
            execute!(
                self.out,
                MoveToPreviousLine(1),
                Clear(ClearType::CurrentLine)
            )?;
        }
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        if self.interactive {
            execute!(self.out, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
