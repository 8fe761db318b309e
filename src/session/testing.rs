//! Test doubles for driving a session without a real terminal.

use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::clock::Clock;
use crate::error::{SessionError, SessionResult};
use crate::fs::Persistence;
use crate::input::LineInput;
use crate::ui::Terminal;

/// 2024-05-01 at the given time.
#[allow(clippy::unwrap_used)]
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// A wall clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock(Rc<Cell<NaiveDateTime>>);

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self(Rc::new(Cell::new(start)))
    }

    pub fn tick(&self, seconds: i64) {
        self.0.set(self.0.get() + TimeDelta::seconds(seconds));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

/// Replays a fixed list of lines and records every display operation.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    lines: VecDeque<String>,
    typing: Option<(ManualClock, i64)>,
    interrupt: bool,
    pub prompts: Vec<String>,
    pub erased: usize,
    pub cleared: usize,
}

impl ScriptedTerminal {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Each line takes `seconds` of wall time to type.
    pub fn typing_on(mut self, clock: &ManualClock, seconds: i64) -> Self {
        self.typing = Some((clock.clone(), seconds));
        self
    }

    /// Once the lines run out, the operator hits Ctrl+C instead of closing
    /// the input.
    pub fn then_interrupt(mut self) -> Self {
        self.interrupt = true;
        self
    }
}

impl LineInput for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        if let Some((clock, seconds)) = &self.typing {
            clock.tick(*seconds);
        }
        match self.lines.pop_front() {
            None if self.interrupt => Err(SessionError::Aborted.into()),
            line => Ok(line),
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn erase_last_line(&mut self) -> Result<()> {
        self.erased += 1;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.cleared += 1;
        Ok(())
    }
}

/// A terminal whose display is broken.
pub struct BrokenTerminal(pub ScriptedTerminal);

impl LineInput for BrokenTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.0.read_line(prompt)
    }
}

impl Terminal for BrokenTerminal {
    fn erase_last_line(&mut self) -> Result<()> {
        bail!("terminal went away")
    }

    fn clear_screen(&mut self) -> Result<()> {
        bail!("terminal went away")
    }
}

/// Keeps written chat logs in memory.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    pub writes: RefCell<Vec<(PathBuf, String)>>,
}

impl Persistence for MemoryPersistence {
    fn append_to_file(&self, path: &Path, content: &str) -> SessionResult<()> {
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}

/// Fails every write as if the disk were full.
#[derive(Debug, Default)]
pub struct FullDisk;

impl Persistence for FullDisk {
    fn append_to_file(&self, path: &Path, _content: &str) -> SessionResult<()> {
        Err(SessionError::Persistence {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::StorageFull, "no space left on device"),
        })
    }
}
