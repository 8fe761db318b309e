use anyhow::Result;
use chrono::NaiveTime;
use std::path::PathBuf;

use super::clock::{Clock, SimulatedClock, SystemClock};
use super::command::{Command, classify};
use super::ring::{ParticipantId, ParticipantRing};
use super::transcript::Transcript;
use crate::fs::Persistence;
use crate::ui::Terminal;

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Time of day the chat starts at; the current time when `None`.
    pub start_time: Option<NaiveTime>,
    /// Directory the chat log is written to.
    pub output_dir: PathBuf,
}

impl SessionConfig {
    pub const fn new(start_time: Option<NaiveTime>, output_dir: PathBuf) -> Self {
        Self {
            start_time,
            output_dir,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// What a finished session left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The chat log file.
    pub path: PathBuf,
    /// Number of lines written to it.
    pub entries: usize,
}

/// An interactive chat-writing session.
///
/// The operator types lines as the current speaker; commands pass the
/// keyboard around the ring, clear the chat, or save it and stop.
pub struct ChatSession<C = SystemClock> {
    ring: ParticipantRing,
    transcript: Transcript,
    current: ParticipantId,
    clock: SimulatedClock,
    wall: C,
    output_dir: PathBuf,
    state: SessionState,
}

impl ChatSession {
    /// Creates a session driven by the system clock.
    pub fn new(ring: ParticipantRing, config: SessionConfig) -> Self {
        Self::with_clock(ring, config, SystemClock)
    }
}

impl<C: Clock> ChatSession<C> {
    /// Creates a session driven by `wall`. The first registered participant
    /// speaks first.
    pub fn with_clock(ring: ParticipantRing, config: SessionConfig, wall: C) -> Self {
        let clock = SimulatedClock::start(config.start_time, wall.now());
        let current = ring.first();

        Self {
            ring,
            transcript: Transcript::new(),
            current,
            clock,
            wall,
            output_dir: config.output_dir,
            state: SessionState::Running,
        }
    }

    /// Reads and handles lines until the session ends, then returns where the
    /// chat log went.
    ///
    /// Closing the input ends the session the same way the exit command does.
    /// An interrupt ([`SessionError::Aborted`](crate::error::SessionError))
    /// is returned as is and nothing is saved.
    pub fn run<T, P>(&mut self, terminal: &mut T, persistence: &P) -> Result<SessionOutcome>
    where
        T: Terminal + ?Sized,
        P: Persistence + ?Sized,
    {
        loop {
            let prompt = self.prompt();
            let Some(line) = terminal.read_line(&prompt)? else {
                return self.finish(persistence);
            };

            if let Some(outcome) = self.step(&line, terminal, persistence)? {
                return Ok(outcome);
            }
        }
    }

    /// Handles one input line. Returns the outcome once the session has ended.
    pub fn step<T, P>(
        &mut self,
        line: &str,
        terminal: &mut T,
        persistence: &P,
    ) -> Result<Option<SessionOutcome>>
    where
        T: Terminal + ?Sized,
        P: Persistence + ?Sized,
    {
        if self.state == SessionState::Terminated {
            return Ok(None);
        }

        match classify(line) {
            Command::RotateLeft => {
                self.current = self.ring.left(self.current);
                self.display(terminal.erase_last_line(), persistence)?;
            }
            Command::RotateRight => {
                self.current = self.ring.right(self.current);
                self.display(terminal.erase_last_line(), persistence)?;
            }
            Command::Clear => {
                self.display(terminal.clear_screen(), persistence)?;
                self.transcript.clear();
            }
            Command::Exit => {
                self.display(terminal.erase_last_line(), persistence)?;
                return self.finish(persistence).map(Some);
            }
            Command::Message(text) => {
                let speaker = self.ring.name(self.current);
                self.transcript.append(speaker, self.clock.current(), text);
            }
        }

        self.clock.advance(self.wall.now());
        Ok(None)
    }

    /// The prompt shown before each line, e.g. `[23:22:08] DioBrando:`.
    pub fn prompt(&self) -> String {
        format!("[{}] {}:", self.clock.timestamp(), self.current_speaker())
    }

    pub fn current(&self) -> ParticipantId {
        self.current
    }

    pub fn current_speaker(&self) -> &str {
        self.ring.name(self.current)
    }

    pub const fn ring(&self) -> &ParticipantRing {
        &self.ring
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn clock(&self) -> &SimulatedClock {
        &self.clock
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Saves the chat before giving up on a broken display.
    fn display<P: Persistence + ?Sized>(
        &mut self,
        result: Result<()>,
        persistence: &P,
    ) -> Result<()> {
        let Err(e) = result else {
            return Ok(());
        };

        let outcome = self.finish(persistence)?;
        Err(e.context(format!(
            "display failed, chat log saved to {}",
            outcome.path.display()
        )))
    }

    fn finish<P: Persistence + ?Sized>(&mut self, persistence: &P) -> Result<SessionOutcome> {
        self.state = SessionState::Terminated;

        let path = self.transcript.flush(
            persistence,
            &self.output_dir,
            self.ring.names(),
            self.wall.now(),
        )?;

        Ok(SessionOutcome {
            path,
            entries: self.transcript.len(),
        })
    }
}
