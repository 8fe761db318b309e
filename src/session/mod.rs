//! The chat-writing session: who is talking, what time it is, and what has
//! been said so far.

/// Simulated time and wall-clock sources.
pub mod clock;

/// Command vocabulary and input classification.
pub mod command;

/// Participant registry and seating ring.
pub mod ring;

/// Recorded chat lines and log file naming.
pub mod transcript;

mod engine;
mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{ChatSession, SessionConfig, SessionOutcome, SessionState};
pub use ring::{DEFAULT_PARTICIPANT, ParticipantId, ParticipantRing};
pub use transcript::Transcript;
pub use ui::{print_commands, print_saved};
