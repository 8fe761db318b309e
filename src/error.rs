//! Error types for chat sessions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while building or running a chat session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A name was resolved that was never registered in the ring.
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    /// A time of day did not match `HH:MM:SS`.
    #[error("invalid time of day '{0}' (expected HH:MM:SS, e.g. 12:44:37)")]
    InvalidTimeFormat(String),

    /// The operator interrupted the session; nothing was saved.
    #[error("interrupted, no chat written")]
    Aborted,

    /// The transcript could not be written.
    #[error("failed to write chat log to {}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
