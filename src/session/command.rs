//! Session command vocabulary and input classification.

// Every accepted spelling per command family, already lower-cased.
const ROTATE_LEFT: &[&str] = &["_left", "_l", "ll", "/left"];
const ROTATE_RIGHT: &[&str] = &["_right", "_r", "rr", "/right"];
const CLEAR: &[&str] = &["clear()", "clear", "cls", "/clear"];
const EXIT: &[&str] = &["exit()", "exit", "ee", "/exit"];

/// Command families with their spellings and descriptions, for help output.
pub const COMMANDS: &[(&str, &[&str], &str)] = &[
    ("left", ROTATE_LEFT, "Pass the keyboard to the participant on the left"),
    ("right", ROTATE_RIGHT, "Pass the keyboard to the participant on the right"),
    ("clear", CLEAR, "Clear the screen and discard the chat so far"),
    ("exit", EXIT, "Save the chat log and quit"),
];

/// What a line typed during a session means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    RotateLeft,
    RotateRight,
    Clear,
    Exit,
    /// Anything else, kept exactly as typed.
    Message(&'a str),
}

/// Classifies a raw input line.
///
/// Commands are matched case-insensitively after trimming; a message keeps
/// the original line untouched. Every line maps to some [`Command`].
pub fn classify(line: &str) -> Command<'_> {
    let normalized = line.trim().to_lowercase();

    if ROTATE_LEFT.contains(&normalized.as_str()) {
        Command::RotateLeft
    } else if ROTATE_RIGHT.contains(&normalized.as_str()) {
        Command::RotateRight
    } else if CLEAR.contains(&normalized.as_str()) {
        Command::Clear
    } else if EXIT.contains(&normalized.as_str()) {
        Command::Exit
    } else {
        Command::Message(line)
    }
}
