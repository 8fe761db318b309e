//! # irclog - Fake Chat Log Typewriter
//!
//! `irclog` lets one person type a multi-participant, IRC-style chat log,
//! switching between personas as they go. Timestamps advance in real time
//! from any starting time of day, so the finished log reads like a real
//! conversation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Answer the setup prompts, then start typing
//! irclog
//!
//! # Skip the prompts
//! irclog --time 23:22:08 --participants "DioBrando, JotaroKujo"
//! ```
//!
//! While typing, `/left` and `/right` pass the keyboard around the table,
//! `/clear` starts over and `/exit` saves the chat to a file named after the
//! current date, time and participants:
//!
//! ```text
//! [23:22:08] DioBrando: Oh? You're approaching me?
//! [23:22:16] JotaroKujo: I can't beat the shit out of you without getting closer.
//! ```
//!
//! ## Configuration
//!
//! Defaults are stored in `~/.config/irclog/config.toml`:
//!
//! ```toml
//! [irclog]
//! participants = ["DioBrando", "JotaroKujo"]
//! time = "23:22:08"
//! output_dir = "/home/me/chatlogs"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Session error types.
pub mod error;

/// Chat log persistence.
pub mod fs;

/// Operator line input from terminals and pipes.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The chat-writing session engine.
pub mod session;

/// Terminal UI components (styles, display control).
pub mod ui;
