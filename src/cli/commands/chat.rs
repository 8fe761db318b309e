use anyhow::Result;
use chrono::NaiveTime;
use std::path::PathBuf;

use crate::config::{
    ConfigManager, ResolveOptions, parse_participants, parse_start_time, resolve_config,
};
use crate::fs::LogFile;
use crate::input::{self, LineInput};
use crate::session::{ChatSession, ParticipantRing, SessionConfig, print_saved};
use crate::ui::{ConsoleTerminal, Style, Terminal};
use crate::{info, warn};

const TIME_PROMPT: &str = "Optionally provide a time of day in HH:MM:SS (e.g.: 12:44:37) \
                           or press enter for current system time:";
const PARTICIPANTS_PROMPT: &str = "Please provide a list of users that are present in the chat \
                                   in username, username, username format:";

pub struct ChatOptions {
    pub time: Option<String>,
    pub participants: Option<String>,
    pub output_dir: Option<PathBuf>,
}

/// Sets up and runs one chat-writing session, then saves the chat log.
///
/// Start time and participants come from the CLI or the config file; the
/// operator is asked for whatever neither provides.
pub fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();
    let resolved = resolve_config(
        &ResolveOptions {
            time: options.time,
            participants: options.participants,
            output_dir: options.output_dir,
        },
        &file_config,
    )?;

    let mut terminal = ConsoleTerminal::new(input::stdin_input());
    terminal.clear_screen()?;

    let Some(start_time) = ask_start_time(&mut terminal, resolved.start_time)? else {
        info!("No chat started.");
        return Ok(());
    };
    let Some(names) = ask_participants(&mut terminal, resolved.participants)? else {
        info!("No chat started.");
        return Ok(());
    };

    let ring = ParticipantRing::build(&names)?;
    if ring.len() < names.len() {
        warn!(
            "{} Duplicate participant names were merged: {}",
            Style::warning("Warning:"),
            ring.names().collect::<Vec<_>>().join(", ")
        );
    }

    terminal.clear_screen()?;
    let mut session = ChatSession::new(ring, SessionConfig::new(start_time, resolved.output_dir));
    let outcome = session.run(&mut terminal, &LogFile)?;

    print_saved(&outcome);
    Ok(())
}

/// Returns the configured start time, or asks until the operator gives a
/// valid one. `None` means the input was closed.
fn ask_start_time(
    input: &mut impl LineInput,
    configured: Option<Option<NaiveTime>>,
) -> Result<Option<Option<NaiveTime>>> {
    if configured.is_some() {
        return Ok(configured);
    }

    loop {
        let Some(answer) = input.read_line(TIME_PROMPT)? else {
            return Ok(None);
        };

        match parse_start_time(&answer) {
            Ok(time) => return Ok(Some(time)),
            Err(e) => {
                warn!("{} {e:#}", Style::error("Error:"));
            }
        }
    }
}

/// Returns the configured participants, or asks the operator for them.
/// `None` means the input was closed.
fn ask_participants(
    input: &mut impl LineInput,
    configured: Option<Vec<String>>,
) -> Result<Option<Vec<String>>> {
    if configured.is_some() {
        return Ok(configured);
    }

    Ok(input
        .read_line(PARTICIPANTS_PROMPT)?
        .map(|answer| parse_participants(&answer)))
}
