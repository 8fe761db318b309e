//! Configure command handler for editing default session settings.

use anyhow::{Result, bail};
use inquire::Text;
use inquire::validator::Validation;
use std::path::PathBuf;

use crate::config::{
    ConfigFile, ConfigManager, SessionDefaults, parse_participants, parse_start_time,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the saved defaults. Otherwise asks for new default
/// participants, start time and output directory and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        print_current_defaults(&manager.load_or_default(), &manager);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager)).map(|_| ())
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default();

    print_current_defaults(&config, manager);

    let participants = ask_participants(config.irclog.participants.as_deref())?;
    let time = ask_time(config.irclog.time.as_deref())?;
    let output_dir = ask_output_dir(config.irclog.output_dir.as_ref())?;

    config.irclog = SessionDefaults {
        participants,
        time,
        output_dir,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile, manager: &ConfigManager) {
    let not_set = || Style::secondary("(not set)");
    let defaults = &config.irclog;

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("participants"),
        defaults
            .participants
            .as_ref()
            .map_or_else(not_set, |names| Style::value(names.join(", ")))
    );
    println!(
        "  {}          {}",
        Style::label("time"),
        defaults.time.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}    {}",
        Style::label("output_dir"),
        defaults
            .output_dir
            .as_ref()
            .map_or_else(not_set, |dir| Style::value(dir.display()))
    );
    println!(
        "  {}        {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}

fn ask_participants(default: Option<&[String]>) -> Result<Option<Vec<String>>> {
    let current = default.map(|names| names.join(", ")).unwrap_or_default();

    let answer = Text::new("Default participants:")
        .with_initial_value(&current)
        .with_help_message("Comma-separated names; leave empty to be asked every time")
        .prompt()?;

    let names = parse_participants(&answer);
    Ok((!names.is_empty()).then_some(names))
}

fn ask_time(default: Option<&str>) -> Result<Option<String>> {
    let answer = Text::new("Default start time:")
        .with_initial_value(default.unwrap_or_default())
        .with_help_message("HH:MM:SS; leave empty to be asked every time")
        .with_validator(|input: &str| {
            Ok(match parse_start_time(input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;

    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}

fn ask_output_dir(default: Option<&PathBuf>) -> Result<Option<PathBuf>> {
    let current = default
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();

    let answer = Text::new("Default output directory:")
        .with_initial_value(&current)
        .with_help_message("Leave empty to write chat logs to the current directory")
        .prompt()?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }

    let dir = PathBuf::from(answer);
    if dir.exists() && !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }
    Ok(Some(dir))
}
