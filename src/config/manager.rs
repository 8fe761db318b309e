use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::session::clock::parse_time_of_day;
use crate::ui::Style;
use crate::warn;

/// Default settings in the `[irclog]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDefaults {
    /// Participants seated at the start of every session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    /// Time of day every session starts at (`HH:MM:SS`); empty means "now".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Directory chat logs are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/irclog/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default session settings.
    #[serde(default)]
    pub irclog: SessionDefaults,
}

/// Resolved configuration after merging CLI arguments and config file.
///
/// `None` for the time or the participants means nobody decided yet and the
/// operator should be asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Session start time; `Some(None)` starts at the current time.
    pub start_time: Option<Option<NaiveTime>>,
    /// Participant names, already cleaned up.
    pub participants: Option<Vec<String>>,
    /// Directory chat logs are written to.
    pub output_dir: PathBuf,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Start time override (`HH:MM:SS`, empty for "now").
    pub time: Option<String>,
    /// Comma-separated participant names override.
    pub participants: Option<String>,
    /// Output directory override.
    pub output_dir: Option<PathBuf>,
}

/// Parses a start time where an empty answer means "use the current time".
pub fn parse_start_time(raw: &str) -> Result<Option<NaiveTime>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_time_of_day(raw)?))
}

/// Splits a comma-separated participant list, trimming names and dropping
/// empty ones.
pub fn parse_participants(raw: &str) -> Vec<String> {
    clean_participants(raw.split(','))
}

fn clean_participants<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values.
///
/// # Errors
///
/// Returns an error if a configured start time is not a valid `HH:MM:SS`.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let defaults = &config_file.irclog;

    let start_time = match (&options.time, &defaults.time) {
        (Some(cli), _) => Some(parse_start_time(cli).context("Invalid --time option")?),
        (None, Some(file)) => Some(
            parse_start_time(file).context("Invalid 'time' in ~/.config/irclog/config.toml")?,
        ),
        (None, None) => None,
    };

    let participants = options
        .participants
        .as_deref()
        .map(parse_participants)
        .or_else(|| {
            defaults
                .participants
                .as_ref()
                .map(|names| clean_participants(names.iter().map(String::as_str)))
        });

    let output_dir = options
        .output_dir
        .as_ref()
        .or(defaults.output_dir.as_ref())
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(ResolvedConfig {
        start_time,
        participants,
        output_dir,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/irclog/config.toml`
    /// or `~/.config/irclog/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults when it is missing.
    ///
    /// A file that exists but cannot be parsed is reported and ignored.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|e| {
            warn!("{} {e:#}", Style::warning("Warning:"));
            ConfigFile::default()
        })
    }
}
