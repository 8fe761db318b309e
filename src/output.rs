//! Global output configuration and utilities.
//!
//! This module provides centralized control over CLI output behavior,
//! including quiet mode, color support, and stderr/stdout routing.
//!
//! ## Design Principles
//!
//! - The chat session itself (prompts, typed lines) is drawn on stderr
//! - Listings such as `irclog commands` go to stdout (for piping)
//! - Status messages and warnings go to stderr
//! - Quiet mode suppresses non-essential output
//! - Colors can be disabled via flag or `NO_COLOR` environment variable

use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

impl OutputConfig {
    /// Builds the configuration from CLI flags, honoring `NO_COLOR` as well.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        let defaults = Self::default();
        Self {
            quiet,
            no_color: no_color || defaults.no_color,
        }
    }
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
///
/// Use this for results the operator should see, like where a log was saved.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print an info message to stderr (respects quiet mode).
///
/// Use this for non-essential informational output.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning message to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
