//! Saved session defaults.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, SessionDefaults,
    parse_participants, parse_start_time, resolve_config,
};
