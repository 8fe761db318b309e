//! XDG-style path utilities for the configuration directory.
//!
//! Paths prefer XDG Base Directory Specification conventions over
//! OS-specific locations, so the config lives in the same place on every
//! platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "irclog";

/// Returns the configuration directory for irclog.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/irclog` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/irclog` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/irclog"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/custom/config/irclog"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_empty_xdg_is_ignored() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "") };

        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/irclog"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }
}
