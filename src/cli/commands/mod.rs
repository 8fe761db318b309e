//! Subcommand implementations.

/// Chat session command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;
