use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "irclog")]
#[command(about = "Type fake IRC-style chat logs as a rotating cast of participants")]
#[command(version)]
pub struct Args {
    /// Time of day the chat starts at (HH:MM:SS, e.g. 12:44:37; empty for now)
    #[arg(short = 't', long)]
    pub time: Option<String>,

    /// Comma-separated participant names (e.g. "DioBrando, JotaroKujo")
    #[arg(short = 'p', long)]
    pub participants: Option<String>,

    /// Directory to write the chat log to
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the commands available while typing a chat
    Commands,
    /// Configure default participants, start time and output directory
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
