use clap::Parser;

use irclog_cli::cli::commands::{chat, configure};
use irclog_cli::cli::{Args, Command};
use irclog_cli::error::SessionError;
use irclog_cli::output::{self, OutputConfig};
use irclog_cli::session::print_commands;
use irclog_cli::ui::Style;

fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Err(e) = run(args) {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exit_code(&e));
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Commands) => {
            print_commands();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = chat::ChatOptions {
                time: args.time,
                participants: args.participants,
                output_dir: args.output_dir,
            };
            chat::run_chat(options)?;
        }
    }

    Ok(())
}

/// Shell convention for a process stopped by Ctrl+C (128 + SIGINT).
const EX_INTERRUPTED: exitcode::ExitCode = 130;

fn exit_code(error: &anyhow::Error) -> exitcode::ExitCode {
    match error.downcast_ref::<SessionError>() {
        Some(SessionError::Aborted) => EX_INTERRUPTED,
        Some(SessionError::Persistence { .. }) => exitcode::IOERR,
        Some(SessionError::InvalidTimeFormat(_)) => exitcode::USAGE,
        _ => exitcode::SOFTWARE,
    }
}
