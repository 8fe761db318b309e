//! Session UI components.

use crate::ui::Style;
use crate::status;

use super::SessionOutcome;
use super::command::COMMANDS;

/// Prints every command family with all of its spellings.
pub fn print_commands() {
    println!("{}", Style::header("Available commands"));
    for (_, spellings, description) in COMMANDS {
        let spellings: Vec<String> = spellings.iter().map(Style::command).collect();
        println!("  {}", spellings.join(", "));
        println!("      {}", Style::secondary(description));
    }
    println!();
    println!(
        "{}",
        Style::hint("Commands are case-insensitive. Anything else is logged as a message.")
    );
}

/// Reports where the chat log was saved.
pub fn print_saved(outcome: &SessionOutcome) {
    let noun = if outcome.entries == 1 { "line" } else { "lines" };
    status!(
        "{} Saved {} chat {noun} to {}",
        Style::success("✓"),
        outcome.entries,
        Style::value(outcome.path.display())
    );
}
