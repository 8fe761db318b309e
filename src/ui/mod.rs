use anyhow::Result;
use inquire::InquireError;

mod style;
mod terminal;

pub use style::Style;
pub use terminal::{ConsoleTerminal, Terminal};

/// Check if the inquire error is a user cancellation/interruption.
pub(crate) const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs a function that uses interactive prompts, treating user cancellation as "no answer".
///
/// If the user cancels a prompt (Ctrl+C or Escape), this prints a newline to clean
/// up the terminal and returns `Ok(None)` instead of propagating the error.
pub fn handle_prompt_cancellation<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            eprintln!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
