use anyhow::Result;
use inquire::ui::{RenderConfig, Styled};
use inquire::{InquireError, Text};

use super::LineInput;
use crate::error::SessionError;
use crate::output;

/// Reads operator lines through `inquire` text prompts.
pub struct PromptInput {
    render_config: RenderConfig<'static>,
}

impl PromptInput {
    pub fn new() -> Self {
        let base = if output::is_no_color() {
            RenderConfig::empty()
        } else {
            RenderConfig::default()
        };

        // The answered prompt stays on screen as the chat line itself.
        let render_config = base
            .with_prompt_prefix(Styled::new(""))
            .with_answered_prompt_prefix(Styled::new(""));

        Self { render_config }
    }
}

impl Default for PromptInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput for PromptInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            let answer = Text::new(prompt)
                .with_render_config(self.render_config)
                .prompt();

            if let Some(line) = settle(answer)? {
                return Ok(Some(line));
            }
        }
    }
}

/// Turns a prompt answer into a line. `Ok(None)` asks again: Esc only
/// drops the draft being typed.
fn settle(answer: Result<String, InquireError>) -> Result<Option<String>> {
    match answer {
        Ok(line) => Ok(Some(line)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(InquireError::OperationInterrupted) => Err(SessionError::Aborted.into()),
        Err(e) => Err(e.into()),
    }
}
