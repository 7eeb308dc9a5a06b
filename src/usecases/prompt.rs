use anyhow::Result;

use crate::domain::{events::AppEvent, prompt_state::PromptState};

use super::contracts::PromptOrchestrator;

/// State machine behind the "Record Transaction? (y/n)" screen. Quit is the
/// only real transition; every other event is echoed to the diagnostic sink
/// and leaves the prompt running. The y/n answer is intentionally not
/// consumed yet.
#[derive(Debug, Default)]
pub struct DefaultPromptOrchestrator {
    state: PromptState,
}

impl PromptOrchestrator for DefaultPromptOrchestrator {
    fn state(&self) -> &PromptState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::QuitRequested => self.state.stop(),
            other => {
                let description = other.describe();
                tracing::info!(event = %description, "proceeding with input");
                self.state.note_input(description);
            }
        }

        Ok(())
    }
}
