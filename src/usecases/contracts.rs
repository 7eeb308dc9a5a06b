use anyhow::Result;

use crate::domain::{events::AppEvent, prompt_state::PromptState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait PromptOrchestrator {
    fn state(&self) -> &PromptState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
