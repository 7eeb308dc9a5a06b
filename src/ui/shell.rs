use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, PromptOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn PromptOrchestrator,
) -> Result<()> {
    tracing::info!(
        app = %context.config.app_name,
        log_level = %context.config.logging.debug_level,
        "starting prompt shell"
    );

    let mut terminal = TerminalSession::new()?;

    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    tracing::info!(
        record_transaction = orchestrator.state().record_transaction(),
        last_input = ?orchestrator.state().last_input(),
        "prompt shell stopped"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::events::{AppEvent, KeyInput},
        ui::event_source::MockEventSource,
        usecases::prompt::DefaultPromptOrchestrator,
    };

    fn drain(
        event_source: &mut dyn AppEventSource,
        orchestrator: &mut dyn PromptOrchestrator,
    ) -> Result<()> {
        while orchestrator.state().is_running() {
            match event_source.next_event()? {
                Some(event) => orchestrator.handle_event(event)?,
                None => break,
            }
        }
        Ok(())
    }

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);

        let event = source.next_event().expect("mock source must not fail");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn event_loop_runs_until_quit() {
        let mut source = MockEventSource::from(vec![
            AppEvent::InputKey(KeyInput::new("x", false)),
            AppEvent::InputKey(KeyInput::new("y", false)),
            AppEvent::QuitRequested,
        ]);
        let mut orchestrator = DefaultPromptOrchestrator::default();

        drain(&mut source, &mut orchestrator).expect("loop must drain events");

        assert!(!orchestrator.state().is_running());
        assert_eq!(orchestrator.state().last_input(), Some("key 'y'"));
    }

    #[test]
    fn event_loop_stays_running_when_source_is_exhausted() {
        let mut source = MockEventSource::from(vec![AppEvent::InputKey(KeyInput::new("x", false))]);
        let mut orchestrator = DefaultPromptOrchestrator::default();

        drain(&mut source, &mut orchestrator).expect("loop must drain events");

        assert!(orchestrator.state().is_running());
    }
}
