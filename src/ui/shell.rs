use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        agent = %context.config.agent.name,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;

    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;
        pump_event(event_source, orchestrator)?;
    }

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Reads at most one event and hands it to the orchestrator.
fn pump_event(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    if let Some(event) = event_source.next_event()? {
        orchestrator.handle_event(event)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            events::{AppEvent, KeyInput},
            seed,
            shell_state::{ShellSettings, ShellState},
        },
        infra::stubs::FixedClock,
        ui::event_source::MockEventSource,
        usecases::shell::DefaultShellOrchestrator,
    };

    fn orchestrator() -> DefaultShellOrchestrator<FixedClock> {
        DefaultShellOrchestrator::new(
            ShellState::new(seed::mock_store(), ShellSettings::default()),
            FixedClock::default(),
        )
    }

    #[test]
    fn orchestrator_stops_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let mut orchestrator = orchestrator();

        pump_event(&mut source, &mut orchestrator).expect("must handle quit event");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn empty_source_leaves_state_untouched() {
        let mut source = MockEventSource::from(Vec::new());
        let mut orchestrator = orchestrator();

        pump_event(&mut source, &mut orchestrator).expect("empty source is fine");

        assert!(orchestrator.state().is_running());
    }

    #[test]
    fn key_events_flow_through_to_state() {
        let mut source = MockEventSource::from(vec![
            AppEvent::InputKey(KeyInput::new("j", false)),
            AppEvent::InputKey(KeyInput::new("enter", false)),
        ]);
        let mut orchestrator = orchestrator();

        pump_event(&mut source, &mut orchestrator).expect("j handled");
        pump_event(&mut source, &mut orchestrator).expect("enter handled");

        assert_eq!(
            orchestrator.state().navigation().selected_conversation(),
            Some("chat_2")
        );
    }
}
