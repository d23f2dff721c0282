use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(map_key_event(key).map(AppEvent::InputKey))
            }
            _ => Ok(None),
        }
    }
}

/// Converts a crossterm key into the app's key contract. Quitting is decided
/// by the orchestrator, since `q` is a regular character while typing.
fn map_key_event(key: KeyEvent) -> Option<KeyInput> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let name = match key.code {
        KeyCode::Char(ch) => return Some(KeyInput::new(ch.to_string(), ctrl)),
        KeyCode::Enter => "enter",
        KeyCode::Esc => "esc",
        KeyCode::Tab => "tab",
        KeyCode::Backspace => "backspace",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        _ => return None,
    };

    Some(KeyInput::new(name, ctrl))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_characters_with_ctrl_flag() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(map_key_event(key), Some(KeyInput::new("c", true)));
    }

    #[test]
    fn maps_named_keys() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);

        assert_eq!(map_key_event(enter), Some(KeyInput::new("enter", false)));
        assert_eq!(map_key_event(tab), Some(KeyInput::new("tab", false)));
    }

    #[test]
    fn maps_horizontal_arrows() {
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);

        assert_eq!(map_key_event(left), Some(KeyInput::new("left", false)));
        assert_eq!(map_key_event(right), Some(KeyInput::new("right", false)));
    }

    #[test]
    fn ignores_unmapped_keys() {
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);

        assert_eq!(map_key_event(key), None);
    }

    #[test]
    fn mock_source_drains_queue() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick]);

        assert_eq!(source.next_event().expect("mock read"), Some(AppEvent::Tick));
        assert_eq!(source.next_event().expect("mock read"), None);
    }
}
