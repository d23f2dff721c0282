use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    modal_state::ModalState,
    navigation::View,
    shell_state::{InputMode, ShellState},
};

use super::{
    contracts::{Clock, ShellOrchestrator},
    reducer::{self, Action},
};

pub struct DefaultShellOrchestrator<C>
where
    C: Clock,
{
    state: ShellState,
    clock: C,
}

impl<C> DefaultShellOrchestrator<C>
where
    C: Clock,
{
    pub fn new(state: ShellState, clock: C) -> Self {
        Self { state, clock }
    }
}

impl<C> ShellOrchestrator for DefaultShellOrchestrator<C>
where
    C: Clock,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        let action = match event {
            AppEvent::Tick => None,
            AppEvent::QuitRequested => Some(Action::Quit),
            AppEvent::InputKey(key) => map_key(&self.state, &key),
        };

        if let Some(action) = action {
            let state = std::mem::take(&mut self.state);
            self.state = reducer::reduce(state, action, &self.clock);
        }

        Ok(())
    }
}

/// Translates a key press into a reducer action for the focused context.
pub fn map_key(state: &ShellState, key: &KeyInput) -> Option<Action> {
    if key.ctrl && key.key == "c" {
        return Some(Action::Quit);
    }

    match state.input_mode() {
        InputMode::Modal => map_modal_key(state.modal(), key),
        InputMode::Compose => map_compose_key(key),
        InputMode::Normal if state.navigation().selected_conversation().is_some() => {
            map_detail_key(key)
        }
        InputMode::Normal => map_view_key(state.navigation().view(), key),
    }
}

fn map_modal_key(modal: &ModalState, key: &KeyInput) -> Option<Action> {
    match key.key.as_str() {
        "esc" => return Some(Action::ModalCancel),
        "enter" => return Some(Action::ModalConfirm),
        "backspace" => return Some(Action::ModalBackspace),
        "up" => return Some(Action::ModalPrevious),
        "down" => return Some(Action::ModalNext),
        "left" => return Some(Action::CursorLeft),
        "right" => return Some(Action::CursorRight),
        "tab" => {
            return match modal {
                ModalState::Schedule(_) | ModalState::ProactiveReview(_) => {
                    Some(Action::ModalNext)
                }
                ModalState::TemplateReview(_) => Some(Action::ModalToggle),
                ModalState::Escalation(_) | ModalState::Closed => None,
            };
        }
        _ => {}
    }

    key.as_char().map(Action::ModalInput)
}

fn map_compose_key(key: &KeyInput) -> Option<Action> {
    match key.key.as_str() {
        "esc" => Some(Action::StopCompose),
        "enter" => Some(Action::SendCompose),
        "backspace" => Some(Action::ComposeBackspace),
        "left" => Some(Action::CursorLeft),
        "right" => Some(Action::CursorRight),
        _ => key.as_char().map(Action::ComposeInput),
    }
}

fn map_detail_key(key: &KeyInput) -> Option<Action> {
    let action = match key.key.as_str() {
        "q" => Action::Quit,
        "esc" | "h" => Action::Back,
        "j" | "down" => Action::PanelNext,
        "k" | "up" => Action::PanelPrevious,
        "a" => Action::AcceptPanelSuggestion,
        "d" => Action::DismissPanelSuggestion,
        "r" => Action::ReviewPanelTemplate,
        "m" => Action::TogglePanel,
        "i" => Action::StartCompose,
        _ => return None,
    };

    Some(action)
}

fn map_view_key(view: View, key: &KeyInput) -> Option<Action> {
    match key.key.as_str() {
        "q" => return Some(Action::Quit),
        "tab" => return Some(Action::NextView),
        _ => {}
    }

    if let Some(index) = key.as_char().and_then(|ch| ch.to_digit(10)) {
        return (index as usize)
            .checked_sub(1)
            .and_then(|index| View::ALL.get(index).copied())
            .map(Action::SwitchView);
    }

    let action = match (view, key.key.as_str()) {
        (View::Messages, "j" | "down") => Action::ChatListNext,
        (View::Messages, "k" | "up") => Action::ChatListPrevious,
        (View::Messages, "enter") => Action::OpenSelectedConversation,
        (View::Messages, "f") => Action::CycleChatFilter,
        (View::Actions, "j" | "down") => Action::ActionCenterNext,
        (View::Actions, "k" | "up") => Action::ActionCenterPrevious,
        (View::Actions, "enter") => Action::OpenActionConversation,
        (View::Actions, "a") => Action::AcceptActionItem,
        (View::Actions, "A") => Action::AcceptAllVisible,
        (View::Actions, "d") => Action::DismissActionItem,
        (View::Actions, "p") => Action::CyclePriorityFilter,
        (View::Actions, "t") => Action::ToggleActionOrigin,
        _ => return None,
    };

    Some(action)
}
