use std::collections::VecDeque;

use super::{
    action_center_state::ActionCenterState,
    chat::Conversation,
    chat_list_state::ChatListState,
    inbox::InboxStore,
    modal_state::{ModalState, ScheduleDefaults},
    navigation::{NavigationState, View},
    open_chat_state::OpenChatState,
    seed::DEFAULT_AGENT_NAME,
    suggestion::PriorityFilter,
};

/// Startup settings for the shell, resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    pub agent_name: String,
    pub default_view: View,
    pub default_priority: PriorityFilter,
    pub schedule: ScheduleDefaults,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            agent_name: DEFAULT_AGENT_NAME.to_owned(),
            default_view: View::Messages,
            default_priority: PriorityFilter::All,
            schedule: ScheduleDefaults::default(),
        }
    }
}

/// Which widget receives printable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Compose,
    Modal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    agent_name: String,
    schedule_defaults: ScheduleDefaults,
    store: InboxStore,
    navigation: NavigationState,
    chat_list: ChatListState,
    open_chat: OpenChatState,
    action_center: ActionCenterState,
    modal: ModalState,
    queued_modals: VecDeque<ModalState>,
    status_note: Option<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(InboxStore::default(), ShellSettings::default())
    }
}

impl ShellState {
    pub fn new(store: InboxStore, settings: ShellSettings) -> Self {
        Self {
            running: true,
            agent_name: settings.agent_name,
            schedule_defaults: settings.schedule,
            store,
            navigation: NavigationState::new(settings.default_view),
            chat_list: ChatListState::default(),
            open_chat: OpenChatState::default(),
            action_center: ActionCenterState::new(settings.default_priority),
            modal: ModalState::Closed,
            queued_modals: VecDeque::new(),
            status_note: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub fn schedule_defaults(&self) -> &ScheduleDefaults {
        &self.schedule_defaults
    }

    pub fn store(&self) -> &InboxStore {
        &self.store
    }

    /// Moves the store out for a copy-on-write update; pair with `replace_store`.
    pub fn take_store(&mut self) -> InboxStore {
        std::mem::take(&mut self.store)
    }

    pub fn replace_store(&mut self, store: InboxStore) {
        self.store = store;
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.navigation
    }

    pub fn chat_list(&self) -> &ChatListState {
        &self.chat_list
    }

    pub fn chat_list_mut(&mut self) -> &mut ChatListState {
        &mut self.chat_list
    }

    pub fn open_chat(&self) -> &OpenChatState {
        &self.open_chat
    }

    pub fn open_chat_mut(&mut self) -> &mut OpenChatState {
        &mut self.open_chat
    }

    pub fn action_center(&self) -> &ActionCenterState {
        &self.action_center
    }

    pub fn action_center_mut(&mut self) -> &mut ActionCenterState {
        &mut self.action_center
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }

    /// Shows `modal` now, or after the open one closes.
    pub fn open_or_queue_modal(&mut self, modal: ModalState) {
        if self.modal.is_open() {
            self.queued_modals.push_back(modal);
        } else {
            self.modal = modal;
        }
    }

    /// Closes the open modal and brings up the next queued one, if any.
    pub fn close_modal(&mut self) {
        self.modal = self.queued_modals.pop_front().unwrap_or_default();
    }

    pub fn queued_modal_count(&self) -> usize {
        self.queued_modals.len()
    }

    pub fn status_note(&self) -> Option<&str> {
        self.status_note.as_deref()
    }

    pub fn set_status_note(&mut self, note: impl Into<String>) {
        self.status_note = Some(note.into());
    }

    pub fn clear_status_note(&mut self) {
        self.status_note = None;
    }

    /// The conversation open in the detail view, if it still exists.
    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.navigation
            .selected_conversation()
            .and_then(|id| self.store.conversation(id))
    }

    pub fn input_mode(&self) -> InputMode {
        if self.modal.is_open() {
            InputMode::Modal
        } else if self.navigation.selected_conversation().is_some() && self.open_chat.is_composing()
        {
            InputMode::Compose
        } else {
            InputMode::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{modal_state::TemplateReviewForm, seed, suggestion::ActionPayload};

    #[test]
    fn new_state_applies_settings() {
        let settings = ShellSettings {
            agent_name: "Arjun".to_owned(),
            default_view: View::Actions,
            ..ShellSettings::default()
        };

        let state = ShellState::new(seed::mock_store(), settings);

        assert!(state.is_running());
        assert_eq!(state.agent_name(), "Arjun");
        assert_eq!(state.navigation().view(), View::Actions);
        assert_eq!(state.input_mode(), InputMode::Normal);
    }

    #[test]
    fn composing_only_counts_inside_an_open_conversation() {
        let mut state = ShellState::new(seed::mock_store(), ShellSettings::default());
        state.open_chat_mut().start_composing();
        assert_eq!(state.input_mode(), InputMode::Normal);

        state.navigation_mut().open_conversation("chat_1");
        assert_eq!(state.input_mode(), InputMode::Compose);
        assert_eq!(
            state.active_conversation().map(|c| c.id.as_str()),
            Some("chat_1")
        );
    }

    #[test]
    fn closing_a_modal_brings_up_the_queued_one() {
        let mut state = ShellState::new(seed::mock_store(), ShellSettings::default());
        let first = ModalState::TemplateReview(TemplateReviewForm::open(
            Vec::new(),
            ActionPayload::SendTemplate {
                template_name: None,
            },
        ));
        let second = ModalState::TemplateReview(TemplateReviewForm::open(
            Vec::new(),
            ActionPayload::SendTemplate {
                template_name: Some("Case_Study_2024.pdf".to_owned()),
            },
        ));

        state.open_or_queue_modal(first.clone());
        state.open_or_queue_modal(second.clone());
        assert_eq!(state.modal(), &first);
        assert_eq!(state.queued_modal_count(), 1);

        state.close_modal();
        assert_eq!(state.modal(), &second);

        state.close_modal();
        assert!(!state.modal().is_open());
    }

    #[test]
    fn take_and_replace_store_round_trip() {
        let mut state = ShellState::new(seed::mock_store(), ShellSettings::default());

        let store = state.take_store();
        assert!(state.store().conversations().is_empty());

        state.replace_store(store);
        assert_eq!(state.store().conversations().len(), 5);
    }
}
