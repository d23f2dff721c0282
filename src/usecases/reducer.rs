//! The single state transition function of the shell.
//!
//! `reduce` consumes the current state and returns the next one. Store
//! changes go through the suggestion router, which also takes the store by
//! value, so a transition never edits shared data in place.

use crate::domain::{
    chat_list_state::visible_conversations,
    inbox::SuggestionRef,
    modal_state::{EscalationForm, ModalState, ProactiveForm, ScheduleForm, TemplateReviewForm},
    navigation::View,
    shell_state::ShellState,
    suggestion::{ActionPayload, ActionType, SuggestionOrigin},
    text_input_state::TextInputState,
};

use super::{
    action_center::{self, ActionItem},
    contracts::Clock,
    suggestion_router::{self, AcceptOutcome, AcceptRequest},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SwitchView(View),
    NextView,
    CycleChatFilter,
    ChatListNext,
    ChatListPrevious,
    OpenSelectedConversation,
    Back,
    PanelNext,
    PanelPrevious,
    TogglePanel,
    AcceptPanelSuggestion,
    DismissPanelSuggestion,
    ReviewPanelTemplate,
    StartCompose,
    StopCompose,
    ComposeInput(char),
    ComposeBackspace,
    SendCompose,
    CursorLeft,
    CursorRight,
    ActionCenterNext,
    ActionCenterPrevious,
    ToggleActionOrigin,
    CyclePriorityFilter,
    AcceptActionItem,
    DismissActionItem,
    AcceptAllVisible,
    OpenActionConversation,
    ModalInput(char),
    ModalBackspace,
    ModalNext,
    ModalPrevious,
    ModalToggle,
    ModalConfirm,
    ModalCancel,
}

pub fn reduce(mut state: ShellState, action: Action, clock: &dyn Clock) -> ShellState {
    match action {
        Action::Quit => state.stop(),
        Action::SwitchView(view) => switch_view(&mut state, view),
        Action::NextView => {
            let next = state.navigation().view().next();
            switch_view(&mut state, next);
        }
        Action::CycleChatFilter => state.chat_list_mut().cycle_filter(),
        Action::ChatListNext => {
            let len = visible_conversations(state.store(), state.chat_list().filter()).len();
            state.chat_list_mut().select_next(len);
        }
        Action::ChatListPrevious => state.chat_list_mut().select_previous(),
        Action::OpenSelectedConversation => {
            if let Some(id) = state
                .chat_list()
                .selected_conversation_id(state.store())
                .map(ToOwned::to_owned)
            {
                open_conversation(&mut state, id);
            }
        }
        Action::Back => {
            state.navigation_mut().back();
            state.open_chat_mut().reset();
            state.clear_status_note();
        }
        Action::PanelNext => {
            let len = panel_len(&state);
            state.open_chat_mut().select_next(len);
        }
        Action::PanelPrevious => state.open_chat_mut().select_previous(),
        Action::TogglePanel => state.open_chat_mut().toggle_panel(),
        Action::AcceptPanelSuggestion => {
            if let Some(target) = selected_panel_target(&state) {
                state = accept_one(state, &target, None, clock);
            }
        }
        Action::DismissPanelSuggestion => {
            if let Some(target) = selected_panel_target(&state) {
                state = dismiss_targets(state, &[target]);
            }
        }
        Action::ReviewPanelTemplate => {
            if let Some(target) = selected_panel_target(&state) {
                open_template_review(&mut state, vec![target]);
            }
        }
        Action::StartCompose => {
            if state.navigation().selected_conversation().is_some() {
                state.open_chat_mut().start_composing();
            }
        }
        Action::StopCompose => state.open_chat_mut().stop_composing(),
        Action::ComposeInput(ch) => {
            state.open_chat_mut().compose_mut().insert_char(ch);
        }
        Action::ComposeBackspace => state.open_chat_mut().compose_mut().delete_char_before(),
        Action::SendCompose => state = send_compose(state, clock),
        Action::CursorLeft => move_cursor(&mut state, TextInputState::move_cursor_left),
        Action::CursorRight => move_cursor(&mut state, TextInputState::move_cursor_right),
        Action::ActionCenterNext => {
            let len = action_center::items_for(state.store(), state.action_center()).len();
            state.action_center_mut().select_next(len);
        }
        Action::ActionCenterPrevious => state.action_center_mut().select_previous(),
        Action::ToggleActionOrigin => state.action_center_mut().toggle_origin(),
        Action::CyclePriorityFilter => state.action_center_mut().cycle_priority_filter(),
        Action::AcceptActionItem => {
            if let Some(item) = selected_action_item(&state) {
                state = accept_action_item(state, item, clock);
            }
        }
        Action::DismissActionItem => {
            if let Some(item) = selected_action_item(&state) {
                state = dismiss_targets(state, &item.targets());
            }
        }
        Action::AcceptAllVisible => state = accept_all_visible(state, clock),
        Action::OpenActionConversation => {
            if let Some(ActionItem::Single {
                conversation_id, ..
            }) = selected_action_item(&state)
            {
                open_conversation(&mut state, conversation_id);
            }
        }
        Action::ModalInput(ch) => modal_input(&mut state, ch),
        Action::ModalBackspace => match state.modal_mut() {
            ModalState::Schedule(form) => form.delete_char_before(),
            ModalState::Escalation(form) => form.note_mut().delete_char_before(),
            ModalState::TemplateReview(form) => form.delete_char_before(),
            ModalState::ProactiveReview(form) => form.delete_char_before(),
            ModalState::Closed => {}
        },
        Action::ModalNext => match state.modal_mut() {
            ModalState::Schedule(form) => form.focus_next(),
            ModalState::TemplateReview(form) => form.highlight_next(),
            ModalState::ProactiveReview(form) => form.toggle_focus(),
            ModalState::Escalation(_) | ModalState::Closed => {}
        },
        Action::ModalPrevious => match state.modal_mut() {
            ModalState::Schedule(form) => form.focus_previous(),
            ModalState::TemplateReview(form) => form.highlight_previous(),
            ModalState::ProactiveReview(form) => form.toggle_focus(),
            ModalState::Escalation(_) | ModalState::Closed => {}
        },
        Action::ModalToggle => match state.modal_mut() {
            ModalState::Schedule(form) => form.toggle_focused(),
            ModalState::TemplateReview(form) => form.select_highlighted(),
            ModalState::ProactiveReview(form) => form.next_template(),
            ModalState::Escalation(_) | ModalState::Closed => {}
        },
        Action::ModalConfirm => state = confirm_modal(state, clock),
        Action::ModalCancel => {
            if state.modal().is_open() {
                tracing::debug!("modal cancelled");
            }
            state.close_modal();
        }
    }

    clamp_cursors(&mut state);
    state
}

fn switch_view(state: &mut ShellState, view: View) {
    state.navigation_mut().set_view(view);
    state.clear_status_note();
    tracing::debug!(view = view.as_label(), "view switched");
}

fn open_conversation(state: &mut ShellState, conversation_id: String) {
    tracing::debug!(conversation_id = %conversation_id, "conversation opened");
    state.navigation_mut().open_conversation(conversation_id);
    state.open_chat_mut().reset();
    state.clear_status_note();
}

fn panel_len(state: &ShellState) -> usize {
    state
        .navigation()
        .selected_conversation()
        .map(|id| suggestion_router::panel_suggestions(state.store(), id).len())
        .unwrap_or(0)
}

fn selected_panel_target(state: &ShellState) -> Option<SuggestionRef> {
    let conversation_id = state.navigation().selected_conversation()?;
    suggestion_router::panel_suggestions(state.store(), conversation_id)
        .get(state.open_chat().panel_index())
        .map(|suggestion| SuggestionRef::new(conversation_id, &suggestion.id))
}

fn selected_action_item(state: &ShellState) -> Option<ActionItem> {
    action_center::items_for(state.store(), state.action_center())
        .into_iter()
        .nth(state.action_center().selected_index())
}

fn action_type_of(state: &ShellState, target: &SuggestionRef) -> Option<ActionType> {
    state
        .store()
        .suggestion(target)
        .map(|suggestion| suggestion.action_type())
}

/// Runs the router's accept and opens the follow-up modal it asks for.
fn accept_one(
    mut state: ShellState,
    target: &SuggestionRef,
    payload: Option<ActionPayload>,
    clock: &dyn Clock,
) -> ShellState {
    let mut request =
        AcceptRequest::new(Some(target.conversation_id.as_str()), &target.suggestion_id);
    if let Some(payload) = payload {
        request = request.with_payload(payload);
    }

    let (store, outcome) = suggestion_router::accept(state.take_store(), &request, clock);
    state.replace_store(store);

    match outcome {
        AcceptOutcome::Applied(applied) => {
            if let Some(title) = state.store().suggestion(&applied).map(|s| s.title.clone()) {
                state.set_status_note(format!("Accepted: {title}"));
            }
        }
        AcceptOutcome::NeedsSchedule(staged) => open_schedule(&mut state, vec![staged], clock),
        AcceptOutcome::NeedsEscalation(staged) => open_escalation(&mut state, vec![staged]),
        AcceptOutcome::Ignored => {}
    }

    state
}

fn dismiss_targets(mut state: ShellState, targets: &[SuggestionRef]) -> ShellState {
    let mut store = state.take_store();
    for target in targets {
        store = suggestion_router::dismiss(store, &target.conversation_id, &target.suggestion_id);
    }
    state.replace_store(store);
    state
}

fn open_schedule(state: &mut ShellState, targets: Vec<SuggestionRef>, clock: &dyn Clock) {
    let Some(suggestion) = targets
        .first()
        .and_then(|target| state.store().suggestion(target))
        .cloned()
    else {
        return;
    };

    let form = ScheduleForm::open(
        targets,
        &suggestion,
        clock.today(),
        state.schedule_defaults(),
    );
    state.open_or_queue_modal(ModalState::Schedule(form));
}

fn open_escalation(state: &mut ShellState, targets: Vec<SuggestionRef>) {
    let Some(suggestion) = targets
        .first()
        .and_then(|target| state.store().suggestion(target))
        .cloned()
    else {
        return;
    };

    state.open_or_queue_modal(ModalState::Escalation(EscalationForm::open(
        targets,
        &suggestion,
    )));
}

fn open_template_review(state: &mut ShellState, targets: Vec<SuggestionRef>) {
    let Some(payload) = targets
        .first()
        .and_then(|target| state.store().suggestion(target))
        .filter(|suggestion| suggestion.action_type() == ActionType::SendTemplate)
        .map(|suggestion| suggestion.payload.clone())
    else {
        return;
    };

    state.open_or_queue_modal(ModalState::TemplateReview(TemplateReviewForm::open(
        targets, payload,
    )));
}

fn open_proactive_review(
    state: &mut ShellState,
    targets: Vec<SuggestionRef>,
    contact_name: Option<&str>,
) {
    let Some(suggestion) = targets
        .first()
        .and_then(|target| state.store().suggestion(target))
        .cloned()
    else {
        return;
    };

    tracing::debug!(suggestion_id = %suggestion.id, "proactive review opened");
    state.open_or_queue_modal(ModalState::ProactiveReview(ProactiveForm::open(
        targets,
        &suggestion,
        contact_name,
    )));
}

/// Opens the schedule form for `schedule_targets` and queues the escalation
/// form behind it, so neither batch is lost.
fn stage_follow_ups(
    state: &mut ShellState,
    schedule_targets: Vec<SuggestionRef>,
    escalation_targets: Vec<SuggestionRef>,
    clock: &dyn Clock,
) {
    if !schedule_targets.is_empty() {
        open_schedule(state, schedule_targets, clock);
    }
    if !escalation_targets.is_empty() {
        open_escalation(state, escalation_targets);
    }
}

fn move_cursor(state: &mut ShellState, step: fn(&mut TextInputState)) {
    if state.modal().is_open() {
        if let Some(input) = state.modal_mut().focused_input_mut() {
            step(input);
        }
    } else {
        step(state.open_chat_mut().compose_mut());
    }
}

fn accept_action_item(mut state: ShellState, item: ActionItem, clock: &dyn Clock) -> ShellState {
    if state.action_center().origin() == SuggestionOrigin::Proactive {
        let contact_name = match &item {
            ActionItem::Single { contact_name, .. } => Some(contact_name.clone()),
            ActionItem::Bulk(_) => None,
        };
        open_proactive_review(&mut state, item.targets(), contact_name.as_deref());
        return state;
    }

    match item {
        ActionItem::Single {
            conversation_id,
            suggestion,
            ..
        } => {
            let target = SuggestionRef::new(conversation_id, &suggestion.id);
            if suggestion.action_type() == ActionType::SendTemplate {
                open_template_review(&mut state, vec![target]);
                state
            } else {
                accept_one(state, &target, None, clock)
            }
        }
        ActionItem::Bulk(group) => {
            let targets = group.targets();
            match group.action_type {
                ActionType::SendTemplate => {
                    state.open_or_queue_modal(ModalState::TemplateReview(
                        TemplateReviewForm::open(targets, group.payload),
                    ));
                    state
                }
                ActionType::ScheduleFollowup => {
                    open_schedule(&mut state, targets, clock);
                    state
                }
                ActionType::Escalate => {
                    open_escalation(&mut state, targets);
                    state
                }
                ActionType::UpdateField => targets.iter().fold(state, |state, target| {
                    accept_one(state, target, Some(group.payload.clone()), clock)
                }),
            }
        }
    }
}

/// Applies every immediate action behind the filtered rows, then stages the
/// schedule targets in one modal with the escalation targets queued after it.
fn accept_all_visible(mut state: ShellState, clock: &dyn Clock) -> ShellState {
    let targets = action_center::visible_targets(state.store(), state.action_center());
    let mut schedule_targets = Vec::new();
    let mut escalation_targets = Vec::new();
    let mut applied = 0usize;

    for target in targets {
        match action_type_of(&state, &target) {
            Some(ActionType::ScheduleFollowup) => schedule_targets.push(target),
            Some(ActionType::Escalate) => escalation_targets.push(target),
            Some(ActionType::SendTemplate | ActionType::UpdateField) => {
                state = accept_one(state, &target, None, clock);
                applied += 1;
            }
            None => {}
        }
    }

    tracing::info!(
        applied,
        staged_schedules = schedule_targets.len(),
        staged_escalations = escalation_targets.len(),
        "accept all"
    );

    let staged = schedule_targets.len() + escalation_targets.len();
    stage_follow_ups(&mut state, schedule_targets, escalation_targets, clock);
    if staged > 0 {
        state.set_status_note(format!(
            "Accepted {applied} suggestion(s), {staged} awaiting confirmation"
        ));
    } else {
        state.set_status_note(format!("Accepted {applied} suggestion(s)"));
    }

    state
}

fn send_compose(mut state: ShellState, clock: &dyn Clock) -> ShellState {
    let Some(active) = state
        .navigation()
        .selected_conversation()
        .map(ToOwned::to_owned)
    else {
        return state;
    };

    let text = state.open_chat_mut().compose_mut().take();
    let store = suggestion_router::send_message(
        state.take_store(),
        None,
        Some(active.as_str()),
        &text,
        clock,
    );
    state.replace_store(store);
    state
}

fn modal_input(state: &mut ShellState, ch: char) {
    match state.modal_mut() {
        ModalState::Schedule(form) => form.insert_char(ch),
        ModalState::Escalation(form) => {
            form.note_mut().insert_char(ch);
        }
        ModalState::TemplateReview(form) => form.insert_char(ch),
        ModalState::ProactiveReview(form) => form.insert_char(ch),
        ModalState::Closed => {}
    }
}

fn confirm_modal(mut state: ShellState, clock: &dyn Clock) -> ShellState {
    match state.modal().clone() {
        ModalState::Closed => state,
        ModalState::Schedule(form) => {
            let store = suggestion_router::confirm_schedule(
                state.take_store(),
                form.targets(),
                &form.details(),
                clock,
            );
            state.replace_store(store);
            state.close_modal();
            state.set_status_note(format!(
                "Follow-up scheduled for {} conversation(s)",
                form.targets().len()
            ));
            state
        }
        ModalState::Escalation(form) => {
            let store = suggestion_router::confirm_escalation(
                state.take_store(),
                form.targets(),
                form.note().text(),
                clock,
            );
            state.replace_store(store);
            state.close_modal();
            state.set_status_note(format!(
                "Escalated {} conversation(s)",
                form.targets().len()
            ));
            state
        }
        ModalState::TemplateReview(form) => {
            let Some(payload) = form.confirmed_payload() else {
                return state;
            };

            state.close_modal();
            let mut state = form.targets().iter().fold(state, |state, target| {
                accept_one(state, target, Some(payload.clone()), clock)
            });
            if let Some(name) = payload.template_name() {
                state.set_status_note(format!(
                    "Sent {name} to {} conversation(s)",
                    form.targets().len()
                ));
            }
            state
        }
        ModalState::ProactiveReview(form) => {
            state.close_modal();
            let mut schedule_targets = Vec::new();
            let mut escalation_targets = Vec::new();
            let mut sent = 0usize;

            for target in form.targets() {
                let (store, outcome) = suggestion_router::accept_proactive(
                    state.take_store(),
                    target,
                    form.template(),
                    form.message().text(),
                    clock,
                );
                state.replace_store(store);

                match outcome {
                    AcceptOutcome::Applied(_) => sent += 1,
                    AcceptOutcome::NeedsSchedule(staged) => {
                        sent += 1;
                        schedule_targets.push(staged);
                    }
                    AcceptOutcome::NeedsEscalation(staged) => {
                        sent += 1;
                        escalation_targets.push(staged);
                    }
                    AcceptOutcome::Ignored => {}
                }
            }

            stage_follow_ups(&mut state, schedule_targets, escalation_targets, clock);
            state.set_status_note(format!(
                "Sent {} to {sent} conversation(s)",
                form.template()
            ));
            state
        }
    }
}

fn clamp_cursors(state: &mut ShellState) {
    let panel_len = panel_len(state);
    state.open_chat_mut().clamp_panel(panel_len);

    let items_len = action_center::items_for(state.store(), state.action_center()).len();
    state.action_center_mut().clamp(items_len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            message::MessageKind,
            modal_state::ModalState,
            seed,
            shell_state::{InputMode, ShellSettings},
            suggestion::SuggestionStatus,
        },
        infra::stubs::FixedClock,
    };

    fn state() -> ShellState {
        ShellState::new(seed::mock_store(), ShellSettings::default())
    }

    fn run(state: ShellState, actions: &[Action]) -> ShellState {
        let clock = FixedClock::default();
        actions
            .iter()
            .cloned()
            .fold(state, |state, action| reduce(state, action, &clock))
    }

    fn status(state: &ShellState, conversation_id: &str, suggestion_id: &str) -> SuggestionStatus {
        state
            .store()
            .suggestion(&SuggestionRef::new(conversation_id, suggestion_id))
            .map(|s| s.status)
            .expect("suggestion exists")
    }

    fn message_count(state: &ShellState, conversation_id: &str) -> usize {
        state
            .store()
            .conversation(conversation_id)
            .map(|c| c.messages.len())
            .unwrap_or(0)
    }

    #[test]
    fn quit_stops_the_shell() {
        let state = run(state(), &[Action::Quit]);

        assert!(!state.is_running());
    }

    #[test]
    fn open_and_back_drive_navigation() {
        let state = run(state(), &[Action::ChatListNext, Action::OpenSelectedConversation]);
        assert_eq!(state.navigation().selected_conversation(), Some("chat_2"));

        let state = run(state, &[Action::SwitchView(View::Settings), Action::Back]);
        assert_eq!(state.navigation().selected_conversation(), None);
        assert_eq!(state.navigation().view(), View::Messages);
    }

    #[test]
    fn accepting_schedule_in_panel_opens_modal_without_mutation() {
        let state = run(state(), &[Action::OpenSelectedConversation]);
        let before = state.store().clone();

        let state = run(state, &[Action::AcceptPanelSuggestion]);

        assert!(matches!(state.modal(), ModalState::Schedule(_)));
        assert_eq!(state.input_mode(), InputMode::Modal);
        assert_eq!(state.store(), &before);
    }

    #[test]
    fn confirming_schedule_appends_message_and_accepts() {
        let state = run(
            state(),
            &[
                Action::OpenSelectedConversation,
                Action::AcceptPanelSuggestion,
                Action::ModalConfirm,
            ],
        );

        let last = state
            .active_conversation()
            .and_then(|c| c.last_message())
            .expect("schedule message appended");
        assert_eq!(last.kind, MessageKind::Schedule);
        assert_eq!(
            last.schedule.as_ref().map(|s| s.date.as_str()),
            Some("2026-10-19")
        );
        assert_eq!(status(&state, "chat_1", "sugg_1"), SuggestionStatus::Accepted);
        assert!(!state.modal().is_open());
    }

    #[test]
    fn cancelling_modal_leaves_suggestion_pending() {
        let state = run(
            state(),
            &[
                Action::OpenSelectedConversation,
                Action::AcceptPanelSuggestion,
                Action::ModalCancel,
            ],
        );

        assert!(!state.modal().is_open());
        assert_eq!(status(&state, "chat_1", "sugg_1"), SuggestionStatus::Pending);
        assert_eq!(message_count(&state, "chat_1"), 4);
    }

    #[test]
    fn accepting_template_in_panel_is_immediate() {
        let state = run(
            state(),
            &[
                Action::OpenSelectedConversation,
                Action::PanelNext,
                Action::AcceptPanelSuggestion,
            ],
        );

        assert!(!state.modal().is_open());
        assert_eq!(status(&state, "chat_1", "sugg_2"), SuggestionStatus::Accepted);
        assert_eq!(
            state
                .active_conversation()
                .and_then(|c| c.last_message())
                .map(|m| m.content.as_str()),
            Some("Enterprise_Pricing_v2.pdf")
        );
        assert_eq!(state.open_chat().panel_index(), 0);
    }

    #[test]
    fn dismissing_in_panel_rejects_only_selected() {
        let state = run(
            state(),
            &[Action::OpenSelectedConversation, Action::DismissPanelSuggestion],
        );

        assert_eq!(status(&state, "chat_1", "sugg_1"), SuggestionStatus::Rejected);
        assert_eq!(status(&state, "chat_1", "sugg_2"), SuggestionStatus::Pending);
        assert_eq!(message_count(&state, "chat_1"), 4);
    }

    #[test]
    fn escalation_note_is_embedded_on_confirm() {
        let mut state = state();
        state.navigation_mut().open_conversation("chat_5");
        let mut state = run(state, &[Action::AcceptPanelSuggestion]);
        for ch in "VIP".chars() {
            state = run(state, &[Action::ModalInput(ch)]);
        }

        let state = run(state, &[Action::ModalConfirm]);

        assert_eq!(
            state
                .store()
                .conversation("chat_5")
                .and_then(|c| c.last_message())
                .map(|m| m.content.as_str()),
            Some("[SYSTEM: Ticket Escalated. Note: VIP]")
        );
        assert_eq!(status(&state, "chat_5", "sugg_6"), SuggestionStatus::Accepted);
    }

    #[test]
    fn bulk_template_review_sends_chosen_file_to_every_member() {
        let state = run(
            state(),
            &[
                Action::SwitchView(View::Actions),
                Action::AcceptActionItem,
                Action::ModalConfirm,
            ],
        );
        assert!(
            matches!(state.modal(), ModalState::TemplateReview(_)),
            "confirm stays disabled until a template is selected"
        );

        let state = run(state, &[Action::ModalToggle, Action::ModalConfirm]);

        for (conversation_id, suggestion_id) in
            [("chat_2", "sugg_3"), ("chat_3", "sugg_4"), ("chat_4", "sugg_5")]
        {
            assert_eq!(
                status(&state, conversation_id, suggestion_id),
                SuggestionStatus::Accepted
            );
            assert_eq!(
                state
                    .store()
                    .conversation(conversation_id)
                    .and_then(|c| c.last_message())
                    .map(|m| m.content.as_str()),
                Some("Product_Catalog_v2.pdf")
            );
        }
        assert_eq!(
            state.status_note(),
            Some("Sent Product_Catalog_v2.pdf to 3 conversation(s)")
        );
    }

    #[test]
    fn accept_all_applies_templates_and_stages_schedule() {
        let state = run(state(), &[Action::SwitchView(View::Actions), Action::AcceptAllVisible]);

        assert_eq!(status(&state, "chat_1", "sugg_2"), SuggestionStatus::Accepted);
        assert_eq!(status(&state, "chat_2", "sugg_3"), SuggestionStatus::Accepted);
        assert_eq!(status(&state, "chat_1", "sugg_1"), SuggestionStatus::Pending);
        match state.modal() {
            ModalState::Schedule(form) => {
                assert_eq!(form.targets(), [SuggestionRef::new("chat_1", "sugg_1")]);
            }
            other => panic!("expected schedule modal, got {other:?}"),
        }
    }

    #[test]
    fn accept_all_queues_escalation_behind_schedule() {
        let state = run(state(), &[Action::SwitchView(View::Actions), Action::AcceptAllVisible]);
        assert_eq!(
            state.status_note(),
            Some("Accepted 4 suggestion(s), 2 awaiting confirmation")
        );

        let state = run(state, &[Action::ModalConfirm]);
        assert_eq!(status(&state, "chat_1", "sugg_1"), SuggestionStatus::Accepted);
        match state.modal() {
            ModalState::Escalation(form) => {
                assert_eq!(form.targets(), [SuggestionRef::new("chat_5", "sugg_6")]);
            }
            other => panic!("expected escalation modal, got {other:?}"),
        }

        let state = run(state, &[Action::ModalConfirm]);
        assert_eq!(status(&state, "chat_5", "sugg_6"), SuggestionStatus::Accepted);
        assert!(!state.modal().is_open());
    }

    fn proactive_review_state() -> ShellState {
        run(
            state(),
            &[
                Action::SwitchView(View::Actions),
                Action::ToggleActionOrigin,
                Action::ActionCenterNext,
                Action::AcceptActionItem,
            ],
        )
    }

    #[test]
    fn accepting_on_proactive_tab_opens_review() {
        let state = proactive_review_state();

        match state.modal() {
            ModalState::ProactiveReview(form) => {
                assert_eq!(form.targets(), [SuggestionRef::new("chat_4", "pro_1")]);
                assert!(form.message().text().starts_with("Hi Amit Kumar, "));
                assert_eq!(form.template(), "Re_Engagement_Template.pdf");
            }
            other => panic!("expected proactive review, got {other:?}"),
        }
        assert_eq!(status(&state, "chat_4", "pro_1"), SuggestionStatus::Pending);
    }

    #[test]
    fn proactive_review_edits_draft_and_template() {
        let mut state = proactive_review_state();
        for ch in " Thanks!".chars() {
            state = run(state, &[Action::ModalInput(ch)]);
        }
        let state = run(state, &[Action::ModalNext, Action::ModalToggle, Action::ModalInput('x')]);

        match state.modal() {
            ModalState::ProactiveReview(form) => {
                assert!(form.message().text().ends_with("enterprise solution? Thanks!"));
                assert_eq!(form.template(), "Product_Catalog_v2.pdf");
            }
            other => panic!("expected proactive review, got {other:?}"),
        }
    }

    #[test]
    fn confirming_proactive_review_sends_draft_and_template() {
        let before = message_count(&state(), "chat_4");

        let state = run(proactive_review_state(), &[Action::ModalConfirm]);

        let messages = &state
            .store()
            .conversation("chat_4")
            .expect("chat_4 exists")
            .messages;
        assert_eq!(messages.len(), before + 2);
        assert!(messages[before].content.starts_with("Hi Amit Kumar, "));
        assert_eq!(messages[before + 1].content, "Re_Engagement_Template.pdf");
        assert_eq!(status(&state, "chat_4", "pro_1"), SuggestionStatus::Accepted);
        assert!(!state.modal().is_open());
        assert_eq!(
            state.status_note(),
            Some("Sent Re_Engagement_Template.pdf to 1 conversation(s)")
        );
    }

    #[test]
    fn cancelling_proactive_review_changes_nothing() {
        let before = state().store().clone();

        let state = run(proactive_review_state(), &[Action::ModalCancel]);

        assert!(!state.modal().is_open());
        assert_eq!(state.store(), &before);
    }

    #[test]
    fn confirming_proactive_escalation_stages_escalation_form() {
        let state = run(
            state(),
            &[
                Action::SwitchView(View::Actions),
                Action::ToggleActionOrigin,
                Action::ActionCenterNext,
                Action::ActionCenterNext,
                Action::AcceptActionItem,
                Action::ModalConfirm,
            ],
        );

        match state.modal() {
            ModalState::Escalation(form) => {
                assert_eq!(form.reason(), Some("Frustration detected"));
            }
            other => panic!("expected escalation modal, got {other:?}"),
        }
        assert_eq!(status(&state, "chat_5", "pro_2"), SuggestionStatus::Pending);
    }

    #[test]
    fn cursor_keys_move_the_compose_caret() {
        let mut state = run(state(), &[Action::OpenSelectedConversation, Action::StartCompose]);
        for ch in "ac".chars() {
            state = run(state, &[Action::ComposeInput(ch)]);
        }

        let state = run(
            state,
            &[Action::CursorLeft, Action::ComposeInput('b'), Action::CursorRight],
        );

        assert_eq!(state.open_chat().compose().text(), "abc");
        assert_eq!(state.open_chat().compose().cursor_position(), 3);
    }

    #[test]
    fn cursor_keys_edit_inside_modal_field() {
        let mut state = state();
        state.navigation_mut().open_conversation("chat_5");
        let mut state = run(state, &[Action::AcceptPanelSuggestion]);
        for ch in "VP".chars() {
            state = run(state, &[Action::ModalInput(ch)]);
        }

        let state = run(state, &[Action::CursorLeft, Action::ModalInput('I')]);

        match state.modal() {
            ModalState::Escalation(form) => assert_eq!(form.note().text(), "VIP"),
            other => panic!("expected escalation modal, got {other:?}"),
        }
    }

    #[test]
    fn compose_sends_trimmed_text_to_active_conversation() {
        let mut state = run(state(), &[Action::OpenSelectedConversation, Action::StartCompose]);
        for ch in " hi ".chars() {
            state = run(state, &[Action::ComposeInput(ch)]);
        }

        let state = run(state, &[Action::SendCompose]);

        assert_eq!(
            state
                .active_conversation()
                .and_then(|c| c.last_message())
                .map(|m| m.content.as_str()),
            Some("hi")
        );
        assert!(state.open_chat().compose().is_empty());
    }

    #[test]
    fn compose_requires_open_conversation() {
        let state = run(state(), &[Action::StartCompose]);

        assert!(!state.open_chat().is_composing());
    }

    #[test]
    fn action_center_cursor_clamps_after_items_disappear() {
        let state = run(
            state(),
            &[
                Action::SwitchView(View::Actions),
                Action::ActionCenterNext,
                Action::ActionCenterNext,
                Action::ActionCenterNext,
                Action::DismissActionItem,
            ],
        );

        assert_eq!(status(&state, "chat_5", "sugg_6"), SuggestionStatus::Rejected);
        assert_eq!(state.action_center().selected_index(), 2);
    }

    #[test]
    fn open_action_conversation_drills_into_single_items() {
        let state = run(
            state(),
            &[
                Action::SwitchView(View::Actions),
                Action::ActionCenterNext,
                Action::OpenActionConversation,
            ],
        );

        assert_eq!(state.navigation().selected_conversation(), Some("chat_1"));
    }
}
