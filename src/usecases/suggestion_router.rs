//! Suggestion routing: derives display groupings from the flat suggestion set
//! and applies accept/dismiss transitions to the inbox store.
//!
//! Every transition takes the store by value and returns the next store, so
//! callers replace their copy wholesale. Lookups that fail are no-ops.

use crate::domain::{
    inbox::{InboxStore, SuggestionRef},
    message::{Message, MessageKind, MessageSender, ScheduleDetails},
    suggestion::{
        ActionPayload, ActionType, Priority, PriorityFilter, Suggestion, SuggestionOrigin,
        SuggestionStatus,
    },
};

use super::contracts::Clock;

const FALLBACK_TEMPLATE_NAME: &str = "Document.pdf";
const DOCUMENT_EXTENSIONS: [&str; 7] = [".pdf", ".doc", ".docx", ".ppt", ".pptx", ".xls", ".xlsx"];
const DOCUMENT_KEYWORDS: [&str; 2] = ["Catalog", "Brochure"];
const SCHEDULE_MESSAGE_TEXT: &str = "Scheduled Call";

/// A pending suggestion together with the conversation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub conversation_id: String,
    pub contact_name: String,
    pub contact_avatar: String,
    pub suggestion: Suggestion,
}

impl SuggestionEntry {
    pub fn target(&self) -> SuggestionRef {
        SuggestionRef::new(&self.conversation_id, &self.suggestion.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkMember {
    pub conversation_id: String,
    pub contact_name: String,
    pub contact_avatar: String,
    pub suggestion_id: String,
}

/// Suggestions sharing action type and title across several conversations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkGroup {
    pub action_type: ActionType,
    pub title: String,
    pub description: String,
    /// Payload of the first member; applied to every member on bulk accept.
    pub payload: ActionPayload,
    pub members: Vec<BulkMember>,
}

impl BulkGroup {
    pub fn targets(&self) -> Vec<SuggestionRef> {
        self.members
            .iter()
            .map(|member| SuggestionRef::new(&member.conversation_id, &member.suggestion_id))
            .collect()
    }

    fn distinct_conversations(&self) -> usize {
        let mut seen: Vec<&str> = Vec::new();
        for member in &self.members {
            if !seen.contains(&member.conversation_id.as_str()) {
                seen.push(&member.conversation_id);
            }
        }
        seen.len()
    }

    fn matches(&self, suggestion: &Suggestion) -> bool {
        self.action_type == suggestion.action_type() && self.title == suggestion.title
    }
}

/// Remaining suggestions of one conversation that are not part of a bulk group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationGroup {
    pub conversation_id: String,
    pub contact_name: String,
    pub contact_avatar: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkDisplay {
    pub bulk: Vec<BulkGroup>,
    pub by_conversation: Vec<ConversationGroup>,
}

impl BulkDisplay {
    pub fn is_empty(&self) -> bool {
        self.bulk.is_empty() && self.by_conversation.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptRequest {
    /// Conversation the caller believes owns the suggestion; searched first.
    pub conversation_id: Option<String>,
    pub suggestion_id: String,
    /// Overrides the suggestion's own payload when it has the same action type.
    pub payload: Option<ActionPayload>,
}

impl AcceptRequest {
    pub fn new(conversation_id: Option<&str>, suggestion_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.map(ToOwned::to_owned),
            suggestion_id: suggestion_id.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: ActionPayload) -> Self {
        self.payload = Some(payload);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// The action ran and the suggestion left the pending set.
    Applied(SuggestionRef),
    /// Nothing changed yet; the schedule modal must collect details first.
    NeedsSchedule(SuggestionRef),
    /// Nothing changed yet; the escalation modal must collect a note first.
    NeedsEscalation(SuggestionRef),
    Ignored,
}

/// Flattens the pending suggestions of every conversation, in store order.
pub fn list_all(store: &InboxStore) -> Vec<SuggestionEntry> {
    store
        .conversations()
        .iter()
        .flat_map(|conversation| {
            conversation
                .suggestions
                .iter()
                .filter(|suggestion| suggestion.is_pending())
                .map(move |suggestion| SuggestionEntry {
                    conversation_id: conversation.id.clone(),
                    contact_name: conversation.contact.name.clone(),
                    contact_avatar: conversation.contact.avatar_url(),
                    suggestion: suggestion.clone(),
                })
        })
        .collect()
}

pub fn filter_by_priority(
    entries: Vec<SuggestionEntry>,
    filter: PriorityFilter,
) -> Vec<SuggestionEntry> {
    entries
        .into_iter()
        .filter(|entry| filter.matches(entry.suggestion.priority))
        .collect()
}

pub fn filter_by_origin(
    entries: Vec<SuggestionEntry>,
    origin: SuggestionOrigin,
) -> Vec<SuggestionEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.suggestion.origin == origin)
        .collect()
}

/// Groups entries for the action center.
///
/// Pass one groups by (action type, title) in first-seen order and keeps the
/// groups spanning more than one distinct conversation. Pass two groups every
/// entry not covered by a bulk group by conversation, in first-seen order.
pub fn group_for_bulk_display(entries: &[SuggestionEntry]) -> BulkDisplay {
    let mut candidates: Vec<BulkGroup> = Vec::new();
    for entry in entries {
        let member = BulkMember {
            conversation_id: entry.conversation_id.clone(),
            contact_name: entry.contact_name.clone(),
            contact_avatar: entry.contact_avatar.clone(),
            suggestion_id: entry.suggestion.id.clone(),
        };

        match candidates
            .iter_mut()
            .find(|group| group.matches(&entry.suggestion))
        {
            Some(group) => group.members.push(member),
            None => candidates.push(BulkGroup {
                action_type: entry.suggestion.action_type(),
                title: entry.suggestion.title.clone(),
                description: entry.suggestion.description.clone(),
                payload: entry.suggestion.payload.clone(),
                members: vec![member],
            }),
        }
    }

    let bulk: Vec<BulkGroup> = candidates
        .into_iter()
        .filter(|group| group.distinct_conversations() > 1)
        .collect();

    let mut by_conversation: Vec<ConversationGroup> = Vec::new();
    for entry in entries {
        if bulk.iter().any(|group| group.matches(&entry.suggestion)) {
            continue;
        }

        match by_conversation
            .iter_mut()
            .find(|group| group.conversation_id == entry.conversation_id)
        {
            Some(group) => group.suggestions.push(entry.suggestion.clone()),
            None => by_conversation.push(ConversationGroup {
                conversation_id: entry.conversation_id.clone(),
                contact_name: entry.contact_name.clone(),
                contact_avatar: entry.contact_avatar.clone(),
                suggestions: vec![entry.suggestion.clone()],
            }),
        }
    }

    BulkDisplay {
        bulk,
        by_conversation,
    }
}

/// Pending, active-origin suggestions of one conversation, most urgent first.
pub fn panel_suggestions(store: &InboxStore, conversation_id: &str) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = store
        .conversation(conversation_id)
        .map(|conversation| {
            conversation
                .suggestions
                .iter()
                .filter(|s| s.is_pending() && s.origin == SuggestionOrigin::Active)
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    suggestions.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    suggestions
}

/// Action type and priority of each pending active suggestion, for chat list
/// badges. Proactive suggestions only surface in the action center.
pub fn chat_action_badges(
    store: &InboxStore,
    conversation_id: &str,
) -> Vec<(ActionType, Priority)> {
    store
        .conversation(conversation_id)
        .map(|conversation| {
            conversation
                .suggestions
                .iter()
                .filter(|s| s.is_pending() && s.origin == SuggestionOrigin::Active)
                .map(|s| (s.action_type(), s.priority))
                .collect()
        })
        .unwrap_or_default()
}

/// Accepts a suggestion.
///
/// Send-template and update-field actions run immediately. Schedule and
/// escalate actions leave the store untouched and ask the caller to open the
/// matching modal; the modal's confirm handler finishes the transition.
pub fn accept(
    mut store: InboxStore,
    request: &AcceptRequest,
    clock: &dyn Clock,
) -> (InboxStore, AcceptOutcome) {
    let Some(target) =
        store.locate_pending(&request.suggestion_id, request.conversation_id.as_deref())
    else {
        tracing::debug!(
            suggestion_id = %request.suggestion_id,
            "accept ignored: suggestion not found"
        );
        return (store, AcceptOutcome::Ignored);
    };

    let Some(suggestion) = store.suggestion(&target).cloned() else {
        return (store, AcceptOutcome::Ignored);
    };

    let payload = request
        .payload
        .clone()
        .filter(|payload| payload.action_type() == suggestion.action_type())
        .unwrap_or(suggestion.payload);

    let outcome = match payload {
        ActionPayload::ScheduleFollowup { .. } => AcceptOutcome::NeedsSchedule(target),
        ActionPayload::Escalate { .. } => AcceptOutcome::NeedsEscalation(target),
        ActionPayload::SendTemplate { template_name } => {
            let template_name = template_name.unwrap_or_else(|| FALLBACK_TEMPLATE_NAME.to_owned());
            let message = template_message(&mut store, &template_name, clock);
            store.append_message(&target.conversation_id, message);
            store.set_status(&target, SuggestionStatus::Accepted);
            tracing::info!(
                conversation_id = %target.conversation_id,
                suggestion_id = %target.suggestion_id,
                template = %template_name,
                "template sent"
            );
            AcceptOutcome::Applied(target)
        }
        ActionPayload::UpdateField { field, value } => {
            let message = system_message(
                &mut store,
                format!("[SYSTEM: Updated {field} to {value}]"),
                clock,
            );
            store.append_message(&target.conversation_id, message);
            store.set_status(&target, SuggestionStatus::Accepted);
            tracing::info!(
                conversation_id = %target.conversation_id,
                suggestion_id = %target.suggestion_id,
                field = %field,
                "field updated"
            );
            AcceptOutcome::Applied(target)
        }
    };

    (store, outcome)
}

/// Sends a reviewed proactive outreach: the drafted text (when not blank)
/// followed by the chosen attachment. Schedule and escalation suggestions stay
/// pending for their own confirmation; anything else is marked accepted.
pub fn accept_proactive(
    mut store: InboxStore,
    target: &SuggestionRef,
    template_name: &str,
    draft: &str,
    clock: &dyn Clock,
) -> (InboxStore, AcceptOutcome) {
    let Some(target) =
        store.locate_pending(&target.suggestion_id, Some(target.conversation_id.as_str()))
    else {
        return (store, AcceptOutcome::Ignored);
    };
    let Some(action_type) = store.suggestion(&target).map(|s| s.action_type()) else {
        return (store, AcceptOutcome::Ignored);
    };

    store = send_message(
        store,
        Some(target.conversation_id.as_str()),
        None,
        draft,
        clock,
    );
    let message = template_message(&mut store, template_name, clock);
    store.append_message(&target.conversation_id, message);
    tracing::info!(
        conversation_id = %target.conversation_id,
        suggestion_id = %target.suggestion_id,
        template = %template_name,
        "proactive outreach sent"
    );

    let outcome = match action_type {
        ActionType::ScheduleFollowup => AcceptOutcome::NeedsSchedule(target),
        ActionType::Escalate => AcceptOutcome::NeedsEscalation(target),
        ActionType::SendTemplate | ActionType::UpdateField => {
            store.set_status(&target, SuggestionStatus::Accepted);
            AcceptOutcome::Applied(target)
        }
    };

    (store, outcome)
}

/// Finishes a staged schedule acceptance for every target still pending.
pub fn confirm_schedule(
    mut store: InboxStore,
    targets: &[SuggestionRef],
    details: &ScheduleDetails,
    clock: &dyn Clock,
) -> InboxStore {
    for target in targets {
        if !is_pending(&store, target) {
            continue;
        }

        let message = Message {
            id: store.next_message_id(),
            sender: MessageSender::Agent,
            content: SCHEDULE_MESSAGE_TEXT.to_owned(),
            timestamp: clock.now_label(),
            kind: MessageKind::Schedule,
            schedule: Some(details.clone()),
            is_read: None,
        };
        store.append_message(&target.conversation_id, message);
        store.set_status(target, SuggestionStatus::Accepted);
        tracing::info!(
            conversation_id = %target.conversation_id,
            suggestion_id = %target.suggestion_id,
            date = %details.date,
            time = %details.time,
            "follow-up scheduled"
        );
    }

    store
}

/// Finishes a staged escalation for every target still pending.
pub fn confirm_escalation(
    mut store: InboxStore,
    targets: &[SuggestionRef],
    note: &str,
    clock: &dyn Clock,
) -> InboxStore {
    for target in targets {
        if !is_pending(&store, target) {
            continue;
        }

        let message = system_message(
            &mut store,
            format!("[SYSTEM: Ticket Escalated. Note: {note}]"),
            clock,
        );
        store.append_message(&target.conversation_id, message);
        store.set_status(target, SuggestionStatus::Accepted);
        tracing::info!(
            conversation_id = %target.conversation_id,
            suggestion_id = %target.suggestion_id,
            "ticket escalated"
        );
    }

    store
}

/// Rejects a suggestion. Always immediate; unknown ids leave the store unchanged.
pub fn dismiss(mut store: InboxStore, conversation_id: &str, suggestion_id: &str) -> InboxStore {
    match store.locate_pending(suggestion_id, Some(conversation_id)) {
        Some(target) => {
            store.set_status(&target, SuggestionStatus::Rejected);
            tracing::info!(
                conversation_id = %target.conversation_id,
                suggestion_id = %target.suggestion_id,
                "suggestion dismissed"
            );
        }
        None => tracing::debug!(suggestion_id, "dismiss ignored: suggestion not found"),
    }

    store
}

/// Appends an agent message to `target`, or to the active conversation when
/// no target is given. No conversation or blank text is a no-op.
pub fn send_message(
    mut store: InboxStore,
    target: Option<&str>,
    active: Option<&str>,
    text: &str,
    clock: &dyn Clock,
) -> InboxStore {
    let Some(conversation_id) = target.or(active) else {
        return store;
    };

    let text = text.trim();
    if text.is_empty() {
        return store;
    }

    let id = store.next_message_id();
    let message = Message::text(id, MessageSender::Agent, text, clock.now_label());
    if store.append_message(conversation_id, message) {
        tracing::debug!(conversation_id, "message appended");
    }

    store
}

/// Whether a template should be delivered as a document rather than a text notice.
pub fn is_document_template(template_name: &str) -> bool {
    let lowercase = template_name.to_lowercase();

    DOCUMENT_EXTENSIONS
        .iter()
        .any(|extension| lowercase.ends_with(extension))
        || DOCUMENT_KEYWORDS
            .iter()
            .any(|keyword| template_name.contains(keyword))
}

fn template_message(store: &mut InboxStore, template_name: &str, clock: &dyn Clock) -> Message {
    if is_document_template(template_name) {
        Message {
            kind: MessageKind::Document,
            ..Message::text(
                store.next_message_id(),
                MessageSender::Agent,
                template_name,
                clock.now_label(),
            )
        }
    } else {
        system_message(
            store,
            format!("[SYSTEM: Sent Template - {template_name}]"),
            clock,
        )
    }
}

fn system_message(store: &mut InboxStore, content: String, clock: &dyn Clock) -> Message {
    Message::text(
        store.next_message_id(),
        MessageSender::System,
        content,
        clock.now_label(),
    )
}

fn is_pending(store: &InboxStore, target: &SuggestionRef) -> bool {
    store
        .suggestion(target)
        .is_some_and(|suggestion| suggestion.is_pending())
}
