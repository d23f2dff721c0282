use super::{
    chat::Conversation,
    message::Message,
    suggestion::{Suggestion, SuggestionStatus},
};

/// Identifies one suggestion inside one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuggestionRef {
    pub conversation_id: String,
    pub suggestion_id: String,
}

impl SuggestionRef {
    pub fn new(conversation_id: impl Into<String>, suggestion_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            suggestion_id: suggestion_id.into(),
        }
    }
}

/// In-memory mock store. Never garbage collected: suggestions that leave
/// `Pending` stay here and are filtered out by every derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InboxStore {
    conversations: Vec<Conversation>,
    message_seq: u64,
}

impl InboxStore {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations,
            message_seq: 0,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, conversation_id: &str) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|conversation| conversation.id == conversation_id)
    }

    pub fn suggestion(&self, target: &SuggestionRef) -> Option<&Suggestion> {
        self.conversation(&target.conversation_id)?
            .suggestions
            .iter()
            .find(|suggestion| suggestion.id == target.suggestion_id)
    }

    /// Finds a pending suggestion by id, looking in `preferred` first and then
    /// across all conversations in store order.
    pub fn locate_pending(
        &self,
        suggestion_id: &str,
        preferred: Option<&str>,
    ) -> Option<SuggestionRef> {
        let in_conversation = |conversation: &Conversation| {
            conversation
                .suggestions
                .iter()
                .any(|suggestion| suggestion.id == suggestion_id && suggestion.is_pending())
        };

        let preferred_hit = preferred
            .and_then(|conversation_id| self.conversation(conversation_id))
            .filter(|conversation| in_conversation(*conversation));

        preferred_hit
            .or_else(|| self.conversations.iter().find(|c| in_conversation(*c)))
            .map(|conversation| SuggestionRef::new(&conversation.id, suggestion_id))
    }

    /// Sets the status of a pending suggestion. Returns false when nothing matched.
    pub fn set_status(&mut self, target: &SuggestionRef, status: SuggestionStatus) -> bool {
        let Some(suggestion) = self
            .conversation_mut(&target.conversation_id)
            .and_then(|conversation| {
                conversation
                    .suggestions
                    .iter_mut()
                    .find(|suggestion| suggestion.id == target.suggestion_id)
            })
        else {
            return false;
        };

        if !suggestion.is_pending() {
            return false;
        }

        suggestion.status = status;
        true
    }

    /// Appends a message to a conversation. Returns false when the conversation is unknown.
    pub fn append_message(&mut self, conversation_id: &str, message: Message) -> bool {
        match self.conversation_mut(conversation_id) {
            Some(conversation) => {
                conversation.messages.push(message);
                true
            }
            None => false,
        }
    }

    /// Allocates an id for a message created at runtime.
    pub fn next_message_id(&mut self) -> String {
        self.message_seq += 1;
        format!("local_{}", self.message_seq)
    }

    fn conversation_mut(&mut self, conversation_id: &str) -> Option<&mut Conversation> {
        self.conversations
            .iter_mut()
            .find(|conversation| conversation.id == conversation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    #[test]
    fn locate_pending_prefers_requested_conversation() {
        let store = seed::mock_store();

        let found = store.locate_pending("sugg_2", Some("chat_1"));

        assert_eq!(found, Some(SuggestionRef::new("chat_1", "sugg_2")));
    }

    #[test]
    fn locate_pending_falls_back_to_all_conversations() {
        let store = seed::mock_store();

        let found = store.locate_pending("sugg_6", Some("chat_1"));

        assert_eq!(found, Some(SuggestionRef::new("chat_5", "sugg_6")));
    }

    #[test]
    fn locate_pending_ignores_settled_suggestions() {
        let mut store = seed::mock_store();
        store.set_status(
            &SuggestionRef::new("chat_1", "sugg_1"),
            SuggestionStatus::Rejected,
        );

        assert_eq!(store.locate_pending("sugg_1", Some("chat_1")), None);
    }

    #[test]
    fn set_status_is_a_noop_for_unknown_ids() {
        let mut store = seed::mock_store();
        let before = store.clone();

        let changed = store.set_status(
            &SuggestionRef::new("chat_1", "missing"),
            SuggestionStatus::Accepted,
        );

        assert!(!changed);
        assert_eq!(store, before);
    }

    #[test]
    fn append_message_rejects_unknown_conversation() {
        let mut store = seed::mock_store();
        let message = Message::text(
            "x",
            crate::domain::message::MessageSender::Agent,
            "hi",
            "now",
        );

        assert!(!store.append_message("chat_404", message));
    }

    #[test]
    fn next_message_id_is_unique() {
        let mut store = InboxStore::default();

        let first = store.next_message_id();
        let second = store.next_message_id();

        assert_ne!(first, second);
    }
}
