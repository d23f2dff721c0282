use super::{
    chat::{Conversation, LeadStage},
    inbox::InboxStore,
};

/// Filter tabs above the conversation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatListFilter {
    #[default]
    All,
    Unread,
    Hot,
    Warm,
}

impl ChatListFilter {
    pub const ALL: [ChatListFilter; 4] = [
        ChatListFilter::All,
        ChatListFilter::Unread,
        ChatListFilter::Hot,
        ChatListFilter::Warm,
    ];

    pub fn as_label(self) -> &'static str {
        match self {
            ChatListFilter::All => "All",
            ChatListFilter::Unread => "Unread",
            ChatListFilter::Hot => "Hot",
            ChatListFilter::Warm => "Warm",
        }
    }

    pub fn matches(self, conversation: &Conversation) -> bool {
        match self {
            ChatListFilter::All => true,
            ChatListFilter::Unread => conversation.unread_count > 0,
            ChatListFilter::Hot => conversation.contact.lead_stage == LeadStage::Hot,
            ChatListFilter::Warm => conversation.contact.lead_stage == LeadStage::Warm,
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Conversations shown by the list: filtered, pinned ones first, store order otherwise.
pub fn visible_conversations(store: &InboxStore, filter: ChatListFilter) -> Vec<&Conversation> {
    let (pinned, regular): (Vec<&Conversation>, Vec<&Conversation>) = store
        .conversations()
        .iter()
        .filter(|conversation| filter.matches(conversation))
        .partition(|conversation| conversation.is_pinned);

    pinned.into_iter().chain(regular).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatListState {
    filter: ChatListFilter,
    selected_index: usize,
}

impl ChatListState {
    pub fn filter(&self) -> ChatListFilter {
        self.filter
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Id of the highlighted conversation, if the filtered list is not empty.
    pub fn selected_conversation_id<'a>(&self, store: &'a InboxStore) -> Option<&'a str> {
        let visible = visible_conversations(store, self.filter);
        visible
            .get(self.selected_index.min(visible.len().saturating_sub(1)))
            .map(|conversation| conversation.id.as_str())
    }

    /// Cycles the filter tab and resets the cursor to the top.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected_index = 0;
    }

    pub fn select_next(&mut self, visible_len: usize) {
        let last_index = visible_len.saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(last_index);
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    fn ids(conversations: &[&Conversation]) -> Vec<String> {
        conversations.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn all_filter_lists_pinned_first() {
        let store = seed::mock_store();

        let visible = visible_conversations(&store, ChatListFilter::All);

        assert_eq!(
            ids(&visible),
            ["chat_1", "chat_2", "chat_3", "chat_4", "chat_5"]
        );
    }

    #[test]
    fn unread_filter_keeps_conversations_with_unread_messages() {
        let store = seed::mock_store();

        let visible = visible_conversations(&store, ChatListFilter::Unread);

        assert_eq!(ids(&visible), ["chat_1", "chat_3", "chat_5"]);
    }

    #[test]
    fn warm_filter_matches_lead_stage() {
        let store = seed::mock_store();

        let visible = visible_conversations(&store, ChatListFilter::Warm);

        assert_eq!(ids(&visible), ["chat_3", "chat_5"]);
    }

    #[test]
    fn selection_moves_within_bounds() {
        let store = seed::mock_store();
        let mut state = ChatListState::default();

        state.select_next(2);
        state.select_next(2);
        state.select_previous();

        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.selected_conversation_id(&store), Some("chat_1"));
    }

    #[test]
    fn cycling_filter_resets_selection() {
        let mut state = ChatListState::default();
        state.select_next(5);

        state.cycle_filter();

        assert_eq!(state.filter(), ChatListFilter::Unread);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn selection_is_none_when_filter_matches_nothing() {
        let store = InboxStore::default();
        let state = ChatListState::default();

        assert_eq!(state.selected_conversation_id(&store), None);
    }
}
