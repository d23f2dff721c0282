//! Rows of the aggregated action center: bulk groups first, then the
//! remaining suggestions conversation by conversation.

use crate::domain::{
    action_center_state::ActionCenterState,
    inbox::{InboxStore, SuggestionRef},
    suggestion::{PriorityFilter, Suggestion, SuggestionOrigin},
};

use super::suggestion_router::{self, BulkGroup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionItem {
    Bulk(BulkGroup),
    Single {
        conversation_id: String,
        contact_name: String,
        suggestion: Suggestion,
    },
}

impl ActionItem {
    pub fn targets(&self) -> Vec<SuggestionRef> {
        match self {
            ActionItem::Bulk(group) => group.targets(),
            ActionItem::Single {
                conversation_id,
                suggestion,
                ..
            } => vec![SuggestionRef::new(conversation_id, &suggestion.id)],
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ActionItem::Bulk(group) => &group.title,
            ActionItem::Single { suggestion, .. } => &suggestion.title,
        }
    }
}

/// Items for the given tab and priority filter, in display order.
pub fn items(
    store: &InboxStore,
    origin: SuggestionOrigin,
    priority_filter: PriorityFilter,
) -> Vec<ActionItem> {
    let entries = suggestion_router::filter_by_priority(
        suggestion_router::filter_by_origin(suggestion_router::list_all(store), origin),
        priority_filter,
    );
    let display = suggestion_router::group_for_bulk_display(&entries);

    let singles = display.by_conversation.into_iter().flat_map(|group| {
        let conversation_id = group.conversation_id;
        let contact_name = group.contact_name;
        group
            .suggestions
            .into_iter()
            .map(move |suggestion| ActionItem::Single {
                conversation_id: conversation_id.clone(),
                contact_name: contact_name.clone(),
                suggestion,
            })
    });

    display
        .bulk
        .into_iter()
        .map(ActionItem::Bulk)
        .chain(singles)
        .collect()
}

pub fn items_for(store: &InboxStore, state: &ActionCenterState) -> Vec<ActionItem> {
    items(store, state.origin(), state.priority_filter())
}

/// Every suggestion behind the filtered rows, flattened.
pub fn visible_targets(store: &InboxStore, state: &ActionCenterState) -> Vec<SuggestionRef> {
    items_for(store, state)
        .iter()
        .flat_map(ActionItem::targets)
        .collect()
}
