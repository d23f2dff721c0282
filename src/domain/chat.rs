use url::form_urlencoded;

use super::{message::Message, suggestion::Suggestion};

const AVATAR_PLACEHOLDER_BASE: &str = "https://ui-avatars.com/api/?";

/// Sales pipeline stage of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadStage {
    #[default]
    New,
    Hot,
    Warm,
    Cold,
    ClosedWon,
    ClosedLost,
}

impl LeadStage {
    pub fn as_label(self) -> &'static str {
        match self {
            LeadStage::New => "New Lead",
            LeadStage::Hot => "Hot",
            LeadStage::Warm => "Warm",
            LeadStage::Cold => "Cold",
            LeadStage::ClosedWon => "Closed Won",
            LeadStage::ClosedLost => "Closed Lost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub lead_stage: LeadStage,
    pub tags: Vec<String>,
    pub notes: String,
    pub last_active: String,
    pub source: String,
}

impl Contact {
    /// Returns the avatar URL, or a generated placeholder keyed by name.
    pub fn avatar_url(&self) -> String {
        self.avatar
            .clone()
            .unwrap_or_else(|| placeholder_avatar_url(&self.name))
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

pub fn placeholder_avatar_url(name: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name)
        .append_pair("background", "random")
        .finish();
    format!("{AVATAR_PLACEHOLDER_BASE}{query}")
}

/// One messaging session with a single contact.
///
/// Suggestions are owned by the conversation they were raised for, so a
/// suggestion can never belong to two conversations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub contact: Contact,
    pub messages: Vec<Message>,
    pub unread_count: u32,
    pub is_pinned: bool,
    pub suggestions: Vec<Suggestion>,
}

impl Conversation {
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn has_pending_suggestions(&self) -> bool {
        self.suggestions.iter().any(Suggestion::is_pending)
    }
}
