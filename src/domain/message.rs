/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSender {
    /// The support agent using the inbox.
    Agent,
    /// The customer on the other side of the conversation.
    Contact,
    System,
}

/// Kind of content carried by a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    Document,
    Schedule,
}

impl MessageKind {
    /// Returns a display label for non-text kinds, or None for plain text.
    pub fn display_label(&self) -> Option<&'static str> {
        match self {
            MessageKind::Text => None,
            MessageKind::Image => Some("[Image]"),
            MessageKind::Document => Some("[Document]"),
            MessageKind::Schedule => Some("[Schedule]"),
        }
    }
}

/// Structured payload attached to a schedule-confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDetails {
    pub date: String,
    pub time: String,
    pub notes: String,
    pub remind: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender: MessageSender,
    pub content: String,
    /// Display label such as "10:30 AM" or "Yesterday"; not a clock value.
    pub timestamp: String,
    pub kind: MessageKind,
    pub schedule: Option<ScheduleDetails>,
    pub is_read: Option<bool>,
}

impl Message {
    pub fn text(
        id: impl Into<String>,
        sender: MessageSender,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sender,
            content: content.into(),
            timestamp: timestamp.into(),
            kind: MessageKind::Text,
            schedule: None,
            is_read: None,
        }
    }

    /// Returns the display content: kind label + text, with schedule details inline.
    pub fn display_content(&self) -> String {
        let body = match &self.schedule {
            Some(details) => format!("{} ({} {})", self.content, details.date, details.time),
            None => self.content.clone(),
        };

        match (self.kind.display_label(), body.is_empty()) {
            (Some(label), true) => label.to_owned(),
            (Some(label), false) => format!("{label} {body}"),
            (None, _) => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(content: &str, kind: MessageKind) -> Message {
        Message {
            kind,
            ..Message::text("m1", MessageSender::Contact, content, "10:30 AM")
        }
    }

    #[test]
    fn display_label_is_none_for_text() {
        assert_eq!(MessageKind::Text.display_label(), None);
    }

    #[test]
    fn display_content_returns_text_only_for_text_kind() {
        let message = msg("Is this available?", MessageKind::Text);

        assert_eq!(message.display_content(), "Is this available?");
    }

    #[test]
    fn display_content_prefixes_document_label() {
        let message = msg("Enterprise_Pricing_v2.pdf", MessageKind::Document);

        assert_eq!(
            message.display_content(),
            "[Document] Enterprise_Pricing_v2.pdf"
        );
    }

    #[test]
    fn display_content_returns_label_only_when_content_empty() {
        let message = msg("", MessageKind::Image);

        assert_eq!(message.display_content(), "[Image]");
    }

    #[test]
    fn display_content_includes_schedule_date_and_time() {
        let message = Message {
            schedule: Some(ScheduleDetails {
                date: "2026-10-19".to_owned(),
                time: "04:00 PM".to_owned(),
                notes: String::new(),
                remind: true,
            }),
            ..msg("Scheduled Call", MessageKind::Schedule)
        };

        assert_eq!(
            message.display_content(),
            "[Schedule] Scheduled Call (2026-10-19 04:00 PM)"
        );
    }
}
