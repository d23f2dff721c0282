//! Message list rendering logic.
//!
//! Handles visual formatting of messages including:
//! - Multi-line message display (time + sender on first line, text below)
//! - Sender grouping (consecutive messages from same sender show name only once)
//! - Kind indicators and read markers

use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::message::{Message, MessageSender};

use super::styles;

const AGENT_LABEL: &str = "You";
const SYSTEM_LABEL: &str = "System";

/// A visual row group in the messages list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageListElement {
    pub time: String,
    /// Shown only on the first message of a run from the same sender.
    pub sender: Option<(String, MessageSender)>,
    pub content: String,
    pub read_marker: Option<&'static str>,
}

/// Builds visual elements from messages, grouping consecutive runs by sender.
pub fn build_message_list_elements(
    messages: &[Message],
    contact_name: &str,
) -> Vec<MessageListElement> {
    let mut elements = Vec::with_capacity(messages.len());
    let mut prev_sender: Option<MessageSender> = None;

    for message in messages {
        let sender = (prev_sender != Some(message.sender))
            .then(|| (sender_label(message.sender, contact_name), message.sender));

        elements.push(MessageListElement {
            time: message.timestamp.clone(),
            sender,
            content: message.display_content(),
            read_marker: read_marker(message),
        });

        prev_sender = Some(message.sender);
    }

    elements
}

pub fn element_to_list_item(element: &MessageListElement) -> ListItem<'static> {
    let mut lines = Vec::new();
    let indent = "   ";

    if let Some((name, sender)) = &element.sender {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", element.time), styles::message_time_style()),
            Span::styled(format!("{name}:"), styles::message_sender_style(*sender)),
        ]));
    }

    let mut content_lines = element.content.lines().peekable();
    if content_lines.peek().is_none() {
        lines.push(Line::from(vec![
            Span::raw(indent.to_owned()),
            Span::styled("[Empty message]".to_owned(), styles::message_media_style()),
        ]));
    }

    for text_line in content_lines {
        let mut spans = vec![Span::raw(indent.to_owned())];
        spans.extend(build_content_line_spans(text_line));
        lines.push(Line::from(spans));
    }

    if let (Some(marker), Some(last)) = (element.read_marker, lines.last_mut()) {
        last.spans
            .push(Span::styled(format!(" {marker}"), styles::message_time_style()));
    }

    ListItem::new(lines)
}

fn sender_label(sender: MessageSender, contact_name: &str) -> String {
    match sender {
        MessageSender::Agent => AGENT_LABEL.to_owned(),
        MessageSender::Contact => contact_name.to_owned(),
        MessageSender::System => SYSTEM_LABEL.to_owned(),
    }
}

fn read_marker(message: &Message) -> Option<&'static str> {
    match (message.sender, message.is_read) {
        (MessageSender::Agent, Some(true)) => Some("\u{2713}\u{2713}"),
        (MessageSender::Agent, Some(false)) => Some("\u{2713}"),
        _ => None,
    }
}

/// Builds styled spans for a content line, highlighting kind indicators.
fn build_content_line_spans(text: &str) -> Vec<Span<'static>> {
    if text.starts_with('[') {
        if let Some(end_bracket) = text.find(']') {
            let media_part = &text[..=end_bracket];
            let rest = text[end_bracket + 1..].trim_start();

            if rest.is_empty() {
                return vec![Span::styled(
                    media_part.to_owned(),
                    styles::message_media_style(),
                )];
            }

            return vec![
                Span::styled(media_part.to_owned(), styles::message_media_style()),
                Span::raw(" ".to_owned()),
                Span::styled(rest.to_owned(), styles::message_text_style()),
            ];
        }
    }

    vec![Span::styled(text.to_owned(), styles::message_text_style())]
}
