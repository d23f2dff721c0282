use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        chat::Conversation,
        chat_list_state::{visible_conversations, ChatListFilter},
        navigation::View,
        shell_state::{InputMode, ShellState},
        suggestion::{ActionType, Priority, Suggestion},
    },
    usecases::suggestion_router,
};

use super::{
    action_center_view,
    message_input::render_message_input,
    message_rendering::{build_message_list_elements, element_to_list_item},
    modal_view, styles,
};

const ELLIPSIS: &str = "...";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    match state.active_conversation() {
        Some(conversation) => render_detail(frame, content_area, state, conversation),
        None => {
            let [tabs_area, body_area] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .areas(content_area);

            let view = state.navigation().view();
            frame.render_widget(Paragraph::new(tab_bar_line(view)), tabs_area);

            match view {
                View::Messages => render_chat_list(frame, body_area, state),
                View::Actions => action_center_view::render(frame, body_area, state),
                View::Contacts | View::Broadcast | View::Settings => {
                    render_placeholder(frame, body_area, view)
                }
            }
        }
    }

    frame.render_widget(Paragraph::new(status_line(state)), status_area);
    modal_view::render(frame, state);
}

fn tab_bar_line(active: View) -> Line<'static> {
    let spans = View::ALL
        .iter()
        .enumerate()
        .flat_map(|(index, view)| {
            let style = if *view == active {
                styles::active_tab_style()
            } else {
                styles::inactive_tab_style()
            };
            [
                Span::styled(format!(" {} {} ", index + 1, view.as_label()), style),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();

    Line::from(spans)
}

pub(super) fn chips_line<T: Copy + PartialEq>(
    options: &[T],
    active: T,
    label: impl Fn(T) -> &'static str,
) -> Vec<Span<'static>> {
    options
        .iter()
        .flat_map(|option| {
            let style = if *option == active {
                styles::active_tab_style()
            } else {
                styles::inactive_tab_style()
            };
            [
                Span::styled(format!(" {} ", label(*option)), style),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn render_chat_list(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let [filters_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .areas(area);

    let filter = state.chat_list().filter();
    frame.render_widget(
        Paragraph::new(Line::from(chips_line(
            &ChatListFilter::ALL,
            filter,
            ChatListFilter::as_label,
        ))),
        filters_area,
    );

    let conversations = visible_conversations(state.store(), filter);
    let title = format!("{} - Chats ({})", state.agent_name(), conversations.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles::active_panel_border_style());

    if conversations.is_empty() {
        let empty = Paragraph::new("No conversations match this filter.").block(block);
        frame.render_widget(empty, list_area);
        return;
    }

    let inner_width = list_area.width.saturating_sub(2) as usize;
    let items = build_chat_list_items(state, &conversations, inner_width);
    let list = List::new(items)
        .block(block)
        .highlight_style(styles::highlight_style());

    let selected = state
        .chat_list()
        .selected_index()
        .min(conversations.len().saturating_sub(1));
    let mut list_state = ListState::default();
    list_state.select(Some(compute_visual_index(&conversations, selected)));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

/// Builds the list of visual items including section headers.
fn build_chat_list_items(
    state: &ShellState,
    conversations: &[&Conversation],
    width: usize,
) -> Vec<ListItem<'static>> {
    let (pinned, regular): (Vec<&Conversation>, Vec<&Conversation>) =
        conversations.iter().copied().partition(|c| c.is_pinned);

    let mut items = Vec::new();
    let has_pinned = !pinned.is_empty();
    let row = |conversation: &Conversation| {
        let badges = suggestion_router::chat_action_badges(state.store(), &conversation.id);
        ListItem::new(chat_list_item_line(conversation, &badges, width))
    };

    if has_pinned {
        items.push(section_header_item("Pinned"));
        items.extend(pinned.into_iter().map(row));
    }

    if !regular.is_empty() || !has_pinned {
        items.push(section_header_item("All Chats"));
        items.extend(regular.into_iter().map(row));
    }

    items
}

/// Computes the visual index in the list (accounting for section headers).
fn compute_visual_index(conversations: &[&Conversation], index: usize) -> usize {
    let pinned_count = conversations.iter().filter(|c| c.is_pinned).count();

    if index < pinned_count {
        index + 1
    } else if pinned_count > 0 {
        index + 2
    } else {
        index + 1
    }
}

fn section_header_item(title: &str) -> ListItem<'static> {
    ListItem::new(Line::from(vec![Span::styled(
        format!("-- {title} --"),
        styles::section_header_style(),
    )]))
}

fn chat_list_item_line(
    conversation: &Conversation,
    badges: &[(ActionType, Priority)],
    width: usize,
) -> Line<'static> {
    let last = conversation.last_message();
    let timestamp = last.map(|m| m.timestamp.clone()).unwrap_or_default();
    let preview = last
        .map(|m| normalize_preview(&m.display_content()))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "No messages yet".to_owned());

    let unread_badge = if conversation.unread_count > 0 {
        format!(" [{}]", conversation.unread_count)
    } else {
        String::new()
    };
    let badge_spans: Vec<Span<'static>> = badges
        .iter()
        .map(|(action_type, priority)| {
            Span::styled(
                format!(" {}", badge_label(*action_type)),
                styles::priority_style(*priority),
            )
        })
        .collect();
    let badges_width: usize = badge_spans.iter().map(|s| s.content.width()).sum();

    let name = conversation.contact.name.clone();
    let stage = format!(" ({})", conversation.contact.lead_stage.as_label());
    let fixed_width = format!("{timestamp:>8} | ").width() + name.width() + stage.width() + 1;
    let suffix_width = badges_width + unread_badge.width();
    let available = width.saturating_sub(fixed_width + suffix_width);
    let display_preview = truncate_to_width(&preview, available);
    let padding = available.saturating_sub(display_preview.width());

    let mut spans = vec![
        Span::styled(format!("{timestamp:>8}"), styles::timestamp_style()),
        Span::styled(" | ", styles::separator_style()),
        Span::styled(name, styles::chat_name_style()),
        Span::styled(stage, styles::lead_stage_style()),
        Span::raw(" "),
        Span::styled(display_preview, styles::chat_preview_style()),
    ];
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }
    spans.extend(badge_spans);
    if !unread_badge.is_empty() {
        spans.push(Span::styled(unread_badge, styles::unread_count_style()));
    }

    Line::from(spans)
}

fn badge_label(action_type: ActionType) -> &'static str {
    match action_type {
        ActionType::ScheduleFollowup => "SCH",
        ActionType::SendTemplate => "DOC",
        ActionType::Escalate => "ESC",
        ActionType::UpdateField => "UPD",
    }
}

fn normalize_preview(preview: &str) -> String {
    preview.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts `text` to at most `max_width` terminal cells, ending with an ellipsis when shortened.
pub(super) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }

    if max_width >= ELLIPSIS.len() {
        truncated.push_str(ELLIPSIS);
    }
    truncated
}

fn render_detail(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ShellState,
    conversation: &Conversation,
) {
    let suggestions = suggestion_router::panel_suggestions(state.store(), &conversation.id);
    let open_chat = state.open_chat();
    let panel_height = if suggestions.is_empty() {
        0
    } else if open_chat.is_panel_minimized() {
        1
    } else {
        (suggestions.len() as u16 * 2 + 2).min(area.height / 2)
    };

    let [header_area, messages_area, panel_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(panel_height),
            Constraint::Length(3),
        ])
        .areas(area);

    frame.render_widget(Paragraph::new(detail_header_lines(conversation)), header_area);
    render_messages(frame, messages_area, conversation);

    if open_chat.is_panel_minimized() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("AI Suggestions ({}) - m: expand", suggestions.len()),
                styles::bulk_header_style(),
            ))),
            panel_area,
        );
    } else if !suggestions.is_empty() {
        render_suggestion_panel(frame, panel_area, &suggestions, open_chat.panel_index());
    }

    render_message_input(
        frame,
        input_area,
        open_chat.compose(),
        state.input_mode() == InputMode::Compose,
    );
}

fn detail_header_lines(conversation: &Conversation) -> Vec<Line<'static>> {
    let contact = &conversation.contact;
    let mut details = vec![contact.phone.clone()];
    if let Some(email) = &contact.email {
        details.push(email.clone());
    }
    if !contact.tags.is_empty() {
        details.push(contact.tags.join(", "));
    }
    details.push(format!("active {}", contact.last_active));

    vec![
        Line::from(vec![
            Span::styled(contact.name.clone(), styles::chat_name_style()),
            Span::styled(
                format!(" ({})", contact.lead_stage.as_label()),
                styles::lead_stage_style(),
            ),
        ]),
        Line::from(Span::styled(details.join(" | "), styles::hint_style())),
    ]
}

fn render_messages(frame: &mut Frame<'_>, area: Rect, conversation: &Conversation) {
    let block = Block::default()
        .title("Messages")
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());

    if conversation.messages.is_empty() {
        frame.render_widget(Paragraph::new("No messages in this chat").block(block), area);
        return;
    }

    let elements = build_message_list_elements(&conversation.messages, &conversation.contact.name);
    let items: Vec<ListItem<'static>> = elements.iter().map(element_to_list_item).collect();
    let last = items.len().saturating_sub(1);

    // Selecting the last row keeps the newest message in view.
    let mut list_state = ListState::default();
    list_state.select(Some(last));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_suggestion_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    suggestions: &[Suggestion],
    selected: usize,
) {
    let items: Vec<ListItem<'static>> = suggestions
        .iter()
        .map(|suggestion| ListItem::new(suggestion_lines(suggestion)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(
                    "AI Suggestions ({}) - a: accept  d: dismiss  r: review template  m: minimize",
                    suggestions.len()
                ))
                .borders(Borders::ALL)
                .border_style(styles::active_panel_border_style()),
        )
        .highlight_style(styles::highlight_style());

    let mut list_state = ListState::default();
    list_state.select(Some(selected.min(suggestions.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Two rows per suggestion: headline and reasoning.
pub(super) fn suggestion_lines(suggestion: &Suggestion) -> Vec<Line<'static>> {
    let reasoning = &suggestion.reasoning;
    let mut why = format!("{} -> {}", reasoning.trigger, reasoning.intent);
    if !reasoning.entities.is_empty() {
        why.push_str(&format!(" [{}]", reasoning.entities.join(", ")));
    }

    vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", suggestion.priority.as_label()),
                styles::priority_style(suggestion.priority),
            ),
            Span::styled(suggestion.title.clone(), styles::suggestion_title_style()),
            Span::styled(
                format!(" {}% ", suggestion.confidence),
                styles::hint_style(),
            ),
            Span::raw(suggestion.description.clone()),
            Span::styled(
                format!("  <{}>", suggestion.action_type().accept_label()),
                styles::hint_style(),
            ),
        ]),
        Line::from(Span::styled(format!("   {why}"), styles::reasoning_style())),
    ]
}

fn render_placeholder(frame: &mut Frame<'_>, area: Rect, view: View) {
    let text = format!("{} is under development.", view.as_label());
    let panel = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(view.as_label())
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(panel, area);
}

fn status_line(state: &ShellState) -> Line<'static> {
    let hint = match state.input_mode() {
        InputMode::Modal => "Enter: confirm | Left/Right: cursor | Esc: cancel",
        InputMode::Compose => "Enter: send | Left/Right: cursor | Esc: stop typing",
        InputMode::Normal if state.active_conversation().is_some() => {
            "j/k: select | a: accept | d: dismiss | i: compose | Esc: back | q: quit"
        }
        InputMode::Normal => match state.navigation().view() {
            View::Messages => "j/k: navigate | Enter: open | f: filter | Tab/1-5: views | q: quit",
            View::Actions => concat!(
                "j/k: navigate | a: accept | A: accept all | d: dismiss | ",
                "p: priority | t: tab | q: quit"
            ),
            View::Contacts | View::Broadcast | View::Settings => "Tab/1-5: views | q: quit",
        },
    };

    let mut spans = Vec::new();
    if let Some(note) = state.status_note() {
        spans.push(Span::styled(format!("{note} | "), styles::status_note_style()));
    }
    spans.push(Span::styled(hint, styles::hint_style()));
    Line::from(spans)
}
