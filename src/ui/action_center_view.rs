//! Aggregated action center: every pending suggestion across conversations.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::{
    domain::{
        shell_state::ShellState,
        suggestion::{ActionType, PriorityFilter, SuggestionOrigin},
    },
    usecases::{
        action_center::{self, ActionItem},
        suggestion_router::BulkMember,
    },
};

use super::{styles, view};

const ORIGINS: [SuggestionOrigin; 2] = [SuggestionOrigin::Active, SuggestionOrigin::Proactive];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let [header_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .areas(area);

    let center = state.action_center();
    let items = action_center::items_for(state.store(), center);
    let target_count: usize = items.iter().map(|item| item.targets().len()).sum();

    frame.render_widget(
        Paragraph::new(header_line(center.origin(), center.priority_filter(), target_count)),
        header_area,
    );

    let block = Block::default()
        .title(format!("Converso - {} actions", center.origin().as_label()))
        .borders(Borders::ALL)
        .border_style(styles::active_panel_border_style());

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new("All caught up. No pending actions for this filter.").block(block),
            list_area,
        );
        return;
    }

    let list_items: Vec<ListItem<'static>> = items
        .iter()
        .map(|item| ListItem::new(item_lines(item)))
        .collect();
    let list = List::new(list_items)
        .block(block)
        .highlight_style(styles::highlight_style());

    let mut list_state = ListState::default();
    list_state.select(Some(center.selected_index().min(items.len() - 1)));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn header_line(
    origin: SuggestionOrigin,
    priority_filter: PriorityFilter,
    target_count: usize,
) -> Line<'static> {
    let mut spans = view::chips_line(&ORIGINS, origin, SuggestionOrigin::as_label);
    spans.push(Span::styled("| ", styles::separator_style()));
    spans.extend(view::chips_line(
        &PriorityFilter::CYCLE,
        priority_filter,
        PriorityFilter::as_label,
    ));
    if target_count > 0 {
        spans.push(Span::styled(
            format!("| A: Accept All ({target_count})"),
            styles::bulk_header_style(),
        ));
    }

    Line::from(spans)
}

fn item_lines(item: &ActionItem) -> Vec<Line<'static>> {
    match item {
        ActionItem::Bulk(group) => vec![
            Line::from(vec![
                Span::styled(format!("* {}", group.title), styles::bulk_header_style()),
                Span::styled(
                    format!("  {} contacts affected", group.members.len()),
                    styles::hint_style(),
                ),
            ]),
            Line::from(format!("   {}", group.description)),
            Line::from(vec![
                Span::styled(
                    format!("   {}", members_summary(&group.members)),
                    styles::chat_preview_style(),
                ),
                Span::styled(
                    format!("  <{}>", bulk_accept_label(group.action_type, group.members.len())),
                    styles::hint_style(),
                ),
            ]),
        ],
        ActionItem::Single {
            contact_name,
            suggestion,
            ..
        } => {
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{contact_name}: "), styles::chat_name_style()),
                Span::styled(
                    format!("[{}] ", suggestion.priority.as_label()),
                    styles::priority_style(suggestion.priority),
                ),
                Span::styled(suggestion.title.clone(), styles::suggestion_title_style()),
            ])];
            lines.extend(
                view::suggestion_lines(suggestion)
                    .into_iter()
                    .skip(1)
                    .chain([Line::from(format!("   {}", suggestion.description))]),
            );
            lines
        }
    }
}

/// First names of up to two members, then a count of the rest.
fn members_summary(members: &[BulkMember]) -> String {
    let names: Vec<&str> = members
        .iter()
        .take(2)
        .map(|member| {
            member
                .contact_name
                .split_whitespace()
                .next()
                .unwrap_or(&member.contact_name)
        })
        .collect();

    let mut summary = names.join(", ");
    if members.len() > 2 {
        summary.push_str(&format!(" +{} more", members.len() - 2));
    }
    summary
}

fn bulk_accept_label(action_type: ActionType, count: usize) -> String {
    let verb = match action_type {
        ActionType::SendTemplate => "Review & Send",
        ActionType::ScheduleFollowup => "Schedule",
        ActionType::Escalate => "Escalate",
        ActionType::UpdateField => "Update",
    };
    format!("{verb} for All ({count})")
}
