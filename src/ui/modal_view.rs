//! Overlays for the review modals drawn above the current view.

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::domain::{
    modal_state::{
        EscalationForm, ModalState, ProactiveField, ProactiveForm, ScheduleField, ScheduleForm,
        TemplateReviewForm, PROACTIVE_TEMPLATES,
    },
    shell_state::ShellState,
    text_input_state::TextInputState,
};

use super::styles;

const MODAL_WIDTH_PERCENT: u16 = 70;

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let (title, lines) = match state.modal() {
        ModalState::Closed => return,
        ModalState::Schedule(form) => (
            format!("Schedule Follow-up ({})", form.targets().len()),
            schedule_lines(form),
        ),
        ModalState::Escalation(form) => (
            format!("Escalate Ticket ({})", form.targets().len()),
            escalation_lines(form),
        ),
        ModalState::TemplateReview(form) => (
            format!("Review Template ({})", form.targets().len()),
            template_lines(form),
        ),
        ModalState::ProactiveReview(form) => (
            format!("Review Proactive Action: {}", form.title()),
            proactive_lines(form),
        ),
    };

    let inner_width = (frame.area().width.saturating_mul(MODAL_WIDTH_PERCENT) / 100)
        .saturating_sub(2)
        .max(1);
    let height = wrapped_height(&lines, inner_width).saturating_add(2);
    let area = centered_rect(frame.area(), MODAL_WIDTH_PERCENT, height);
    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styles::modal_border_style()),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}

/// Rows needed once every line is wrapped to `width` cells.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn field_line(label: &str, input: &TextInputState, focused: bool) -> Line<'static> {
    let (marker, style) = if focused {
        ("> ", styles::focused_field_style())
    } else {
        ("  ", Style::default())
    };
    let mut spans = vec![Span::styled(format!("{marker}{label}: "), style)];
    if focused {
        spans.extend(cursor_spans(input));
    } else {
        spans.push(Span::styled(
            input.text().to_owned(),
            styles::input_text_style(),
        ));
    }

    Line::from(spans)
}

/// Splits the text around the caret; past the end the caret is drawn as `_`.
fn cursor_spans(input: &TextInputState) -> Vec<Span<'static>> {
    let mut chars = input.text().chars();
    let before: String = chars.by_ref().take(input.cursor_position()).collect();
    let (under, after) = match chars.next() {
        Some(ch) => (ch.to_string(), chars.collect()),
        None => ("_".to_owned(), String::new()),
    };

    vec![
        Span::styled(before, styles::input_text_style()),
        Span::styled(under, styles::input_cursor_style()),
        Span::styled(after, styles::input_text_style()),
    ]
}

fn checkbox_line(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let check = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        styles::focused_field_style()
    } else {
        Style::default()
    };

    Line::from(Span::styled(format!("{marker}{check} {label}"), style))
}

fn footer_line(confirm_label: &str, can_confirm: bool, extra: &str) -> Line<'static> {
    let confirm_style = if can_confirm {
        styles::bulk_header_style()
    } else {
        styles::disabled_style()
    };

    Line::from(vec![
        Span::styled(format!("Enter: {confirm_label}"), confirm_style),
        Span::styled(format!(" | Esc: cancel{extra}"), styles::hint_style()),
    ])
}

fn schedule_lines(form: &ScheduleForm) -> Vec<Line<'static>> {
    let focus = form.focus();
    let mut lines = vec![
        Line::from(Span::styled(
            form.description().to_owned(),
            styles::hint_style(),
        )),
        Line::default(),
        field_line("Date", form.date(), focus == ScheduleField::Date),
        field_line("Time", form.time(), focus == ScheduleField::Time),
        field_line("Notes", form.notes(), focus == ScheduleField::Notes),
        Line::default(),
        Line::from(Span::styled(
            "Preparation checklist",
            styles::section_header_style(),
        )),
    ];

    lines.extend(form.checklist().iter().enumerate().map(|(index, item)| {
        checkbox_line(
            &item.label,
            item.checked,
            focus == ScheduleField::Checklist(index),
        )
    }));
    lines.push(Line::default());
    lines.push(checkbox_line(
        "Remind me 15 minutes before",
        form.remind(),
        focus == ScheduleField::Remind,
    ));
    lines.push(Line::default());
    lines.push(footer_line(
        "Confirm Schedule",
        true,
        " | Tab/Up/Down: field | Space: toggle",
    ));

    lines
}

fn escalation_lines(form: &EscalationForm) -> Vec<Line<'static>> {
    let department = form.department().unwrap_or("Support");

    let mut lines = vec![Line::from(Span::styled(
        format!("Route to {department}"),
        styles::hint_style(),
    ))];
    if let Some(reason) = form.reason() {
        lines.push(Line::from(Span::styled(
            format!("Reason: {reason}"),
            styles::reasoning_style(),
        )));
    }
    lines.extend([
        Line::default(),
        field_line("Note", form.note(), true),
        Line::default(),
        footer_line("Escalate", true, ""),
    ]);
    lines
}

fn template_lines(form: &TemplateReviewForm) -> Vec<Line<'static>> {
    let mut lines = vec![field_line("Search", form.search(), true), Line::default()];

    let candidates = form.candidates();
    if candidates.is_empty() {
        lines.push(Line::from(Span::styled(
            "No templates match your search.",
            styles::hint_style(),
        )));
    }

    lines.extend(candidates.iter().enumerate().map(|(index, candidate)| {
        let radio = if form.selected() == Some(candidate.name) {
            "(*)"
        } else {
            "( )"
        };
        let style = if index == form.highlighted() {
            styles::highlight_style()
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{radio} {}", candidate.name), style),
            Span::styled(format!("  {}", candidate.size), styles::hint_style()),
        ])
    }));

    lines.push(Line::default());
    lines.push(footer_line(
        "Send Template",
        form.can_confirm(),
        " | Up/Down: move | Tab: select",
    ));
    lines
}

fn proactive_lines(form: &ProactiveForm) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Why This Matters",
            styles::section_header_style(),
        )),
        Line::from(Span::styled(form.why().to_owned(), styles::reasoning_style())),
        Line::from(vec![
            Span::styled(format!("Trigger: {}", form.trigger()), styles::hint_style()),
            Span::styled(
                format!("  {}% Confidence", form.confidence()),
                styles::bulk_header_style(),
            ),
        ]),
        Line::default(),
        field_line(
            "Message",
            form.message(),
            form.focus() == ProactiveField::Message,
        ),
        Line::from(Span::styled(
            format!("{} chars", form.message().text().chars().count()),
            styles::hint_style(),
        )),
        Line::default(),
        Line::from(Span::styled("Attachment", styles::section_header_style())),
    ];

    let template_focused = form.focus() == ProactiveField::Template;
    lines.extend(PROACTIVE_TEMPLATES.iter().map(|name| {
        let radio = if *name == form.template() { "(*)" } else { "( )" };
        let style = if template_focused && *name == form.template() {
            styles::highlight_style()
        } else {
            Style::default()
        };
        Line::from(Span::styled(format!("{radio} {name}"), style))
    }));

    lines.push(Line::default());
    lines.push(footer_line(
        "Send Now",
        true,
        " | Tab: message/attachment | Space: next file",
    ));
    lines
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        inbox::SuggestionRef,
        modal_state::ScheduleDefaults,
        seed,
        suggestion::ActionPayload,
    };

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn schedule_lines_show_prefilled_fields_and_checklist() {
        let store = seed::mock_store();
        let target = SuggestionRef::new("chat_1", "sugg_1");
        let suggestion = store.suggestion(&target).expect("seed suggestion");
        let form = ScheduleForm::open(
            vec![target],
            suggestion,
            NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date"),
            &ScheduleDefaults::default(),
        );

        let rendered = text(&schedule_lines(&form));

        assert!(rendered.contains("> Date: 2026-10-19_"));
        assert!(rendered.contains("Time: 04:00 PM"));
        assert!(rendered.contains("[ ] Read last 3 emails"));
        assert!(rendered.contains("[x] Remind me"));
    }

    #[test]
    fn template_footer_is_disabled_until_selection() {
        let mut form = TemplateReviewForm::open(
            Vec::new(),
            ActionPayload::SendTemplate {
                template_name: None,
            },
        );

        let before = template_lines(&form);
        let footer = before.last().expect("footer line");
        assert_eq!(footer.spans[0].style, styles::disabled_style());

        form.select_highlighted();
        let after = template_lines(&form);
        assert!(text(&after).contains("(*) Product_Catalog_v2.pdf"));
        assert_eq!(
            after.last().expect("footer line").spans[0].style,
            styles::bulk_header_style()
        );
    }

    #[test]
    fn template_lines_report_empty_search() {
        let mut form = TemplateReviewForm::open(
            Vec::new(),
            ActionPayload::SendTemplate {
                template_name: None,
            },
        );
        for ch in "zzz".chars() {
            form.insert_char(ch);
        }

        assert!(text(&template_lines(&form)).contains("No templates match"));
    }

    #[test]
    fn focused_field_draws_caret_inside_text() {
        let mut input = TextInputState::with_text("abc");
        input.move_cursor_left();
        input.move_cursor_left();

        let line = field_line("Note", &input, true);

        assert_eq!(text(std::slice::from_ref(&line)), "> Note: abc");
        assert_eq!(line.spans[2].content, "b");
        assert_eq!(line.spans[2].style, styles::input_cursor_style());
    }

    #[test]
    fn escalation_lines_show_reason_when_present() {
        let store = seed::mock_store();
        let target = SuggestionRef::new("chat_5", "pro_2");
        let suggestion = store.suggestion(&target).expect("seed suggestion");
        let form = EscalationForm::open(vec![target], suggestion);

        let rendered = text(&escalation_lines(&form));

        assert!(rendered.contains("Route to Technical Support"));
        assert!(rendered.contains("Reason: Frustration detected"));
    }

    #[test]
    fn proactive_lines_explain_trigger_and_offer_attachments() {
        let store = seed::mock_store();
        let target = SuggestionRef::new("chat_4", "pro_1");
        let suggestion = store.suggestion(&target).expect("seed suggestion");
        let form = ProactiveForm::open(vec![target], suggestion, Some("Amit Kumar"));

        let rendered = text(&proactive_lines(&form));

        assert!(rendered.contains("Why This Matters"));
        assert!(rendered.contains("Trigger: Last message > 14 days"));
        assert!(rendered.contains("85% Confidence"));
        assert!(rendered.contains("> Message: Hi Amit Kumar, "));
        assert!(rendered.contains("(*) Re_Engagement_Template.pdf"));
        assert!(rendered.contains("( ) Case_Study_2024.pdf"));
        assert!(rendered.contains("Enter: Send Now"));
    }

    #[test]
    fn wrapped_height_counts_continuation_rows() {
        let lines = vec![
            Line::from("x".repeat(25)),
            Line::default(),
            Line::from("short"),
        ];

        assert_eq!(wrapped_height(&lines, 10), 5);
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 20);

        let rect = centered_rect(area, 70, 30);

        assert_eq!(rect.width, 70);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 15);
    }
}
