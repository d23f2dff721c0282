//! Review modals: schedule follow-up, escalate, template selection, and the
//! proactive outreach review.
//!
//! Each modal is `Closed -> Open -> Closed`. A form is built fresh on every
//! open, so nothing typed survives a cancel. A form stages one or more
//! suggestion targets; confirming applies the collected input to all of them.

use chrono::NaiveDate;

use super::{
    inbox::SuggestionRef,
    message::ScheduleDetails,
    suggestion::{ActionPayload, Suggestion},
    text_input_state::TextInputState,
};

const PREP_CHECKLIST: [&str; 3] = [
    "Review previous pricing PDF",
    "Check inventory for Enterprise Plan",
    "Read last 3 emails",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateCandidate {
    pub name: &'static str,
    pub size: &'static str,
}

pub const TEMPLATE_CANDIDATES: [TemplateCandidate; 4] = [
    TemplateCandidate {
        name: "Product_Catalog_v2.pdf",
        size: "2.4 MB",
    },
    TemplateCandidate {
        name: "Company_Profile_2024.pdf",
        size: "1.8 MB",
    },
    TemplateCandidate {
        name: "Pricing_Tier_Enterprise.pdf",
        size: "850 KB",
    },
    TemplateCandidate {
        name: "Onboarding_Checklist.pdf",
        size: "420 KB",
    },
];

/// Attachments offered by the proactive outreach review.
pub const PROACTIVE_TEMPLATES: [&str; 3] = [
    "Re_Engagement_Template.pdf",
    "Product_Catalog_v2.pdf",
    "Case_Study_2024.pdf",
];

const PROACTIVE_DRAFT_BODY: &str = "I wanted to check in - it's been a while since we last spoke. \
     Are you still interested in exploring our enterprise solution?";

/// Prefill values for the schedule form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDefaults {
    pub time: String,
    pub remind: bool,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            time: "04:00 PM".to_owned(),
            remind: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Schedule(ScheduleForm),
    Escalation(EscalationForm),
    TemplateReview(TemplateReviewForm),
    ProactiveReview(ProactiveForm),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// The text field that currently receives cursor movement, if any.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        match self {
            ModalState::Closed => None,
            ModalState::Schedule(form) => form.focused_input_mut(),
            ModalState::Escalation(form) => Some(&mut form.note),
            ModalState::TemplateReview(form) => Some(&mut form.search),
            ModalState::ProactiveReview(form) => match form.focus {
                ProactiveField::Message => Some(&mut form.message),
                ProactiveField::Template => None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    Date,
    Time,
    Notes,
    Checklist(usize),
    Remind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    targets: Vec<SuggestionRef>,
    description: String,
    date: TextInputState,
    time: TextInputState,
    notes: TextInputState,
    checklist: Vec<ChecklistItem>,
    remind: bool,
    focus: ScheduleField,
}

impl ScheduleForm {
    /// Opens the form with the date set to the day after `today`.
    pub fn open(
        targets: Vec<SuggestionRef>,
        suggestion: &Suggestion,
        today: NaiveDate,
        defaults: &ScheduleDefaults,
    ) -> Self {
        let date = today.succ_opt().unwrap_or(today);
        let checklist = PREP_CHECKLIST
            .iter()
            .map(|item| (*item).to_owned())
            .chain(
                suggestion
                    .reasoning
                    .entities
                    .iter()
                    .map(|entity| format!("Confirm {entity}")),
            )
            .map(|label| ChecklistItem {
                label,
                checked: false,
            })
            .collect();

        Self {
            targets,
            description: suggestion.description.clone(),
            date: TextInputState::with_text(date.format("%Y-%m-%d").to_string()),
            time: TextInputState::with_text(defaults.time.clone()),
            notes: TextInputState::with_text(format!("Follow up: {}", suggestion.title)),
            checklist,
            remind: defaults.remind,
            focus: ScheduleField::Date,
        }
    }

    pub fn targets(&self) -> &[SuggestionRef] {
        &self.targets
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &TextInputState {
        &self.date
    }

    pub fn time(&self) -> &TextInputState {
        &self.time
    }

    pub fn notes(&self) -> &TextInputState {
        &self.notes
    }

    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    pub fn remind(&self) -> bool {
        self.remind
    }

    pub fn focus(&self) -> ScheduleField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            ScheduleField::Date => ScheduleField::Time,
            ScheduleField::Time => ScheduleField::Notes,
            ScheduleField::Notes if self.checklist.is_empty() => ScheduleField::Remind,
            ScheduleField::Notes => ScheduleField::Checklist(0),
            ScheduleField::Checklist(index) if index + 1 < self.checklist.len() => {
                ScheduleField::Checklist(index + 1)
            }
            ScheduleField::Checklist(_) => ScheduleField::Remind,
            ScheduleField::Remind => ScheduleField::Date,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            ScheduleField::Date => ScheduleField::Remind,
            ScheduleField::Time => ScheduleField::Date,
            ScheduleField::Notes => ScheduleField::Time,
            ScheduleField::Checklist(0) => ScheduleField::Notes,
            ScheduleField::Checklist(index) => ScheduleField::Checklist(index - 1),
            ScheduleField::Remind if self.checklist.is_empty() => ScheduleField::Notes,
            ScheduleField::Remind => ScheduleField::Checklist(self.checklist.len() - 1),
        };
    }

    /// Types into the focused text field; a space toggles checkbox fields.
    pub fn insert_char(&mut self, ch: char) {
        match self.focused_input_mut() {
            Some(input) => {
                input.insert_char(ch);
            }
            None if ch == ' ' => self.toggle_focused(),
            None => {}
        }
    }

    pub fn delete_char_before(&mut self) {
        if let Some(input) = self.focused_input_mut() {
            input.delete_char_before();
        }
    }

    pub fn toggle_focused(&mut self) {
        match self.focus {
            ScheduleField::Checklist(index) => {
                if let Some(item) = self.checklist.get_mut(index) {
                    item.checked = !item.checked;
                }
            }
            ScheduleField::Remind => self.remind = !self.remind,
            ScheduleField::Date | ScheduleField::Time | ScheduleField::Notes => {}
        }
    }

    pub fn details(&self) -> ScheduleDetails {
        ScheduleDetails {
            date: self.date.text().trim().to_owned(),
            time: self.time.text().trim().to_owned(),
            notes: self.notes.text().to_owned(),
            remind: self.remind,
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        match self.focus {
            ScheduleField::Date => Some(&mut self.date),
            ScheduleField::Time => Some(&mut self.time),
            ScheduleField::Notes => Some(&mut self.notes),
            ScheduleField::Checklist(_) | ScheduleField::Remind => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscalationForm {
    targets: Vec<SuggestionRef>,
    department: Option<String>,
    reason: Option<String>,
    note: TextInputState,
}

impl EscalationForm {
    pub fn open(targets: Vec<SuggestionRef>, suggestion: &Suggestion) -> Self {
        let (department, reason) = match &suggestion.payload {
            ActionPayload::Escalate { department, reason } => {
                (Some(department.clone()), reason.clone())
            }
            _ => (None, None),
        };

        Self {
            targets,
            department,
            reason,
            note: TextInputState::default(),
        }
    }

    pub fn targets(&self) -> &[SuggestionRef] {
        &self.targets
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Why the suggestion asks for an escalation, when the payload says.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn note(&self) -> &TextInputState {
        &self.note
    }

    pub fn note_mut(&mut self) -> &mut TextInputState {
        &mut self.note
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReviewForm {
    targets: Vec<SuggestionRef>,
    payload: ActionPayload,
    search: TextInputState,
    highlighted: usize,
    selected: Option<&'static str>,
}

impl TemplateReviewForm {
    pub fn open(targets: Vec<SuggestionRef>, payload: ActionPayload) -> Self {
        Self {
            targets,
            payload,
            search: TextInputState::default(),
            highlighted: 0,
            selected: None,
        }
    }

    pub fn targets(&self) -> &[SuggestionRef] {
        &self.targets
    }

    pub fn search(&self) -> &TextInputState {
        &self.search
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Candidates whose name contains the search query, case-insensitively.
    pub fn candidates(&self) -> Vec<TemplateCandidate> {
        let query = self.search.text().to_lowercase();
        TEMPLATE_CANDIDATES
            .into_iter()
            .filter(|candidate| candidate.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn insert_char(&mut self, ch: char) {
        self.search.insert_char(ch);
        self.highlighted = 0;
    }

    pub fn delete_char_before(&mut self) {
        self.search.delete_char_before();
        self.highlighted = 0;
    }

    pub fn highlight_next(&mut self) {
        let len = self.candidates().len();
        self.highlighted = (self.highlighted + 1).min(len.saturating_sub(1));
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Selects the highlighted candidate; single-select replaces any earlier choice.
    pub fn select_highlighted(&mut self) {
        if let Some(candidate) = self.candidates().get(self.highlighted) {
            self.selected = Some(candidate.name);
        }
    }

    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }

    /// The staged payload with the chosen file merged in, or None until a selection exists.
    pub fn confirmed_payload(&self) -> Option<ActionPayload> {
        self.selected
            .map(|name| self.payload.with_template_name(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProactiveField {
    Message,
    Template,
}

/// Review of a proactive suggestion: why it was raised, a drafted message
/// the agent can edit, and the attachment to send with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProactiveForm {
    targets: Vec<SuggestionRef>,
    title: String,
    why: String,
    trigger: String,
    confidence: u8,
    message: TextInputState,
    template_index: usize,
    focus: ProactiveField,
}

impl ProactiveForm {
    /// `contact_name` is None when several conversations are staged.
    pub fn open(
        targets: Vec<SuggestionRef>,
        suggestion: &Suggestion,
        contact_name: Option<&str>,
    ) -> Self {
        let greeting = contact_name.unwrap_or("there");
        let template_index = suggestion
            .payload
            .template_name()
            .and_then(|name| PROACTIVE_TEMPLATES.iter().position(|t| *t == name))
            .unwrap_or(0);

        Self {
            targets,
            title: suggestion.title.clone(),
            why: suggestion.description.clone(),
            trigger: suggestion.reasoning.trigger.clone(),
            confidence: suggestion.confidence,
            message: TextInputState::with_text(format!("Hi {greeting}, {PROACTIVE_DRAFT_BODY}")),
            template_index,
            focus: ProactiveField::Message,
        }
    }

    pub fn targets(&self) -> &[SuggestionRef] {
        &self.targets
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn why(&self) -> &str {
        &self.why
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    pub fn message(&self) -> &TextInputState {
        &self.message
    }

    pub fn template(&self) -> &'static str {
        PROACTIVE_TEMPLATES[self.template_index % PROACTIVE_TEMPLATES.len()]
    }

    pub fn focus(&self) -> ProactiveField {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ProactiveField::Message => ProactiveField::Template,
            ProactiveField::Template => ProactiveField::Message,
        };
    }

    pub fn next_template(&mut self) {
        self.template_index = (self.template_index + 1) % PROACTIVE_TEMPLATES.len();
    }

    pub fn previous_template(&mut self) {
        self.template_index =
            (self.template_index + PROACTIVE_TEMPLATES.len() - 1) % PROACTIVE_TEMPLATES.len();
    }

    /// Types into the draft; a space on the attachment row picks the next file.
    pub fn insert_char(&mut self, ch: char) {
        match self.focus {
            ProactiveField::Message => {
                self.message.insert_char(ch);
            }
            ProactiveField::Template if ch == ' ' => self.next_template(),
            ProactiveField::Template => {}
        }
    }

    pub fn delete_char_before(&mut self) {
        if self.focus == ProactiveField::Message {
            self.message.delete_char_before();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    fn seed_suggestion(conversation_id: &str, suggestion_id: &str) -> Suggestion {
        seed::mock_store()
            .suggestion(&SuggestionRef::new(conversation_id, suggestion_id))
            .cloned()
            .expect("seed suggestion exists")
    }

    fn schedule_form() -> ScheduleForm {
        ScheduleForm::open(
            vec![SuggestionRef::new("chat_1", "sugg_1")],
            &seed_suggestion("chat_1", "sugg_1"),
            NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date"),
            &ScheduleDefaults::default(),
        )
    }

    #[test]
    fn schedule_form_prefills_next_day_and_default_time() {
        let form = schedule_form();

        assert_eq!(form.date().text(), "2026-10-19");
        assert_eq!(form.time().text(), "04:00 PM");
        assert_eq!(form.notes().text(), "Follow up: Schedule Call");
        assert!(form.remind());
    }

    #[test]
    fn schedule_form_prefill_rolls_over_month_end() {
        let form = ScheduleForm::open(
            Vec::new(),
            &seed_suggestion("chat_1", "sugg_1"),
            NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid date"),
            &ScheduleDefaults::default(),
        );

        assert_eq!(form.date().text(), "2027-01-01");
    }

    #[test]
    fn schedule_checklist_combines_static_items_and_entities() {
        let form = schedule_form();
        let labels: Vec<&str> = form.checklist().iter().map(|i| i.label.as_str()).collect();

        assert_eq!(
            labels,
            [
                "Review previous pricing PDF",
                "Check inventory for Enterprise Plan",
                "Read last 3 emails",
                "Confirm Time: Tomorrow 16:00",
                "Confirm Action: Call",
            ]
        );
    }

    #[test]
    fn typing_edits_focused_field_and_space_toggles_checkboxes() {
        let mut form = schedule_form();
        form.focus_next();
        for _ in 0.."04:00 PM".len() {
            form.delete_char_before();
        }
        for ch in "05:30 PM".chars() {
            form.insert_char(ch);
        }
        form.focus_next();
        form.focus_next();
        form.insert_char(' ');

        assert_eq!(form.time().text(), "05:30 PM");
        assert_eq!(form.focus(), ScheduleField::Checklist(0));
        assert!(form.checklist()[0].checked);
    }

    #[test]
    fn focus_cycles_through_every_field() {
        let mut form = schedule_form();
        let steps = 3 + form.checklist().len() + 1;

        for _ in 0..steps {
            form.focus_next();
        }
        assert_eq!(form.focus(), ScheduleField::Date);

        form.focus_previous();
        assert_eq!(form.focus(), ScheduleField::Remind);
    }

    #[test]
    fn details_reflect_form_values() {
        let mut form = schedule_form();
        while form.focus() != ScheduleField::Remind {
            form.focus_next();
        }
        form.toggle_focused();

        let details = form.details();

        assert_eq!(details.date, "2026-10-19");
        assert_eq!(details.time, "04:00 PM");
        assert!(!details.remind);
    }

    #[test]
    fn escalation_form_reads_department_from_payload() {
        let form = EscalationForm::open(
            vec![SuggestionRef::new("chat_5", "sugg_6")],
            &seed_suggestion("chat_5", "sugg_6"),
        );

        assert_eq!(form.department(), Some("Technical Support"));
        assert_eq!(form.reason(), None);
        assert!(form.note().is_empty());
    }

    #[test]
    fn escalation_form_keeps_payload_reason() {
        let form = EscalationForm::open(
            vec![SuggestionRef::new("chat_5", "pro_2")],
            &seed_suggestion("chat_5", "pro_2"),
        );

        assert_eq!(form.reason(), Some("Frustration detected"));
    }

    fn proactive_form() -> ProactiveForm {
        ProactiveForm::open(
            vec![SuggestionRef::new("chat_4", "pro_1")],
            &seed_suggestion("chat_4", "pro_1"),
            Some("Amit Kumar"),
        )
    }

    #[test]
    fn proactive_form_drafts_greeting_and_explains_trigger() {
        let form = proactive_form();

        assert!(form.message().text().starts_with("Hi Amit Kumar, I wanted to check in"));
        assert_eq!(form.trigger(), "Last message > 14 days");
        assert_eq!(form.confidence(), 85);
        assert_eq!(form.template(), "Re_Engagement_Template.pdf");
        assert_eq!(form.focus(), ProactiveField::Message);
    }

    #[test]
    fn proactive_form_without_contact_greets_generically() {
        let form = ProactiveForm::open(Vec::new(), &seed_suggestion("chat_3", "pro_4"), None);

        assert!(form.message().text().starts_with("Hi there, "));
        assert_eq!(form.template(), PROACTIVE_TEMPLATES[0]);
    }

    #[test]
    fn proactive_space_on_template_row_cycles_attachment() {
        let mut form = proactive_form();
        form.toggle_focus();
        form.insert_char(' ');
        assert_eq!(form.template(), "Product_Catalog_v2.pdf");

        form.previous_template();
        form.previous_template();
        assert_eq!(form.template(), "Case_Study_2024.pdf");
        assert!(form.message().text().ends_with("enterprise solution?"));
    }

    #[test]
    fn focused_input_follows_modal_focus() {
        let mut modal = ModalState::ProactiveReview(proactive_form());
        assert!(modal.focused_input_mut().is_some());

        if let ModalState::ProactiveReview(form) = &mut modal {
            form.toggle_focus();
        }
        assert!(modal.focused_input_mut().is_none());
        assert!(ModalState::Closed.focused_input_mut().is_none());
    }

    #[test]
    fn template_review_requires_selection_before_confirm() {
        let form = TemplateReviewForm::open(
            vec![SuggestionRef::new("chat_2", "sugg_3")],
            ActionPayload::SendTemplate {
                template_name: Some("Product_Catalog_2024.pdf".to_owned()),
            },
        );

        assert!(!form.can_confirm());
        assert_eq!(form.confirmed_payload(), None);
    }

    #[test]
    fn template_review_search_filters_case_insensitively() {
        let mut form = TemplateReviewForm::open(
            Vec::new(),
            ActionPayload::SendTemplate {
                template_name: None,
            },
        );
        for ch in "PRICING".chars() {
            form.insert_char(ch);
        }

        let names: Vec<&str> = form.candidates().iter().map(|c| c.name).collect();

        assert_eq!(names, ["Pricing_Tier_Enterprise.pdf"]);
    }

    #[test]
    fn template_review_merges_selected_name_into_payload() {
        let mut form = TemplateReviewForm::open(
            Vec::new(),
            ActionPayload::SendTemplate {
                template_name: Some("Product_Catalog_2024.pdf".to_owned()),
            },
        );
        form.highlight_next();
        form.select_highlighted();

        assert!(form.can_confirm());
        assert_eq!(
            form.confirmed_payload(),
            Some(ActionPayload::SendTemplate {
                template_name: Some("Company_Profile_2024.pdf".to_owned()),
            })
        );
    }

    #[test]
    fn modal_state_reports_open() {
        assert!(!ModalState::Closed.is_open());
        assert!(ModalState::Schedule(schedule_form()).is_open());
    }
}
