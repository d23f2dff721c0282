/// Closed set of operations a suggestion can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    ScheduleFollowup,
    SendTemplate,
    UpdateField,
    Escalate,
}

impl ActionType {
    pub fn as_label(self) -> &'static str {
        match self {
            ActionType::ScheduleFollowup => "schedule_followup",
            ActionType::SendTemplate => "send_template",
            ActionType::UpdateField => "update_field",
            ActionType::Escalate => "escalate",
        }
    }

    /// Label of the button that accepts a single suggestion of this type.
    pub fn accept_label(self) -> &'static str {
        match self {
            ActionType::ScheduleFollowup => "Schedule Call",
            ActionType::SendTemplate => "Review & Send",
            ActionType::UpdateField | ActionType::Escalate => "Execute",
        }
    }

    /// Whether accepting opens a modal before anything is mutated.
    pub fn needs_confirmation(self) -> bool {
        matches!(self, ActionType::ScheduleFollowup | ActionType::Escalate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Sort rank, higher is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Priority filter used by the action center; `All` is the identity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub const CYCLE: [PriorityFilter; 4] = [
        PriorityFilter::All,
        PriorityFilter::Only(Priority::High),
        PriorityFilter::Only(Priority::Medium),
        PriorityFilter::Only(Priority::Low),
    ];

    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(level) => level == priority,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            PriorityFilter::All => "ALL",
            PriorityFilter::Only(Priority::High) => "HIGH",
            PriorityFilter::Only(Priority::Medium) => "MEDIUM",
            PriorityFilter::Only(Priority::Low) => "LOW",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(PriorityFilter::All),
            "high" => Some(PriorityFilter::Only(Priority::High)),
            "medium" => Some(PriorityFilter::Only(Priority::Medium)),
            "low" => Some(PriorityFilter::Only(Priority::Low)),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        let index = Self::CYCLE
            .iter()
            .position(|filter| *filter == self)
            .unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// Where a suggestion came from: a triggering message, or raised unprompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionOrigin {
    #[default]
    Active,
    Proactive,
}

impl SuggestionOrigin {
    pub fn as_label(self) -> &'static str {
        match self {
            SuggestionOrigin::Active => "Active",
            SuggestionOrigin::Proactive => "Proactive",
        }
    }
}

/// Why a suggestion was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reasoning {
    /// The text or event that triggered the suggestion.
    pub trigger: String,
    pub intent: String,
    pub entities: Vec<String>,
}

/// Data an action needs to execute, one variant per action type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPayload {
    ScheduleFollowup {
        date: String,
        time: String,
    },
    SendTemplate {
        template_name: Option<String>,
    },
    Escalate {
        department: String,
        reason: Option<String>,
    },
    UpdateField {
        field: String,
        value: String,
    },
}

impl ActionPayload {
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionPayload::ScheduleFollowup { .. } => ActionType::ScheduleFollowup,
            ActionPayload::SendTemplate { .. } => ActionType::SendTemplate,
            ActionPayload::Escalate { .. } => ActionType::Escalate,
            ActionPayload::UpdateField { .. } => ActionType::UpdateField,
        }
    }

    pub fn template_name(&self) -> Option<&str> {
        match self {
            ActionPayload::SendTemplate { template_name } => template_name.as_deref(),
            _ => None,
        }
    }

    /// Returns a copy with the template name replaced; other variants are unchanged.
    pub fn with_template_name(&self, name: impl Into<String>) -> Self {
        match self {
            ActionPayload::SendTemplate { .. } => ActionPayload::SendTemplate {
                template_name: Some(name.into()),
            },
            other => other.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reasoning: Reasoning,
    /// 0 to 100.
    pub confidence: u8,
    pub priority: Priority,
    pub status: SuggestionStatus,
    pub origin: SuggestionOrigin,
    pub payload: ActionPayload,
}

impl Suggestion {
    pub fn action_type(&self) -> ActionType {
        self.payload.action_type()
    }

    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::Pending
    }
}
