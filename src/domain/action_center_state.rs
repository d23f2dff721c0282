use super::suggestion::{PriorityFilter, SuggestionOrigin};

/// Tab, filter and cursor of the aggregated action center.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionCenterState {
    origin: SuggestionOrigin,
    priority_filter: PriorityFilter,
    selected_index: usize,
}

impl ActionCenterState {
    pub fn new(priority_filter: PriorityFilter) -> Self {
        Self {
            priority_filter,
            ..Self::default()
        }
    }

    pub fn origin(&self) -> SuggestionOrigin {
        self.origin
    }

    pub fn priority_filter(&self) -> PriorityFilter {
        self.priority_filter
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn toggle_origin(&mut self) {
        self.origin = match self.origin {
            SuggestionOrigin::Active => SuggestionOrigin::Proactive,
            SuggestionOrigin::Proactive => SuggestionOrigin::Active,
        };
        self.selected_index = 0;
    }

    pub fn cycle_priority_filter(&mut self) {
        self.priority_filter = self.priority_filter.next();
        self.selected_index = 0;
    }

    pub fn select_next(&mut self, item_count: usize) {
        self.selected_index = (self.selected_index + 1).min(item_count.saturating_sub(1));
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn clamp(&mut self, item_count: usize) {
        self.selected_index = self.selected_index.min(item_count.saturating_sub(1));
    }
}
