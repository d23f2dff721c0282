use super::text_input_state::TextInputState;

/// Ephemeral state of the conversation detail view. Reset whenever a
/// conversation is opened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpenChatState {
    panel_index: usize,
    panel_minimized: bool,
    composing: bool,
    compose: TextInputState,
}

impl OpenChatState {
    /// Cursor inside the suggestion panel.
    pub fn panel_index(&self) -> usize {
        self.panel_index
    }

    pub fn is_panel_minimized(&self) -> bool {
        self.panel_minimized
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn compose(&self) -> &TextInputState {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut TextInputState {
        &mut self.compose
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_panel(&mut self) {
        self.panel_minimized = !self.panel_minimized;
    }

    pub fn start_composing(&mut self) {
        self.composing = true;
    }

    /// Leaves compose mode; the draft text is kept.
    pub fn stop_composing(&mut self) {
        self.composing = false;
    }

    pub fn select_next(&mut self, panel_len: usize) {
        self.panel_index = (self.panel_index + 1).min(panel_len.saturating_sub(1));
    }

    pub fn select_previous(&mut self) {
        self.panel_index = self.panel_index.saturating_sub(1);
    }

    /// Keeps the cursor on a valid row after the panel shrinks.
    pub fn clamp_panel(&mut self, panel_len: usize) {
        self.panel_index = self.panel_index.min(panel_len.saturating_sub(1));
    }
}
