/// Top-level sections reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Messages,
    Actions,
    Contacts,
    Broadcast,
    Settings,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Messages,
        View::Actions,
        View::Contacts,
        View::Broadcast,
        View::Settings,
    ];

    pub fn as_label(self) -> &'static str {
        match self {
            View::Messages => "Messages",
            View::Actions => "Actions",
            View::Contacts => "Contacts",
            View::Broadcast => "Broadcast",
            View::Settings => "Settings",
        }
    }

    /// Sections that only show an "under development" notice.
    pub fn is_placeholder(self) -> bool {
        matches!(self, View::Contacts | View::Broadcast | View::Settings)
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_label().eq_ignore_ascii_case(value.trim()))
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|view| *view == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Two-level navigation: a tab view, optionally drilled into one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    view: View,
    selected_conversation: Option<String>,
}

impl NavigationState {
    pub fn new(view: View) -> Self {
        Self {
            view,
            selected_conversation: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_conversation(&self) -> Option<&str> {
        self.selected_conversation.as_deref()
    }

    /// The tab bar is hidden while a conversation is open.
    pub fn shows_tab_bar(&self) -> bool {
        self.selected_conversation.is_none()
    }

    /// Switches tabs. Ignored while a conversation is open.
    pub fn set_view(&mut self, view: View) {
        if self.shows_tab_bar() {
            self.view = view;
        }
    }

    pub fn open_conversation(&mut self, conversation_id: impl Into<String>) {
        self.selected_conversation = Some(conversation_id.into());
    }

    pub fn back(&mut self) {
        self.selected_conversation = None;
    }
}
