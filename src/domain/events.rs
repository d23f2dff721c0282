#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
}

/// A pressed key. Printable keys carry the character itself; named keys use
/// lowercase names such as "enter", "esc", "tab", "backspace", "up", "down",
/// "left", "right".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Returns the typed character for printable keys.
    pub fn as_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_char_returns_single_printable_character() {
        assert_eq!(KeyInput::new("j", false).as_char(), Some('j'));
        assert_eq!(KeyInput::new(" ", false).as_char(), Some(' '));
    }

    #[test]
    fn as_char_ignores_named_and_ctrl_keys() {
        assert_eq!(KeyInput::new("enter", false).as_char(), None);
        assert_eq!(KeyInput::new("c", true).as_char(), None);
    }
}
