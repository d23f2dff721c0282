use anyhow::Result;
use chrono::NaiveDate;

use crate::domain::{events::AppEvent, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Source of wall-clock values used when messages are created at runtime.
pub trait Clock {
    /// Display label for a message sent now, e.g. "04:05 PM".
    fn now_label(&self) -> String;
    fn today(&self) -> NaiveDate;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_label(&self) -> String {
        (*self).now_label()
    }

    fn today(&self) -> NaiveDate {
        (*self).today()
    }
}
