//! UI layer: rendering and interaction entry points (CLI/TUI).

mod action_center_view;
mod event_source;
mod message_input;
mod message_rendering;
mod modal_view;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
