//! Domain layer: core entities and business rules.

pub mod action_center_state;
pub mod chat;
pub mod chat_list_state;
pub mod events;
pub mod inbox;
pub mod message;
pub mod modal_state;
pub mod navigation;
pub mod open_chat_state;
pub mod seed;
pub mod shell_state;
pub mod suggestion;
pub mod text_input_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
