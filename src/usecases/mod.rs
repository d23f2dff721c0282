//! Use case layer: application workflows and orchestration.

pub mod action_center;
pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod reducer;
pub mod shell;
pub mod suggestion_router;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
