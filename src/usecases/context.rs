use crate::{domain::shell_state::ShellSettings, infra::config::AppConfig};

/// Loaded configuration plus the validated settings the shell starts from.
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub settings: ShellSettings,
}

impl AppContext {
    pub fn new(config: AppConfig, settings: ShellSettings) -> Self {
        Self { config, settings }
    }
}
