mod adapter;
mod app_config;
mod file_config;
mod loader;

pub use adapter::FileConfigAdapter;
pub use app_config::{AgentConfig, AppConfig, LogConfig, ScheduleConfig, UiConfig};
pub use loader::load;
