use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        modal_state::ScheduleDefaults,
        navigation::View,
        seed::DEFAULT_AGENT_NAME,
        shell_state::ShellSettings,
        suggestion::PriorityFilter,
    },
    infra::error::AppError,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub agent: AgentConfig,
    pub ui: UiConfig,
    pub schedule: ScheduleConfig,
}

impl AppConfig {
    /// Validates the UI-facing values and converts them into shell settings.
    pub fn shell_settings(&self) -> Result<ShellSettings, AppError> {
        let default_view =
            View::parse(&self.ui.default_view).ok_or_else(|| AppError::ConfigValue {
                key: "ui.default_view",
                value: self.ui.default_view.clone(),
            })?;
        let default_priority = PriorityFilter::parse(&self.ui.default_priority).ok_or_else(|| {
            AppError::ConfigValue {
                key: "ui.default_priority",
                value: self.ui.default_priority.clone(),
            }
        })?;

        Ok(ShellSettings {
            agent_name: self.agent.name.clone(),
            default_view,
            default_priority,
            schedule: ScheduleDefaults {
                time: self.schedule.default_time.clone(),
                remind: self.schedule.remind_by_default,
            },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file_name: "converso.log".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentConfig {
    pub name: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub default_view: String,
    pub default_priority: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view: "messages".to_owned(),
            default_priority: "all".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub default_time: String,
    pub remind_by_default: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let defaults = ScheduleDefaults::default();
        Self {
            default_time: defaults.time,
            remind_by_default: defaults.remind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::Priority;

    #[test]
    fn default_config_maps_to_default_shell_settings() {
        let settings = AppConfig::default()
            .shell_settings()
            .expect("defaults are valid");

        assert_eq!(settings, ShellSettings::default());
    }

    #[test]
    fn parses_view_and_priority_case_insensitively() {
        let mut config = AppConfig::default();
        config.ui.default_view = "Actions".to_owned();
        config.ui.default_priority = "HIGH".to_owned();

        let settings = config.shell_settings().expect("values are valid");

        assert_eq!(settings.default_view, View::Actions);
        assert_eq!(
            settings.default_priority,
            PriorityFilter::Only(Priority::High)
        );
    }

    #[test]
    fn rejects_unknown_view() {
        let mut config = AppConfig::default();
        config.ui.default_view = "inbox".to_owned();

        let error = config.shell_settings().expect_err("unknown view must fail");

        assert!(matches!(
            error,
            AppError::ConfigValue {
                key: "ui.default_view",
                ..
            }
        ));
    }
}
