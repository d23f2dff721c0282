use serde::Deserialize;

use crate::infra::config::{AgentConfig, AppConfig, LogConfig, ScheduleConfig, UiConfig};

/// On-disk shape of `config.toml`; every key is optional and overrides a default.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub agent: Option<FileAgentConfig>,
    pub ui: Option<FileUiConfig>,
    pub schedule: Option<FileScheduleConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(agent) = self.agent {
            agent.merge_into(&mut config.agent);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }

        if let Some(schedule) = self.schedule {
            schedule.merge_into(&mut config.schedule);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file_name: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file_name) = self.file_name {
            config.file_name = file_name;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAgentConfig {
    pub name: Option<String>,
}

impl FileAgentConfig {
    fn merge_into(self, config: &mut AgentConfig) {
        if let Some(name) = self.name {
            config.name = name;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub default_view: Option<String>,
    pub default_priority: Option<String>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(view) = self.default_view {
            config.default_view = view;
        }

        if let Some(priority) = self.default_priority {
            config.default_priority = priority;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileScheduleConfig {
    pub default_time: Option<String>,
    pub remind_by_default: Option<bool>,
}

impl FileScheduleConfig {
    fn merge_into(self, config: &mut ScheduleConfig) {
        if let Some(time) = self.default_time {
            config.default_time = time;
        }

        if let Some(remind) = self.remind_by_default {
            config.remind_by_default = remind;
        }
    }
}
