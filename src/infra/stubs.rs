//! Test doubles for infra contracts.

use anyhow::Result;
use chrono::NaiveDate;

use crate::{
    infra::{config::AppConfig, contracts::ConfigAdapter},
    usecases::contracts::Clock,
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Clock frozen at 2026-10-18 10:45 AM.
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub today: NaiveDate,
    pub label: String,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            today: NaiveDate::from_ymd_opt(2026, 10, 18).expect("fixture date is valid"),
            label: "10:45 AM".to_owned(),
        }
    }
}

impl Clock for FixedClock {
    fn now_label(&self) -> String {
        self.label.clone()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock::default();

        assert_eq!(clock.now_label(), clock.now_label());
        assert_eq!(clock.today().to_string(), "2026-10-18");
    }
}
