use chrono::{Local, NaiveDate};

use crate::usecases::contracts::Clock;

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self) -> String {
        Local::now().format("%I:%M %p").to_string()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
