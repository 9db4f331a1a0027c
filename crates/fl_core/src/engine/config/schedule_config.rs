//! Fixture-scheduler parameters.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Weekdays fixtures may land on (default: Friday, Saturday, Sunday).
    pub match_days: Vec<Weekday>,
}

impl ScheduleConfig {
    pub fn is_match_day(&self, day: Weekday) -> bool {
        self.match_days.contains(&day)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            match_days: vec![Weekday::Fri, Weekday::Sat, Weekday::Sun],
        }
    }
}
