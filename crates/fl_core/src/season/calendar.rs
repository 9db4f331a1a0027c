//! Season calendar boundaries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fixed dates framing one season, keyed by its opening year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonDates {
    /// Transfer window opens (Jun 16).
    pub window_open: NaiveDate,
    /// Transfer window closes (Aug 13).
    pub window_close: NaiveDate,
    /// Window finalization: poach rolls, retirements (Aug 14).
    pub processing_day: NaiveDate,
    /// First possible match day (Aug 15).
    pub season_start: NaiveDate,
    /// Last possible match day (Jun 15 of the following year).
    pub season_end: NaiveDate,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // All call sites pass fixed month/day constants.
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed calendar date is valid")
}

pub fn season_dates(year: i32) -> SeasonDates {
    SeasonDates {
        window_open: ymd(year, 6, 16),
        window_close: ymd(year, 8, 13),
        processing_day: ymd(year, 8, 14),
        season_start: ymd(year, 8, 15),
        season_end: ymd(year + 1, 6, 15),
    }
}

/// Season label in the usual cross-year form, e.g. "2025/26".
pub fn season_label(year: i32) -> String {
    format!("{}/{:02}", year, (year + 1).rem_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_ordered() {
        let d = season_dates(2025);
        assert!(d.window_open < d.window_close);
        assert!(d.window_close < d.processing_day);
        assert!(d.processing_day < d.season_start);
        assert!(d.season_start < d.season_end);
        assert_eq!(d.season_end, NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());
    }

    #[test]
    fn labels_cross_the_year() {
        assert_eq!(season_label(2025), "2025/26");
        assert_eq!(season_label(2099), "2099/00");
    }
}
