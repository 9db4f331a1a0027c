//! Fixture scheduler.
//!
//! Every unordered club pair meets twice a season, once at each side's
//! ground. Dates come only from the configured match days inside the season
//! window; when fixtures outnumber match days they pack evenly onto the
//! available days instead of failing.

use chrono::{Datelike, Days, NaiveDate};

use crate::engine::config::ScheduleConfig;
use crate::error::{EngineError, Result};
use crate::models::{Fixture, Pairing, Venue};

/// All pairings for one season: two legs per pair, in round order (every
/// pair's first leg before any second leg).
pub fn round_robin_pairings(clubs: usize) -> Vec<Pairing> {
    let mut first = Vec::new();
    let mut second = Vec::new();
    for a in 0..clubs {
        for b in (a + 1)..clubs {
            first.push(Pairing {
                a,
                b,
                venue: Venue::HomeA,
            });
            second.push(Pairing {
                a,
                b,
                venue: Venue::HomeB,
            });
        }
    }
    first.extend(second);
    first
}

/// Every valid match day inside the inclusive window, ascending.
fn match_days(start: NaiveDate, end: NaiveDate, cfg: &ScheduleConfig) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        if cfg.is_match_day(day.weekday()) {
            days.push(day);
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}

/// Assigns a calendar date to every pairing.
///
/// Fixtures are ceiling-divided over the valid days in pairing order, then
/// stably sorted by date so the simulation loop always plays in calendar
/// order while same-day fixtures keep their generation order. A window with
/// no valid match day at all is a fatal scheduling error.
pub fn assign_dates(
    pairings: &[Pairing],
    start: NaiveDate,
    end: NaiveDate,
    cfg: &ScheduleConfig,
) -> Result<Vec<Fixture>> {
    let days = match_days(start, end, cfg);
    if days.is_empty() {
        return Err(EngineError::NoMatchDays { start, end });
    }

    let per_day = pairings.len().div_ceil(days.len());
    let mut fixtures: Vec<Fixture> = pairings
        .iter()
        .enumerate()
        .map(|(i, &pairing)| Fixture::from_pairing(pairing, days[i / per_day.max(1)]))
        .collect();
    fixtures.sort_by_key(|f| f.date);

    log::info!(
        "scheduled {} fixtures over {} match days ({} to {})",
        fixtures.len(),
        days.len(),
        start,
        end
    );
    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn each_pair_meets_twice_with_swapped_venues() {
        let pairings = round_robin_pairings(7);
        assert_eq!(pairings.len(), 7 * 6);
        for a in 0..7 {
            for b in (a + 1)..7 {
                let legs: Vec<_> = pairings
                    .iter()
                    .filter(|p| p.a == a && p.b == b)
                    .collect();
                assert_eq!(legs.len(), 2);
                assert_eq!(legs[0].venue, Venue::HomeA);
                assert_eq!(legs[1].venue, Venue::HomeB);
            }
        }
    }

    #[test]
    fn dates_are_valid_sorted_weekend_days() {
        let pairings = round_robin_pairings(7);
        let start = date(2025, 8, 15);
        let end = date(2026, 6, 15);
        let fixtures = assign_dates(&pairings, start, end, &ScheduleConfig::default()).unwrap();

        assert_eq!(fixtures.len(), pairings.len());
        for pair in fixtures.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
        for f in &fixtures {
            assert!(f.date >= start && f.date <= end);
            assert!(matches!(
                f.date.weekday(),
                Weekday::Fri | Weekday::Sat | Weekday::Sun
            ));
        }
    }

    #[test]
    fn short_window_packs_fixtures_per_day() {
        let pairings = round_robin_pairings(4); // 12 fixtures
        // 2026-01-02 is a Friday; a Fri..Sun window has three match days.
        let fixtures = assign_dates(
            &pairings,
            date(2026, 1, 2),
            date(2026, 1, 4),
            &ScheduleConfig::default(),
        )
        .unwrap();
        assert_eq!(fixtures.len(), 12);
        for chunk in fixtures.chunks(4) {
            assert!(chunk.iter().all(|f| f.date == chunk[0].date));
        }
    }

    #[test]
    fn window_without_match_days_is_fatal() {
        let pairings = round_robin_pairings(3);
        // 2026-01-05 is a Monday; Mon..Thu holds no weekend day.
        let err = assign_dates(
            &pairings,
            date(2026, 1, 5),
            date(2026, 1, 8),
            &ScheduleConfig::default(),
        );
        assert!(matches!(err, Err(EngineError::NoMatchDays { .. })));
    }

    #[test]
    fn empty_pairing_set_is_fine() {
        let fixtures = assign_dates(
            &[],
            date(2025, 8, 15),
            date(2026, 6, 15),
            &ScheduleConfig::default(),
        )
        .unwrap();
        assert!(fixtures.is_empty());
    }
}
