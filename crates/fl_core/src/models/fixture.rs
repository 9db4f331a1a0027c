use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a match is played, relative to the fixture's (a, b) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    HomeA,
    HomeB,
    Neutral,
}

/// A pairing waiting for a calendar date. Sides are club indices into the
/// league's club list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pairing {
    pub a: usize,
    pub b: usize,
    pub venue: Venue,
}

/// A scheduled match. Immutable once the date is assigned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fixture {
    pub a: usize,
    pub b: usize,
    pub venue: Venue,
    pub date: NaiveDate,
}

impl Fixture {
    pub fn from_pairing(pairing: Pairing, date: NaiveDate) -> Self {
        Self {
            a: pairing.a,
            b: pairing.b,
            venue: pairing.venue,
            date,
        }
    }
}

/// A played fixture and its scoreline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub fixture: Fixture,
    pub goals_a: u8,
    pub goals_b: u8,
}
