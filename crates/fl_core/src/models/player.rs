use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

pub type PlayerId = u32;

/// Monotonic id source owned by the league. Players keep their id for life,
/// across transfers between clubs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerIdGen {
    next: PlayerId,
}

impl PlayerIdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> PlayerId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    CB,
    LB,
    RB,
    CDM,
    CM,
    CAM,
    LW,
    RW,
    ST,
}

impl Position {
    pub const ALL: [Position; 10] = [
        Position::GK,
        Position::CB,
        Position::LB,
        Position::RB,
        Position::CDM,
        Position::CM,
        Position::CAM,
        Position::LW,
        Position::RW,
        Position::ST,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::CB => "CB",
            Position::LB => "LB",
            Position::RB => "RB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::ST => "ST",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GK" => Ok(Position::GK),
            "CB" => Ok(Position::CB),
            "LB" => Ok(Position::LB),
            "RB" => Ok(Position::RB),
            "CDM" => Ok(Position::CDM),
            "CM" => Ok(Position::CM),
            "CAM" => Ok(Position::CAM),
            "LW" => Ok(Position::LW),
            "RW" => Ok(Position::RW),
            "ST" => Ok(Position::ST),
            other => Err(EngineError::UnknownPosition(other.to_string())),
        }
    }
}

/// Scouting bucket a player's potential falls into. Hidden from front ends
/// until `potential_revealed` is set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PotentialRange {
    #[serde(rename = "60-72")]
    Limited,
    #[serde(rename = "73-77")]
    Modest,
    #[serde(rename = "78-82")]
    Solid,
    #[serde(rename = "83-88")]
    Strong,
    #[serde(rename = "89-92")]
    Elite,
    #[serde(rename = "93-95")]
    Generational,
}

impl PotentialRange {
    pub fn for_potential(potential: u8) -> Self {
        match potential {
            0..=72 => PotentialRange::Limited,
            73..=77 => PotentialRange::Modest,
            78..=82 => PotentialRange::Solid,
            83..=88 => PotentialRange::Strong,
            89..=92 => PotentialRange::Elite,
            _ => PotentialRange::Generational,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PotentialRange::Limited => "60-72",
            PotentialRange::Modest => "73-77",
            PotentialRange::Solid => "78-82",
            PotentialRange::Strong => "83-88",
            PotentialRange::Elite => "89-92",
            PotentialRange::Generational => "93-95",
        }
    }
}

pub const POTENTIAL_MIN: u8 = 70;
pub const POTENTIAL_MAX: u8 = 95;

/// League player. Every field is always present; flags default to false so
/// snapshots from older front ends still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub nation: String,
    pub position: Position,
    pub age: u8,
    pub rating: u8,
    /// Ceiling for growth, always >= rating while rating stays above 70.
    pub potential: u8,
    pub potential_range: PotentialRange,
    #[serde(default)]
    pub potential_revealed: bool,
    #[serde(default)]
    pub injured_until: Option<NaiveDate>,
    /// Set at season end; the player leaves during the next transfer window.
    #[serde(default)]
    pub retiring: bool,
}

impl Player {
    /// `potential_plus` is the headroom above the current rating; the final
    /// potential is clamped to [70, 95].
    pub fn new(
        id: PlayerId,
        name: String,
        nation: String,
        position: Position,
        age: u8,
        rating: u8,
        potential_plus: u8,
    ) -> Self {
        let potential =
            (rating as i16 + potential_plus as i16).clamp(POTENTIAL_MIN as i16, POTENTIAL_MAX as i16) as u8;
        Self {
            id,
            name,
            nation,
            position,
            age,
            rating,
            potential,
            potential_range: PotentialRange::for_potential(potential),
            potential_revealed: false,
            injured_until: None,
            retiring: false,
        }
    }

    /// Availability for selection. Without a date any open injury rules the
    /// player out; with a date the player returns the day after the injury
    /// window ends.
    pub fn is_available_on(&self, on: Option<NaiveDate>) -> bool {
        match (self.injured_until, on) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(until), Some(date)) => date > until,
        }
    }

    /// The scouting bucket, or `None` while it is still hidden.
    pub fn visible_potential_range(&self) -> Option<PotentialRange> {
        self.potential_revealed.then_some(self.potential_range)
    }

    /// Front-end reward hook: shift the potential ceiling and reveal it.
    /// The new potential never drops below the current rating.
    pub fn boost_potential(&mut self, delta: i8) {
        let floor = self.rating.max(POTENTIAL_MIN) as i16;
        self.potential = (self.potential as i16 + delta as i16).clamp(floor, POTENTIAL_MAX as i16) as u8;
        self.potential_range = PotentialRange::for_potential(self.potential);
        self.potential_revealed = true;
    }
}
