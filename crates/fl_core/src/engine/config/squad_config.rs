//! Squad-organizer parameters and the position-similarity ladder.

use serde::{Deserialize, Serialize};

use crate::models::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadConfig {
    /// How much better a similarity-ladder candidate must rate than the best
    /// exact-position match to displace it (default: 4).
    pub similarity_margin: u8,
}

impl Default for SquadConfig {
    fn default() -> Self {
        Self {
            similarity_margin: 4,
        }
    }
}

/// Ordered fallback positions for a slot when no natural candidate exists,
/// or when a neighbour is meaningfully better than the best exact match.
/// Static configuration, kept outside the fill algorithm so it can be tuned
/// and tested on its own.
pub fn similar_positions(slot: Position) -> &'static [Position] {
    match slot {
        Position::GK => &[Position::ST],
        Position::CB => &[Position::CDM, Position::RB, Position::LB],
        Position::LB => &[Position::RB, Position::CB],
        Position::RB => &[Position::LB, Position::CB],
        Position::CDM => &[Position::CB, Position::CM],
        Position::CM => &[Position::CAM, Position::CDM, Position::ST],
        Position::CAM => &[
            Position::CM,
            Position::CDM,
            Position::ST,
            Position::RW,
            Position::LW,
        ],
        Position::ST => &[Position::CAM, Position::LW, Position::RW],
        Position::RW => &[Position::RB, Position::CAM],
        Position::LW => &[Position::LB, Position::CAM],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_position_has_a_ladder() {
        for pos in Position::ALL {
            let ladder = similar_positions(pos);
            assert!(!ladder.is_empty(), "{pos} has no fallbacks");
            assert!(!ladder.contains(&pos), "{pos} falls back to itself");
        }
    }
}
