pub mod fixture;
pub mod league;
pub mod player;
pub mod team;

pub use fixture::{Fixture, MatchResult, Pairing, Venue};
pub use league::{standings, SeasonSummary, StandingsRow};
pub use player::{Player, PlayerId, PlayerIdGen, Position, PotentialRange};
pub use team::{
    Formation, SquadGroup, Team, BENCH_CAP, PROTECTION_CAP, RESERVES_CAP, STARTERS_CAP,
};
