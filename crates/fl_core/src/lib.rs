//! # fl_core - Multi-Season Football League Simulation Engine
//!
//! Simulates a football league across seasons: clubs with budgets and rosters
//! compete through a generated fixture calendar while an automated market
//! reshapes squads through signings, poaching, injuries, player development
//! and retirement.
//!
//! ## Determinism
//! Every random draw flows from a single `ChaCha8Rng` owned by the [`League`]
//! orchestrator and threaded into each subsystem call. Same seed, same
//! seasons.
//!
//! ## Layout
//! - [`models`] - players, teams, fixtures, standings
//! - [`engine`] - match outcomes, fixture scheduling, squad organization
//! - [`market`] - valuation, free agents, signings, poaching, reserve trims
//! - [`season`] - calendar, injuries, economy, development, the season loop
//! - [`gen`] - name and squad generation

pub mod engine;
pub mod error;
pub mod gen;
pub mod market;
pub mod models;
pub mod season;

pub use engine::config::EngineConfig;
pub use error::{EngineError, Result};
pub use gen::ClubSeed;
pub use models::{
    standings, Fixture, Formation, MatchResult, Player, PlayerId, Position, SeasonSummary,
    SquadGroup, StandingsRow, Team, Venue,
};
pub use season::{season_dates, season_label, League, SeasonDates};
