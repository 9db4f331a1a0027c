//! Central tuning constants for the league engine.
//!
//! Every subsystem reads its constants from a config struct instead of
//! burying magic numbers in the algorithms, so balance changes stay in one
//! place and tests can pin exact values.

mod development_config;
mod economy_config;
mod market_config;
mod outcome_config;
mod schedule_config;
mod squad_config;

pub use development_config::DevelopmentConfig;
pub use economy_config::EconomyConfig;
pub use market_config::MarketConfig;
pub use outcome_config::OutcomeConfig;
pub use schedule_config::ScheduleConfig;
pub use squad_config::{similar_positions, SquadConfig};

use serde::{Deserialize, Serialize};

/// Aggregate of every subsystem's tuning constants. `Default` carries the
/// canonical rule set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub outcome: OutcomeConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub squad: SquadConfig,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub economy: EconomyConfig,
    #[serde(default)]
    pub development: DevelopmentConfig,
}
