//! Player development, injury and retirement parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevelopmentConfig {
    /// Players under this age grow by 1..=youth_growth_max per season,
    /// capped at potential (default: 20, 5).
    pub youth_age: u8,
    pub youth_growth_max: u8,
    /// Players under this age grow by 0..=prime_growth_max; at or beyond
    /// it they decline by 0..=decline_max (default: 34, 4, 4).
    pub decline_age: u8,
    pub prime_growth_max: u8,
    pub decline_max: u8,
    /// Ratings never decline below this (default: 50).
    pub rating_floor: u8,
    /// Per-season probability a hidden potential range becomes public
    /// (default: 0.25).
    pub reveal_p: f64,

    /// Retirement is mandatory at this age (default: 39) and rolls at
    /// soft_retire_p beyond soft_retire_age (default: 33, 0.5).
    pub mandatory_retire_age: u8,
    pub soft_retire_age: u8,
    pub soft_retire_p: f64,

    /// First-team average below this marks a squad as thin: it takes
    /// injuries_weak_min..=max per season, stronger squads take
    /// injuries_strong_min..=max (default: 85, 2..=3, 4..=7).
    pub strong_squad_rating: f32,
    pub injuries_weak_min: u32,
    pub injuries_weak_max: u32,
    pub injuries_strong_min: u32,
    pub injuries_strong_max: u32,
    /// Inclusive injury length band in days (default: 20..=280).
    pub injury_days_min: i64,
    pub injury_days_max: i64,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        Self {
            youth_age: 20,
            youth_growth_max: 5,
            decline_age: 34,
            prime_growth_max: 4,
            decline_max: 4,
            rating_floor: 50,
            reveal_p: 0.25,

            mandatory_retire_age: 39,
            soft_retire_age: 33,
            soft_retire_p: 0.5,

            strong_squad_rating: 85.0,
            injuries_weak_min: 2,
            injuries_weak_max: 3,
            injuries_strong_min: 4,
            injuries_strong_max: 7,
            injury_days_min: 20,
            injury_days_max: 280,
        }
    }
}
