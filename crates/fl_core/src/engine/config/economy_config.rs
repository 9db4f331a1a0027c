//! Season-end economy parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Bonuses for finishing first, second and third (default: 50/40/20).
    pub podium_bonuses: [i64; 3],
    /// Bonus for finishing at or above the club's objective (default: 5).
    pub objective_bonus: i64,
    /// Budget multiplier for finishing exactly one place below the
    /// objective (default: 0.85).
    pub near_miss_scale: f64,
    /// Lottery bonus handed to mid-table clubs (default: 25).
    pub lottery_bonus: i64,
    /// How many clubs win the lottery (default: 2); skipped entirely when
    /// fewer are eligible.
    pub lottery_winners: usize,
    /// Inclusive 1-based rank band eligible for the lottery
    /// (default: 3..=10).
    pub lottery_rank_min: usize,
    pub lottery_rank_max: usize,
    /// Consecutive top-3 finishes that trigger the parity payout
    /// (default: 3).
    pub dynasty_streak: u32,
    /// Parity payout to one lagging club when a dynasty exists
    /// (default: 150).
    pub parity_bonus: i64,
    /// Budget rollover: next = max(floor, budget * scale)
    /// (default: 30, 0.97).
    pub rollover_floor: i64,
    pub rollover_scale: f64,
    /// Probability the board reassigns a focus manager who missed the
    /// objective (default: 0.13).
    pub manager_switch_p: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            podium_bonuses: [50, 40, 20],
            objective_bonus: 5,
            near_miss_scale: 0.85,
            lottery_bonus: 25,
            lottery_winners: 2,
            lottery_rank_min: 3,
            lottery_rank_max: 10,
            dynasty_streak: 3,
            parity_bonus: 150,
            rollover_floor: 30,
            rollover_scale: 0.97,
            manager_switch_p: 0.13,
        }
    }
}
