//! Transfer-window, poaching and reserve-trimming parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// A club below this budget sits the window out, and stops mid-window
    /// if it drops under (default: 5).
    pub min_window_budget: i64,
    /// Planned signings per window are drawn uniformly from 1..=max
    /// (default: 3).
    pub max_signings: u32,
    /// How many of the weakest positions the candidate search is biased
    /// toward (default: 2, out of the weakest 3).
    pub bias_positions: usize,
    /// Shortlist length; the signing is a uniform pick from the top-rated
    /// affordable candidates (default: 6).
    pub shortlist_len: usize,
    /// Prospects younger than this pass the acceptance filter on potential
    /// alone (default: 23).
    pub young_age: u8,
    /// Minimum potential for the development-investment exception
    /// (default: 85).
    pub high_potential: u8,
    /// Free agents generated per window (default: 30).
    pub pool_size: usize,
    /// Share of the pool whose potential range is pre-revealed, as a
    /// divisor (default: 2 for one half, minimum one player).
    pub pool_reveal_divisor: usize,

    /// Percentage premium over estimated value paid on a poach
    /// (default: 15).
    pub poach_premium_pct: i64,
    /// Probability the previous champion poaches from the focus club,
    /// budget explicitly allowed to go negative (default: 0.70).
    pub champion_poach_p: f64,
    /// Probability the previous bottom club poaches, solvency-checked
    /// (default: 0.20).
    pub bottom_poach_p: f64,
    /// Probability the parity free-transfer rule fires (default: 0.90).
    pub parity_transfer_p: f64,
    /// Poach targets come from the victim's best-rated players
    /// (default: top 3).
    pub poach_target_pool: usize,
    /// Reserves at or above this rating count as "strong" for the parity
    /// rule (default: 80).
    pub strong_reserve_rating: u8,
    /// Strong reserves a club may keep before the excess relocates
    /// (default: 3).
    pub strong_reserve_keep: usize,

    /// Flat fee charged per released player (default: 1).
    pub release_fee: i64,
    /// The age-based trim phase picks uniformly among this many of the
    /// oldest reserves (default: 4).
    pub trim_oldest_pool: usize,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            min_window_budget: 5,
            max_signings: 3,
            bias_positions: 2,
            shortlist_len: 6,
            young_age: 23,
            high_potential: 85,
            pool_size: 30,
            pool_reveal_divisor: 2,

            poach_premium_pct: 15,
            champion_poach_p: 0.70,
            bottom_poach_p: 0.20,
            parity_transfer_p: 0.90,
            poach_target_pool: 3,
            strong_reserve_rating: 80,
            strong_reserve_keep: 3,

            release_fee: 1,
            trim_oldest_pool: 4,
        }
    }
}
