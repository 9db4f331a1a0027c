//! Season-end economy: placement money, objective bonuses and penalties,
//! the mid-table lottery, the dynasty/parity redistribution and the yearly
//! budget rollover.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::config::EconomyConfig;
use crate::models::{StandingsRow, Team};

/// Applies the full season-end money flow against a final table.
pub fn apply_season_economy<R: Rng>(
    clubs: &mut [Team],
    table: &[StandingsRow],
    rng: &mut R,
    cfg: &EconomyConfig,
) {
    for row in table {
        let club = &mut clubs[row.club];

        if row.rank <= cfg.podium_bonuses.len() {
            let bonus = cfg.podium_bonuses[row.rank - 1];
            club.receive(bonus);
            log::debug!("{}: podium bonus {}M for rank {}", club.name, bonus, row.rank);
        }
        if row.rank <= club.objective as usize {
            club.receive(cfg.objective_bonus);
        } else if row.rank == club.objective as usize + 1 {
            // One place short: the board tightens the purse.
            club.budget = (club.budget as f64 * cfg.near_miss_scale) as i64;
            log::debug!("{}: objective missed by one, budget scaled", club.name);
        }
    }

    // Mid-table lottery: a couple of lucky boards get extra backing. Skipped
    // outright when the band is too small.
    let eligible: Vec<usize> = table
        .iter()
        .filter(|r| (cfg.lottery_rank_min..=cfg.lottery_rank_max).contains(&r.rank))
        .map(|r| r.club)
        .collect();
    if eligible.len() >= cfg.lottery_winners {
        for &club in eligible.choose_multiple(rng, cfg.lottery_winners) {
            clubs[club].receive(cfg.lottery_bonus);
            log::debug!("{}: lottery bonus {}M", clubs[club].name, cfg.lottery_bonus);
        }
    }

    update_dynasty_streaks(clubs, table);
    apply_parity_bonus(clubs, table, rng, cfg);
}

fn update_dynasty_streaks(clubs: &mut [Team], table: &[StandingsRow]) {
    for row in table {
        let club = &mut clubs[row.club];
        if row.rank <= 3 {
            club.top3_streak += 1;
        } else {
            club.top3_streak = 0;
        }
    }
}

/// When any club has strung together enough top-3 finishes, one club from
/// second place down without such a streak receives the parity injection.
fn apply_parity_bonus<R: Rng>(
    clubs: &mut [Team],
    table: &[StandingsRow],
    rng: &mut R,
    cfg: &EconomyConfig,
) {
    let dynasty_exists = clubs.iter().any(|c| c.top3_streak >= cfg.dynasty_streak);
    if !dynasty_exists {
        return;
    }
    let laggards: Vec<usize> = table
        .iter()
        .filter(|r| r.rank >= 2 && clubs[r.club].top3_streak < cfg.dynasty_streak)
        .map(|r| r.club)
        .collect();
    if let Some(&club) = laggards.choose(rng) {
        clubs[club].receive(cfg.parity_bonus);
        log::info!(
            "parity: {} receives {}M against the dynasty",
            clubs[club].name,
            cfg.parity_bonus
        );
    }
}

/// Yearly rollover: budgets decay but never fall below the league floor.
pub fn rollover_budgets(clubs: &mut [Team], cfg: &EconomyConfig) {
    for club in clubs.iter_mut() {
        club.budget = ((club.budget as f64 * cfg.rollover_scale).floor() as i64)
            .max(cfg.rollover_floor);
    }
}
