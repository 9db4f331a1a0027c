//! Free-agent pool generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::config::MarketConfig;
use crate::gen::names::{nations, NameGen};
use crate::models::{Player, PlayerIdGen, Position};

/// Generates one window's free-agent pool. Positions and nations are drawn
/// uniformly, ages run 16..=38 and ratings 70..=86 with potential targeted
/// at 77..=95. A share of the pool (half by default, at least one player)
/// arrives with its potential range already public.
pub fn generate_pool<R: Rng>(
    ids: &mut PlayerIdGen,
    names: &mut NameGen,
    rng: &mut R,
    cfg: &MarketConfig,
) -> Vec<Player> {
    let all_nations = nations();
    let mut pool: Vec<Player> = (0..cfg.pool_size)
        .map(|_| {
            let position = Position::ALL[rng.gen_range(0..Position::ALL.len())];
            let nation = all_nations[rng.gen_range(0..all_nations.len())].to_string();
            let name = names.next(&nation, rng);
            let rating = rng.gen_range(70..=86);
            let potential_target: u8 = rng.gen_range(77..=95);
            let plus = potential_target.saturating_sub(rating).max(1);
            Player::new(
                ids.next_id(),
                name,
                nation,
                position,
                rng.gen_range(16..=38),
                rating,
                plus,
            )
        })
        .collect();

    if !pool.is_empty() {
        let reveal = (pool.len() / cfg.pool_reveal_divisor.max(1)).max(1);
        let mut indices: Vec<usize> = (0..pool.len()).collect();
        indices.shuffle(rng);
        for &i in indices.iter().take(reveal) {
            pool[i].potential_revealed = true;
        }
    }

    log::debug!("free-agent pool generated: {} players", pool.len());
    pool
}
