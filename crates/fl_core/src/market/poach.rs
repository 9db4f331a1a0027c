//! Poaching engine.
//!
//! Rival clubs buy straight off the focus club's roster at a premium during
//! window finalization. The champion's raid is an emergency overspend and
//! may drive its budget negative; the bottom club's raid is solvency-checked
//! and skipped quietly when unaffordable. A near-certain parity rule
//! relocates the focus club's excess strong reserves, free, to the league's
//! weakest club.

use rand::Rng;

use crate::engine::config::MarketConfig;
use crate::error::{EngineError, Result};
use crate::market::value::value;
use crate::models::{PlayerId, SquadGroup, Team, RESERVES_CAP};

/// Two distinct clubs out of one slice.
fn pair_mut(clubs: &mut [Team], i: usize, j: usize) -> (&mut Team, &mut Team) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = clubs.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = clubs.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

fn poach_price(age: u8, rating: u8, premium_pct: i64) -> i64 {
    (value(age, rating) * (100 + premium_pct) + 50) / 100
}

/// Moves `id` from `seller` to `buyer`'s reserves at market value plus the
/// premium. `allow_negative` selects the emergency-overspend payment path;
/// it is never inferred. Returns the price paid.
pub fn poach_between(
    clubs: &mut [Team],
    buyer: usize,
    seller: usize,
    id: PlayerId,
    allow_negative: bool,
    cfg: &MarketConfig,
) -> Result<i64> {
    let count = clubs.len();
    if buyer >= count {
        return Err(EngineError::ClubNotFound(buyer));
    }
    if seller >= count {
        return Err(EngineError::ClubNotFound(seller));
    }
    let (buying, selling) = pair_mut(clubs, buyer, seller);

    if selling.is_protected(id) {
        return Err(EngineError::PlayerProtected(id));
    }
    let target = selling.player(id).ok_or(EngineError::PlayerNotFound(id))?;
    let price = poach_price(target.age, target.rating, cfg.poach_premium_pct);

    if allow_negative {
        buying.pay_allow_negative(price);
    } else {
        buying.pay(price)?;
    }
    // Funds are committed; the roster move must follow atomically.
    let player = selling
        .remove_player(id)
        .ok_or(EngineError::PlayerNotFound(id))?;
    selling.receive(price);
    log::info!(
        "{} poach {} from {} for {}M{}",
        buying.name,
        player.name,
        selling.name,
        price,
        if allow_negative { " (overspend)" } else { "" }
    );
    buying.add_player(player, SquadGroup::Reserves);
    Ok(price)
}

/// A victim's poachable targets: the top of the roster by rating, protected
/// players excluded.
fn poach_targets(victim: &Team, pool: usize) -> Vec<PlayerId> {
    let mut players: Vec<(PlayerId, u8)> = victim
        .players()
        .iter()
        .filter(|p| !victim.is_protected(p.id))
        .map(|p| (p.id, p.rating))
        .collect();
    players.sort_by(|a, b| b.1.cmp(&a.1));
    players.truncate(pool);
    players.into_iter().map(|(id, _)| id).collect()
}

/// Runs the window's poach rolls against the focus club, using the previous
/// season's table order for the champion and bottom club.
pub fn run_poach_phase<R: Rng>(
    clubs: &mut [Team],
    focus: usize,
    prev_order: &[usize],
    rng: &mut R,
    cfg: &MarketConfig,
) {
    // Champion raid: always charged, budget explicitly allowed negative.
    if let Some(&champion) = prev_order.first() {
        if champion != focus && rng.gen_bool(cfg.champion_poach_p) {
            let targets = poach_targets(&clubs[focus], cfg.poach_target_pool);
            if let Some(&id) = pick(&targets, rng) {
                // Cannot fail on funds; protection was already filtered out.
                if let Err(err) = poach_between(clubs, champion, focus, id, true, cfg) {
                    log::warn!("champion poach aborted: {err}");
                }
            }
        }
    }

    // Bottom-club raid: solvency-checked, skipped quietly when unaffordable.
    if let Some(&bottom) = prev_order.last() {
        if bottom != focus && rng.gen_bool(cfg.bottom_poach_p) {
            let targets = poach_targets(&clubs[focus], cfg.poach_target_pool);
            if let Some(&id) = pick(&targets, rng) {
                match poach_between(clubs, bottom, focus, id, false, cfg) {
                    Ok(_) => {}
                    Err(EngineError::InsufficientFunds { .. }) => {
                        log::debug!("{} cannot afford the raid", clubs[bottom].name);
                    }
                    Err(err) => log::warn!("bottom poach aborted: {err}"),
                }
            }
        }
    }

    // Parity rule: excess strong reserves relocate, free, to the weakest
    // club in the league.
    if rng.gen_bool(cfg.parity_transfer_p) {
        let excess = excess_strong_reserves(&clubs[focus], cfg);
        if !excess.is_empty() {
            if let Some(weakest) = weakest_club(clubs, focus) {
                for id in excess {
                    if let Some(player) = clubs[focus].remove_player(id) {
                        log::info!(
                            "parity: {} moves from {} to {} on a free",
                            player.name,
                            clubs[focus].name,
                            clubs[weakest].name
                        );
                        clubs[weakest].add_player(player, SquadGroup::Reserves);
                    }
                }
            }
        }
    }
}

/// Strong reserves beyond the allowed keep, weakest of them first.
fn excess_strong_reserves(team: &Team, cfg: &MarketConfig) -> Vec<PlayerId> {
    let mut strong: Vec<(PlayerId, u8)> = team
        .reserves()
        .filter(|p| p.rating >= cfg.strong_reserve_rating)
        .map(|p| (p.id, p.rating))
        .collect();
    strong.sort_by(|a, b| b.1.cmp(&a.1));
    strong
        .into_iter()
        .skip(cfg.strong_reserve_keep)
        .map(|(id, _)| id)
        .collect()
}

fn weakest_club(clubs: &[Team], exclude: usize) -> Option<usize> {
    (0..clubs.len())
        .filter(|&i| i != exclude)
        .min_by(|&x, &y| {
            clubs[x]
                .avg_rating()
                .partial_cmp(&clubs[y].avg_rating())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.gen_range(0..items.len())])
    }
}

/// User-directed poach: solvency-checked and the buyer's reserves must have
/// room.
pub fn poach_player(
    clubs: &mut [Team],
    buyer: usize,
    seller: usize,
    id: PlayerId,
    cfg: &MarketConfig,
) -> Result<i64> {
    if buyer >= clubs.len() {
        return Err(EngineError::ClubNotFound(buyer));
    }
    if clubs[buyer].group_len(SquadGroup::Reserves) >= RESERVES_CAP {
        return Err(EngineError::ReservesFull { cap: RESERVES_CAP });
    }
    poach_between(clubs, buyer, seller, id, false, cfg)
}
