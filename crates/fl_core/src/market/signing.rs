//! Signing engine.
//!
//! Window shopping for one club against the shared free-agent pool: weak
//! positions steer the search, an affordability ceiling splits the budget
//! over the planned signings, and an acceptance filter keeps the club from
//! diluting its average rating unless the prospect is a development
//! investment.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::config::EngineConfig;
use crate::engine::squad::organize_squad;
use crate::error::{EngineError, Result};
use crate::market::value::value;
use crate::models::{Player, PlayerId, Position, SquadGroup, Team, RESERVES_CAP};

/// Runs one club's transfer window. Accepted signings land in reserves and
/// the squad re-organizes after each.
pub fn run_club_window<R: Rng>(
    team: &mut Team,
    pool: &mut Vec<Player>,
    rng: &mut R,
    cfg: &EngineConfig,
) {
    let market = &cfg.market;
    if team.budget < market.min_window_budget {
        log::debug!("{}: window skipped, budget {}M", team.name, team.budget);
        return;
    }

    let planned = rng.gen_range(1..=market.max_signings) as i64;
    let weakest = team.weakest_positions();
    let bias: Vec<Position> = weakest
        .choose_multiple(rng, market.bias_positions)
        .copied()
        .collect();
    log::debug!(
        "{}: planning {} signings, focus on {:?}",
        team.name,
        planned,
        bias
    );

    for done in 0..planned {
        if team.budget < market.min_window_budget || pool.is_empty() {
            break;
        }
        // Make room first: terminate one of the weakest reserves.
        if !free_reserve_slot(team, rng, market.trim_oldest_pool) {
            break;
        }

        let remaining = planned - done;
        let ceiling = (team.budget / remaining).max(1);
        let Some(pick) = shortlist_pick(team, pool, &bias, ceiling, rng, cfg) else {
            continue;
        };

        let price = value(pool[pick].age, pool[pick].rating);
        if let Err(err) = team.pay(price) {
            log::debug!("{}: signing fell through, {err}", team.name);
            continue;
        }
        let player = pool.remove(pick);
        log::info!(
            "{} sign {} ({}, {}) for {}M",
            team.name,
            player.name,
            player.position,
            player.rating,
            price
        );
        team.add_player(player, SquadGroup::Reserves);
        organize_squad(team, None, &cfg.squad);
    }
}

/// Picks a signing from the affordable pool: biased positions first, top
/// candidates by rating shortlisted, one drawn at random, then the
/// acceptance filter. Returns an index into `pool`.
fn shortlist_pick<R: Rng>(
    team: &Team,
    pool: &[Player],
    bias: &[Position],
    ceiling: i64,
    rng: &mut R,
    cfg: &EngineConfig,
) -> Option<usize> {
    let market = &cfg.market;
    let affordable: Vec<usize> = (0..pool.len())
        .filter(|&i| value(pool[i].age, pool[i].rating) <= ceiling)
        .collect();
    if affordable.is_empty() {
        return None;
    }
    let preferred: Vec<usize> = affordable
        .iter()
        .copied()
        .filter(|&i| bias.contains(&pool[i].position))
        .collect();
    let mut candidates = if preferred.is_empty() {
        affordable
    } else {
        preferred
    };

    candidates.sort_by(|&x, &y| pool[y].rating.cmp(&pool[x].rating));
    candidates.truncate(market.shortlist_len);
    let pick = *candidates.choose(rng)?;

    let prospect = &pool[pick];
    let development = prospect.age < market.young_age && prospect.potential >= market.high_potential;
    if f32::from(prospect.rating) < team.avg_rating() && !development {
        log::debug!(
            "{}: {} ({}) rejected by the acceptance filter",
            team.name,
            prospect.name,
            prospect.rating
        );
        return None;
    }
    Some(pick)
}

/// Terminates one random pick among the lowest-rated reserves to open a
/// slot. Returns false when there is no reserve to let go.
fn free_reserve_slot<R: Rng>(team: &mut Team, rng: &mut R, pick_pool: usize) -> bool {
    let mut reserves: Vec<(PlayerId, u8)> =
        team.reserves().map(|p| (p.id, p.rating)).collect();
    if reserves.is_empty() {
        return false;
    }
    reserves.sort_by_key(|&(_, rating)| rating);
    reserves.truncate(pick_pool.max(1));
    let (id, _) = reserves[rng.gen_range(0..reserves.len())];
    if let Some(gone) = team.remove_player(id) {
        log::debug!("{}: {} released to open a reserve slot", team.name, gone.name);
    }
    true
}

/// User-directed signing of a pool player by id. Solvency-checked; the
/// reserves must have room. The caller re-organizes afterwards.
pub fn sign_player(team: &mut Team, pool: &mut Vec<Player>, id: PlayerId) -> Result<()> {
    let idx = pool
        .iter()
        .position(|p| p.id == id)
        .ok_or(EngineError::PlayerNotFound(id))?;
    if team.group_len(SquadGroup::Reserves) >= RESERVES_CAP {
        return Err(EngineError::ReservesFull { cap: RESERVES_CAP });
    }
    let price = value(pool[idx].age, pool[idx].rating);
    team.pay(price)?;
    let player = pool.remove(idx);
    log::info!("{} sign {} for {}M", team.name, player.name, price);
    team.add_player(player, SquadGroup::Reserves);
    Ok(())
}

/// User-directed release of any rostered player for the flat fee. The
/// released player is handed back so front ends can push him into the pool.
pub fn release_player(team: &mut Team, id: PlayerId, release_fee: i64) -> Result<Player> {
    if team.player(id).is_none() {
        return Err(EngineError::PlayerNotFound(id));
    }
    team.pay(release_fee)?;
    let player = team
        .remove_player(id)
        .ok_or(EngineError::PlayerNotFound(id))?;
    log::info!("{} release {}", team.name, player.name);
    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Formation;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team(budget: i64) -> Team {
        Team::new(
            "Test FC",
            "Test Park",
            vec!["England".to_string()],
            Formation::F433,
            3,
            80,
            budget,
        )
    }

    fn player(id: PlayerId, pos: Position, age: u8, rating: u8, plus: u8) -> Player {
        Player::new(id, format!("P{id}"), "England".into(), pos, age, rating, plus)
    }

    fn stocked_team(budget: i64) -> Team {
        let mut t = team(budget);
        let mut id = 100;
        for pos in Formation::F433.slot_list() {
            id += 1;
            t.add_player(player(id, pos, 27, 78, 2), SquadGroup::Starters);
        }
        for i in 0..4 {
            t.add_player(player(200 + i, Position::CM, 30, 60, 1), SquadGroup::Reserves);
        }
        t
    }

    #[test]
    fn broke_club_sits_the_window_out() {
        let mut t = stocked_team(4);
        let mut pool = vec![player(1, Position::ST, 24, 84, 4)];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        run_club_window(&mut t, &mut pool, &mut rng, &EngineConfig::default());
        assert_eq!(pool.len(), 1);
        assert_eq!(t.budget, 4);
    }

    #[test]
    fn window_signs_and_pays_atomically() {
        let mut t = stocked_team(500);
        let before = t.roster_len();
        let mut pool: Vec<Player> = (1..=20)
            .map(|i| player(i, Position::ALL[i as usize % 10], 24, 80 + (i % 7) as u8, 3))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        run_club_window(&mut t, &mut pool, &mut rng, &EngineConfig::default());

        let signed = 20 - pool.len();
        assert!(signed >= 1, "nothing signed");
        assert!(signed <= 3);
        // One reserve is terminated per signing, so the roster size holds.
        assert_eq!(t.roster_len(), before);
        assert!(t.budget >= 0);
        assert!(t.budget < 500);
    }

    #[test]
    fn dry_pool_costs_no_reserve() {
        let mut t = stocked_team(500);
        let before = t.roster_len();
        let mut pool: Vec<Player> = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        run_club_window(&mut t, &mut pool, &mut rng, &EngineConfig::default());
        assert_eq!(t.roster_len(), before, "no reserve terminated for nothing");
        assert_eq!(t.budget, 500);
    }

    #[test]
    fn acceptance_filter_admits_young_high_potential() {
        let t = stocked_team(500);
        let cfg = EngineConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        // Rated below the team average (78) and too old for the exception.
        let journeyman = vec![player(1, Position::ST, 29, 74, 1)];
        assert_eq!(
            shortlist_pick(&t, &journeyman, &[Position::ST], 1_000, &mut rng, &cfg),
            None
        );

        // Same rating, but young with elite potential: taken on.
        let prospect = vec![player(2, Position::ST, 19, 74, 15)];
        assert_eq!(
            shortlist_pick(&t, &prospect, &[Position::ST], 1_000, &mut rng, &cfg),
            Some(0)
        );
    }

    #[test]
    fn unaffordable_pool_is_skipped() {
        let t = stocked_team(500);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stars = vec![player(1, Position::ST, 24, 91, 2)]; // 100M
        assert_eq!(
            shortlist_pick(&t, &stars, &[], 5, &mut rng, &EngineConfig::default()),
            None
        );
    }

    #[test]
    fn sign_player_checks_funds_and_space() {
        let mut t = stocked_team(500);
        let mut pool = vec![player(1, Position::ST, 24, 84, 2)];

        // Fill reserves to the cap: signing must be refused.
        for i in 0..6 {
            t.add_player(player(300 + i, Position::LW, 22, 70, 2), SquadGroup::Reserves);
        }
        assert!(matches!(
            sign_player(&mut t, &mut pool, 1),
            Err(EngineError::ReservesFull { .. })
        ));

        t.remove_player(300);
        t.budget = 1;
        assert!(matches!(
            sign_player(&mut t, &mut pool, 1),
            Err(EngineError::InsufficientFunds { .. })
        ));
        assert_eq!(pool.len(), 1, "failed signing must not touch the pool");

        t.budget = 100;
        sign_player(&mut t, &mut pool, 1).unwrap();
        assert!(pool.is_empty());
        assert_eq!(t.group_of(1), Some(SquadGroup::Reserves));
        assert_eq!(t.budget, 100 - value(24, 84));
    }

    #[test]
    fn release_returns_the_player_for_a_fee() {
        let mut t = stocked_team(10);
        let gone = release_player(&mut t, 101, 1).unwrap();
        assert_eq!(gone.id, 101);
        assert_eq!(t.budget, 9);
        assert!(t.player(101).is_none());
        assert!(matches!(
            release_player(&mut t, 101, 1),
            Err(EngineError::PlayerNotFound(101))
        ));
    }
}
