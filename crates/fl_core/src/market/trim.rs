//! Reserve trimming.
//!
//! Whenever reserves exceed the cap, a two-phase cull restores it: half the
//! overflow (rounded up) goes by a random pick among the oldest reserves,
//! the remainder by lowest estimated market value. The flat release fee is
//! charged on the overspend path because the cull must always succeed.

use rand::Rng;

use crate::engine::config::MarketConfig;
use crate::market::value::value;
use crate::models::{Player, PlayerId, SquadGroup, Team, RESERVES_CAP};

/// Culls reserves down to the cap. Returns the released players.
pub fn trim_reserves<R: Rng>(team: &mut Team, rng: &mut R, cfg: &MarketConfig) -> Vec<Player> {
    let overflow = team.group_len(SquadGroup::Reserves).saturating_sub(RESERVES_CAP);
    if overflow == 0 {
        return Vec::new();
    }

    let by_age = overflow.div_ceil(2);
    let mut released = Vec::with_capacity(overflow);

    for _ in 0..by_age {
        let mut ids: Vec<(PlayerId, u8)> = team.reserves().map(|p| (p.id, p.age)).collect();
        ids.sort_by(|a, b| b.1.cmp(&a.1));
        ids.truncate(cfg.trim_oldest_pool.max(1));
        let (id, _) = ids[rng.gen_range(0..ids.len())];
        released.extend(release(team, id, cfg.release_fee));
    }

    for _ in 0..overflow - by_age {
        let cheapest = team
            .reserves()
            .map(|p| (p.id, value(p.age, p.rating)))
            .min_by_key(|&(_, v)| v)
            .map(|(id, _)| id);
        let Some(id) = cheapest else { break };
        released.extend(release(team, id, cfg.release_fee));
    }

    log::debug!(
        "{}: reserves trimmed, {} released",
        team.name,
        released.len()
    );
    team.assert_groups();
    released
}

fn release(team: &mut Team, id: PlayerId, fee: i64) -> Option<Player> {
    // The cull must always restore the cap, so the fee may overdraw.
    team.pay_allow_negative(fee);
    team.remove_player(id)
}
