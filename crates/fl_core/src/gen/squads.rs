//! Initial squad generation and youth intake.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::gen::names::NameGen;
use crate::models::{
    Formation, Player, PlayerIdGen, Position, SquadGroup, Team, BENCH_CAP, RESERVES_CAP,
};

/// Generated senior ratings stay inside this band.
const RATING_SET_MIN: u8 = 75;
const RATING_SET_MAX: u8 = 89;

/// Everything needed to found a club.
#[derive(Debug, Clone)]
pub struct ClubSeed {
    pub name: String,
    pub stadium: String,
    pub origins: Vec<String>,
    pub formation: Formation,
    /// Target final rank, 1-based.
    pub objective: u8,
    pub rating_target: u8,
    pub budget: i64,
}

/// Draws `n` gaussian ratings around `target_avg`, clamps them to the senior
/// band, then nudges entries ±1 round-robin until the sum matches the target
/// as closely as the clamp allows.
pub fn generate_rating_set<R: Rng>(n: usize, target_avg: f32, spread: f32, rng: &mut R) -> Vec<u8> {
    let dist = Normal::new(target_avg, spread.max(0.1)).expect("spread is finite and positive");
    let mut ratings: Vec<u8> = (0..n)
        .map(|_| {
            (dist.sample(rng).round() as i32)
                .clamp(i32::from(RATING_SET_MIN), i32::from(RATING_SET_MAX)) as u8
        })
        .collect();

    let target_sum = (target_avg * n as f32).round() as i64;
    let mut idx = 0;
    for _ in 0..n * 20 {
        let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
        if sum == target_sum || ratings.is_empty() {
            break;
        }
        let r = &mut ratings[idx % n];
        if sum < target_sum && *r < RATING_SET_MAX {
            *r += 1;
        } else if sum > target_sum && *r > RATING_SET_MIN {
            *r -= 1;
        }
        idx += 1;
    }
    ratings
}

/// Nation pick for a generated player: the first origin carries 40%, the
/// rest split the remainder evenly.
fn pick_origin<'a, R: Rng>(origins: &'a [String], rng: &mut R) -> &'a str {
    match origins {
        [] => "England",
        [only] => only,
        [first, rest @ ..] => {
            if rng.gen_bool(0.4) {
                first
            } else {
                &rest[rng.gen_range(0..rest.len())]
            }
        }
    }
}

/// Founds a club from its seed: the best eleven ratings go to the starters
/// against the formation's slot list, the next nine to the bench against its
/// suggested position cycle. Reserves start empty; youth intake fills them.
pub fn build_club<R: Rng>(
    seed: &ClubSeed,
    ids: &mut PlayerIdGen,
    names: &mut NameGen,
    rng: &mut R,
) -> Team {
    let mut team = Team::new(
        seed.name.clone(),
        seed.stadium.clone(),
        seed.origins.clone(),
        seed.formation,
        seed.objective,
        seed.rating_target,
        seed.budget,
    );

    let slots = seed.formation.slot_list();
    let cycle = seed.formation.bench_cycle();
    let mut ratings = generate_rating_set(
        slots.len() + BENCH_CAP,
        f32::from(seed.rating_target),
        4.0,
        rng,
    );
    ratings.sort_unstable_by(|a, b| b.cmp(a));

    for (i, &position) in slots.iter().enumerate() {
        let player = senior(ids, names, &team, position, ratings[i], rng);
        team.add_player(player, SquadGroup::Starters);
    }
    for i in 0..BENCH_CAP {
        let position = cycle[i % cycle.len()];
        let player = senior(ids, names, &team, position, ratings[slots.len() + i], rng);
        team.add_player(player, SquadGroup::Bench);
    }
    team.assert_groups();
    team
}

fn senior<R: Rng>(
    ids: &mut PlayerIdGen,
    names: &mut NameGen,
    team: &Team,
    position: Position,
    rating: u8,
    rng: &mut R,
) -> Player {
    let nation = pick_origin(&team.origins, rng).to_string();
    let name = names.next(&nation, rng);
    Player::new(
        ids.next_id(),
        name,
        nation,
        position,
        rng.gen_range(18..=35),
        rating,
        rng.gen_range(1..=3),
    )
}

/// Tops the bench and reserves up to capacity with freshly generated young
/// players. The focus club's prospects draw from a wider potential band than
/// the AI clubs'.
pub fn youth_intake<R: Rng>(
    team: &mut Team,
    ids: &mut PlayerIdGen,
    names: &mut NameGen,
    rng: &mut R,
    is_focus: bool,
) {
    let mut added = 0usize;
    for (group, cap) in [
        (SquadGroup::Bench, BENCH_CAP),
        (SquadGroup::Reserves, RESERVES_CAP),
    ] {
        while team.group_len(group) < cap {
            let position = Position::ALL[rng.gen_range(0..Position::ALL.len())];
            let nation = pick_origin(&team.origins, rng).to_string();
            let name = names.next(&nation, rng);
            let rating: u8 = rng.gen_range(70..=74);
            let potential_target: u8 = if is_focus {
                rng.gen_range(78..=94)
            } else {
                rng.gen_range(81..=91)
            };
            let plus = potential_target.saturating_sub(rating).max(1);
            let player = Player::new(
                ids.next_id(),
                name,
                nation,
                position,
                rng.gen_range(16..=25),
                rating,
                plus,
            );
            team.add_player(player, group);
            added += 1;
        }
    }
    if added > 0 {
        log::debug!("{}: {} youth players joined", team.name, added);
    }
    team.assert_groups();
}
