//! Squad organizer.
//!
//! Greedy, rating-maximizing partition of a club's roster into starters,
//! bench and reserves. Not globally optimal: slots fill in formation order
//! and ties break by registry order, which keeps a seeded run reproducible.

use chrono::NaiveDate;

use crate::engine::config::{similar_positions, SquadConfig};
use crate::models::{PlayerId, Position, SquadGroup, Team, BENCH_CAP};

#[derive(Debug, Clone, Copy)]
struct Candidate {
    id: PlayerId,
    position: Position,
    rating: u8,
}

/// Best-rated candidate at an exact position. Returns an index into `pool`.
fn best_exact(pool: &[Candidate], position: Position) -> Option<usize> {
    pool.iter().position(|c| c.position == position)
}

/// Best-rated candidate at the first similarity-ladder position with any
/// cover. Ladder priority wins over raw rating across positions, so a CB
/// vacancy takes any CDM before a stronger full-back.
fn best_similar(pool: &[Candidate], slot: Position) -> Option<usize> {
    similar_positions(slot)
        .iter()
        .find_map(|&alt| pool.iter().position(|c| c.position == alt))
}

/// Rebuilds the team's three groups in place.
///
/// Players injured as of `as_of` (any open injury when `as_of` is `None`)
/// are parked in reserves. Each formation slot takes the best-rated exact
/// match unless a similarity-ladder candidate beats it by more than the
/// configured margin; a slot with no natural candidate walks the ladder in
/// order, or failing that takes the best player left. The bench reserves room for
/// a second goalkeeper and a backup centre-back before topping up on rating,
/// and everyone else lands in reserves.
pub fn organize_squad(team: &mut Team, as_of: Option<NaiveDate>, cfg: &SquadConfig) {
    // Snapshot, sorted by rating descending; the sort is stable so ties keep
    // registry order.
    let mut available: Vec<Candidate> = Vec::with_capacity(team.roster_len());
    let mut unavailable: Vec<PlayerId> = Vec::new();
    for p in team.players() {
        if p.is_available_on(as_of) {
            available.push(Candidate {
                id: p.id,
                position: p.position,
                rating: p.rating,
            });
        } else {
            unavailable.push(p.id);
        }
    }
    available.sort_by(|a, b| b.rating.cmp(&a.rating));

    let mut starters: Vec<PlayerId> = Vec::new();
    for slot in team.formation.slot_list() {
        if available.is_empty() {
            break;
        }
        let pick = match best_exact(&available, slot) {
            Some(exact) => match best_similar(&available, slot) {
                Some(similar)
                    if available[similar].rating
                        >= available[exact].rating + cfg.similarity_margin =>
                {
                    similar
                }
                _ => exact,
            },
            // No natural candidate: ladder first, then anyone.
            None => best_similar(&available, slot).unwrap_or(0),
        };
        starters.push(available.remove(pick).id);
    }

    let mut bench: Vec<PlayerId> = Vec::new();
    for position in [Position::GK, Position::CB] {
        if bench.len() >= BENCH_CAP {
            break;
        }
        if let Some(backup) = best_exact(&available, position) {
            bench.push(available.remove(backup).id);
        }
    }
    while bench.len() < BENCH_CAP && !available.is_empty() {
        bench.push(available.remove(0).id);
    }

    for id in starters {
        team.set_group(id, SquadGroup::Starters);
    }
    for id in bench {
        team.set_group(id, SquadGroup::Bench);
    }
    for c in available {
        team.set_group(c.id, SquadGroup::Reserves);
    }
    for id in unavailable {
        team.set_group(id, SquadGroup::Reserves);
    }
    team.assert_groups();
}
