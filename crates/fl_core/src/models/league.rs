use serde::{Deserialize, Serialize};

use crate::models::Team;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandingsRow {
    /// 1-based final rank.
    pub rank: usize,
    /// Club index into the league's club list.
    pub club: usize,
    pub name: String,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i64,
}

/// Full table ordered by points, then goal difference, then goals scored.
/// Remaining ties keep club-list order, so a seeded season ranks the same
/// way every run.
pub fn standings(teams: &[Team]) -> Vec<StandingsRow> {
    let mut order: Vec<usize> = (0..teams.len()).collect();
    order.sort_by(|&x, &y| {
        let tx = &teams[x];
        let ty = &teams[y];
        let kx = (
            tx.points,
            tx.goals_for as i64 - tx.goals_against as i64,
            tx.goals_for,
        );
        let ky = (
            ty.points,
            ty.goals_for as i64 - ty.goals_against as i64,
            ty.goals_for,
        );
        ky.cmp(&kx)
    });
    order
        .into_iter()
        .enumerate()
        .map(|(i, club)| {
            let t = &teams[club];
            StandingsRow {
                rank: i + 1,
                club,
                name: t.name.clone(),
                points: t.points,
                goals_for: t.goals_for,
                goals_against: t.goals_against,
                goal_diff: t.goals_for as i64 - t.goals_against as i64,
            }
        })
        .collect()
}

/// One finished season, as kept in the league history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonSummary {
    /// Season label such as "2025/26".
    pub label: String,
    pub champion: String,
    /// Club under management when the season closed.
    pub focus_club: String,
    pub table: Vec<StandingsRow>,
}
