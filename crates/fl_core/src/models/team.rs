use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, Result};
use crate::models::{Player, PlayerId, Position};

pub const STARTERS_CAP: usize = 11;
pub const BENCH_CAP: usize = 9;
pub const RESERVES_CAP: usize = 10;

/// How many players a club may flag as non-poachable per season.
pub const PROTECTION_CAP: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Copy)]
pub enum Formation {
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "3-5-2")]
    F352,
}

impl Formation {
    /// Ordered slot table: position and how many starters it takes.
    pub fn slots(&self) -> &'static [(Position, u8)] {
        match self {
            Formation::F433 => &[
                (Position::GK, 1),
                (Position::CB, 2),
                (Position::LB, 1),
                (Position::RB, 1),
                (Position::CM, 3),
                (Position::LW, 1),
                (Position::RW, 1),
                (Position::ST, 1),
            ],
            Formation::F442 => &[
                (Position::GK, 1),
                (Position::CB, 2),
                (Position::LB, 1),
                (Position::RB, 1),
                (Position::CDM, 1),
                (Position::CAM, 1),
                (Position::LW, 1),
                (Position::RW, 1),
                (Position::ST, 2),
            ],
            Formation::F352 => &[
                (Position::GK, 1),
                (Position::CB, 3),
                (Position::CDM, 2),
                (Position::CAM, 1),
                (Position::LW, 1),
                (Position::RW, 1),
                (Position::ST, 2),
            ],
        }
    }

    /// The slot table expanded to one entry per starter, in fill order.
    pub fn slot_list(&self) -> Vec<Position> {
        let mut list = Vec::with_capacity(STARTERS_CAP);
        for &(pos, count) in self.slots() {
            for _ in 0..count {
                list.push(pos);
            }
        }
        list
    }

    /// Suggested position cycle for generated bench players.
    pub fn bench_cycle(&self) -> &'static [Position] {
        match self {
            Formation::F433 => &[
                Position::GK,
                Position::CB,
                Position::LB,
                Position::RB,
                Position::CM,
                Position::CM,
                Position::LW,
                Position::RW,
                Position::ST,
            ],
            Formation::F442 => &[
                Position::GK,
                Position::CB,
                Position::LB,
                Position::RB,
                Position::CDM,
                Position::CAM,
                Position::LW,
                Position::RW,
                Position::ST,
            ],
            Formation::F352 => &[
                Position::GK,
                Position::CB,
                Position::CDM,
                Position::CAM,
                Position::LW,
                Position::RW,
                Position::ST,
            ],
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Formation::F433 => "4-3-3",
            Formation::F442 => "4-4-2",
            Formation::F352 => "3-5-2",
        }
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Formation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "4-3-3" => Ok(Formation::F433),
            "4-4-2" => Ok(Formation::F442),
            "3-5-2" => Ok(Formation::F352),
            other => Err(EngineError::UnknownFormation(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SquadGroup {
    Starters,
    Bench,
    Reserves,
}

impl SquadGroup {
    pub fn cap(&self) -> usize {
        match self {
            SquadGroup::Starters => STARTERS_CAP,
            SquadGroup::Bench => BENCH_CAP,
            SquadGroup::Reserves => RESERVES_CAP,
        }
    }
}

/// A club: identity, budget, season stats and the roster registry.
///
/// Players live in one ordered list; group membership (starters, bench,
/// reserves) is an id-indexed map on the side. Ownership transfer and group
/// moves are O(1) map updates, and iteration order stays the registry
/// insertion order so a seeded run is reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub stadium: String,
    /// Nationality pool for generated players; the first entry is weighted.
    pub origins: Vec<String>,
    pub formation: Formation,
    /// Target final rank, 1-based. Drives season-end rewards and the board's
    /// patience with the manager.
    pub objective: u8,
    /// Squad generation target; also the rating fallback for an empty first
    /// team.
    pub rating_target: u8,
    /// Millions. Normally non-negative; only the explicit allow-negative
    /// poach path may overdraw it.
    pub budget: i64,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Consecutive top-3 finishes, feeds the dynasty/parity economy rule.
    pub top3_streak: u32,
    #[serde(default)]
    pub protected: Vec<PlayerId>,
    players: Vec<Player>,
    groups: FxHashMap<PlayerId, SquadGroup>,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        stadium: impl Into<String>,
        origins: Vec<String>,
        formation: Formation,
        objective: u8,
        rating_target: u8,
        budget: i64,
    ) -> Self {
        Self {
            name: name.into(),
            stadium: stadium.into(),
            origins,
            formation,
            objective,
            rating_target,
            budget,
            points: 0,
            goals_for: 0,
            goals_against: 0,
            top3_streak: 0,
            protected: Vec::new(),
            players: Vec::new(),
            groups: FxHashMap::default(),
        }
    }

    // === Roster registry ===

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    pub fn roster_len(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn group_of(&self, id: PlayerId) -> Option<SquadGroup> {
        self.groups.get(&id).copied()
    }

    /// Members of a group in registry order.
    pub fn group_members(&self, group: SquadGroup) -> impl Iterator<Item = &Player> {
        self.players
            .iter()
            .filter(move |p| self.groups.get(&p.id) == Some(&group))
    }

    pub fn group_len(&self, group: SquadGroup) -> usize {
        self.group_members(group).count()
    }

    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.group_members(SquadGroup::Starters)
    }

    pub fn bench(&self) -> impl Iterator<Item = &Player> {
        self.group_members(SquadGroup::Bench)
    }

    pub fn reserves(&self) -> impl Iterator<Item = &Player> {
        self.group_members(SquadGroup::Reserves)
    }

    /// Starters plus bench, the squad that sets the team rating.
    pub fn first_team(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| {
            matches!(
                self.groups.get(&p.id),
                Some(SquadGroup::Starters) | Some(SquadGroup::Bench)
            )
        })
    }

    pub fn add_player(&mut self, player: Player, group: SquadGroup) {
        self.groups.insert(player.id, group);
        self.players.push(player);
    }

    /// Removes a player from the roster, reconciling the protection list.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        self.groups.remove(&id);
        self.protected.retain(|&p| p != id);
        Some(self.players.remove(idx))
    }

    pub(crate) fn set_group(&mut self, id: PlayerId, group: SquadGroup) {
        if let Some(entry) = self.groups.get_mut(&id) {
            *entry = group;
        }
    }

    /// Invariant check for debug builds: one group per rostered player and
    /// starter/bench caps respected. Reserves may only overflow transiently
    /// inside a market action.
    pub(crate) fn assert_groups(&self) {
        debug_assert_eq!(self.groups.len(), self.players.len());
        debug_assert!(self.group_len(SquadGroup::Starters) <= STARTERS_CAP);
        debug_assert!(self.group_len(SquadGroup::Bench) <= BENCH_CAP);
    }

    // === Ratings ===

    /// Mean first-team rating rounded to one decimal; an empty first team
    /// falls back to the club's rating target.
    pub fn avg_rating(&self) -> f32 {
        let (sum, count) = self
            .first_team()
            .fold((0u32, 0u32), |(s, c), p| (s + p.rating as u32, c + 1));
        if count == 0 {
            return self.rating_target as f32;
        }
        (sum as f32 / count as f32 * 10.0).round() / 10.0
    }

    /// The three formation positions with the lowest average first-team
    /// rating; positions with no incumbent rank worst. An empty roster
    /// returns the fixed default trio.
    pub fn weakest_positions(&self) -> Vec<Position> {
        if self.first_team().next().is_none() {
            return vec![Position::ST, Position::CB, Position::CM];
        }
        let mut scored: Vec<(Position, f32)> = Vec::new();
        for &(pos, _) in self.formation.slots() {
            let (sum, count) = self
                .first_team()
                .filter(|p| p.position == pos)
                .fold((0u32, 0u32), |(s, c), p| (s + p.rating as u32, c + 1));
            let avg = if count == 0 {
                0.0
            } else {
                sum as f32 / count as f32
            };
            scored.push((pos, avg));
        }
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(3).map(|(pos, _)| pos).collect()
    }

    // === Budget ===

    /// Solvency-checked payment. On failure the budget is untouched and the
    /// caller must not apply any roster change.
    pub fn pay(&mut self, amount: i64) -> Result<()> {
        if amount > self.budget {
            return Err(EngineError::InsufficientFunds {
                club: self.name.clone(),
                budget: self.budget,
                amount,
            });
        }
        self.budget -= amount;
        Ok(())
    }

    /// Unchecked payment for transactions that explicitly permit overdraft.
    pub fn pay_allow_negative(&mut self, amount: i64) {
        self.budget -= amount;
    }

    pub fn receive(&mut self, amount: i64) {
        self.budget += amount;
    }

    // === Season upkeep ===

    /// Zeroes season stats, heals every injury and lifts poach protection.
    /// Retirement notices survive until the next window applies them.
    pub fn reset_season_stats(&mut self) {
        self.points = 0;
        self.goals_for = 0;
        self.goals_against = 0;
        self.protected.clear();
        for p in self.players.iter_mut() {
            p.injured_until = None;
        }
    }

    // === Poach protection ===

    pub fn protect(&mut self, id: PlayerId) -> Result<()> {
        if self.player(id).is_none() {
            return Err(EngineError::PlayerNotFound(id));
        }
        if self.protected.contains(&id) {
            return Ok(());
        }
        if self.protected.len() >= PROTECTION_CAP {
            return Err(EngineError::ProtectionFull {
                cap: PROTECTION_CAP,
            });
        }
        self.protected.push(id);
        Ok(())
    }

    pub fn unprotect(&mut self, id: PlayerId) {
        self.protected.retain(|&p| p != id);
    }

    pub fn is_protected(&self, id: PlayerId) -> bool {
        self.protected.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, pos: Position, rating: u8) -> Player {
        Player::new(
            id,
            format!("Player {id}"),
            "England".to_string(),
            pos,
            25,
            rating,
            2,
        )
    }

    fn squad() -> Team {
        let mut team = Team::new(
            "Test FC",
            "Test Park",
            vec!["England".to_string()],
            Formation::F433,
            3,
            80,
            100,
        );
        team.add_player(player(1, Position::GK, 80), SquadGroup::Starters);
        team.add_player(player(2, Position::CB, 78), SquadGroup::Starters);
        team.add_player(player(3, Position::ST, 84), SquadGroup::Bench);
        team.add_player(player(4, Position::CM, 70), SquadGroup::Reserves);
        team
    }

    #[test]
    fn formations_fill_eleven_slots() {
        for f in [Formation::F433, Formation::F442, Formation::F352] {
            assert_eq!(f.slot_list().len(), STARTERS_CAP, "{}", f.code());
        }
    }

    #[test]
    fn formation_codes_round_trip() {
        for f in [Formation::F433, Formation::F442, Formation::F352] {
            assert_eq!(f.code().parse::<Formation>().ok(), Some(f));
        }
        assert!("5-5-5".parse::<Formation>().is_err());
    }

    #[test]
    fn avg_rating_ignores_reserves() {
        let team = squad();
        // (80 + 78 + 84) / 3 = 80.7, the 70-rated reserve does not count.
        assert_eq!(team.avg_rating(), 80.7);
    }

    #[test]
    fn avg_rating_falls_back_to_target_when_empty() {
        let team = Team::new(
            "Empty FC",
            "Nowhere",
            vec!["England".to_string()],
            Formation::F442,
            5,
            82,
            10,
        );
        assert_eq!(team.avg_rating(), 82.0);
    }

    #[test]
    fn weakest_positions_ranks_vacancies_first() {
        let team = squad();
        let weak = team.weakest_positions();
        assert_eq!(weak.len(), 3);
        // GK, CB and ST are covered; everything else averages zero.
        assert!(!weak.contains(&Position::GK));
        assert!(!weak.contains(&Position::ST));
    }

    #[test]
    fn weakest_positions_default_for_empty_roster() {
        let team = Team::new(
            "Empty FC",
            "Nowhere",
            vec!["England".to_string()],
            Formation::F433,
            5,
            80,
            10,
        );
        assert_eq!(
            team.weakest_positions(),
            vec![Position::ST, Position::CB, Position::CM]
        );
    }

    #[test]
    fn pay_rejects_without_mutation() {
        let mut team = squad();
        let err = team.pay(500);
        assert!(matches!(err, Err(EngineError::InsufficientFunds { .. })));
        assert_eq!(team.budget, 100);
        assert!(team.pay(40).is_ok());
        assert_eq!(team.budget, 60);
    }

    #[test]
    fn pay_allow_negative_overdraws() {
        let mut team = squad();
        team.pay_allow_negative(150);
        assert_eq!(team.budget, -50);
    }

    #[test]
    fn remove_player_reconciles_protection() {
        let mut team = squad();
        team.protect(3).unwrap();
        assert!(team.is_protected(3));
        let removed = team.remove_player(3).unwrap();
        assert_eq!(removed.id, 3);
        assert!(!team.is_protected(3));
        assert_eq!(team.roster_len(), 3);
        assert!(team.group_of(3).is_none());
    }

    #[test]
    fn protection_cap_enforced() {
        let mut team = squad();
        team.add_player(player(5, Position::LW, 75), SquadGroup::Reserves);
        team.protect(1).unwrap();
        team.protect(2).unwrap();
        team.protect(3).unwrap();
        assert!(matches!(
            team.protect(4),
            Err(EngineError::ProtectionFull { .. })
        ));
        assert!(matches!(
            team.protect(99),
            Err(EngineError::PlayerNotFound(99))
        ));
    }

    #[test]
    fn reset_clears_stats_injuries_and_protection() {
        let mut team = squad();
        team.points = 12;
        team.goals_for = 9;
        team.goals_against = 4;
        team.protect(1).unwrap();
        team.player_mut(2).unwrap().injured_until =
            chrono::NaiveDate::from_ymd_opt(2025, 10, 1);
        team.player_mut(4).unwrap().retiring = true;

        team.reset_season_stats();
        assert_eq!(team.points, 0);
        assert_eq!(team.goals_for, 0);
        assert_eq!(team.goals_against, 0);
        assert!(team.protected.is_empty());
        assert!(team.player(2).unwrap().injured_until.is_none());
        // Retirement notices are applied by the window, not the reset.
        assert!(team.player(4).unwrap().retiring);
    }

    #[test]
    fn group_moves_are_tracked() {
        let mut team = squad();
        assert_eq!(team.group_of(4), Some(SquadGroup::Reserves));
        team.set_group(4, SquadGroup::Bench);
        assert_eq!(team.group_of(4), Some(SquadGroup::Bench));
        assert_eq!(team.group_len(SquadGroup::Bench), 2);
        team.assert_groups();
    }
}
