//! Season lifecycle.
//!
//! [`League`] owns the clubs, the seeded RNG, the id and name sources and
//! the engine configuration, and drives one season end to end: reset, youth
//! intake, the transfer window, injuries, the fixture loop, standings and
//! economy, retirement, progression, rollover and manager reassignment.
//! Every phase runs strictly in sequence; every random draw flows through
//! the league's own generator.

pub mod calendar;
pub mod development;
pub mod economy;
pub mod injuries;

pub use calendar::{season_dates, season_label, SeasonDates};

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::config::EngineConfig;
use crate::engine::outcome::simulate_match;
use crate::engine::scheduler::{assign_dates, round_robin_pairings};
use crate::engine::squad::organize_squad;
use crate::error::{EngineError, Result};
use crate::gen::names::NameGen;
use crate::gen::squads::{build_club, youth_intake, ClubSeed};
use crate::market::free_agents::generate_pool;
use crate::market::poach::{poach_player, run_poach_phase};
use crate::market::signing::{release_player, run_club_window, sign_player};
use crate::market::trim::trim_reserves;
use crate::models::{
    standings, Fixture, MatchResult, Player, PlayerId, PlayerIdGen, SeasonSummary, StandingsRow,
    Team,
};
use crate::season::development::{apply_retirements, flag_retirements, progress_players};
use crate::season::economy::{apply_season_economy, rollover_budgets};
use crate::season::injuries::{assign_injuries, recover_players};

pub struct League {
    clubs: Vec<Team>,
    pub year: i32,
    /// Index of the club under management.
    pub focus: usize,
    config: EngineConfig,
    rng: ChaCha8Rng,
    ids: PlayerIdGen,
    names: NameGen,
    /// Club order of the previous season's table; feeds the poach rolls.
    prev_table: Vec<usize>,
    /// The current window's free agents.
    pub free_agents: Vec<Player>,
    /// Scorelines of the most recently simulated season.
    pub last_results: Vec<MatchResult>,
    pub history: Vec<SeasonSummary>,
}

impl League {
    /// Founds the league: builds every club from its seed and organizes the
    /// opening squads. `seed` fixes the entire simulation.
    pub fn new(
        seeds: &[ClubSeed],
        focus: usize,
        year: i32,
        seed: u64,
        config: EngineConfig,
    ) -> Result<Self> {
        if seeds.len() < 2 {
            return Err(EngineError::InvalidParameter(
                "a league needs at least two clubs".to_string(),
            ));
        }
        if focus >= seeds.len() {
            return Err(EngineError::ClubNotFound(focus));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut ids = PlayerIdGen::new();
        let mut names = NameGen::new();
        let mut clubs: Vec<Team> = seeds
            .iter()
            .map(|s| build_club(s, &mut ids, &mut names, &mut rng))
            .collect();
        for club in &mut clubs {
            organize_squad(club, None, &config.squad);
        }

        let prev_table = (0..clubs.len()).collect();
        log::info!("league founded: {} clubs, season {}", clubs.len(), year);
        Ok(Self {
            clubs,
            year,
            focus,
            config,
            rng,
            ids,
            names,
            prev_table,
            free_agents: Vec::new(),
            last_results: Vec::new(),
            history: Vec::new(),
        })
    }

    pub fn clubs(&self) -> &[Team] {
        &self.clubs
    }

    pub fn club(&self, index: usize) -> Result<&Team> {
        self.clubs.get(index).ok_or(EngineError::ClubNotFound(index))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn standings(&self) -> Vec<StandingsRow> {
        standings(&self.clubs)
    }

    /// Runs one full season and hands back its summary.
    pub fn run_season(&mut self) -> Result<SeasonSummary> {
        let dates = season_dates(self.year);
        let label = season_label(self.year);
        log::info!("=== season {label} ===");

        self.reset_phase();
        self.youth_phase();
        self.window_phase();
        self.injury_phase(&dates);
        self.match_phase(&dates)?;

        let table = self.standings();
        apply_season_economy(&mut self.clubs, &table, &mut self.rng, &self.config.economy);
        for club in &mut self.clubs {
            flag_retirements(club, &mut self.rng, &self.config.development);
            progress_players(club, &mut self.rng, &self.config.development);
        }
        rollover_budgets(&mut self.clubs, &self.config.economy);
        self.reassign_manager(&table);

        let summary = SeasonSummary {
            label,
            champion: table[0].name.clone(),
            focus_club: self.clubs[self.focus].name.clone(),
            table: table.clone(),
        };
        self.prev_table = table.iter().map(|r| r.club).collect();
        self.history.push(summary.clone());
        self.year += 1;
        Ok(summary)
    }

    fn reset_phase(&mut self) {
        for club in &mut self.clubs {
            club.reset_season_stats();
        }
    }

    fn youth_phase(&mut self) {
        for i in 0..self.clubs.len() {
            youth_intake(
                &mut self.clubs[i],
                &mut self.ids,
                &mut self.names,
                &mut self.rng,
                i == self.focus,
            );
        }
    }

    /// Transfer window: fresh free agents, the poach rolls against the
    /// previous table, each club's signings in shuffled order, then pending
    /// retirements leave.
    fn window_phase(&mut self) {
        self.free_agents = generate_pool(
            &mut self.ids,
            &mut self.names,
            &mut self.rng,
            &self.config.market,
        );
        run_poach_phase(
            &mut self.clubs,
            self.focus,
            &self.prev_table,
            &mut self.rng,
            &self.config.market,
        );

        let mut order: Vec<usize> = (0..self.clubs.len()).collect();
        order.shuffle(&mut self.rng);
        for i in order {
            run_club_window(
                &mut self.clubs[i],
                &mut self.free_agents,
                &mut self.rng,
                &self.config,
            );
            organize_squad(&mut self.clubs[i], None, &self.config.squad);
            trim_reserves(&mut self.clubs[i], &mut self.rng, &self.config.market);
        }

        for club in &mut self.clubs {
            apply_retirements(club);
        }
    }

    fn injury_phase(&mut self, dates: &SeasonDates) {
        for club in &mut self.clubs {
            assign_injuries(club, dates, &mut self.rng, &self.config.development);
        }
    }

    /// Plays the season's fixtures in calendar order, recovering elapsed
    /// injuries and re-organizing both squads before each match.
    fn match_phase(&mut self, dates: &SeasonDates) -> Result<()> {
        let fixtures = self.build_fixtures(dates)?;
        self.last_results = Vec::with_capacity(fixtures.len());

        for fixture in fixtures {
            for side in [fixture.a, fixture.b] {
                recover_players(&mut self.clubs[side], fixture.date);
                organize_squad(&mut self.clubs[side], Some(fixture.date), &self.config.squad);
            }
            let (goals_a, goals_b) = simulate_match(
                &mut self.clubs,
                fixture.a,
                fixture.b,
                fixture.venue,
                &mut self.rng,
                &self.config.outcome,
            );
            self.last_results.push(MatchResult {
                fixture,
                goals_a,
                goals_b,
            });
        }
        Ok(())
    }

    fn build_fixtures(&mut self, dates: &SeasonDates) -> Result<Vec<Fixture>> {
        let mut pairings = round_robin_pairings(self.clubs.len());
        pairings.shuffle(&mut self.rng);
        assign_dates(
            &pairings,
            dates.season_start,
            dates.season_end,
            &self.config.schedule,
        )
    }

    /// The fixture list for the season about to run, as the simulation loop
    /// would schedule it.
    pub fn preview_schedule(&mut self) -> Result<Vec<Fixture>> {
        let dates = season_dates(self.year);
        self.build_fixtures(&dates)
    }

    /// A board that watched its objective slip away may hand the focus
    /// manager to a struggling club instead.
    fn reassign_manager(&mut self, table: &[StandingsRow]) {
        let Some(row) = table.iter().find(|r| r.club == self.focus) else {
            return;
        };
        let missed = row.rank > self.clubs[self.focus].objective as usize;
        if !missed || !self.rng.gen_bool(self.config.economy.manager_switch_p) {
            return;
        }
        // In table order, so the second-to-last club is offered first.
        let bottom_two = &table[table.len().saturating_sub(2)..];
        for candidate in bottom_two {
            if candidate.club != self.focus {
                log::info!(
                    "the board moves the manager from {} to {}",
                    self.clubs[self.focus].name,
                    self.clubs[candidate.club].name
                );
                self.focus = candidate.club;
                return;
            }
        }
    }

    // === Front-end operations ===

    /// Signs a free agent into a club's reserves. Solvency-checked.
    pub fn sign(&mut self, club: usize, player: PlayerId) -> Result<()> {
        if club >= self.clubs.len() {
            return Err(EngineError::ClubNotFound(club));
        }
        sign_player(&mut self.clubs[club], &mut self.free_agents, player)?;
        organize_squad(&mut self.clubs[club], None, &self.config.squad);
        Ok(())
    }

    /// Releases a rostered player back into the free-agent pool for the
    /// flat fee.
    pub fn release(&mut self, club: usize, player: PlayerId) -> Result<()> {
        if club >= self.clubs.len() {
            return Err(EngineError::ClubNotFound(club));
        }
        let gone = release_player(
            &mut self.clubs[club],
            player,
            self.config.market.release_fee,
        )?;
        self.free_agents.push(gone);
        organize_squad(&mut self.clubs[club], None, &self.config.squad);
        Ok(())
    }

    /// Buys a player straight off another club's roster at the premium.
    /// Solvency-checked; the buyer's reserves must have room.
    pub fn poach(&mut self, buyer: usize, seller: usize, player: PlayerId) -> Result<i64> {
        let price = poach_player(
            &mut self.clubs,
            buyer,
            seller,
            player,
            &self.config.market,
        )?;
        organize_squad(&mut self.clubs[buyer], None, &self.config.squad);
        organize_squad(&mut self.clubs[seller], None, &self.config.squad);
        Ok(price)
    }

    /// Flags a player non-poachable for the season.
    pub fn protect(&mut self, club: usize, player: PlayerId) -> Result<()> {
        if club >= self.clubs.len() {
            return Err(EngineError::ClubNotFound(club));
        }
        self.clubs[club].protect(player)
    }

    /// Re-partitions a club's squad, optionally as of a date for injury
    /// filtering.
    pub fn organize(&mut self, club: usize, as_of: Option<NaiveDate>) -> Result<()> {
        if club >= self.clubs.len() {
            return Err(EngineError::ClubNotFound(club));
        }
        organize_squad(&mut self.clubs[club], as_of, &self.config.squad);
        Ok(())
    }
}
