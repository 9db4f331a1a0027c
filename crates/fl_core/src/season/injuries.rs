//! Injury assignment and recovery.

use chrono::{Days, NaiveDate};
use rand::seq::index;
use rand::Rng;

use crate::engine::config::DevelopmentConfig;
use crate::models::Team;
use crate::season::calendar::SeasonDates;

/// Hands a club its season's injuries. Stronger squads play more and absorb
/// more knocks. Victims are drawn without replacement, so each injury hits a
/// distinct player; a roster smaller than the draw caps the count. Each
/// injury gets a duration band and a random offset that keeps it inside the
/// season window where the duration allows.
pub fn assign_injuries<R: Rng>(
    team: &mut Team,
    dates: &SeasonDates,
    rng: &mut R,
    cfg: &DevelopmentConfig,
) {
    let count = if team.avg_rating() < cfg.strong_squad_rating {
        rng.gen_range(cfg.injuries_weak_min..=cfg.injuries_weak_max)
    } else {
        rng.gen_range(cfg.injuries_strong_min..=cfg.injuries_strong_max)
    };
    let count = (count as usize).min(team.roster_len());
    if count == 0 {
        return;
    }
    let span = (dates.season_end - dates.season_start).num_days();

    for victim in index::sample(rng, team.roster_len(), count).iter() {
        let duration = rng.gen_range(cfg.injury_days_min..=cfg.injury_days_max);
        let offset = if duration >= span {
            0
        } else {
            rng.gen_range(0..=span - duration)
        };
        let start = dates.season_start + Days::new(offset as u64);
        let until = start + Days::new(duration as u64);

        let id = team.players()[victim].id;
        let team_name = team.name.clone();
        if let Some(p) = team.player_mut(id) {
            p.injured_until = Some(until);
            log::debug!("{}: {} out until {}", team_name, p.name, until);
        }
    }
}

/// Clears every injury whose window has elapsed as of `date`.
pub fn recover_players(team: &mut Team, date: NaiveDate) {
    for p in team.players_mut() {
        if matches!(p.injured_until, Some(until) if date >= until) {
            p.injured_until = None;
        }
    }
}
