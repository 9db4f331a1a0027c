//! Player progression and retirement.

use rand::Rng;

use crate::engine::config::DevelopmentConfig;
use crate::models::{Player, PotentialRange, Team};

/// Season-end progression for a whole roster: young players climb toward
/// their potential, veterans fade, everyone ages a year, and some hidden
/// potential ranges become public.
pub fn progress_players<R: Rng>(team: &mut Team, rng: &mut R, cfg: &DevelopmentConfig) {
    for p in team.players_mut() {
        if p.age < cfg.youth_age {
            let growth = rng.gen_range(1..=cfg.youth_growth_max);
            p.rating = p.rating.saturating_add(growth).min(p.potential);
        } else if p.age < cfg.decline_age {
            let growth = rng.gen_range(0..=cfg.prime_growth_max);
            p.rating = p.rating.saturating_add(growth).min(p.potential);
        } else {
            let loss = rng.gen_range(0..=cfg.decline_max);
            p.rating = p.rating.saturating_sub(loss).max(cfg.rating_floor);
        }

        if !p.potential_revealed && rng.gen_bool(cfg.reveal_p) {
            p.potential_revealed = true;
        }
        p.age += 1;
        p.potential_range = PotentialRange::for_potential(p.potential);
    }
}

/// Flags retirements at season end: mandatory at the hard age, a coin flip
/// beyond the soft age. Flagged players stay rostered until the next
/// window applies the notices.
pub fn flag_retirements<R: Rng>(team: &mut Team, rng: &mut R, cfg: &DevelopmentConfig) {
    let team_name = team.name.clone();
    for p in team.players_mut() {
        if p.retiring {
            continue;
        }
        if p.age >= cfg.mandatory_retire_age {
            p.retiring = true;
        } else if p.age > cfg.soft_retire_age && rng.gen_bool(cfg.soft_retire_p) {
            p.retiring = true;
        }
        if p.retiring {
            log::debug!("{}: {} announces retirement at {}", team_name, p.name, p.age);
        }
    }
}

/// Removes every player carrying a retirement notice. Returns the leavers.
pub fn apply_retirements(team: &mut Team) -> Vec<Player> {
    let ids: Vec<_> = team
        .players()
        .iter()
        .filter(|p| p.retiring)
        .map(|p| p.id)
        .collect();
    let mut gone = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(p) = team.remove_player(id) {
            gone.push(p);
        }
    }
    if !gone.is_empty() {
        log::info!("{}: {} players retire", team.name, gone.len());
    }
    gone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Formation, Position, SquadGroup};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team_with_ages(ages: &[u8]) -> Team {
        let mut t = Team::new(
            "Test FC",
            "Test Park",
            vec!["England".to_string()],
            Formation::F433,
            3,
            80,
            50,
        );
        for (i, &age) in ages.iter().enumerate() {
            t.add_player(
                Player::new(
                    i as u32 + 1,
                    format!("P{}", i + 1),
                    "England".into(),
                    Position::CM,
                    age,
                    78,
                    10,
                ),
                SquadGroup::Reserves,
            );
        }
        t
    }

    #[test]
    fn young_players_grow_and_veterans_fade() {
        let mut t = team_with_ages(&[17, 25, 36]);
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        progress_players(&mut t, &mut rng, &DevelopmentConfig::default());

        let youth = t.player(1).unwrap();
        assert!(youth.rating > 78, "youth must grow");
        assert!(youth.rating <= youth.potential);
        assert_eq!(youth.age, 18);

        let prime = t.player(2).unwrap();
        assert!(prime.rating >= 78);
        assert!(prime.rating <= prime.potential);

        let veteran = t.player(3).unwrap();
        assert!(veteran.rating <= 78);
        assert_eq!(veteran.age, 37);
    }

    #[test]
    fn growth_is_capped_at_potential() {
        let mut t = team_with_ages(&[17]);
        t.player_mut(1).unwrap().potential = 79;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..5 {
            progress_players(&mut t, &mut rng, &DevelopmentConfig::default());
        }
        assert_eq!(t.player(1).unwrap().rating, 79);
    }

    #[test]
    fn decline_never_breaks_the_floor() {
        let mut t = team_with_ages(&[38]);
        t.player_mut(1).unwrap().rating = 51;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..10 {
            progress_players(&mut t, &mut rng, &DevelopmentConfig::default());
        }
        assert_eq!(t.player(1).unwrap().rating, 50);
    }

    #[test]
    fn reveal_rolls_eventually_fire() {
        let mut t = team_with_ages(&[25]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..40 {
            progress_players(&mut t, &mut rng, &DevelopmentConfig::default());
        }
        assert!(t.player(1).unwrap().potential_revealed);
    }

    #[test]
    fn forty_year_old_always_retires() {
        for seed in 0..10 {
            let mut t = team_with_ages(&[40]);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            flag_retirements(&mut t, &mut rng, &DevelopmentConfig::default());
            assert!(t.player(1).unwrap().retiring, "seed {seed}");
        }
    }

    #[test]
    fn soft_retirement_is_probabilistic() {
        let mut retired = 0;
        for seed in 0..50 {
            let mut t = team_with_ages(&[35]);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            flag_retirements(&mut t, &mut rng, &DevelopmentConfig::default());
            if t.player(1).unwrap().retiring {
                retired += 1;
            }
        }
        assert!(retired > 10, "half the 35-year-olds should go");
        assert!(retired < 40);
    }

    #[test]
    fn young_players_never_retire() {
        let mut t = team_with_ages(&[22, 30, 33]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        flag_retirements(&mut t, &mut rng, &DevelopmentConfig::default());
        assert!(t.players().iter().all(|p| !p.retiring));
    }

    #[test]
    fn notices_are_applied_at_the_window() {
        let mut t = team_with_ages(&[40, 25]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        flag_retirements(&mut t, &mut rng, &DevelopmentConfig::default());
        let gone = apply_retirements(&mut t);
        assert_eq!(gone.len(), 1);
        assert_eq!(gone[0].id, 1);
        assert_eq!(t.roster_len(), 1);
    }
}
