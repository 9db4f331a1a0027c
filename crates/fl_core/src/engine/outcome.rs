//! Rating and outcome model.
//!
//! Two first-team ratings and a venue become win/draw/loss probabilities; a
//! single uniform draw picks the outcome and fixed discrete distributions
//! pick a believable scoreline. No event-by-event simulation.
//!
//! The probability functions are pure so they unit-test without a league.

use rand::Rng;

use crate::engine::config::OutcomeConfig;
use crate::models::{Team, Venue};

/// Goal distributions, as weighted small-integer sets.
const WINNER_GOALS: [u8; 6] = [1, 2, 2, 3, 3, 4];
const LOSER_GOALS: [u8; 5] = [0, 0, 1, 1, 2];
const DRAW_GOALS: [u8; 5] = [0, 1, 1, 2, 2];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probabilities {
    pub win_a: f64,
    pub draw: f64,
    pub win_b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WinA,
    Draw,
    WinB,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Win/draw/loss probabilities for side A against side B.
///
/// The home side gets a fixed rating offset, the gap is clamped to keep
/// confidence bounded, the draw chance shrinks as the gap widens, and the
/// weaker side is floored while the stronger side takes the exact remainder
/// so the triple always sums to 1.
pub fn outcome_probabilities(
    rating_a: f32,
    rating_b: f32,
    venue: Venue,
    cfg: &OutcomeConfig,
) -> Probabilities {
    let (eff_a, eff_b) = match venue {
        Venue::HomeA => (rating_a + cfg.home_advantage, rating_b - cfg.home_advantage),
        Venue::HomeB => (rating_a - cfg.home_advantage, rating_b + cfg.home_advantage),
        Venue::Neutral => (rating_a, rating_b),
    };
    let gap = f64::from((eff_a - eff_b).clamp(-cfg.gap_clamp, cfg.gap_clamp));

    let draw = (cfg.draw_base - cfg.draw_slope * gap.abs()).clamp(cfg.draw_floor, cfg.draw_base);
    let win_a = sigmoid(gap / cfg.logistic_scale) * (1.0 - draw);
    let win_b = 1.0 - draw - win_a;

    let (win_a, win_b) = if win_a < win_b {
        let floored = win_a.max(cfg.weaker_floor);
        (floored, 1.0 - draw - floored)
    } else {
        let floored = win_b.max(cfg.weaker_floor);
        (1.0 - draw - floored, floored)
    };

    Probabilities { win_a, draw, win_b }
}

/// One uniform draw against the cumulative probabilities.
pub fn sample_outcome<R: Rng>(probs: Probabilities, rng: &mut R) -> MatchOutcome {
    let roll: f64 = rng.gen();
    if roll < probs.win_a {
        MatchOutcome::WinA
    } else if roll < probs.win_a + probs.draw {
        MatchOutcome::Draw
    } else {
        MatchOutcome::WinB
    }
}

/// Goals for (A, B) conditional on the outcome. The loser is forced strictly
/// below the winner; draws share one sampled value.
pub fn sample_scoreline<R: Rng>(outcome: MatchOutcome, rng: &mut R) -> (u8, u8) {
    match outcome {
        MatchOutcome::Draw => {
            let goals = DRAW_GOALS[rng.gen_range(0..DRAW_GOALS.len())];
            (goals, goals)
        }
        MatchOutcome::WinA | MatchOutcome::WinB => {
            let winner = WINNER_GOALS[rng.gen_range(0..WINNER_GOALS.len())];
            let mut loser = LOSER_GOALS[rng.gen_range(0..LOSER_GOALS.len())];
            if loser >= winner {
                loser = winner - 1;
            }
            match outcome {
                MatchOutcome::WinA => (winner, loser),
                _ => (loser, winner),
            }
        }
    }
}

/// Resolves one fixture between `clubs[a]` and `clubs[b]`, crediting points
/// (3/1/0) and goals to both sides. Returns the scoreline as (goals A,
/// goals B).
pub fn simulate_match<R: Rng>(
    clubs: &mut [Team],
    a: usize,
    b: usize,
    venue: Venue,
    rng: &mut R,
    cfg: &OutcomeConfig,
) -> (u8, u8) {
    let probs = outcome_probabilities(clubs[a].avg_rating(), clubs[b].avg_rating(), venue, cfg);
    let outcome = sample_outcome(probs, rng);
    let (goals_a, goals_b) = sample_scoreline(outcome, rng);

    let (pts_a, pts_b) = match outcome {
        MatchOutcome::WinA => (3, 0),
        MatchOutcome::Draw => (1, 1),
        MatchOutcome::WinB => (0, 3),
    };
    clubs[a].points += pts_a;
    clubs[a].goals_for += u32::from(goals_a);
    clubs[a].goals_against += u32::from(goals_b);
    clubs[b].points += pts_b;
    clubs[b].goals_for += u32::from(goals_b);
    clubs[b].goals_against += u32::from(goals_a);

    log::debug!(
        "{} {}-{} {} ({:?})",
        clubs[a].name,
        goals_a,
        goals_b,
        clubs[b].name,
        venue
    );
    (goals_a, goals_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cfg() -> OutcomeConfig {
        OutcomeConfig::default()
    }

    proptest! {
        #[test]
        fn probabilities_are_valid(
            ra in 50u8..=95,
            rb in 50u8..=95,
            venue in prop_oneof![
                Just(Venue::HomeA),
                Just(Venue::HomeB),
                Just(Venue::Neutral),
            ],
        ) {
            let p = outcome_probabilities(ra as f32, rb as f32, venue, &cfg());
            prop_assert!((0.0..=1.0).contains(&p.win_a));
            prop_assert!((0.0..=1.0).contains(&p.draw));
            prop_assert!((0.0..=1.0).contains(&p.win_b));
            prop_assert!((p.win_a + p.draw + p.win_b - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn equal_ratings_are_symmetric() {
        let p = outcome_probabilities(82.0, 82.0, Venue::Neutral, &cfg());
        assert!((p.win_a - p.win_b).abs() < 1e-9);
        assert!((p.draw - 0.28).abs() < 1e-9);
    }

    #[test]
    fn closer_ratings_draw_more_often() {
        let close = outcome_probabilities(82.0, 82.0, Venue::Neutral, &cfg());
        let wide = outcome_probabilities(82.0, 60.0, Venue::Neutral, &cfg());
        assert!(close.draw > wide.draw);
        assert!((wide.draw - 0.12).abs() < 1e-9); // floored by the clamp
    }

    #[test]
    fn home_advantage_shifts_the_win_chance() {
        let neutral = outcome_probabilities(80.0, 80.0, Venue::Neutral, &cfg());
        let at_home = outcome_probabilities(80.0, 80.0, Venue::HomeA, &cfg());
        let away = outcome_probabilities(80.0, 80.0, Venue::HomeB, &cfg());
        assert!(at_home.win_a > neutral.win_a);
        assert!(away.win_a < neutral.win_a);
    }

    #[test]
    fn weaker_side_keeps_the_floor() {
        let p = outcome_probabilities(95.0, 50.0, Venue::HomeA, &cfg());
        assert!((p.win_b - 0.12).abs() < 1e-9);
        assert!((p.win_a + p.draw + p.win_b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scorelines_respect_the_outcome() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let (a, b) = sample_scoreline(MatchOutcome::WinA, &mut rng);
            assert!(a > b);
            assert!(a <= 4);
            let (a, b) = sample_scoreline(MatchOutcome::WinB, &mut rng);
            assert!(b > a);
            let (a, b) = sample_scoreline(MatchOutcome::Draw, &mut rng);
            assert_eq!(a, b);
            assert!(a <= 2);
        }
    }

    #[test]
    fn simulate_match_updates_both_tables() {
        use crate::models::{Formation, Player, Position, SquadGroup};

        let mut clubs = Vec::new();
        for (i, name) in ["Alpha", "Bravo"].iter().enumerate() {
            let mut t = Team::new(
                *name,
                "Ground",
                vec!["England".to_string()],
                Formation::F433,
                3,
                80,
                50,
            );
            t.add_player(
                Player::new(i as u32 + 1, format!("GK {i}"), "England".into(), Position::GK, 25, 80, 2),
                SquadGroup::Starters,
            );
            clubs.push(t);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (ga, gb) = simulate_match(&mut clubs, 0, 1, Venue::HomeA, &mut rng, &cfg());
        assert_eq!(clubs[0].goals_for, u32::from(ga));
        assert_eq!(clubs[0].goals_against, u32::from(gb));
        assert_eq!(clubs[1].goals_for, u32::from(gb));
        let total = clubs[0].points + clubs[1].points;
        assert!(total == 2 || total == 3);
    }
}
