//! Market valuation.
//!
//! Table-driven estimate of what a player costs, in millions. A rating base
//! that doubles roughly every five points above 70, scaled by an age curve
//! that peaks in the early-to-mid twenties and falls away steeply after 31.

/// Millions a rating is worth for a player in his prime.
fn rating_base(rating: u8) -> f64 {
    match rating {
        0..=59 => 1.0,
        60..=64 => 2.0,
        65..=69 => 4.0,
        70..=74 => 8.0,
        75..=79 => 16.0,
        80..=84 => 32.0,
        85..=89 => 64.0,
        90..=92 => 100.0,
        _ => 140.0,
    }
}

fn age_factor(age: u8) -> f64 {
    match age {
        0..=17 => 0.7,
        18..=21 => 0.9,
        22..=26 => 1.0,
        27..=29 => 0.9,
        30..=31 => 0.7,
        32..=33 => 0.45,
        34..=35 => 0.25,
        _ => 0.1,
    }
}

/// Estimated market value in millions, never below 1.
pub fn value(age: u8, rating: u8) -> i64 {
    ((rating_base(rating) * age_factor(age)).round() as i64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_below_one() {
        for age in 15..=45 {
            for rating in 50..=95 {
                assert!(value(age, rating) >= 1, "value({age}, {rating})");
            }
        }
    }

    #[test]
    fn rises_with_rating_at_fixed_age() {
        for rating in 50..95 {
            assert!(value(24, rating + 1) >= value(24, rating));
        }
        assert!(value(24, 90) > value(24, 75));
    }

    #[test]
    fn decays_for_veterans_at_fixed_rating() {
        assert!(value(24, 85) > value(31, 85));
        assert!(value(31, 85) > value(34, 85));
        assert!(value(34, 85) > value(38, 85));
    }

    #[test]
    fn prime_elite_is_expensive() {
        assert_eq!(value(24, 91), 100);
        assert_eq!(value(36, 91), 10);
    }
}
