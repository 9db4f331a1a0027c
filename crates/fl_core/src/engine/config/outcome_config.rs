//! Match-outcome model parameters.

use serde::{Deserialize, Serialize};

/// Converts two first-team ratings and a venue into win/draw/loss
/// probabilities. See `engine::outcome` for the model itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeConfig {
    /// Rating points added to the home side and subtracted from the away
    /// side (default: 1.4). No adjustment at a neutral venue.
    pub home_advantage: f32,
    /// Effective rating gaps beyond this are clamped (default: 15.0).
    pub gap_clamp: f32,
    /// Draw probability at a zero gap, also its ceiling (default: 0.28).
    pub draw_base: f64,
    /// Draw probability lost per point of absolute gap (default: 0.015).
    pub draw_slope: f64,
    /// Draw probability floor (default: 0.12).
    pub draw_floor: f64,
    /// Logistic scale for the win curve; larger is flatter (default: 5.5).
    pub logistic_scale: f64,
    /// Floor for the weaker side's win probability (default: 0.12). The
    /// stronger side takes the exact remainder so the triple sums to 1.
    pub weaker_floor: f64,
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            home_advantage: 1.4,
            gap_clamp: 15.0,
            draw_base: 0.28,
            draw_slope: 0.015,
            draw_floor: 0.12,
            logistic_scale: 5.5,
            weaker_floor: 0.12,
        }
    }
}
