pub mod config;
pub mod outcome;
pub mod scheduler;
pub mod squad;

pub use outcome::{outcome_probabilities, simulate_match, MatchOutcome, Probabilities};
pub use scheduler::{assign_dates, round_robin_pairings};
pub use squad::organize_squad;
