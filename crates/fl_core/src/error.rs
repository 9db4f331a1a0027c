use chrono::NaiveDate;
use thiserror::Error;

use crate::models::PlayerId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("insufficient funds: {club} holds {budget}M, needs {amount}M")]
    InsufficientFunds {
        club: String,
        budget: i64,
        amount: i64,
    },

    #[error("no valid match days between {start} and {end}")]
    NoMatchDays { start: NaiveDate, end: NaiveDate },

    #[error("unknown formation: {0}")]
    UnknownFormation(String),

    #[error("unknown position: {0}")]
    UnknownPosition(String),

    #[error("player {0} is not on the roster")]
    PlayerNotFound(PlayerId),

    #[error("player {0} is poach-protected this season")]
    PlayerProtected(PlayerId),

    #[error("club index {0} out of range")]
    ClubNotFound(usize),

    #[error("reserves are full ({cap} players)")]
    ReservesFull { cap: usize },

    #[error("protection list is full ({cap} players)")]
    ProtectionFull { cap: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
