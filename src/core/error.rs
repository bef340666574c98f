use thiserror::Error;

use crate::combat::state::CombatPhase;
use crate::core::types::Side;

#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Decision missing for {0:?}")]
    MissingDecision(Side),

    #[error("Combat has already ended")]
    CombatEnded,

    #[error("Operation not valid in phase {0:?}")]
    InvalidPhase(CombatPhase),

    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CombatError>;
