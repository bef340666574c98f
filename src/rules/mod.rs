//! Tunable combat rules
//!
//! Every number the resolver consults lives here as a named field, seeded
//! from [`crate::combat::constants`] and overridable from a TOML file.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    CRIT_MULTIPLIER, DEFENDER_ADVANTAGE_MULTIPLIER, DEFENDER_DISADVANTAGE_MULTIPLIER,
    DEFENDER_NEUTRAL_MULTIPLIER, FRIENDSHIP_MAX, PASSIVE_DEFENSE_MULTIPLIER,
};
use crate::core::error::{CombatError, Result};

pub use loader::{load_tuning, parse_tuning};

/// Named thresholds for the combat engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Defense multiplier for a contest loser (no active stance)
    pub passive_multiplier: f32,
    /// Active defender holding the type advantage
    pub defender_advantage_multiplier: f32,
    /// Active defender on even type footing
    pub defender_neutral_multiplier: f32,
    /// Active defender at a type disadvantage
    pub defender_disadvantage_multiplier: f32,
    /// Applied only when a caller flags a critical hit
    pub crit_multiplier: f32,
    /// Mutual-defend rounds required for a peaceful resolution
    pub friendship_max: u8,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            passive_multiplier: PASSIVE_DEFENSE_MULTIPLIER,
            defender_advantage_multiplier: DEFENDER_ADVANTAGE_MULTIPLIER,
            defender_neutral_multiplier: DEFENDER_NEUTRAL_MULTIPLIER,
            defender_disadvantage_multiplier: DEFENDER_DISADVANTAGE_MULTIPLIER,
            crit_multiplier: CRIT_MULTIPLIER,
            friendship_max: FRIENDSHIP_MAX,
        }
    }
}

impl CombatTuning {
    /// Reject configurations the resolver cannot run under
    pub fn validate(&self) -> Result<()> {
        if self.friendship_max == 0 {
            return Err(CombatError::InvalidTuning(
                "friendship_max must be at least 1".into(),
            ));
        }
        let multipliers = [
            ("passive_multiplier", self.passive_multiplier),
            (
                "defender_advantage_multiplier",
                self.defender_advantage_multiplier,
            ),
            (
                "defender_neutral_multiplier",
                self.defender_neutral_multiplier,
            ),
            (
                "defender_disadvantage_multiplier",
                self.defender_disadvantage_multiplier,
            ),
            ("crit_multiplier", self.crit_multiplier),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value <= 0.0 {
                return Err(CombatError::InvalidTuning(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
