//! Combatant snapshots
//!
//! The state machine owns a copy of each fighter for the duration of the
//! encounter. The host's character records stay untouched until combat
//! ends and final health is read back from the summary.

use serde::{Deserialize, Serialize};

use crate::combat::advantage::CombatType;

/// One stat value per combat type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TypeStats {
    pub heart: i32,
    pub body: i32,
    pub mind: i32,
}

impl TypeStats {
    pub fn new(heart: i32, body: i32, mind: i32) -> Self {
        Self { heart, body, mind }
    }

    /// Same value for all three types
    pub fn uniform(value: i32) -> Self {
        Self::new(value, value, value)
    }

    pub fn get(&self, combat_type: CombatType) -> i32 {
        match combat_type {
            CombatType::Heart => self.heart,
            CombatType::Body => self.body,
            CombatType::Mind => self.mind,
        }
    }
}

/// A fighter as the engine sees it: health plus per-type stat tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    /// Current health, always in [0, max_health]
    pub health: i32,
    pub max_health: i32,
    /// Offensive stat per combat type
    pub offense: TypeStats,
    /// Defensive stat per combat type
    pub defense: TypeStats,
}

impl Combatant {
    /// New combatant at full health
    pub fn new(name: impl Into<String>, max_health: i32, offense: TypeStats, defense: TypeStats) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            offense,
            defense,
        }
    }

    /// Apply damage, clamped so health never leaves [0, max_health]
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).clamp(0, self.max_health);
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}
