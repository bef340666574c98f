//! Combat state machine
//!
//! Owns the per-encounter snapshots, the phase cycle, the friendship
//! counter and the battle log. Resolution never mutates in place: the
//! caller holds a [`CombatState`] value, and `resolve_round` hands back
//! the next one.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::combat::advantage::CombatType;
use crate::combat::combatant::Combatant;
use crate::combat::decision::{ActionChoice, Decision, PendingDecision};
use crate::combat::dice::RollSource;
use crate::combat::log::{summarize, BattleLogEntry};
use crate::combat::resolution;
use crate::core::error::{CombatError, Result};
use crate::core::types::Side;
use crate::rules::CombatTuning;

/// Where the encounter stands within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatPhase {
    /// Collecting the player's type
    ChoosingType,
    /// Type locked, collecting the player's action
    ChoosingAction,
    /// Both decisions present, ready to resolve
    Resolving,
    /// An end condition fired
    Ended,
}

/// Terminal outcome of an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    PlayerVictory,
    EnemyVictory,
    PeacefulResolution,
}

/// What the host reads back when combat ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatSummary {
    pub outcome: CombatOutcome,
    pub player_health: i32,
    pub enemy_health: i32,
    /// Rounds actually resolved
    pub rounds: u32,
    pub friendship: u8,
}

/// Aggregate combat state for one encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatState {
    pub active: bool,
    pub phase: CombatPhase,
    /// 1-based; increments only after a round resolves without ending combat
    pub round: u32,
    /// Mutual-defend counter; combat ends peacefully at the tuned maximum
    pub friendship: u8,
    pub player: Combatant,
    pub enemy: Combatant,
    pub player_decision: PendingDecision,
    pub enemy_decision: PendingDecision,
    /// Append-only; one entry per resolved round
    pub log: Vec<BattleLogEntry>,
    pub outcome: Option<CombatOutcome>,
    pub tuning: CombatTuning,
}

impl CombatState {
    /// Begin an encounter with default tuning
    pub fn start(player: Combatant, enemy: Combatant) -> Self {
        Self::start_with_tuning(player, enemy, CombatTuning::default())
    }

    /// Begin an encounter with explicit tuning
    pub fn start_with_tuning(player: Combatant, enemy: Combatant, tuning: CombatTuning) -> Self {
        Self {
            active: true,
            phase: CombatPhase::ChoosingType,
            round: crate::combat::constants::STARTING_ROUND,
            friendship: 0,
            player,
            enemy,
            player_decision: PendingDecision::Empty,
            enemy_decision: PendingDecision::Empty,
            log: Vec::new(),
            outcome: None,
            tuning,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.active && self.phase != CombatPhase::Ended
    }

    fn ensure_ongoing(&self) -> Result<()> {
        if self.is_ongoing() {
            Ok(())
        } else {
            Err(CombatError::CombatEnded)
        }
    }

    /// Stage 1 of the player's decision
    pub fn submit_player_type(&mut self, combat_type: CombatType) -> Result<()> {
        self.ensure_ongoing()?;
        if self.phase != CombatPhase::ChoosingType {
            return Err(CombatError::InvalidPhase(self.phase));
        }
        self.player_decision = PendingDecision::TypeChosen(combat_type);
        self.phase = CombatPhase::ChoosingAction;
        Ok(())
    }

    /// Stage 2 of the player's decision
    pub fn submit_player_action(&mut self, action: ActionChoice) -> Result<()> {
        self.ensure_ongoing()?;
        let combat_type = match self.player_decision {
            PendingDecision::TypeChosen(combat_type) => combat_type,
            _ => return Err(CombatError::InvalidPhase(self.phase)),
        };
        self.player_decision = PendingDecision::Complete(Decision::new(combat_type, action));
        self.refresh_phase();
        Ok(())
    }

    /// Submit the player's full decision in one step
    pub fn submit_player_decision(&mut self, decision: Decision) -> Result<()> {
        self.ensure_ongoing()?;
        if self.player_decision.is_complete() {
            return Err(CombatError::InvalidPhase(self.phase));
        }
        self.player_decision = PendingDecision::Complete(decision);
        self.refresh_phase();
        Ok(())
    }

    /// Submit the enemy's decision (typically drawn from a policy)
    pub fn submit_enemy_decision(&mut self, decision: Decision) -> Result<()> {
        self.ensure_ongoing()?;
        if self.enemy_decision.is_complete() {
            return Err(CombatError::InvalidPhase(self.phase));
        }
        self.enemy_decision = PendingDecision::Complete(decision);
        self.refresh_phase();
        Ok(())
    }

    fn refresh_phase(&mut self) {
        if self.player_decision.is_complete() && self.enemy_decision.is_complete() {
            self.phase = CombatPhase::Resolving;
        }
    }

    /// Resolve the pending round and return the successor state
    ///
    /// Total and non-mutating: `self` is left exactly as it was, so a
    /// caller can discard the result or keep both. Missing decisions and
    /// finished combats are rejected, never defaulted.
    pub fn resolve_round(&self, rolls: &mut dyn RollSource) -> Result<CombatState> {
        self.ensure_ongoing()?;
        let player_decision = self
            .player_decision
            .decision()
            .ok_or(CombatError::MissingDecision(Side::Player))?;
        let enemy_decision = self
            .enemy_decision
            .decision()
            .ok_or(CombatError::MissingDecision(Side::Enemy))?;

        let result = resolution::resolve_round(
            &self.player,
            &self.enemy,
            player_decision,
            enemy_decision,
            &self.tuning,
            rolls,
        );

        let mut next = self.clone();
        next.player.apply_damage(result.damage_to_player);
        next.enemy.apply_damage(result.damage_to_enemy);
        if result.friendship_increment {
            next.friendship = (next.friendship + 1).min(next.tuning.friendship_max);
        }

        let summary = summarize(&result, &next.player.name, &next.enemy.name);
        tracing::debug!(
            "Round {}: {} (friendship {}/{})",
            next.round,
            summary,
            next.friendship,
            next.tuning.friendship_max
        );
        next.log.push(BattleLogEntry {
            round: next.round,
            result,
            player_health_after: next.player.health,
            enemy_health_after: next.enemy.health,
            summary,
            created_at: SystemTime::now(),
        });

        // End conditions, in precedence order: defeat always beats a
        // simultaneous friendship threshold
        let outcome = if next.enemy.is_defeated() {
            Some(CombatOutcome::PlayerVictory)
        } else if next.player.is_defeated() {
            Some(CombatOutcome::EnemyVictory)
        } else if next.friendship >= next.tuning.friendship_max {
            Some(CombatOutcome::PeacefulResolution)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                next.active = false;
                next.phase = CombatPhase::Ended;
                next.outcome = Some(outcome);
                tracing::info!(
                    "Combat ended after round {}: {:?} ({} {} HP, {} {} HP)",
                    next.round,
                    outcome,
                    next.player.name,
                    next.player.health,
                    next.enemy.name,
                    next.enemy.health
                );
            }
            None => {
                next.round += 1;
                next.phase = CombatPhase::ChoosingType;
                next.player_decision = PendingDecision::Empty;
                next.enemy_decision = PendingDecision::Empty;
            }
        }

        Ok(next)
    }

    /// Terminal summary for the host's write-back, once ended
    pub fn summary(&self) -> Option<CombatSummary> {
        self.outcome.map(|outcome| CombatSummary {
            outcome,
            player_health: self.player.health,
            enemy_health: self.enemy.health,
            rounds: self.log.len() as u32,
            friendship: self.friendship,
        })
    }

    /// Battle log as JSON, for the host's persistence layer
    pub fn log_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.log)?)
    }
}
