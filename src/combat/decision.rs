//! Round decisions and staged decision collection
//!
//! A full decision is a type plus an action. The interactive flow collects
//! them one at a time, so incompleteness is modeled as its own state
//! instead of optional fields.

use serde::{Deserialize, Serialize};

use crate::combat::advantage::CombatType;

/// Action for the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionChoice {
    Attack,
    Defend,
}

/// A complete choice for one round - immutable once submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub combat_type: CombatType,
    pub action: ActionChoice,
}

impl Decision {
    pub fn new(combat_type: CombatType, action: ActionChoice) -> Self {
        Self {
            combat_type,
            action,
        }
    }

    pub fn attack(combat_type: CombatType) -> Self {
        Self::new(combat_type, ActionChoice::Attack)
    }

    pub fn defend(combat_type: CombatType) -> Self {
        Self::new(combat_type, ActionChoice::Defend)
    }
}

/// Decision accumulation state for one side within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PendingDecision {
    /// Nothing chosen yet
    #[default]
    Empty,
    /// Type locked in, action still open
    TypeChosen(CombatType),
    /// Both halves submitted
    Complete(Decision),
}

impl PendingDecision {
    /// The full decision, if both halves have been submitted
    pub fn decision(&self) -> Option<Decision> {
        match self {
            PendingDecision::Complete(decision) => Some(*decision),
            _ => None,
        }
    }

    /// The chosen type, if one has been submitted
    pub fn chosen_type(&self) -> Option<CombatType> {
        match self {
            PendingDecision::Empty => None,
            PendingDecision::TypeChosen(combat_type) => Some(*combat_type),
            PendingDecision::Complete(decision) => Some(decision.combat_type),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, PendingDecision::Complete(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_nothing() {
        let pending = PendingDecision::Empty;
        assert!(pending.decision().is_none());
        assert!(pending.chosen_type().is_none());
        assert!(!pending.is_complete());
    }

    #[test]
    fn test_type_chosen_is_not_complete() {
        let pending = PendingDecision::TypeChosen(CombatType::Heart);
        assert_eq!(pending.chosen_type(), Some(CombatType::Heart));
        assert!(pending.decision().is_none());
        assert!(!pending.is_complete());
    }

    #[test]
    fn test_complete_exposes_decision() {
        let decision = Decision::attack(CombatType::Mind);
        let pending = PendingDecision::Complete(decision);
        assert!(pending.is_complete());
        assert_eq!(pending.decision(), Some(decision));
        assert_eq!(pending.chosen_type(), Some(CombatType::Mind));
    }
}
