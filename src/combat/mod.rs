//! Turn-based combat resolution
//!
//! Two combatants pick a type and an action each round; resolution turns
//! the pair of decisions into damage, a log entry and possibly an end of
//! combat. Randomness enters only through [`dice::RollSource`].

pub mod advantage;
pub mod combatant;
pub mod constants;
pub mod damage;
pub mod decision;
pub mod dice;
pub mod log;
pub mod policy;
pub mod resolution;
pub mod state;

pub use advantage::{advantage_against, Advantage, CombatType};
pub use combatant::{Combatant, TypeStats};
pub use damage::{defense_multiplier, final_damage, DamageBreakdown};
pub use decision::{ActionChoice, Decision, PendingDecision};
pub use dice::{roll, RngRolls, RollDetail, RollSource, ScriptedRolls};
pub use log::{summarize, BattleLogEntry};
pub use policy::{policy_for_tier, DecisionPolicy, EnemyTier, UniformPolicy, WeightedPolicy};
pub use resolution::{resolve_round, RoundOutcome, RoundResult, SideReport};
pub use state::{CombatOutcome, CombatPhase, CombatState, CombatSummary};
