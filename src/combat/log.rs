//! Battle log
//!
//! One immutable entry per resolved round. Entries carry the full
//! structured [`RoundResult`] so any frontend can re-render a fight
//! without re-deriving a single number; the summary string is a
//! convenience on top, never a replacement.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::combat::resolution::{RoundOutcome, RoundResult};
use crate::core::types::Side;

/// Record of one resolved round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub round: u32,
    /// Full resolution detail: decisions, advantages, rolls, damage
    pub result: RoundResult,
    pub player_health_after: i32,
    pub enemy_health_after: i32,
    /// Human-readable recap of the round
    pub summary: String,
    pub created_at: SystemTime,
}

/// Build the one-line recap for a resolved round
pub fn summarize(result: &RoundResult, player_name: &str, enemy_name: &str) -> String {
    match result.outcome {
        RoundOutcome::ContestWon { winner: Side::Player } => format!(
            "{} wins the exchange, dealing {} damage to {}",
            player_name, result.damage_to_enemy, enemy_name
        ),
        RoundOutcome::ContestWon { winner: Side::Enemy } => format!(
            "{} wins the exchange, dealing {} damage to {}",
            enemy_name, result.damage_to_player, player_name
        ),
        RoundOutcome::ContestTied => format!(
            "{} and {} clash to a standstill; neither lands a blow",
            player_name, enemy_name
        ),
        RoundOutcome::AttackOnDefender { attacker: Side::Player } => {
            if result.damage_to_enemy > 0 {
                format!(
                    "{} strikes through {}'s guard for {} damage",
                    player_name, enemy_name, result.damage_to_enemy
                )
            } else {
                format!("{}'s guard absorbs {}'s attack", enemy_name, player_name)
            }
        }
        RoundOutcome::AttackOnDefender { attacker: Side::Enemy } => {
            if result.damage_to_player > 0 {
                format!(
                    "{} strikes through {}'s guard for {} damage",
                    enemy_name, player_name, result.damage_to_player
                )
            } else {
                format!("{}'s guard absorbs {}'s attack", player_name, enemy_name)
            }
        }
        RoundOutcome::MutualDefense => format!(
            "{} and {} both hold back; the hostility thaws a little",
            player_name, enemy_name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::advantage::{Advantage, CombatType};
    use crate::combat::decision::Decision;
    use crate::combat::resolution::SideReport;

    fn result_with(outcome: RoundOutcome, to_player: i32, to_enemy: i32) -> RoundResult {
        let report = |decision| SideReport {
            decision,
            advantage: Advantage::Neutral,
            attack_roll: None,
            attack_total: None,
            damage_roll: None,
            damage_dealt: None,
        };
        RoundResult {
            player: report(Decision::attack(CombatType::Heart)),
            enemy: report(Decision::attack(CombatType::Heart)),
            damage_to_player: to_player,
            damage_to_enemy: to_enemy,
            friendship_increment: matches!(outcome, RoundOutcome::MutualDefense),
            outcome,
        }
    }

    #[test]
    fn test_contest_summary_names_the_winner() {
        let result = result_with(
            RoundOutcome::ContestWon {
                winner: Side::Enemy,
            },
            7,
            0,
        );
        let summary = summarize(&result, "Wren", "Gloam");
        assert_eq!(summary, "Gloam wins the exchange, dealing 7 damage to Wren");
    }

    #[test]
    fn test_absorbed_attack_reads_as_a_miss() {
        let result = result_with(
            RoundOutcome::AttackOnDefender {
                attacker: Side::Player,
            },
            0,
            0,
        );
        let summary = summarize(&result, "Wren", "Gloam");
        assert_eq!(summary, "Gloam's guard absorbs Wren's attack");
    }

    #[test]
    fn test_mutual_defense_mentions_both() {
        let result = result_with(RoundOutcome::MutualDefense, 0, 0);
        let summary = summarize(&result, "Wren", "Gloam");
        assert!(summary.contains("Wren") && summary.contains("Gloam"));
    }
}
