//! Round resolution
//!
//! Both sides' decisions are fully known before anything rolls. Dispatch
//! is on the action pair: attack/attack runs a contest, one-sided attacks
//! auto-connect against the active defense, mutual defense builds
//! friendship instead of dealing damage.

use serde::{Deserialize, Serialize};

use crate::combat::advantage::{advantage_against, Advantage};
use crate::combat::combatant::Combatant;
use crate::combat::damage::{defense_multiplier, final_damage, DamageBreakdown};
use crate::combat::decision::{ActionChoice, Decision};
use crate::combat::dice::{roll, RollDetail, RollSource};
use crate::core::types::Side;
use crate::rules::CombatTuning;

/// Everything one side contributed to a resolved round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideReport {
    pub decision: Decision,
    /// This side's advantage against the opposing type
    pub advantage: Advantage,
    /// Attack or contest roll, present when this side attacked
    pub attack_roll: Option<RollDetail>,
    /// Kept face plus offensive stat
    pub attack_total: Option<i32>,
    /// Winner's separate damage roll in an attack-vs-attack round
    pub damage_roll: Option<RollDetail>,
    /// Damage this side dealt
    pub damage_dealt: Option<DamageBreakdown>,
}

impl SideReport {
    fn idle(decision: Decision, advantage: Advantage) -> Self {
        Self {
            decision,
            advantage,
            attack_roll: None,
            attack_total: None,
            damage_roll: None,
            damage_dealt: None,
        }
    }
}

/// How the round went, as structured data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Attack vs attack with a strict winner
    ContestWon { winner: Side },
    /// Attack vs attack with equal totals - nobody lands a blow
    ContestTied,
    /// Exactly one side attacked; the blow auto-connects
    AttackOnDefender { attacker: Side },
    /// Both sides held back
    MutualDefense,
}

/// Result of resolving one round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player: SideReport,
    pub enemy: SideReport,
    pub damage_to_player: i32,
    pub damage_to_enemy: i32,
    /// True only for mutual-defend rounds
    pub friendship_increment: bool,
    pub outcome: RoundOutcome,
}

/// Resolve one round from both sides' complete decisions
///
/// Pure given the roll source. Roll order is fixed: player before enemy,
/// contest before damage - scripted sources rely on this.
pub fn resolve_round(
    player: &Combatant,
    enemy: &Combatant,
    player_decision: Decision,
    enemy_decision: Decision,
    tuning: &CombatTuning,
    rolls: &mut dyn RollSource,
) -> RoundResult {
    let player_advantage =
        advantage_against(player_decision.combat_type, enemy_decision.combat_type);
    let enemy_advantage =
        advantage_against(enemy_decision.combat_type, player_decision.combat_type);

    let mut player_report = SideReport::idle(player_decision, player_advantage);
    let mut enemy_report = SideReport::idle(enemy_decision, enemy_advantage);

    let mut damage_to_player = 0;
    let mut damage_to_enemy = 0;
    let mut friendship_increment = false;

    let outcome = match (player_decision.action, enemy_decision.action) {
        (ActionChoice::Attack, ActionChoice::Attack) => {
            // Step 1: each side rolls its contest under its own advantage
            let player_contest = roll(rolls, player_advantage);
            let player_total =
                player_contest.kept + player.offense.get(player_decision.combat_type);
            player_report.attack_roll = Some(player_contest);
            player_report.attack_total = Some(player_total);

            let enemy_contest = roll(rolls, enemy_advantage);
            let enemy_total = enemy_contest.kept + enemy.offense.get(enemy_decision.combat_type);
            enemy_report.attack_roll = Some(enemy_contest);
            enemy_report.attack_total = Some(enemy_total);

            // Step 2: strict winner rolls separate damage against the
            // loser's passive defense; a tie ends the exchange cold
            if player_total > enemy_total {
                let damage_roll = roll(rolls, player_advantage);
                let raw = damage_roll.kept + player.offense.get(player_decision.combat_type);
                let breakdown = final_damage(
                    raw,
                    enemy.defense.get(enemy_decision.combat_type),
                    tuning.passive_multiplier,
                    false,
                    tuning,
                );
                player_report.damage_roll = Some(damage_roll);
                player_report.damage_dealt = Some(breakdown);
                damage_to_enemy = breakdown.damage;
                RoundOutcome::ContestWon {
                    winner: Side::Player,
                }
            } else if enemy_total > player_total {
                let damage_roll = roll(rolls, enemy_advantage);
                let raw = damage_roll.kept + enemy.offense.get(enemy_decision.combat_type);
                let breakdown = final_damage(
                    raw,
                    player.defense.get(player_decision.combat_type),
                    tuning.passive_multiplier,
                    false,
                    tuning,
                );
                enemy_report.damage_roll = Some(damage_roll);
                enemy_report.damage_dealt = Some(breakdown);
                damage_to_player = breakdown.damage;
                RoundOutcome::ContestWon { winner: Side::Enemy }
            } else {
                RoundOutcome::ContestTied
            }
        }

        (ActionChoice::Attack, ActionChoice::Defend) => {
            // No contest - the attack connects against the raised guard
            let attack_roll = roll(rolls, player_advantage);
            let raw = attack_roll.kept + player.offense.get(player_decision.combat_type);
            let multiplier = defense_multiplier(enemy_advantage, tuning);
            let breakdown = final_damage(
                raw,
                enemy.defense.get(enemy_decision.combat_type),
                multiplier,
                false,
                tuning,
            );
            player_report.attack_roll = Some(attack_roll);
            player_report.attack_total = Some(raw);
            player_report.damage_dealt = Some(breakdown);
            damage_to_enemy = breakdown.damage;
            RoundOutcome::AttackOnDefender {
                attacker: Side::Player,
            }
        }

        (ActionChoice::Defend, ActionChoice::Attack) => {
            let attack_roll = roll(rolls, enemy_advantage);
            let raw = attack_roll.kept + enemy.offense.get(enemy_decision.combat_type);
            let multiplier = defense_multiplier(player_advantage, tuning);
            let breakdown = final_damage(
                raw,
                player.defense.get(player_decision.combat_type),
                multiplier,
                false,
                tuning,
            );
            enemy_report.attack_roll = Some(attack_roll);
            enemy_report.attack_total = Some(raw);
            enemy_report.damage_dealt = Some(breakdown);
            damage_to_player = breakdown.damage;
            RoundOutcome::AttackOnDefender {
                attacker: Side::Enemy,
            }
        }

        (ActionChoice::Defend, ActionChoice::Defend) => {
            friendship_increment = true;
            RoundOutcome::MutualDefense
        }
    };

    RoundResult {
        player: player_report,
        enemy: enemy_report,
        damage_to_player,
        damage_to_enemy,
        friendship_increment,
        outcome,
    }
}
