//! Damage calculation
//!
//! `damage = raw_roll - base_defense * multiplier`, floored and clamped at
//! zero. The multiplier is the only thing that varies: contest losers take
//! the passive value, active defenders scale with their own advantage.

use serde::{Deserialize, Serialize};

use crate::combat::advantage::Advantage;
use crate::rules::CombatTuning;

/// Every operand of one damage computation, for the display layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Die result plus offensive stat
    pub raw_roll: i32,
    /// Target's defensive stat for the targeted type
    pub base_defense: i32,
    /// Defense multiplier in effect
    pub multiplier: f32,
    /// `base_defense * multiplier`
    pub effective_defense: f32,
    pub critical: bool,
    /// Final clamped damage
    pub damage: i32,
}

/// Multiplier for an ACTIVE defender, keyed by the defender's own advantage
/// against the attacker's type
pub fn defense_multiplier(defender_advantage: Advantage, tuning: &CombatTuning) -> f32 {
    match defender_advantage {
        Advantage::Advantage => tuning.defender_advantage_multiplier,
        Advantage::Neutral => tuning.defender_neutral_multiplier,
        Advantage::Disadvantage => tuning.defender_disadvantage_multiplier,
    }
}

/// Compute final damage
///
/// A miss (defense exceeding the roll) deals zero - never negative, never
/// healing. The critical flag is a reserved hook; nothing in the base
/// engine sets it.
pub fn final_damage(
    raw_roll: i32,
    base_defense: i32,
    multiplier: f32,
    critical: bool,
    tuning: &CombatTuning,
) -> DamageBreakdown {
    let effective_defense = base_defense as f32 * multiplier;
    let mut value = raw_roll as f32 - effective_defense;
    if critical {
        value *= tuning.crit_multiplier;
    }
    let damage = (value.floor() as i32).max(0);

    DamageBreakdown {
        raw_roll,
        base_defense,
        multiplier,
        effective_defense,
        critical,
        damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> CombatTuning {
        CombatTuning::default()
    }

    #[test]
    fn test_passive_defense_is_plain_subtraction() {
        let breakdown = final_damage(17, 2, 1.0, false, &tuning());
        assert_eq!(breakdown.effective_defense, 2.0);
        assert_eq!(breakdown.damage, 15);
    }

    #[test]
    fn test_miss_clamps_to_zero() {
        let breakdown = final_damage(3, 9, 1.0, false, &tuning());
        assert_eq!(breakdown.damage, 0);
    }

    #[test]
    fn test_disadvantaged_defender_multiplier() {
        // Defense 4 at x1.5 -> effective 6; roll total 15 -> 9 damage
        let breakdown = final_damage(15, 4, 1.5, false, &tuning());
        assert_eq!(breakdown.effective_defense, 6.0);
        assert_eq!(breakdown.damage, 9);
    }

    #[test]
    fn test_fractional_defense_floors_damage() {
        let breakdown = final_damage(10, 5, 1.5, false, &tuning());
        // 10 - 7.5 = 2.5, floored
        assert_eq!(breakdown.damage, 2);
    }

    #[test]
    fn test_multiplier_lookup_follows_defender_advantage() {
        let tuning = tuning();
        assert_eq!(defense_multiplier(Advantage::Advantage, &tuning), 3.0);
        assert_eq!(defense_multiplier(Advantage::Neutral, &tuning), 2.0);
        assert_eq!(defense_multiplier(Advantage::Disadvantage, &tuning), 1.5);
    }

    #[test]
    fn test_critical_multiplies_before_clamping() {
        let breakdown = final_damage(12, 4, 1.0, true, &tuning());
        // (12 - 4) * 2.0 = 16
        assert_eq!(breakdown.damage, 16);

        // A critical miss is still a miss
        let missed = final_damage(3, 9, 1.0, true, &tuning());
        assert_eq!(missed.damage, 0);
    }
}
