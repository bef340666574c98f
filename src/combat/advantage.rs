//! Type advantage cycle
//!
//! Heart beats Body, Body beats Mind, Mind beats Heart. Same type is
//! neutral. Each side's advantage is computed against the OTHER side's
//! type, so in any mixed matchup exactly one side holds the edge.

use serde::{Deserialize, Serialize};

/// Combat type - every decision commits to exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatType {
    Heart,
    Body,
    Mind,
}

impl CombatType {
    /// All combat types, in cycle order
    pub const ALL: [CombatType; 3] = [CombatType::Heart, CombatType::Body, CombatType::Mind];

    /// The type this type beats
    pub fn beats(&self) -> CombatType {
        match self {
            CombatType::Heart => CombatType::Body,
            CombatType::Body => CombatType::Mind,
            CombatType::Mind => CombatType::Heart,
        }
    }
}

/// One side's standing against the opposing type for the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advantage {
    Advantage,
    Neutral,
    Disadvantage,
}

/// Resolve one side's advantage against the opposing type
///
/// Pure; called once per side per round. Mirror-image calls agree in the
/// neutral case only - otherwise one side gets `Advantage` and the other
/// `Disadvantage`.
pub fn advantage_against(own: CombatType, opposing: CombatType) -> Advantage {
    if own == opposing {
        Advantage::Neutral
    } else if own.beats() == opposing {
        Advantage::Advantage
    } else {
        Advantage::Disadvantage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nine_matchups() {
        use CombatType::*;
        // Same type = neutral
        assert_eq!(advantage_against(Heart, Heart), Advantage::Neutral);
        assert_eq!(advantage_against(Body, Body), Advantage::Neutral);
        assert_eq!(advantage_against(Mind, Mind), Advantage::Neutral);

        // Cycle winners
        assert_eq!(advantage_against(Heart, Body), Advantage::Advantage);
        assert_eq!(advantage_against(Body, Mind), Advantage::Advantage);
        assert_eq!(advantage_against(Mind, Heart), Advantage::Advantage);

        // Cycle losers
        assert_eq!(advantage_against(Body, Heart), Advantage::Disadvantage);
        assert_eq!(advantage_against(Mind, Body), Advantage::Disadvantage);
        assert_eq!(advantage_against(Heart, Mind), Advantage::Disadvantage);
    }

    #[test]
    fn test_mixed_matchups_are_antisymmetric() {
        for a in CombatType::ALL {
            for b in CombatType::ALL {
                if a == b {
                    continue;
                }
                let forward = advantage_against(a, b);
                let reverse = advantage_against(b, a);
                assert_ne!(forward, Advantage::Neutral);
                assert_ne!(reverse, Advantage::Neutral);
                assert_ne!(forward, reverse);
            }
        }
    }
}
