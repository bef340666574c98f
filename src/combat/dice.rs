//! Dice rolling under advantage rules
//!
//! The engine never touches an RNG directly - every roll goes through
//! [`RollSource`], so resolution can be replayed against a seeded RNG or a
//! scripted sequence of faces.

use std::collections::VecDeque;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::advantage::Advantage;
use crate::combat::constants::DIE_SIDES;

/// Source of raw die faces
pub trait RollSource {
    /// One uniform face in [1, DIE_SIDES]
    fn d20(&mut self) -> i32;
}

/// [`RollSource`] backed by any rand RNG
pub struct RngRolls<R: Rng> {
    rng: R,
}

impl<R: Rng> RngRolls<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RollSource for RngRolls<R> {
    fn d20(&mut self) -> i32 {
        self.rng.gen_range(1..=DIE_SIDES)
    }
}

/// Plays back a fixed sequence of faces
///
/// Used wherever resolution must be exact: tests, replays, worked examples.
/// Running past the end of the script is a programming error and panics.
pub struct ScriptedRolls {
    faces: VecDeque<i32>,
}

impl ScriptedRolls {
    pub fn new(faces: impl IntoIterator<Item = i32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }
}

impl RollSource for ScriptedRolls {
    fn d20(&mut self) -> i32 {
        self.faces.pop_front().expect("scripted roll sequence exhausted")
    }
}

/// A single resolved roll, raw faces kept for the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollDetail {
    pub advantage: Advantage,
    /// First face drawn
    pub first: i32,
    /// Second face, present only for advantage/disadvantage draws
    pub second: Option<i32>,
    /// The face the rules keep
    pub kept: i32,
}

impl fmt::Display for RollDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.advantage, self.second) {
            (Advantage::Advantage, Some(second)) => {
                write!(f, "2d20 high ({}, {}) = {}", self.first, second, self.kept)
            }
            (Advantage::Disadvantage, Some(second)) => {
                write!(f, "2d20 low ({}, {}) = {}", self.first, second, self.kept)
            }
            _ => write!(f, "d20 = {}", self.kept),
        }
    }
}

/// Roll under the given advantage
///
/// Neutral: one face. Advantage: two independent faces, keep the higher.
/// Disadvantage: two independent faces, keep the lower. Contest and damage
/// rolls within a round are separate invocations, never reused.
pub fn roll(source: &mut dyn RollSource, advantage: Advantage) -> RollDetail {
    match advantage {
        Advantage::Neutral => {
            let face = source.d20();
            RollDetail {
                advantage,
                first: face,
                second: None,
                kept: face,
            }
        }
        Advantage::Advantage => {
            let first = source.d20();
            let second = source.d20();
            RollDetail {
                advantage,
                first,
                second: Some(second),
                kept: first.max(second),
            }
        }
        Advantage::Disadvantage => {
            let first = source.d20();
            let second = source.d20();
            RollDetail {
                advantage,
                first,
                second: Some(second),
                kept: first.min(second),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_neutral_consumes_one_face() {
        let mut source = ScriptedRolls::new([12, 99]);
        let detail = roll(&mut source, Advantage::Neutral);
        assert_eq!(detail.kept, 12);
        assert_eq!(detail.second, None);
    }

    #[test]
    fn test_advantage_keeps_higher_face() {
        let mut source = ScriptedRolls::new([7, 14]);
        let detail = roll(&mut source, Advantage::Advantage);
        assert_eq!(detail.first, 7);
        assert_eq!(detail.second, Some(14));
        assert_eq!(detail.kept, 14);
    }

    #[test]
    fn test_disadvantage_keeps_lower_face() {
        let mut source = ScriptedRolls::new([7, 14]);
        let detail = roll(&mut source, Advantage::Disadvantage);
        assert_eq!(detail.kept, 7);
    }

    #[test]
    fn test_rolls_stay_in_bounds() {
        let mut source = RngRolls::new(ChaCha8Rng::seed_from_u64(42));
        for advantage in [
            Advantage::Neutral,
            Advantage::Advantage,
            Advantage::Disadvantage,
        ] {
            for _ in 0..500 {
                let detail = roll(&mut source, advantage);
                assert!((1..=DIE_SIDES).contains(&detail.kept));
                assert!((1..=DIE_SIDES).contains(&detail.first));
                if let Some(second) = detail.second {
                    assert!((1..=DIE_SIDES).contains(&second));
                }
            }
        }
    }

    fn mean(source: &mut dyn RollSource, advantage: Advantage) -> f64 {
        let total: i64 = (0..2000)
            .map(|_| roll(source, advantage).kept as i64)
            .sum();
        total as f64 / 2000.0
    }

    #[test]
    fn test_advantage_shifts_the_mean() {
        let mut source = RngRolls::new(ChaCha8Rng::seed_from_u64(42));

        let high = mean(&mut source, Advantage::Advantage);
        let flat = mean(&mut source, Advantage::Neutral);
        let low = mean(&mut source, Advantage::Disadvantage);

        // Expected means: ~13.8 / ~10.5 / ~7.2
        assert!(high > flat + 2.0);
        assert!(flat > low + 2.0);
    }

    #[test]
    fn test_display_formats() {
        let mut source = ScriptedRolls::new([3, 18, 11]);
        let high = roll(&mut source, Advantage::Advantage);
        assert_eq!(high.to_string(), "2d20 high (3, 18) = 18");
        let flat = roll(&mut source, Advantage::Neutral);
        assert_eq!(flat.to_string(), "d20 = 11");
    }
}
