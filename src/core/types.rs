//! Shared identity types
//!
//! Combat is always exactly two-sided. Everything that needs to point at
//! a participant does so through [`Side`], never through a raw index.

use serde::{Deserialize, Serialize};

/// One of the two participants in a combat encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The other participant
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}
