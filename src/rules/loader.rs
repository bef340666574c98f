//! Load combat tuning from TOML files
//!
//! Files are partial: any field left out keeps its default, so a host can
//! override just the friendship threshold without restating the
//! multiplier table.

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::rules::CombatTuning;

/// Load and validate tuning from a TOML file
pub fn load_tuning(path: &Path) -> Result<CombatTuning> {
    let content = fs::read_to_string(path)?;
    let tuning = parse_tuning(&content)?;
    Ok(tuning)
}

/// Parse and validate tuning from TOML text
pub fn parse_tuning(content: &str) -> Result<CombatTuning> {
    let tuning: CombatTuning = toml::from_str(content)?;
    tuning.validate()?;
    Ok(tuning)
}
