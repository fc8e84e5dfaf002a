//! # Intelligence
//!
//! Sentience profile for intelligent items and the raw table row it is built from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stat value shared by the weak stat of every intelligent item.
pub const WEAK_STAT: u32 = 10;

/// Raw intelligence table row, keyed by the strong stat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelligenceDataSelection {
    pub senses: String,
    pub lesser_powers_count: usize,
    pub greater_powers_count: usize,
}

impl IntelligenceDataSelection {
    pub fn new(senses: impl Into<String>, lesser: usize, greater: usize) -> Self {
        Self {
            senses: senses.into(),
            lesser_powers_count: lesser,
            greater_powers_count: greater,
        }
    }
}

/// Full sentience profile attached to [`crate::Magic::intelligence`].
///
/// One of the three mental stats is [`WEAK_STAT`]; the other two share the
/// rolled strong value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intelligence {
    pub charisma_stat: u32,
    pub intelligence_stat: u32,
    pub wisdom_stat: u32,
    /// Ways the item communicates (empathy, speech, telepathy, ...)
    pub communication: BTreeSet<String>,
    /// Known languages, only populated for speaking items
    pub languages: BTreeSet<String>,
    pub senses: String,
    pub powers: BTreeSet<String>,
    /// Empty unless the item has a special purpose
    pub special_purpose: String,
    /// Empty unless the item has a special purpose
    pub dedicated_power: String,
    pub alignment: String,
    pub ego: i32,
    pub personality: String,
}

impl Intelligence {
    /// The three mental stats as charisma, intelligence, wisdom.
    pub fn stats(&self) -> [u32; 3] {
        [self.charisma_stat, self.intelligence_stat, self.wisdom_stat]
    }

    /// Whether the item has a special purpose and dedicated power.
    pub fn has_special_purpose(&self) -> bool {
        !self.dedicated_power.is_empty()
    }

    pub fn communicates_by(&self, mode: &str) -> bool {
        self.communication.contains(mode)
    }
}
