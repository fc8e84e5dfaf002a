//! # Special Abilities

use serde::{Deserialize, Serialize};

/// A special ability granted to a magical item.
///
/// The bonus equivalent counts toward an intelligent item's ego.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub name: String,
    pub bonus_equivalent: i32,
}

impl SpecialAbility {
    pub fn new(name: impl Into<String>, bonus_equivalent: i32) -> Self {
        Self {
            name: name.into(),
            bonus_equivalent,
        }
    }
}
