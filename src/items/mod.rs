//! # Items Module
//!
//! The data model for generated treasure.
//!
//! Items and their magic are created per generation call, mutated in place by
//! successive pipeline stages and handed back to the caller by value. Nothing
//! here knows about rule tables; it only describes what a finished item looks
//! like.

mod abilities;
mod intelligence;
mod item;

pub use abilities::*;
pub use intelligence::*;
pub use item::*;

use crate::{HoardError, HoardResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capability tags stored in [`Item::attributes`].
pub mod attribute_names {
    pub const AMMUNITION: &str = "Ammunition";
    pub const CHARGED: &str = "Charged";
    pub const MELEE: &str = "Melee";
    pub const ONE_TIME_USE: &str = "OneTimeUse";
    pub const RANGED: &str = "Ranged";
    pub const SHIELD: &str = "Shield";
}

/// Descriptive tags stored in [`Item::traits`].
pub mod trait_names {
    pub const MASTERWORK: &str = "Masterwork";
}

/// Coarse rarity tier that decides which weighted table is consulted.
///
/// # Examples
///
/// ```
/// use hoard::Power;
///
/// let power: Power = "medium".parse().unwrap();
/// assert_eq!(power, Power::Medium);
/// assert_eq!(power.to_string(), "Medium");
/// assert!(Power::Mundane.is_mundane());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Power {
    Mundane,
    Minor,
    Medium,
    Major,
}

impl Power {
    /// The magical tiers in ascending order.
    pub fn magical() -> [Power; 3] {
        [Power::Minor, Power::Medium, Power::Major]
    }

    /// Key used when building table names.
    pub fn as_str(self) -> &'static str {
        match self {
            Power::Mundane => "Mundane",
            Power::Minor => "Minor",
            Power::Medium => "Medium",
            Power::Major => "Major",
        }
    }

    /// Whether this is the non-magical tier.
    pub fn is_mundane(self) -> bool {
        self == Power::Mundane
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Power {
    type Err = HoardError;

    fn from_str(s: &str) -> HoardResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "mundane" => Ok(Power::Mundane),
            "minor" => Ok(Power::Minor),
            "medium" => Ok(Power::Medium),
            "major" => Ok(Power::Major),
            other => Err(HoardError::InvalidArgument(format!(
                "'{}' is not a power tier",
                other
            ))),
        }
    }
}

/// The kinds of treasure the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    AlchemicalItem,
    Armor,
    Potion,
    Ring,
    Rod,
    Scroll,
    Staff,
    Tool,
    Wand,
    Weapon,
    WondrousItem,
}

impl ItemType {
    /// Key used when building table names and intelligence lookups.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::AlchemicalItem => "AlchemicalItem",
            ItemType::Armor => "Armor",
            ItemType::Potion => "Potion",
            ItemType::Ring => "Ring",
            ItemType::Rod => "Rod",
            ItemType::Scroll => "Scroll",
            ItemType::Staff => "Staff",
            ItemType::Tool => "Tool",
            ItemType::Wand => "Wand",
            ItemType::Weapon => "Weapon",
            ItemType::WondrousItem => "WondrousItem",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
