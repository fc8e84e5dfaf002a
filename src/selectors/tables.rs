//! # Table Names
//!
//! Names of the rule tables and collections the generators consult.

use crate::{ItemType, Power};

/// Collection of powers an item name may be generated at, keyed by item name.
pub const POWER_GROUPS: &str = "PowerGroups";

pub const ARMOR_TYPES: &str = "ArmorTypes";
pub const SHIELD_TYPES: &str = "ShieldTypes";

/// Weighted row type that grants a special ability slot and draws again.
pub const SPECIAL_ABILITY_ROW: &str = "SpecialAbility";

/// Specific-gear categories queried for armor substitution.
pub const SPECIFIC_ARMOR: &str = "SpecificArmor";
pub const SPECIFIC_SHIELD: &str = "SpecificShield";

/// Curse result meaning "replace the item with a specific cursed item".
pub const SPECIFIC_CURSED_ITEMS: &str = "SpecificCursedItems";

pub const INTELLIGENCE_CHANCES: &str = "IntelligenceChances";
pub const INTELLIGENCE_STRONG_STATS: &str = "IntelligenceStrongStats";
pub const INTELLIGENCE_DATA: &str = "IntelligenceData";
pub const INTELLIGENCE_COMMUNICATION: &str = "IntelligenceCommunication";
pub const INTELLIGENCE_LESSER_POWERS: &str = "IntelligenceLesserPowers";
pub const INTELLIGENCE_GREATER_POWERS: &str = "IntelligenceGreaterPowers";
pub const INTELLIGENCE_SPECIAL_PURPOSES: &str = "IntelligenceSpecialPurposes";
pub const INTELLIGENCE_DEDICATED_POWERS: &str = "IntelligenceDedicatedPowers";
pub const INTELLIGENCE_ALIGNMENTS: &str = "IntelligenceAlignments";
pub const ITEM_ALIGNMENT_REQUIREMENTS: &str = "ItemAlignmentRequirements";
pub const LANGUAGES: &str = "Languages";
pub const PERSONALITY_TRAITS: &str = "PersonalityTraits";

/// Weighted table of item subtypes for a power tier, e.g. `MinorRings`.
pub fn power_item_types(power: Power, item_type: ItemType) -> String {
    format!("{}{}s", power.as_str(), item_type.as_str())
}

/// Collection of capability tags keyed by item name, e.g. `RingAttributes`.
pub fn item_attributes(item_type: ItemType) -> String {
    format!("{}Attributes", item_type.as_str())
}
