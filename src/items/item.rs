//! # Item
//!
//! A single generated piece of treasure and its magic.

use crate::{HoardResult, Intelligence, ItemType, SpecialAbility};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A generated item.
///
/// `base_names` always contains at least the resolved type name, and the
/// `attributes` decide downstream eligibility such as intelligence and charges.
///
/// # Examples
///
/// ```
/// use hoard::{Item, ItemType};
///
/// let item = Item::new("Ring of protection", ItemType::Ring);
/// assert_eq!(item.base_names, vec!["Ring of protection".to_string()]);
/// assert_eq!(item.quantity, 1);
/// assert!(item.name_matches("Ring of protection"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name of this instance
    pub name: String,
    /// Every name this instance answers to, in insertion order
    pub base_names: Vec<String>,
    /// What kind of treasure this is
    pub item_type: ItemType,
    /// How many of this item there are
    pub quantity: u32,
    /// Whether the item is magical at all
    pub is_magical: bool,
    /// Capability tags (charged, melee, shield, ...)
    pub attributes: BTreeSet<String>,
    /// Descriptive tags (masterwork, alignment fragments, ...)
    pub traits: BTreeSet<String>,
    /// Stored contents such as spells
    pub contents: Vec<String>,
    /// Magical properties
    pub magic: Magic,
}

/// Magical properties owned by an [`Item`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Magic {
    /// Enhancement bonus
    pub bonus: i32,
    /// Remaining charges
    pub charges: u32,
    /// Curse text, empty when the item is not cursed
    pub curse: String,
    /// Special abilities in the order they were granted
    pub special_abilities: Vec<SpecialAbility>,
    /// Present only when the item is sentient
    pub intelligence: Option<Intelligence>,
}

impl Magic {
    /// Whether a curse has been attached.
    pub fn is_cursed(&self) -> bool {
        !self.curse.is_empty()
    }
}

impl Item {
    /// Creates a single, non-magical item answering to its own name.
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        let name = name.into();
        Self {
            base_names: vec![name.clone()],
            name,
            item_type,
            quantity: 1,
            is_magical: false,
            attributes: BTreeSet::new(),
            traits: BTreeSet::new(),
            contents: Vec::new(),
            magic: Magic::default(),
        }
    }

    /// Creates a magical item with the given enhancement bonus.
    pub fn magical(name: impl Into<String>, item_type: ItemType, bonus: i32) -> Self {
        let mut item = Self::new(name, item_type);
        item.is_magical = true;
        item.magic.bonus = bonus;
        item
    }

    /// Checks the name and every base name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name == name || self.base_names.iter().any(|base| base == name)
    }

    /// Adds a base name unless it is already present.
    pub fn add_base_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.base_names.contains(&name) {
            self.base_names.push(name);
        }
    }

    /// Adds every trait in `traits`.
    pub fn add_traits<I, S>(&mut self, traits: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits.extend(traits.into_iter().map(Into::into));
    }

    /// Whether the item carries the given capability tag.
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    /// Whether the item carries a special ability with exactly this name.
    pub fn has_special_ability(&self, name: &str) -> bool {
        self.magic
            .special_abilities
            .iter()
            .any(|ability| ability.name == name)
    }

    /// Serializes the item for the rendering layer.
    pub fn to_json(&self) -> HoardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restores an item previously produced by [`Item::to_json`].
    pub fn from_json(json: &str) -> HoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
