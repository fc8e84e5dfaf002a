//! # Generation Collaborators
//!
//! Sub-generators the item generators delegate to. They own their own tables
//! and randomness; the engine only decides when to call them.

use crate::{HoardResult, Item, ItemType, Power, SpecialAbility};

/// Registry of specific, pre-defined items.
pub trait SpecificGearGenerator: Send + Sync {
    /// Whether `name` is a specific item of the given specific category.
    fn is_specific(&self, specific_type: &str, name: &str) -> bool;

    /// Whether a specific item of this category with this base name exists at `power`.
    fn can_be_specific(&self, power: Power, specific_type: &str, base_name: &str) -> bool;

    /// Draws a specific item prototype, optionally restricted to a base name.
    fn generate_prototype(
        &self,
        power: Power,
        specific_type: &str,
        base_name: Option<&str>,
    ) -> HoardResult<Item>;

    /// Completes a prototype or template into a full specific item.
    fn generate_from(&self, template: &Item) -> HoardResult<Item>;
}

/// Rolls special abilities for an item.
pub trait SpecialAbilitiesGenerator: Send + Sync {
    fn generate_for(
        &self,
        item: &Item,
        power: Power,
        quantity: usize,
    ) -> HoardResult<Vec<SpecialAbility>>;
}

/// Rolls charge counts.
pub trait ChargesGenerator: Send + Sync {
    fn generate_for(&self, item_type: ItemType, name: &str) -> HoardResult<u32>;
}

/// Supplies spell content.
pub trait SpellGenerator: Send + Sync {
    /// Arcane or divine, as named by the spell tables.
    fn generate_type(&self) -> HoardResult<String>;

    fn generate_level(&self, power: Power) -> HoardResult<u32>;

    fn generate(&self, spell_type: &str, level: u32) -> HoardResult<String>;
}

/// Supplies curse data and specific cursed items.
pub trait CurseGenerator: Send + Sync {
    fn has_curse(&self, item: &Item) -> bool;

    /// Draws curse text, or [`crate::tables::SPECIFIC_CURSED_ITEMS`].
    fn generate_curse(&self) -> HoardResult<String>;

    fn item_type_can_be_specific_cursed_item(&self, item_type: ItemType) -> bool;

    fn generate_specific_cursed_item(&self, item_type: ItemType) -> HoardResult<Item>;

    fn is_specific_cursed_item(&self, item: &Item) -> bool;

    /// Completes a specific cursed item from a template naming it.
    fn generate_from(&self, template: &Item) -> HoardResult<Item>;
}
