//! # Magical Armor Generation
//!
//! Magical armor and shields are drawn from the power-tier armor table. Rows
//! typed "SpecialAbility" grant an ability slot and draw again; rows carrying
//! the specific-item amount hand generation to the specific-gear registry.
//! Whatever is left is a masterwork base item with an enhancement bonus.

use crate::attribute_names::SHIELD;
use crate::generation::resolution;
use crate::tables;
use crate::trait_names::MASTERWORK;
use crate::{
    draw_until, CollectionSelector, GenerationConfig, HoardError, HoardResult, Item, ItemType,
    MagicalItemGenerator, Power, SpecialAbilitiesGenerator, SpecificGearGenerator, TableSelector,
    TypeAndAmountSelection,
};
use std::sync::Arc;

/// Body armor or shield, decided by the "Shield" attribute of the resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorCategory {
    Armor,
    Shield,
}

impl ArmorCategory {
    /// Table the base item name is drawn from.
    pub fn base_table(self) -> &'static str {
        match self {
            ArmorCategory::Armor => tables::ARMOR_TYPES,
            ArmorCategory::Shield => tables::SHIELD_TYPES,
        }
    }

    /// Category queried on the specific-gear registry.
    pub fn specific_type(self) -> &'static str {
        match self {
            ArmorCategory::Armor => tables::SPECIFIC_ARMOR,
            ArmorCategory::Shield => tables::SPECIFIC_SHIELD,
        }
    }

    fn all() -> [ArmorCategory; 2] {
        [ArmorCategory::Armor, ArmorCategory::Shield]
    }
}

/// A terminal armor row and the ability slots collected on the way to it.
#[derive(Debug, Clone, PartialEq)]
struct ArmorDraw {
    selection: TypeAndAmountSelection,
    ability_slots: usize,
}

/// Generates magical armor and shields.
pub struct MagicalArmorGenerator {
    tables: Arc<dyn TableSelector>,
    collections: Arc<dyn CollectionSelector>,
    specific_gear: Arc<dyn SpecificGearGenerator>,
    abilities: Arc<dyn SpecialAbilitiesGenerator>,
    config: GenerationConfig,
}

impl MagicalArmorGenerator {
    /// Creates an armor generator over the armor tables and gear registries.
    pub fn new(
        tables: Arc<dyn TableSelector>,
        collections: Arc<dyn CollectionSelector>,
        specific_gear: Arc<dyn SpecificGearGenerator>,
        abilities: Arc<dyn SpecialAbilitiesGenerator>,
        config: &GenerationConfig,
    ) -> Self {
        Self {
            tables,
            collections,
            specific_gear,
            abilities,
            config: config.clone(),
        }
    }

    /// Draws rows until one is not a "special ability and roll again" row.
    fn draw_armor_row(&self, power: Power) -> HoardResult<ArmorDraw> {
        let table = tables::power_item_types(power, ItemType::Armor);
        let max_slots = self.config.max_armor_ability_slots;
        let mut ability_slots = 0;

        let selection = draw_until(
            self.config.max_retry_attempts,
            "armor row",
            || self.tables.select_type_and_amount(&table),
            |row| {
                if row.type_name != tables::SPECIAL_ABILITY_ROW {
                    return true;
                }
                if ability_slots < max_slots {
                    ability_slots += 1;
                }
                false
            },
        )?;

        Ok(ArmorDraw {
            selection,
            ability_slots,
        })
    }

    fn category_of(&self, type_name: &str) -> HoardResult<ArmorCategory> {
        let attributes = self
            .collections
            .select_from(&tables::item_attributes(ItemType::Armor), type_name)?;

        if attributes.iter().any(|attribute| attribute == SHIELD) {
            Ok(ArmorCategory::Shield)
        } else {
            Ok(ArmorCategory::Armor)
        }
    }

    /// The specific category `name` is registered under, if any.
    fn specific_category_of(&self, name: &str) -> Option<ArmorCategory> {
        ArmorCategory::all()
            .into_iter()
            .find(|category| self.specific_gear.is_specific(category.specific_type(), name))
    }

    fn generate_specific(
        &self,
        power: Power,
        category: ArmorCategory,
        base_name: Option<&str>,
    ) -> HoardResult<Item> {
        let prototype =
            self.specific_gear
                .generate_prototype(power, category.specific_type(), base_name)?;
        let armor = self.specific_gear.generate_from(&prototype)?;
        log::debug!("Substituted specific {:?} '{}'", category, armor.name);
        Ok(armor)
    }

    /// Powers at which the registry holds the specific item `name`.
    fn specific_powers(&self, category: ArmorCategory, name: &str) -> Vec<Power> {
        Power::magical()
            .into_iter()
            .filter(|power| {
                self.specific_gear
                    .can_be_specific(*power, category.specific_type(), name)
            })
            .collect()
    }

    fn generate_named_specific(
        &self,
        power: Power,
        category: ArmorCategory,
        name: &str,
        traits: &[String],
    ) -> HoardResult<Item> {
        let possible = self.specific_powers(category, name);
        if possible.is_empty() {
            return Err(HoardError::NotFound(format!(
                "specific {:?} '{}' exists at no power",
                category, name
            )));
        }

        let adjusted = resolution::adjust_power(power, &possible)?;
        if adjusted != power {
            log::debug!("'{}' is not {}; generating at {}", name, power, adjusted);
        }

        let mut prototype =
            self.specific_gear
                .generate_prototype(adjusted, category.specific_type(), Some(name))?;
        prototype.add_traits(traits.iter().cloned());
        self.specific_gear.generate_from(&prototype)
    }

    fn build_armor(
        &self,
        name: &str,
        bonus: i32,
        power: Power,
        ability_slots: usize,
        traits: &[String],
    ) -> HoardResult<Item> {
        let mut armor = Item::magical(name, ItemType::Armor, bonus);
        armor.attributes = self
            .collections
            .select_from(&tables::item_attributes(ItemType::Armor), name)?
            .into_iter()
            .collect();
        armor.traits.insert(MASTERWORK.to_string());
        armor.add_traits(traits.iter().cloned());

        if ability_slots > 0 {
            armor.magic.special_abilities = self.abilities.generate_for(&armor, power, ability_slots)?;
        }

        log::debug!(
            "Built armor '{}' (+{}) with {} special abilities",
            armor.name,
            armor.magic.bonus,
            armor.magic.special_abilities.len()
        );
        Ok(armor)
    }
}

impl MagicalItemGenerator for MagicalArmorGenerator {
    fn generate_random(&self, power: Power) -> HoardResult<Item> {
        let draw = self.draw_armor_row(power)?;
        let category = self.category_of(&draw.selection.type_name)?;

        if draw.selection.is_specific_item() {
            return self.generate_specific(power, category, None);
        }

        let base_name = self.tables.select_one(category.base_table())?;
        self.build_armor(
            &base_name,
            draw.selection.amount(),
            power,
            draw.ability_slots,
            &[],
        )
    }

    fn generate(&self, template: &Item, _allow_random_decoration: bool) -> HoardResult<Item> {
        if self.specific_category_of(&template.name).is_some() {
            return self.specific_gear.generate_from(template);
        }

        let mut armor = template.clone();
        armor.item_type = ItemType::Armor;
        armor.is_magical = true;
        armor.quantity = 1;
        armor.attributes = self
            .collections
            .select_from(&tables::item_attributes(ItemType::Armor), &template.name)?
            .into_iter()
            .collect();
        armor.traits.insert(MASTERWORK.to_string());
        Ok(armor)
    }

    fn generate_named(&self, power: Power, name: &str, traits: &[String]) -> HoardResult<Item> {
        if let Some(category) = self.specific_category_of(name) {
            return self.generate_named_specific(power, category, name, traits);
        }

        let category = self.category_of(name)?;
        let can_be_specific =
            self.specific_gear
                .can_be_specific(power, category.specific_type(), name);

        // Rows of the other category never set the bonus of the named base,
        // and a specific row only counts when a specific item is built on it.
        let (draw, _) = draw_until(
            self.config.max_retry_attempts,
            "named armor row",
            || {
                let draw = self.draw_armor_row(power)?;
                let row_category = self.category_of(&draw.selection.type_name)?;
                Ok((draw, row_category))
            },
            |(draw, row_category)| {
                *row_category == category
                    && (can_be_specific || !draw.selection.is_specific_item())
            },
        )?;

        if draw.selection.is_specific_item() {
            return self.generate_specific(power, category, Some(name));
        }

        self.build_armor(
            name,
            draw.selection.amount(),
            power,
            draw.ability_slots,
            traits,
        )
    }

    fn is_item_of_power(&self, name: &str, power: Power) -> HoardResult<bool> {
        match self.specific_category_of(name) {
            Some(category) => Ok(self
                .specific_gear
                .can_be_specific(power, category.specific_type(), name)),
            None => Ok(!power.is_mundane()),
        }
    }

    fn generator_type(&self) -> &'static str {
        "MagicalArmorGenerator"
    }
}
