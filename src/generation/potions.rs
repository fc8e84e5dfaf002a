//! # Potion Generation

use crate::attribute_names::ONE_TIME_USE;
use crate::generation::resolution;
use crate::tables;
use crate::{
    CollectionSelector, HoardResult, Item, ItemType, MagicalItemGenerator, Power,
    ReplacementSelector, TableSelector,
};
use std::sync::Arc;

/// Generates potions: always a single, one-time-use item.
pub struct PotionGenerator {
    tables: Arc<dyn TableSelector>,
    collections: Arc<dyn CollectionSelector>,
    replacements: Arc<dyn ReplacementSelector>,
}

impl PotionGenerator {
    /// Creates a potion generator over the potion tables.
    pub fn new(
        tables: Arc<dyn TableSelector>,
        collections: Arc<dyn CollectionSelector>,
        replacements: Arc<dyn ReplacementSelector>,
    ) -> Self {
        Self {
            tables,
            collections,
            replacements,
        }
    }

    fn build_potion(name: &str, bonus: i32, traits: &[String]) -> Item {
        let mut potion = Item::magical(name, ItemType::Potion, bonus);
        potion.attributes.insert(ONE_TIME_USE.to_string());
        potion.add_traits(traits.iter().cloned());
        potion
    }
}

impl MagicalItemGenerator for PotionGenerator {
    fn generate_random(&self, power: Power) -> HoardResult<Item> {
        let table = tables::power_item_types(power, ItemType::Potion);
        let selection = self.tables.select_type_and_amount(&table)?;
        log::debug!("Drew potion '{}' from {}", selection.type_name, table);
        Ok(Self::build_potion(&selection.type_name, selection.amount(), &[]))
    }

    fn generate(&self, template: &Item, _allow_random_decoration: bool) -> HoardResult<Item> {
        let mut potion = template.clone();
        potion.item_type = ItemType::Potion;
        potion.is_magical = true;
        potion.quantity = 1;
        potion.attributes.insert(ONE_TIME_USE.to_string());
        for name in self.replacements.expand_aliases(&template.name, true) {
            potion.add_base_name(name);
        }
        Ok(potion)
    }

    fn generate_named(&self, power: Power, name: &str, traits: &[String]) -> HoardResult<Item> {
        let selection = resolution::select_named_row(
            self.tables.as_ref(),
            self.collections.as_ref(),
            self.replacements.as_ref(),
            power,
            ItemType::Potion,
            name,
        )?;
        Ok(Self::build_potion(&selection.type_name, selection.amount(), traits))
    }

    fn is_item_of_power(&self, name: &str, power: Power) -> HoardResult<bool> {
        Ok(resolution::power_group(self.collections.as_ref(), name)?.contains(&power))
    }

    fn generator_type(&self) -> &'static str {
        "PotionGenerator"
    }
}
