//! # Curse Decoration
//!
//! Wraps any magical item generator and may curse what it produces. A curse
//! draw of [`tables::SPECIFIC_CURSED_ITEMS`] replaces the whole item with a
//! specific cursed item when the item type allows it.

use crate::tables;
use crate::{
    draw_until, CurseGenerator, GenerationConfig, HoardResult, Item, MagicalItemGenerator, Power,
};
use std::sync::Arc;

/// Curses items produced by the wrapped generator.
pub struct MagicalItemGeneratorCurseDecorator {
    inner: Box<dyn MagicalItemGenerator>,
    curses: Arc<dyn CurseGenerator>,
    max_retry_attempts: usize,
}

impl MagicalItemGeneratorCurseDecorator {
    /// Wraps `inner`, drawing curses from `curses`.
    pub fn new(
        inner: Box<dyn MagicalItemGenerator>,
        curses: Arc<dyn CurseGenerator>,
        config: &GenerationConfig,
    ) -> Self {
        Self {
            inner,
            curses,
            max_retry_attempts: config.max_retry_attempts,
        }
    }

    /// Draws curse text, redrawing the specific-cursed marker unless it may be used.
    fn draw_curse(&self, allow_specific: bool) -> HoardResult<String> {
        draw_until(
            self.max_retry_attempts,
            "curse",
            || self.curses.generate_curse(),
            |curse| allow_specific || curse != tables::SPECIFIC_CURSED_ITEMS,
        )
    }

    fn add_curse(&self, mut item: Item) -> HoardResult<Item> {
        if !self.curses.has_curse(&item) {
            return Ok(item);
        }

        let can_be_specific = self
            .curses
            .item_type_can_be_specific_cursed_item(item.item_type);
        let curse = self.draw_curse(can_be_specific)?;

        if curse == tables::SPECIFIC_CURSED_ITEMS {
            let cursed = self.curses.generate_specific_cursed_item(item.item_type)?;
            log::warn!(
                "Replaced '{}' with specific cursed item '{}'",
                item.name,
                cursed.name
            );
            return Ok(cursed);
        }

        log::debug!("Cursed '{}' with '{}'", item.name, curse);
        item.magic.curse = curse;
        Ok(item)
    }
}

impl MagicalItemGenerator for MagicalItemGeneratorCurseDecorator {
    fn generate_random(&self, power: Power) -> HoardResult<Item> {
        let item = self.inner.generate_random(power)?;
        self.add_curse(item)
    }

    fn generate(&self, template: &Item, allow_random_decoration: bool) -> HoardResult<Item> {
        if self.curses.is_specific_cursed_item(template) {
            return self.curses.generate_from(template);
        }

        let item = self.inner.generate(template, allow_random_decoration)?;
        if allow_random_decoration {
            self.add_curse(item)
        } else {
            Ok(item)
        }
    }

    fn generate_named(&self, power: Power, name: &str, traits: &[String]) -> HoardResult<Item> {
        let mut item = self.inner.generate_named(power, name, traits)?;
        if !self.curses.has_curse(&item) {
            return Ok(item);
        }

        if self.curses.is_specific_cursed_item(&item) {
            return self.curses.generate_from(&item);
        }

        // The caller asked for this item by name, so it is never swapped out.
        item.magic.curse = self.draw_curse(false)?;
        Ok(item)
    }

    fn is_item_of_power(&self, name: &str, power: Power) -> HoardResult<bool> {
        self.inner.is_item_of_power(name, power)
    }

    fn generator_type(&self) -> &'static str {
        "MagicalItemGeneratorCurseDecorator"
    }
}
