//! # Intelligence Decoration
//!
//! Wraps a magical item generator and attaches an intelligence profile to the
//! items that roll as sentient.

use crate::{HoardResult, IntelligenceGenerator, Item, MagicalItemGenerator, Power};
use std::sync::Arc;

/// Makes items produced by the wrapped generator sentient when they roll it.
pub struct MagicalItemGeneratorIntelligenceDecorator {
    inner: Box<dyn MagicalItemGenerator>,
    intelligence: Arc<IntelligenceGenerator>,
}

impl MagicalItemGeneratorIntelligenceDecorator {
    /// Wraps `inner`, rolling profiles with `intelligence`.
    pub fn new(inner: Box<dyn MagicalItemGenerator>, intelligence: Arc<IntelligenceGenerator>) -> Self {
        Self {
            inner,
            intelligence,
        }
    }

    fn add_intelligence(&self, mut item: Item) -> HoardResult<Item> {
        // Items that arrive already sentient (specific items) keep their profile.
        if item.magic.intelligence.is_some() {
            return Ok(item);
        }

        if self
            .intelligence
            .is_intelligent(item.item_type, &item.attributes, item.is_magical)?
        {
            let profile = self.intelligence.generate_for(&item)?;
            log::debug!("'{}' is intelligent (ego {})", item.name, profile.ego);
            item.magic.intelligence = Some(profile);
        }

        Ok(item)
    }
}

impl MagicalItemGenerator for MagicalItemGeneratorIntelligenceDecorator {
    fn generate_random(&self, power: Power) -> HoardResult<Item> {
        let item = self.inner.generate_random(power)?;
        self.add_intelligence(item)
    }

    fn generate(&self, template: &Item, allow_random_decoration: bool) -> HoardResult<Item> {
        let item = self.inner.generate(template, allow_random_decoration)?;
        if allow_random_decoration {
            self.add_intelligence(item)
        } else {
            Ok(item)
        }
    }

    fn generate_named(&self, power: Power, name: &str, traits: &[String]) -> HoardResult<Item> {
        let item = self.inner.generate_named(power, name, traits)?;
        self.add_intelligence(item)
    }

    fn is_item_of_power(&self, name: &str, power: Power) -> HoardResult<bool> {
        self.inner.is_item_of_power(name, power)
    }

    fn generator_type(&self) -> &'static str {
        "MagicalItemGeneratorIntelligenceDecorator"
    }
}
