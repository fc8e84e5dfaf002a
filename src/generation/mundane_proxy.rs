//! # Mundane Proxy
//!
//! Guards a magical item generator against the mundane power tier.

use crate::{HoardError, HoardResult, Item, MagicalItemGenerator, Power};

/// Rejects mundane requests before they reach the wrapped generator.
pub struct MagicalItemGeneratorMundaneProxy {
    inner: Box<dyn MagicalItemGenerator>,
}

impl MagicalItemGeneratorMundaneProxy {
    /// Wraps `inner`.
    pub fn new(inner: Box<dyn MagicalItemGenerator>) -> Self {
        Self { inner }
    }

    fn reject_mundane(&self, power: Power) -> HoardResult<()> {
        if power.is_mundane() {
            return Err(HoardError::InvalidArgument(format!(
                "{} cannot generate a magical item at power {}",
                self.inner.generator_type(),
                power
            )));
        }
        Ok(())
    }
}

impl MagicalItemGenerator for MagicalItemGeneratorMundaneProxy {
    fn generate_random(&self, power: Power) -> HoardResult<Item> {
        self.reject_mundane(power)?;
        self.inner.generate_random(power)
    }

    fn generate(&self, template: &Item, allow_random_decoration: bool) -> HoardResult<Item> {
        self.inner.generate(template, allow_random_decoration)
    }

    fn generate_named(&self, power: Power, name: &str, traits: &[String]) -> HoardResult<Item> {
        self.reject_mundane(power)?;
        self.inner.generate_named(power, name, traits)
    }

    fn is_item_of_power(&self, name: &str, power: Power) -> HoardResult<bool> {
        if power.is_mundane() {
            return Ok(false);
        }
        self.inner.is_item_of_power(name, power)
    }

    fn generator_type(&self) -> &'static str {
        "MagicalItemGeneratorMundaneProxy"
    }
}
