//! # Generation Module
//!
//! Magic-item generators and the wrappers composed around them.
//!
//! Every generator implements [`MagicalItemGenerator`]. Item-type generators
//! (rings, potions, armor) build items from weighted tables; wrappers (mundane
//! proxy, intelligence decorator, curse decorator) hold the next stage behind
//! the same trait and post-process its results.

pub mod armor;
pub mod collaborators;
pub mod curse_decorator;
pub mod intelligence;
pub mod intelligence_decorator;
pub mod mundane_proxy;
pub mod potions;
pub mod rings;

pub use armor::*;
pub use collaborators::*;
pub use curse_decorator::*;
pub use intelligence::*;
pub use intelligence_decorator::*;
pub use mundane_proxy::*;
pub use potions::*;
pub use rings::*;

use crate::{config, HoardResult, Item, Power};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Configuration shared by the generators.
///
/// Controls the safety ceiling on redraw loops and a few rule constants that
/// vary between table sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Seed for the built-in dice roller
    pub seed: u64,
    /// Ceiling for every redraw loop before failing with a diagnostic
    pub max_retry_attempts: usize,
    /// Maximum ability slots granted by "special ability and roll again" armor rows
    pub max_armor_ability_slots: usize,
    /// Language every speaking intelligent item knows
    pub common_language: String,
}

impl GenerationConfig {
    /// Creates a configuration with the standard rule constants.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoard::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.seed, 12345);
    /// assert_eq!(config.max_armor_ability_slots, 2);
    /// assert_eq!(config.common_language, "Common");
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_retry_attempts: config::DEFAULT_MAX_RETRY_ATTEMPTS,
            max_armor_ability_slots: config::DEFAULT_MAX_ARMOR_ABILITY_SLOTS,
            common_language: config::DEFAULT_COMMON_LANGUAGE.to_string(),
        }
    }

    /// Creates a configuration for tests, where runaway loops should fail fast.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            max_retry_attempts: 100,
            ..Self::new(seed)
        }
    }

    /// Parses a configuration from JSON.
    pub fn load_from_json(json: &str) -> HoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn load_from_file(path: impl AsRef<Path>) -> HoardResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::load_from_json(&json)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn save_to_json(&self) -> HoardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(config::DEFAULT_SEED)
    }
}

/// Shared contract of every magical item generator and wrapper.
pub trait MagicalItemGenerator: Send + Sync {
    /// Generates a random item of the given power.
    fn generate_random(&self, power: Power) -> HoardResult<Item>;

    /// Completes a template into a full item.
    ///
    /// Wrappers only add random decoration (curses, intelligence) when
    /// `allow_random_decoration` is set.
    fn generate(&self, template: &Item, allow_random_decoration: bool) -> HoardResult<Item>;

    /// Generates the named item at (or near) the given power.
    fn generate_named(&self, power: Power, name: &str, traits: &[String]) -> HoardResult<Item>;

    /// Whether the named item can be generated at this power.
    fn is_item_of_power(&self, name: &str, power: Power) -> HoardResult<bool>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Wraps a base generator in the standard decoration order.
///
/// The mundane proxy sits innermost and the curse decorator outermost, so a
/// specific cursed item substituted by the curse decorator is never given a
/// second intelligence roll.
pub fn decorate(
    base: Box<dyn MagicalItemGenerator>,
    intelligence: Arc<IntelligenceGenerator>,
    curses: Arc<dyn CurseGenerator>,
    config: &GenerationConfig,
) -> Box<dyn MagicalItemGenerator> {
    let proxied = MagicalItemGeneratorMundaneProxy::new(base);
    let intelligent = MagicalItemGeneratorIntelligenceDecorator::new(Box::new(proxied), intelligence);
    let cursed = MagicalItemGeneratorCurseDecorator::new(Box::new(intelligent), curses, config);
    Box::new(cursed)
}

/// Helpers for resolving named items against power-tier tables.
pub mod resolution {
    use crate::tables;
    use crate::{
        select_random_from, CollectionSelector, HoardError, HoardResult, ItemType, Power,
        ReplacementSelector, TableSelector, TypeAndAmountSelection,
    };

    /// Powers the named item may be generated at.
    pub fn power_group(collections: &dyn CollectionSelector, name: &str) -> HoardResult<Vec<Power>> {
        collections
            .select_from(tables::POWER_GROUPS, name)?
            .iter()
            .map(|power| {
                power.parse::<Power>().map_err(|_| {
                    HoardError::DataInconsistency(format!(
                        "power group of '{}' lists unknown power '{}'",
                        name, power
                    ))
                })
            })
            .collect()
    }

    /// Picks the power to generate at when `requested` is not in the group.
    ///
    /// The nearest lower tier wins; failing that, the nearest higher one.
    pub fn adjust_power(requested: Power, possible: &[Power]) -> HoardResult<Power> {
        if possible.contains(&requested) {
            return Ok(requested);
        }

        let lower = possible.iter().filter(|power| **power < requested).max();
        let higher = possible.iter().filter(|power| **power > requested).min();

        lower.or(higher).copied().ok_or_else(|| {
            HoardError::DataInconsistency(format!("empty power group for {} request", requested))
        })
    }

    /// Resolves a named item to one weighted row of its power-tier table.
    ///
    /// Names that expand through the replacement registry skip the power-group
    /// check and use the requested power as-is.
    pub fn select_named_row(
        tables: &dyn TableSelector,
        collections: &dyn CollectionSelector,
        replacements: &dyn ReplacementSelector,
        power: Power,
        item_type: ItemType,
        name: &str,
    ) -> HoardResult<TypeAndAmountSelection> {
        let names = replacements.expand_aliases(name, true);
        let replaced = names.len() != 1 || names[0] != name;

        let power = if replaced {
            log::warn!(
                "'{}' expanded to {:?}; power group check skipped at {}",
                name,
                names,
                power
            );
            power
        } else {
            adjust_power(power, &power_group(collections, name)?)?
        };

        let table = tables::power_item_types(power, item_type);
        let matches: Vec<TypeAndAmountSelection> = tables
            .select_all_type_and_amount(&table)?
            .into_iter()
            .filter(|row| names.contains(&row.type_name))
            .collect();

        match matches.len() {
            0 => Err(HoardError::NotFound(format!(
                "no row of {} matches '{}'",
                table, name
            ))),
            1 => Ok(matches[0].clone()),
            _ => select_random_from(collections, &matches).cloned(),
        }
    }
}
