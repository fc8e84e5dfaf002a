//! # Ring Generation
//!
//! Rings resolve a subtype from the power-tier ring table, pick up charges when
//! the ring is charged, and fill spell contents for the spell storing rings and
//! the ring of counterspells.

use crate::attribute_names::CHARGED;
use crate::generation::resolution;
use crate::tables;
use crate::{
    ChargesGenerator, CollectionSelector, HoardResult, Item, ItemType, MagicalItemGenerator, Power,
    ReplacementSelector, SpellGenerator, TableSelector,
};
use std::sync::Arc;

/// Ring names with special generation rules.
pub mod ring_names {
    pub const MINOR_SPELL_STORING: &str = "Minor spell storing";
    pub const SPELL_STORING: &str = "Spell storing";
    pub const MAJOR_SPELL_STORING: &str = "Major spell storing";
    pub const COUNTERSPELLS: &str = "Counterspells";
}

/// Highest spell level a ring of counterspells can hold.
pub const MAX_COUNTERSPELL_LEVEL: u32 = 6;

/// How a ring's contents are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingKind {
    /// Stores spells up to a total number of spell levels
    SpellStoring { capacity: u32 },
    /// Holds a single spell of level 6 or lower
    Counterspells,
    /// No contents
    Plain,
}

impl RingKind {
    /// Maps a resolved ring name to its content rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoard::RingKind;
    ///
    /// assert_eq!(RingKind::from_name("Minor spell storing"), RingKind::SpellStoring { capacity: 3 });
    /// assert_eq!(RingKind::from_name("Protection"), RingKind::Plain);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            ring_names::MINOR_SPELL_STORING => RingKind::SpellStoring { capacity: 3 },
            ring_names::SPELL_STORING => RingKind::SpellStoring { capacity: 5 },
            ring_names::MAJOR_SPELL_STORING => RingKind::SpellStoring { capacity: 10 },
            ring_names::COUNTERSPELLS => RingKind::Counterspells,
            _ => RingKind::Plain,
        }
    }
}

/// Generates magical rings.
pub struct RingGenerator {
    tables: Arc<dyn TableSelector>,
    collections: Arc<dyn CollectionSelector>,
    replacements: Arc<dyn ReplacementSelector>,
    charges: Arc<dyn ChargesGenerator>,
    spells: Arc<dyn SpellGenerator>,
}

impl RingGenerator {
    /// Creates a ring generator over the ring tables and content collaborators.
    pub fn new(
        tables: Arc<dyn TableSelector>,
        collections: Arc<dyn CollectionSelector>,
        replacements: Arc<dyn ReplacementSelector>,
        charges: Arc<dyn ChargesGenerator>,
        spells: Arc<dyn SpellGenerator>,
    ) -> Self {
        Self {
            tables,
            collections,
            replacements,
            charges,
            spells,
        }
    }

    fn build_ring(&self, name: &str, bonus: i32, power: Power, traits: &[String]) -> HoardResult<Item> {
        let mut ring = Item::magical(name, ItemType::Ring, bonus);
        ring.add_traits(traits.iter().cloned());
        self.apply_attributes(&mut ring, name)?;
        ring.contents = self.generate_contents(RingKind::from_name(name), power)?;

        log::debug!(
            "Built ring '{}' (+{}) with {} stored spells",
            ring.name,
            ring.magic.bonus,
            ring.contents.len()
        );
        Ok(ring)
    }

    fn apply_attributes(&self, ring: &mut Item, name: &str) -> HoardResult<()> {
        ring.attributes = self
            .collections
            .select_from(&tables::item_attributes(ItemType::Ring), name)?
            .into_iter()
            .collect();

        if ring.has_attribute(CHARGED) && ring.magic.charges == 0 {
            ring.magic.charges = self.charges.generate_for(ItemType::Ring, name)?;
        }
        Ok(())
    }

    fn generate_contents(&self, kind: RingKind, power: Power) -> HoardResult<Vec<String>> {
        match kind {
            RingKind::SpellStoring { capacity } => self.generate_stored_spells(power, capacity),
            RingKind::Counterspells => self.generate_counterspell(power),
            RingKind::Plain => Ok(Vec::new()),
        }
    }

    /// Rolls spells until the ring's spell levels are used up.
    ///
    /// Every roll consumes capacity, even when the spell does not fit, and a
    /// cantrip still occupies one level.
    fn generate_stored_spells(&self, power: Power, capacity: u32) -> HoardResult<Vec<String>> {
        let mut stored = Vec::new();
        let mut used = 0;

        while used < capacity {
            let spell_type = self.spells.generate_type()?;
            let level = self.spells.generate_level(power)?;
            let cost = level.max(1);

            if used + cost <= capacity {
                stored.push(self.spells.generate(&spell_type, level)?);
            }
            used += cost;
        }

        Ok(stored)
    }

    /// A level above six yields an empty ring rather than a reroll.
    fn generate_counterspell(&self, power: Power) -> HoardResult<Vec<String>> {
        let level = self.spells.generate_level(power)?;
        if level > MAX_COUNTERSPELL_LEVEL {
            return Ok(Vec::new());
        }

        let spell_type = self.spells.generate_type()?;
        Ok(vec![self.spells.generate(&spell_type, level)?])
    }
}

impl MagicalItemGenerator for RingGenerator {
    fn generate_random(&self, power: Power) -> HoardResult<Item> {
        let table = tables::power_item_types(power, ItemType::Ring);
        let selection = self.tables.select_type_and_amount(&table)?;
        self.build_ring(&selection.type_name, selection.amount(), power, &[])
    }

    fn generate(&self, template: &Item, _allow_random_decoration: bool) -> HoardResult<Item> {
        let mut ring = template.clone();
        ring.item_type = ItemType::Ring;
        ring.is_magical = true;
        ring.quantity = 1;
        for name in self.replacements.expand_aliases(&template.name, true) {
            ring.add_base_name(name);
        }
        self.apply_attributes(&mut ring, &template.name)?;
        Ok(ring)
    }

    fn generate_named(&self, power: Power, name: &str, traits: &[String]) -> HoardResult<Item> {
        let selection = resolution::select_named_row(
            self.tables.as_ref(),
            self.collections.as_ref(),
            self.replacements.as_ref(),
            power,
            ItemType::Ring,
            name,
        )?;
        self.build_ring(&selection.type_name, selection.amount(), power, traits)
    }

    fn is_item_of_power(&self, name: &str, power: Power) -> HoardResult<bool> {
        Ok(resolution::power_group(self.collections.as_ref(), name)?.contains(&power))
    }

    fn generator_type(&self) -> &'static str {
        "RingGenerator"
    }
}
