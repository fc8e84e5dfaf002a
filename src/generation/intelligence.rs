//! # Intelligence Generation
//!
//! Decides whether an item is sentient and builds its intelligence profile:
//! mental stats, communication, powers, special purpose, alignment, ego and
//! personality.

use crate::tables;
use crate::attribute_names::{AMMUNITION, MELEE, ONE_TIME_USE, RANGED};
use crate::{
    draw_distinct, draw_until, CollectionSelector, Dice, GenerationConfig, HoardError,
    HoardResult, Intelligence, Item, ItemType, Magic, TableSelector, WEAK_STAT,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Communication mode that grants languages.
pub const SPEECH: &str = "Speech";

/// Communication modes worth one point of ego each.
pub const EGO_COMMUNICATION: [&str; 3] = ["Telepathy", "Read", "Read magic"];

/// Words that make up alignment strings.
const ALIGNMENT_WORDS: [&str; 6] = ["Lawful", "Neutral", "Chaotic", "Good", "Evil", "True"];

/// Special abilities and the alignment component they exclude.
const OPPOSED_ALIGNMENTS: [(&str, &str); 4] = [
    ("Axiomatic", "Chaotic"),
    ("Anarchic", "Lawful"),
    ("Holy", "Evil"),
    ("Unholy", "Good"),
];

/// Builds intelligence profiles from the intelligence tables.
pub struct IntelligenceGenerator {
    tables: Arc<dyn TableSelector>,
    collections: Arc<dyn CollectionSelector>,
    dice: Arc<dyn Dice>,
    config: GenerationConfig,
}

impl IntelligenceGenerator {
    /// Creates an intelligence generator over the intelligence tables and dice.
    pub fn new(
        tables: Arc<dyn TableSelector>,
        collections: Arc<dyn CollectionSelector>,
        dice: Arc<dyn Dice>,
        config: &GenerationConfig,
    ) -> Self {
        Self {
            tables,
            collections,
            dice,
            config: config.clone(),
        }
    }

    /// Whether an item with these properties could ever be sentient.
    ///
    /// Non-magical items, ammunition and one-time-use items never are.
    pub fn can_be_intelligent(attributes: &BTreeSet<String>, is_magical: bool) -> bool {
        is_magical && !attributes.contains(AMMUNITION) && !attributes.contains(ONE_TIME_USE)
    }

    /// Rolls whether an item is sentient.
    ///
    /// The chance is looked up under "Melee" if the item is a melee item,
    /// else "Ranged", else the item type itself.
    pub fn is_intelligent(
        &self,
        item_type: ItemType,
        attributes: &BTreeSet<String>,
        is_magical: bool,
    ) -> HoardResult<bool> {
        if !Self::can_be_intelligent(attributes, is_magical) {
            return Ok(false);
        }

        let key = if attributes.contains(MELEE) {
            MELEE
        } else if attributes.contains(RANGED) {
            RANGED
        } else {
            item_type.as_str()
        };

        let chance = self
            .tables
            .select_all_type_and_amount(tables::INTELLIGENCE_CHANCES)?
            .into_iter()
            .find(|row| row.type_name == key)
            .ok_or_else(|| {
                HoardError::NotFound(format!(
                    "no intelligence chance for '{}' in {}",
                    key,
                    tables::INTELLIGENCE_CHANCES
                ))
            })?;

        Ok(self.tables.select_from(chance.amount_as_double))
    }

    /// Builds a full intelligence profile for `item`.
    ///
    /// Always returns a profile; callers decide whether to attach it.
    pub fn generate_for(&self, item: &Item) -> HoardResult<Intelligence> {
        let strong_stat = self.select_strong_stat()?;
        let data = self
            .tables
            .select_intelligence_data(tables::INTELLIGENCE_DATA, &strong_stat.to_string())?;

        let mut intelligence = Intelligence {
            senses: data.senses.clone(),
            ..Intelligence::default()
        };
        self.assign_stats(&mut intelligence, strong_stat)?;

        intelligence.communication = self
            .collections
            .select_from(
                tables::INTELLIGENCE_COMMUNICATION,
                &intelligence.intelligence_stat.to_string(),
            )?
            .into_iter()
            .collect();
        intelligence.languages = self.generate_languages(&intelligence)?;

        let lesser = draw_distinct(
            self.config.max_retry_attempts,
            "lesser power",
            &mut intelligence.powers,
            data.lesser_powers_count,
            || self.tables.select_one(tables::INTELLIGENCE_LESSER_POWERS),
        )?;

        let greater_draws = self.resolve_special_purpose(&mut intelligence, data.greater_powers_count)?;
        let greater = draw_distinct(
            self.config.max_retry_attempts,
            "greater power",
            &mut intelligence.powers,
            greater_draws,
            || self.tables.select_one(tables::INTELLIGENCE_GREATER_POWERS),
        )?;

        intelligence.alignment = self.generate_alignment(item)?;
        intelligence.ego = calculate_ego(&item.magic, &intelligence, lesser.len(), greater.len());
        intelligence.personality = self.tables.select_one(tables::PERSONALITY_TRAITS)?;

        log::debug!(
            "Generated intelligence for {}: ego {}, {} powers, alignment {}",
            item.name,
            intelligence.ego,
            intelligence.powers.len(),
            intelligence.alignment
        );

        Ok(intelligence)
    }

    fn select_strong_stat(&self) -> HoardResult<u32> {
        let raw = self.tables.select_one(tables::INTELLIGENCE_STRONG_STATS)?;
        raw.trim().parse().map_err(|_| {
            HoardError::DataInconsistency(format!(
                "{} produced non-numeric stat '{}'",
                tables::INTELLIGENCE_STRONG_STATS,
                raw
            ))
        })
    }

    /// A d3 picks the weak stat: 1 charisma, 2 intelligence, 3 wisdom.
    fn assign_stats(&self, intelligence: &mut Intelligence, strong_stat: u32) -> HoardResult<()> {
        intelligence.charisma_stat = strong_stat;
        intelligence.intelligence_stat = strong_stat;
        intelligence.wisdom_stat = strong_stat;

        match self.dice.roll(1, 3) {
            1 => intelligence.charisma_stat = WEAK_STAT,
            2 => intelligence.intelligence_stat = WEAK_STAT,
            3 => intelligence.wisdom_stat = WEAK_STAT,
            other => {
                return Err(HoardError::DataInconsistency(format!(
                    "d3 rolled {}",
                    other
                )))
            }
        }

        Ok(())
    }

    fn generate_languages(&self, intelligence: &Intelligence) -> HoardResult<BTreeSet<String>> {
        let mut languages = BTreeSet::new();
        if !intelligence.communicates_by(SPEECH) {
            return Ok(languages);
        }

        languages.insert(self.config.common_language.clone());
        let bonus_languages = ability_modifier(intelligence.intelligence_stat).max(0) as usize;
        draw_distinct(
            self.config.max_retry_attempts,
            "language",
            &mut languages,
            bonus_languages,
            || self.tables.select_one(tables::LANGUAGES),
        )?;

        Ok(languages)
    }

    /// Rolls for a special purpose and returns how many greater powers to draw.
    ///
    /// A special purpose costs one greater power; failing the roll grants a
    /// bonus one.
    fn resolve_special_purpose(
        &self,
        intelligence: &mut Intelligence,
        greater_powers: usize,
    ) -> HoardResult<usize> {
        if greater_powers == 0 {
            return Ok(0);
        }

        let threshold = special_purpose_threshold(greater_powers);
        if !self.dice.roll_as_boolean(4, threshold) {
            return Ok(greater_powers + 1);
        }

        intelligence.special_purpose = self.tables.select_one(tables::INTELLIGENCE_SPECIAL_PURPOSES)?;
        intelligence.dedicated_power = self.tables.select_one(tables::INTELLIGENCE_DEDICATED_POWERS)?;
        Ok(greater_powers - 1)
    }

    fn generate_alignment(&self, item: &Item) -> HoardResult<String> {
        let registered = self
            .collections
            .select_all_from(tables::ITEM_ALIGNMENT_REQUIREMENTS)?;
        let constraints = AlignmentConstraints::for_item(item, &registered);

        draw_until(
            self.config.max_retry_attempts,
            "alignment",
            || self.tables.select_one(tables::INTELLIGENCE_ALIGNMENTS),
            |candidate| constraints.allows(candidate),
        )
    }
}

/// d4 threshold for the special-purpose roll: 1 greater power needs a 4,
/// 2 need a 3, 3 or more need a 2.
pub fn special_purpose_threshold(greater_powers: usize) -> u32 {
    5usize.saturating_sub(greater_powers).clamp(1, 4) as u32
}

/// Standard ability modifier for a stat.
pub fn ability_modifier(stat: u32) -> i32 {
    (stat as i32 - 10).div_euclid(2)
}

/// Ego score of an intelligent item.
///
/// One point per point of bonus and bonus equivalent, one per lesser power,
/// two per greater power, four for a dedicated power, one per ego-worthy
/// communication mode, plus the modifiers of all three mental stats.
pub fn calculate_ego(
    magic: &Magic,
    intelligence: &Intelligence,
    lesser_powers: usize,
    greater_powers: usize,
) -> i32 {
    let abilities: i32 = magic
        .special_abilities
        .iter()
        .map(|ability| ability.bonus_equivalent)
        .sum();
    let powers = lesser_powers as i32 + 2 * greater_powers as i32;
    let purpose = if intelligence.has_special_purpose() { 4 } else { 0 };
    let communication = EGO_COMMUNICATION
        .iter()
        .filter(|mode| intelligence.communicates_by(mode))
        .count() as i32;
    let stats: i32 = intelligence.stats().iter().map(|stat| ability_modifier(*stat)).sum();

    magic.bonus + abilities + powers + purpose + communication + stats
}

/// Every rule an intelligent item's alignment must satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentConstraints {
    /// Registered requirement lists; each needs one matching entry
    requirements: Vec<Vec<String>>,
    /// Full alignments declared by traits
    exact: Vec<String>,
    /// Single alignment words declared by traits
    fragments: Vec<String>,
    /// Alignment words ruled out by opposed special abilities
    excluded: Vec<&'static str>,
}

impl AlignmentConstraints {
    /// Collects the constraints that apply to `item`.
    ///
    /// `registered` holds per-item-name requirement lists; a list applies when
    /// the item answers to its key.
    pub fn for_item(item: &Item, registered: &[(String, Vec<String>)]) -> Self {
        let requirements = registered
            .iter()
            .filter(|(name, _)| item.name_matches(name))
            .map(|(_, allowed)| allowed.clone())
            .collect();

        let mut exact = Vec::new();
        let mut fragments = Vec::new();
        for fragment in item.traits.iter().filter_map(|t| alignment_fragment(t)) {
            if fragment.split_whitespace().count() == 1 {
                fragments.push(fragment.to_string());
            } else {
                exact.push(fragment.to_string());
            }
        }

        let excluded = OPPOSED_ALIGNMENTS
            .iter()
            .filter(|(ability, _)| item.has_special_ability(ability))
            .map(|(_, opposed)| *opposed)
            .collect();

        Self {
            requirements,
            exact,
            fragments,
            excluded,
        }
    }

    /// Whether `alignment` satisfies every constraint.
    pub fn allows(&self, alignment: &str) -> bool {
        let meets_requirements = self.requirements.iter().all(|allowed| {
            allowed.iter().any(|requirement| {
                alignment == requirement
                    || alignment.starts_with(requirement.as_str())
                    || alignment.ends_with(requirement.as_str())
            })
        });

        meets_requirements
            && self.exact.iter().all(|required| alignment == required)
            && self.fragments.iter().all(|word| alignment.contains(word.as_str()))
            && self.excluded.iter().all(|opposed| !alignment.contains(opposed))
    }

    /// Whether no rule narrows the alignment at all.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Extracts the alignment named by a trait, or by its parenthesised part.
fn alignment_fragment(trait_name: &str) -> Option<&str> {
    let fragment = match (trait_name.find('('), trait_name.rfind(')')) {
        (Some(open), Some(close)) if open < close => &trait_name[open + 1..close],
        _ => trait_name,
    }
    .trim();

    let is_alignment = !fragment.is_empty()
        && fragment
            .split_whitespace()
            .all(|word| ALIGNMENT_WORDS.contains(&word));

    if is_alignment {
        Some(fragment)
    } else {
        None
    }
}
