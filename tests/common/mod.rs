//! Scripted collaborators shared by the integration tests.
//!
//! Every scripted queue is "sticky": once only one value is left it keeps
//! being returned, so a test only scripts the draws it cares about.

#![allow(dead_code)]

use hoard::{
    ChargesGenerator, CollectionSelector, CurseGenerator, Dice, HoardError, HoardResult,
    IntelligenceDataSelection, Item, ItemType, MagicalItemGenerator, Power, ReplacementSelector,
    SpecialAbilitiesGenerator, SpecialAbility, SpecificGearGenerator, SpellGenerator,
    TableSelector, TypeAndAmountSelection,
};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn next_sticky<T: Clone>(queue: &mut VecDeque<T>) -> Option<T> {
    if queue.len() > 1 {
        queue.pop_front()
    } else {
        queue.front().cloned()
    }
}

#[derive(Default)]
pub struct FakeTables {
    singles: Mutex<HashMap<String, VecDeque<String>>>,
    weighted: Mutex<HashMap<String, VecDeque<TypeAndAmountSelection>>>,
    all_weighted: Mutex<HashMap<String, Vec<TypeAndAmountSelection>>>,
    intelligence: Mutex<HashMap<String, IntelligenceDataSelection>>,
    percentiles: Mutex<VecDeque<bool>>,
    percentages: Mutex<Vec<f64>>,
    draws: Mutex<HashMap<String, usize>>,
}

impl FakeTables {
    pub fn script_one(&self, table: &str, values: &[&str]) {
        self.singles
            .lock()
            .unwrap()
            .insert(table.to_string(), strings(values).into_iter().collect());
    }

    pub fn script_weighted(&self, table: &str, rows: &[(&str, f64)]) {
        let rows = rows
            .iter()
            .map(|(type_name, amount)| TypeAndAmountSelection::new(*type_name, *amount))
            .collect();
        self.weighted.lock().unwrap().insert(table.to_string(), rows);
    }

    pub fn script_all(&self, table: &str, rows: &[(&str, f64)]) {
        let rows = rows
            .iter()
            .map(|(type_name, amount)| TypeAndAmountSelection::new(*type_name, *amount))
            .collect();
        self.all_weighted.lock().unwrap().insert(table.to_string(), rows);
    }

    pub fn script_intelligence(&self, key: &str, data: IntelligenceDataSelection) {
        self.intelligence.lock().unwrap().insert(key.to_string(), data);
    }

    pub fn script_percentile(&self, results: &[bool]) {
        *self.percentiles.lock().unwrap() = results.iter().copied().collect();
    }

    /// Percentages passed to the percentile gate, in call order.
    pub fn percentages(&self) -> Vec<f64> {
        self.percentages.lock().unwrap().clone()
    }

    /// How many draws were made from `table`.
    pub fn draws(&self, table: &str) -> usize {
        self.draws.lock().unwrap().get(table).copied().unwrap_or(0)
    }

    fn count(&self, table: &str) {
        *self.draws.lock().unwrap().entry(table.to_string()).or_insert(0) += 1;
    }
}

impl TableSelector for FakeTables {
    fn select_one(&self, table: &str) -> HoardResult<String> {
        self.count(table);
        let mut singles = self.singles.lock().unwrap();
        singles
            .get_mut(table)
            .and_then(next_sticky)
            .ok_or_else(|| HoardError::NotFound(table.to_string()))
    }

    fn select_type_and_amount(&self, table: &str) -> HoardResult<TypeAndAmountSelection> {
        self.count(table);
        let mut weighted = self.weighted.lock().unwrap();
        weighted
            .get_mut(table)
            .and_then(next_sticky)
            .ok_or_else(|| HoardError::NotFound(table.to_string()))
    }

    fn select_all_type_and_amount(&self, table: &str) -> HoardResult<Vec<TypeAndAmountSelection>> {
        self.all_weighted
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .ok_or_else(|| HoardError::NotFound(table.to_string()))
    }

    fn select_intelligence_data(
        &self,
        table: &str,
        key: &str,
    ) -> HoardResult<IntelligenceDataSelection> {
        self.intelligence
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| HoardError::NotFound(format!("{}/{}", table, key)))
    }

    fn select_from(&self, percentage: f64) -> bool {
        self.percentages.lock().unwrap().push(percentage);
        next_sticky(&mut *self.percentiles.lock().unwrap()).unwrap_or(false)
    }
}

#[derive(Default)]
pub struct FakeCollections {
    collections: Mutex<Vec<(String, String, Vec<String>)>>,
    indices: Mutex<VecDeque<usize>>,
}

impl FakeCollections {
    pub fn script(&self, table: &str, key: &str, values: &[&str]) {
        let mut collections = self.collections.lock().unwrap();
        collections.retain(|(t, k, _)| !(t == table && k == key));
        collections.push((table.to_string(), key.to_string(), strings(values)));
    }

    pub fn script_indices(&self, indices: &[usize]) {
        *self.indices.lock().unwrap() = indices.iter().copied().collect();
    }
}

impl CollectionSelector for FakeCollections {
    fn select_from(&self, table: &str, key: &str) -> HoardResult<Vec<String>> {
        self.collections
            .lock()
            .unwrap()
            .iter()
            .find(|(t, k, _)| t == table && k == key)
            .map(|(_, _, values)| values.clone())
            .ok_or_else(|| HoardError::NotFound(format!("{}/{}", table, key)))
    }

    fn select_all_from(&self, table: &str) -> HoardResult<Vec<(String, Vec<String>)>> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _, _)| t == table)
            .map(|(_, key, values)| (key.clone(), values.clone()))
            .collect())
    }

    fn select_random_index(&self, _len: usize) -> usize {
        next_sticky(&mut *self.indices.lock().unwrap()).unwrap_or(0)
    }
}

#[derive(Default)]
pub struct FakeReplacements {
    replacements: Mutex<HashMap<String, Vec<String>>>,
}

impl FakeReplacements {
    pub fn script(&self, name: &str, replacements: &[&str]) {
        self.replacements
            .lock()
            .unwrap()
            .insert(name.to_string(), strings(replacements));
    }
}

impl ReplacementSelector for FakeReplacements {
    fn expand_aliases(&self, name: &str, _recursive: bool) -> Vec<String> {
        self.replacements
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_else(|| vec![name.to_string()])
    }
}

#[derive(Default)]
pub struct FakeDice {
    rolls: Mutex<VecDeque<u32>>,
    booleans: Mutex<VecDeque<bool>>,
    thresholds: Mutex<Vec<(u32, u32)>>,
}

impl FakeDice {
    pub fn script_rolls(&self, rolls: &[u32]) {
        *self.rolls.lock().unwrap() = rolls.iter().copied().collect();
    }

    pub fn script_booleans(&self, results: &[bool]) {
        *self.booleans.lock().unwrap() = results.iter().copied().collect();
    }

    /// `(sides, threshold)` of every boolean roll, in call order.
    pub fn thresholds(&self) -> Vec<(u32, u32)> {
        self.thresholds.lock().unwrap().clone()
    }
}

impl Dice for FakeDice {
    fn roll(&self, _quantity: u32, _sides: u32) -> u32 {
        next_sticky(&mut *self.rolls.lock().unwrap()).unwrap_or(1)
    }

    fn roll_as_boolean(&self, sides: u32, threshold: u32) -> bool {
        self.thresholds.lock().unwrap().push((sides, threshold));
        next_sticky(&mut *self.booleans.lock().unwrap()).unwrap_or(false)
    }
}

#[derive(Default)]
pub struct FakeCharges {
    pub calls: Mutex<Vec<(ItemType, String)>>,
}

impl ChargesGenerator for FakeCharges {
    fn generate_for(&self, item_type: ItemType, name: &str) -> HoardResult<u32> {
        self.calls.lock().unwrap().push((item_type, name.to_string()));
        Ok(50)
    }
}

#[derive(Default)]
pub struct FakeSpells {
    types: Mutex<VecDeque<String>>,
    levels: Mutex<VecDeque<u32>>,
    powers: Mutex<Vec<Power>>,
}

impl FakeSpells {
    pub fn script_types(&self, types: &[&str]) {
        *self.types.lock().unwrap() = strings(types).into_iter().collect();
    }

    pub fn script_levels(&self, levels: &[u32]) {
        *self.levels.lock().unwrap() = levels.iter().copied().collect();
    }

    pub fn level_powers(&self) -> Vec<Power> {
        self.powers.lock().unwrap().clone()
    }
}

impl SpellGenerator for FakeSpells {
    fn generate_type(&self) -> HoardResult<String> {
        Ok(next_sticky(&mut *self.types.lock().unwrap()).unwrap_or_else(|| "Arcane".to_string()))
    }

    fn generate_level(&self, power: Power) -> HoardResult<u32> {
        self.powers.lock().unwrap().push(power);
        Ok(next_sticky(&mut *self.levels.lock().unwrap()).unwrap_or(1))
    }

    fn generate(&self, spell_type: &str, level: u32) -> HoardResult<String> {
        Ok(format!("{} spell {}", spell_type, level))
    }
}

#[derive(Default)]
pub struct FakeAbilities {
    pub requests: Mutex<Vec<(String, Power, usize)>>,
}

impl SpecialAbilitiesGenerator for FakeAbilities {
    fn generate_for(
        &self,
        item: &Item,
        power: Power,
        quantity: usize,
    ) -> HoardResult<Vec<SpecialAbility>> {
        self.requests
            .lock()
            .unwrap()
            .push((item.name.clone(), power, quantity));
        Ok((1..=quantity)
            .map(|n| SpecialAbility::new(format!("Ability {}", n), 1))
            .collect())
    }
}

#[derive(Default)]
pub struct FakeSpecificGear {
    specific: Mutex<HashSet<(String, String)>>,
    possible: Mutex<HashSet<(Power, String, String)>>,
    pub prototypes: Mutex<Vec<(Power, String, Option<String>)>>,
}

impl FakeSpecificGear {
    pub fn register(&self, specific_type: &str, name: &str) {
        self.specific
            .lock()
            .unwrap()
            .insert((specific_type.to_string(), name.to_string()));
    }

    pub fn allow(&self, power: Power, specific_type: &str, base_name: &str) {
        self.possible.lock().unwrap().insert((
            power,
            specific_type.to_string(),
            base_name.to_string(),
        ));
    }
}

impl SpecificGearGenerator for FakeSpecificGear {
    fn is_specific(&self, specific_type: &str, name: &str) -> bool {
        self.specific
            .lock()
            .unwrap()
            .contains(&(specific_type.to_string(), name.to_string()))
    }

    fn can_be_specific(&self, power: Power, specific_type: &str, base_name: &str) -> bool {
        self.possible.lock().unwrap().contains(&(
            power,
            specific_type.to_string(),
            base_name.to_string(),
        ))
    }

    fn generate_prototype(
        &self,
        power: Power,
        specific_type: &str,
        base_name: Option<&str>,
    ) -> HoardResult<Item> {
        self.prototypes.lock().unwrap().push((
            power,
            specific_type.to_string(),
            base_name.map(str::to_string),
        ));
        let name = base_name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Prototype {}", specific_type));
        Ok(Item::new(name, ItemType::Armor))
    }

    fn generate_from(&self, template: &Item) -> HoardResult<Item> {
        let mut item = template.clone();
        item.is_magical = true;
        item.traits.insert("Specific".to_string());
        Ok(item)
    }
}

#[derive(Default)]
pub struct FakeCurses {
    cursed: Mutex<bool>,
    curses: Mutex<VecDeque<String>>,
    eligible: Mutex<HashSet<ItemType>>,
    specific_names: Mutex<HashSet<String>>,
    pub curse_draws: Mutex<usize>,
}

impl FakeCurses {
    pub fn script_cursed(&self, cursed: bool) {
        *self.cursed.lock().unwrap() = cursed;
    }

    pub fn script_curses(&self, curses: &[&str]) {
        *self.curses.lock().unwrap() = strings(curses).into_iter().collect();
    }

    pub fn allow_specific(&self, item_type: ItemType) {
        self.eligible.lock().unwrap().insert(item_type);
    }

    pub fn register_specific(&self, name: &str) {
        self.specific_names.lock().unwrap().insert(name.to_string());
    }

    pub fn draws(&self) -> usize {
        *self.curse_draws.lock().unwrap()
    }
}

impl CurseGenerator for FakeCurses {
    fn has_curse(&self, _item: &Item) -> bool {
        *self.cursed.lock().unwrap()
    }

    fn generate_curse(&self) -> HoardResult<String> {
        *self.curse_draws.lock().unwrap() += 1;
        next_sticky(&mut *self.curses.lock().unwrap())
            .ok_or_else(|| HoardError::NotFound("Curses".to_string()))
    }

    fn item_type_can_be_specific_cursed_item(&self, item_type: ItemType) -> bool {
        self.eligible.lock().unwrap().contains(&item_type)
    }

    fn generate_specific_cursed_item(&self, item_type: ItemType) -> HoardResult<Item> {
        let mut item = Item::magical(format!("Cursed {}", item_type), item_type, 0);
        item.magic.curse = "Specific cursed item".to_string();
        Ok(item)
    }

    fn is_specific_cursed_item(&self, item: &Item) -> bool {
        self.specific_names.lock().unwrap().contains(&item.name)
    }

    fn generate_from(&self, template: &Item) -> HoardResult<Item> {
        let mut item = template.clone();
        item.is_magical = true;
        item.magic.curse = "Specific cursed item".to_string();
        Ok(item)
    }
}

/// Inner generator that hands back a fixed item and records every call.
pub struct StubGenerator {
    item: Item,
    pub calls: Mutex<Vec<String>>,
    of_power: bool,
}

impl StubGenerator {
    pub fn new(item: Item) -> Self {
        Self {
            item,
            calls: Mutex::new(Vec::new()),
            of_power: true,
        }
    }

    pub fn never_of_power(mut self) -> Self {
        self.of_power = false;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MagicalItemGenerator for StubGenerator {
    fn generate_random(&self, power: Power) -> HoardResult<Item> {
        self.record(format!("random {}", power));
        Ok(self.item.clone())
    }

    fn generate(&self, template: &Item, allow_random_decoration: bool) -> HoardResult<Item> {
        self.record(format!("template {} {}", template.name, allow_random_decoration));
        let mut item = self.item.clone();
        item.name = template.name.clone();
        Ok(item)
    }

    fn generate_named(&self, power: Power, name: &str, traits: &[String]) -> HoardResult<Item> {
        self.record(format!("named {} {}", power, name));
        let mut item = self.item.clone();
        item.name = name.to_string();
        item.add_traits(traits.iter().cloned());
        Ok(item)
    }

    fn is_item_of_power(&self, name: &str, power: Power) -> HoardResult<bool> {
        self.record(format!("of power {} {}", name, power));
        Ok(self.of_power)
    }

    fn generator_type(&self) -> &'static str {
        "StubGenerator"
    }
}

/// Lets a test keep a handle on a stub after boxing it into a wrapper.
pub struct SharedStub(pub std::sync::Arc<StubGenerator>);

impl MagicalItemGenerator for SharedStub {
    fn generate_random(&self, power: Power) -> HoardResult<Item> {
        self.0.generate_random(power)
    }

    fn generate(&self, template: &Item, allow_random_decoration: bool) -> HoardResult<Item> {
        self.0.generate(template, allow_random_decoration)
    }

    fn generate_named(&self, power: Power, name: &str, traits: &[String]) -> HoardResult<Item> {
        self.0.generate_named(power, name, traits)
    }

    fn is_item_of_power(&self, name: &str, power: Power) -> HoardResult<bool> {
        self.0.is_item_of_power(name, power)
    }

    fn generator_type(&self) -> &'static str {
        self.0.generator_type()
    }
}
