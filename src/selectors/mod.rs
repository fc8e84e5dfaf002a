//! # Selectors Module
//!
//! Narrow interfaces over the external rule tables.
//!
//! The engine never owns table data. Percentile tables, keyed collections and
//! the alias registry are injected through these traits, and every random draw
//! over table data happens on the far side of them. Implementations must be
//! safe to share between threads; the generators hold them behind `Arc`.

pub mod tables;

use crate::{HoardError, HoardResult, IntelligenceDataSelection};
use serde::{Deserialize, Serialize};

/// A weighted table row: a type key and a numeric amount.
///
/// The amount is a bonus magnitude for most tables and a sentinel marker for a
/// few (see [`TypeAndAmountSelection::SPECIFIC_ITEM_AMOUNT`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAndAmountSelection {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(rename = "amount")]
    pub amount_as_double: f64,
}

impl TypeAndAmountSelection {
    /// Amount reserved for rows that stand for a specific, pre-defined item.
    pub const SPECIFIC_ITEM_AMOUNT: f64 = -1.0;

    pub fn new(type_name: impl Into<String>, amount_as_double: f64) -> Self {
        Self {
            type_name: type_name.into(),
            amount_as_double,
        }
    }

    /// The amount as an integer bonus.
    pub fn amount(&self) -> i32 {
        self.amount_as_double.round() as i32
    }

    /// Whether this row stands for a specific item rather than a bonus.
    pub fn is_specific_item(&self) -> bool {
        self.amount_as_double == Self::SPECIFIC_ITEM_AMOUNT
    }
}

/// Access to percentile and weighted tables.
pub trait TableSelector: Send + Sync {
    /// Draws a single string result from a percentile table.
    fn select_one(&self, table: &str) -> HoardResult<String>;

    /// Draws a single weighted row.
    fn select_type_and_amount(&self, table: &str) -> HoardResult<TypeAndAmountSelection>;

    /// Returns every row of a weighted table.
    fn select_all_type_and_amount(&self, table: &str) -> HoardResult<Vec<TypeAndAmountSelection>>;

    /// Looks up the intelligence row stored under `key`.
    fn select_intelligence_data(
        &self,
        table: &str,
        key: &str,
    ) -> HoardResult<IntelligenceDataSelection>;

    /// Percentile gate: true with `percentage` percent probability.
    fn select_from(&self, percentage: f64) -> bool;
}

/// Access to keyed string collections.
pub trait CollectionSelector: Send + Sync {
    /// Returns the collection stored under `key`; fails with `NotFound` when absent.
    fn select_from(&self, table: &str, key: &str) -> HoardResult<Vec<String>>;

    /// Returns every `(key, collection)` pair of a table.
    fn select_all_from(&self, table: &str) -> HoardResult<Vec<(String, Vec<String>)>>;

    /// Uniformly picks an index in `0..len`.
    fn select_random_index(&self, len: usize) -> usize;
}

/// Resolves name synonyms and macros before table lookups.
pub trait ReplacementSelector: Send + Sync {
    /// Every name `name` expands to; `[name]` when it has no replacement.
    fn expand_aliases(&self, name: &str, recursive: bool) -> Vec<String>;
}

/// Uniformly picks one element of `items` using the collection selector.
pub fn select_random_from<'a, T>(
    selector: &dyn CollectionSelector,
    items: &'a [T],
) -> HoardResult<&'a T> {
    if items.is_empty() {
        return Err(HoardError::NotFound(
            "cannot select from an empty sequence".to_string(),
        ));
    }

    let index = selector.select_random_index(items.len());
    items.get(index).ok_or_else(|| {
        HoardError::DataInconsistency(format!(
            "random index {} is outside a sequence of {}",
            index,
            items.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIndex(usize);

    impl CollectionSelector for FixedIndex {
        fn select_from(&self, table: &str, key: &str) -> HoardResult<Vec<String>> {
            Err(HoardError::NotFound(format!("{}/{}", table, key)))
        }

        fn select_all_from(&self, _table: &str) -> HoardResult<Vec<(String, Vec<String>)>> {
            Ok(Vec::new())
        }

        fn select_random_index(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_select_random_from_uses_selector_index() {
        let items = ["a", "b", "c"];
        let picked = select_random_from(&FixedIndex(2), &items).unwrap();
        assert_eq!(*picked, "c");
    }

    #[test]
    fn test_select_random_from_empty_is_not_found() {
        let items: [&str; 0] = [];
        let result = select_random_from(&FixedIndex(0), &items);
        assert!(matches!(result, Err(HoardError::NotFound(_))));
    }

    #[test]
    fn test_select_random_from_rejects_out_of_range_index() {
        let items = ["a"];
        let result = select_random_from(&FixedIndex(3), &items);
        assert!(matches!(result, Err(HoardError::DataInconsistency(_))));
    }

    #[test]
    fn test_specific_item_marker() {
        let row = TypeAndAmountSelection::new("Armor", TypeAndAmountSelection::SPECIFIC_ITEM_AMOUNT);
        assert!(row.is_specific_item());
        assert!(!TypeAndAmountSelection::new("Armor", 3.0).is_specific_item());
        assert_eq!(TypeAndAmountSelection::new("Armor", 2.6).amount(), 3);
    }

    #[test]
    fn test_selection_serializes_with_table_field_names() {
        let row = TypeAndAmountSelection::new("Shield", 2.0);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"type":"Shield","amount":2.0}"#);
    }
}
