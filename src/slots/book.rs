//! Slot table combined with the availability evaluator.

use super::evaluator::SlotEvaluator;
use super::table::SlotTable;
use crate::domain::MealCategory;
use serde::Serialize;

/// One row of a slot picker: unavailable slots are shown but disabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotOption {
    pub descriptor: String,
    pub available: bool,
}

/// Answers "what can be picked right now" per category.
#[derive(Clone, Debug)]
pub struct SlotBook {
    table: SlotTable,
    evaluator: SlotEvaluator,
}

impl SlotBook {
    pub fn new(table: SlotTable, evaluator: SlotEvaluator) -> Self {
        Self { table, evaluator }
    }

    pub fn table(&self) -> &SlotTable {
        &self.table
    }

    pub fn evaluator(&self) -> &SlotEvaluator {
        &self.evaluator
    }

    pub fn slots(&self, category: MealCategory) -> &[String] {
        self.table.slots(category)
    }

    pub fn options(&self, category: MealCategory) -> Vec<SlotOption> {
        let now = self.evaluator.now();
        self.slots(category)
            .iter()
            .map(|slot| SlotOption {
                descriptor: slot.clone(),
                available: self.evaluator.is_available_at(slot, now),
            })
            .collect()
    }

    pub fn available(&self, category: MealCategory) -> Vec<String> {
        self.options(category)
            .into_iter()
            .filter(|option| option.available)
            .map(|option| option.descriptor)
            .collect()
    }

    pub fn first_available(&self, category: MealCategory) -> Option<String> {
        let now = self.evaluator.now();
        self.slots(category)
            .iter()
            .find(|slot| self.evaluator.is_available_at(slot, now))
            .cloned()
    }

    /// Whether the category's ordering is open at all: some slot is still available.
    pub fn is_orderable(&self, category: MealCategory) -> bool {
        self.evaluator
            .any_available(self.slots(category).iter().map(String::as_str))
    }

    /// A slot can be picked only if it is configured for the category and available now.
    pub fn is_selectable(&self, category: MealCategory, slot: &str) -> bool {
        self.slots(category).iter().any(|s| s == slot) && self.evaluator.is_available(slot)
    }
}
