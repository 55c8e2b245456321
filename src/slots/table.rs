//! Static per-category pickup slot configuration.

use crate::domain::MealCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered slot descriptors for each meal category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotTable(BTreeMap<MealCategory, Vec<String>>);

impl SlotTable {
    pub fn new(slots: BTreeMap<MealCategory, Vec<String>>) -> Self {
        Self(slots)
    }

    /// The vendor's standard pickup windows.
    pub fn reference() -> Self {
        fn entry(category: MealCategory, slots: &[&str]) -> (MealCategory, Vec<String>) {
            (category, slots.iter().map(|s| s.to_string()).collect())
        }

        Self(BTreeMap::from([
            entry(
                MealCategory::Breakfast,
                &["08:00 AM - 08:30 AM", "08:30 AM - 09:00 AM", "09:00 AM - 09:30 AM"],
            ),
            entry(
                MealCategory::Lunch,
                &[
                    "12:00 PM - 12:30 PM",
                    "12:30 PM - 01:00 PM",
                    "01:00 PM - 01:30 PM",
                    "01:30 PM - 02:00 PM",
                ],
            ),
            entry(
                MealCategory::Dinner,
                &[
                    "05:00 PM - 05:30 PM",
                    "05:30 PM - 06:00 PM",
                    "06:00 PM - 06:30 PM",
                    "08:00 PM - 08:30 PM",
                    "08:30 PM - 09:00 PM",
                ],
            ),
        ]))
    }

    /// Configured slots for `category`, empty if the category has none.
    pub fn slots(&self, category: MealCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn categories(&self) -> impl Iterator<Item = MealCategory> + '_ {
        self.0.keys().copied()
    }
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::reference()
    }
}
