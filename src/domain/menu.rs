//! Menu items and meal categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal category; each one has its own pickup slot list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealCategory {
    pub const ALL: [MealCategory; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dish offered by a vendor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub category: MealCategory,
    /// Price in whole rupees
    pub price: u32,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Vendor input for a new menu item; id and vendor are assigned on creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    pub category: MealCategory,
    pub price: u32,
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewMenuItem {
    pub fn into_item(self, id: String, vendor_id: String) -> MenuItem {
        MenuItem {
            id,
            vendor_id,
            name: self.name,
            category: self.category,
            price: self.price,
            image_url: self.image_url,
            description: self.description,
        }
    }
}
