//! Vendor-side menu management.

use super::error::ServiceError;
use crate::domain::{MealCategory, MenuItem, NewMenuItem};
use crate::store::Repository;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// One vendor's view of the menu repository.
#[derive(Clone)]
pub struct MenuDesk {
    vendor_id: String,
    items: Arc<dyn Repository<MenuItem>>,
}

impl MenuDesk {
    pub fn new(vendor_id: impl Into<String>, items: Arc<dyn Repository<MenuItem>>) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            items,
        }
    }

    /// Every item on the menu, newest first.
    pub async fn menu(&self) -> Result<Vec<MenuItem>, ServiceError> {
        Ok(self.items.list().await?)
    }

    pub async fn menu_for(&self, category: MealCategory) -> Result<Vec<MenuItem>, ServiceError> {
        Ok(self
            .items
            .list()
            .await?
            .into_iter()
            .filter(|item| item.category == category)
            .collect())
    }

    pub async fn add_item(&self, draft: NewMenuItem) -> Result<MenuItem, ServiceError> {
        if draft.name.trim().is_empty() {
            return Err(ServiceError::InvalidMenuItem("a name"));
        }
        if draft.price == 0 {
            return Err(ServiceError::InvalidMenuItem("a positive price"));
        }

        let item = draft.into_item(format!("item-{}", Uuid::new_v4()), self.vendor_id.clone());
        let item = self.items.create(item).await?;
        info!(item = %item.id, name = %item.name, category = %item.category, "menu item added");
        Ok(item)
    }

    pub async fn remove_item(&self, item_id: &str) -> Result<(), ServiceError> {
        self.items.delete(item_id).await?;
        info!(item = item_id, "menu item removed");
        Ok(())
    }
}
