//! Injected storage for menu items and orders.
//!
//! Services depend on the `Repository` trait only; `InMemoryRepository`
//! is the mock backend, simulating network latency on every call.

mod error;
mod memory;
pub mod seed;

pub use error::StoreError;
pub use memory::InMemoryRepository;

use crate::domain::{MenuItem, Order};
use async_trait::async_trait;

/// A stored record addressable by a string id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;

    /// Kind name used in errors and logs.
    fn kind() -> &'static str;
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind() -> &'static str {
        "order"
    }
}

impl Entity for MenuItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind() -> &'static str {
        "menu item"
    }
}

/// CRUD capability set over one entity type.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// All records, newest first.
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    async fn create(&self, entity: T) -> Result<T, StoreError>;

    /// Replace the record with the same id.
    async fn update(&self, entity: T) -> Result<T, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
