//! In-memory repository with simulated latency.

use super::{Entity, Repository, StoreError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// Vector-backed store. Data lives as long as the value; nothing is persisted.
pub struct InMemoryRepository<T: Entity> {
    records: Mutex<Vec<T>>,
    latency: Duration,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new(latency: Duration) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Start from `records`, given newest first.
    pub fn with_records(records: Vec<T>, latency: Duration) -> Self {
        Self {
            records: Mutex::new(records),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.simulate_latency().await;
        Ok(self.records.lock().await.clone())
    }

    async fn create(&self, entity: T) -> Result<T, StoreError> {
        self.simulate_latency().await;
        let mut records = self.records.lock().await;
        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(StoreError::Conflict {
                kind: T::kind(),
                id: entity.id().to_string(),
            });
        }
        debug!(kind = T::kind(), id = entity.id(), "record created");
        records.insert(0, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, StoreError> {
        self.simulate_latency().await;
        let mut records = self.records.lock().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == entity.id())
            .ok_or_else(|| StoreError::NotFound {
                kind: T::kind(),
                id: entity.id().to_string(),
            })?;
        *slot = entity.clone();
        debug!(kind = T::kind(), id = entity.id(), "record updated");
        Ok(entity)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.simulate_latency().await;
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(StoreError::NotFound {
                kind: T::kind(),
                id: id.to_string(),
            });
        }
        debug!(kind = T::kind(), id, "record deleted");
        Ok(())
    }
}
