//! Menu recommendations behind a swappable collaborator trait.
//!
//! A generative backend can implement `Recommender`; the crate ships a
//! deterministic one ranking dishes by how often they have been ordered.

use crate::domain::{MenuItem, Order};
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssistError {
    /// For remote `Recommender` backends; `PopularityRecommender` never fails.
    #[error("Recommendation backend unavailable: {0}")]
    Unavailable(String),
}

/// Picks a handful of items to highlight from the current menu.
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Ids of recommended items, best first; every id comes from `menu`.
    async fn recommend(&self, menu: &[MenuItem]) -> Result<Vec<String>, AssistError>;
}

/// Most-ordered items first, ties broken by name.
#[derive(Clone, Debug)]
pub struct PopularityRecommender {
    order_counts: HashMap<String, usize>,
    limit: usize,
}

impl PopularityRecommender {
    pub const DEFAULT_LIMIT: usize = 3;

    pub fn from_orders(orders: &[Order]) -> Self {
        let mut order_counts = HashMap::new();
        for order in orders {
            *order_counts.entry(order.item_id.clone()).or_insert(0) += 1;
        }
        Self {
            order_counts,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[async_trait]
impl Recommender for PopularityRecommender {
    async fn recommend(&self, menu: &[MenuItem]) -> Result<Vec<String>, AssistError> {
        let count = |item: &MenuItem| self.order_counts.get(&item.id).copied().unwrap_or(0);
        let mut ranked: Vec<&MenuItem> = menu.iter().collect();
        ranked.sort_by(|a, b| {
            Reverse(count(a))
                .cmp(&Reverse(count(b)))
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(ranked
            .into_iter()
            .take(self.limit)
            .map(|item| item.id.clone())
            .collect())
    }
}
