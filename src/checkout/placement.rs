//! The order-placement collaborator a confirmed checkout hands off to.

use crate::domain::{Order, PaymentMethod};
use crate::store::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything needed to create an order from a confirmed checkout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub customer_id: String,
    pub vendor_id: String,
    pub item_id: String,
    pub pickup_slot: String,
    pub payment_method: PaymentMethod,
}

/// Errors that can occur when placing an order
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlacementError {
    #[error("Item '{0}' is no longer on the menu")]
    UnknownItem(String),

    #[error("Order rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Creates orders. Called at most once per checkout session.
#[async_trait]
pub trait OrderPlacement: Send + Sync {
    async fn place_order(&self, request: PlacementRequest) -> Result<Order, PlacementError>;
}
