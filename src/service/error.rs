//! Service error types.

use crate::domain::OrderStatus;
use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by the order and menu desks
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Order '{id}' is already {status:?}")]
    AlreadyCompleted { id: String, status: OrderStatus },

    #[error("Rating {0} is outside 1-5")]
    RatingOutOfRange(u8),

    #[error("Order '{0}' cannot be reviewed: it must be picked up and not yet rated")]
    NotReviewable(String),

    #[error("Menu item needs {0}")]
    InvalidMenuItem(&'static str),
}
