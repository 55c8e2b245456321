//! Orders and their fulfilment lifecycle.

use super::payment::{PaymentMethod, PaymentStatus};
use crate::core::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kitchen-side lifecycle of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    #[serde(rename = "Picked Up")]
    PickedUp,
}

impl OrderStatus {
    /// The status a vendor moves the order to next, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            Self::Pending => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::PickedUp),
            Self::PickedUp => None,
        }
    }
}

impl State for OrderStatus {
    fn name(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::PickedUp => "Picked Up",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::PickedUp)
    }
}

/// A placed order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub vendor_id: String,
    pub item_id: String,
    pub order_date: DateTime<Utc>,
    pub pickup_slot: String,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub review: Option<String>,
}

impl Order {
    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }

    /// Only collected orders that have not been rated yet accept a review.
    pub fn can_review(&self) -> bool {
        self.status.is_final() && !self.is_rated()
    }
}

/// Lowest and highest accepted star rating.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: OrderStatus, rating: Option<u8>) -> Order {
        Order {
            id: "order-1".to_string(),
            user_id: "user-01".to_string(),
            vendor_id: "vendor-01".to_string(),
            item_id: "item-04".to_string(),
            order_date: Utc::now(),
            pickup_slot: "12:30 PM - 01:00 PM".to_string(),
            status,
            payment_method: PaymentMethod::Card,
            payment_status: PaymentStatus::Paid,
            rating,
            review: None,
        }
    }

    #[test]
    fn status_advances_in_kitchen_order() {
        let mut status = OrderStatus::Pending;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                OrderStatus::Pending,
                OrderStatus::Preparing,
                OrderStatus::Ready,
                OrderStatus::PickedUp
            ]
        );
        assert!(status.is_final());
    }

    #[test]
    fn picked_up_uses_spaced_wire_name() {
        let json = serde_json::to_string(&OrderStatus::PickedUp).unwrap();
        assert_eq!(json, "\"Picked Up\"");
    }

    #[test]
    fn only_unrated_collected_orders_are_reviewable() {
        assert!(order(OrderStatus::PickedUp, None).can_review());
        assert!(!order(OrderStatus::PickedUp, Some(4)).can_review());
        assert!(!order(OrderStatus::Ready, None).can_review());
    }
}
