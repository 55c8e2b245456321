//! Order placement, fulfilment and reviews over an injected repository.

use super::error::ServiceError;
use crate::checkout::{OrderPlacement, PlacementError, PlacementRequest};
use crate::core::State;
use crate::domain::{MenuItem, Order, OrderStatus, PaymentStatus, RATING_RANGE};
use crate::store::{Entity, Repository, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Creates and maintains orders.
#[derive(Clone)]
pub struct OrderDesk {
    orders: Arc<dyn Repository<Order>>,
    menu: Arc<dyn Repository<MenuItem>>,
}

impl OrderDesk {
    pub fn new(orders: Arc<dyn Repository<Order>>, menu: Arc<dyn Repository<MenuItem>>) -> Self {
        Self { orders, menu }
    }

    pub async fn all_orders(&self) -> Result<Vec<Order>, ServiceError> {
        Ok(self.orders.list().await?)
    }

    /// A customer's orders, newest first.
    pub async fn orders_for(&self, customer_id: &str) -> Result<Vec<Order>, ServiceError> {
        let mut orders: Vec<Order> = self
            .orders
            .list()
            .await?
            .into_iter()
            .filter(|o| o.user_id == customer_id)
            .collect();
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(orders)
    }

    async fn find(&self, order_id: &str) -> Result<Order, ServiceError> {
        self.orders
            .list()
            .await?
            .into_iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| {
                StoreError::NotFound {
                    kind: Order::kind(),
                    id: order_id.to_string(),
                }
                .into()
            })
    }

    /// Move an order one step along Pending → Preparing → Ready → Picked Up.
    pub async fn advance_status(&self, order_id: &str) -> Result<Order, ServiceError> {
        let mut order = self.find(order_id).await?;
        let next = order.status.next().ok_or_else(|| ServiceError::AlreadyCompleted {
            id: order.id.clone(),
            status: order.status,
        })?;
        self.set_status(&mut order, next).await
    }

    /// Set an explicit status; completed orders stay completed.
    pub async fn update_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order, ServiceError> {
        let mut order = self.find(order_id).await?;
        if order.status.is_final() {
            return Err(ServiceError::AlreadyCompleted {
                id: order.id,
                status: order.status,
            });
        }
        self.set_status(&mut order, status).await
    }

    async fn set_status(
        &self,
        order: &mut Order,
        status: OrderStatus,
    ) -> Result<Order, ServiceError> {
        info!(
            order = %order.id,
            from = order.status.name(),
            to = status.name(),
            "order status changed"
        );
        order.status = status;
        Ok(self.orders.update(order.clone()).await?)
    }

    /// Rate a collected order once.
    pub async fn submit_review(
        &self,
        order_id: &str,
        rating: u8,
        review: impl Into<String>,
    ) -> Result<Order, ServiceError> {
        if !RATING_RANGE.contains(&rating) {
            return Err(ServiceError::RatingOutOfRange(rating));
        }
        let mut order = self.find(order_id).await?;
        if !order.can_review() {
            return Err(ServiceError::NotReviewable(order.id));
        }

        let review = review.into();
        order.rating = Some(rating);
        order.review = (!review.trim().is_empty()).then_some(review);
        info!(order = %order.id, rating, "review submitted");
        Ok(self.orders.update(order).await?)
    }
}

#[async_trait]
impl OrderPlacement for OrderDesk {
    async fn place_order(&self, request: PlacementRequest) -> Result<Order, PlacementError> {
        let known = self
            .menu
            .list()
            .await?
            .iter()
            .any(|item| item.id == request.item_id);
        if !known {
            return Err(PlacementError::UnknownItem(request.item_id));
        }

        let order = Order {
            id: format!("order-{}", Uuid::new_v4()),
            user_id: request.customer_id,
            vendor_id: request.vendor_id,
            item_id: request.item_id,
            order_date: Utc::now(),
            pickup_slot: request.pickup_slot,
            status: OrderStatus::Pending,
            payment_method: request.payment_method,
            payment_status: PaymentStatus::for_method(request.payment_method),
            rating: None,
            review: None,
        };

        let order = self.orders.create(order).await?;
        info!(
            order = %order.id,
            item = %order.item_id,
            slot = %order.pickup_slot,
            method = %order.payment_method,
            "order created"
        );
        Ok(order)
    }
}
