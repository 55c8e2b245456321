//! Admin dashboard figures derived from orders and the menu.

use crate::core::State;
use crate::domain::{MenuItem, Order, PaymentStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Headline numbers for the admin view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformStats {
    pub total_customers: usize,
    pub total_orders: usize,
    /// Sum of item prices over paid orders, in rupees
    pub total_revenue: u64,
}

impl PlatformStats {
    /// Orders whose item has since left the menu contribute nothing to revenue.
    pub fn compute(orders: &[Order], menu: &[MenuItem], total_customers: usize) -> Self {
        let prices: HashMap<&str, u32> = menu
            .iter()
            .map(|item| (item.id.as_str(), item.price))
            .collect();

        let total_revenue = orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Paid)
            .map(|o| u64::from(prices.get(o.item_id.as_str()).copied().unwrap_or(0)))
            .sum();

        Self {
            total_customers,
            total_orders: orders.len(),
            total_revenue,
        }
    }
}

/// Order list filter on the admin view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderFilter {
    #[default]
    All,
    /// Not yet picked up
    Pending,
    /// Picked up
    Completed,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !order.status.is_final(),
            Self::Completed => order.status.is_final(),
        }
    }

    /// Matching orders, newest first.
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        let mut matching: Vec<&Order> = orders.iter().filter(|o| self.matches(o)).collect();
        matching.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        matching
    }
}

/// Mean star rating over rated orders of `vendor_id`, if any were rated.
pub fn vendor_rating(orders: &[Order], vendor_id: &str) -> Option<f64> {
    let ratings: Vec<u8> = orders
        .iter()
        .filter(|o| o.vendor_id == vendor_id)
        .filter_map(|o| o.rating)
        .collect();
    if ratings.is_empty() {
        return None;
    }
    let total: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    Some(f64::from(total) / ratings.len() as f64)
}
