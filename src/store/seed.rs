//! Demo data for the mock backend: one vendor's menu and a short order history.

use crate::domain::{MealCategory, MenuItem, Order, OrderStatus, PaymentMethod, PaymentStatus};
use chrono::{DateTime, Duration, Utc};

pub const VENDOR_ID: &str = "vendor-01";

/// Employees known to the demo directory.
pub const CUSTOMER_IDS: [&str; 3] = ["user-01", "user-02", "user-03"];

fn item(
    id: &str,
    name: &str,
    category: MealCategory,
    price: u32,
    image: u32,
    description: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        vendor_id: VENDOR_ID.to_string(),
        name: name.to_string(),
        category,
        price,
        image_url: format!("https://picsum.photos/id/{image}/400/300"),
        description: Some(description.to_string()),
    }
}

pub fn menu_items() -> Vec<MenuItem> {
    use MealCategory::*;
    vec![
        item(
            "item-01",
            "Masala Dosa",
            Breakfast,
            120,
            42,
            "A crispy, savory crepe made from fermented rice and lentil batter, filled with a spiced potato mixture.",
        ),
        item(
            "item-02",
            "Idli Sambar",
            Breakfast,
            80,
            48,
            "Soft, fluffy steamed rice cakes served with a flavorful lentil-based vegetable stew.",
        ),
        item(
            "item-03",
            "Aloo Paratha with Curd",
            Breakfast,
            150,
            102,
            "Whole wheat flatbread stuffed with spiced potato, served with cool yogurt.",
        ),
        item(
            "item-04",
            "Butter Chicken with Naan",
            Lunch,
            350,
            211,
            "Tender chicken in a rich, creamy tomato sauce, served with naan.",
        ),
        item(
            "item-05",
            "Paneer Tikka Masala",
            Lunch,
            280,
            405,
            "Grilled cottage cheese cubes in a spicy, creamy onion-tomato gravy.",
        ),
        item(
            "item-06",
            "Vegetable Biryani",
            Lunch,
            220,
            658,
            "Fragrant rice cooked with mixed vegetables, herbs and aromatic spices.",
        ),
        item(
            "item-07",
            "Chicken Korma",
            Dinner,
            380,
            988,
            "A mild, creamy chicken curry in a yogurt and nut-based sauce.",
        ),
        item(
            "item-08",
            "Dal Makhani",
            Dinner,
            190,
            937,
            "Black lentils and kidney beans slow-cooked with butter and spices.",
        ),
        item(
            "item-09",
            "Palak Paneer",
            Dinner,
            240,
            776,
            "Cottage cheese cubes in a smooth spinach gravy with a hint of garlic.",
        ),
    ]
}

struct Past<'a> {
    id: String,
    user: &'a str,
    item: &'a str,
    age: Duration,
    slot: &'a str,
    status: OrderStatus,
    method: PaymentMethod,
    payment: PaymentStatus,
    rating: Option<(u8, &'a str)>,
}

impl Past<'_> {
    fn into_order(self, now: DateTime<Utc>) -> Order {
        Order {
            id: self.id,
            user_id: self.user.to_string(),
            vendor_id: VENDOR_ID.to_string(),
            item_id: self.item.to_string(),
            order_date: now - self.age,
            pickup_slot: self.slot.to_string(),
            status: self.status,
            payment_method: self.method,
            payment_status: self.payment,
            rating: self.rating.map(|(stars, _)| stars),
            review: self.rating.map(|(_, text)| text.to_string()),
        }
    }
}

/// Order history relative to `now`, newest first.
pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    let recent = |age: Duration| format!("order-{}", (now - age).timestamp_millis());
    let day = Duration::days(1);

    vec![
        Past {
            id: recent(Duration::seconds(50)),
            user: "user-01",
            item: "item-01",
            age: Duration::seconds(50),
            slot: "09:00 AM - 09:30 AM",
            status: OrderStatus::Pending,
            method: PaymentMethod::CashOnDelivery,
            payment: PaymentStatus::Unpaid,
            rating: None,
        },
        Past {
            id: recent(Duration::seconds(100)),
            user: "user-03",
            item: "item-05",
            age: Duration::seconds(100),
            slot: "01:00 PM - 01:30 PM",
            status: OrderStatus::Preparing,
            method: PaymentMethod::Upi,
            payment: PaymentStatus::Paid,
            rating: None,
        },
        Past {
            id: recent(Duration::seconds(200)),
            user: "user-02",
            item: "item-04",
            age: Duration::seconds(200),
            slot: "12:30 PM - 01:00 PM",
            status: OrderStatus::Ready,
            method: PaymentMethod::Card,
            payment: PaymentStatus::Paid,
            rating: None,
        },
        Past {
            id: "order-prev-1".to_string(),
            user: "user-01",
            item: "item-06",
            age: day,
            slot: "01:00 PM - 01:30 PM",
            status: OrderStatus::PickedUp,
            method: PaymentMethod::CashOnDelivery,
            // settled in cash at the counter
            payment: PaymentStatus::Paid,
            rating: Some((5, "The biryani was fantastic! Perfectly cooked and very flavorful.")),
        },
        Past {
            id: "order-prev-2".to_string(),
            user: "user-02",
            item: "item-07",
            age: day * 2,
            slot: "05:30 PM - 06:00 PM",
            status: OrderStatus::PickedUp,
            method: PaymentMethod::Card,
            payment: PaymentStatus::Paid,
            rating: Some((4, "Creamy and delicious, but I wish it was a little spicier.")),
        },
        Past {
            id: "order-prev-3".to_string(),
            user: "user-03",
            item: "item-08",
            age: day * 3,
            slot: "05:00 PM - 05:30 PM",
            status: OrderStatus::PickedUp,
            method: PaymentMethod::Card,
            payment: PaymentStatus::Paid,
            rating: Some((3, "It was okay. A bit bland for my taste.")),
        },
    ]
    .into_iter()
    .map(|past| past.into_order(now))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_covers_every_category() {
        let items = menu_items();
        assert_eq!(items.len(), 9);
        for category in MealCategory::ALL {
            assert_eq!(items.iter().filter(|i| i.category == category).count(), 3);
        }
    }

    #[test]
    fn orders_are_newest_first_with_unique_ids() {
        let orders = orders(Utc::now());
        assert!(orders
            .windows(2)
            .all(|pair| pair[0].order_date >= pair[1].order_date));
        let ids: HashSet<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn history_references_known_items() {
        let items = menu_items();
        for order in orders(Utc::now()) {
            assert!(items.iter().any(|i| i.id == order.item_id));
        }
    }
}
