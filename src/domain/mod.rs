//! Domain model shared by the slot, checkout and service layers.

mod menu;
mod order;
mod payment;

pub use menu::{MealCategory, MenuItem, NewMenuItem};
pub use order::{Order, OrderStatus, RATING_RANGE};
pub use payment::{PaymentMethod, PaymentStatus};
