//! Order, menu and reporting services built on the `store` repositories.

mod error;
mod menu;
mod orders;
pub mod stats;

pub use error::ServiceError;
pub use menu::MenuDesk;
pub use orders::OrderDesk;
pub use stats::{vendor_rating, OrderFilter, PlatformStats};
