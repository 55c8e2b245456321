//! Wiring of the mock backend: repositories, desks, slot book and checkout.

use crate::assist::PopularityRecommender;
use crate::checkout::CheckoutController;
use crate::config::{Config, ConfigError};
use crate::domain::{MenuItem, Order};
use crate::service::{MenuDesk, OrderDesk, PlatformStats, ServiceError};
use crate::slots::{Clock, SlotBook};
use crate::store::{seed, InMemoryRepository, Repository};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// One canteen's in-memory backend. Everything resets when it is dropped.
pub struct Canteen {
    config: Config,
    book: Arc<SlotBook>,
    orders: Arc<dyn Repository<Order>>,
    menu: Arc<dyn Repository<MenuItem>>,
    order_desk: OrderDesk,
}

impl Canteen {
    /// Backend preloaded with the demo vendor's menu and order history.
    pub fn demo(config: Config, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        config.check()?;
        let latency = config.store_latency();
        let orders = Arc::new(InMemoryRepository::with_records(
            seed::orders(Utc::now()),
            latency,
        ));
        let menu = Arc::new(InMemoryRepository::with_records(seed::menu_items(), latency));
        info!(lead_time = config.lead_time_minutes, "demo canteen opened");
        Self::with_repositories(config, clock, orders, menu)
    }

    /// Fails if `config` breaks any validation rule.
    pub fn with_repositories(
        config: Config,
        clock: Arc<dyn Clock>,
        orders: Arc<dyn Repository<Order>>,
        menu: Arc<dyn Repository<MenuItem>>,
    ) -> Result<Self, ConfigError> {
        config.check()?;
        let book = Arc::new(config.slot_book(clock));
        let order_desk = OrderDesk::new(Arc::clone(&orders), Arc::clone(&menu));
        Ok(Self {
            config,
            book,
            orders,
            menu,
            order_desk,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn book(&self) -> &SlotBook {
        &self.book
    }

    pub fn order_desk(&self) -> &OrderDesk {
        &self.order_desk
    }

    pub fn menu_desk(&self, vendor_id: impl Into<String>) -> MenuDesk {
        MenuDesk::new(vendor_id, Arc::clone(&self.menu))
    }

    /// Checkout controller for `customer_id`, handing off to this canteen's order desk.
    pub fn checkout_for(&self, customer_id: impl Into<String>) -> CheckoutController {
        CheckoutController::new(
            customer_id,
            Arc::clone(&self.book),
            self.config.timings(),
            Arc::new(self.order_desk.clone()),
        )
    }

    pub async fn stats(&self, total_customers: usize) -> Result<PlatformStats, ServiceError> {
        let orders = self.orders.list().await?;
        let menu = self.menu.list().await?;
        Ok(PlatformStats::compute(&orders, &menu, total_customers))
    }

    pub async fn recommender(&self) -> Result<PopularityRecommender, ServiceError> {
        Ok(PopularityRecommender::from_orders(&self.orders.list().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;
    use crate::slots::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> Arc<dyn Clock> {
        let now = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(11, 5, 0)
            .unwrap();
        Arc::new(FixedClock(now))
    }

    #[test]
    fn hand_built_config_is_still_validated() {
        let config = Config {
            processing_delay_ms: 1000,
            confirmation_delay_ms: 1500,
            ..Config::default()
        };
        let Err(ConfigError::Invalid(found)) = Canteen::demo(config, clock()) else {
            panic!("expected validation failure");
        };
        assert_eq!(
            found,
            vec![ConfigViolation::ConfirmationNotShorter {
                confirmation_ms: 1500,
                processing_ms: 1000,
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn demo_exposes_seeded_stats() {
        let canteen = Canteen::demo(Config::default(), clock()).unwrap();
        let stats = canteen.stats(3).await.unwrap();
        assert_eq!(stats.total_orders, 6);
        assert_eq!(stats.total_revenue, 1420);
        assert_eq!(canteen.checkout_for("user-01").timings(), Config::default().timings());
    }
}
