//! Mealslot: pickup-slot availability and checkout for corporate meal pre-ordering.
//!
//! Employees reserve a same-day pickup slot for a menu item, pay, and later
//! rate the order. The crate follows a "pure core, imperative shell" split:
//!
//! - **Slots**: a pure lead-time predicate deciding which pickup windows
//!   can still be ordered
//! - **Checkout**: a pure session state machine, driven by a controller
//!   that owns the simulated payment timers and the order handoff
//! - **Store/Service**: injected repositories and the desks built on them
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use mealslot::checkout::{CheckoutSession, CheckoutEvent, CheckoutState};
//! use mealslot::config::Config;
//! use mealslot::domain::{MealCategory, MenuItem, PaymentMethod};
//! use mealslot::slots::FixedClock;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(11, 5, 0).unwrap();
//! let book = Config::default().slot_book(Arc::new(FixedClock(now)));
//! assert!(book.is_orderable(MealCategory::Lunch));
//!
//! let item = MenuItem {
//!     id: "item-06".into(),
//!     vendor_id: "vendor-01".into(),
//!     name: "Vegetable Biryani".into(),
//!     category: MealCategory::Lunch,
//!     price: 220,
//!     image_url: String::new(),
//!     description: None,
//! };
//!
//! let mut session = CheckoutSession::start(item, &book);
//! assert_eq!(session.selected_slot(), Some("12:30 PM - 01:00 PM"));
//!
//! session.apply(CheckoutEvent::ProceedToPayment, &book);
//! session.apply(CheckoutEvent::SelectPaymentMethod(PaymentMethod::CashOnDelivery), &book);
//! session.apply(CheckoutEvent::ConfirmPayment, &book);
//! assert_eq!(session.state(), CheckoutState::Confirmed);
//! ```

pub mod app;
pub mod assist;
pub mod checkout;
pub mod config;
pub mod core;
pub mod domain;
pub mod service;
pub mod slots;
pub mod store;

// Re-export commonly used types
pub use app::Canteen;
pub use checkout::{CheckoutController, CheckoutHandle, CheckoutOutcome, CheckoutState};
pub use config::Config;
pub use core::{State, StateHistory, StateTransition};
pub use slots::{SlotBook, SlotEvaluator};
