//! Checkout flow: slot choice, payment choice, simulated processing, confirmation.
//!
//! `CheckoutSession` is the pure state machine; `CheckoutController` is the
//! shell that owns timers and the handoff to `OrderPlacement`.

mod controller;
mod placement;
mod rules;
mod session;
mod state;

pub use controller::{
    CheckoutController, CheckoutHandle, CheckoutOutcome, CheckoutTimings, HANDOFF_ABORTED,
};
pub use placement::{OrderPlacement, PlacementError, PlacementRequest};
pub use rules::{CheckoutViolation, RuleCheck};
pub use session::{CheckoutSession, StepResult};
pub use state::{CheckoutEvent, CheckoutState};
