//! Drives checkout sessions through their timed phases and the final handoff.
//!
//! The processing and confirmation delays run as spawned tasks racing a
//! `CancellationToken` owned by the session's handle. Dropping or
//! cancelling the handle cancels the token, and every late task re-checks
//! it under the session lock, so nothing happens to a torn-down session.

use super::placement::{OrderPlacement, PlacementRequest};
use super::session::{CheckoutSession, StepResult};
use super::state::{CheckoutEvent, CheckoutState};
use crate::core::State;
use crate::domain::{MenuItem, Order, PaymentMethod};
use crate::slots::SlotBook;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Simulated latencies of the checkout flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckoutTimings {
    /// Gateway round-trip spent in `Processing`
    pub processing: Duration,
    /// How long `Success` is shown before the handoff; shorter than `processing`
    pub confirmation: Duration,
}

impl Default for CheckoutTimings {
    fn default() -> Self {
        Self {
            processing: Duration::from_millis(2500),
            confirmation: Duration::from_millis(1500),
        }
    }
}

/// Reported when the handoff ended without a placement result.
pub const HANDOFF_ABORTED: &str = "handoff aborted";

/// How a checkout session ended.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutOutcome {
    Placed(Order),

    /// The session was already confirmed when placement failed; retry needs a new session.
    PlacementFailed(String),

    Cancelled,
}

/// Opens checkout sessions for one customer.
#[derive(Clone)]
pub struct CheckoutController {
    customer_id: String,
    book: Arc<SlotBook>,
    timings: CheckoutTimings,
    placement: Arc<dyn OrderPlacement>,
}

impl CheckoutController {
    /// `timings` are used as given; take them from a checked `Config` so the
    /// confirmation delay stays shorter than processing.
    pub fn new(
        customer_id: impl Into<String>,
        book: Arc<SlotBook>,
        timings: CheckoutTimings,
        placement: Arc<dyn OrderPlacement>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            book,
            timings,
            placement,
        }
    }

    pub fn book(&self) -> &SlotBook {
        &self.book
    }

    pub fn timings(&self) -> CheckoutTimings {
        self.timings
    }

    /// Start checking out `item`.
    ///
    /// Sessions are not gated on orderability; callers disable the order
    /// control with `SlotBook::is_orderable` and a session opened anyway
    /// simply starts with no slot selected.
    pub fn begin(&self, item: MenuItem) -> CheckoutHandle {
        let session = CheckoutSession::start(item, &self.book);
        let (tx, rx) = oneshot::channel();
        debug!(session = %session.id(), item = %session.item().id, "checkout started");

        CheckoutHandle {
            shared: Arc::new(Mutex::new(Shared {
                session,
                outcome: Some(tx),
            })),
            outcome: rx,
            token: CancellationToken::new(),
            controller: self.clone(),
        }
    }

    fn request_for(&self, session: &CheckoutSession) -> Option<PlacementRequest> {
        let (slot, method) = session.confirmed_selection()?;
        Some(PlacementRequest {
            customer_id: self.customer_id.clone(),
            vendor_id: session.item().vendor_id.clone(),
            item_id: session.item().id.clone(),
            pickup_slot: slot.to_string(),
            payment_method: method,
        })
    }
}

struct Shared {
    session: CheckoutSession,
    outcome: Option<oneshot::Sender<CheckoutOutcome>>,
}

/// Exclusive owner of one checkout session.
///
/// Dropping the handle tears the session down: pending timers are defused
/// and no handoff happens unless it had already started.
pub struct CheckoutHandle {
    shared: Arc<Mutex<Shared>>,
    outcome: oneshot::Receiver<CheckoutOutcome>,
    token: CancellationToken,
    controller: CheckoutController,
}

impl CheckoutHandle {
    /// Copy of the session as it stands now.
    pub async fn session(&self) -> CheckoutSession {
        self.shared.lock().await.session.clone()
    }

    pub async fn state(&self) -> CheckoutState {
        self.shared.lock().await.session.state()
    }

    pub async fn select_slot(&self, slot: impl Into<String>) -> StepResult {
        self.apply(CheckoutEvent::SelectSlot(slot.into())).await
    }

    pub async fn proceed_to_payment(&self) -> StepResult {
        self.apply(CheckoutEvent::ProceedToPayment).await
    }

    pub async fn back_to_slots(&self) -> StepResult {
        self.apply(CheckoutEvent::BackToSlots).await
    }

    pub async fn select_payment_method(&self, method: PaymentMethod) -> StepResult {
        self.apply(CheckoutEvent::SelectPaymentMethod(method)).await
    }

    /// Confirm the chosen payment method.
    ///
    /// Cash on delivery is handed off immediately; other methods enter
    /// `Processing` and finish on the controller's timers.
    pub async fn confirm_payment(&self) -> StepResult {
        let result = self.apply(CheckoutEvent::ConfirmPayment).await;

        if let StepResult::Transitioned { to, .. } = &result {
            let shared = Arc::clone(&self.shared);
            let controller = self.controller.clone();
            match to {
                CheckoutState::Processing => {
                    let token = self.token.clone();
                    tokio::spawn(run_gateway(shared, controller, token));
                }
                CheckoutState::Confirmed => {
                    tokio::spawn(hand_off(shared, controller));
                }
                _ => {}
            }
        }

        result
    }

    /// Abandon the session from either selection step.
    pub async fn cancel(&self) -> StepResult {
        let mut shared = self.shared.lock().await;
        let result = shared
            .session
            .apply(CheckoutEvent::Cancel, &self.controller.book);
        if matches!(result, StepResult::Transitioned { .. }) {
            self.token.cancel();
            if let Some(tx) = shared.outcome.take() {
                let _ = tx.send(CheckoutOutcome::Cancelled);
            }
        }
        result
    }

    /// Wait for the session to end.
    ///
    /// Resolves once the session is cancelled or the handoff has returned.
    /// A session left sitting in a selection step never resolves.
    ///
    /// If the handoff task dies after confirmation without reporting, the
    /// outcome is `PlacementFailed`.
    pub async fn finished(mut self) -> CheckoutOutcome {
        if let Ok(outcome) = (&mut self.outcome).await {
            return outcome;
        }
        if self.state().await == CheckoutState::Confirmed {
            error!("order handoff aborted after confirmation");
            CheckoutOutcome::PlacementFailed(HANDOFF_ABORTED.to_string())
        } else {
            CheckoutOutcome::Cancelled
        }
    }

    async fn apply(&self, event: CheckoutEvent) -> StepResult {
        self.shared
            .lock()
            .await
            .session
            .apply(event, &self.controller.book)
    }
}

impl Drop for CheckoutHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Sleep unless the session is torn down first. Returns `false` if it was.
async fn pause(token: &CancellationToken, delay: Duration) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}

/// Apply a timer-raised event, unless the session died while the timer ran.
async fn advance(
    shared: &Mutex<Shared>,
    book: &SlotBook,
    token: &CancellationToken,
    event: CheckoutEvent,
) -> bool {
    let mut guard = shared.lock().await;
    if token.is_cancelled() {
        debug!(session = %guard.session.id(), event = event.name(), "late timer defused");
        return false;
    }
    matches!(
        guard.session.apply(event, book),
        StepResult::Transitioned { .. }
    )
}

async fn run_gateway(
    shared: Arc<Mutex<Shared>>,
    controller: CheckoutController,
    token: CancellationToken,
) {
    let timings = controller.timings;

    if !pause(&token, timings.processing).await
        || !advance(&shared, &controller.book, &token, CheckoutEvent::PaymentSettled).await
    {
        debug!("payment processing abandoned");
        return;
    }

    if !pause(&token, timings.confirmation).await
        || !advance(&shared, &controller.book, &token, CheckoutEvent::ConfirmationShown).await
    {
        debug!("payment confirmation abandoned");
        return;
    }

    hand_off(shared, controller).await;
}

async fn hand_off(shared: Arc<Mutex<Shared>>, controller: CheckoutController) {
    let (request, tx, session_id, elapsed) = {
        let mut guard = shared.lock().await;
        let Some(request) = controller.request_for(&guard.session) else {
            debug!(
                state = guard.session.state().name(),
                "handoff skipped: session not confirmed"
            );
            return;
        };
        (
            request,
            guard.outcome.take(),
            guard.session.id(),
            guard.session.history().duration(),
        )
    };

    let outcome = match controller.placement.place_order(request).await {
        Ok(order) => {
            info!(
                session = %session_id,
                order = %order.id,
                checkout_ms = elapsed.map(|d| d.as_millis() as u64),
                "order placed"
            );
            CheckoutOutcome::Placed(order)
        }
        Err(err) => {
            error!(
                session = %session_id,
                error = %err,
                "order placement failed after confirmation"
            );
            CheckoutOutcome::PlacementFailed(err.to_string())
        }
    };

    if let Some(tx) = tx {
        let _ = tx.send(outcome);
    }
}
