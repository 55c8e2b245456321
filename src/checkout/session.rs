//! A single checkout session: the pure transition function plus its history.

use super::rules::{self, CheckoutViolation};
use super::state::{CheckoutEvent, CheckoutState};
use crate::core::{State, StateHistory, StateTransition};
use crate::domain::{MenuItem, PaymentMethod};
use crate::slots::SlotBook;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use tracing::{debug, info};
use uuid::Uuid;

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// Moved to a different state
    Transitioned {
        from: CheckoutState,
        to: CheckoutState,
    },

    /// Selection changed, state unchanged
    Updated,

    /// Event refused; the session is untouched
    Rejected(Vec<CheckoutViolation>),
}

impl StepResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Ephemeral per-order checkout state for one menu item.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    id: Uuid,
    item: MenuItem,
    state: CheckoutState,
    selected_slot: Option<String>,
    payment_method: Option<PaymentMethod>,
    history: StateHistory<CheckoutState>,
    started_at: DateTime<Utc>,
}

impl CheckoutSession {
    /// Open a session in `SlotSelection`, preselecting the first slot still available.
    pub fn start(item: MenuItem, book: &SlotBook) -> Self {
        let selected_slot = book.first_available(item.category);
        if selected_slot.is_none() {
            debug!(
                item = %item.id,
                category = %item.category,
                "no pickup slot available at checkout start"
            );
        }
        Self {
            id: Uuid::new_v4(),
            item,
            state: CheckoutState::SlotSelection,
            selected_slot,
            payment_method: None,
            history: StateHistory::new(),
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn history(&self) -> &StateHistory<CheckoutState> {
        &self.history
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The `(slot, payment method)` pair to hand off, once the session is confirmed.
    pub fn confirmed_selection(&self) -> Option<(&str, PaymentMethod)> {
        match (self.state, self.selected_slot(), self.payment_method) {
            (CheckoutState::Confirmed, Some(slot), Some(method)) => Some((slot, method)),
            _ => None,
        }
    }

    /// Apply `event`. Refused events leave the session exactly as it was.
    pub fn apply(&mut self, event: CheckoutEvent, book: &SlotBook) -> StepResult {
        if let Validation::Failure(errors) = rules::check(self, &event, book) {
            let violations: Vec<CheckoutViolation> = errors.iter().cloned().collect();
            debug!(
                session = %self.id,
                state = self.state.name(),
                event = event.name(),
                ?violations,
                "checkout event rejected"
            );
            return StepResult::Rejected(violations);
        }

        let from = self.state;
        let event_name = event.name();
        let to = match event {
            CheckoutEvent::SelectSlot(slot) => {
                self.selected_slot = Some(slot);
                from
            }
            CheckoutEvent::SelectPaymentMethod(method) => {
                self.payment_method = Some(method);
                from
            }
            CheckoutEvent::ProceedToPayment => CheckoutState::PaymentSelection,
            CheckoutEvent::BackToSlots => CheckoutState::SlotSelection,
            CheckoutEvent::ConfirmPayment => match self.payment_method {
                Some(method) if !method.requires_gateway() => CheckoutState::Confirmed,
                _ => CheckoutState::Processing,
            },
            CheckoutEvent::PaymentSettled => CheckoutState::Success,
            CheckoutEvent::ConfirmationShown => CheckoutState::Confirmed,
            CheckoutEvent::Cancel => CheckoutState::Cancelled,
        };

        if to == from {
            return StepResult::Updated;
        }

        self.history = self.history.record(StateTransition {
            from,
            to,
            event: event_name.to_string(),
            timestamp: Utc::now(),
        });
        self.state = to;
        info!(
            session = %self.id,
            item = %self.item.id,
            from = from.name(),
            to = to.name(),
            "checkout transitioned"
        );

        StepResult::Transitioned { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MealCategory;
    use crate::slots::{FixedClock, SlotEvaluator, SlotTable};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn book_at(h: u32, m: u32) -> SlotBook {
        let now = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap();
        SlotBook::new(
            SlotTable::reference(),
            SlotEvaluator::new(Arc::new(FixedClock(now)), 60),
        )
    }

    fn dinner_item() -> MenuItem {
        MenuItem {
            id: "item-08".to_string(),
            vendor_id: "vendor-01".to_string(),
            name: "Dal Makhani".to_string(),
            category: MealCategory::Dinner,
            price: 190,
            image_url: String::new(),
            description: None,
        }
    }

    fn to_payment(method: PaymentMethod) -> (CheckoutSession, SlotBook) {
        let book = book_at(12, 0);
        let mut session = CheckoutSession::start(dinner_item(), &book);
        session.apply(CheckoutEvent::ProceedToPayment, &book);
        session.apply(CheckoutEvent::SelectPaymentMethod(method), &book);
        (session, book)
    }

    #[test]
    fn starts_with_first_available_slot() {
        let book = book_at(16, 10);
        let session = CheckoutSession::start(dinner_item(), &book);
        assert_eq!(session.state(), CheckoutState::SlotSelection);
        assert_eq!(session.selected_slot(), Some("05:30 PM - 06:00 PM"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn starts_empty_when_category_closed() {
        let book = book_at(20, 0);
        let session = CheckoutSession::start(dinner_item(), &book);
        assert!(session.selected_slot().is_none());

        let mut session = session;
        let result = session.apply(CheckoutEvent::ProceedToPayment, &book);
        assert!(result.is_rejected());
        assert_eq!(session.state(), CheckoutState::SlotSelection);
    }

    #[test]
    fn selecting_slot_is_reentrant() {
        let book = book_at(12, 0);
        let mut session = CheckoutSession::start(dinner_item(), &book);
        let result = session.apply(
            CheckoutEvent::SelectSlot("08:00 PM - 08:30 PM".to_string()),
            &book,
        );
        assert_eq!(result, StepResult::Updated);
        assert_eq!(session.state(), CheckoutState::SlotSelection);
        assert_eq!(session.selected_slot(), Some("08:00 PM - 08:30 PM"));
    }

    #[test]
    fn unavailable_slot_cannot_be_selected() {
        let book = book_at(16, 45);
        let mut session = CheckoutSession::start(dinner_item(), &book);
        let before = session.selected_slot().map(str::to_string);

        let result = session.apply(
            CheckoutEvent::SelectSlot("05:00 PM - 05:30 PM".to_string()),
            &book,
        );
        assert!(result.is_rejected());
        assert_eq!(session.selected_slot().map(str::to_string), before);
    }

    #[test]
    fn cash_on_delivery_confirms_without_processing() {
        let (mut session, book) = to_payment(PaymentMethod::CashOnDelivery);
        let result = session.apply(CheckoutEvent::ConfirmPayment, &book);

        assert_eq!(
            result,
            StepResult::Transitioned {
                from: CheckoutState::PaymentSelection,
                to: CheckoutState::Confirmed
            }
        );
        assert!(!session.history().visited(&CheckoutState::Processing));
        assert_eq!(
            session.confirmed_selection(),
            Some(("05:00 PM - 05:30 PM", PaymentMethod::CashOnDelivery))
        );
    }

    #[test]
    fn gateway_methods_pass_through_processing_and_success() {
        for method in [PaymentMethod::Card, PaymentMethod::Upi] {
            let (mut session, book) = to_payment(method);
            session.apply(CheckoutEvent::ConfirmPayment, &book);
            assert_eq!(session.state(), CheckoutState::Processing);
            assert!(session.confirmed_selection().is_none());

            session.apply(CheckoutEvent::PaymentSettled, &book);
            session.apply(CheckoutEvent::ConfirmationShown, &book);

            let path: Vec<_> = session.history().get_path().into_iter().copied().collect();
            assert_eq!(
                path,
                vec![
                    CheckoutState::SlotSelection,
                    CheckoutState::PaymentSelection,
                    CheckoutState::Processing,
                    CheckoutState::Success,
                    CheckoutState::Confirmed,
                ]
            );
        }
    }

    #[test]
    fn processing_cannot_be_cancelled() {
        let (mut session, book) = to_payment(PaymentMethod::Card);
        session.apply(CheckoutEvent::ConfirmPayment, &book);
        assert!(session.apply(CheckoutEvent::Cancel, &book).is_rejected());
        assert_eq!(session.state(), CheckoutState::Processing);
    }

    #[test]
    fn back_keeps_selections() {
        let (mut session, book) = to_payment(PaymentMethod::Upi);
        session.apply(CheckoutEvent::BackToSlots, &book);
        assert_eq!(session.state(), CheckoutState::SlotSelection);
        assert_eq!(session.payment_method(), Some(PaymentMethod::Upi));
        assert!(session.selected_slot().is_some());
    }

    #[test]
    fn cancel_from_either_selection_state() {
        let book = book_at(12, 0);
        let mut early = CheckoutSession::start(dinner_item(), &book);
        early.apply(CheckoutEvent::Cancel, &book);
        assert_eq!(early.state(), CheckoutState::Cancelled);

        let (mut late, book) = to_payment(PaymentMethod::Card);
        late.apply(CheckoutEvent::Cancel, &book);
        assert_eq!(late.state(), CheckoutState::Cancelled);
        assert!(late.confirmed_selection().is_none());
    }

    #[test]
    fn session_snapshot_serializes() {
        let (session, _) = to_payment(PaymentMethod::Card);
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["state"], "PaymentSelection");
        assert_eq!(json["payment_method"], "Card");
    }
}
