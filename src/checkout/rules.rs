//! Guards on checkout events, accumulated with `Validation`.
//!
//! Every violated rule is reported at once instead of stopping at the
//! first, so a rejected event carries the full reason set.

use super::session::CheckoutSession;
use super::state::{CheckoutEvent, CheckoutState};
use crate::domain::MealCategory;
use crate::slots::SlotBook;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Why an event was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutViolation {
    #[error("'{event}' is not accepted while in {state:?}")]
    NotAcceptedInState {
        event: &'static str,
        state: CheckoutState,
    },

    #[error("No pickup slot selected")]
    NoSlotSelected,

    #[error("Slot '{slot}' is not offered for {category}")]
    SlotNotOffered { slot: String, category: MealCategory },

    #[error("Slot '{slot}' is past its ordering cutoff")]
    SlotUnavailable { slot: String },

    #[error("No payment method selected")]
    NoPaymentMethod,
}

pub type RuleCheck = Validation<(), NonEmptyVec<CheckoutViolation>>;

fn ok() -> RuleCheck {
    Validation::success(())
}

fn violated(violation: CheckoutViolation) -> RuleCheck {
    Validation::fail(violation)
}

/// Run every rule that applies to `event` against the session.
pub fn check(session: &CheckoutSession, event: &CheckoutEvent, book: &SlotBook) -> RuleCheck {
    let mut checks = vec![check_state(session.state(), event)];

    match event {
        CheckoutEvent::SelectSlot(slot) => {
            checks.push(check_slot(book, session.item().category, slot));
        }
        CheckoutEvent::ProceedToPayment => {
            checks.push(check_selected_slot(session, book));
        }
        CheckoutEvent::ConfirmPayment => {
            checks.push(check_payment_method(session));
        }
        _ => {}
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_state(state: CheckoutState, event: &CheckoutEvent) -> RuleCheck {
    if event.accepted_in(state) {
        ok()
    } else {
        violated(CheckoutViolation::NotAcceptedInState {
            event: event.name(),
            state,
        })
    }
}

fn check_slot(book: &SlotBook, category: MealCategory, slot: &str) -> RuleCheck {
    if !book.slots(category).iter().any(|s| s == slot) {
        violated(CheckoutViolation::SlotNotOffered {
            slot: slot.to_string(),
            category,
        })
    } else if !book.evaluator().is_available(slot) {
        violated(CheckoutViolation::SlotUnavailable {
            slot: slot.to_string(),
        })
    } else {
        ok()
    }
}

fn check_selected_slot(session: &CheckoutSession, book: &SlotBook) -> RuleCheck {
    match session.selected_slot() {
        None => violated(CheckoutViolation::NoSlotSelected),
        Some(slot) => check_slot(book, session.item().category, slot),
    }
}

fn check_payment_method(session: &CheckoutSession) -> RuleCheck {
    if session.payment_method().is_some() {
        ok()
    } else {
        violated(CheckoutViolation::NoPaymentMethod)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MealCategory, MenuItem};
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

    fn lunch_item() -> MenuItem {
        MenuItem {
            id: "item-04".to_string(),
            vendor_id: "vendor-01".to_string(),
            name: "Butter Chicken with Naan".to_string(),
            category: MealCategory::Lunch,
            price: 350,
            image_url: String::new(),
            description: None,
        }
    }

    fn violations(check: RuleCheck) -> Vec<CheckoutViolation> {
        match check {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn proceeding_without_slot_is_rejected() {
        let book = book_at(13, 30);
        let session = CheckoutSession::start(lunch_item(), &book);
        assert!(session.selected_slot().is_none());

        let found = violations(check(&session, &CheckoutEvent::ProceedToPayment, &book));
        assert_eq!(found, vec![CheckoutViolation::NoSlotSelected]);
    }

    #[test]
    fn wrong_state_and_bad_slot_are_both_reported() {
        let book = book_at(11, 5);
        let mut session = CheckoutSession::start(lunch_item(), &book);
        session.apply(CheckoutEvent::ProceedToPayment, &book);
        assert_eq!(session.state(), CheckoutState::PaymentSelection);

        let found = violations(check(
            &session,
            &CheckoutEvent::SelectSlot("12:00 PM - 12:30 PM".to_string()),
            &book,
        ));
        assert_eq!(found.len(), 2);
        assert!(found
            .iter()
            .any(|v| matches!(v, CheckoutViolation::NotAcceptedInState { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, CheckoutViolation::SlotUnavailable { .. })));
    }

    #[test]
    fn slots_from_other_categories_are_not_offered() {
        let book = book_at(6, 0);
        let session = CheckoutSession::start(lunch_item(), &book);
        let found = violations(check(
            &session,
            &CheckoutEvent::SelectSlot("08:00 PM - 08:30 PM".to_string()),
            &book,
        ));
        assert_eq!(
            found,
            vec![CheckoutViolation::SlotNotOffered {
                slot: "08:00 PM - 08:30 PM".to_string(),
                category: MealCategory::Lunch,
            }]
        );
    }

    #[test]
    fn confirm_requires_payment_method() {
        let book = book_at(6, 0);
        let mut session = CheckoutSession::start(lunch_item(), &book);
        session.apply(CheckoutEvent::ProceedToPayment, &book);

        let found = violations(check(&session, &CheckoutEvent::ConfirmPayment, &book));
        assert_eq!(found, vec![CheckoutViolation::NoPaymentMethod]);
    }

    #[test]
    fn valid_selection_passes() {
        let book = book_at(6, 0);
        let session = CheckoutSession::start(lunch_item(), &book);
        let result = check(
            &session,
            &CheckoutEvent::SelectSlot("01:30 PM - 02:00 PM".to_string()),
            &book,
        );
        assert!(result.is_success());
    }
}
