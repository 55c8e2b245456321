//! Checkout states and the events that move between them.

use crate::core::State;
use crate::domain::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Where a checkout session currently stands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum CheckoutState {
    SlotSelection,
    PaymentSelection,
    /// Simulated gateway round-trip; cannot be cancelled.
    Processing,
    /// Payment accepted, confirmation on display.
    Success,
    /// Handed off to order placement.
    Confirmed,
    Cancelled,
}

impl CheckoutState {
    /// The user may still walk away without placing anything.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::SlotSelection | Self::PaymentSelection)
    }
}

impl State for CheckoutState {
    fn name(&self) -> &str {
        match self {
            Self::SlotSelection => "SlotSelection",
            Self::PaymentSelection => "PaymentSelection",
            Self::Processing => "Processing",
            Self::Success => "Success",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Cancelled)
    }
}

/// Inputs to a checkout session.
///
/// `PaymentSettled` and `ConfirmationShown` are raised by the controller's
/// timers, everything else by the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutEvent {
    SelectSlot(String),
    ProceedToPayment,
    BackToSlots,
    SelectPaymentMethod(PaymentMethod),
    ConfirmPayment,
    PaymentSettled,
    ConfirmationShown,
    Cancel,
}

impl CheckoutEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectSlot(_) => "SelectSlot",
            Self::ProceedToPayment => "ProceedToPayment",
            Self::BackToSlots => "BackToSlots",
            Self::SelectPaymentMethod(_) => "SelectPaymentMethod",
            Self::ConfirmPayment => "ConfirmPayment",
            Self::PaymentSettled => "PaymentSettled",
            Self::ConfirmationShown => "ConfirmationShown",
            Self::Cancel => "Cancel",
        }
    }

    /// Whether the event is meaningful in `state` at all, before any guard runs.
    pub fn accepted_in(&self, state: CheckoutState) -> bool {
        use CheckoutState::*;
        match self {
            Self::SelectSlot(_) | Self::ProceedToPayment => state == SlotSelection,
            Self::BackToSlots | Self::SelectPaymentMethod(_) | Self::ConfirmPayment => {
                state == PaymentSelection
            }
            Self::PaymentSettled => state == Processing,
            Self::ConfirmationShown => state == Success,
            Self::Cancel => state.is_cancellable(),
        }
    }
}
