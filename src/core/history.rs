//! Transition history tracking.
//!
//! Records every accepted move of a session as an immutable value so the
//! path a checkout took can be inspected after the fact.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use mealslot::checkout::CheckoutState;
/// use mealslot::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: CheckoutState::SlotSelection,
///     to: CheckoutState::PaymentSelection,
///     event: "ProceedToPayment".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, "ProceedToPayment");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the event that caused the move
    pub event: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use mealslot::checkout::CheckoutState;
/// use mealslot::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: CheckoutState::SlotSelection,
///         to: CheckoutState::PaymentSelection,
///         event: "ProceedToPayment".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: CheckoutState::PaymentSelection,
///         to: CheckoutState::Confirmed,
///         event: "ConfirmPayment".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert!(!history.visited(&CheckoutState::Processing));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Whether `state` appears anywhere on the path.
    pub fn visited(&self, state: &S) -> bool {
        self.get_path().into_iter().any(|s| s == state)
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
