//! Core state machine vocabulary.
//!
//! - States via the `State` trait
//! - Immutable history of accepted transitions
//!
//! Everything here is pure; timers and collaborators live in `checkout`.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
