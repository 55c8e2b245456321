//! Core State trait for flow states.
//!
//! Every state a session can occupy implements this trait, which exposes
//! pure inspection methods used by history tracking and logging.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for flow states.
///
/// All methods are pure. States are small values describing where a
/// session currently is; they are cloned into the history on every move.
///
/// # Example
///
/// ```rust
/// use mealslot::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Prep {
///     Queued,
///     Cooking,
///     Served,
///     Dropped,
/// }
///
/// impl State for Prep {
///     fn name(&self) -> &str {
///         match self {
///             Self::Queued => "Queued",
///             Self::Cooking => "Cooking",
///             Self::Served => "Served",
///             Self::Dropped => "Dropped",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Served | Self::Dropped)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Dropped)
///     }
/// }
///
/// assert!(Prep::Served.is_final());
/// assert!(!Prep::Cooking.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Terminal states accept no further events.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this state ends the flow without its intended result.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
