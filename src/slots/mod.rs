//! Pickup slot availability.
//!
//! - `SlotWindow`/`ClockTime`: descriptor parsing with the 12-hour rule
//! - `Clock`: the single source of "now"
//! - `SlotEvaluator`: the lead-time predicate, failing closed on bad input
//! - `SlotTable`/`SlotBook`: per-category configuration and aggregate orderability

mod book;
mod clock;
mod descriptor;
mod evaluator;
mod table;

pub use book::{SlotBook, SlotOption};
pub use clock::{Clock, FixedClock, ManualClock, SystemClock};
pub use descriptor::{ClockTime, SlotParseError, SlotWindow};
pub use evaluator::SlotEvaluator;
pub use table::SlotTable;
