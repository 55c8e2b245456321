//! Lead-time availability of pickup slots.

use super::clock::Clock;
use super::descriptor::{SlotParseError, SlotWindow};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tracing::warn;

/// Decides whether a new order may still pick a slot.
///
/// A slot stays orderable while `now < start - lead_time`, with the start
/// resolved against today's date. The clock is read on every call, so
/// results must not be cached across renders.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use mealslot::slots::{FixedClock, SlotEvaluator};
///
/// let now = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(11, 5, 0).unwrap();
/// let evaluator = SlotEvaluator::new(Arc::new(FixedClock(now)), 60);
///
/// assert!(!evaluator.is_available("12:00 PM - 12:30 PM"));
/// assert!(evaluator.is_available("12:30 PM - 01:00 PM"));
/// assert!(!evaluator.is_available("not a slot"));
/// ```
#[derive(Clone)]
pub struct SlotEvaluator {
    clock: Arc<dyn Clock>,
    lead_time: Duration,
}

impl SlotEvaluator {
    pub fn new(clock: Arc<dyn Clock>, lead_time_minutes: u32) -> Self {
        Self {
            clock,
            lead_time: Duration::minutes(i64::from(lead_time_minutes)),
        }
    }

    pub fn lead_time(&self) -> Duration {
        self.lead_time
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Whether `descriptor` can still be ordered right now.
    pub fn is_available(&self, descriptor: &str) -> bool {
        self.is_available_at(descriptor, self.clock.now())
    }

    /// Availability as of `now`. Unparseable descriptors are never available.
    pub fn is_available_at(&self, descriptor: &str, now: NaiveDateTime) -> bool {
        match self.cutoff_on(descriptor, now.date()) {
            Ok(cutoff) => now < cutoff,
            Err(err) => {
                warn!(
                    slot = descriptor,
                    error = %err,
                    "unparseable pickup slot treated as unavailable"
                );
                false
            }
        }
    }

    /// Whether at least one of `slots` is available, all judged against one clock reading.
    pub fn any_available<'a, I>(&self, slots: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let now = self.clock.now();
        slots
            .into_iter()
            .any(|slot| self.is_available_at(slot, now))
    }

    /// Start of the slot on `date`.
    pub fn slot_start(descriptor: &str, date: NaiveDate) -> Result<NaiveDateTime, SlotParseError> {
        let window = SlotWindow::parse(descriptor)?;
        let time = window
            .start
            .to_naive_time()
            .ok_or_else(|| SlotParseError::MalformedTime(descriptor.to_string()))?;
        Ok(date.and_time(time))
    }

    /// Last instant (exclusive) at which the slot on `date` can be ordered.
    pub fn cutoff_on(
        &self,
        descriptor: &str,
        date: NaiveDate,
    ) -> Result<NaiveDateTime, SlotParseError> {
        Ok(Self::slot_start(descriptor, date)? - self.lead_time)
    }
}

impl std::fmt::Debug for SlotEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotEvaluator")
            .field("lead_time", &self.lead_time)
            .finish_non_exhaustive()
    }
}
