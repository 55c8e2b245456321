//! Runtime configuration: lead time, simulated latencies and the slot table.
//!
//! Loaded from JSON with every field optional, then validated with all
//! problems reported together.
//!
//! ```rust
//! use mealslot::config::Config;
//!
//! let config = Config::from_json(r#"{ "lead_time_minutes": 45 }"#).unwrap();
//! assert_eq!(config.lead_time_minutes, 45);
//! assert_eq!(config.processing_delay_ms, 2500);
//! ```

use crate::checkout::CheckoutTimings;
use crate::domain::MealCategory;
use crate::slots::{Clock, SlotBook, SlotEvaluator, SlotParseError, SlotTable, SlotWindow};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Longest lead time that still leaves any same-day slot orderable.
pub const MAX_LEAD_TIME_MINUTES: u32 = 24 * 60;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Minutes required between ordering and a slot's start
    pub lead_time_minutes: u32,
    pub processing_delay_ms: u64,
    pub confirmation_delay_ms: u64,
    /// Per-call delay of the in-memory store
    pub store_latency_ms: u64,
    pub slots: SlotTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lead_time_minutes: 60,
            processing_delay_ms: 2500,
            confirmation_delay_ms: 1500,
            store_latency_ms: 500,
            slots: SlotTable::reference(),
        }
    }
}

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("{0} has no pickup slots")]
    MissingSlots(MealCategory),

    #[error("{category} slot '{slot}' is malformed: {reason}")]
    MalformedSlot {
        category: MealCategory,
        slot: String,
        reason: SlotParseError,
    },

    #[error("Confirmation delay {confirmation_ms} ms must be below processing {processing_ms} ms")]
    ConfirmationNotShorter {
        confirmation_ms: u64,
        processing_ms: u64,
    },

    #[error("Lead time of {0} minutes closes every slot")]
    LeadTimeTooLong(u32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Run every rule, accumulating all violations.
    pub fn validate(&self) -> Check {
        let mut checks: Vec<Check> = Vec::new();

        checks.push(if self.lead_time_minutes < MAX_LEAD_TIME_MINUTES {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::LeadTimeTooLong(self.lead_time_minutes))
        });

        checks.push(if self.confirmation_delay_ms < self.processing_delay_ms {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::ConfirmationNotShorter {
                confirmation_ms: self.confirmation_delay_ms,
                processing_ms: self.processing_delay_ms,
            })
        });

        for category in MealCategory::ALL {
            let slots = self.slots.slots(category);
            if slots.is_empty() {
                checks.push(Validation::fail(ConfigViolation::MissingSlots(category)));
            }
            for slot in slots {
                if let Err(reason) = SlotWindow::parse(slot) {
                    checks.push(Validation::fail(ConfigViolation::MalformedSlot {
                        category,
                        slot: slot.clone(),
                        reason,
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn timings(&self) -> CheckoutTimings {
        CheckoutTimings {
            processing: Duration::from_millis(self.processing_delay_ms),
            confirmation: Duration::from_millis(self.confirmation_delay_ms),
        }
    }

    pub fn store_latency(&self) -> Duration {
        Duration::from_millis(self.store_latency_ms)
    }

    pub fn slot_book(&self, clock: Arc<dyn Clock>) -> SlotBook {
        SlotBook::new(
            self.slots.clone(),
            SlotEvaluator::new(clock, self.lead_time_minutes),
        )
    }
}
