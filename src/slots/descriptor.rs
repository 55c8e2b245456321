//! Parsing of pickup slot descriptors such as `"12:30 PM - 01:00 PM"`.

use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a slot descriptor cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotParseError {
    #[error("Slot '{0}' has no '-' between start and end time")]
    MissingSeparator(String),

    #[error("Time '{0}' has no AM/PM marker")]
    MissingMeridiem(String),

    #[error("Unknown meridiem marker '{0}'")]
    UnknownMeridiem(String),

    #[error("Time '{0}' is not in hh:mm form")]
    MalformedTime(String),

    #[error("Hour {0} is outside 1-12")]
    HourOutOfRange(u32),

    #[error("Minute {0} is outside 0-59")]
    MinuteOutOfRange(u32),
}

/// A wall-clock time of day in 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Parse a 12-hour time like `"01:00 PM"`.
    ///
    /// ```rust
    /// use mealslot::slots::ClockTime;
    ///
    /// assert_eq!(ClockTime::parse_12h("12:00 AM").unwrap().hour(), 0);
    /// assert_eq!(ClockTime::parse_12h("12:00 PM").unwrap().hour(), 12);
    /// assert_eq!(ClockTime::parse_12h("01:00 PM").unwrap().hour(), 13);
    /// assert!(ClockTime::parse_12h("13:00 PM").is_err());
    /// ```
    pub fn parse_12h(input: &str) -> Result<Self, SlotParseError> {
        let mut parts = input.split_whitespace();
        let time = parts
            .next()
            .ok_or_else(|| SlotParseError::MalformedTime(input.to_string()))?;
        let marker = parts
            .next()
            .ok_or_else(|| SlotParseError::MissingMeridiem(input.to_string()))?;
        if parts.next().is_some() {
            return Err(SlotParseError::MalformedTime(input.to_string()));
        }

        let is_pm = if marker.eq_ignore_ascii_case("PM") {
            true
        } else if marker.eq_ignore_ascii_case("AM") {
            false
        } else {
            return Err(SlotParseError::UnknownMeridiem(marker.to_string()));
        };

        let (hour, minute) = time
            .split_once(':')
            .ok_or_else(|| SlotParseError::MalformedTime(time.to_string()))?;
        let hour = parse_component(hour, time)?;
        let minute = parse_component(minute, time)?;

        if !(1..=12).contains(&hour) {
            return Err(SlotParseError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(SlotParseError::MinuteOutOfRange(minute));
        }

        let hour = match (hour, is_pm) {
            (12, false) => 0,
            (h, true) if h < 12 => h + 12,
            (h, _) => h,
        };

        Ok(Self { hour, minute })
    }

    /// Hour in 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

// One or two ASCII digits; `u32::from_str` alone would accept a leading '+'.
fn parse_component(raw: &str, time: &str) -> Result<u32, SlotParseError> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SlotParseError::MalformedTime(time.to_string()));
    }
    raw.parse()
        .map_err(|_| SlotParseError::MalformedTime(time.to_string()))
}

impl FromStr for ClockTime {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_12h(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, marker) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{:02}:{:02} {}", hour, self.minute, marker)
    }
}

/// Start and end of a pickup window on the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl SlotWindow {
    pub fn parse(descriptor: &str) -> Result<Self, SlotParseError> {
        let (start, end) = descriptor
            .split_once('-')
            .ok_or_else(|| SlotParseError::MissingSeparator(descriptor.to_string()))?;

        Ok(Self {
            start: ClockTime::parse_12h(start.trim())?,
            end: ClockTime::parse_12h(end.trim())?,
        })
    }
}

impl FromStr for SlotWindow {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SlotWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
