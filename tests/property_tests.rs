//! Property-based tests for slot parsing, availability and checkout history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use mealslot::checkout::CheckoutState;
use mealslot::core::{State, StateHistory, StateTransition};
use mealslot::slots::{ClockTime, FixedClock, SlotEvaluator, SlotWindow};
use proptest::prelude::*;
use std::sync::Arc;

fn on_day(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

fn clock_text(hour: u32, minute: u32, pm: bool) -> String {
    format!("{:02}:{:02} {}", hour, minute, if pm { "PM" } else { "AM" })
}

prop_compose! {
    fn twelve_hour_time()(hour in 1..=12u32, minute in 0..60u32, pm in any::<bool>())
        -> (u32, u32, bool) {
        (hour, minute, pm)
    }
}

prop_compose! {
    fn arbitrary_now()(hour in 0..24u32, minute in 0..60u32, second in 0..60u32)
        -> NaiveDateTime {
        on_day(hour, minute, second)
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..6u8) -> CheckoutState {
        match variant {
            0 => CheckoutState::SlotSelection,
            1 => CheckoutState::PaymentSelection,
            2 => CheckoutState::Processing,
            3 => CheckoutState::Success,
            4 => CheckoutState::Confirmed,
            _ => CheckoutState::Cancelled,
        }
    }
}

proptest! {
    #[test]
    fn twelve_hour_conversion(time in twelve_hour_time()) {
        let (hour, minute, pm) = time;
        let parsed = ClockTime::parse_12h(&clock_text(hour, minute, pm)).unwrap();

        let expected = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        prop_assert_eq!(parsed.hour(), expected);
        prop_assert_eq!(parsed.minute(), minute);
    }

    #[test]
    fn clock_time_display_is_canonical(time in twelve_hour_time()) {
        let (hour, minute, pm) = time;
        let text = clock_text(hour, minute, pm);
        prop_assert_eq!(ClockTime::parse_12h(&text).unwrap().to_string(), text);
    }

    #[test]
    fn each_end_carries_its_own_meridiem(start in twelve_hour_time(), end in twelve_hour_time()) {
        let descriptor = format!(
            "{} - {}",
            clock_text(start.0, start.1, start.2),
            clock_text(end.0, end.1, end.2)
        );
        let window = SlotWindow::parse(&descriptor).unwrap();
        let expected_start = ClockTime::parse_12h(&clock_text(start.0, start.1, start.2)).unwrap();
        let expected_end = ClockTime::parse_12h(&clock_text(end.0, end.1, end.2)).unwrap();
        prop_assert_eq!(window.start, expected_start);
        prop_assert_eq!(window.end, expected_end);
    }

    #[test]
    fn availability_follows_lead_time(
        start in twelve_hour_time(),
        now in arbitrary_now(),
        lead in 0..=240u32,
    ) {
        let (hour, minute, pm) = start;
        let descriptor = format!("{} - 11:59 PM", clock_text(hour, minute, pm));
        let evaluator = SlotEvaluator::new(Arc::new(FixedClock(now)), lead);

        let start_time = ClockTime::parse_12h(&clock_text(hour, minute, pm)).unwrap();
        let slot_start = on_day(start_time.hour(), start_time.minute(), 0);
        let expected = now < slot_start - Duration::minutes(i64::from(lead));

        prop_assert_eq!(evaluator.is_available(&descriptor), expected);
    }

    #[test]
    fn longer_lead_never_opens_a_slot(
        start in twelve_hour_time(),
        now in arbitrary_now(),
        lead in 0..=120u32,
        extra in 0..=120u32,
    ) {
        let descriptor = format!("{} - 11:59 PM", clock_text(start.0, start.1, start.2));
        let short = SlotEvaluator::new(Arc::new(FixedClock(now)), lead);
        let long = SlotEvaluator::new(Arc::new(FixedClock(now)), lead + extra);

        if long.is_available(&descriptor) {
            prop_assert!(short.is_available(&descriptor));
        }
    }

    #[test]
    fn garbage_is_never_available(input in "\\PC{0,30}", now in arbitrary_now()) {
        let evaluator = SlotEvaluator::new(Arc::new(FixedClock(now)), 0);
        if SlotWindow::parse(&input).is_err() {
            prop_assert!(!evaluator.is_available(&input));
        }
    }

    #[test]
    fn out_of_range_hours_are_rejected(hour in 13..100u32, minute in 0..60u32) {
        let text = format!("{}:{:02} PM - 11:59 PM", hour, minute);
        prop_assert!(SlotWindow::parse(&text).is_err());
    }

    #[test]
    fn checkout_state_predicates_agree(state in arbitrary_state()) {
        let terminal = matches!(state, CheckoutState::Confirmed | CheckoutState::Cancelled);
        prop_assert_eq!(state.is_final(), terminal);
        if state.is_cancellable() {
            prop_assert!(!state.is_final());
        }
    }

    #[test]
    fn state_names_identify_variants(a in arbitrary_state(), b in arbitrary_state()) {
        prop_assert_eq!(a.name() == b.name(), a == b);
    }

    #[test]
    fn history_preserves_order(
        transitions in prop::collection::vec(arbitrary_state(), 1..10)
    ) {
        let mut history = StateHistory::new();
        let mut expected_path = vec![CheckoutState::SlotSelection];

        for (i, to_state) in transitions.iter().enumerate() {
            let from_state = if i == 0 {
                CheckoutState::SlotSelection
            } else {
                transitions[i - 1]
            };

            history = history.record(StateTransition {
                from: from_state,
                to: *to_state,
                event: "Test".to_string(),
                timestamp: Utc::now(),
            });
            expected_path.push(*to_state);
        }

        let path = history.get_path();
        prop_assert_eq!(path.len(), expected_path.len());
        for (i, state) in path.iter().enumerate() {
            prop_assert_eq!(*state, &expected_path[i]);
        }
    }

    #[test]
    fn history_record_is_pure(from in arbitrary_state(), to in arbitrary_state()) {
        let history = StateHistory::new();
        let new_history = history.record(StateTransition {
            from,
            to,
            event: "Test".to_string(),
            timestamp: Utc::now(),
        });

        prop_assert_eq!(history.transitions().len(), 0);
        prop_assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn history_roundtrip_serialization(
        transitions in prop::collection::vec(arbitrary_state(), 0..5)
    ) {
        let mut history = StateHistory::new();
        for to_state in &transitions {
            history = history.record(StateTransition {
                from: CheckoutState::SlotSelection,
                to: *to_state,
                event: "Test".to_string(),
                timestamp: Utc::now(),
            });
        }

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<CheckoutState> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(history.transitions().len(), deserialized.transitions().len());
    }
}
