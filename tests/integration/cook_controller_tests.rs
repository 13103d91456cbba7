//! Integration tests for the CookController → ports command chain.
//!
//! Every collaborator is a recording mock, so each scenario asserts the
//! exact calls the controller issued.

use super::mock_hw::{HwCall, MockHardware, RecordingSink};

use ovencore::cook::commands::CookCommand;
use ovencore::cook::controller::{CookController, CookState};
use ovencore::cook::events::{OvenEvent, TimerEvent};
use ovencore::error::Error;

fn make_rig() -> (CookController, MockHardware, RecordingSink) {
    let hw = MockHardware::new();
    let controller = CookController::new(&hw);
    (controller, hw, RecordingSink::new())
}

// ── StartCooking ──────────────────────────────────────────────

#[test]
fn start_cooking_activates_heater_and_timer() {
    let (mut ctl, mut hw, mut sink) = make_rig();

    ctl.start_cooking(50, 60, &mut hw, &mut sink).unwrap();

    assert_eq!(ctl.state(), CookState::Cooking);
    assert_eq!(
        hw.calls,
        vec![
            HwCall::TurnOn { power_watts: 50 },
            HwCall::TimerStart { duration_secs: 60 },
        ]
    );
}

#[test]
fn start_cooking_out_of_range_power_propagates_and_leaves_idle() {
    let (mut ctl, mut hw, mut sink) = make_rig();

    let err = ctl.start_cooking(701, 60, &mut hw, &mut sink).unwrap_err();

    assert!(matches!(err, Error::OutOfRange { value: 701, .. }));
    assert_eq!(ctl.state(), CookState::Idle);
    assert!(
        !hw.calls.contains(&HwCall::TimerStart { duration_secs: 60 }),
        "timer must not start when the heater rejects the power"
    );
}

#[test]
fn start_cooking_twice_fails_with_already_active() {
    let (mut ctl, mut hw, mut sink) = make_rig();

    ctl.start_cooking(50, 60, &mut hw, &mut sink).unwrap();
    let err = ctl.start_cooking(60, 30, &mut hw, &mut sink).unwrap_err();

    assert_eq!(err, Error::AlreadyActive);
    assert_eq!(ctl.state(), CookState::Cooking);
}

// ── Tick relay ────────────────────────────────────────────────

#[test]
fn tick_is_relayed_to_display_in_minutes_and_seconds() {
    let (mut ctl, mut hw, mut sink) = make_rig();
    ctl.start_cooking(50, 60, &mut hw, &mut sink).unwrap();

    ctl.on_timer_event(TimerEvent::Tick { remaining_secs: 115 }, &mut hw, &mut sink);

    assert!(hw.calls.contains(&HwCall::ShowTime {
        minutes: 1,
        seconds: 55
    }));
    assert_eq!(ctl.state(), CookState::Cooking);
}

#[test]
fn tick_below_a_minute_shows_zero_minutes() {
    let (mut ctl, mut hw, mut sink) = make_rig();
    ctl.start_cooking(50, 60, &mut hw, &mut sink).unwrap();

    ctl.on_timer_event(TimerEvent::Tick { remaining_secs: 59 }, &mut hw, &mut sink);

    assert!(hw.calls.contains(&HwCall::ShowTime {
        minutes: 0,
        seconds: 59
    }));
}

// ── Expiration ────────────────────────────────────────────────

#[test]
fn expiration_turns_heater_off_and_signals_completion() {
    let (mut ctl, mut hw, mut sink) = make_rig();
    ctl.start_cooking(50, 60, &mut hw, &mut sink).unwrap();

    ctl.on_timer_event(TimerEvent::Expired, &mut hw, &mut sink);

    assert_eq!(ctl.state(), CookState::Idle);
    assert!(hw.calls.contains(&HwCall::TurnOff));
    assert_eq!(hw.buzz_count(), 1);
    assert_eq!(hw.done_count(), 1);
    assert!(sink.events.contains(&OvenEvent::CookCompleted));
}

// ── Stop ──────────────────────────────────────────────────────

#[test]
fn stop_turns_heater_off_without_completion_signals() {
    let (mut ctl, mut hw, mut sink) = make_rig();
    ctl.start_cooking(50, 60, &mut hw, &mut sink).unwrap();

    ctl.stop(&mut hw, &mut sink);

    assert_eq!(ctl.state(), CookState::Idle);
    assert!(hw.calls.contains(&HwCall::TurnOff));
    assert_eq!(hw.buzz_count(), 0, "stop must not buzz");
    assert_eq!(hw.done_count(), 0, "stop must not notify completion");
    assert!(sink.events.contains(&OvenEvent::CookStopped));
}

#[test]
fn stop_while_idle_is_a_safe_no_op() {
    let (mut ctl, mut hw, mut sink) = make_rig();

    ctl.stop(&mut hw, &mut sink);

    assert_eq!(ctl.state(), CookState::Idle);
    assert!(sink.events.is_empty(), "no events for an idle stop");
}

#[test]
fn timer_events_after_stop_are_ignored() {
    let (mut ctl, mut hw, mut sink) = make_rig();
    ctl.start_cooking(50, 60, &mut hw, &mut sink).unwrap();
    ctl.stop(&mut hw, &mut sink);
    let calls_after_stop = hw.calls.len();

    ctl.on_timer_event(TimerEvent::Tick { remaining_secs: 30 }, &mut hw, &mut sink);
    ctl.on_timer_event(TimerEvent::Expired, &mut hw, &mut sink);

    assert_eq!(hw.calls.len(), calls_after_stop, "stale events must not touch ports");
    assert_eq!(hw.done_count(), 0);
}

// ── AddTime ───────────────────────────────────────────────────

#[test]
fn positive_extensions_forward_exactly_once() {
    for delta in [0, 1, 30, 120] {
        let (mut ctl, mut hw, mut sink) = make_rig();
        ctl.start_cooking(50, 60, &mut hw, &mut sink).unwrap();

        ctl.add_time(delta, &mut hw, &mut sink).unwrap();

        assert_eq!(hw.added_time(), vec![delta as u32]);
    }
}

#[test]
fn negative_extensions_fail_while_cooking() {
    for delta in [-1, -2, -30, -120] {
        let (mut ctl, mut hw, mut sink) = make_rig();
        ctl.start_cooking(50, 60, &mut hw, &mut sink).unwrap();

        let err = ctl.add_time(delta, &mut hw, &mut sink).unwrap_err();

        assert!(matches!(err, Error::OutOfRange { .. }));
        assert!(hw.added_time().is_empty(), "nothing may reach the timer");
        assert_eq!(ctl.state(), CookState::Cooking);
    }
}

#[test]
fn extension_while_idle_forwards_but_emits_nothing() {
    let (mut ctl, mut hw, mut sink) = make_rig();

    ctl.add_time(30, &mut hw, &mut sink).unwrap();

    assert_eq!(hw.added_time(), vec![30]);
    assert!(sink.events.is_empty());
}

// ── MaxPower mirror ───────────────────────────────────────────

#[test]
fn controller_mirrors_heater_max_power() {
    let hw = MockHardware::with_max_power(500);
    let ctl = CookController::new(&hw);
    assert_eq!(ctl.max_power(), 500);
}

// ── Command dispatch ──────────────────────────────────────────

#[test]
fn commands_map_onto_operations() {
    let (mut ctl, mut hw, mut sink) = make_rig();

    ctl.handle_command(
        CookCommand::Start {
            power_watts: 600,
            duration_secs: 90,
        },
        &mut hw,
        &mut sink,
    )
    .unwrap();
    assert!(ctl.is_cooking());

    ctl.handle_command(CookCommand::AddTime { delta_secs: 15 }, &mut hw, &mut sink)
        .unwrap();
    assert_eq!(hw.added_time(), vec![15]);

    ctl.handle_command(CookCommand::Stop, &mut hw, &mut sink).unwrap();
    assert!(!ctl.is_cooking());
}

// ── Event stream ──────────────────────────────────────────────

#[test]
fn full_cycle_emits_state_changes_in_order() {
    let (mut ctl, mut hw, mut sink) = make_rig();

    ctl.start_cooking(600, 90, &mut hw, &mut sink).unwrap();
    ctl.on_timer_event(TimerEvent::Expired, &mut hw, &mut sink);

    assert_eq!(
        sink.events,
        vec![
            OvenEvent::CookStarted {
                power_watts: 600,
                duration_secs: 90,
            },
            OvenEvent::StateChanged {
                from: CookState::Idle,
                to: CookState::Cooking,
            },
            OvenEvent::CookCompleted,
            OvenEvent::StateChanged {
                from: CookState::Cooking,
                to: CookState::Idle,
            },
        ]
    );
}
