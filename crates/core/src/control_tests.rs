// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::events::Listener;
use std::sync::{Arc, Mutex};
use yare::parameterized;

fn capture(bus: &EventBus, name: &str) -> Arc<Mutex<Vec<EventData>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.on(
        name,
        Listener::infallible(move |data| sink.lock().unwrap().push(data.clone())),
    );
    seen
}

#[test]
fn play_and_pause_emit_commands() {
    let bus = EventBus::new();
    let plays = capture(&bus, names::CONTROL_PLAY);
    let pauses = capture(&bus, names::CONTROL_PAUSE);
    let control = BusControl::new(bus);

    control.play().unwrap();
    control.pause().unwrap();
    control.play().unwrap();

    assert_eq!(plays.lock().unwrap().len(), 2);
    assert_eq!(pauses.lock().unwrap().len(), 1);
}

#[test]
fn seek_carries_target_time() {
    let bus = EventBus::new();
    let seeks = capture(&bus, names::CONTROL_SEEK);

    BusControl::new(bus).seek_to(42.5).unwrap();

    assert_eq!(*seeks.lock().unwrap(), vec![EventData::Seek { time: 42.5 }]);
}

#[test]
fn volume_carries_level() {
    let bus = EventBus::new();
    let volumes = capture(&bus, names::CONTROL_VOLUME);

    BusControl::new(bus).set_volume(0.25).unwrap();

    assert_eq!(
        *volumes.lock().unwrap(),
        vec![EventData::Volume { volume: 0.25 }]
    );
}

#[parameterized(
    negative = { -1.0 },
    nan = { f64::NAN },
    infinite = { f64::INFINITY },
)]
fn seek_rejects_bad_targets(time: f64) {
    let bus = EventBus::new();
    let seeks = capture(&bus, names::CONTROL_SEEK);

    let result = BusControl::new(bus).seek_to(time);

    assert!(matches!(result, Err(ControlError::InvalidSeek(_))));
    assert!(seeks.lock().unwrap().is_empty());
}

#[parameterized(
    too_loud = { 1.5 },
    negative = { -0.1 },
    nan = { f64::NAN },
)]
fn volume_rejects_out_of_range(volume: f64) {
    let result = BusControl::new(EventBus::new()).set_volume(volume);
    assert!(matches!(result, Err(ControlError::InvalidVolume(_))));
}

#[test]
fn listener_fault_surfaces_as_bus_error() {
    let bus = EventBus::new();
    bus.on(
        names::CONTROL_PLAY,
        Listener::new(|_| Err(crate::events::ListenerError::new("engine gone"))),
    );

    let err = BusControl::new(bus).play().unwrap_err();

    assert!(matches!(err, ControlError::Bus(_)));
    assert!(err.to_string().contains("engine gone"));
}

#[test]
fn fake_control_records_calls() {
    let fake = FakeControl::new();
    fake.play().unwrap();
    fake.seek_to(3.0).unwrap();
    fake.set_volume(0.5).unwrap();
    fake.pause().unwrap();

    assert_eq!(
        fake.calls(),
        vec![
            ControlCall::Play,
            ControlCall::SeekTo(3.0),
            ControlCall::SetVolume(0.5),
            ControlCall::Pause,
        ]
    );
}
