// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Integration tests for a full player session
//!
//! A scripted media engine module answers `control:*` commands with raw
//! signals, and the state aggregator folds them into snapshots.

use reel_core::state::MODULE_NAME;
use reel_core::{
    names, AdBreak, AdBreakKind, EventData, FixedAutoplay, Host, HostDeps, Listener, Module,
    ModuleContext, PlaybackState, PlayerConfig, StateExtension,
};
use std::any::Any;
use std::sync::{Arc, Mutex};

/// Media engine stand-in that reacts to host commands by name only
struct ScriptedEngine {
    ctx: ModuleContext,
}

impl ScriptedEngine {
    fn new(ctx: ModuleContext) -> Self {
        let bus = ctx.clone();
        ctx.on(
            names::CONTROL_PLAY,
            Listener::new(move |_| {
                bus.emit(names::PLAYER_PLAY, &EventData::Empty)?;
                bus.emit(names::PLAYER_PLAYING, &EventData::Empty)?;
                Ok(())
            }),
        );

        let bus = ctx.clone();
        ctx.on(
            names::CONTROL_PAUSE,
            Listener::new(move |_| Ok(bus.emit(names::PLAYER_PAUSE, &EventData::Empty)?)),
        );

        let bus = ctx.clone();
        ctx.on(
            names::CONTROL_SEEK,
            Listener::new(move |data| {
                if let EventData::Seek { time } = data {
                    bus.emit(
                        names::PLAYER_TIMEUPDATE,
                        &EventData::CurrentTime { current_time: *time },
                    )?;
                }
                Ok(())
            }),
        );

        let bus = ctx.clone();
        ctx.on(
            names::CONTROL_VOLUME,
            Listener::new(move |data| Ok(bus.emit(names::PLAYER_VOLUMECHANGE, data)?)),
        );

        Self { ctx }
    }
}

impl Module for ScriptedEngine {
    fn name(&self) -> &str {
        self.ctx.name()
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

fn start(can_autoplay: bool) -> (Host, Arc<StateExtension>) {
    let host = Host::new(
        PlayerConfig::default(),
        HostDeps {
            autoplay: Arc::new(FixedAutoplay(can_autoplay)),
            ..HostDeps::default()
        },
    );
    let state = host.register_state().unwrap();
    host.register("engine", |ctx| Ok(ScriptedEngine::new(ctx)))
        .unwrap();
    (host, state)
}

fn ad_break(id: &str, kind: AdBreakKind) -> EventData {
    EventData::AdBreak {
        ad_break: AdBreak::new(id, kind),
    }
}

#[test]
fn host_commands_round_trip_through_engine_module() {
    let (host, state) = start(true);

    host.emit(names::READY, &EventData::Empty).unwrap();
    host.play().unwrap();
    assert!(state.state().playing);

    host.seek_to(42.0).unwrap();
    assert_eq!(state.state().current_time, Some(42.0));

    host.set_volume(0.5).unwrap();
    assert_eq!(state.state().volume, 0.5);

    host.pause().unwrap();
    assert!(state.state().paused);
    assert!(!state.state().playing);
}

#[test]
fn full_session_with_pre_mid_and_post_rolls() {
    let (host, state) = start(false);
    let snapshots: Arc<Mutex<Vec<Arc<PlaybackState>>>> = Arc::default();
    let sink = Arc::clone(&snapshots);
    host.on(
        names::STATE_CHANGE,
        Listener::infallible(move |data| {
            if let Some(change) = data.state_change() {
                sink.lock().unwrap().push(Arc::clone(&change.state));
            }
        }),
    );

    host.emit(
        names::ADBREAKS,
        &EventData::AdBreaks {
            ad_breaks: vec![
                AdBreak::new("pre", AdBreakKind::PreRoll),
                AdBreak::new("mid", AdBreakKind::MidRoll).with_start_time(30.0),
                AdBreak::new("post", AdBreakKind::PostRoll),
            ],
        },
    )
    .unwrap();
    host.emit(names::READY, &EventData::Empty).unwrap();
    assert!(state.state().waiting_for_user);

    // Pre-roll plays before content; media pause is not authoritative
    host.emit(names::ADBREAK_STARTED, &ad_break("pre", AdBreakKind::PreRoll))
        .unwrap();
    host.emit(names::ADBREAK_PLAY, &EventData::Empty).unwrap();
    host.emit(names::ADBREAK_PLAYING, &EventData::Empty).unwrap();
    host.emit(names::PLAYER_PAUSE, &EventData::Empty).unwrap();
    assert!(!state.state().paused);
    assert!(!state.state().waiting_for_user);
    host.emit(names::ADBREAK_ENDED, &ad_break("pre", AdBreakKind::PreRoll))
        .unwrap();
    assert!(!state.state().ended);

    host.play().unwrap();
    host.emit(
        names::PLAYER_TIMEUPDATE,
        &EventData::CurrentTime { current_time: 30.0 },
    )
    .unwrap();

    host.emit(names::ADBREAK_STARTED, &ad_break("mid", AdBreakKind::MidRoll))
        .unwrap();
    host.emit(
        names::ADBREAK_TIMEUPDATE,
        &EventData::CurrentTime { current_time: 5.0 },
    )
    .unwrap();
    assert_eq!(state.state().ad_break_current_time(), Some(5.0));
    assert_eq!(state.state().current_time, Some(30.0));
    host.emit(names::ADBREAK_ENDED, &ad_break("mid", AdBreakKind::MidRoll))
        .unwrap();

    // Content ends, but the post-roll still has to play
    host.emit(names::PLAYER_ENDED, &EventData::Empty).unwrap();
    assert!(!state.state().ended);

    host.emit(names::ADBREAK_STARTED, &ad_break("post", AdBreakKind::PostRoll))
        .unwrap();
    host.emit(names::ADBREAK_ENDED, &ad_break("post", AdBreakKind::PostRoll))
        .unwrap();

    let last = state.state();
    assert!(last.ended);
    assert!(!last.started);
    assert_eq!(last.ad_break(), None);

    let snapshots = snapshots.lock().unwrap();
    assert!(Arc::ptr_eq(snapshots.last().unwrap(), &last));
    for pair in snapshots.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }

    host.destroy().unwrap();
    assert!(host.get_module(MODULE_NAME).is_none());
    assert_eq!(host.get_stats().listeners, 0);
}

#[test]
fn error_reported_mid_session_is_kept_as_state() {
    let (host, state) = start(true);
    host.play().unwrap();

    host.set_error(reel_core::PlayerError::new("decode", "corrupt segment"))
        .unwrap();

    let snapshot = state.state();
    assert!(snapshot.playing);
    assert_eq!(
        snapshot.error.as_ref().map(|e| e.message.as_str()),
        Some("corrupt segment")
    );
}
