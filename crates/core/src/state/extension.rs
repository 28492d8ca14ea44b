// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State aggregator module
//!
//! Owns the one authoritative `PlaybackState`. Every raw event it listens to
//! is routed through a `Dispatch`, which:
//!
//! 1. clones the current snapshot into a draft and applies the transition,
//! 2. drops the result if nothing changed (no emission, same `Arc`),
//! 3. otherwise publishes the draft and emits the specific `state:*` event
//!    followed by the generic `state:change`, both carrying the new and
//!    previous snapshots.
//!
//! Guards are checked against the current snapshot before a dispatch runs.

use super::snapshot::PlaybackState;
use super::transitions;
use crate::autoplay::AutoplayProbe;
use crate::config::PlayerConfig;
use crate::events::{BusError, EventData, Listener, StateChange};
use crate::module::{Module, ModuleContext};
use crate::names;
use std::any::Any;
use std::sync::{Arc, Mutex};

/// Name the state aggregator registers under
pub const MODULE_NAME: &str = "state";

type TransitionFn = dyn Fn(&mut PlaybackState, &EventData) + Send + Sync;

/// Guard predicate; `true` lets the transition through
pub type Guard = fn(&PlaybackState, &EventData) -> bool;

struct Store {
    ctx: ModuleContext,
    current: Mutex<Arc<PlaybackState>>,
    log_diffs: bool,
}

impl Store {
    fn snapshot(&self) -> Arc<PlaybackState> {
        Arc::clone(&self.current.lock().unwrap_or_else(|e| e.into_inner()))
    }

    fn commit(
        &self,
        transition: &TransitionFn,
        event: &'static str,
        data: &EventData,
    ) -> Result<(), BusError> {
        // The transition runs unlocked so it may read the snapshot itself;
        // publishing retries if another dispatch committed in between
        let change = loop {
            let base = self.snapshot();
            let mut draft = PlaybackState::clone(&base);
            transition(&mut draft, data);

            if draft == *base {
                tracing::trace!(event, "transition without effect");
                return Ok(());
            }

            let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
            if !Arc::ptr_eq(&*current, &base) {
                tracing::trace!(event, "snapshot moved, reapplying transition");
                continue;
            }

            let next = Arc::new(draft);
            let prev = std::mem::replace(&mut *current, Arc::clone(&next));
            break StateChange {
                state: next,
                prev_state: Some(prev),
            };
        };

        self.log_change(event, &change);

        // Listeners may read the snapshot or dispatch again
        let payload = EventData::StateChange(change);
        self.ctx.emit(event, &payload)?;
        self.ctx.emit(names::STATE_CHANGE, &payload)
    }

    fn log_change(&self, event: &str, change: &StateChange) {
        if !self.log_diffs || !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        let Some(prev) = change.prev_state.as_deref() else {
            return;
        };

        let fields = change
            .state
            .diff(prev)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        // Time updates arrive at frame rate
        if event == names::STATE_CURRENTTIME_CHANGE {
            tracing::trace!(event, %fields, "state changed");
        } else {
            tracing::debug!(event, %fields, "state changed");
        }
    }
}

/// A bound transition: calling it runs the dispatch protocol once
#[derive(Clone)]
pub struct Dispatch {
    store: Arc<Store>,
    transition: Arc<TransitionFn>,
    event: &'static str,
}

impl Dispatch {
    pub fn call(&self, data: &EventData) -> Result<(), BusError> {
        self.store.commit(self.transition.as_ref(), self.event, data)
    }

    /// Specific event emitted when this dispatch changes state
    pub fn event(&self) -> &'static str {
        self.event
    }

    /// Listener that always dispatches
    pub fn listener(&self) -> Listener {
        let dispatch = self.clone();
        Listener::new(move |data| Ok(dispatch.call(data)?))
    }

    /// Listener that dispatches only when `guard` accepts the current snapshot
    pub fn guarded(&self, guard: Guard, reason: &'static str) -> Listener {
        let dispatch = self.clone();
        Listener::new(move |data| {
            if !guard(&dispatch.store.snapshot(), data) {
                tracing::debug!(event = dispatch.event, reason, "transition suppressed");
                return Ok(());
            }
            Ok(dispatch.call(data)?)
        })
    }
}

/// Module that folds raw player and ad events into `PlaybackState` snapshots
pub struct StateExtension {
    ctx: ModuleContext,
    store: Arc<Store>,
}

impl StateExtension {
    /// Wire every transition onto the bus and announce the initial snapshot.
    ///
    /// `autoplay` is asked each time the engine becomes ready.
    pub fn new(
        ctx: ModuleContext,
        autoplay: Arc<dyn AutoplayProbe>,
        config: &PlayerConfig,
    ) -> Result<Self, BusError> {
        let store = Arc::new(Store {
            ctx: ctx.clone(),
            current: Mutex::new(Arc::new(PlaybackState::default())),
            log_diffs: config.log_state_diffs,
        });
        let ext = Self { ctx, store };

        let set_ready = ext.dispatch(names::STATE_READY, move |draft, _| {
            transitions::ready(draft, autoplay.can_autoplay())
        });
        ext.ctx.on(names::READY, set_ready.listener());

        let set_play_requested =
            ext.dispatch(names::STATE_PLAY_REQUESTED, transitions::play_requested);
        ext.ctx.on(names::PLAYER_PLAY, set_play_requested.listener());
        ext.ctx.on(names::ADBREAK_PLAY, set_play_requested.listener());

        let set_playing = ext.dispatch(names::STATE_PLAYING, transitions::playing);
        ext.ctx.on(names::PLAYER_PLAYING, set_playing.listener());
        ext.ctx.on(names::ADBREAK_PLAYING, set_playing.listener());

        let set_paused = ext.dispatch(names::STATE_PAUSED, transitions::paused);
        ext.ctx.on(
            names::PLAYER_PAUSE,
            set_paused.guarded(transitions::media_pause_allowed, "ad break active"),
        );
        ext.ctx.on(names::ADBREAK_PAUSE, set_paused.listener());

        let set_current_time =
            ext.dispatch(names::STATE_CURRENTTIME_CHANGE, transitions::current_time);
        ext.ctx.on(names::PLAYER_TIMEUPDATE, set_current_time.listener());

        let set_duration = ext.dispatch(names::STATE_DURATION_CHANGE, transitions::duration);
        ext.ctx.on(names::PLAYER_DURATIONCHANGE, set_duration.listener());

        let set_ad_break_current_time = ext.dispatch(
            names::STATE_CURRENTTIME_CHANGE,
            transitions::ad_break_current_time,
        );
        ext.ctx.on(
            names::ADBREAK_TIMEUPDATE,
            set_ad_break_current_time.listener(),
        );

        let set_buffering = ext.dispatch(names::STATE_BUFFERING, transitions::buffering);
        ext.ctx.on(names::PLAYER_WAITING, set_buffering.listener());

        let set_ad_breaks = ext.dispatch(names::STATE_ADBREAKS, transitions::ad_breaks);
        ext.ctx.on(names::ADBREAKS, set_ad_breaks.listener());

        let set_ad_break = ext.dispatch(names::STATE_ADBREAK_STARTED, transitions::ad_break_started);
        ext.ctx.on(names::ADBREAK_STARTED, set_ad_break.listener());

        let reset_ad_break = ext.dispatch(names::STATE_ADBREAK_ENDED, transitions::ad_break_ended);
        ext.ctx.on(names::ADBREAK_ENDED, reset_ad_break.listener());

        let set_ad = ext.dispatch(names::STATE_AD_STARTED, transitions::ad_started);
        ext.ctx.on(names::AD_STARTED, set_ad.listener());

        let reset_ad = ext.dispatch(names::STATE_AD_ENDED, transitions::ad_ended);
        ext.ctx.on(names::AD_ENDED, reset_ad.listener());

        // Registered after the ad break reset so `state:adbreak-ended` lands
        // before `state:ended` when a post-roll finishes
        let set_ended = ext.dispatch(names::STATE_ENDED, transitions::ended);
        ext.ctx.on(
            names::PLAYER_ENDED,
            set_ended.guarded(transitions::media_end_allowed, "post-roll pending"),
        );
        ext.ctx.on(
            names::ADBREAK_ENDED,
            set_ended.guarded(transitions::post_roll_finished, "not a post-roll"),
        );

        let set_buffered = ext.dispatch(names::STATE_BUFFERED_CHANGE, transitions::buffered);
        ext.ctx.on(names::PLAYER_BUFFEREDCHANGE, set_buffered.listener());

        let set_error = ext.dispatch(names::STATE_ERROR, transitions::error);
        ext.ctx.on(names::ERROR, set_error.listener());

        let set_volume = ext.dispatch(names::STATE_VOLUME_CHANGE, transitions::volume);
        ext.ctx.on(names::PLAYER_VOLUMECHANGE, set_volume.listener());

        let set_fullscreen_supported = ext.dispatch(
            names::STATE_FULLSCREEN_SUPPORTED,
            transitions::fullscreen_supported,
        );
        ext.ctx.on(
            names::FULLSCREEN_SUPPORTED,
            set_fullscreen_supported.listener(),
        );

        let set_fullscreen = ext.dispatch(names::STATE_FULLSCREEN_CHANGE, transitions::fullscreen);
        ext.ctx.on(names::FULLSCREEN_CHANGE, set_fullscreen.listener());

        let set_pip = ext.dispatch(names::STATE_PIP_CHANGE, transitions::pip);
        ext.ctx.on(names::PIP_CHANGE, set_pip.listener());

        tracing::debug!(module = ext.ctx.name(), "state aggregator wired");

        ext.ctx.emit(
            names::STATE_CHANGE,
            &EventData::StateChange(StateChange {
                state: ext.state(),
                prev_state: None,
            }),
        )?;

        Ok(ext)
    }

    /// Bind a transition to the specific event it announces
    pub fn dispatch<F>(&self, event: &'static str, transition: F) -> Dispatch
    where
        F: Fn(&mut PlaybackState, &EventData) + Send + Sync + 'static,
    {
        Dispatch {
            store: Arc::clone(&self.store),
            transition: Arc::new(transition),
            event,
        }
    }

    /// The current snapshot
    pub fn state(&self) -> Arc<PlaybackState> {
        self.store.snapshot()
    }
}

impl Module for StateExtension {
    fn name(&self) -> &str {
        self.ctx.name()
    }

    fn destroy(&self) {
        tracing::debug!(module = self.ctx.name(), "state aggregator released");
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
