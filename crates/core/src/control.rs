// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playback control seam
//!
//! Host lifecycle calls (`play`, `pause`, `seek_to`, `set_volume`) land here.
//! The default `BusControl` turns each call into a `control:*` command event
//! so whichever module drives the media engine can pick it up by name.

use crate::events::{BusError, EventBus, EventData};
use crate::names;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("bus error: {0}")]
    Bus(#[from] BusError),
    #[error("invalid seek target: {0}")]
    InvalidSeek(f64),
    #[error("invalid volume: {0} (expected 0.0..=1.0)")]
    InvalidVolume(f64),
    #[error("control rejected: {0}")]
    Rejected(String),
}

/// Receives playback commands from the host
pub trait PlaybackControl: Send + Sync {
    fn play(&self) -> Result<(), ControlError>;
    fn pause(&self) -> Result<(), ControlError>;
    fn seek_to(&self, time: f64) -> Result<(), ControlError>;
    fn set_volume(&self, volume: f64) -> Result<(), ControlError>;
}

/// Forwards commands onto the bus as `control:*` events
#[derive(Clone)]
pub struct BusControl {
    bus: EventBus,
}

impl BusControl {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl PlaybackControl for BusControl {
    fn play(&self) -> Result<(), ControlError> {
        self.bus.emit(names::CONTROL_PLAY, &EventData::Empty)?;
        Ok(())
    }

    fn pause(&self) -> Result<(), ControlError> {
        self.bus.emit(names::CONTROL_PAUSE, &EventData::Empty)?;
        Ok(())
    }

    fn seek_to(&self, time: f64) -> Result<(), ControlError> {
        if !time.is_finite() || time < 0.0 {
            return Err(ControlError::InvalidSeek(time));
        }
        self.bus.emit(names::CONTROL_SEEK, &EventData::Seek { time })?;
        Ok(())
    }

    fn set_volume(&self, volume: f64) -> Result<(), ControlError> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(ControlError::InvalidVolume(volume));
        }
        self.bus
            .emit(names::CONTROL_VOLUME, &EventData::Volume { volume })?;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    #![cfg_attr(coverage_nightly, coverage(off))]

    use super::{ControlError, PlaybackControl};
    use std::sync::{Arc, Mutex};

    /// Recorded control call
    #[derive(Debug, Clone, PartialEq)]
    pub enum ControlCall {
        Play,
        Pause,
        SeekTo(f64),
        SetVolume(f64),
    }

    /// Fake control for testing; records every call
    #[derive(Clone, Default)]
    pub struct FakeControl {
        calls: Arc<Mutex<Vec<ControlCall>>>,
        rejection: Arc<Mutex<Option<String>>>,
    }

    impl FakeControl {
        pub fn new() -> Self {
            Self::default()
        }

        /// Reject every following call with `reason`; `None` accepts again
        pub fn set_rejection(&self, reason: Option<&str>) {
            *self.rejection.lock().unwrap_or_else(|e| e.into_inner()) =
                reason.map(str::to_string);
        }

        /// Get all recorded calls
        pub fn calls(&self) -> Vec<ControlCall> {
            self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }

        fn record(&self, call: ControlCall) -> Result<(), ControlError> {
            self.calls
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(call);
            match self.rejection.lock().unwrap_or_else(|e| e.into_inner()).clone() {
                Some(reason) => Err(ControlError::Rejected(reason)),
                None => Ok(()),
            }
        }
    }

    impl PlaybackControl for FakeControl {
        fn play(&self) -> Result<(), ControlError> {
            self.record(ControlCall::Play)
        }

        fn pause(&self) -> Result<(), ControlError> {
            self.record(ControlCall::Pause)
        }

        fn seek_to(&self, time: f64) -> Result<(), ControlError> {
            self.record(ControlCall::SeekTo(time))
        }

        fn set_volume(&self, volume: f64) -> Result<(), ControlError> {
            self.record(ControlCall::SetVolume(volume))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ControlCall, FakeControl};

#[cfg(test)]
#[path = "control_tests.rs"]
mod tests;
