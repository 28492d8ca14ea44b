// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event payloads

use crate::media::{Ad, AdBreak, PlayerError};
use crate::state::PlaybackState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Payload carried by a bus emission.
///
/// One variant per payload shape. Consumers match the shape they expect and
/// ignore anything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventData {
    #[default]
    Empty,
    CurrentTime {
        current_time: f64,
    },
    Duration {
        duration: f64,
    },
    AdBreaks {
        ad_breaks: Vec<AdBreak>,
    },
    AdBreak {
        ad_break: AdBreak,
    },
    Ad {
        ad: Ad,
    },
    Buffered {
        percentage: f64,
    },
    Error {
        error: PlayerError,
    },
    Volume {
        volume: f64,
    },
    Fullscreen {
        fullscreen: bool,
    },
    Pip {
        pip: bool,
    },
    Seek {
        time: f64,
    },
    StateChange(StateChange),
    /// Free-form payload for extensions outside this crate
    Custom {
        value: serde_json::Value,
    },
}

impl EventData {
    pub fn ad_break(&self) -> Option<&AdBreak> {
        match self {
            EventData::AdBreak { ad_break } => Some(ad_break),
            _ => None,
        }
    }

    pub fn state_change(&self) -> Option<&StateChange> {
        match self {
            EventData::StateChange(change) => Some(change),
            _ => None,
        }
    }
}

/// Payload of every `state:*` event: the full new snapshot and the one it
/// replaced (absent only for the initial announcement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    pub state: Arc<PlaybackState>,
    pub prev_state: Option<Arc<PlaybackState>>,
}
