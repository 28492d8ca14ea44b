// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playback state snapshot
//!
//! A snapshot is never mutated once published. Transitions clone it into a
//! draft, patch the draft, and publish the draft as a new snapshot.

use crate::media::{Ad, AdBreak, PlayerError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The ad break currently playing and the position inside it.
///
/// Kept as one value so a break and its position are always present or
/// absent together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveAdBreak {
    pub ad_break: AdBreak,
    pub current_time: f64,
}

/// Everything known about playback at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub ready: bool,
    pub video_session_started: bool,
    pub waiting_for_user: bool,

    pub play_requested: bool,
    pub playing: bool,
    pub paused: bool,
    pub buffering: bool,
    pub ended: bool,

    pub current_time: Option<f64>,
    pub duration: Option<f64>,

    pub ad_breaks: Vec<AdBreak>,
    pub active_ad_break: Option<ActiveAdBreak>,
    pub ad: Option<Ad>,

    pub error: Option<PlayerError>,

    pub buffered_percentage: f64,
    pub volume: f64,

    pub fullscreen_supported: bool,
    pub fullscreen: bool,
    pub pip: bool,

    pub started: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            ready: false,
            video_session_started: false,
            waiting_for_user: false,
            play_requested: false,
            playing: false,
            paused: false,
            buffering: false,
            ended: false,
            current_time: None,
            duration: None,
            ad_breaks: Vec::new(),
            active_ad_break: None,
            ad: None,
            error: None,
            buffered_percentage: 0.0,
            volume: 1.0,
            fullscreen_supported: false,
            fullscreen: false,
            pip: false,
            started: false,
        }
    }
}

impl PlaybackState {
    /// The ad break currently playing, if any
    pub fn ad_break(&self) -> Option<&AdBreak> {
        self.active_ad_break.as_ref().map(|active| &active.ad_break)
    }

    /// Position inside the active ad break
    pub fn ad_break_current_time(&self) -> Option<f64> {
        self.active_ad_break.as_ref().map(|active| active.current_time)
    }

    pub fn ad_break_active(&self) -> bool {
        self.active_ad_break.is_some()
    }

    /// A post-roll is scheduled and has not played yet, so primary content
    /// reaching its end does not end the session yet
    pub fn post_roll_pending(&self) -> bool {
        self.ad_breaks
            .iter()
            .any(|ad_break| ad_break.is_post_roll() && !ad_break.played)
    }

    /// Fields whose value differs from `prev`, in field-name order
    pub fn diff(&self, prev: &PlaybackState) -> Vec<FieldChange> {
        let (Ok(Value::Object(next)), Ok(Value::Object(prev))) =
            (serde_json::to_value(self), serde_json::to_value(prev))
        else {
            return Vec::new();
        };

        next.into_iter()
            .filter_map(|(field, to)| {
                let from = prev.get(&field).cloned().unwrap_or(Value::Null);
                (from != to).then_some(FieldChange { field, from, to })
            })
            .collect()
    }
}

/// One changed field between two snapshots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
    pub field: String,
    pub from: Value,
    pub to: Value,
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.field, self.from, self.to)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
