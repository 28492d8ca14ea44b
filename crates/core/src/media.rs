// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Media domain types carried in events and playback state

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Where an ad break sits relative to the primary content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdBreakKind {
    PreRoll,
    MidRoll,
    PostRoll,
}

impl fmt::Display for AdBreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdBreakKind::PreRoll => write!(f, "preroll"),
            AdBreakKind::MidRoll => write!(f, "midroll"),
            AdBreakKind::PostRoll => write!(f, "postroll"),
        }
    }
}

/// A scheduled interruption of primary content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdBreak {
    pub id: String,
    pub kind: AdBreakKind,
    /// Offset into the primary content in seconds; absent for pre/post-rolls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub ad_count: u32,
    /// Set once the break has finished playing
    #[serde(default)]
    pub played: bool,
}

impl AdBreak {
    pub fn new(id: impl Into<String>, kind: AdBreakKind) -> Self {
        Self {
            id: id.into(),
            kind,
            start_time: None,
            ad_count: 0,
            played: false,
        }
    }

    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_ad_count(mut self, ad_count: u32) -> Self {
        self.ad_count = ad_count;
        self
    }

    pub fn is_post_roll(&self) -> bool {
        self.kind == AdBreakKind::PostRoll
    }
}

/// A single ad inside an ad break
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Ad {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            duration: None,
        }
    }
}

/// A playback error reported by an engine or extension.
///
/// This is state data, not a propagated fault: it travels through the bus
/// and lands in the snapshot's `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct PlayerError {
    pub code: String,
    pub message: String,
    #[serde(default = "default_fatal")]
    pub fatal: bool,
}

fn default_fatal() -> bool {
    true
}

impl PlayerError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            fatal: true,
        }
    }

    pub fn non_fatal(mut self) -> Self {
        self.fatal = false;
        self
    }
}
