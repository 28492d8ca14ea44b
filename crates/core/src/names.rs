// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event name catalogue
//!
//! Names follow the "category:action" shape. Raw signals come from engines
//! and ad frameworks; `state:*` names are produced by the state aggregator.

// Raw signals
pub const READY: &str = "ready";
pub const PLAYER_PLAY: &str = "player:play";
pub const PLAYER_PLAYING: &str = "player:playing";
pub const PLAYER_PAUSE: &str = "player:pause";
pub const PLAYER_TIMEUPDATE: &str = "player:timeupdate";
pub const PLAYER_DURATIONCHANGE: &str = "player:durationchange";
pub const PLAYER_WAITING: &str = "player:waiting";
pub const PLAYER_ENDED: &str = "player:ended";
pub const PLAYER_BUFFEREDCHANGE: &str = "player:bufferedchange";
pub const PLAYER_VOLUMECHANGE: &str = "player:volumechange";
pub const ADBREAK_PLAY: &str = "adbreak:play";
pub const ADBREAK_PLAYING: &str = "adbreak:playing";
pub const ADBREAK_PAUSE: &str = "adbreak:pause";
pub const ADBREAK_TIMEUPDATE: &str = "adbreak:timeupdate";
pub const ADBREAKS: &str = "adbreaks";
pub const ADBREAK_STARTED: &str = "adbreak:started";
pub const ADBREAK_ENDED: &str = "adbreak:ended";
pub const AD_STARTED: &str = "ad:started";
pub const AD_ENDED: &str = "ad:ended";
pub const ERROR: &str = "error";
pub const FULLSCREEN_SUPPORTED: &str = "fullscreen:supported";
pub const FULLSCREEN_CHANGE: &str = "fullscreen:change";
pub const PIP_CHANGE: &str = "pip:change";

// Host lifecycle
pub const DESTROY: &str = "destroy";

// Playback control commands
pub const CONTROL_PLAY: &str = "control:play";
pub const CONTROL_PAUSE: &str = "control:pause";
pub const CONTROL_SEEK: &str = "control:seek";
pub const CONTROL_VOLUME: &str = "control:volume";

// State aggregator output
pub const STATE_CHANGE: &str = "state:change";
pub const STATE_READY: &str = "state:ready";
pub const STATE_PLAY_REQUESTED: &str = "state:play-requested";
pub const STATE_PLAYING: &str = "state:playing";
pub const STATE_PAUSED: &str = "state:paused";
pub const STATE_CURRENTTIME_CHANGE: &str = "state:currenttime-change";
pub const STATE_DURATION_CHANGE: &str = "state:duration-change";
pub const STATE_BUFFERING: &str = "state:buffering";
pub const STATE_ADBREAKS: &str = "state:adbreaks";
pub const STATE_ADBREAK_STARTED: &str = "state:adbreak-started";
pub const STATE_ADBREAK_ENDED: &str = "state:adbreak-ended";
pub const STATE_AD_STARTED: &str = "state:ad-started";
pub const STATE_AD_ENDED: &str = "state:ad-ended";
pub const STATE_ENDED: &str = "state:ended";
pub const STATE_BUFFERED_CHANGE: &str = "state:buffered-change";
pub const STATE_ERROR: &str = "state:error";
pub const STATE_VOLUME_CHANGE: &str = "state:volume-change";
pub const STATE_FULLSCREEN_SUPPORTED: &str = "state:fullscreen-supported";
pub const STATE_FULLSCREEN_CHANGE: &str = "state:fullscreen-change";
pub const STATE_PIP_CHANGE: &str = "state:pip-change";

/// Every raw signal the state aggregator consumes
pub const INBOUND: &[&str] = &[
    READY,
    PLAYER_PLAY,
    ADBREAK_PLAY,
    PLAYER_PLAYING,
    ADBREAK_PLAYING,
    PLAYER_PAUSE,
    ADBREAK_PAUSE,
    PLAYER_TIMEUPDATE,
    ADBREAK_TIMEUPDATE,
    PLAYER_DURATIONCHANGE,
    PLAYER_WAITING,
    ADBREAKS,
    ADBREAK_STARTED,
    ADBREAK_ENDED,
    AD_STARTED,
    AD_ENDED,
    PLAYER_ENDED,
    PLAYER_BUFFEREDCHANGE,
    ERROR,
    PLAYER_VOLUMECHANGE,
    FULLSCREEN_SUPPORTED,
    FULLSCREEN_CHANGE,
    PIP_CHANGE,
];

/// Every specific `state:*` event, excluding the generic `state:change`
pub const OUTBOUND: &[&str] = &[
    STATE_READY,
    STATE_PLAY_REQUESTED,
    STATE_PLAYING,
    STATE_PAUSED,
    STATE_CURRENTTIME_CHANGE,
    STATE_DURATION_CHANGE,
    STATE_BUFFERING,
    STATE_ADBREAKS,
    STATE_ADBREAK_STARTED,
    STATE_ADBREAK_ENDED,
    STATE_AD_STARTED,
    STATE_AD_ENDED,
    STATE_ENDED,
    STATE_BUFFERED_CHANGE,
    STATE_ERROR,
    STATE_VOLUME_CHANGE,
    STATE_FULLSCREEN_SUPPORTED,
    STATE_FULLSCREEN_CHANGE,
    STATE_PIP_CHANGE,
];
