// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure transition functions and guard predicates
//!
//! Each transition patches a draft snapshot from one raw event. A payload of
//! the wrong shape leaves the draft untouched, which the dispatcher treats as
//! "nothing changed".

use super::snapshot::{ActiveAdBreak, PlaybackState};
use crate::events::EventData;

pub fn ready(draft: &mut PlaybackState, can_autoplay: bool) {
    draft.ready = true;
    draft.waiting_for_user = !can_autoplay;
}

/// A play intent, from the media engine or an ad break. Also opens a new
/// session after the previous one ended.
pub fn play_requested(draft: &mut PlaybackState, _data: &EventData) {
    draft.waiting_for_user = false;
    draft.play_requested = true;
    draft.paused = false;
    draft.video_session_started = true;
    draft.ended = false;
}

pub fn playing(draft: &mut PlaybackState, _data: &EventData) {
    draft.started = true;
    draft.playing = true;
    draft.play_requested = true;
    draft.buffering = false;
    draft.paused = false;
}

pub fn paused(draft: &mut PlaybackState, _data: &EventData) {
    draft.play_requested = false;
    draft.playing = false;
    draft.paused = true;
}

pub fn current_time(draft: &mut PlaybackState, data: &EventData) {
    if let EventData::CurrentTime { current_time } = data {
        if current_time.is_finite() {
            draft.current_time = Some(*current_time);
        }
    }
}

/// Position inside the active ad break; ignored when no break is active
pub fn ad_break_current_time(draft: &mut PlaybackState, data: &EventData) {
    if let (EventData::CurrentTime { current_time }, Some(active)) =
        (data, draft.active_ad_break.as_mut())
    {
        if current_time.is_finite() {
            active.current_time = *current_time;
        }
    }
}

pub fn duration(draft: &mut PlaybackState, data: &EventData) {
    if let EventData::Duration { duration } = data {
        if duration.is_finite() {
            draft.duration = Some(*duration);
        }
    }
}

pub fn buffering(draft: &mut PlaybackState, _data: &EventData) {
    draft.playing = false;
    draft.buffering = true;
}

pub fn ad_breaks(draft: &mut PlaybackState, data: &EventData) {
    if let EventData::AdBreaks { ad_breaks } = data {
        draft.ad_breaks = ad_breaks.clone();
    }
}

pub fn ad_break_started(draft: &mut PlaybackState, data: &EventData) {
    if let Some(ad_break) = data.ad_break() {
        draft.active_ad_break = Some(ActiveAdBreak {
            ad_break: ad_break.clone(),
            current_time: 0.0,
        });
    }
}

/// Clears the active break and marks the finished one as played in the
/// schedule, so a played post-roll no longer holds back the end of content
pub fn ad_break_ended(draft: &mut PlaybackState, data: &EventData) {
    let finished = data
        .ad_break()
        .or(draft.ad_break())
        .map(|ad_break| ad_break.id.clone());
    if let Some(id) = finished {
        for scheduled in draft.ad_breaks.iter_mut().filter(|b| b.id == id) {
            scheduled.played = true;
        }
    }
    draft.active_ad_break = None;
}

pub fn ad_started(draft: &mut PlaybackState, data: &EventData) {
    if let EventData::Ad { ad } = data {
        draft.ad = Some(ad.clone());
    }
}

pub fn ad_ended(draft: &mut PlaybackState, _data: &EventData) {
    draft.ad = None;
}

pub fn ended(draft: &mut PlaybackState, _data: &EventData) {
    draft.started = false;
    draft.play_requested = false;
    draft.playing = false;
    draft.ended = true;
}

pub fn buffered(draft: &mut PlaybackState, data: &EventData) {
    if let EventData::Buffered { percentage } = data {
        if percentage.is_finite() {
            draft.buffered_percentage = percentage.clamp(0.0, 1.0);
        }
    }
}

pub fn error(draft: &mut PlaybackState, data: &EventData) {
    if let EventData::Error { error } = data {
        draft.error = Some(error.clone());
    }
}

pub fn volume(draft: &mut PlaybackState, data: &EventData) {
    if let EventData::Volume { volume } = data {
        if volume.is_finite() {
            draft.volume = volume.clamp(0.0, 1.0);
        }
    }
}

pub fn fullscreen_supported(draft: &mut PlaybackState, _data: &EventData) {
    draft.fullscreen_supported = true;
}

pub fn fullscreen(draft: &mut PlaybackState, data: &EventData) {
    if let EventData::Fullscreen { fullscreen } = data {
        draft.fullscreen = *fullscreen;
    }
}

pub fn pip(draft: &mut PlaybackState, data: &EventData) {
    if let EventData::Pip { pip } = data {
        draft.pip = *pip;
    }
}

// Guards: evaluated against the current snapshot before a transition runs.
// `true` lets the transition through.

/// Media pause is not authoritative while an ad break plays
pub fn media_pause_allowed(state: &PlaybackState, _data: &EventData) -> bool {
    !state.ad_break_active()
}

/// Media end waits for any scheduled post-roll
pub fn media_end_allowed(state: &PlaybackState, _data: &EventData) -> bool {
    !state.post_roll_pending()
}

/// An ad break ending only ends the session when it is the post-roll
pub fn post_roll_finished(_state: &PlaybackState, data: &EventData) -> bool {
    data.ad_break().is_some_and(|ad_break| ad_break.is_post_roll())
}

#[cfg(test)]
#[path = "transitions_tests.rs"]
mod tests;
