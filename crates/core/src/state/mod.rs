// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playback state aggregation
//!
//! - `PlaybackState` - Immutable snapshot of everything the player knows
//! - `transitions` - Pure patch functions and guards, one per raw event
//! - `StateExtension` - Module folding raw events into published snapshots

mod extension;
mod snapshot;
pub mod transitions;

pub use extension::{Dispatch, Guard, StateExtension, MODULE_NAME};
pub use snapshot::{ActiveAdBreak, FieldChange, PlaybackState};
