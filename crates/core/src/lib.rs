// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! reel-core: Runtime core for an embeddable media player
//!
//! This crate provides:
//! - A synchronous, name-keyed event bus
//! - A module host owning that bus and a registry of modules
//! - The state aggregator, folding raw player and ad events into immutable
//!   playback snapshots
//! - Seams for playback control and autoplay detection

pub mod autoplay;
pub mod config;
pub mod control;
pub mod events;
pub mod host;
pub mod media;
pub mod module;
pub mod names;
pub mod state;

// Re-exports
pub use autoplay::{AutoplayProbe, FixedAutoplay};
pub use config::{ConfigError, PlayerConfig};
pub use control::{BusControl, ControlError, PlaybackControl};
pub use events::{BusError, EventBus, EventData, Listener, ListenerError, StateChange};
pub use host::{Host, HostDeps, HostError, Stats};
pub use media::{Ad, AdBreak, AdBreakKind, PlayerError};
pub use module::{Module, ModuleContext};
pub use state::{ActiveAdBreak, FieldChange, PlaybackState, StateExtension};

#[cfg(any(test, feature = "test-support"))]
pub use autoplay::FakeAutoplay;
#[cfg(any(test, feature = "test-support"))]
pub use control::{ControlCall, FakeControl};
