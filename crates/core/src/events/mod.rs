// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for loose coupling between modules
//!
//! This module provides:
//! - `EventBus` - Deliver named events to listeners, synchronously and in order
//! - `Listener` - Shared callback handle with identity for removal
//! - `EventData` - Typed payloads carried by emissions

mod bus;
mod data;
mod listener;

pub use bus::{BusError, EventBus};
pub use data::{EventData, StateChange};
pub use listener::{Listener, ListenerError};
