// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Modules: units of behavior attached to one host
//!
//! A module only ever talks to the rest of the system through its
//! `ModuleContext`, which forwards to the host's bus. Modules never hold a
//! handle to a sibling module; all coupling is by event name.

use crate::events::{BusError, EventBus, EventData, Listener};
use std::any::Any;
use std::sync::Arc;

/// Behavior registered on a host under a unique name
pub trait Module: Any + Send + Sync {
    fn name(&self) -> &str;

    /// Called once when the host is destroyed, before the bus is cleared
    fn destroy(&self) {}

    /// Upcast used by typed module lookup
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// A module's capability handle onto the host bus
#[derive(Clone)]
pub struct ModuleContext {
    name: String,
    bus: EventBus,
}

impl ModuleContext {
    pub(crate) fn new(name: impl Into<String>, bus: EventBus) -> Self {
        Self {
            name: name.into(),
            bus,
        }
    }

    /// Name the module is registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn on(&self, event: &str, listener: Listener) {
        self.bus.on(event, listener);
    }

    pub fn once(&self, event: &str, listener: Listener) {
        self.bus.once(event, listener);
    }

    pub fn remove_listener(&self, event: &str, listener: &Listener) {
        self.bus.remove_listener(event, listener);
    }

    pub fn emit(&self, event: &str, data: &EventData) -> Result<(), BusError> {
        self.bus.emit(event, data)
    }
}

#[cfg(test)]
#[path = "module_tests.rs"]
mod tests;
