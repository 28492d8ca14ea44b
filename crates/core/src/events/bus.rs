// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing events to listeners by name

use super::data::EventData;
use super::listener::{Listener, ListenerError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("listener for '{event}' failed: {source}")]
    Listener {
        event: String,
        #[source]
        source: ListenerError,
    },
}

impl From<BusError> for ListenerError {
    fn from(err: BusError) -> Self {
        ListenerError::with_source("nested emit failed", err)
    }
}

#[derive(Clone)]
struct Entry {
    listener: Listener,
    /// Set for one-shot listeners; flips to `true` when the listener is claimed
    claimed: Option<Arc<AtomicBool>>,
}

impl Entry {
    /// Claim a one-shot entry for invocation. Persistent entries always pass.
    fn claim(&self) -> bool {
        match &self.claimed {
            Some(flag) => !flag.swap(true, Ordering::SeqCst),
            None => true,
        }
    }
}

/// The event bus delivers each emission synchronously to the listeners
/// registered under that exact name, in registration order.
///
/// The listener list for an emission is captured when the emission starts:
/// listeners added while it runs wait for the next emission, and nested
/// emissions from inside a listener finish before the outer one continues.
pub struct EventBus {
    listeners: Arc<RwLock<HashMap<String, Vec<Entry>>>>,
    emitted: Arc<AtomicU64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(HashMap::new())),
            emitted: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a persistent listener. Registering the same listener twice
    /// under one name is a no-op.
    pub fn on(&self, name: &str, listener: Listener) {
        self.add(name, listener, false);
    }

    /// Register a listener that is detached after its first invocation
    pub fn once(&self, name: &str, listener: Listener) {
        self.add(name, listener, true);
    }

    fn add(&self, name: &str, listener: Listener, once: bool) {
        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        let entries = map.entry(name.to_string()).or_default();

        if entries.iter().any(|e| e.listener.same_as(&listener)) {
            tracing::trace!(event = name, "listener already registered");
            return;
        }

        let claimed = once.then(|| Arc::new(AtomicBool::new(false)));
        entries.push(Entry { listener, claimed });
        tracing::debug!(event = name, once, count = entries.len(), "listener added");
    }

    /// Remove a listener; unknown listeners are ignored
    pub fn remove_listener(&self, name: &str, listener: &Listener) {
        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        let Some(entries) = map.get_mut(name) else {
            return;
        };

        let before = entries.len();
        entries.retain(|e| !e.listener.same_as(listener));
        let removed = before != entries.len();
        if entries.is_empty() {
            map.remove(name);
        }

        if removed {
            tracing::debug!(event = name, "listener removed");
        }
    }

    /// Deliver `data` to every listener registered for `name`.
    ///
    /// Stops at the first listener fault and returns it.
    pub fn emit(&self, name: &str, data: &EventData) -> Result<(), BusError> {
        self.emitted.fetch_add(1, Ordering::Relaxed);

        let pass: Vec<Entry> = {
            let map = self.listeners.read().unwrap_or_else(|e| e.into_inner());
            match map.get(name) {
                Some(entries) => entries.clone(),
                None => {
                    tracing::trace!(event = name, "emit without listeners");
                    return Ok(());
                }
            }
        };

        tracing::trace!(event = name, listeners = pass.len(), "emit");

        for entry in &pass {
            // A one-shot listener may already have fired in a nested emission
            if !entry.claim() {
                continue;
            }
            if let Some(flag) = &entry.claimed {
                self.detach(name, flag);
            }

            entry.listener.call(data).map_err(|source| {
                tracing::warn!(event = name, error = %source, "listener failed");
                BusError::Listener {
                    event: name.to_string(),
                    source,
                }
            })?;
        }

        Ok(())
    }

    fn detach(&self, name: &str, flag: &Arc<AtomicBool>) {
        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        let Some(entries) = map.get_mut(name) else {
            return;
        };
        entries.retain(|e| !e.claimed.as_ref().is_some_and(|f| Arc::ptr_eq(f, flag)));
        if entries.is_empty() {
            map.remove(name);
        }
    }

    /// Drop every listener
    pub fn clear(&self) {
        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        let count: usize = map.values().map(Vec::len).sum();
        map.clear();
        tracing::debug!(count, "bus cleared");
    }

    /// Number of listeners registered for `name`
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .map_or(0, Vec::len)
    }

    /// Number of listeners across all names
    pub fn total_listeners(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .map(Vec::len)
            .sum()
    }

    /// Number of `emit` calls since the bus was created
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
            emitted: Arc::clone(&self.emitted),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
