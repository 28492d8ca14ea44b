// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host instance: one bus, one module registry, one playback session
//!
//! The host holds no playback logic. Lifecycle calls forward to the
//! `PlaybackControl` seam, state lives in the state aggregator module, and
//! everything else is wiring.

use crate::autoplay::{AutoplayProbe, FixedAutoplay};
use crate::config::PlayerConfig;
use crate::control::{BusControl, ControlError, PlaybackControl};
use crate::events::{BusError, EventBus, EventData, Listener};
use crate::media::PlayerError;
use crate::module::{Module, ModuleContext};
use crate::names;
use crate::state::{self, StateExtension};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("host destroyed")]
    Destroyed,
    #[error("module already registered: {0}")]
    DuplicateModule(String),
    #[error("bus error: {0}")]
    Bus(#[from] BusError),
    #[error("control error: {0}")]
    Control(#[from] ControlError),
}

/// Collaborators injected into a host
pub struct HostDeps {
    /// Receives lifecycle commands; `BusControl` over the host bus when `None`
    pub control: Option<Arc<dyn PlaybackControl>>,
    pub autoplay: Arc<dyn AutoplayProbe>,
}

impl Default for HostDeps {
    fn default() -> Self {
        Self {
            control: None,
            autoplay: Arc::new(FixedAutoplay(true)),
        }
    }
}

/// Point-in-time host statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Registered module names, sorted
    pub modules: Vec<String>,
    pub listeners: usize,
    pub events_emitted: u64,
    pub destroyed: bool,
}

/// Autoplay probe that honors `PlayerConfig::autoplay` before asking
struct ConfiguredAutoplay {
    enabled: bool,
    probe: Arc<dyn AutoplayProbe>,
}

impl AutoplayProbe for ConfiguredAutoplay {
    fn can_autoplay(&self) -> bool {
        self.enabled && self.probe.can_autoplay()
    }
}

pub struct Host {
    config: PlayerConfig,
    bus: EventBus,
    modules: Mutex<HashMap<String, Arc<dyn Module>>>,
    control: Arc<dyn PlaybackControl>,
    autoplay: Arc<dyn AutoplayProbe>,
    destroyed: AtomicBool,
}

impl Host {
    pub fn new(config: PlayerConfig, deps: HostDeps) -> Self {
        let bus = EventBus::new();
        let control = deps
            .control
            .unwrap_or_else(|| Arc::new(BusControl::new(bus.clone())));
        let autoplay = Arc::new(ConfiguredAutoplay {
            enabled: config.autoplay,
            probe: deps.autoplay,
        });

        Self {
            config,
            bus,
            modules: Mutex::new(HashMap::new()),
            control,
            autoplay,
            destroyed: AtomicBool::new(false),
        }
    }

    /// Host with default collaborators and the state aggregator registered
    pub fn with_state(config: PlayerConfig, deps: HostDeps) -> Result<Self, HostError> {
        let host = Self::new(config, deps);
        host.register_state()?;
        Ok(host)
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    fn ensure_live(&self) -> Result<(), HostError> {
        if self.is_destroyed() {
            return Err(HostError::Destroyed);
        }
        Ok(())
    }

    // Bus forwarding

    pub fn on(&self, event: &str, listener: Listener) {
        self.bus.on(event, listener);
    }

    pub fn once(&self, event: &str, listener: Listener) {
        self.bus.once(event, listener);
    }

    pub fn remove_listener(&self, event: &str, listener: &Listener) {
        self.bus.remove_listener(event, listener);
    }

    pub fn emit(&self, event: &str, data: &EventData) -> Result<(), HostError> {
        self.bus.emit(event, data)?;
        Ok(())
    }

    // Playback control

    pub fn play(&self) -> Result<(), HostError> {
        self.ensure_live()?;
        tracing::debug!("play");
        self.control.play()?;
        Ok(())
    }

    pub fn pause(&self) -> Result<(), HostError> {
        self.ensure_live()?;
        tracing::debug!("pause");
        self.control.pause()?;
        Ok(())
    }

    pub fn seek_to(&self, time: f64) -> Result<(), HostError> {
        self.ensure_live()?;
        tracing::debug!(time, "seek");
        self.control.seek_to(time)?;
        Ok(())
    }

    pub fn set_volume(&self, volume: f64) -> Result<(), HostError> {
        self.ensure_live()?;
        tracing::debug!(volume, "set volume");
        self.control.set_volume(volume)?;
        Ok(())
    }

    /// Report a playback error; it becomes state, not a failure
    pub fn set_error(&self, error: PlayerError) -> Result<(), HostError> {
        self.ensure_live()?;
        tracing::debug!(code = %error.code, fatal = error.fatal, "set error");
        self.bus.emit(names::ERROR, &EventData::Error { error })?;
        Ok(())
    }

    /// Whether playback may start without a user gesture, asked fresh
    pub fn can_autoplay(&self) -> bool {
        self.autoplay.can_autoplay()
    }

    // Module registry

    /// Build a module from its context and register it under `name`.
    ///
    /// The factory runs without the registry locked, so it may emit.
    pub fn register<M, F>(&self, name: &str, factory: F) -> Result<Arc<M>, HostError>
    where
        M: Module,
        F: FnOnce(ModuleContext) -> Result<M, HostError>,
    {
        self.ensure_live()?;
        if self.lock_modules().contains_key(name) {
            return Err(HostError::DuplicateModule(name.to_string()));
        }

        let module = Arc::new(factory(ModuleContext::new(name, self.bus.clone()))?);

        let mut modules = self.lock_modules();
        if modules.contains_key(name) {
            return Err(HostError::DuplicateModule(name.to_string()));
        }
        modules.insert(name.to_string(), Arc::clone(&module) as Arc<dyn Module>);
        tracing::info!(module = name, "module registered");
        Ok(module)
    }

    /// Register the state aggregator under its standard name
    pub fn register_state(&self) -> Result<Arc<StateExtension>, HostError> {
        let autoplay = Arc::clone(&self.autoplay);
        let config = self.config.clone();
        self.register(state::MODULE_NAME, move |ctx| {
            Ok(StateExtension::new(ctx, autoplay, &config)?)
        })
    }

    pub fn get_module(&self, name: &str) -> Option<Arc<dyn Module>> {
        self.lock_modules().get(name).cloned()
    }

    /// Typed lookup; `None` when absent or of another type
    pub fn get_module_as<T: Module>(&self, name: &str) -> Option<Arc<T>> {
        self.get_module(name)?.into_any().downcast::<T>().ok()
    }

    pub fn get_stats(&self) -> Stats {
        let mut modules: Vec<String> = self.lock_modules().keys().cloned().collect();
        modules.sort();

        Stats {
            modules,
            listeners: self.bus.total_listeners(),
            events_emitted: self.bus.emitted(),
            destroyed: self.is_destroyed(),
        }
    }

    /// Tear down: announce, run module hooks, release modules, clear the bus.
    ///
    /// Only the first call does anything. A failing `destroy` listener is
    /// reported after teardown has completed.
    pub fn destroy(&self) -> Result<(), HostError> {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let announced = self.bus.emit(names::DESTROY, &EventData::Empty);

        let modules: Vec<Arc<dyn Module>> = self
            .lock_modules()
            .drain()
            .map(|(_, module)| module)
            .collect();
        for module in &modules {
            module.destroy();
        }

        self.bus.clear();
        tracing::info!(modules = modules.len(), "host destroyed");

        announced?;
        Ok(())
    }

    fn lock_modules(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<dyn Module>>> {
        self.modules.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        if let Err(e) = self.destroy() {
            tracing::warn!(error = %e, "destroy listener failed during drop");
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
