// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener handles and listener faults

use super::data::EventData;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

type Callback = dyn Fn(&EventData) -> Result<(), ListenerError> + Send + Sync;

/// A fault raised by a listener while handling an event.
///
/// The bus never swallows these: the first fault aborts the emission and is
/// returned to whoever called `emit`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ListenerError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error, keeping it reachable through `source()`
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Shared handle to an event callback.
///
/// Two handles are the same listener when they point at the same closure, so
/// keep a clone of the handle you registered if you want to remove it later.
#[derive(Clone)]
pub struct Listener(Arc<Callback>);

impl Listener {
    /// Wrap a fallible callback
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&EventData) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Wrap a callback that cannot fail
    pub fn infallible<F>(f: F) -> Self
    where
        F: Fn(&EventData) + Send + Sync + 'static,
    {
        Self::new(move |data| {
            f(data);
            Ok(())
        })
    }

    pub fn call(&self, data: &EventData) -> Result<(), ListenerError> {
        (self.0)(data)
    }

    pub fn same_as(&self, other: &Listener) -> bool {
        // Compare data pointers only; vtable pointers are not stable across codegen units
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const (),
            Arc::as_ptr(&other.0) as *const (),
        )
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}
