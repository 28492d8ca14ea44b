// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Autoplay capability probe

/// Answers whether playback may start without a user gesture.
///
/// Asked at the moment the engine becomes ready, never cached.
pub trait AutoplayProbe: Send + Sync {
    fn can_autoplay(&self) -> bool;
}

/// Probe with a fixed answer, for environments that know up front
#[derive(Debug, Clone, Copy)]
pub struct FixedAutoplay(pub bool);

impl AutoplayProbe for FixedAutoplay {
    fn can_autoplay(&self) -> bool {
        self.0
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    #![cfg_attr(coverage_nightly, coverage(off))]

    use super::AutoplayProbe;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Fake probe whose answer can change between calls; counts calls
    #[derive(Clone)]
    pub struct FakeAutoplay {
        allowed: Arc<AtomicBool>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeAutoplay {
        pub fn new(allowed: bool) -> Self {
            Self {
                allowed: Arc::new(AtomicBool::new(allowed)),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn set_allowed(&self, allowed: bool) {
            self.allowed.store(allowed, Ordering::SeqCst);
        }

        /// Number of times the probe was asked
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AutoplayProbe for FakeAutoplay {
        fn can_autoplay(&self) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.allowed.load(Ordering::SeqCst)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAutoplay;
