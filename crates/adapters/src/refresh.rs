// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signals to the hosting view that server data changed and should be
//! re-fetched.

use std::sync::Arc;
use tokio::sync::watch;

/// Fire-and-forget trigger asking the current view to reload its data
pub trait RefreshTrigger: Clone + Send + Sync + 'static {
    fn refresh(&self);
}

/// Refresh trigger backed by a `watch` channel carrying a generation counter.
///
/// Views call [`ChannelRefresh::subscribe`] and reload whenever the
/// generation changes. Sending never fails, even with no subscribers.
#[derive(Clone)]
pub struct ChannelRefresh {
    tx: Arc<watch::Sender<u64>>,
}

impl ChannelRefresh {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }

    /// Number of refreshes triggered so far
    pub fn generation(&self) -> u64 {
        *self.tx.borrow()
    }
}

impl Default for ChannelRefresh {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshTrigger for ChannelRefresh {
    fn refresh(&self) {
        self.tx.send_modify(|generation| *generation += 1);
        tracing::debug!(generation = self.generation(), "refresh triggered");
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::RefreshTrigger;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts refresh requests
    #[derive(Clone, Default)]
    pub struct FakeRefresh {
        count: Arc<AtomicUsize>,
    }

    impl FakeRefresh {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }

    impl RefreshTrigger for FakeRefresh {
        fn refresh(&self) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRefresh;

#[cfg(test)]
#[path = "refresh_tests.rs"]
mod tests;
