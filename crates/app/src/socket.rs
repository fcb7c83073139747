// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Realtime socket connection state shared with the views that need it.
//!
//! Only the connection status lives here; the transport is out of scope.

use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SocketState {
    #[default]
    Disconnected,
    Connected {
        id: String,
    },
}

/// Connection status. Clones observe the same state.
#[derive(Clone, Debug)]
pub struct SocketContext {
    tx: Arc<watch::Sender<SocketState>>,
}

impl SocketContext {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SocketState::Disconnected);
        Self { tx: Arc::new(tx) }
    }

    pub fn state(&self) -> SocketState {
        self.tx.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        matches!(*self.tx.borrow(), SocketState::Connected { .. })
    }

    pub fn socket_id(&self) -> Option<String> {
        match &*self.tx.borrow() {
            SocketState::Connected { id } => Some(id.clone()),
            SocketState::Disconnected => None,
        }
    }

    /// Record a successful connection.
    pub fn connected(&self, id: impl Into<String>) {
        let id = id.into();
        tracing::info!(socket_id = %id, "socket connected");
        self.tx.send_replace(SocketState::Connected { id });
    }

    /// Record a disconnect. No-op if already disconnected.
    pub fn disconnected(&self) {
        let changed = self.tx.send_if_modified(|state| {
            if *state == SocketState::Disconnected {
                return false;
            }
            *state = SocketState::Disconnected;
            true
        });
        if changed {
            tracing::info!("socket disconnected");
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SocketState> {
        self.tx.subscribe()
    }
}

impl Default for SocketContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "socket_tests.rs"]
mod tests;
