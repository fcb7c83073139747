// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application lifecycle: boot, wiring, shutdown.
//!
//! Cross-cutting contexts (socket state, subscription modal, billing) are
//! created here once and handed to the components that need them.

use std::time::{Duration, Instant};

use tandem_adapters::{
    ChannelRefresh, MemoryDirectory, MemoryWorkspaceStore, NotifyRouter, StaticSession,
};
use tandem_core::{Product, SystemClock, UuidIdGen};
use tandem_engine::{CreatorDeps, WorkspaceCreator};
use thiserror::Error;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::billing::BillingClient;
use crate::config::{Config, ConfigError};
use crate::socket::SocketContext;
use crate::subscription::SubscriptionModal;

/// Creation flow with concrete adapter types
pub type AppCreator = WorkspaceCreator<
    MemoryWorkspaceStore,
    NotifyRouter,
    ChannelRefresh,
    StaticSession,
    UuidIdGen,
    SystemClock,
>;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything created at boot and shared for the life of the app
pub struct AppContext {
    pub config: Config,
    pub socket: SocketContext,
    pub subscription: SubscriptionModal,
    pub billing: BillingClient,
    pub session: StaticSession,
    pub store: MemoryWorkspaceStore,
    pub directory: MemoryDirectory,
    pub refresh: ChannelRefresh,
    pub notifier: NotifyRouter,
    start_time: Instant,
    running: bool,
}

impl AppContext {
    /// Build all contexts from configuration.
    pub fn boot(config: Config, products: Vec<Product>) -> Self {
        let billing = BillingClient::new(config.billing_secret_key.clone());
        if !billing.is_configured() {
            warn!("billing secret key not set; subscriptions disabled");
        }
        let notifier = NotifyRouter::new(config.desktop_notifications);

        info!(
            products = products.len(),
            billing = billing.is_configured(),
            desktop_notifications = notifier.is_desktop(),
            "app booted"
        );

        Self {
            socket: SocketContext::new(),
            subscription: SubscriptionModal::new(products),
            billing,
            session: StaticSession::signed_out(),
            store: MemoryWorkspaceStore::new(),
            directory: MemoryDirectory::default(),
            refresh: ChannelRefresh::new(),
            notifier,
            config,
            start_time: Instant::now(),
            running: true,
        }
    }

    /// A fresh creation form wired to this app's services.
    pub fn workspace_creator(&self) -> AppCreator {
        WorkspaceCreator::new(
            CreatorDeps {
                store: self.store.clone(),
                notifier: self.notifier,
                refresh: self.refresh.clone(),
                session: self.session.clone(),
            },
            UuidIdGen,
            SystemClock,
        )
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Tear down contexts. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        info!("Shutting down...");
        self.socket.disconnected();
        self.subscription.close();
        self.session.sign_out();
        self.running = false;
        info!(uptime_ms = self.uptime().as_millis() as u64, "shutdown complete");
    }
}

/// Load config, install logging, and boot.
///
/// Hold on to the guard until exit so buffered log lines are flushed.
pub fn start(products: Vec<Product>) -> Result<(AppContext, WorkerGuard), LifecycleError> {
    let config = Config::load()?;
    let guard = crate::logging::init(&config)?;
    Ok((AppContext::boot(config, products), guard))
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
