// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tandem-app: Configuration, logging and application contexts

pub mod billing;
pub mod config;
pub mod env;
pub mod lifecycle;
pub mod logging;
pub mod socket;
pub mod subscription;

pub use billing::{AppInfo, BillingClient, APP_INFO};
pub use config::{Config, ConfigError};
pub use lifecycle::{start, AppContext, AppCreator, LifecycleError};
pub use socket::{SocketContext, SocketState};
pub use subscription::SubscriptionModal;
