// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tandem-adapters: Ports to the services the workspace flow depends on

pub mod directory;
pub mod notify;
pub mod refresh;
pub mod session;
pub mod store;

pub use directory::{CollaboratorSearch, MemoryDirectory, SearchError, DEFAULT_SEARCH_LIMIT};
pub use notify::{
    DesktopNotifyAdapter, LogNotifyAdapter, NotifyAdapter, NotifyError, NotifyRouter,
};
pub use refresh::{ChannelRefresh, RefreshTrigger};
pub use session::{SessionSource, StaticSession};
pub use store::{MemoryWorkspaceStore, StoreError, WorkspaceStore};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use refresh::FakeRefresh;
#[cfg(any(test, feature = "test-support"))]
pub use store::{FakeWorkspaceStore, StoreCall};
