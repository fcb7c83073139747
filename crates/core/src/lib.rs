// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tandem-core: Domain types for the Tandem workspace app

pub mod macros;

pub mod billing;
pub mod clock;
pub mod collaborators;
pub mod id;
pub mod user;
pub mod workspace;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use billing::{Price, PriceInterval, Product};
pub use clock::{Clock, FakeClock, SystemClock};
pub use collaborators::CollaboratorSet;
pub use id::{short, IdGen, SequentialIdGen, UuidIdGen};
pub use user::{User, UserId};
#[cfg(any(test, feature = "test-support"))]
pub use workspace::WorkspaceBuilder;
pub use workspace::{ParsePermissionError, PermissionMode, Workspace, WorkspaceId, DEFAULT_ICON};
