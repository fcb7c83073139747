// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tandem-engine: Workspace creation flow

pub mod creator;

pub use creator::{
    BlockReason, CreateError, CreateStage, CreatorDeps, FormState, SubmitOutcome,
    WorkspaceCreator, FAILURE_MESSAGE, FAILURE_TITLE, PARTIAL_FAILURE_MESSAGE, SUCCESS_MESSAGE,
    SUCCESS_TITLE,
};
