// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access to the authenticated user.
//!
//! Authentication itself happens elsewhere; the flow only needs to know who
//! is signed in at the moment it submits.

use parking_lot::RwLock;
use std::sync::Arc;
use tandem_core::UserId;

/// Yields the signed-in user's ID, if any
pub trait SessionSource: Clone + Send + Sync + 'static {
    fn current_user(&self) -> Option<UserId>;
}

/// Session whose user is set explicitly (on sign-in/sign-out callbacks).
///
/// Clones share the same session.
#[derive(Clone, Debug, Default)]
pub struct StaticSession {
    user: Arc<RwLock<Option<UserId>>>,
}

impl StaticSession {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: impl Into<UserId>) -> Self {
        Self { user: Arc::new(RwLock::new(Some(user.into()))) }
    }

    pub fn sign_in(&self, user: impl Into<UserId>) {
        let user = user.into();
        tracing::info!(user = %user, "signed in");
        *self.user.write() = Some(user);
    }

    pub fn sign_out(&self) {
        if let Some(user) = self.user.write().take() {
            tracing::info!(user = %user, "signed out");
        }
    }
}

impl SessionSource for StaticSession {
    fn current_user(&self) -> Option<UserId> {
        self.user.read().clone()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
