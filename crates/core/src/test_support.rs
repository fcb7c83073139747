// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{User, UserId};

// ── Proptest strategies ─────────────────────────────────────────────────

pub mod strategies {
    use crate::{PermissionMode, User};
    use proptest::prelude::*;

    pub fn arb_permission_mode() -> impl Strategy<Value = PermissionMode> {
        prop_oneof![Just(PermissionMode::Private), Just(PermissionMode::Shared)]
    }

    /// Users drawn from a small ID space so collisions are common.
    pub fn arb_user() -> impl Strategy<Value = User> {
        (0u8..6, proptest::option::of("[A-Z][a-z]{2,8}")).prop_map(|(n, name)| {
            let mut user = User::new(format!("u{}", n), format!("u{}@example.com", n));
            user.full_name = name;
            user
        })
    }
}

// ── User factory functions ──────────────────────────────────────────────

/// A user whose email is `{id}@example.com`.
pub fn user(id: &str) -> User {
    User::new(id, format!("{}@example.com", id))
}

pub fn users(ids: &[&str]) -> Vec<User> {
    ids.iter().map(|id| user(id)).collect()
}

pub fn user_ids(users: &[User]) -> Vec<UserId> {
    users.iter().map(|u| u.id.clone()).collect()
}
