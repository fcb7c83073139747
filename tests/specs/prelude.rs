// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for specs.

#![allow(dead_code)]

pub use tandem_adapters::SessionSource;
pub use tandem_app::{AppContext, Config};
pub use tandem_core::test_support::{user, users};
pub use tandem_core::{PermissionMode, User, UserId, Workspace};
pub use tandem_engine::{BlockReason, SubmitOutcome};

pub fn config() -> Config {
    Config {
        billing_secret_key: String::new(),
        body_size_limit: 2 * 1024 * 1024,
        image_domains: Vec::new(),
        log_dir: std::env::temp_dir(),
        log_filter: "info".to_string(),
        desktop_notifications: false,
    }
}

/// Booted app with `owner` signed in and the sample directory loaded.
pub fn app_signed_in(owner: &str) -> AppContext {
    let app = AppContext::boot(config(), Vec::new());
    for u in directory_users() {
        app.directory.upsert(u);
    }
    app.session.sign_in(owner);
    app
}

pub fn directory_users() -> Vec<User> {
    vec![
        User::new("1", "johndoe@example.com").full_name("John Doe"),
        User::new("2", "janedoe@example.com"),
        User::new("4", "bobjohnson@example.com").full_name("Bob Johnson"),
        User::new("5", "carolwhite@example.com").full_name("Carol White"),
    ]
}

pub fn expect_created(outcome: SubmitOutcome) -> Workspace {
    match outcome {
        SubmitOutcome::Created(ws) => ws,
        other => panic!("expected Created, got {:?}", other),
    }
}
