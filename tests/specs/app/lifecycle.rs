// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! App boot/shutdown specs

use crate::prelude::*;

#[test]
fn boot_then_shutdown_resets_contexts() {
    let mut app = app_signed_in("owner-1");
    app.socket.connected("sock-1");
    app.subscription.open();

    app.shutdown();

    assert!(!app.is_running());
    assert!(!app.socket.is_connected());
    assert!(!app.subscription.is_open());
    assert_eq!(app.session.current_user(), None);
}

#[test]
#[serial_test::serial]
fn config_loads_from_file_in_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nbody_size_limit = \"1mb\"\n").unwrap();
    std::env::set_var("TANDEM_CONFIG", &path);
    std::env::set_var("TANDEM_LOG_DIR", dir.path());

    let config = Config::load();
    std::env::remove_var("TANDEM_CONFIG");
    std::env::remove_var("TANDEM_LOG_DIR");

    assert_eq!(config.unwrap().body_size_limit, 1024 * 1024);
}
