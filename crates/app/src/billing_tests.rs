// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    empty = { "",                false, false },
    test  = { "sk_test_abc123",  true,  true },
    live  = { "sk_live_abc123",  true,  false },
)]
fn configured_and_mode(key: &str, configured: bool, test_mode: bool) {
    let client = BillingClient::new(key);
    assert_eq!(client.is_configured(), configured);
    assert_eq!(client.is_test_mode(), test_mode);
    assert_eq!(client.secret_key(), key);
}

#[test]
fn user_agent_uses_app_info() {
    let client = BillingClient::new("sk_test_abc");
    assert_eq!(client.app_info().name, "Tandem");
    assert_eq!(client.user_agent(), format!("Tandem/{}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn debug_hides_key() {
    let debug = format!("{:?}", BillingClient::new("sk_live_supersecret"));
    assert!(!debug.contains("supersecret"));
    assert!(debug.contains("sk_live…"));
}
