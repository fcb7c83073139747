// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn channel_refresh_without_subscribers_still_counts() {
    let refresh = ChannelRefresh::new();
    refresh.refresh();
    refresh.refresh();
    assert_eq!(refresh.generation(), 2);
}

#[tokio::test]
async fn channel_refresh_wakes_subscribers() {
    let refresh = ChannelRefresh::new();
    let mut rx = refresh.subscribe();
    assert_eq!(*rx.borrow_and_update(), 0);

    refresh.clone().refresh();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), 1);
}

#[test]
fn fake_refresh_counts_across_clones() {
    let refresh = FakeRefresh::new();
    refresh.clone().refresh();
    refresh.refresh();
    assert_eq!(refresh.count(), 2);
}
