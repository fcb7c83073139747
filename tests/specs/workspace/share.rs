// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared workspace specs: search, select, create, and what collaborators see.

use crate::prelude::*;

#[tokio::test]
async fn shared_workspace_is_visible_to_collaborators() {
    let app = app_signed_in("owner-1");
    let creator = app.workspace_creator();
    creator.set_title("Launch Plan");
    creator.set_permission(PermissionMode::Shared);
    assert_eq!(creator.blocked_reason(), Some(BlockReason::NoCollaborators));

    for found in creator.search_collaborators(&app.directory, "doe").await.unwrap() {
        creator.add_collaborator(found);
    }
    let ws = expect_created(creator.submit().await.unwrap());

    let ids: Vec<String> =
        app.store.collaborators(&ws.id).iter().map(|u| u.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(app.store.workspaces_for(&UserId::new("2")), vec![ws.clone()]);
    assert!(app.store.workspaces_for(&UserId::new("4")).is_empty());
}

#[tokio::test]
async fn search_hides_already_selected_users() {
    let app = app_signed_in("owner-1");
    let creator = app.workspace_creator();
    creator.set_permission(PermissionMode::Shared);

    let first = creator.search_collaborators(&app.directory, "john").await.unwrap();
    assert_eq!(first.len(), 2);
    creator.add_collaborator(first[0].clone());

    let second = creator.search_collaborators(&app.directory, "john").await.unwrap();
    let ids: Vec<&str> = second.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["4"]);
}

#[tokio::test]
async fn toggling_mode_keeps_selection() {
    let app = app_signed_in("owner-1");
    let creator = app.workspace_creator();
    creator.set_title("Launch Plan");
    creator.set_permission(PermissionMode::Shared);
    creator.add_collaborator(user("u1"));
    creator.set_permission(PermissionMode::Private);
    creator.set_permission(PermissionMode::Shared);

    let ws = expect_created(creator.submit().await.unwrap());
    assert_eq!(app.store.collaborators(&ws.id), users(&["u1"]));
}
