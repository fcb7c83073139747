// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Private workspace creation specs

use crate::prelude::*;

#[tokio::test]
async fn private_workspace_is_stored_for_owner() {
    let app = app_signed_in("owner-1");
    let creator = app.workspace_creator();
    creator.set_title("Engineering");

    let ws = expect_created(creator.submit().await.unwrap());

    assert_eq!(ws.owner, "owner-1");
    assert_eq!(ws.permission, PermissionMode::Private);
    let listed = app.store.workspaces_for(&UserId::new("owner-1"));
    assert_eq!(listed, vec![ws.clone()]);
    assert!(app.store.collaborators(&ws.id).is_empty());
    assert_eq!(app.refresh.generation(), 1);
}

#[tokio::test]
async fn empty_title_never_reaches_store() {
    let app = app_signed_in("owner-1");
    let creator = app.workspace_creator();

    let outcome = creator.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Blocked(BlockReason::EmptyTitle));
    assert!(app.store.is_empty());
    assert_eq!(app.refresh.generation(), 0);
}

#[tokio::test]
async fn signed_out_submit_stores_nothing() {
    let app = app_signed_in("owner-1");
    app.session.sign_out();
    let creator = app.workspace_creator();
    creator.set_title("X");

    assert_eq!(creator.submit().await.unwrap(), SubmitOutcome::NoSession);
    assert!(app.store.is_empty());
    assert!(!creator.is_submitting());
}

#[tokio::test]
async fn workspace_round_trips_through_json() {
    let app = app_signed_in("owner-1");
    let creator = app.workspace_creator();
    creator.set_title("Engineering");
    let ws = expect_created(creator.submit().await.unwrap());

    let json = serde_json::to_string(&ws).unwrap();
    let parsed: Workspace = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, ws);
}
