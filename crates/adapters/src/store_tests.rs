// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tandem_core::test_support::{user, users};
use tandem_core::PermissionMode;

fn workspace(id: &str, owner: &str) -> Workspace {
    Workspace::builder().id(id).owner(owner).build()
}

#[tokio::test]
async fn memory_store_creates_and_reads_back() {
    let store = MemoryWorkspaceStore::new();
    let ws = workspace("ws-1", "owner");
    store.create_workspace(&ws).await.unwrap();

    assert_eq!(store.workspace(&WorkspaceId::new("ws-1")), Some(ws));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn memory_store_rejects_duplicate_id() {
    let store = MemoryWorkspaceStore::new();
    store.create_workspace(&workspace("ws-1", "owner")).await.unwrap();
    let err = store.create_workspace(&workspace("ws-1", "other")).await.unwrap_err();
    assert_eq!(err, StoreError::Duplicate(WorkspaceId::new("ws-1")));
}

#[tokio::test]
async fn memory_store_rejects_blank_title() {
    let store = MemoryWorkspaceStore::new();
    let ws = Workspace::builder().title("   ").build();
    let err = store.create_workspace(&ws).await.unwrap_err();
    assert!(matches!(err, StoreError::Rejected(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn memory_store_add_collaborators_requires_workspace() {
    let store = MemoryWorkspaceStore::new();
    let err = store.add_collaborators(&users(&["u1"]), &WorkspaceId::new("missing")).await.unwrap_err();
    assert_eq!(err, StoreError::WorkspaceNotFound(WorkspaceId::new("missing")));
}

#[tokio::test]
async fn memory_store_collaborators_keep_order_and_dedup() {
    let store = MemoryWorkspaceStore::new();
    let id = WorkspaceId::new("ws-1");
    store.create_workspace(&workspace("ws-1", "owner")).await.unwrap();
    store.add_collaborators(&users(&["u2", "u1"]), &id).await.unwrap();
    store.add_collaborators(&users(&["u1", "u3"]), &id).await.unwrap();

    assert_eq!(store.collaborators(&id), users(&["u2", "u1", "u3"]));
}

#[tokio::test]
async fn workspaces_for_lists_owned_then_shared_and_skips_trash() {
    let store = MemoryWorkspaceStore::new();
    store.create_workspace(&workspace("shared-in", "boss")).await.unwrap();
    store.create_workspace(&workspace("mine", "u1")).await.unwrap();
    store.create_workspace(&workspace("not-mine", "boss")).await.unwrap();
    let trashed = Workspace::builder().id("old").owner("u1").in_trash("trashed").build();
    store.create_workspace(&trashed).await.unwrap();
    store.add_collaborators(&[user("u1")], &WorkspaceId::new("shared-in")).await.unwrap();

    let ids: Vec<String> =
        store.workspaces_for(&UserId::new("u1")).into_iter().map(|ws| ws.id.to_string()).collect();
    assert_eq!(ids, vec!["mine", "shared-in"]);
}

#[tokio::test]
async fn fake_store_records_calls() {
    let store = FakeWorkspaceStore::new();
    let ws = Workspace::builder().permission(PermissionMode::Shared).build();
    store.create_workspace(&ws).await.unwrap();
    store.add_collaborators(&users(&["u1"]), &ws.id).await.unwrap();

    assert_eq!(
        store.calls(),
        vec![
            StoreCall::CreateWorkspace(ws.clone()),
            StoreCall::AddCollaborators { collaborators: users(&["u1"]), workspace_id: ws.id.clone() },
        ]
    );
    assert_eq!(store.created(), vec![ws]);
}

#[tokio::test]
async fn fake_store_injected_failures() {
    let store = FakeWorkspaceStore::new();
    store.fail_create(StoreError::Unavailable("offline".to_string()));
    store.fail_add_collaborators(StoreError::Rejected("nope".to_string()));
    let ws = Workspace::builder().build();

    assert_eq!(
        store.create_workspace(&ws).await,
        Err(StoreError::Unavailable("offline".to_string()))
    );
    assert_eq!(
        store.add_collaborators(&[], &ws.id).await,
        Err(StoreError::Rejected("nope".to_string()))
    );
    assert_eq!(store.calls().len(), 2);
}

#[tokio::test]
async fn fake_store_gate_stalls_create_until_notified() {
    let store = FakeWorkspaceStore::new();
    let gate = store.gate_create();
    let ws = Workspace::builder().build();

    let task = {
        let store = store.clone();
        let ws = ws.clone();
        tokio::spawn(async move { store.create_workspace(&ws).await })
    };
    tokio::task::yield_now().await;
    assert!(!task.is_finished());

    gate.notify_one();
    assert_eq!(task.await.unwrap(), Ok(()));
    assert_eq!(store.created(), vec![ws]);
}
