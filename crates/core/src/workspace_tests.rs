// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn workspace_id_display() {
    let id = WorkspaceId::new("0d7f3c1e-5b7a-4c59-9a0e-2f8f7c6b1a23");
    assert_eq!(id.to_string(), "0d7f3c1e-5b7a-4c59-9a0e-2f8f7c6b1a23");
}

#[test]
fn workspace_id_equality() {
    assert_eq!(WorkspaceId::new("ws-1"), WorkspaceId::new("ws-1"));
    assert_ne!(WorkspaceId::new("ws-1"), WorkspaceId::new("ws-2"));
}

#[test]
fn permission_mode_default_is_private() {
    assert_eq!(PermissionMode::default(), PermissionMode::Private);
}

#[yare::parameterized(
    private = { PermissionMode::Private, "private", false },
    shared  = { PermissionMode::Shared,  "shared",  true },
)]
fn permission_mode_display_and_serde(mode: PermissionMode, text: &str, shared: bool) {
    assert_eq!(mode.to_string(), text);
    assert_eq!(mode.is_shared(), shared);
    assert_eq!(serde_json::to_string(&mode).unwrap(), format!("\"{}\"", text));
    assert_eq!(text.parse::<PermissionMode>().unwrap(), mode);
}

#[yare::parameterized(
    upper   = { "SHARED",   Ok(PermissionMode::Shared) },
    padded  = { " private", Ok(PermissionMode::Private) },
    unknown = { "public",   Err(ParsePermissionError("public".to_string())) },
    empty   = { "",         Err(ParsePermissionError(String::new())) },
)]
fn permission_mode_parse(input: &str, expected: Result<PermissionMode, ParsePermissionError>) {
    assert_eq!(input.parse::<PermissionMode>(), expected);
}

#[test]
fn new_workspace_has_default_optional_fields() {
    let ws = Workspace::new(
        WorkspaceId::new("ws-1"),
        "Engineering",
        UserId::new("u1"),
        PermissionMode::Private,
        1_717_070_400_000,
    );
    assert_eq!(ws.icon, DEFAULT_ICON);
    assert_eq!(ws.banner_url, "");
    assert_eq!(ws.logo, None);
    assert_eq!(ws.data, None);
    assert!(!ws.is_trashed());
    assert_eq!(ws.created_at().to_rfc3339(), "2024-05-30T12:00:00+00:00");
}

#[test]
fn workspace_serializes_with_store_column_names() {
    let ws = Workspace::builder().id("ws-1").owner("u1").permission(PermissionMode::Shared).build();
    let json = serde_json::to_value(&ws).unwrap();
    assert_eq!(json["id"], "ws-1");
    assert_eq!(json["workspaceOwner"], "u1");
    assert_eq!(json["iconId"], DEFAULT_ICON);
    assert_eq!(json["permission"], "shared");
    assert_eq!(json["createdAt"], "1970-01-01T00:16:40.000Z");
    assert_eq!(json["bannerUrl"], "");
    assert_eq!(json["inTrash"], "");
    assert!(json["logo"].is_null());

    let parsed: Workspace = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, ws);
}

#[test]
fn created_at_round_trips_iso_timestamp() {
    let ws = Workspace::builder().created_at_ms(1_717_070_400_123).build();
    let json = serde_json::to_value(&ws).unwrap();
    assert_eq!(json["createdAt"], "2024-05-30T12:00:00.123Z");
    assert!(json.get("createdAtMs").is_none());

    let parsed: Workspace = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.created_at_ms, 1_717_070_400_123);
}

#[yare::parameterized(
    garbage     = { "yesterday" },
    before_1970 = { "1969-12-31T23:59:59.000Z" },
)]
fn created_at_rejects_bad_timestamps(text: &str) {
    let mut json = serde_json::to_value(Workspace::builder().build()).unwrap();
    json["createdAt"] = serde_json::Value::from(text);
    assert!(serde_json::from_value::<Workspace>(json).is_err());
}

#[test]
fn trashed_workspace() {
    let ws = Workspace::builder().in_trash("Deleted by u1").build();
    assert!(ws.is_trashed());
}
