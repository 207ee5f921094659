use rolesearch_core::{
    MemorySnapshot, OwnerReference, ProviderError, Role, RoleName, SnapshotProvider,
};

const ROLE_JSON: &str = r#"{
    "apiVersion": "rbac.authorization.k8s.io/v1",
    "kind": "ClusterRole",
    "metadata": {
        "name": "system:bot",
        "creationTimestamp": "2024-03-01T10:00:00Z",
        "labels": {"tier": "system"},
        "annotations": {"kubesphere.io/alias-name": "Bot"},
        "ownerReferences": [
            {"apiVersion": "iam.kubesphere.io/v1alpha2", "kind": "Role",
             "name": "legacy", "uid": "1"},
            {"apiVersion": "iam.kubesphere.io/v1alpha2", "kind": "Role",
             "name": "admin", "uid": "2", "controller": true}
        ]
    },
    "rules": [{"apiGroups": ["*"], "resources": ["*"], "verbs": ["get"]}]
}"#;

/// Decoding reads the metadata block and ignores the rest of the object.
#[test]
fn test_role_decodes_object_metadata() {
    let role: Role = serde_json::from_str(ROLE_JSON).unwrap();

    assert_eq!(role.name.as_str(), "system:bot");
    assert_eq!(role.creation_time.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    assert_eq!(role.label("tier"), "system");
    assert_eq!(role.annotation("kubesphere.io/alias-name"), "Bot");
    assert_eq!(role.owner_references.len(), 2);
    assert!(!role.owner_references[0].controller);
    assert_eq!(
        role.controller_ref(),
        Some(&OwnerReference::controller("Role", "admin"))
    );
}

/// Absent attribute bags decode as empty; absent attributes read as "".
#[test]
fn test_role_decodes_sparse_metadata() {
    let role: Role = serde_json::from_str(r#"{"metadata": {"name": "viewer"}}"#).unwrap();

    assert!(role.labels.is_empty());
    assert!(role.annotations.is_empty());
    assert!(role.owner_references.is_empty());
    assert!(role.controller_ref().is_none());
    assert_eq!(role.label("missing"), "");
    assert_eq!(role.annotation("missing"), "");
    assert_eq!(role.creation_time.timestamp(), 0);
}

#[test]
fn test_role_rejects_empty_name() {
    serde_json::from_str::<Role>(r#"{"metadata": {"name": ""}}"#).unwrap_err();
}

#[test]
fn test_role_serializes_back_to_object_shape() {
    let role: Role = serde_json::from_str(ROLE_JSON).unwrap();

    let value = serde_json::to_value(&role).unwrap();
    assert_eq!(value["metadata"]["name"], "system:bot");
    assert_eq!(value["metadata"]["labels"]["tier"], "system");
    assert_eq!(value["metadata"]["ownerReferences"][1]["controller"], true);

    let again: Role = serde_json::from_value(value).unwrap();
    assert_eq!(again, role);
}

#[test]
fn test_builder_matches_decoded_role() {
    let decoded: Role = serde_json::from_str(
        r#"{"metadata": {"name": "editor", "creationTimestamp": "1970-01-01T00:00:00Z",
            "labels": {"tier": "user"}, "annotations": {"kubesphere.io/creator": "bob"}}}"#,
    )
    .unwrap();

    let built = Role::new(RoleName::try_from("editor").unwrap(), Default::default())
        .with_label("tier", "user")
        .with_annotation("kubesphere.io/creator", "bob");

    assert_eq!(decoded, built);
}

#[test]
fn test_snapshot_from_json_list() {
    let json = format!("[{ROLE_JSON}, {{\"metadata\": {{\"name\": \"viewer\"}}}}]");
    let snapshot = MemorySnapshot::from_json(&json).unwrap();

    let roles = snapshot.list_all().unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].name.as_str(), "system:bot");
    assert_eq!(roles[1].name.as_str(), "viewer");
}

#[test]
fn test_snapshot_from_invalid_json() {
    let result = MemorySnapshot::from_json("[{\"metadata\": {}}]");
    assert!(matches!(result, Err(ProviderError::Decode(_))));
}
