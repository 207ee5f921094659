use rolesearch_core::{Role, SchemaKeys};

/// A role is user-facing when an end user created it and it is not scoped
/// to a workspace. Only those show up in the global cluster role listing.
pub fn is_user_facing(role: &Role, keys: &SchemaKeys) -> bool {
    !role.annotation(&keys.creator_annotation_key).is_empty()
        && role.label(&keys.workspace_label_key).is_empty()
}
