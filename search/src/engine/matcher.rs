use super::classify::is_user_facing;
use super::fuzzy::substring_in_map;
use crate::query::keys::{KEYWORD, NAME, OWNER_KIND, OWNER_NAME, USER_FACING};
use rolesearch_core::{Role, SchemaKeys};
use std::collections::BTreeMap;

/// Evaluates exact-match predicates; all of them must hold.
///
/// Keys outside the reserved set compare label values, with an absent label
/// reading as `""`.
pub fn matches(predicates: &BTreeMap<String, String>, role: &Role, keys: &SchemaKeys) -> bool {
    // owner_kind and owner_name form a single check against the controller.
    let owner_kind = predicates.get(OWNER_KIND).map(String::as_str);
    let owner_name = predicates.get(OWNER_NAME).map(String::as_str);
    if (owner_kind.is_some() || owner_name.is_some())
        && !is_controlled_by(role, owner_kind, owner_name)
    {
        return false;
    }

    predicates.iter().all(|(key, value)| match key.as_str() {
        OWNER_KIND | OWNER_NAME => true,
        NAME => value.split('|').any(|name| name == role.name.as_str()),
        KEYWORD => {
            role.name.contains(value.as_str())
                || substring_in_map(&role.labels, "", value)
                || substring_in_map(&role.annotations, "", value)
        }
        USER_FACING => value != "true" || is_user_facing(role, keys),
        label => role.label(label) == value,
    })
}

/// `None` or `""` accepts any kind/name. Only the controller reference counts.
fn is_controlled_by(role: &Role, kind: Option<&str>, name: Option<&str>) -> bool {
    let accepts = |want: Option<&str>, have: &str| {
        want.is_none_or(|want| want.is_empty() || want == have)
    };
    role.controller_ref()
        .is_some_and(|owner| accepts(kind, &owner.kind) && accepts(name, &owner.name))
}
