use crate::query::keys::{ANNOTATION, LABEL, NAME};
use rolesearch_core::{Role, SchemaKeys};
use std::collections::BTreeMap;

/// Case-sensitive substring lookup in a label or annotation bag.
///
/// An empty `key_filter` searches every key and value; otherwise only the
/// value stored under `key_filter` is searched.
pub fn substring_in_map(map: &BTreeMap<String, String>, key_filter: &str, needle: &str) -> bool {
    if key_filter.is_empty() {
        return map
            .iter()
            .any(|(key, value)| key.contains(needle) || value.contains(needle));
    }
    map.get(key_filter).is_some_and(|value| value.contains(needle))
}

/// Evaluates fuzzy predicates; all of them must hold.
pub fn fuzzy_matches(
    predicates: &BTreeMap<String, String>,
    role: &Role,
    keys: &SchemaKeys,
) -> bool {
    predicates.iter().all(|(key, needle)| match key.as_str() {
        NAME => {
            role.name.contains(needle.as_str())
                || role
                    .annotation(&keys.display_name_annotation_key)
                    .contains(needle.as_str())
        }
        LABEL => substring_in_map(&role.labels, "", needle),
        ANNOTATION => substring_in_map(&role.annotations, "", needle),
        other => {
            substring_in_map(&role.labels, other, needle)
                || substring_in_map(&role.annotations, other, needle)
        }
    })
}
