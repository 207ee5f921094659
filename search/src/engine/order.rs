use crate::query::OrderBy;
use rolesearch_core::Role;
use std::cmp::Ordering;

pub fn compare(a: &Role, b: &Role, order_by: OrderBy) -> Ordering {
    match order_by {
        OrderBy::CreateTime => a.creation_time.cmp(&b.creation_time),
        OrderBy::Name => a.name.as_bytes().cmp(b.name.as_bytes()),
    }
}

/// Strict: equal keys are never less than each other.
pub fn less(a: &Role, b: &Role, order_by: OrderBy) -> bool {
    compare(a, b, order_by) == Ordering::Less
}

/// Stable ascending sort, then a single reversal when requested.
pub(crate) fn sort_roles(roles: &mut [Role], order_by: OrderBy, reverse: bool) {
    roles.sort_by(|a, b| compare(a, b, order_by));
    if reverse {
        roles.reverse();
    }
}
