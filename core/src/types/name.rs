use nutype::nutype;

/// Cluster-unique role name as assigned by the control plane.
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct RoleName(String);

#[cfg(test)]
mod tests;
