//! Cluster role object as held in the local cache.
//!
//! Only the metadata the search engine reads is modelled. The wire form is
//! the control plane's object shape (`metadata.name`, `metadata.labels`, ...)
//! and everything else on the object (rules, aggregation) is ignored when
//! decoding.

use super::RoleName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An owner of a cached object. At most one entry per object is the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub controller: bool,
}

impl OwnerReference {
    pub fn controller(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            controller: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoleObject", into = "RoleObject")]
pub struct Role {
    pub name: RoleName,
    pub creation_time: DateTime<Utc>,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub owner_references: Vec<OwnerReference>,
}

impl Role {
    pub fn new(name: RoleName, creation_time: DateTime<Utc>) -> Self {
        Self {
            name,
            creation_time,
            labels: BTreeMap::new(),
            annotations: BTreeMap::new(),
            owner_references: Vec::new(),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    pub fn with_owner(mut self, owner: OwnerReference) -> Self {
        self.owner_references.push(owner);
        self
    }

    /// Label value, or `""` when the label is absent.
    pub fn label(&self, key: &str) -> &str {
        self.labels.get(key).map_or("", String::as_str)
    }

    /// Annotation value, or `""` when the annotation is absent.
    pub fn annotation(&self, key: &str) -> &str {
        self.annotations.get(key).map_or("", String::as_str)
    }

    pub fn controller_ref(&self) -> Option<&OwnerReference> {
        self.owner_references.iter().find(|owner| owner.controller)
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct RoleObject {
    metadata: ObjectMeta,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectMeta {
    name: RoleName,
    #[serde(default)]
    creation_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    owner_references: Vec<OwnerReference>,
}

impl From<RoleObject> for Role {
    fn from(object: RoleObject) -> Self {
        let meta = object.metadata;
        Self {
            name: meta.name,
            creation_time: meta.creation_timestamp.unwrap_or_default(),
            labels: meta.labels,
            annotations: meta.annotations,
            owner_references: meta.owner_references,
        }
    }
}

impl From<Role> for RoleObject {
    fn from(role: Role) -> Self {
        Self {
            metadata: ObjectMeta {
                name: role.name,
                creation_timestamp: Some(role.creation_time),
                labels: role.labels,
                annotations: role.annotations,
                owner_references: role.owner_references,
            },
        }
    }
}
