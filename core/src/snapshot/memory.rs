use super::SnapshotProvider;
use crate::error::{ProviderError, Result};
use crate::types::Role;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Inner {
    roles: Vec<Role>,
    unavailable: Option<String>,
}

/// In-memory role cache.
///
/// The host keeps it in sync with the control plane via [`upsert`](Self::upsert)
/// and [`remove`](Self::remove). Upserts of a known name keep the role's
/// original position so listing order stays stable across updates.
#[derive(Default)]
pub struct MemorySnapshot {
    inner: RwLock<Inner>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_roles(roles: impl IntoIterator<Item = Role>) -> Result<Self> {
        let snapshot = Self::new();
        for role in roles {
            snapshot.upsert(role)?;
        }
        Ok(snapshot)
    }

    /// Decodes a JSON array of role objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let roles: Vec<Role> = serde_json::from_str(json)?;
        Self::from_roles(roles)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| ProviderError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| ProviderError::Poisoned)
    }
}

/// Mutation operations.
impl MemorySnapshot {
    /// Inserts or replaces the role with the same name. Returns the replaced role.
    pub fn upsert(&self, role: Role) -> Result<Option<Role>> {
        let mut inner = self.write()?;
        match inner.roles.iter_mut().find(|r| r.name == role.name) {
            Some(existing) => {
                tracing::debug!(name = %role.name, "replacing cached role");
                Ok(Some(std::mem::replace(existing, role)))
            }
            None => {
                tracing::debug!(name = %role.name, "caching new role");
                inner.roles.push(role);
                Ok(None)
            }
        }
    }

    pub fn remove(&self, name: &str) -> Result<Option<Role>> {
        let mut inner = self.write()?;
        let Some(pos) = inner.roles.iter().position(|r| r.name.as_str() == name) else {
            return Ok(None);
        };
        tracing::debug!(name, "evicting cached role");
        Ok(Some(inner.roles.remove(pos)))
    }

    /// Marks the cache as not servable (e.g. not yet synced). `None` clears it.
    pub fn set_unavailable(&self, reason: Option<String>) -> Result<()> {
        self.write()?.unavailable = reason;
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.roles.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.roles.is_empty())
    }
}

impl SnapshotProvider for MemorySnapshot {
    fn list_all(&self) -> Result<Vec<Role>> {
        let inner = self.read()?;
        if let Some(reason) = &inner.unavailable {
            return Err(ProviderError::Unavailable(reason.clone()));
        }
        Ok(inner.roles.clone())
    }

    fn get(&self, name: &str) -> Result<Option<Role>> {
        let inner = self.read()?;
        if let Some(reason) = &inner.unavailable {
            return Err(ProviderError::Unavailable(reason.clone()));
        }
        Ok(inner.roles.iter().find(|r| r.name.as_str() == name).cloned())
    }
}
