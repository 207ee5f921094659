//! Read-only access to the cached cluster roles.

use crate::error::Result;
use crate::types::Role;

mod memory;

pub use memory::MemorySnapshot;

/// Point-in-time view over the role cache.
///
/// Implementations are internally synchronized; every call returns an owned
/// copy so callers never hold a lock while evaluating it.
pub trait SnapshotProvider: Send + Sync {
    /// All roles, in the cache's insertion order.
    fn list_all(&self) -> Result<Vec<Role>>;

    fn get(&self, name: &str) -> Result<Option<Role>>;
}
