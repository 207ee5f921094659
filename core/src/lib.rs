pub mod error;
pub mod snapshot;
pub mod types;

pub use error::ProviderError;
pub use snapshot::{MemorySnapshot, SnapshotProvider};
pub use types::{
    ConfigError, OwnerReference, Role, RoleName, RoleNameError, SchemaKeys, SearchConfig,
};
