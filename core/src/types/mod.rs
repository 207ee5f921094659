pub(crate) mod config;
pub use config::{ConfigError, SchemaKeys, SearchConfig};

pub(crate) mod name;
pub use name::{RoleName, RoleNameError};

pub(crate) mod role;
pub use role::{OwnerReference, Role};
