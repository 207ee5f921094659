mod search;

pub use search::{ConfigError, SchemaKeys, SearchConfig};
