//! Cluster role search engine.
//!
//! Evaluates a [`Query`] against a point-in-time snapshot of the role cache.
//!
//! # Design
//!
//! - The engine is stateless: every request lists the snapshot, filters it and
//!   sorts it. Nothing is retained between requests.
//! - `match` predicates are exact. Reserved keys (`name`, `keyword`,
//!   `owner_kind`, `owner_name`, `userfacing`) select special checks and any
//!   other key is a label equality.
//! - `fuzzy` predicates are case-sensitive substring checks over the name,
//!   display name, labels and annotations.
//! - All predicates of both maps must hold. Evaluation never fails; the only
//!   error path is the snapshot provider.
//! - Sorting is stable. `reverse` flips the sorted result as a whole.

mod engine;
mod error;
mod query;

pub use engine::{
    ClusterRoleSearcher, compare, fuzzy_matches, is_user_facing, less, matches, substring_in_map,
};
pub use error::SearchError;
pub use query::{OrderBy, Query, keys};
