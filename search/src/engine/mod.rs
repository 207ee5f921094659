mod classify;
mod fuzzy;
mod matcher;
mod order;

use crate::error::SearchError;
use crate::query::Query;
use rolesearch_core::{Role, SchemaKeys, SearchConfig, SnapshotProvider};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub use classify::is_user_facing;
pub use fuzzy::{fuzzy_matches, substring_in_map};
pub use matcher::matches;
pub use order::{compare, less};

/// Query engine over the cluster role snapshot.
///
/// Cheap to share across threads; concurrent searches are independent.
pub struct ClusterRoleSearcher {
    provider: Arc<dyn SnapshotProvider>,
    keys: SchemaKeys,
}

impl ClusterRoleSearcher {
    pub fn new(provider: Arc<dyn SnapshotProvider>, keys: SchemaKeys) -> Self {
        Self { provider, keys }
    }

    pub fn from_config(provider: Arc<dyn SnapshotProvider>, config: &SearchConfig) -> Self {
        Self::new(provider, config.schema.clone())
    }

    pub fn schema(&self) -> &SchemaKeys {
        &self.keys
    }
}

/// Read operations.
impl ClusterRoleSearcher {
    pub fn get(&self, name: &str) -> Result<Role, SearchError> {
        self.provider
            .get(name)?
            .ok_or_else(|| SearchError::NotFound(name.to_string()))
    }

    pub fn search(&self, query: &Query) -> Result<Vec<Role>, SearchError> {
        let roles = self.snapshot()?;
        Ok(self.evaluate(query, roles))
    }

    /// Like [`search`](Self::search), but gives up if `cancel` fires before the
    /// snapshot has been fetched. Filtering itself is not interruptible.
    pub fn search_cancellable(
        &self,
        query: &Query,
        cancel: &CancellationToken,
    ) -> Result<Vec<Role>, SearchError> {
        if cancel.is_cancelled() {
            tracing::warn!("cluster role search cancelled before snapshot fetch");
            return Err(SearchError::Cancelled);
        }
        let roles = self.snapshot()?;
        if cancel.is_cancelled() {
            tracing::warn!(
                roles = roles.len(),
                "cluster role search cancelled after snapshot fetch"
            );
            return Err(SearchError::Cancelled);
        }
        Ok(self.evaluate(query, roles))
    }
}

impl ClusterRoleSearcher {
    fn snapshot(&self) -> Result<Vec<Role>, SearchError> {
        self.provider.list_all().map_err(|err| {
            tracing::warn!(error = %err, "cluster role snapshot unavailable");
            SearchError::from(err)
        })
    }

    fn evaluate(&self, query: &Query, roles: Vec<Role>) -> Vec<Role> {
        tracing::trace!(?query, "evaluating cluster role query");
        let total = roles.len();

        let mut result: Vec<Role> = if query.is_unfiltered() {
            roles
        } else {
            roles
                .into_iter()
                .filter(|role| {
                    matches(&query.matches, role, &self.keys)
                        && fuzzy_matches(&query.fuzzy, role, &self.keys)
                })
                .collect()
        };

        order::sort_roles(&mut result, query.order_by, query.reverse);

        tracing::debug!(
            total,
            matched = result.len(),
            order_by = %query.order_by,
            reverse = query.reverse,
            "cluster role search finished"
        );
        result
    }
}
