use rolesearch_core::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The snapshot could not be obtained. Carries the provider's error as is.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("cluster role not found: {0}")]
    NotFound(String),

    #[error("search cancelled")]
    Cancelled,
}
