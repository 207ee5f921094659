use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Failures surfaced by a snapshot provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("snapshot unavailable: {0}")]
    Unavailable(String),

    #[error("snapshot lock poisoned")]
    Poisoned,

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
