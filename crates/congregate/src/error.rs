use thiserror::Error;

/// Hard failures surfaced by congregate.
///
/// Only setup-time and boundary problems end up here. Stale or malformed
/// query state is never an error; see [`crate::facets::QueryIssue`].
#[derive(Error, Debug)]
pub enum CongregateError {
    #[error("Duplicate facet key: {0}")]
    DuplicateFacetKey(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CongregateError>;
