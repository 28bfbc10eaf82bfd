use std::fmt;

use async_trait::async_trait;

use super::types::{ChainLink, SpeciesRecord};

/// Errors that can occur while talking to the data source.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Client misconfigured (bad base URL, TLS backend failure).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The requested resource does not exist (HTTP 404 or missing reference).
    NotFound(String),
    /// API returned some other error response.
    Api { status: u16, message: String },
    /// Failed to decode the response body.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::NotFound(what) => write!(f, "not found: {what}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// What a species lookup is keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(u32),
    /// Exact species name, stored lower-cased.
    Name(String),
}

impl LookupKey {
    pub fn name(name: &str) -> Self {
        LookupKey::Name(name.trim().to_lowercase())
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "{id}"),
            LookupKey::Name(name) => f.write_str(name),
        }
    }
}

/// Where species records and evolution chains come from.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// Looks up one Pokémon by identifier or exact name.
    async fn fetch_pokemon(&self, key: &LookupKey) -> Result<SpeciesRecord, ApiError>;

    /// Fetches the root of the evolution chain the given species belongs to.
    async fn fetch_evolution_chain(&self, species_id: u32) -> Result<ChainLink, ApiError>;
}
