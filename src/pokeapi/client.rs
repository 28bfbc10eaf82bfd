//! PokéAPI implementation of [`PokemonSource`] over reqwest.
//!
//! Two endpoints are used:
//! - `GET {base}/pokemon/{id|name}` for species records
//! - `GET {base}/pokemon-species/{id}`, whose `evolution_chain.url` is then
//!   fetched as-is for the chain tree

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{ApiError, LookupKey, PokemonSource};
use super::types::{
    ChainLink, EvolutionChainResponse, PokemonResponse, SpeciesRecord, SpeciesResponse,
};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

pub struct PokeApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl PokeApiClient {
    /// Builds a client for `base_url` (trailing slash optional).
    ///
    /// `timeout` of `None` means requests may hang until the server answers.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `url` and decodes the JSON body, mapping HTTP failures onto `ApiError`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Response status for {}: {}", url, status);

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("PokéAPI error: {} - {}", status.as_u16(), message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    fn name(&self) -> &str {
        "pokeapi"
    }

    async fn fetch_pokemon(&self, key: &LookupKey) -> Result<SpeciesRecord, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, key);
        let raw: PokemonResponse = self.get_json(&url).await?;
        info!("Fetched pokemon {} (id={})", raw.name, raw.id);
        Ok(SpeciesRecord::from(raw))
    }

    async fn fetch_evolution_chain(&self, species_id: u32) -> Result<ChainLink, ApiError> {
        let species_url = format!("{}/pokemon-species/{}", self.base_url, species_id);
        let species: SpeciesResponse = self.get_json(&species_url).await?;

        let chain_ref = species.evolution_chain.ok_or_else(|| {
            warn!("Species {} has no evolution chain reference", species.name);
            ApiError::NotFound(format!("evolution chain for {}", species.name))
        })?;

        let chain: EvolutionChainResponse = self.get_json(&chain_ref.url).await?;
        info!(
            "Fetched evolution chain {} for species {}",
            chain.id, species.name
        );
        Ok(chain.chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/".to_string(), None).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_timeout_builds() {
        let client = PokeApiClient::new(
            DEFAULT_BASE_URL.to_string(),
            Some(Duration::from_secs(5)),
        );
        assert!(client.is_ok());
    }
}
