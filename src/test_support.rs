//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::state::App;
use crate::pokeapi::{ApiError, ChainLink, LookupKey, NamedResource, PokemonSource, SpeciesRecord};

/// Builds a deterministic record for tests.
pub fn record(id: u32, name: &str) -> SpeciesRecord {
    SpeciesRecord {
        id,
        name: name.to_string(),
        types: vec!["normal".to_string()],
        abilities: vec!["run-away".to_string()],
        height_dm: 10,
        weight_hg: 100,
        sprite_url: None,
    }
}

/// Builds a chain node.
pub fn chain(name: &str, evolves_to: Vec<ChainLink>) -> ChainLink {
    ChainLink {
        species: NamedResource {
            name: name.to_string(),
            url: String::new(),
        },
        evolves_to,
    }
}

/// In-memory source keyed by id. Anything missing is `NotFound`.
#[derive(Default)]
pub struct StubSource {
    pub records: HashMap<u32, SpeciesRecord>,
    pub chains: HashMap<u32, ChainLink>,
}

impl StubSource {
    /// Bulbasaur line (1-3) plus a single-stage pikachu (25).
    pub fn kanto_starters() -> Self {
        let mut source = Self::default();
        for (id, name) in [(1, "bulbasaur"), (2, "ivysaur"), (3, "venusaur"), (25, "pikachu")] {
            source.records.insert(id, record(id, name));
        }
        let line = chain(
            "bulbasaur",
            vec![chain("ivysaur", vec![chain("venusaur", vec![])])],
        );
        for id in 1..=3 {
            source.chains.insert(id, line.clone());
        }
        source.chains.insert(25, chain("pikachu", vec![]));
        source
    }
}

#[async_trait]
impl PokemonSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_pokemon(&self, key: &LookupKey) -> Result<SpeciesRecord, ApiError> {
        let found = match key {
            LookupKey::Id(id) => self.records.get(id),
            LookupKey::Name(name) => self.records.values().find(|r| &r.name == name),
        };
        found
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("pokemon/{key}")))
    }

    async fn fetch_evolution_chain(&self, species_id: u32) -> Result<ChainLink, ApiError> {
        self.chains
            .get(&species_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("pokemon-species/{species_id}")))
    }
}

/// Creates a test App backed by the kanto stub, cursor at id 1.
pub fn test_app() -> App {
    App::new(Arc::new(StubSource::kanto_starters()))
}
