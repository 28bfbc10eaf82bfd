pub mod client;
pub mod source;
pub mod types;

pub use client::{DEFAULT_BASE_URL, PokeApiClient};
pub use source::{ApiError, LookupKey, PokemonSource};
pub use types::{ChainLink, NamedResource, SpeciesRecord};
