//! PokéAPI wire types and the domain record built from them.
//!
//! Only the fields the viewer renders are modelled; serde ignores the rest
//! of the (very large) payloads.

use serde::Deserialize;

/// `{ "name": ..., "url": ... }` as used all over PokéAPI.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Unnamed resource reference (`{ "url": ... }`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiResource {
    pub url: String,
}

// ============================================================================
// /pokemon/{id or name}
// ============================================================================

#[derive(Deserialize, Debug, Clone)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AbilitySlot {
    pub slot: u8,
    #[serde(default)]
    pub is_hidden: bool,
    pub ability: NamedResource,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

// ============================================================================
// /pokemon-species/{id} and /evolution-chain/{id}
// ============================================================================

#[derive(Deserialize, Debug, Clone)]
pub struct SpeciesResponse {
    pub id: u32,
    pub name: String,
    pub evolution_chain: Option<ApiResource>,
}

/// One node of an evolution tree. `evolves_to` holds every possible next
/// stage; most families have zero or one, some (eevee) have many.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EvolutionChainResponse {
    pub id: u32,
    pub chain: ChainLink,
}

// ============================================================================
// Domain record
// ============================================================================

/// Everything the viewer needs to render one Pokémon.
///
/// Built fresh from every successful lookup and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Ability names in slot order (hidden abilities included).
    pub abilities: Vec<String>,
    pub height_dm: u32,
    pub weight_hg: u32,
    pub sprite_url: Option<String>,
}

impl SpeciesRecord {
    pub fn height_m(&self) -> f64 {
        self.height_dm as f64 / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_hg as f64 / 10.0
    }
}

impl From<PokemonResponse> for SpeciesRecord {
    fn from(mut raw: PokemonResponse) -> Self {
        raw.types.sort_by_key(|t| t.slot);
        raw.abilities.sort_by_key(|a| a.slot);
        Self {
            id: raw.id,
            name: raw.name,
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: raw.abilities.into_iter().map(|a| a.ability.name).collect(),
            height_dm: raw.height,
            weight_hg: raw.weight,
            sprite_url: raw.sprites.front_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "types": [
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}},
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}}
        ],
        "abilities": [
            {"slot": 3, "is_hidden": true, "ability": {"name": "chlorophyll", "url": ""}},
            {"slot": 1, "is_hidden": false, "ability": {"name": "overgrow", "url": ""}}
        ],
        "sprites": {"front_default": "https://example.test/1.png", "back_default": null}
    }"#;

    #[test]
    fn test_pokemon_response_into_record() {
        let raw: PokemonResponse = serde_json::from_str(BULBASAUR).unwrap();
        let record = SpeciesRecord::from(raw);
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "bulbasaur");
        assert_eq!(record.types, vec!["grass", "poison"]);
        assert_eq!(record.abilities, vec!["overgrow", "chlorophyll"]);
        assert_eq!(record.sprite_url.as_deref(), Some("https://example.test/1.png"));
    }

    #[test]
    fn test_unit_conversion() {
        let raw: PokemonResponse = serde_json::from_str(BULBASAUR).unwrap();
        let record = SpeciesRecord::from(raw);
        assert_eq!(record.height_m(), 0.7);
        assert_eq!(record.weight_kg(), 6.9);
        assert_eq!(format!("{} m", record.height_m()), "0.7 m");
    }

    #[test]
    fn test_missing_sprite_is_none() {
        let json = r#"{"id": 10, "name": "caterpie", "height": 3, "weight": 29,
                       "types": [], "abilities": [], "sprites": {"front_default": null}}"#;
        let record = SpeciesRecord::from(serde_json::from_str::<PokemonResponse>(json).unwrap());
        assert!(record.sprite_url.is_none());
    }

    #[test]
    fn test_chain_link_nested_parse() {
        let json = r#"{
            "id": 1,
            "chain": {
                "species": {"name": "bulbasaur", "url": ""},
                "is_baby": false,
                "evolves_to": [{
                    "species": {"name": "ivysaur", "url": ""},
                    "evolves_to": [{"species": {"name": "venusaur", "url": ""}, "evolves_to": []}]
                }]
            }
        }"#;
        let chain: EvolutionChainResponse = serde_json::from_str(json).unwrap();
        assert_eq!(chain.chain.species.name, "bulbasaur");
        assert_eq!(chain.chain.evolves_to[0].evolves_to[0].species.name, "venusaur");
    }

    #[test]
    fn test_species_without_chain() {
        let json = r#"{"id": 999, "name": "missingno", "evolution_chain": null}"#;
        let species: SpeciesResponse = serde_json::from_str(json).unwrap();
        assert!(species.evolution_chain.is_none());
    }
}
