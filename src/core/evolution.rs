//! # Evolution Resolver
//!
//! Turns an evolution tree into a single line of stage names and decides
//! which stage comes after the one on screen.
//!
//! ```text
//!   eevee ─┬─ vaporeon          flatten_chain()      next_stage(.., "eevee")
//!          ├─ jolteon     ───────────────────▶  ["eevee", "vaporeon"]  ──▶ Next("vaporeon")
//!          └─ flareon
//! ```
//!
//! Only the first branch at every node is followed. Alternate branches are
//! dropped without notice.

use log::{debug, info, warn};

use crate::pokeapi::{ApiError, ChainLink, LookupKey, PokemonSource, SpeciesRecord};

/// Flattens an evolution tree into stage names, root first, following the
/// first child at each node.
pub fn flatten_chain(root: &ChainLink) -> Vec<String> {
    let mut stages = Vec::new();
    let mut node = Some(root);
    while let Some(link) = node {
        stages.push(link.species.name.clone());
        node = link.evolves_to.first();
    }
    stages
}

/// What the evolve control should do for the species on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionStep<'a> {
    /// The family has a single stage.
    NoEvolutions,
    /// The current name is missing from its own chain. Nothing happens.
    NotInChain,
    /// Already the last stage of the (first-branch) line.
    FinalStage,
    /// The stage to look up next.
    Next(&'a str),
}

/// Locates `current` in `stages` by exact name and picks its successor.
pub fn next_stage<'a>(stages: &'a [String], current: &str) -> EvolutionStep<'a> {
    if stages.len() <= 1 {
        return EvolutionStep::NoEvolutions;
    }
    match stages.iter().position(|name| name == current) {
        None => EvolutionStep::NotInChain,
        Some(index) if index + 1 == stages.len() => EvolutionStep::FinalStage,
        Some(index) => EvolutionStep::Next(&stages[index + 1]),
    }
}

/// Result of a whole evolve request, ready to be fed back into `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum EvolutionOutcome {
    /// The chain could not be fetched.
    ChainUnavailable(ApiError),
    NoEvolutions,
    NotInChain,
    FinalStage,
    /// The next stage was looked up successfully.
    Evolved(SpeciesRecord),
    /// The next stage's name was found but its lookup failed.
    NextNotFound { name: String, error: ApiError },
}

/// Runs the evolve pipeline for `current`: chain fetch, flatten, policy,
/// then a fresh lookup of the successor.
pub async fn resolve_next_evolution(
    source: &dyn PokemonSource,
    current: &SpeciesRecord,
) -> EvolutionOutcome {
    let chain = match source.fetch_evolution_chain(current.id).await {
        Ok(chain) => chain,
        Err(e) => {
            warn!("Evolution chain fetch failed for {}: {}", current.name, e);
            return EvolutionOutcome::ChainUnavailable(e);
        }
    };

    let stages = flatten_chain(&chain);
    debug!("Evolution line for {}: {:?}", current.name, stages);

    match next_stage(&stages, &current.name) {
        EvolutionStep::NoEvolutions => EvolutionOutcome::NoEvolutions,
        EvolutionStep::FinalStage => EvolutionOutcome::FinalStage,
        EvolutionStep::NotInChain => {
            // Happens when the pokemon name differs from its species name
            // (e.g. "deoxys-normal" vs "deoxys").
            warn!(
                "{} is not part of its own evolution line {:?}; ignoring evolve",
                current.name, stages
            );
            EvolutionOutcome::NotInChain
        }
        EvolutionStep::Next(name) => {
            info!("Evolving {} into {}", current.name, name);
            match source.fetch_pokemon(&LookupKey::name(name)).await {
                Ok(record) => EvolutionOutcome::Evolved(record),
                Err(error) => EvolutionOutcome::NextNotFound {
                    name: name.to_string(),
                    error,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubSource, chain, record};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flatten_single_node() {
        let root = chain("pikachu", vec![]);
        assert_eq!(flatten_chain(&root), vec!["pikachu"]);
    }

    #[test]
    fn test_flatten_linear_chain_root_to_leaf() {
        let root = chain(
            "bulbasaur",
            vec![chain("ivysaur", vec![chain("venusaur", vec![])])],
        );
        assert_eq!(flatten_chain(&root), vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn test_flatten_takes_first_branch_only() {
        let root = chain(
            "oddish",
            vec![
                chain("gloom", vec![chain("vileplume", vec![]), chain("bellossom", vec![])]),
                chain("not-a-real-branch", vec![]),
            ],
        );
        assert_eq!(flatten_chain(&root), vec!["oddish", "gloom", "vileplume"]);
    }

    #[test]
    fn test_next_stage_from_base() {
        let stages = names(&["bulbasaur", "ivysaur", "venusaur"]);
        assert_eq!(next_stage(&stages, "bulbasaur"), EvolutionStep::Next("ivysaur"));
        assert_eq!(next_stage(&stages, "ivysaur"), EvolutionStep::Next("venusaur"));
    }

    #[test]
    fn test_next_stage_final() {
        let stages = names(&["bulbasaur", "ivysaur", "venusaur"]);
        assert_eq!(next_stage(&stages, "venusaur"), EvolutionStep::FinalStage);
    }

    #[test]
    fn test_next_stage_single_member_family() {
        let stages = names(&["pikachu"]);
        assert_eq!(next_stage(&stages, "pikachu"), EvolutionStep::NoEvolutions);
        assert_eq!(next_stage(&[], "pikachu"), EvolutionStep::NoEvolutions);
    }

    #[test]
    fn test_next_stage_name_not_in_chain() {
        let stages = names(&["deoxys", "imaginary"]);
        assert_eq!(next_stage(&stages, "deoxys-normal"), EvolutionStep::NotInChain);
    }

    #[tokio::test]
    async fn test_resolve_evolves_to_next_stage() {
        let source = StubSource::kanto_starters();
        let current = record(1, "bulbasaur");
        let outcome = resolve_next_evolution(&source, &current).await;
        assert_eq!(outcome, EvolutionOutcome::Evolved(record(2, "ivysaur")));
    }

    #[tokio::test]
    async fn test_resolve_final_stage() {
        let source = StubSource::kanto_starters();
        let outcome = resolve_next_evolution(&source, &record(3, "venusaur")).await;
        assert_eq!(outcome, EvolutionOutcome::FinalStage);
    }

    #[tokio::test]
    async fn test_resolve_chain_unavailable() {
        let source = StubSource::kanto_starters();
        let outcome = resolve_next_evolution(&source, &record(150, "mewtwo")).await;
        assert!(matches!(outcome, EvolutionOutcome::ChainUnavailable(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_resolve_next_lookup_failure() {
        let mut source = StubSource::kanto_starters();
        source.records.remove(&2);
        let outcome = resolve_next_evolution(&source, &record(1, "bulbasaur")).await;
        assert!(matches!(
            outcome,
            EvolutionOutcome::NextNotFound { ref name, .. } if name == "ivysaur"
        ));
    }

    #[tokio::test]
    async fn test_resolve_name_mismatch_is_silent() {
        let source = StubSource::kanto_starters();
        let outcome = resolve_next_evolution(&source, &record(1, "bulbasaur-mega")).await;
        assert_eq!(outcome, EvolutionOutcome::NotInChain);
    }
}
