//! # Actions
//!
//! Everything that can happen in the viewer becomes an `Action`.
//! User presses →? That's `Action::Next`.
//! A lookup comes back? That's `Action::LookupFinished { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns the `Effect` the adapter must run. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every request carries a ticket. A response is applied only if its ticket
//! is still the latest one, so a slow answer can never overwrite a newer one.

use log::{debug, info, warn};

use crate::core::evolution::EvolutionOutcome;
use crate::core::state::App;
use crate::pokeapi::{ApiError, LookupKey, SpeciesRecord};

pub const MSG_NOT_FOUND: &str = "Pokémon not found. Please check the ID.";
pub const MSG_INVALID_ID: &str = "Please enter a valid Pokémon ID.";
pub const MSG_NO_EVOLUTIONS: &str = "This Pokémon has no known evolutions.";
pub const MSG_FINAL_STAGE: &str = "This Pokémon is already at its final evolution stage.";
pub const MSG_CHAIN_UNAVAILABLE: &str = "Could not fetch evolution data.";
pub const MSG_NOTHING_DISPLAYED: &str = "No Pokémon is displayed yet.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Jump straight to an id (startup).
    Goto(u32),
    Next,
    Previous,
    /// Raw text from the ID input box.
    SubmitId(String),
    Evolve,
    Reset,
    LookupFinished {
        ticket: u64,
        result: Result<SpeciesRecord, ApiError>,
    },
    EvolutionResolved {
        ticket: u64,
        outcome: EvolutionOutcome,
    },
    DismissNotification,
    Quit,
}

/// Work the adapter has to do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Lookup { ticket: u64, key: LookupKey },
    ResolveEvolution { ticket: u64, current: SpeciesRecord },
}

/// Classification of the text typed into the ID box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdInput {
    Blank,
    Valid(u32),
    Invalid,
}

/// Only positive integers are accepted; surrounding whitespace is ignored.
pub fn parse_species_id(input: &str) -> IdInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return IdInput::Blank;
    }
    match trimmed.parse::<u32>() {
        Ok(id) if id > 0 => IdInput::Valid(id),
        _ => IdInput::Invalid,
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Goto(id) if id > 0 => request_lookup(app, LookupKey::Id(id)),
        Action::Goto(_) => Effect::None,
        Action::Next => match app.cursor.checked_add(1) {
            Some(id) => request_lookup(app, LookupKey::Id(id)),
            None => Effect::None,
        },
        Action::Previous => {
            if app.cursor > 1 {
                request_lookup(app, LookupKey::Id(app.cursor - 1))
            } else {
                Effect::None
            }
        }
        Action::SubmitId(text) => match parse_species_id(&text) {
            IdInput::Valid(id) => request_lookup(app, LookupKey::Id(id)),
            IdInput::Blank => Effect::None,
            IdInput::Invalid => {
                debug!("Rejected ID input {:?}", text);
                notify(app, MSG_INVALID_ID);
                Effect::None
            }
        },
        Action::Evolve => match app.current.clone() {
            Some(current) => {
                let ticket = app.next_ticket();
                app.is_loading = true;
                app.status_message = format!("Looking for {}'s evolution...", current.name);
                Effect::ResolveEvolution { ticket, current }
            }
            None => {
                notify(app, MSG_NOTHING_DISPLAYED);
                Effect::None
            }
        },
        Action::Reset => {
            info!("Reset requested");
            app.current = None;
            request_lookup(app, LookupKey::Id(1))
        }
        Action::LookupFinished { ticket, result } => {
            if !accept(app, ticket) {
                return Effect::None;
            }
            match result {
                Ok(record) => show(app, record),
                Err(e) => {
                    warn!("Lookup failed: {}", e);
                    app.status_message = String::from("Lookup failed");
                    notify(app, MSG_NOT_FOUND);
                }
            }
            Effect::None
        }
        Action::EvolutionResolved { ticket, outcome } => {
            if !accept(app, ticket) {
                return Effect::None;
            }
            app.status_message.clear();
            match outcome {
                EvolutionOutcome::Evolved(record) => show(app, record),
                EvolutionOutcome::ChainUnavailable(e) => {
                    debug!("Chain unavailable: {}", e);
                    notify(app, MSG_CHAIN_UNAVAILABLE);
                }
                EvolutionOutcome::NoEvolutions => notify(app, MSG_NO_EVOLUTIONS),
                EvolutionOutcome::FinalStage => notify(app, MSG_FINAL_STAGE),
                EvolutionOutcome::NotInChain => {}
                EvolutionOutcome::NextNotFound { name, error } => {
                    warn!("Lookup of next stage {} failed: {}", name, error);
                    notify(app, MSG_NOT_FOUND);
                }
            }
            Effect::None
        }
        Action::DismissNotification => {
            app.notification = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn request_lookup(app: &mut App, key: LookupKey) -> Effect {
    let ticket = app.next_ticket();
    app.is_loading = true;
    app.status_message = format!("Loading #{key}...");
    Effect::Lookup { ticket, key }
}

/// Clears the loading flag for the latest ticket; false for stale ones.
fn accept(app: &mut App, ticket: u64) -> bool {
    if !app.is_current_ticket(ticket) {
        debug!(
            "Dropping stale response (ticket {}, latest {})",
            ticket, app.latest_ticket
        );
        return false;
    }
    app.is_loading = false;
    true
}

fn show(app: &mut App, record: SpeciesRecord) {
    info!("Showing {} (id={})", record.name, record.id);
    app.cursor = record.id;
    app.status_message.clear();
    app.current = Some(record);
}

fn notify(app: &mut App, message: &str) {
    app.notification = Some(message.to_string());
}
