//! # Application State
//!
//! Core business state for the viewer. Domain data only; presentation state
//! (input buffer, overlay layout) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn PokemonSource>   // where lookups go
//! ├── cursor: u32                      // id of the species on screen
//! ├── current: Option<SpeciesRecord>   // the species on screen
//! ├── status_message: String           // title bar text
//! ├── is_loading: bool                 // a request is in flight
//! ├── notification: Option<String>     // blocking message for the user
//! └── latest_ticket: u64               // newest request issued
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::DEFAULT_START_ID;
use crate::pokeapi::{PokemonSource, SpeciesRecord};

pub struct App {
    pub source: Arc<dyn PokemonSource>,
    /// Navigation cursor. Only moves when a lookup succeeds; the startup id
    /// goes through `Action::Goto` like any other request.
    pub cursor: u32,
    pub current: Option<SpeciesRecord>,
    pub status_message: String,
    pub is_loading: bool,
    pub notification: Option<String>,
    /// Ticket of the newest request; responses with older tickets are stale.
    pub latest_ticket: u64,
}

impl App {
    pub fn new(source: Arc<dyn PokemonSource>) -> Self {
        Self {
            source,
            cursor: DEFAULT_START_ID,
            current: None,
            status_message: String::from("Welcome to the Pokédex!"),
            is_loading: false,
            notification: None,
            latest_ticket: 0,
        }
    }

    /// Issues a fresh ticket, invalidating every request still in flight.
    pub fn next_ticket(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    pub fn is_current_ticket(&self, ticket: u64) -> bool {
        ticket == self.latest_ticket
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to the Pokédex!");
        assert_eq!(app.cursor, 1);
        assert!(app.current.is_none());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_tickets_invalidate_older_requests() {
        let mut app = test_app();
        let first = app.next_ticket();
        let second = app.next_ticket();
        assert!(!app.is_current_ticket(first));
        assert!(app.is_current_ticket(second));
    }
}
