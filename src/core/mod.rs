//! # Core Application Logic
//!
//! The viewer's business logic. It knows nothing about any specific UI
//! technology and never touches the network directly: lookups go through
//! the [`PokemonSource`](crate::pokeapi::PokemonSource) trait.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (cursor, card) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Evolution resolver   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  PokéAPI   │
//!            │  Adapter   │            │   client   │
//!            │ (ratatui)  │            │ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, including the navigation cursor
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`evolution`]: Chain flattening and the evolve policy
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod evolution;
pub mod state;
