//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into `core::Action` values and runs the
//! `Effect`s the reducer asks for.
//!
//! Lookups run as tokio tasks and report back over an mpsc channel as
//! `Action::LookupFinished` / `Action::EvolutionResolved`. The loop drains
//! that channel between input batches; stale answers are filtered by the
//! reducer, not here.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: polls every ~100ms so the title bar catches the answer quickly.
//! - **Idle**: sleeps up to 500ms and only redraws on events or finished lookups.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::evolution::resolve_next_evolution;
use crate::core::state::App;
use crate::pokeapi::{ApiError, LookupKey, PokeApiClient, PokemonSource, SpeciesRecord};
use crate::tui::component::EventHandler;
use crate::tui::components::{IdInput, IdInputEvent, NotificationEvent, NotificationKeys};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub id_input: IdInput,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            id_input: IdInput::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement lets us drop key-release events; terminals that
        // don't support it ignore the escape sequence
        execute!(
            stdout(),
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

/// Build the PokéAPI source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Result<Arc<dyn PokemonSource>, ApiError> {
    let client = PokeApiClient::new(config.base_url.clone(), config.timeout)?;
    Ok(Arc::new(client))
}

/// Maps a terminal event onto a core action, for the events that are controls.
fn control_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Previous => Some(Action::Previous),
        TuiEvent::Next => Some(Action::Next),
        TuiEvent::Evolve => Some(Action::Evolve),
        TuiEvent::Reset => Some(Action::Reset),
        _ => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config).map_err(|e| std::io::Error::other(e.to_string()))?;
    info!("Using data source: {}", source.name());

    let mut app = App::new(source);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let startup = update(&mut app, Action::Goto(config.start_id));
    run_effect(&app, startup, &tx);

    let mut needs_redraw = true;

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            std::time::Duration::from_millis(100)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits, even with an overlay open
            if matches!(event, TuiEvent::ForceQuit) {
                break 'main;
            }

            // Notification overlay swallows everything until dismissed
            if app.notification.is_some() {
                if let Some(NotificationEvent::Dismiss) = NotificationKeys.handle_event(&event) {
                    update(&mut app, Action::DismissNotification);
                }
                continue;
            }

            let action = match control_action(&event) {
                Some(action) => action,
                None => match tui.id_input.handle_event(&event) {
                    Some(IdInputEvent::Submit(text)) => Action::SubmitId(text),
                    _ => continue,
                },
            };

            if action == Action::Reset {
                tui.id_input.clear();
            }
            debug!("Dispatching {:?}", action);
            let effect = update(&mut app, action);
            if run_effect(&app, effect, &tx) {
                break 'main;
            }
        }

        // Handle background task actions (finished lookups)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if run_effect(&app, effect, &tx) {
                break 'main;
            }
        }
    }

    ratatui::restore();
    info!("Pokédex shutting down at #{}", app.cursor);
    Ok(())
}

/// Runs an effect. Returns true when the app should quit.
fn run_effect(app: &App, effect: Effect, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Lookup { ticket, key } => {
            spawn_lookup(app.source.clone(), ticket, key, tx.clone());
            false
        }
        Effect::ResolveEvolution { ticket, current } => {
            spawn_evolution(app.source.clone(), ticket, current, tx.clone());
            false
        }
    }
}

fn spawn_lookup(
    source: Arc<dyn PokemonSource>,
    ticket: u64,
    key: LookupKey,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning lookup for {} (ticket={})", key, ticket);
    tokio::spawn(async move {
        let result = source.fetch_pokemon(&key).await;
        if let Err(e) = &result {
            warn!("Lookup of {} failed: {}", key, e);
        }
        if tx.send(Action::LookupFinished { ticket, result }).is_err() {
            warn!("Failed to send lookup result (ticket={}): receiver dropped", ticket);
        }
    });
}

fn spawn_evolution(
    source: Arc<dyn PokemonSource>,
    ticket: u64,
    current: SpeciesRecord,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning evolution lookup for {} (ticket={})", current.name, ticket);
    tokio::spawn(async move {
        let outcome = resolve_next_evolution(source.as_ref(), &current).await;
        if tx.send(Action::EvolutionResolved { ticket, outcome }).is_err() {
            warn!("Failed to send evolution outcome (ticket={}): receiver dropped", ticket);
        }
    });
}
