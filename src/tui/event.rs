use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Controls (translated to core actions)
    Quit,
    ForceQuit,
    Previous,
    Next,
    Evolve,
    Reset,
    Submit,

    // TUI-local events (handled by the ID input box)
    InputChar(char),
    Paste(String),
    Backspace,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Ignore key releases/repeats reported by the keyboard enhancement protocol
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Reset),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Left) => Some(TuiEvent::Previous),
                (_, KeyCode::Right) => Some(TuiEvent::Next),
                (_, KeyCode::Up) => Some(TuiEvent::Evolve),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_arrow_keys_map_to_controls() {
        assert_eq!(translate(key(KeyCode::Left, KeyModifiers::NONE)), Some(TuiEvent::Previous));
        assert_eq!(translate(key(KeyCode::Right, KeyModifiers::NONE)), Some(TuiEvent::Next));
        assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)), Some(TuiEvent::Evolve));
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(
            translate(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Reset)
        );
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('r'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('r'))
        );
    }

    #[test]
    fn test_resize_and_paste() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
        assert_eq!(
            translate(Event::Paste("151".to_string())),
            Some(TuiEvent::Paste("151".to_string()))
        );
    }
}
