//! # IdInput Component
//!
//! Single-line box where the user types a Pokémon ID. Any text is accepted
//! while typing; validation happens in the core when the ID is submitted.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the IdInput
#[derive(Debug, Clone, PartialEq)]
pub enum IdInputEvent {
    /// Enter pressed; carries the raw buffer.
    Submit(String),
    ContentChanged,
}

pub struct IdInput {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Render without a cursor while an overlay is open (Prop)
    pub dimmed: bool,
}

impl Default for IdInput {
    fn default() -> Self {
        Self::new()
    }
}

impl IdInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl EventHandler for IdInput {
    type Event = IdInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<IdInputEvent> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.push(*c);
                Some(IdInputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line box: drop newlines from pasted text
                self.buffer
                    .extend(text.chars().filter(|c| !c.is_control()));
                Some(IdInputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                self.buffer.pop().map(|_| IdInputEvent::ContentChanged)
            }
            TuiEvent::Submit => Some(IdInputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

impl Component for IdInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.buffer.as_str())
            .block(Block::bordered().title("ID (Enter to search)"));
        frame.render_widget(paragraph, area);

        if !self.dimmed && area.width > 2 && area.height > 2 {
            let max_x = area.x + area.width - 2;
            let x = (area.x + 1 + self.buffer.width() as u16).min(max_x);
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}
