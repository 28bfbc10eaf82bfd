//! # TitleBar Component
//!
//! Top status bar: app name, the navigation cursor and the current status.
//!
//! The title text changes based on state:
//!
//! 1. **Loading**: `"Pokédex #25 | Loading #26... | ⟳"`
//! 2. **Status message**: `"Pokédex #25 | Lookup failed"`
//! 3. **Default**: `"Pokédex #25"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar. Purely presentational; all fields are props.
pub struct TitleBar {
    /// Navigation cursor (id of the species on screen)
    pub cursor: u32,
    /// Status message (e.g. "Loading #26...")
    pub status_message: String,
    /// Whether a request is in flight
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(cursor: u32, status_message: String, is_loading: bool) -> Self {
        Self {
            cursor,
            status_message,
            is_loading,
        }
    }

    fn text(&self) -> String {
        if self.is_loading {
            format!("Pokédex #{} | {} | ⟳", self.cursor, self.status_message)
        } else if self.status_message.is_empty() {
            format!("Pokédex #{}", self.cursor)
        } else {
            format!("Pokédex #{} | {}", self.cursor, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
