//! # Notification Overlay
//!
//! Modal box for blocking messages ("Pokémon not found", "already at its
//! final evolution stage", ...). While open it swallows every key; Enter,
//! Esc or Space dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    Dismiss,
}

pub struct Notification<'a> {
    pub message: &'a str,
}

impl<'a> Notification<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

/// Centers a `width` x `height` box inside `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

impl Component for Notification<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = (self.message.chars().count() as u16 + 4).clamp(30, 60);
        let popup = centered(area, width, 6);

        let body = vec![
            Line::from(self.message),
            Line::default(),
            Line::from("[Enter] OK").style(Style::default().fg(Color::DarkGray)),
        ];
        let paragraph = Paragraph::new(body)
            .block(
                Block::bordered()
                    .title("NOTICE")
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}

/// Overlay input routing; stateless, so it handles events as a unit struct.
pub struct NotificationKeys;

impl EventHandler for NotificationKeys {
    type Event = NotificationEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NotificationEvent> {
        match event {
            TuiEvent::Submit | TuiEvent::Quit | TuiEvent::InputChar(' ') => {
                Some(NotificationEvent::Dismiss)
            }
            _ => None,
        }
    }
}
