//! # SpeciesCard Component
//!
//! The fixed two-panel card: the sprite reference on the left ("camera")
//! and the stats on the right. Terminals can't show the PNG, so the sprite
//! panel shows its URL and alt text instead.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::pokeapi::SpeciesRecord;
use crate::tui::component::Component;

/// Shown when a record has no sprite, or nothing is displayed.
pub const PLACEHOLDER_SPRITE_URL: &str = "https://via.placeholder.com/150";

pub struct SpeciesCard<'a> {
    pub record: Option<&'a SpeciesRecord>,
    pub is_loading: bool,
}

impl<'a> SpeciesCard<'a> {
    pub fn new(record: Option<&'a SpeciesRecord>, is_loading: bool) -> Self {
        Self { record, is_loading }
    }
}

fn labelled(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(value),
    ])
}

/// Text for the stats panel.
pub fn stats_lines(record: &SpeciesRecord) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("{} (ID: {})", record.name.to_uppercase(), record.id),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        labelled("Type: ", record.types.join(", ")),
        labelled("Height: ", format!("{} m", record.height_m())),
        labelled("Weight: ", format!("{} kg", record.weight_kg())),
        labelled("Abilities: ", record.abilities.join(", ")),
    ]
}

/// Text for the sprite panel.
pub fn sprite_lines(record: Option<&SpeciesRecord>) -> Vec<Line<'static>> {
    let url = record
        .and_then(|r| r.sprite_url.clone())
        .unwrap_or_else(|| PLACEHOLDER_SPRITE_URL.to_string());
    let mut lines = vec![Line::from(Span::styled(
        url,
        Style::default().fg(Color::Cyan),
    ))];
    if let Some(record) = record {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Image of {}", record.name),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

impl Component for SpeciesCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [sprite_area, stats_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(area);

        let sprite = Paragraph::new(sprite_lines(self.record))
            .block(Block::bordered().title("Sprite"))
            .wrap(Wrap { trim: true });
        frame.render_widget(sprite, sprite_area);

        let body = match self.record {
            Some(record) => stats_lines(record),
            None if self.is_loading => vec![Line::from("Loading...")],
            None => vec![Line::from("Nothing to show. Use ← → or type an ID.")],
        };
        let stats = Paragraph::new(body)
            .block(Block::bordered().title("Stats"))
            .wrap(Wrap { trim: true });
        frame.render_widget(stats, stats_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_stats_lines_format() {
        let mut bulbasaur = record(1, "bulbasaur");
        bulbasaur.types = vec!["grass".to_string(), "poison".to_string()];
        bulbasaur.abilities = vec!["overgrow".to_string(), "chlorophyll".to_string()];
        bulbasaur.height_dm = 7;
        bulbasaur.weight_hg = 69;

        let lines: Vec<String> = stats_lines(&bulbasaur).iter().map(line_text).collect();
        assert_eq!(lines[0], "BULBASAUR (ID: 1)");
        assert_eq!(lines[2], "Type: grass, poison");
        assert_eq!(lines[3], "Height: 0.7 m");
        assert_eq!(lines[4], "Weight: 6.9 kg");
        assert_eq!(lines[5], "Abilities: overgrow, chlorophyll");
    }

    #[test]
    fn test_sprite_falls_back_to_placeholder() {
        let lines = sprite_lines(Some(&record(10, "caterpie")));
        assert_eq!(line_text(&lines[0]), PLACEHOLDER_SPRITE_URL);
        assert_eq!(line_text(&lines[2]), "Image of caterpie");

        let lines = sprite_lines(None);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_render_card() {
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let pikachu = record(25, "pikachu");
        let mut card = SpeciesCard::new(Some(&pikachu), false);
        terminal.draw(|f| card.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("PIKACHU (ID: 25)"));
        assert!(text.contains("Sprite"));
    }
}
