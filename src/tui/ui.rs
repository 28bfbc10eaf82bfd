use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Notification, SpeciesCard, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const KEY_HINTS: &str = "← prev  → next  ↑ evolve  Ctrl+R reset  Enter search  Esc quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3), Length(1)]);
    let [title_area, card_area, input_area, hint_area] = layout.areas(frame.area());

    TitleBar::new(app.cursor, app.status_message.clone(), app.is_loading)
        .render(frame, title_area);

    SpeciesCard::new(app.current.as_ref(), app.is_loading).render(frame, card_area);

    tui.id_input.dimmed = app.notification.is_some();
    tui.id_input.render(frame, input_area);

    frame.render_widget(
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        hint_area,
    );

    if let Some(message) = &app.notification {
        Notification::new(message).render(frame, frame.area());
    }
}
