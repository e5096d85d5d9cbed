// src/ui/widgets/input.rs

use crate::app::{App, AppState};
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the target URL input box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title("Target URL (scheme optional, defaults to https)");
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // The cursor is only meaningful while the prompt accepts typing.
    if matches!(app.state, AppState::Idle) && !app.show_disclaimer {
        frame.set_cursor_position(Position::new(
            area.x + app.input.len() as u16 + 1,
            area.y + 1,
        ));
    }
}
