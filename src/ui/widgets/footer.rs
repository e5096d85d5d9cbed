// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer bar with the actions available in the current state.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = if app.show_disclaimer {
        Line::from(vec![
            Span::raw("Press "),
            key("Enter"),
            Span::raw(" to acknowledge, "),
            key("Esc"),
            Span::raw(" to quit."),
        ])
    } else {
        match app.state {
            AppState::Idle => Line::from(vec![
                Span::raw("Type a URL, "),
                key("Enter"),
                Span::raw(" to scan, "),
                key("Esc"),
                Span::raw(" to quit."),
            ]),
            AppState::Scanning => Line::from("Scanning... Press Esc to quit."),
            AppState::Finished => Line::from(vec![
                key("[N]"),
                Span::raw("ew scan, "),
                key("[R]"),
                Span::raw("e-scan, "),
                key("[T]"),
                Span::raw("xt/"),
                key("[M]"),
                Span::raw("d/"),
                key("[J]"),
                Span::raw("son export, "),
                key("Tab"),
                Span::raw(" switches tabs, "),
                key("[Q]"),
                Span::raw("uit"),
            ]),
        }
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
