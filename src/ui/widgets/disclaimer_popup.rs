// src/ui/widgets/disclaimer_popup.rs

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the educational-notice popup on top of the existing UI.
///
/// The `Clear` widget wipes the popup area first so the background UI does
/// not bleed through the modal.
pub fn render_disclaimer_popup(frame: &mut Frame, area: Rect) {
    let disclaimer_text = Text::from(vec![
        Line::from("EDUCATIONAL NOTICE".bold().yellow()),
        Line::from(""),
        Line::from(
            "Rampart RS performs a lightweight, educational baseline assessment of a single \
             web site: HTTPS usage and enforcement, common security response headers, and \
             cookie protective flags.",
        ),
        Line::from(""),
        Line::from(
            "It is a learning aid, not a vulnerability scanner, and it does not replace \
             professional security testing.",
        ),
        Line::from(""),
        Line::from(
            "Only assess sites you own, control, or are explicitly authorized to examine. \
             Unauthorized probing of third-party systems may be illegal in your jurisdiction.",
        ),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to acknowledge and continue".bold()),
    ]);

    let block = Block::default()
        .title("Disclaimer")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(70, 70, area);

    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Centers a rectangle of the given percentage size within `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
