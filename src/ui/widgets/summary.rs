// src/ui/widgets/summary.rs

use crate::app::{App, AppState, ExportStatus};
use crate::core::models::RiskLevel;
use crate::core::risk;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Maximum heuristic score: five headers plus HTTPS plus the redirect.
const MAX_SCORE: usize = 7;

/// Renders the summary side panel: the attention level, a score gauge and
/// the key counters. Content only appears once a scan has finished.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    if !matches!(app.state, AppState::Finished) {
        return;
    }

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Attention level
            Constraint::Length(1), // Score gauge
            Constraint::Length(2), // Spacer
            Constraint::Length(5), // Counters
            Constraint::Length(2), // Spacer
            Constraint::Min(0),    // Export status
        ])
        .split(area);

    // A failed scan has no findings to summarize.
    if let Some(error) = &app.scan_error {
        let error_text = Text::from(vec![
            Line::from("SCAN FAILED".bold().red()),
            Line::from(""),
            Line::from(error.as_str()),
        ]);
        let paragraph = Paragraph::new(error_text).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, summary_chunks[0].union(summary_chunks[3]));
        return;
    }
    let Some(report) = &app.scan_report else {
        return;
    };

    // --- Attention level ---
    let level_style = match report.risk.level {
        RiskLevel::Low => Style::default().fg(Color::Green),
        RiskLevel::Medium => Style::default().fg(Color::Yellow),
        RiskLevel::High => Style::default().fg(Color::Red),
    };
    let level_text = Text::from(vec![
        Line::from("Attention Level".bold()),
        Line::from(report.risk.level.to_string()).style(level_style.bold()),
    ]);
    frame.render_widget(
        Paragraph::new(level_text).alignment(Alignment::Center),
        summary_chunks[0],
    );

    // --- Score gauge ---
    let score = risk::heuristic_score(&report.transport, &report.headers);
    let percent = (score * 100 / MAX_SCORE) as u16;
    let gauge = Gauge::default()
        .percent(percent)
        .label(format!("{score}/{MAX_SCORE}"))
        .style(level_style);
    frame.render_widget(gauge, summary_chunks[1]);

    // --- Counters ---
    let headers_ok = risk::headers_ok_count(&report.headers);
    let cookie_issues = risk::cookie_issue_count(&report.cookies);
    let check_mark = |passed: bool| {
        if passed {
            Span::styled("[ok] ", Style::default().fg(Color::Green))
        } else {
            Span::styled("[!!] ", Style::default().fg(Color::Red))
        }
    };
    let counters = vec![
        Line::from(vec![
            check_mark(report.transport.uses_https),
            Span::raw("Uses HTTPS"),
        ]),
        Line::from(vec![
            check_mark(report.transport.redirects_to_https),
            Span::raw("Redirects HTTP to HTTPS"),
        ]),
        Line::from(vec![
            check_mark(headers_ok == report.headers.len()),
            Span::raw(format!("Security headers: {headers_ok}/{} ok", report.headers.len())),
        ]),
        Line::from(vec![
            check_mark(cookie_issues == 0),
            Span::raw(format!("Cookie issues: {cookie_issues}")),
        ]),
    ];
    let counters_block = Block::default().title("CHECKS".bold());
    frame.render_widget(
        Paragraph::new(counters).block(counters_block),
        summary_chunks[3],
    );

    // --- Export status ---
    let export_line = match &app.export_status {
        ExportStatus::Idle => Line::from(""),
        ExportStatus::Success(message) => {
            Line::from(message.as_str()).style(Style::default().fg(Color::Green))
        }
        ExportStatus::Error(message) => {
            Line::from(message.as_str()).style(Style::default().fg(Color::Red))
        }
    };
    frame.render_widget(
        Paragraph::new(export_line).wrap(Wrap { trim: true }),
        summary_chunks[5],
    );
}
