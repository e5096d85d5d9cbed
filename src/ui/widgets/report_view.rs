// src/ui/widgets/report_view.rs

use crate::app::{App, AppState, ReportTab, SPINNER_CHARS};
use crate::core::knowledge_base;
use crate::core::models::{HeaderStatus, ScanReport};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs, Wrap},
};

/// Renders the main report area: placeholder or spinner before completion,
/// then the tabbed findings once the scan is done.
pub fn render_report_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Assessment Report");

    if !matches!(app.state, AppState::Finished) {
        let content = match app.state {
            AppState::Idle => {
                Paragraph::new("Scan results will appear here...").alignment(Alignment::Center)
            }
            AppState::Scanning => {
                let spinner_char = SPINNER_CHARS[app.spinner_frame];
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        format!("{spinner_char} "),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw("Scanning... Please wait."),
                ]))
                .alignment(Alignment::Center)
            }
            _ => Paragraph::new(""),
        };
        frame.render_widget(content.block(main_block), area);
        return;
    }

    // A fatal scan failure yields one clear message and no partial report.
    if let Some(error) = &app.scan_error {
        let text = Text::from(vec![
            Line::from(""),
            Line::from("The scan could not be completed.".bold().red()),
            Line::from(""),
            Line::from(error.as_str()),
            Line::from(""),
            Line::from("Press [N] to start over or [R] to retry."),
        ]);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(main_block);
        frame.render_widget(paragraph, area);
        return;
    }
    let Some(report) = app.scan_report.as_ref() else {
        frame.render_widget(main_block, area);
        return;
    };

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner_area);

    let tabs = Tabs::new(ReportTab::ALL.iter().map(|tab| tab.title()))
        .select(app.active_tab.index())
        .highlight_style(Style::new().bold().fg(Color::Cyan));
    frame.render_widget(tabs, chunks[0]);

    match app.active_tab {
        ReportTab::Overview => render_overview_tab(frame, report, chunks[1]),
        ReportTab::Transport => render_transport_tab(frame, report, chunks[1]),
        ReportTab::Headers => {
            render_headers_tab(frame, report, &mut app.table_state, chunks[1])
        }
        ReportTab::Cookies => {
            render_cookies_tab(frame, report, &mut app.table_state, chunks[1])
        }
    }
}

fn render_overview_tab(frame: &mut Frame, report: &ScanReport, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Target: "),
            Span::styled(report.target_url.as_str(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(format!(
            "Scanned at: {}",
            report.scanned_at.format("%Y-%m-%d %H:%M:%S UTC")
        )),
        Line::from(""),
        Line::from(report.risk.summary.as_str().bold()),
        Line::from(""),
        Line::from(
            "Use the Transport, Headers and Cookies tabs for the detailed findings, \
             or export the full report from the footer actions.",
        ),
    ]);
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
}

fn render_transport_tab(frame: &mut Frame, report: &ScanReport, area: Rect) {
    let status_span = |passed: bool| {
        if passed {
            Span::styled("yes", Style::default().fg(Color::Green))
        } else {
            Span::styled("no", Style::default().fg(Color::Red))
        }
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Uses HTTPS: "),
            status_span(report.transport.uses_https),
        ]),
        Line::from(vec![
            Span::raw("Redirects HTTP to HTTPS: "),
            status_span(report.transport.redirects_to_https),
        ]),
        Line::from(format!("Certificate: {}", report.transport.transport_note)),
        Line::from(""),
    ];

    if report.transport.issues.is_empty() {
        lines.push(Line::from(Span::styled(
            "No transport issues found.",
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from("Issues:".bold()));
        for issue in &report.transport.issues {
            lines.push(Line::from(Span::styled(
                format!(" - {issue}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn status_style(status: HeaderStatus) -> Style {
    match status {
        HeaderStatus::Ok => Style::default().fg(Color::Green),
        HeaderStatus::Weak => Style::default().fg(Color::Yellow),
        HeaderStatus::Missing => Style::default().fg(Color::Red),
    }
}

fn render_headers_tab(
    frame: &mut Frame,
    report: &ScanReport,
    table_state: &mut TableState,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(8)])
        .split(area);

    let rows: Vec<Row> = report
        .headers
        .iter()
        .map(|finding| {
            Row::new(vec![
                Cell::from(finding.name.to_string()),
                Cell::from(finding.status.to_string()).style(status_style(finding.status)),
                Cell::from(finding.value.clone().unwrap_or_else(|| "-".to_string())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(28),
            Constraint::Length(9),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(vec!["Header", "Status", "Value"]).style(Style::new().bold()))
    .row_highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(table, chunks[0], table_state);

    // Detail pane for the selected header, fed by the knowledge base.
    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    let detail_text = match table_state.selected().and_then(|i| report.headers.get(i)) {
        Some(finding) => {
            let entry = knowledge_base::catalog_entry(finding.name);
            Text::from(vec![
                Line::from(finding.details.as_str()),
                Line::from(""),
                Line::from("WHY IT MATTERS:".yellow().bold()),
                Line::from(entry.explanation),
                Line::from(""),
                Line::from("HOW TO FIX:".yellow().bold()),
                Line::from(finding.recommendation.as_str()),
            ])
        }
        None => Text::from("Select a header with the arrow keys to see details."),
    };
    frame.render_widget(
        Paragraph::new(detail_text)
            .wrap(Wrap { trim: true })
            .block(detail_block),
        chunks[1],
    );
}

fn render_cookies_tab(
    frame: &mut Frame,
    report: &ScanReport,
    table_state: &mut TableState,
    area: Rect,
) {
    if report.cookies.is_empty() {
        let text = Text::from(vec![
            Line::from(""),
            Line::from("No cookies were found in the response."),
            Line::from(""),
            Line::from("That is perfectly valid: not every page sets session cookies."),
        ]);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let flag = |set: bool| {
        if set {
            Cell::from("yes").style(Style::default().fg(Color::Green))
        } else {
            Cell::from("no").style(Style::default().fg(Color::Red))
        }
    };

    let rows: Vec<Row> = report
        .cookies
        .iter()
        .map(|cookie| {
            let issues = if cookie.issues.is_empty() {
                "None".to_string()
            } else {
                cookie.issues.join(", ")
            };
            Row::new(vec![
                Cell::from(cookie.name.clone()),
                flag(cookie.secure),
                flag(cookie.http_only),
                Cell::from(cookie.same_site.clone()),
                Cell::from(issues),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(14),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new(vec!["Name", "Secure", "HttpOnly", "SameSite", "Issues"])
            .style(Style::new().bold()),
    )
    .row_highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(table, area, table_state);
}
