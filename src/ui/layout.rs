// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The fixed areas of the terminal interface.
///
/// Holding the computed `Rect`s in one struct keeps the widgets free of
/// layout arithmetic; everything is sliced once per frame here.
pub struct AppLayout {
    pub input: Rect,
    pub report: Rect,
    pub summary: Rect,
    pub footer: Rect,
}

/// Splits the frame into the input bar, the main content row (report view
/// beside the summary panel) and the one-line footer.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(main_chunks[1]);

    AppLayout {
        input: main_chunks[0],
        report: content_chunks[0],
        summary: content_chunks[1],
        footer: main_chunks[2],
    }
}
