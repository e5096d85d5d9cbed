// src/main.rs

use crossterm::{
    ExecutableCommand,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;

mod app;
mod core;
mod logging;
mod reporting;
mod ui;

use app::{App, AppState, ScanOutcome};
use color_eyre::eyre::Result;
use reporting::ReportFormat;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx)?;
        }
        app.on_tick();

        if let Ok(outcome) = rx.try_recv() {
            app.apply_outcome(outcome);
        }
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}

/// Single event handler, dispatching on the current application state.
fn handle_events(app: &mut App, tx: &mpsc::Sender<ScanOutcome>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            // The disclaimer gates everything until acknowledged.
            if app.show_disclaimer {
                match key.code {
                    KeyCode::Enter => app.show_disclaimer = false,
                    KeyCode::Esc => app.quit(),
                    _ => {}
                }
                return Ok(());
            }
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code, tx),
                AppState::Finished => handle_finished_input(app, key.code, tx),
                AppState::Scanning => {
                    if key.code == KeyCode::Esc {
                        app.quit();
                    }
                }
            }
        }
    }
    Ok(())
}

/// Input handling while the URL prompt is active. Characters go to the
/// input buffer, so quitting is on Esc here.
fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<ScanOutcome>) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => start_scan(app, tx),
        _ => {}
    }
}

/// Key handling while a report (or scan error) is on screen.
fn handle_finished_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<ScanOutcome>) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('r') => {
            // Explicit re-scan: drop the cached entry so the probe runs again.
            if let Some(url) = app.scanned_url() {
                app.cache.invalidate(&url);
            }
            spawn_scan(app, tx);
        }
        KeyCode::Char('t') => app.export(ReportFormat::Text),
        KeyCode::Char('m') => app.export(ReportFormat::Markdown),
        KeyCode::Char('j') => app.export(ReportFormat::Json),
        KeyCode::Tab | KeyCode::Right => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left => app.previous_tab(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}

/// Serves the cached report for a repeated target, otherwise spawns a scan.
fn start_scan(app: &mut App, tx: &mpsc::Sender<ScanOutcome>) {
    if app.input.trim().is_empty() {
        return;
    }
    match core::normalizer::normalize_url(&app.input) {
        Ok(target) => {
            if let Some(report) = app.cache.get(target.as_str()).cloned() {
                app.apply_cached(report);
                return;
            }
        }
        Err(err) => {
            app.scan_error = Some(err.to_string());
            app.state = AppState::Finished;
            return;
        }
    }
    spawn_scan(app, tx);
}

/// Runs the scan on a background task; the result comes back through the
/// channel and is picked up by the main loop.
fn spawn_scan(app: &mut App, tx: &mpsc::Sender<ScanOutcome>) {
    app.state = AppState::Scanning;
    let raw_target = app.input.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = core::scanner::run_full_scan(&raw_target).await;
        let _ = tx.send(outcome).await;
    });
}
