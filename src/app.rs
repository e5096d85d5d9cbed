// src/app.rs

use ratatui::widgets::TableState;
use tracing::info;

use crate::core::cache::ScanCache;
use crate::core::models::{ScanError, ScanReport};
use crate::reporting::{self, ReportFormat};

/// Frames for the scanning spinner, advanced on every tick.
pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Outcome of one scan task, delivered over the channel from the spawned
/// tokio task back to the UI loop.
pub type ScanOutcome = Result<ScanReport, ScanError>;

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

/// Latest export attempt, shown in the summary panel.
pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

/// Report tabs, mirroring the sections of the exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTab {
    Overview,
    Transport,
    Headers,
    Cookies,
}

impl ReportTab {
    pub const ALL: [ReportTab; 4] = [
        ReportTab::Overview,
        ReportTab::Transport,
        ReportTab::Headers,
        ReportTab::Cookies,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReportTab::Overview => "Overview",
            ReportTab::Transport => "Transport",
            ReportTab::Headers => "Headers",
            ReportTab::Cookies => "Cookies",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub show_disclaimer: bool,
    pub input: String,
    pub scan_report: Option<ScanReport>,
    pub scan_error: Option<String>,
    pub cache: ScanCache,
    pub active_tab: ReportTab,
    pub table_state: TableState,
    pub export_status: ExportStatus,
    pub spinner_frame: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            show_disclaimer: true,
            input: String::new(),
            scan_report: None,
            scan_error: None,
            cache: ScanCache::new(),
            active_tab: ReportTab::Overview,
            table_state: TableState::default(),
            export_status: ExportStatus::Idle,
            spinner_frame: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Back to an empty prompt. The cache survives so a repeated target
    /// is served without re-scanning.
    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.scan_report = None;
        self.scan_error = None;
        self.active_tab = ReportTab::Overview;
        self.table_state = TableState::default();
        self.export_status = ExportStatus::Idle;
    }

    pub fn on_tick(&mut self) {
        if matches!(self.state, AppState::Scanning) {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    /// Stores a fresh scan outcome and moves to the report view.
    pub fn apply_outcome(&mut self, outcome: ScanOutcome) {
        match outcome {
            Ok(report) => {
                self.cache.insert(report.clone());
                self.scan_error = None;
                self.scan_report = Some(report);
            }
            Err(err) => {
                self.scan_report = None;
                self.scan_error = Some(err.to_string());
            }
        }
        self.finish();
    }

    /// Serves a report that was already in the cache.
    pub fn apply_cached(&mut self, report: ScanReport) {
        info!(target = %report.target_url, "Serving cached scan report.");
        self.scan_error = None;
        self.scan_report = Some(report);
        self.finish();
    }

    fn finish(&mut self) {
        self.state = AppState::Finished;
        self.active_tab = ReportTab::Overview;
        self.table_state = TableState::default();
    }

    /// Normalized URL of the report on screen, if any.
    pub fn scanned_url(&self) -> Option<String> {
        self.scan_report
            .as_ref()
            .map(|report| report.target_url.clone())
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
        self.table_state = TableState::default();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
        self.table_state = TableState::default();
    }

    /// Row count of the table on the active tab, if that tab has one.
    fn active_row_count(&self) -> usize {
        let Some(report) = &self.scan_report else {
            return 0;
        };
        match self.active_tab {
            ReportTab::Headers => report.headers.len(),
            ReportTab::Cookies => report.cookies.len(),
            _ => 0,
        }
    }

    pub fn scroll_down(&mut self) {
        let rows = self.active_row_count();
        if rows == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(selected) => (selected + 1).min(rows - 1),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn scroll_up(&mut self) {
        if self.active_row_count() == 0 {
            return;
        }
        let previous = self
            .table_state
            .selected()
            .map(|selected| selected.saturating_sub(1))
            .unwrap_or(0);
        self.table_state.select(Some(previous));
    }

    /// Writes the current report to disk in the requested format and
    /// records the outcome for the summary panel.
    pub fn export(&mut self, format: ReportFormat) {
        let Some(report) = &self.scan_report else {
            return;
        };
        info!(format = %format, target = %report.target_url, "Exporting report.");
        self.export_status = match reporting::export_to_file(report, format) {
            Ok(path) => ExportStatus::Success(format!("Saved {}", path.display())),
            Err(err) => ExportStatus::Error(format!("Export failed: {err}")),
        };
    }
}
