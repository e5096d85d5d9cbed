// src/reporting/mod.rs

// Renderers for completed scans. Each format serializes the same
// `ScanReport`; none of them recomputes findings or ratings.
pub mod json;
pub mod markdown;
pub mod text;

use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::Result;

use crate::core::models::ScanReport;

/// Disclaimer included near the top of every generated document.
pub const DISCLAIMER: &str = "This tool is for educational purposes and does not replace \
professional security testing. Use it only on sites you control or are authorized to assess.";

/// Fixed closing recommendations every report ends with.
pub const CLOSING_RECOMMENDATIONS: &[&str] = &[
    "Prioritize full HTTPS adoption together with HSTS.",
    "Fix session cookie flags (HttpOnly and Secure).",
    "Implement headers such as X-Frame-Options and CSP.",
];

/// Output formats the assessor can export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ReportFormat {
    #[strum(to_string = "text")]
    Text,
    #[strum(to_string = "markdown")]
    Markdown,
    #[strum(to_string = "json")]
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}

/// Renders a report into the requested format.
pub fn render(report: &ScanReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(text::generate(report)),
        ReportFormat::Markdown => Ok(markdown::generate(report)),
        ReportFormat::Json => Ok(json::generate(report)?),
    }
}

/// Writes the rendered report under the application data directory, named
/// after the target and scan timestamp. Returns the path written.
pub fn export_to_file(report: &ScanReport, format: ReportFormat) -> Result<PathBuf> {
    let directory = crate::logging::get_data_dir();
    fs::create_dir_all(&directory)?;
    let path = directory.join(file_name(report, format));
    fs::write(&path, render(report, format)?)?;
    Ok(path)
}

/// `report_<target>_<timestamp>.<ext>` with URL separators flattened so
/// the name is filesystem-safe on every platform.
fn file_name(report: &ScanReport, format: ReportFormat) -> String {
    let slug: String = report
        .target_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "report_{}_{}.{}",
        slug,
        report.scanned_at.format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{RiskLevel, RiskRating, TransportFinding};
    use chrono::{TimeZone, Utc};

    fn report() -> ScanReport {
        ScanReport {
            target_url: "https://example.com/app".to_string(),
            scanned_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            transport: TransportFinding::default(),
            headers: Vec::new(),
            cookies: Vec::new(),
            risk: RiskRating {
                level: RiskLevel::High,
                summary: String::new(),
            },
        }
    }

    #[test]
    fn file_names_flatten_url_separators() {
        let name = file_name(&report(), ReportFormat::Text);
        assert_eq!(name, "report_example.com_app_20260314-092653.txt");
    }

    #[test]
    fn extensions_follow_the_format() {
        assert_eq!(ReportFormat::Text.extension(), "txt");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Json.extension(), "json");
    }
}
