//! Markdown report generator, convenient for pasting into issue trackers
//! and documentation.

use crate::core::models::ScanReport;
use crate::core::risk;
use crate::reporting::{CLOSING_RECOMMENDATIONS, DISCLAIMER};

/// Generates the Markdown document for one completed scan.
pub fn generate(report: &ScanReport) -> String {
    let mut md = String::new();

    md.push_str("# Security Assessment Report\n\n");
    md.push_str(&format!("- **Target:** `{}`\n", report.target_url));
    md.push_str(&format!(
        "- **Scanned:** {}\n\n",
        report.scanned_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!("> {DISCLAIMER}\n\n"));

    md.push_str("## Overview\n\n");
    md.push_str(&format!("**Attention level:** {}\n\n", report.risk.level));
    md.push_str(&format!("{}\n\n", report.risk.summary));
    md.push_str(&format!(
        "{} of {} security headers graded ok, {} cookie issue(s) found.\n\n",
        risk::headers_ok_count(&report.headers),
        report.headers.len(),
        risk::cookie_issue_count(&report.cookies)
    ));

    md.push_str("## HTTPS and Transport\n\n");
    md.push_str(&format!(
        "- Uses HTTPS: {}\n",
        yes_no(report.transport.uses_https)
    ));
    md.push_str(&format!(
        "- Redirects HTTP to HTTPS: {}\n",
        yes_no(report.transport.redirects_to_https)
    ));
    md.push_str(&format!(
        "- Certificate: {}\n\n",
        report.transport.transport_note
    ));
    for issue in &report.transport.issues {
        md.push_str(&format!("> {issue}\n"));
    }
    if !report.transport.issues.is_empty() {
        md.push('\n');
    }

    md.push_str("## Security Headers\n\n");
    md.push_str("| Header | Status | Details |\n|--------|--------|--------|\n");
    for finding in &report.headers {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            finding.name,
            finding.status,
            md_escape(&finding.details)
        ));
    }
    md.push('\n');

    md.push_str("## Cookies\n\n");
    if report.cookies.is_empty() {
        md.push_str("No cookies detected.\n\n");
    } else {
        md.push_str(
            "| Name | Secure | HttpOnly | SameSite | Issues |\n\
             |------|--------|----------|----------|--------|\n",
        );
        for cookie in &report.cookies {
            let issues = if cookie.issues.is_empty() {
                "None".to_string()
            } else {
                md_escape(&cookie.issues.join("; "))
            };
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                md_escape(&cookie.name),
                yes_no(cookie.secure),
                yes_no(cookie.http_only),
                md_escape(&cookie.same_site),
                issues
            ));
        }
        md.push('\n');
    }

    md.push_str("## Recommendations\n\n");
    for (position, recommendation) in CLOSING_RECOMMENDATIONS.iter().enumerate() {
        md.push_str(&format!("{}. {}\n", position + 1, recommendation));
    }
    md.push('\n');
    md.push_str(&format!(
        "*Generated by {} v{}*\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));

    md
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Escapes the one character that breaks Markdown table cells.
fn md_escape(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{RiskLevel, RiskRating, TransportFinding};
    use crate::core::scanner::headers_scanner;
    use chrono::Utc;
    use reqwest::header::HeaderMap;

    #[test]
    fn renders_header_table_and_overview() {
        let report = ScanReport {
            target_url: "https://example.com".to_string(),
            scanned_at: Utc::now(),
            transport: TransportFinding::default(),
            headers: headers_scanner::run_headers_scan(&HeaderMap::new()),
            cookies: Vec::new(),
            risk: RiskRating {
                level: RiskLevel::High,
                summary: "The site lacks fundamental protections against common attacks."
                    .to_string(),
            },
        };

        let md = generate(&report);
        assert!(md.starts_with("# Security Assessment Report"));
        assert!(md.contains("**Attention level:** High"));
        assert!(md.contains("| Strict-Transport-Security | MISSING |"));
        assert!(md.contains("0 of 5 security headers graded ok"));
        assert!(md.contains("No cookies detected."));
        assert!(md.contains("## Recommendations"));
    }

    #[test]
    fn escapes_pipes_in_table_cells() {
        assert_eq!(md_escape("a|b"), "a\\|b");
    }
}
