//! Plain-text report generator, the downloadable counterpart of the
//! terminal view.

use crate::core::models::ScanReport;
use crate::reporting::{CLOSING_RECOMMENDATIONS, DISCLAIMER};

/// Generates the plain-text document for one completed scan.
pub fn generate(report: &ScanReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Security Assessment Report - {}", report.target_url));
    lines.push("=".repeat(50));
    lines.push(format!(
        "Scanned at: {}",
        report.scanned_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(String::new());
    lines.push("EDUCATIONAL NOTICE:".to_string());
    lines.push(DISCLAIMER.to_string());
    lines.push(String::new());

    lines.push("1. OVERVIEW".to_string());
    lines.push("-".repeat(20));
    lines.push(format!("Attention level: {}", report.risk.level));
    lines.push(format!("Summary: {}", report.risk.summary));
    lines.push(String::new());

    lines.push("2. HTTPS AND TRANSPORT".to_string());
    lines.push("-".repeat(20));
    lines.push(format!("Uses HTTPS: {}", yes_no(report.transport.uses_https)));
    lines.push(format!(
        "Redirects HTTP to HTTPS: {}",
        yes_no(report.transport.redirects_to_https)
    ));
    lines.push(format!("Certificate: {}", report.transport.transport_note));
    if !report.transport.issues.is_empty() {
        lines.push("Issues found:".to_string());
        for issue in &report.transport.issues {
            lines.push(format!(" - {issue}"));
        }
    }
    lines.push(String::new());

    lines.push("3. SECURITY HEADERS".to_string());
    lines.push("-".repeat(20));
    lines.push(format!("{:<30} | {:<10} | Details", "Header", "Status"));
    lines.push("-".repeat(70));
    for finding in &report.headers {
        lines.push(format!(
            "{:<30} | {:<10} | {}",
            finding.name.to_string(),
            finding.status.to_string(),
            finding.details
        ));
    }
    lines.push(String::new());

    lines.push("4. COOKIES".to_string());
    lines.push("-".repeat(20));
    if report.cookies.is_empty() {
        lines.push("No cookies detected.".to_string());
    } else {
        lines.push(format!(
            "{:<25} | {:<7} | {:<8} | Issues",
            "Name", "Secure", "HttpOnly"
        ));
        lines.push("-".repeat(70));
        for cookie in &report.cookies {
            lines.push(format!(
                "{:<25} | {:<7} | {:<8} | {}",
                cookie.name,
                yes_no(cookie.secure),
                yes_no(cookie.http_only),
                if cookie.issues.is_empty() {
                    "None".to_string()
                } else {
                    cookie.issues.join(", ")
                }
            ));
        }
    }
    lines.push(String::new());

    lines.push("5. CONCLUSION AND NEXT STEPS".to_string());
    lines.push("-".repeat(20));
    for (position, recommendation) in CLOSING_RECOMMENDATIONS.iter().enumerate() {
        lines.push(format!("{}. {}", position + 1, recommendation));
    }
    lines.push(String::new());
    lines.push(format!("--- Generated by {} ---", env!("CARGO_PKG_NAME")));

    lines.join("\n")
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        CookieFinding, RiskLevel, RiskRating, TransportFinding,
    };
    use crate::core::scanner::headers_scanner;
    use chrono::Utc;
    use reqwest::header::HeaderMap;

    fn report(cookies: Vec<CookieFinding>) -> ScanReport {
        ScanReport {
            target_url: "https://example.com".to_string(),
            scanned_at: Utc::now(),
            transport: TransportFinding {
                uses_https: true,
                redirects_to_https: false,
                issues: vec!["probe issue".to_string()],
                ..TransportFinding::default()
            },
            headers: headers_scanner::run_headers_scan(&HeaderMap::new()),
            cookies,
            risk: RiskRating {
                level: RiskLevel::Medium,
                summary: "Important security measures are missing or weakly configured."
                    .to_string(),
            },
        }
    }

    #[test]
    fn document_carries_every_section() {
        let text = generate(&report(Vec::new()));
        for section in [
            "1. OVERVIEW",
            "2. HTTPS AND TRANSPORT",
            "3. SECURITY HEADERS",
            "4. COOKIES",
            "5. CONCLUSION AND NEXT STEPS",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
        assert!(text.contains("https://example.com"));
        assert!(text.contains("Attention level: Medium"));
        assert!(text.contains(DISCLAIMER));
        assert!(text.contains(" - probe issue"));
    }

    #[test]
    fn empty_cookie_list_renders_the_placeholder() {
        let text = generate(&report(Vec::new()));
        assert!(text.contains("No cookies detected."));
    }

    #[test]
    fn cookie_rows_render_flags_and_issues() {
        let cookies = vec![CookieFinding {
            name: "session".to_string(),
            secure: false,
            http_only: true,
            same_site: "Lax".to_string(),
            issues: vec!["Cookie missing 'Secure' flag (may be sent over plain HTTP)."
                .to_string()],
        }];
        let text = generate(&report(cookies));
        assert!(text.contains("session"));
        assert!(text.contains("Cookie missing 'Secure' flag"));
        assert!(!text.contains("No cookies detected."));
    }

    #[test]
    fn missing_headers_render_their_catalog_details() {
        let text = generate(&report(Vec::new()));
        assert!(text.contains("Strict-Transport-Security"));
        assert!(text.contains("HSTS absent."));
        assert!(text.contains("MISSING"));
    }
}
