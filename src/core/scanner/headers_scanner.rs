// src/core/scanner/headers_scanner.rs

use reqwest::header::HeaderMap;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::core::knowledge_base::{self, HeaderName};
use crate::core::models::{HeaderFinding, HeaderStatus};

/// Grades the fixed header catalog against a response's header map.
///
/// Pure function, no I/O. Every catalog entry yields exactly one finding
/// whether or not the header is present; absence is a finding, never an
/// omission. Header lookups are case-insensitive (a `HeaderMap` property).
pub fn run_headers_scan(headers: &HeaderMap) -> Vec<HeaderFinding> {
    HeaderName::iter()
        .map(|name| check_header(headers, name))
        .collect()
}

fn check_header(headers: &HeaderMap, name: HeaderName) -> HeaderFinding {
    let entry = knowledge_base::catalog_entry(name);

    let value = headers.get(name.key()).map(|raw| match raw.to_str() {
        Ok(text) => text.to_string(),
        // Presence still counts when the value is not valid UTF-8.
        Err(_) => "[Invalid UTF-8]".to_string(),
    });

    let (present, status) = match &value {
        None => (false, HeaderStatus::Missing),
        Some(value) => (true, grade_value(name, value)),
    };
    debug!(header = %name, ?status, "Graded header.");

    HeaderFinding {
        name,
        present,
        value,
        status,
        details: entry.details_for(status).to_string(),
        recommendation: entry.recommendation.to_string(),
    }
}

/// Presence/quality rules, one arm per catalog entry.
fn grade_value(name: HeaderName, value: &str) -> HeaderStatus {
    let lowered = value.to_ascii_lowercase();
    match name {
        HeaderName::StrictTransportSecurity => {
            if lowered.contains("max-age") {
                HeaderStatus::Ok
            } else {
                HeaderStatus::Weak
            }
        }
        HeaderName::ContentSecurityPolicy => {
            if lowered.contains("unsafe-inline") || lowered.contains("unsafe-eval") {
                HeaderStatus::Weak
            } else {
                HeaderStatus::Ok
            }
        }
        // Any non-empty value is acceptable; there is no weak state for
        // these two, so an empty value reports the protection as missing.
        HeaderName::XFrameOptions | HeaderName::ReferrerPolicy => {
            if value.trim().is_empty() {
                HeaderStatus::Missing
            } else {
                HeaderStatus::Ok
            }
        }
        HeaderName::XContentTypeOptions => {
            if lowered == "nosniff" {
                HeaderStatus::Ok
            } else {
                HeaderStatus::Weak
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn compliant_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "strict-transport-security",
            HeaderValue::from_static("max-age=31536000"),
        );
        headers.insert(
            "content-security-policy",
            HeaderValue::from_static("default-src 'self'"),
        );
        headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
        headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
        headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
        headers
    }

    #[test]
    fn empty_response_reports_every_header_missing() {
        let findings = run_headers_scan(&HeaderMap::new());
        assert_eq!(findings.len(), 5);
        for finding in findings {
            assert!(!finding.present);
            assert_eq!(finding.status, HeaderStatus::Missing);
            assert!(finding.value.is_none());
        }
    }

    #[test]
    fn compliant_response_reports_every_header_ok() {
        let findings = run_headers_scan(&compliant_headers());
        assert_eq!(findings.len(), 5);
        for finding in findings {
            assert!(finding.present, "{} not marked present", finding.name);
            assert_eq!(finding.status, HeaderStatus::Ok, "{} not ok", finding.name);
        }
    }

    #[test]
    fn findings_follow_catalog_order() {
        let names: Vec<HeaderName> = run_headers_scan(&HeaderMap::new())
            .into_iter()
            .map(|finding| finding.name)
            .collect();
        assert_eq!(
            names,
            vec![
                HeaderName::StrictTransportSecurity,
                HeaderName::ContentSecurityPolicy,
                HeaderName::XFrameOptions,
                HeaderName::XContentTypeOptions,
                HeaderName::ReferrerPolicy,
            ]
        );
    }

    #[test]
    fn hsts_without_max_age_is_weak() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "strict-transport-security",
            HeaderValue::from_static("includeSubDomains"),
        );
        let finding = &run_headers_scan(&headers)[0];
        assert!(finding.present);
        assert_eq!(finding.status, HeaderStatus::Weak);
    }

    #[test]
    fn csp_with_unsafe_tokens_is_weak() {
        for policy in ["script-src 'unsafe-inline'", "default-src 'UNSAFE-EVAL'"] {
            let mut headers = HeaderMap::new();
            headers.insert(
                "content-security-policy",
                HeaderValue::from_str(policy).unwrap(),
            );
            let finding = &run_headers_scan(&headers)[1];
            assert_eq!(finding.status, HeaderStatus::Weak, "policy: {policy}");
        }
    }

    #[test]
    fn nosniff_comparison_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("x-content-type-options", HeaderValue::from_static("NoSniff"));
        let finding = &run_headers_scan(&headers)[3];
        assert_eq!(finding.status, HeaderStatus::Ok);
    }

    #[test]
    fn wrong_nosniff_value_is_weak_not_missing() {
        let mut headers = HeaderMap::new();
        headers.insert("x-content-type-options", HeaderValue::from_static("none"));
        let finding = &run_headers_scan(&headers)[3];
        assert!(finding.present);
        assert_eq!(finding.status, HeaderStatus::Weak);
    }

    #[test]
    fn empty_frame_options_is_present_but_missing() {
        let mut headers = HeaderMap::new();
        headers.insert("x-frame-options", HeaderValue::from_static(""));
        let finding = &run_headers_scan(&headers)[2];
        assert!(finding.present);
        assert_eq!(finding.status, HeaderStatus::Missing);
    }

    #[test]
    fn details_track_the_status() {
        let findings = run_headers_scan(&compliant_headers());
        assert_eq!(findings[0].details, "HSTS is configured.");
        let missing = run_headers_scan(&HeaderMap::new());
        assert_eq!(missing[0].details, "HSTS absent.");
    }
}
