//! Static catalog of the security response headers this assessor grades.
//! Each entry carries the complete human-readable context for a finding:
//! per-status detail texts, an explanation of the attack the header
//! mitigates, and a remediation hint. Keeping the texts data-driven means
//! checkers only compute a status and never assemble prose.

use serde::{Deserialize, Serialize};

use crate::core::models::HeaderStatus;

/// The five response headers in the assessment catalog, in report order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderName {
    #[strum(to_string = "Strict-Transport-Security")]
    StrictTransportSecurity,
    #[strum(to_string = "Content-Security-Policy")]
    ContentSecurityPolicy,
    #[strum(to_string = "X-Frame-Options")]
    XFrameOptions,
    #[strum(to_string = "X-Content-Type-Options")]
    XContentTypeOptions,
    #[strum(to_string = "Referrer-Policy")]
    ReferrerPolicy,
}

impl HeaderName {
    /// Lowercased key for response header lookups.
    pub fn key(&self) -> &'static str {
        match self {
            HeaderName::StrictTransportSecurity => "strict-transport-security",
            HeaderName::ContentSecurityPolicy => "content-security-policy",
            HeaderName::XFrameOptions => "x-frame-options",
            HeaderName::XContentTypeOptions => "x-content-type-options",
            HeaderName::ReferrerPolicy => "referrer-policy",
        }
    }
}

/// All the static, human-readable context for one catalog header.
pub struct HeaderCatalogEntry {
    pub name: HeaderName,
    pub ok_details: &'static str,
    pub weak_details: &'static str,
    pub missing_details: &'static str,
    /// What the header protects against, shown in the detail pane.
    pub explanation: &'static str,
    /// Actionable configuration advice.
    pub recommendation: &'static str,
}

impl HeaderCatalogEntry {
    /// Detail text matching the graded status.
    pub fn details_for(&self, status: HeaderStatus) -> &'static str {
        match status {
            HeaderStatus::Ok => self.ok_details,
            HeaderStatus::Weak => self.weak_details,
            HeaderStatus::Missing => self.missing_details,
        }
    }
}

static CATALOG: &[HeaderCatalogEntry] = &[
    HeaderCatalogEntry {
        name: HeaderName::StrictTransportSecurity,
        ok_details: "HSTS is configured.",
        weak_details: "HSTS present but missing the 'max-age' directive.",
        missing_details: "HSTS absent.",
        explanation: "HTTP Strict Transport Security tells browsers to only reach the site over HTTPS, protecting visitors against protocol downgrade attacks and cookie hijacking on hostile networks.",
        recommendation: "Serve 'Strict-Transport-Security' with a long max-age (e.g. 31536000) and consider 'includeSubDomains'.",
    },
    HeaderCatalogEntry {
        name: HeaderName::ContentSecurityPolicy,
        ok_details: "CSP is present.",
        weak_details: "CSP present but allows 'unsafe-inline' or 'unsafe-eval' directives.",
        missing_details: "CSP absent.",
        explanation: "Content Security Policy restricts the sources a browser may load content from, which blunts Cross-Site Scripting (XSS) and data injection attacks.",
        recommendation: "Tighten the policy as far as practical: remove 'unsafe-inline' and 'unsafe-eval' and enumerate trusted domains.",
    },
    HeaderCatalogEntry {
        name: HeaderName::XFrameOptions,
        ok_details: "X-Frame-Options is configured.",
        weak_details: "X-Frame-Options present but empty.",
        missing_details: "X-Frame-Options absent.",
        explanation: "Without this header the site can be loaded inside a third-party iframe, enabling clickjacking: an attacker overlays your pages and hijacks user clicks.",
        recommendation: "Set 'X-Frame-Options' to 'DENY', or 'SAMEORIGIN' if the site legitimately frames itself.",
    },
    HeaderCatalogEntry {
        name: HeaderName::XContentTypeOptions,
        ok_details: "Correctly configured as 'nosniff'.",
        weak_details: "X-Content-Type-Options present but not set to 'nosniff'.",
        missing_details: "X-Content-Type-Options absent.",
        explanation: "Stops browsers from guessing (sniffing) content types, so a file disguised behind a harmless MIME type cannot be executed as a script.",
        recommendation: "Set the value to exactly 'nosniff'; it is a one-line, no-drawback hardening.",
    },
    HeaderCatalogEntry {
        name: HeaderName::ReferrerPolicy,
        ok_details: "Referrer-Policy is configured.",
        weak_details: "Referrer-Policy present but empty.",
        missing_details: "Referrer-Policy absent.",
        explanation: "Controls how much referrer information leaves the site when visitors follow links, limiting what URLs and parameters third parties learn.",
        recommendation: "Prefer restrictive policies such as 'strict-origin-when-cross-origin' or 'no-referrer'.",
    },
];

/// Retrieves the catalog entry for a header. The catalog covers every
/// `HeaderName` variant, so the lookup cannot miss.
pub fn catalog_entry(name: HeaderName) -> &'static HeaderCatalogEntry {
    CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .expect("catalog covers every header variant")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_header_has_a_catalog_entry() {
        for name in HeaderName::iter() {
            let entry = catalog_entry(name);
            assert_eq!(entry.name, name);
            assert!(!entry.explanation.is_empty());
            assert!(!entry.recommendation.is_empty());
        }
    }

    #[test]
    fn lookup_keys_match_canonical_names() {
        for name in HeaderName::iter() {
            assert_eq!(name.key(), name.to_string().to_ascii_lowercase());
        }
    }
}
