// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::http::FetchError;
use crate::core::knowledge_base::HeaderName;

// --- Core Data Models ---

/// The attention level assigned to a scanned site by the risk aggregator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum::Display)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Grade assigned to a single security header.
///
/// `Missing` also covers a header key that exists with an empty value:
/// the key was present, but the protection is not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HeaderStatus {
    Ok,
    Weak,
    Missing,
}

// --- Transport Checker Models ---

/// Transport-layer results for one scan target, immutable once built.
///
/// `issues` keeps insertion order; renderers print it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportFinding {
    pub uses_https: bool,
    pub redirects_to_https: bool,
    pub issues: Vec<String>,
    pub transport_note: String,
}

impl Default for TransportFinding {
    fn default() -> Self {
        Self {
            uses_https: false,
            redirects_to_https: false,
            issues: Vec::new(),
            transport_note: "Could not obtain certificate details.".to_string(),
        }
    }
}

// --- Header Checker Models ---

/// One finding per catalog header, produced on every scan.
///
/// Absence is itself a finding: `present = false`, `status = Missing`.
/// The detail and recommendation texts come from the header catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderFinding {
    pub name: HeaderName,
    pub present: bool,
    pub value: Option<String>,
    pub status: HeaderStatus,
    pub details: String,
    pub recommendation: String,
}

// --- Cookie Checker Models ---

/// Protective-flag results for one cookie observed in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieFinding {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: String,
    pub issues: Vec<String>,
}

// --- Risk Rating ---

/// Derived rating; recomputed from the finding collections, never stored
/// independently of the report that carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRating {
    pub level: RiskLevel,
    pub summary: String,
}

// --- Main Report ---

/// The complete outcome of one scan invocation. Owned by that invocation
/// and passed by reference to renderers, never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub target_url: String,
    pub scanned_at: DateTime<Utc>,
    pub transport: TransportFinding,
    pub headers: Vec<HeaderFinding>,
    pub cookies: Vec<CookieFinding>,
    pub risk: RiskRating,
}

// --- Errors ---

/// Failures that abort a scan outright. Everything else (probe timeouts,
/// handshake failures, unreachable HTTP twins) degrades into findings.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The target string was empty after trimming.
    #[error("no URL supplied")]
    InvalidInput,

    /// The primary fetch failed; without a response there is nothing to
    /// assess, so no partial report is produced.
    #[error("could not fetch {url}: {source}")]
    PrimaryFetch {
        url: String,
        #[source]
        source: FetchError,
    },
}
