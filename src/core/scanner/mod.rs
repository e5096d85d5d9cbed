// src/core/scanner/mod.rs

// Public interface of the `scanner` module: one sub-scanner per concern
// plus the orchestration that ties them to a single fetched response.
pub mod cookies_scanner;
pub mod headers_scanner;
pub mod transport_scanner;

use chrono::Utc;
use tracing::{error, info};

use crate::core::http::{self, PRIMARY_TIMEOUT};
use crate::core::models::{ScanError, ScanReport};
use crate::core::normalizer::normalize_url;
use crate::core::risk;

/// Runs the complete assessment of one target.
///
/// Normalizes the target, performs the primary fetch the header and cookie
/// checkers consume, runs the transport checker's own probes, and folds
/// everything into a rated `ScanReport`. Only an unusable target or a
/// failed primary fetch abort the scan; every other failure is recorded
/// inside the findings.
pub async fn run_full_scan(raw_target: &str) -> Result<ScanReport, ScanError> {
    let target = normalize_url(raw_target)?;
    info!(target = %target, "Starting full scan.");

    let client =
        http::build_client(true, PRIMARY_TIMEOUT).map_err(|err| ScanError::PrimaryFetch {
            url: target.to_string(),
            source: http::FetchError::Network(err),
        })?;

    // The one response the header and cookie checkers share. Without it
    // there is nothing to assess, so failure here is fatal and yields no
    // partial report.
    let response = match http::fetch(&client, target.as_str()).await {
        Ok(response) => response,
        Err(source) => {
            error!(target = %target, error = %source, "Primary fetch failed, aborting scan.");
            return Err(ScanError::PrimaryFetch {
                url: target.to_string(),
                source,
            });
        }
    };
    info!(status = %response.status, "Primary fetch succeeded.");

    let transport = transport_scanner::run_transport_scan(&target).await;
    let headers = headers_scanner::run_headers_scan(&response.headers);
    let cookies = cookies_scanner::run_cookies_scan(&response.cookies);
    let risk = risk::assess_risk(&transport, &headers, &cookies);

    info!(level = %risk.level, "Full scan finished.");
    Ok(ScanReport {
        target_url: target.to_string(),
        scanned_at: Utc::now(),
        transport,
        headers,
        cookies,
        risk,
    })
}
