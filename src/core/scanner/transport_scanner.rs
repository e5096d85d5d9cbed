// src/core/scanner/transport_scanner.rs

use reqwest::header::LOCATION;
use tracing::{debug, info, warn};
use url::Url;

use crate::core::http::{self, FetchError, PROBE_TIMEOUT};
use crate::core::models::TransportFinding;
use crate::core::normalizer::NormalizedUrl;

const NO_HTTPS: &str = "The site does not use HTTPS as its initial protocol.";
const NO_REDIRECT: &str = "The site does not automatically redirect HTTP to HTTPS.";

/// Checks HTTPS usage, HTTP-to-HTTPS redirect behavior and certificate
/// handshake health for one target.
///
/// The two probes share no state and run concurrently. Every network
/// failure degrades to a recorded issue or note: this scanner never fails
/// the overall scan.
pub async fn run_transport_scan(target: &NormalizedUrl) -> TransportFinding {
    info!(target = %target, "Starting transport scan.");

    let uses_https = target.is_https();
    let (redirects_to_https, certificate_probe) =
        tokio::join!(probe_http_redirect(target), probe_certificate(target));

    let mut finding = TransportFinding {
        uses_https,
        redirects_to_https,
        ..TransportFinding::default()
    };

    if !uses_https {
        finding.issues.push(NO_HTTPS.to_string());
        // The redirect probe only matters for sites starting insecure; a
        // site already on HTTPS is secure by default.
        if !redirects_to_https {
            finding.issues.push(NO_REDIRECT.to_string());
        }
    }

    match certificate_probe {
        Ok(()) if uses_https => {
            finding.transport_note =
                "Certificate appears valid (connection succeeded).".to_string();
        }
        Ok(()) => {}
        Err(err @ FetchError::Tls(_)) => {
            finding.issues.push(err.to_string());
            finding.transport_note = "Error validating certificate.".to_string();
        }
        Err(err) => {
            finding.issues.push(err.to_string());
        }
    }

    info!(issues = finding.issues.len(), "Transport scan finished.");
    finding
}

/// GET against the HTTP twin with redirects disabled. True only when the
/// response is a 3xx whose Location resolves to an `https://` URL.
async fn probe_http_redirect(target: &NormalizedUrl) -> bool {
    let http_twin = target.http_twin();
    debug!(url = %http_twin, "Probing HTTP to HTTPS redirect.");

    let client = match http::build_client(false, PROBE_TIMEOUT) {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "Failed to build HTTP client for redirect probe.");
            return false;
        }
    };

    let response = match client.get(&http_twin).send().await {
        Ok(response) => response,
        Err(err) => {
            // Timeouts, refused connections and DNS failures leave the
            // probe inconclusive; they never fail the scan.
            debug!(error = %err, "Redirect probe failed, assuming no redirect.");
            return false;
        }
    };

    if !response.status().is_redirection() {
        return false;
    }
    let Some(location) = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    if location.starts_with("https://") {
        return true;
    }
    resolves_to_https(&http_twin, location)
}

/// Resolves a relative or cross-host Location value against the request URL
/// and reports whether the result lands on HTTPS.
fn resolves_to_https(request_url: &str, location: &str) -> bool {
    let Ok(base) = Url::parse(request_url) else {
        return false;
    };
    match base.join(location) {
        Ok(resolved) => resolved.scheme() == "https",
        Err(_) => false,
    }
}

/// Full GET of the target to confirm reachability and, on HTTPS, that the
/// certificate handshake completes. Classification of the failure kind is
/// left to the fetch layer.
async fn probe_certificate(target: &NormalizedUrl) -> Result<(), FetchError> {
    debug!(url = %target, "Probing reachability and certificate handshake.");
    let client = http::build_client(true, PROBE_TIMEOUT).map_err(FetchError::Network)?;
    http::fetch(&client, target.as_str()).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_https_location_counts_as_redirect() {
        assert!(resolves_to_https(
            "http://example.com",
            "https://example.com/"
        ));
    }

    #[test]
    fn relative_location_resolves_against_request_url() {
        // A relative Location inherits the insecure scheme of the request.
        assert!(!resolves_to_https("http://example.com", "/login"));
    }

    #[test]
    fn cross_host_http_location_is_not_a_secure_redirect() {
        assert!(!resolves_to_https(
            "http://example.com",
            "http://other.example.com/"
        ));
    }

    #[test]
    fn protocol_relative_location_follows_the_base_scheme() {
        assert!(!resolves_to_https("http://example.com", "//cdn.example.com"));
    }

    #[test]
    fn garbage_location_is_not_a_redirect() {
        assert!(!resolves_to_https("http://example.com", "ht!tp:::/bad"));
    }
}
