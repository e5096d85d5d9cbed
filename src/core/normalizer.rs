// src/core/normalizer.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::models::ScanError;

/// A URL guaranteed to carry an explicit `http` or `https` scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the target is served over HTTPS.
    pub fn is_https(&self) -> bool {
        self.0.starts_with("https://")
    }

    /// The insecure twin of this URL, probed by the transport checker to
    /// observe HTTP-to-HTTPS redirect behavior.
    pub fn http_twin(&self) -> String {
        if let Some(rest) = self.0.strip_prefix("https://") {
            format!("http://{rest}")
        } else if self.0.starts_with("http://") {
            self.0.clone()
        } else {
            format!("http://{}", self.0)
        }
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Ensures a user-supplied target carries an explicit scheme, defaulting to
/// secure transport: protocol-relative input gets `https:`, scheme-less
/// input gets `https://`, and an explicit `http://` is preserved as-is.
///
/// Idempotent: normalizing already-normalized input returns it unchanged.
/// No network access happens here.
pub fn normalize_url(raw: &str) -> Result<NormalizedUrl, ScanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidInput);
    }

    if let Some(rest) = trimmed.strip_prefix("//") {
        return Ok(NormalizedUrl(format!("https://{rest}")));
    }

    // `Url::parse` only succeeds for absolute URLs, so success means a
    // scheme is already present.
    if Url::parse(trimmed).is_ok() {
        Ok(NormalizedUrl(trimmed.to_string()))
    } else {
        Ok(NormalizedUrl(format!("https://{trimmed}")))
    }
}
