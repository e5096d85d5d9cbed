// src/core/http.rs

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, SET_COOKIE};
use reqwest::{Client, StatusCode, redirect};
use thiserror::Error;

/// User agent sent on every request this tool makes.
pub const USER_AGENT: &str = "RampartRS/0.1";

/// Timeout for the transport checker's secondary probes.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the primary fetch the header and cookie checkers consume.
pub const PRIMARY_TIMEOUT: Duration = Duration::from_secs(15);

/// A fetch failure, classified so callers can tell TLS handshake problems
/// apart from generic network errors.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("SSL/TLS error: {0}")]
    Tls(#[source] reqwest::Error),
    #[error("request error: {0}")]
    Network(#[source] reqwest::Error),
}

/// One `Set-Cookie` entry from a response: the cookie name, its `Secure`
/// flag, and every remaining attribute under a lowercased key. Values are
/// kept raw; bare flags such as `HttpOnly` map to an empty string.
#[derive(Debug, Clone)]
pub struct ResponseCookie {
    pub name: String,
    pub secure: bool,
    attributes: HashMap<String, String>,
}

impl ResponseCookie {
    /// Builds a cookie, lowercasing attribute keys so lookups stay
    /// case-insensitive however the server spelled them.
    pub fn new(
        name: impl Into<String>,
        secure: bool,
        attributes: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            name: name.into(),
            secure,
            attributes: attributes
                .into_iter()
                .map(|(key, value)| (key.to_ascii_lowercase(), value))
                .collect(),
        }
    }

    /// Case-insensitive attribute presence check.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(&name.to_ascii_lowercase())
    }

    /// Case-insensitive attribute lookup.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Everything the checkers need from one HTTP response.
#[derive(Debug)]
pub struct FetchedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub cookies: Vec<ResponseCookie>,
}

/// Builds a client with the given redirect behavior and timeout.
pub fn build_client(
    follow_redirects: bool,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    let policy = if follow_redirects {
        redirect::Policy::default()
    } else {
        redirect::Policy::none()
    };
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(policy)
        .timeout(timeout)
        .build()
}

/// Issues a GET and captures the status, headers and parsed cookies.
pub async fn fetch(client: &Client, url: &str) -> Result<FetchedResponse, FetchError> {
    let response = client.get(url).send().await.map_err(classify)?;
    let status = response.status();
    let headers = response.headers().clone();
    let cookies = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(parse_set_cookie)
        .collect();
    Ok(FetchedResponse {
        status,
        headers,
        cookies,
    })
}

/// Sorts a request failure into the TLS or generic bucket.
fn classify(err: reqwest::Error) -> FetchError {
    if is_tls_failure(&err) {
        FetchError::Tls(err)
    } else {
        FetchError::Network(err)
    }
}

/// Walks the error source chain looking for the TLS backend's error type.
fn is_tls_failure(err: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        if cause.downcast_ref::<native_tls::Error>().is_some() {
            return true;
        }
        source = cause.source();
    }
    false
}

/// Parses one raw `Set-Cookie` value down to flag level. The `Secure` flag
/// is promoted to a boolean; every other attribute lands in the map.
/// Deliberately shallow: flag presence is all the cookie checker grades.
fn parse_set_cookie(raw: &str) -> Option<ResponseCookie> {
    let mut segments = raw.split(';');
    let (name, _value) = segments.next()?.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let mut secure = false;
    let mut attributes = Vec::new();
    for segment in segments {
        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (segment.trim(), ""),
        };
        if key.is_empty() {
            continue;
        }
        if key.eq_ignore_ascii_case("secure") {
            secure = true;
        } else {
            attributes.push((key.to_string(), value.to_string()));
        }
    }

    Some(ResponseCookie::new(name, secure, attributes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_fully_flagged_cookie() {
        let cookie =
            parse_set_cookie("session=abc123; Path=/; Secure; HttpOnly; SameSite=Strict")
                .unwrap();
        assert_eq!(cookie.name, "session");
        assert!(cookie.secure);
        assert!(cookie.has_attribute("HttpOnly"));
        assert_eq!(cookie.attribute("SameSite"), Some("Strict"));
        assert_eq!(cookie.attribute("Path"), Some("/"));
    }

    #[test]
    fn parses_a_bare_cookie_without_flags() {
        let cookie = parse_set_cookie("tracker=1").unwrap();
        assert!(!cookie.secure);
        assert!(!cookie.has_attribute("HttpOnly"));
        assert_eq!(cookie.attribute("SameSite"), None);
    }

    #[test]
    fn attribute_lookup_is_case_insensitive() {
        let cookie = parse_set_cookie("id=9; HTTPONLY; samesite=lax").unwrap();
        assert!(cookie.has_attribute("HttpOnly"));
        assert!(cookie.has_attribute("httponly"));
        assert_eq!(cookie.attribute("SAMESITE"), Some("lax"));
    }

    #[test]
    fn secure_flag_is_detected_regardless_of_case() {
        let cookie = parse_set_cookie("id=9; SECURE").unwrap();
        assert!(cookie.secure);
        // Secure is promoted to the boolean, not kept as an attribute.
        assert!(!cookie.has_attribute("Secure"));
    }

    #[test]
    fn rejects_malformed_set_cookie_values() {
        assert!(parse_set_cookie("no-equals-sign").is_none());
        assert!(parse_set_cookie("=value-without-name; Secure").is_none());
    }
}
