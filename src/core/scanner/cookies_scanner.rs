// src/core/scanner/cookies_scanner.rs

use tracing::debug;

use crate::core::http::ResponseCookie;
use crate::core::models::CookieFinding;

const SECURE_MISSING: &str = "Cookie missing 'Secure' flag (may be sent over plain HTTP).";
const HTTP_ONLY_MISSING: &str = "Cookie missing 'HttpOnly' flag (accessible via JavaScript/XSS).";

/// Grades the protective flags of every cookie in the response, preserving
/// response order. Pure function, no I/O.
///
/// Zero cookies yields an empty list — a valid outcome, not an error.
pub fn run_cookies_scan(cookies: &[ResponseCookie]) -> Vec<CookieFinding> {
    cookies.iter().map(check_cookie).collect()
}

fn check_cookie(cookie: &ResponseCookie) -> CookieFinding {
    let mut issues = Vec::new();

    if !cookie.secure {
        issues.push(SECURE_MISSING.to_string());
    }

    // Presence of the key is the whole signal; browsers set HttpOnly as a
    // bare flag, so the attribute value is irrelevant.
    let http_only = cookie.has_attribute("HttpOnly");
    if !http_only {
        issues.push(HTTP_ONLY_MISSING.to_string());
    }

    let same_site = cookie
        .attribute("SameSite")
        .map(str::to_string)
        .unwrap_or_else(|| "Not specified".to_string());

    debug!(cookie = %cookie.name, issues = issues.len(), "Graded cookie.");

    CookieFinding {
        name: cookie.name.clone(),
        secure: cookie.secure,
        http_only,
        same_site,
        issues,
    }
}
