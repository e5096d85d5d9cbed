// src/core/risk.rs

use tracing::debug;

use crate::core::models::{
    CookieFinding, HeaderFinding, HeaderStatus, RiskLevel, RiskRating, TransportFinding,
};

/// Count of catalog headers graded ok.
pub fn headers_ok_count(headers: &[HeaderFinding]) -> usize {
    headers
        .iter()
        .filter(|finding| finding.status == HeaderStatus::Ok)
        .count()
}

/// Total issue strings across all cookie findings.
pub fn cookie_issue_count(cookies: &[CookieFinding]) -> usize {
    cookies.iter().map(|finding| finding.issues.len()).sum()
}

/// Heuristic score feeding the attention rating: one point per ok header,
/// one for HTTPS, one for an HTTP-to-HTTPS redirect.
pub fn heuristic_score(transport: &TransportFinding, headers: &[HeaderFinding]) -> usize {
    let mut score = headers_ok_count(headers);
    if transport.uses_https {
        score += 1;
    }
    if transport.redirects_to_https {
        score += 1;
    }
    score
}

/// Folds the three finding collections into the attention rating.
///
/// Six points or more with zero cookie issues rates Low; a single cookie
/// issue pushes even a perfect score down to Medium. Four or five points
/// rate Medium, anything below rates High. This table is the one and only
/// risk formula in the crate — every renderer reads the rating computed
/// here.
pub fn assess_risk(
    transport: &TransportFinding,
    headers: &[HeaderFinding],
    cookies: &[CookieFinding],
) -> RiskRating {
    let score = heuristic_score(transport, headers);
    let cookie_issues = cookie_issue_count(cookies);

    let (level, summary) = if score >= 6 && cookie_issues == 0 {
        (
            RiskLevel::Low,
            "The site demonstrates good baseline security practices.",
        )
    } else if score >= 4 {
        (
            RiskLevel::Medium,
            "Important security measures are missing or weakly configured.",
        )
    } else {
        (
            RiskLevel::High,
            "The site lacks fundamental protections against common attacks.",
        )
    };

    debug!(score, cookie_issues, level = %level, "Computed risk rating.");
    RiskRating {
        level,
        summary: summary.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge_base::HeaderName;

    fn transport(uses_https: bool, redirects_to_https: bool) -> TransportFinding {
        TransportFinding {
            uses_https,
            redirects_to_https,
            ..TransportFinding::default()
        }
    }

    fn headers_with_ok(ok: usize) -> Vec<HeaderFinding> {
        (0..5)
            .map(|index| HeaderFinding {
                name: HeaderName::StrictTransportSecurity,
                present: index < ok,
                value: None,
                status: if index < ok {
                    HeaderStatus::Ok
                } else {
                    HeaderStatus::Missing
                },
                details: String::new(),
                recommendation: String::new(),
            })
            .collect()
    }

    fn cookie_with_issues(count: usize) -> CookieFinding {
        CookieFinding {
            name: "session".to_string(),
            secure: false,
            http_only: false,
            same_site: "Not specified".to_string(),
            issues: vec!["issue".to_string(); count],
        }
    }

    #[test]
    fn score_six_with_clean_cookies_rates_low() {
        let rating = assess_risk(&transport(true, true), &headers_with_ok(4), &[]);
        assert_eq!(rating.level, RiskLevel::Low);
    }

    #[test]
    fn one_cookie_issue_overrides_a_perfect_score() {
        let rating = assess_risk(
            &transport(true, true),
            &headers_with_ok(5),
            &[cookie_with_issues(1)],
        );
        assert_eq!(rating.level, RiskLevel::Medium);
    }

    #[test]
    fn cookie_override_applies_exactly_at_the_low_threshold() {
        let transport = transport(true, true);
        let headers = headers_with_ok(4);
        assert_eq!(heuristic_score(&transport, &headers), 6);

        let clean = assess_risk(&transport, &headers, &[]);
        assert_eq!(clean.level, RiskLevel::Low);

        let with_issue = assess_risk(&transport, &headers, &[cookie_with_issues(1)]);
        assert_eq!(with_issue.level, RiskLevel::Medium);
    }

    #[test]
    fn score_four_rates_medium() {
        let rating = assess_risk(&transport(false, false), &headers_with_ok(4), &[]);
        assert_eq!(rating.level, RiskLevel::Medium);
    }

    #[test]
    fn score_three_rates_high() {
        let rating = assess_risk(&transport(true, false), &headers_with_ok(2), &[]);
        assert_eq!(rating.level, RiskLevel::High);
    }

    #[test]
    fn weak_headers_earn_no_points() {
        let mut headers = headers_with_ok(0);
        for finding in &mut headers {
            finding.status = HeaderStatus::Weak;
        }
        assert_eq!(headers_ok_count(&headers), 0);
        let rating = assess_risk(&transport(true, true), &headers, &[]);
        assert_eq!(rating.level, RiskLevel::High);
    }

    #[test]
    fn no_cookies_contribute_zero_issues() {
        assert_eq!(cookie_issue_count(&[]), 0);
    }

    #[test]
    fn cookie_issues_sum_across_cookies() {
        let cookies = vec![cookie_with_issues(2), cookie_with_issues(1)];
        assert_eq!(cookie_issue_count(&cookies), 3);
    }
}
