//! JSON report generator: the full `ScanReport` serialized as-is, the
//! machine-readable counterpart of the text document.

use crate::core::models::ScanReport;

/// Serializes a completed scan as pretty-printed JSON.
pub fn generate(report: &ScanReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{RiskLevel, RiskRating, TransportFinding};
    use chrono::Utc;

    #[test]
    fn serializes_the_full_report() {
        let report = ScanReport {
            target_url: "https://example.com".to_string(),
            scanned_at: Utc::now(),
            transport: TransportFinding::default(),
            headers: Vec::new(),
            cookies: Vec::new(),
            risk: RiskRating {
                level: RiskLevel::Low,
                summary: "The site demonstrates good baseline security practices."
                    .to_string(),
            },
        };

        let json = generate(&report).unwrap();
        assert!(json.contains("\"target_url\""));
        assert!(json.contains("\"Low\""));
        assert!(json.contains("\"transport\""));
    }
}
