// src/core/cache.rs

use std::collections::HashMap;

use crate::core::models::ScanReport;

/// Completed scans keyed by normalized URL.
///
/// The cache is a capability of the caller, not of the engine: the
/// scanners stay stateless, and the UI decides when a cached report is
/// served and when an entry is invalidated (an explicit re-scan request).
#[derive(Debug, Default)]
pub struct ScanCache {
    entries: HashMap<String, ScanReport>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target_url: &str) -> Option<&ScanReport> {
        self.entries.get(target_url)
    }

    pub fn insert(&mut self, report: ScanReport) {
        self.entries.insert(report.target_url.clone(), report);
    }

    pub fn invalidate(&mut self, target_url: &str) {
        self.entries.remove(target_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{RiskLevel, RiskRating, TransportFinding};
    use chrono::Utc;

    fn report(target_url: &str) -> ScanReport {
        ScanReport {
            target_url: target_url.to_string(),
            scanned_at: Utc::now(),
            transport: TransportFinding::default(),
            headers: Vec::new(),
            cookies: Vec::new(),
            risk: RiskRating {
                level: RiskLevel::High,
                summary: String::new(),
            },
        }
    }

    #[test]
    fn insert_then_get_round_trips() {
        let mut cache = ScanCache::new();
        assert!(cache.get("https://example.com").is_none());
        cache.insert(report("https://example.com"));
        assert!(cache.get("https://example.com").is_some());
    }

    #[test]
    fn invalidate_forces_a_fresh_scan() {
        let mut cache = ScanCache::new();
        cache.insert(report("https://example.com"));
        cache.invalidate("https://example.com");
        assert!(cache.get("https://example.com").is_none());
    }

    #[test]
    fn entries_are_keyed_per_target() {
        let mut cache = ScanCache::new();
        cache.insert(report("https://a.example"));
        cache.insert(report("https://b.example"));
        cache.invalidate("https://a.example");
        assert!(cache.get("https://b.example").is_some());
    }
}
