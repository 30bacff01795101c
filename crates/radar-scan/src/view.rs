//! Read-side projection over the history for presentation.
//!
//! In sample mode the view substitutes fixed demonstration data; the real
//! history underneath is neither read nor modified.

use radar_core::{HistoryEntry, Listing};

use crate::history::{filter_entries, HistoryFilter};
use crate::sample;

/// Aggregates shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMetrics {
    /// Timestamp of the most recent scan, if any.
    pub last_scan: Option<String>,
    /// Advisory total reported by the most recent scan.
    pub listings_found: u64,
    pub total_scans: usize,
    pub emails_sent: usize,
}

#[derive(Debug, Clone)]
pub struct HistoryView {
    entries: Vec<HistoryEntry>,
    latest: Option<HistoryEntry>,
}

impl HistoryView {
    /// Projects `entries` (newest first), or the sample data when
    /// `sample_mode` is set.
    #[must_use]
    pub fn new(entries: &[HistoryEntry], sample_mode: bool) -> Self {
        if sample_mode {
            Self::sample()
        } else {
            Self {
                entries: entries.to_vec(),
                latest: entries.first().cloned(),
            }
        }
    }

    #[must_use]
    pub fn sample() -> Self {
        Self {
            entries: sample::sample_history(),
            latest: Some(sample::sample_latest()),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.latest.as_ref()
    }

    #[must_use]
    pub fn filtered(&self, filter: HistoryFilter) -> Vec<&HistoryEntry> {
        filter_entries(&self.entries, filter)
    }

    /// Up to `limit` listings from the latest scan.
    #[must_use]
    pub fn latest_listings(&self, limit: usize) -> &[Listing] {
        match &self.latest {
            Some(entry) => {
                let listings = &entry.result.listings;
                &listings[..listings.len().min(limit)]
            }
            None => &[],
        }
    }

    #[must_use]
    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics {
            last_scan: self.latest.as_ref().map(|entry| {
                entry
                    .result
                    .scan_timestamp
                    .clone()
                    .unwrap_or_else(|| entry.timestamp.clone())
            }),
            listings_found: self
                .latest
                .as_ref()
                .map_or(0, |entry| entry.result.total_found()),
            total_scans: self.entries.len(),
            emails_sent: self
                .entries
                .iter()
                .filter(|entry| entry.result.email_was_sent())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use radar_core::ScanResult;

    use super::*;

    fn entry(id: &str, total: u64, email: bool) -> HistoryEntry {
        HistoryEntry {
            id: id.to_owned(),
            timestamp: format!("2026-03-0{id}T10:00:00Z"),
            result: ScanResult {
                total_listings_found: Some(total),
                email_sent: Some(email),
                ..ScanResult::default()
            },
        }
    }

    #[test]
    fn live_metrics_follow_history() {
        let entries = vec![entry("3", 4, true), entry("2", 1, false), entry("1", 9, true)];
        let view = HistoryView::new(&entries, false);
        let metrics = view.metrics();
        assert_eq!(metrics.last_scan.as_deref(), Some("2026-03-03T10:00:00Z"));
        assert_eq!(metrics.listings_found, 4);
        assert_eq!(metrics.total_scans, 3);
        assert_eq!(metrics.emails_sent, 2);
    }

    #[test]
    fn empty_history_has_zero_metrics() {
        let view = HistoryView::new(&[], false);
        assert_eq!(
            view.metrics(),
            DashboardMetrics {
                last_scan: None,
                listings_found: 0,
                total_scans: 0,
                emails_sent: 0,
            }
        );
        assert!(view.latest_listings(5).is_empty());
    }

    #[test]
    fn sample_mode_ignores_real_history() {
        let entries = vec![entry("1", 9, false)];
        let view = HistoryView::new(&entries, true);
        assert_eq!(view.entries().len(), 3);
        assert_eq!(view.latest().map(|e| e.id.as_str()), Some("sample"));
        let metrics = view.metrics();
        assert_eq!(metrics.listings_found, 5);
        assert_eq!(metrics.total_scans, 3);
        assert_eq!(metrics.emails_sent, 2);
        assert_eq!(view.latest_listings(3).len(), 3);
    }

    #[test]
    fn sample_mode_filters_by_listing_kind() {
        let view = HistoryView::sample();
        let ids: Vec<&str> = view
            .filtered(HistoryFilter::Apartments)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["s1", "s2"]);
    }
}
