use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::listing::{Listing, ListingKind};

/// Outcome of one scan as reported by the manager agent.
///
/// The count fields are advisory display values supplied by the producer and
/// are never reconciled with `listings.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub scan_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub total_listings_found: Option<u64>,
    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub job_listings_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub apartment_listings_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub email_sent: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub email_recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub scan_timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub listings: Vec<Listing>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub summary_message: Option<String>,
}

/// Coarse interpretation of the free-text `scan_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Succeeded,
    Failed,
    Unknown,
}

impl ScanStatus {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "completed" | "success" => Self::Succeeded,
            "failed" | "error" => Self::Failed,
            _ => Self::Unknown,
        }
    }
}

impl ScanResult {
    #[must_use]
    pub fn status(&self) -> ScanStatus {
        self.scan_status
            .as_deref()
            .map_or(ScanStatus::Unknown, ScanStatus::from_label)
    }

    /// Status text for display, `"unknown"` when absent.
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.scan_status.as_deref().unwrap_or("unknown")
    }

    #[must_use]
    pub fn total_found(&self) -> u64 {
        self.total_listings_found.unwrap_or(0)
    }

    #[must_use]
    pub fn job_count(&self) -> u64 {
        self.job_listings_count.unwrap_or(0)
    }

    #[must_use]
    pub fn apartment_count(&self) -> u64 {
        self.apartment_listings_count.unwrap_or(0)
    }

    #[must_use]
    pub fn email_was_sent(&self) -> bool {
        self.email_sent.unwrap_or(false)
    }

    /// Whether any listing (not the advisory counts) is of `kind`.
    #[must_use]
    pub fn has_listing_kind(&self, kind: ListingKind) -> bool {
        self.listings.iter().any(|l| l.is_kind(kind))
    }
}

/// One recorded scan. Created once per successful scan and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Millisecond timestamp rendered as text; unique within a history.
    pub id: String,
    pub timestamp: String,
    pub result: ScanResult,
}
