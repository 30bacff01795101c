//! Newest-first scan history, cached in memory and mirrored to storage.

use std::collections::HashSet;
use std::str::FromStr;

use radar_core::{HistoryEntry, ListingKind, ScanResult};
use thiserror::Error;

use crate::storage::KeyValueStore;

/// Storage key holding the serialized history array.
pub const HISTORY_KEY: &str = "listingRadar_history";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history already contains an entry with id '{0}'")]
    DuplicateId(String),
}

/// Listing-kind filter applied to history entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryFilter {
    #[default]
    All,
    Jobs,
    Apartments,
}

impl HistoryFilter {
    /// An entry matches when at least one of its listings is of the filtered
    /// kind. The advisory counts are not consulted.
    #[must_use]
    pub fn matches(self, result: &ScanResult) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Jobs => result.has_listing_kind(ListingKind::Job),
            HistoryFilter::Apartments => result.has_listing_kind(ListingKind::Apartment),
        }
    }
}

impl FromStr for HistoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "jobs" => Ok(Self::Jobs),
            "apartments" => Ok(Self::Apartments),
            other => Err(format!(
                "unknown history filter '{other}' (expected all, jobs or apartments)"
            )),
        }
    }
}

/// Filters `entries` preserving their order.
#[must_use]
pub fn filter_entries(entries: &[HistoryEntry], filter: HistoryFilter) -> Vec<&HistoryEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(&entry.result))
        .collect()
}

/// The scan history. Index 0 is the most recent scan.
///
/// Every mutation rewrites the whole array under [`HISTORY_KEY`]. Persistence
/// failures are logged and swallowed; the in-memory copy stays authoritative
/// for the session.
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Creates the store and loads whatever history is persisted.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            entries: Vec::new(),
        };
        store.load();
        store
    }

    /// Replaces the in-memory history with the persisted one.
    ///
    /// Missing, unreadable or undecodable data yields an empty history. When
    /// persisted ids collide, the first (newest) occurrence wins.
    pub fn load(&mut self) -> &[HistoryEntry] {
        self.entries = match self.storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => dedupe(entries),
                Err(e) => {
                    tracing::warn!(error = %e, "persisted history is corrupt; starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted history; starting empty");
                Vec::new()
            }
        };
        &self.entries
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Prepends `entry` and persists the full history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::DuplicateId`] if an entry with the same id is
    /// already present; the history is left unchanged.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        if self.entries.iter().any(|existing| existing.id == entry.id) {
            return Err(HistoryError::DuplicateId(entry.id));
        }
        tracing::debug!(entry_id = %entry.id, "recording scan in history");
        self.entries.insert(0, entry);
        self.persist();
        Ok(())
    }

    #[must_use]
    pub fn filter(&self, filter: HistoryFilter) -> Vec<&HistoryEntry> {
        filter_entries(&self.entries, filter)
    }

    /// Id for the next entry: `now_ms`, bumped past the newest numeric id
    /// when the clock has not advanced (or went backwards).
    #[must_use]
    pub fn next_id(&self, now_ms: i64) -> String {
        let newest = self
            .entries
            .first()
            .and_then(|entry| entry.id.parse::<i64>().ok());
        let mut candidate = match newest {
            Some(newest) if newest >= now_ms => newest.saturating_add(1),
            _ => now_ms,
        };
        while self.entries.iter().any(|e| e.id == candidate.to_string()) {
            candidate = candidate.saturating_add(1);
        }
        candidate.to_string()
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize history");
                return;
            }
        };
        if let Err(e) = self.storage.set(HISTORY_KEY, &serialized) {
            tracing::warn!(error = %e, entries = self.entries.len(), "failed to persist history");
        }
    }
}

fn dedupe(entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    let mut seen = HashSet::new();
    let before = entries.len();
    let kept: Vec<HistoryEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect();
    if kept.len() != before {
        tracing::warn!(
            dropped = before - kept.len(),
            "persisted history contained duplicate ids"
        );
    }
    kept
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
