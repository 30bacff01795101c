use serde::{Deserialize, Serialize};

use crate::lenient;

/// Category of a discovered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Job,
    Apartment,
}

impl ListingKind {
    /// Case-insensitive match of the agent's free-text `listing_type`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "job" => Some(Self::Job),
            "apartment" => Some(Self::Apartment),
            _ => None,
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingKind::Job => write!(f, "Job"),
            ListingKind::Apartment => write!(f, "Apartment"),
        }
    }
}

/// One discovered job or apartment listing, exactly as the agent reported it.
///
/// Every field is optional: the producer is untrusted and payloads are not
/// schema-checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Company for jobs, building or agency for apartments.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Free text; not necessarily a date.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Nominally in `[0, 1]`.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

impl Listing {
    #[must_use]
    pub fn kind(&self) -> Option<ListingKind> {
        self.listing_type.as_deref().and_then(ListingKind::from_label)
    }

    #[must_use]
    pub fn is_kind(&self, kind: ListingKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Relevance as a whole percentage, clamped to `0..=100`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn relevance_percent(&self) -> Option<u8> {
        self.relevance_score
            .map(|score| (score * 100.0).round().clamp(0.0, 100.0) as u8)
    }
}
