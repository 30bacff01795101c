use serde::{Deserialize, Serialize};

/// Which categories of listing a scan should look for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Jobs,
    Apartments,
    #[default]
    Both,
}

impl ListingType {
    /// Label used inside the scan instruction.
    #[must_use]
    pub fn instruction_label(self) -> &'static str {
        match self {
            ListingType::Jobs => "Jobs",
            ListingType::Apartments => "Apartments",
            ListingType::Both => "Jobs and Apartments",
        }
    }
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingType::Jobs => write!(f, "jobs"),
            ListingType::Apartments => write!(f, "apartments"),
            ListingType::Both => write!(f, "both"),
        }
    }
}

/// Cron presets offered for the scan frequency, with their display labels.
pub const FREQUENCY_PRESETS: [(&str, &str); 5] = [
    ("*/15 * * * *", "Every 15 minutes"),
    ("*/30 * * * *", "Every 30 minutes"),
    ("0 * * * *", "Every hour"),
    ("0 */6 * * *", "Every 6 hours"),
    ("0 9 * * *", "Daily at 9 AM"),
];

/// User-editable search criteria.
///
/// Persisted verbatim as JSON; field names match the stored layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub keywords: Vec<String>,
    pub locations: Vec<String>,
    pub listing_type: ListingType,
    pub additional_urls: Vec<String>,
    pub notification_email: String,
    pub frequency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            locations: Vec::new(),
            listing_type: ListingType::Both,
            additional_urls: Vec::new(),
            notification_email: String::new(),
            frequency: "0 * * * *".to_owned(),
        }
    }
}

/// Adds a tag after trimming it. Empty values and exact duplicates are
/// ignored; returns whether the tag was added.
pub fn add_tag(tags: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || tags.iter().any(|t| t == value) {
        return false;
    }
    tags.push(value.to_owned());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run_state() {
        let settings = Settings::default();
        assert!(settings.keywords.is_empty());
        assert_eq!(settings.listing_type, ListingType::Both);
        assert_eq!(settings.frequency, "0 * * * *");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["listingType"], "both");
        assert!(json.get("additionalUrls").is_some());
        assert!(json.get("notificationEmail").is_some());
    }

    #[test]
    fn partial_document_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"keywords":["rust"],"listingType":"jobs"}"#).unwrap();
        assert_eq!(settings.keywords, vec!["rust".to_owned()]);
        assert_eq!(settings.listing_type, ListingType::Jobs);
        assert_eq!(settings.frequency, "0 * * * *");
    }

    #[test]
    fn add_tag_trims_and_rejects_duplicates() {
        let mut tags = Vec::new();
        assert!(add_tag(&mut tags, "  rust developer "));
        assert!(!add_tag(&mut tags, "rust developer"));
        assert!(!add_tag(&mut tags, "   "));
        assert_eq!(tags, vec!["rust developer".to_owned()]);
    }

    #[test]
    fn instruction_labels() {
        assert_eq!(ListingType::Both.instruction_label(), "Jobs and Apartments");
        assert_eq!(ListingType::Jobs.instruction_label(), "Jobs");
        assert_eq!(ListingType::Apartments.instruction_label(), "Apartments");
    }
}
