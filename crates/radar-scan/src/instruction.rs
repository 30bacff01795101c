//! Natural-language scan instruction sent to the manager agent.

use radar_core::Settings;

pub const DEFAULT_KEYWORDS: &str = "software engineer, apartment rental";
pub const DEFAULT_LOCATIONS: &str = "New York";
const BASE_SOURCE: &str = "LinkedIn";
const NO_EMAIL: &str = "not specified";

/// Builds the instruction for one scan from the current settings.
///
/// Empty keyword or location lists fall back to defaults; LinkedIn is always
/// the first website.
#[must_use]
pub fn compose_instruction(settings: &Settings) -> String {
    let keywords = join_or(&settings.keywords, DEFAULT_KEYWORDS);
    let locations = join_or(&settings.locations, DEFAULT_LOCATIONS);

    let mut websites = vec![BASE_SOURCE];
    websites.extend(non_blank(&settings.additional_urls));

    let email = settings.notification_email.trim();
    let email = if email.is_empty() { NO_EMAIL } else { email };

    format!(
        "Scan for listings with the following criteria:\n\
         Keywords: {keywords}\n\
         Locations: {locations}\n\
         Listing Type: {}\n\
         Websites: {}\n\
         Notification Email: {email}",
        settings.listing_type.instruction_label(),
        websites.join(", "),
    )
}

fn non_blank(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn join_or(values: &[String], default: &str) -> String {
    let joined = non_blank(values).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        default.to_owned()
    } else {
        joined
    }
}
