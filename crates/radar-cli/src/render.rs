//! Plain-text rendering shared by the command handlers.

use radar_core::{format_timestamp, time_ago, Listing, ScanResult, AGENTS};

const PLACEHOLDER: &str = "--";

/// Truncate to `max` characters, appending `...` when shortened.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_owned()
    }
}

pub(crate) fn or_placeholder(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(PLACEHOLDER)
}

/// `"2026-02-20 14:30 UTC (3h ago)"`.
pub(crate) fn when(ts: Option<&str>) -> String {
    format!("{} ({})", format_timestamp(ts), time_ago(ts))
}

/// Headline line for a listing: kind, title and where it came from.
pub(crate) fn listing_headline(listing: &Listing) -> String {
    let kind = listing
        .kind()
        .map_or_else(|| PLACEHOLDER.to_owned(), |k| k.to_string());
    let relevance = listing
        .relevance_percent()
        .map(|p| format!(" [{p}% match]"))
        .unwrap_or_default();
    format!(
        "{kind:<10}{}{relevance}",
        or_placeholder(listing.title.as_deref())
    )
}

pub(crate) fn print_listing(listing: &Listing) {
    println!("  {}", listing_headline(listing));
    println!(
        "    {} | {} | posted {}",
        or_placeholder(listing.company.as_deref()),
        or_placeholder(listing.location.as_deref()),
        or_placeholder(listing.date_posted.as_deref()),
    );
    if let Some(snippet) = listing.snippet.as_deref().filter(|s| !s.is_empty()) {
        println!("    {}", truncate(snippet, 100));
    }
    if let Some(url) = listing.source_url.as_deref() {
        println!(
            "    {} <{url}>",
            or_placeholder(listing.source_name.as_deref())
        );
    }
}

pub(crate) fn print_result_summary(result: &ScanResult) {
    println!(
        "status: {}   found: {}   jobs: {}   apartments: {}",
        result.status_label(),
        result.total_found(),
        result.job_count(),
        result.apartment_count(),
    );
    if result.email_was_sent() {
        println!(
            "email sent to {}",
            or_placeholder(result.email_recipient.as_deref())
        );
    }
    if let Some(summary) = result.summary_message.as_deref() {
        println!("{summary}");
    }
}

pub(crate) fn print_agents() {
    println!("{:<26}{:<30}ROLE", "ID", "NAME");
    for agent in &AGENTS {
        println!("{:<26}{:<30}{}", agent.id, agent.name, agent.role);
    }
}
