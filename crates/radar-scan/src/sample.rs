//! Fixed demonstration data shown in sample mode.
//!
//! Nothing here is ever written to storage.

use radar_core::{HistoryEntry, Listing, ScanResult};

/// Id of the synthetic "latest" entry shown on the dashboard in sample mode.
pub const SAMPLE_LATEST_ID: &str = "sample";

const SAMPLE_TIMESTAMP: &str = "2026-02-20T14:30:00Z";

#[allow(clippy::too_many_arguments)]
fn listing(
    title: &str,
    company: &str,
    location: &str,
    source_url: &str,
    source_name: &str,
    date_posted: &str,
    listing_type: &str,
    snippet: &str,
    relevance_score: f64,
) -> Listing {
    Listing {
        title: Some(title.to_owned()),
        company: Some(company.to_owned()),
        location: Some(location.to_owned()),
        source_url: Some(source_url.to_owned()),
        source_name: Some(source_name.to_owned()),
        date_posted: Some(date_posted.to_owned()),
        listing_type: Some(listing_type.to_owned()),
        snippet: Some(snippet.to_owned()),
        relevance_score: Some(relevance_score),
    }
}

#[must_use]
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(
            "Senior Frontend Developer",
            "TechCorp",
            "New York, NY",
            "https://linkedin.com/jobs/1",
            "LinkedIn",
            "2026-02-20",
            "job",
            "Looking for an experienced React developer with 5+ years of experience in building modern web applications.",
            0.95,
        ),
        listing(
            "Full Stack Engineer",
            "StartupXYZ",
            "San Francisco, CA",
            "https://linkedin.com/jobs/2",
            "LinkedIn",
            "2026-02-19",
            "job",
            "Join our growing team building next-generation SaaS products with React, Node.js, and PostgreSQL.",
            0.88,
        ),
        listing(
            "2BR Apartment in Williamsburg",
            "Brooklyn Realty",
            "Brooklyn, NY",
            "https://apartments.com/1",
            "Apartments.com",
            "2026-02-20",
            "apartment",
            "Spacious 2-bedroom apartment with modern finishes, in-unit laundry, rooftop access. Pet friendly.",
            0.92,
        ),
        listing(
            "Backend Engineer - Python",
            "DataFlow Inc",
            "Remote",
            "https://linkedin.com/jobs/3",
            "LinkedIn",
            "2026-02-18",
            "job",
            "We need a backend engineer proficient in Python, FastAPI, and PostgreSQL for our data pipeline team.",
            0.85,
        ),
        listing(
            "Studio Apartment - Upper East Side",
            "Manhattan Living",
            "New York, NY",
            "https://streeteasy.com/1",
            "StreetEasy",
            "2026-02-19",
            "apartment",
            "Charming studio in prime UES location, pet-friendly building with doorman and laundry in basement.",
            0.78,
        ),
    ]
}

#[must_use]
pub fn sample_scan_result() -> ScanResult {
    ScanResult {
        scan_status: Some("completed".to_owned()),
        total_listings_found: Some(5),
        job_listings_count: Some(3),
        apartment_listings_count: Some(2),
        email_sent: Some(true),
        email_recipient: Some("user@example.com".to_owned()),
        scan_timestamp: Some(SAMPLE_TIMESTAMP.to_owned()),
        listings: sample_listings(),
        summary_message: Some(
            "Found 5 new listings matching your criteria: 3 job listings and 2 apartment listings. Email notification sent to user@example.com."
                .to_owned(),
        ),
    }
}

/// The dashboard's latest scan in sample mode.
#[must_use]
pub fn sample_latest() -> HistoryEntry {
    HistoryEntry {
        id: SAMPLE_LATEST_ID.to_owned(),
        timestamp: SAMPLE_TIMESTAMP.to_owned(),
        result: sample_scan_result(),
    }
}

/// Three demonstration history entries, newest first.
#[must_use]
pub fn sample_history() -> Vec<HistoryEntry> {
    let full = sample_scan_result();

    let mut smaller = full.clone();
    smaller.total_listings_found = Some(3);
    smaller.job_listings_count = Some(2);
    smaller.apartment_listings_count = Some(1);
    smaller.listings.truncate(3);
    smaller.scan_timestamp = Some("2026-02-20T13:30:00Z".to_owned());

    let mut smallest = full.clone();
    smallest.total_listings_found = Some(2);
    smallest.job_listings_count = Some(1);
    smallest.apartment_listings_count = Some(1);
    smallest.email_sent = Some(false);
    smallest.listings.truncate(2);
    smallest.scan_timestamp = Some("2026-02-20T12:30:00Z".to_owned());

    vec![
        HistoryEntry {
            id: "s1".to_owned(),
            timestamp: SAMPLE_TIMESTAMP.to_owned(),
            result: full,
        },
        HistoryEntry {
            id: "s2".to_owned(),
            timestamp: "2026-02-20T13:30:00Z".to_owned(),
            result: smaller,
        },
        HistoryEntry {
            id: "s3".to_owned(),
            timestamp: "2026-02-20T12:30:00Z".to_owned(),
            result: smallest,
        },
    ]
}
