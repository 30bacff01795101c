//! `history` command handler.

use radar_core::{format_timestamp, time_ago};
use radar_scan::{FileStore, HistoryFilter, HistoryStore, HistoryView};

use crate::render;

/// List past scans, or every listing of one scan when `expand` is given.
///
/// # Errors
///
/// Returns an error if `expand` names a scan not present in the (filtered)
/// history.
pub(crate) fn run_history(
    storage: &FileStore,
    filter: HistoryFilter,
    sample: bool,
    expand: Option<&str>,
) -> anyhow::Result<()> {
    let history = HistoryStore::open(storage.clone());
    let view = HistoryView::new(history.entries(), sample);
    let entries = view.filtered(filter);

    if let Some(id) = expand {
        let entry = entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| anyhow::anyhow!("no scan with id {id} in history"))?;
        println!("scan {} at {}", entry.id, format_timestamp(Some(&entry.timestamp)));
        render::print_result_summary(&entry.result);
        if entry.result.listings.is_empty() {
            println!("no listings recorded for this scan");
        }
        for listing in &entry.result.listings {
            render::print_listing(listing);
        }
        return Ok(());
    }

    if entries.is_empty() {
        println!("no scans found; run `listing-radar scan` first");
        return Ok(());
    }

    println!(
        "{:<16}{:<22}{:<10}{:<11}{:<7}{:<6}{:<6}EMAIL",
        "ID", "WHEN", "AGE", "STATUS", "FOUND", "JOBS", "APTS"
    );
    for entry in &entries {
        let result = &entry.result;
        println!(
            "{:<16}{:<22}{:<10}{:<11}{:<7}{:<6}{:<6}{}",
            render::truncate(&entry.id, 14),
            format_timestamp(Some(&entry.timestamp)),
            time_ago(Some(&entry.timestamp)),
            render::truncate(result.status_label(), 9),
            result.total_found(),
            result.job_count(),
            result.apartment_count(),
            if result.email_was_sent() { "sent" } else { "-" },
        );
    }
    Ok(())
}
