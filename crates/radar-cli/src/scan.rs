//! `scan` and `dashboard` command handlers.

use radar_core::AppConfig;
use radar_platform::PlatformClient;
use radar_scan::{
    FileStore, HistoryStore, HistoryView, ScanAttempt, ScanOrchestrator, ScanOutcome,
    SettingsStore,
};

use crate::render;

/// Listings shown from the latest scan on the dashboard.
const DASHBOARD_LISTINGS: usize = 10;

/// Run a single scan with the saved settings and print its outcome.
///
/// Successful scans are recorded in the local history before returning.
///
/// # Errors
///
/// Returns an error if the platform client cannot be built, or if the scan
/// fails; the error carries the message shown to the user.
pub(crate) async fn run_scan(config: &AppConfig) -> anyhow::Result<()> {
    let client = PlatformClient::from_app_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build platform client: {e}"))?;
    let storage = FileStore::new(&config.data_dir);
    let settings = SettingsStore::new(storage.clone()).load();
    let orchestrator = ScanOrchestrator::new(
        client,
        config.manager_agent_id.clone(),
        HistoryStore::open(storage),
    );

    println!("{}", radar_scan::orchestrator::SCANNING_MESSAGE);
    if let Some(agent) = radar_core::find_agent(&config.manager_agent_id) {
        println!("active agent: {} ({})", agent.name, agent.role);
    }

    match orchestrator.scan(&settings).await {
        ScanAttempt::AlreadyScanning => anyhow::bail!("a scan is already running"),
        ScanAttempt::Finished {
            outcome: ScanOutcome::Recorded(entry),
            status,
        } => {
            println!("{status}");
            println!("scan id: {}", entry.id);
            render::print_result_summary(&entry.result);
            for listing in &entry.result.listings {
                render::print_listing(listing);
            }
            Ok(())
        }
        ScanAttempt::Finished {
            outcome: ScanOutcome::Failed(failure),
            status,
        } => {
            tracing::debug!(?failure, "scan failed");
            anyhow::bail!("{status}")
        }
    }
}

/// Print dashboard metrics and the latest listings.
pub(crate) fn run_dashboard(storage: &FileStore, sample: bool) {
    let history = HistoryStore::open(storage.clone());
    let view = HistoryView::new(history.entries(), sample);
    let metrics = view.metrics();

    if sample {
        println!("(sample data)");
    }
    println!("last scan:      {}", render::when(metrics.last_scan.as_deref()));
    println!("listings found: {}", metrics.listings_found);
    println!("total scans:    {}", metrics.total_scans);
    println!("emails sent:    {}", metrics.emails_sent);

    let Some(latest) = view.latest() else {
        println!();
        println!("no scans yet; run `listing-radar scan` to start one");
        return;
    };
    println!();
    render::print_result_summary(&latest.result);
    let listings = view.latest_listings(DASHBOARD_LISTINGS);
    if listings.is_empty() {
        println!("no listings in the latest scan");
    }
    for listing in listings {
        render::print_listing(listing);
    }
}
