//! `schedule` command handlers.

use clap::Subcommand;
use radar_core::{cron_to_human, AppConfig};
use radar_platform::PlatformClient;
use radar_scan::{ScheduleReconciler, ScheduleSnapshot, ToggleOutcome};

use crate::render;

/// Sub-commands available under `schedule`.
#[derive(Debug, Subcommand)]
pub enum ScheduleCommands {
    /// Show the recurring schedule and its recent runs
    Status,
    /// Pause an active schedule, or resume a paused one
    Toggle,
}

/// # Errors
///
/// Returns an error if the platform client cannot be built, or if `toggle`
/// finds no schedule to act on.
pub(crate) async fn run_schedule(
    config: &AppConfig,
    command: ScheduleCommands,
) -> anyhow::Result<()> {
    let client = PlatformClient::from_app_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build platform client: {e}"))?;
    let reconciler = ScheduleReconciler::new(
        client,
        config.schedule_id.clone(),
        config.schedule_log_limit,
    );

    let Some(snapshot) = reconciler.refresh().await else {
        anyhow::bail!("schedule refresh already in progress");
    };

    match command {
        ScheduleCommands::Status => {
            print_snapshot(&snapshot);
            Ok(())
        }
        ScheduleCommands::Toggle => {
            let schedule = snapshot
                .schedule
                .ok_or_else(|| anyhow::anyhow!("no schedule available to toggle"))?;
            match reconciler.toggle(&schedule).await {
                ToggleOutcome::Busy => anyhow::bail!("schedule is busy; try again"),
                ToggleOutcome::Toggled {
                    action,
                    mutation_error,
                    snapshot,
                } => {
                    if let Some(error) = mutation_error {
                        eprintln!("failed to {action} schedule: {error}");
                    }
                    print_snapshot(&snapshot);
                    Ok(())
                }
            }
        }
    }
}

fn print_snapshot(snapshot: &ScheduleSnapshot) {
    match &snapshot.schedule {
        Some(schedule) => {
            println!("schedule:  {}", schedule.id);
            println!("state:     {}", schedule.state_label());
            println!(
                "cadence:   {} ({})",
                cron_to_human(&schedule.cron_expression),
                schedule.timezone_or_default()
            );
            println!("next run:  {}", render::when(schedule.next_run_time.as_deref()));
            println!("last run:  {}", render::when(schedule.last_run_at.as_deref()));
        }
        None => println!("schedule:  unavailable"),
    }

    println!();
    if snapshot.logs.is_empty() {
        println!("no recent runs");
        return;
    }
    println!("{:<28}{:<34}RESULT", "RUN", "EXECUTED");
    for log in &snapshot.logs {
        println!(
            "{:<28}{:<34}{}",
            render::truncate(&log.id, 26),
            render::when(log.executed_at.as_deref()),
            log.outcome_label()
        );
    }
}
