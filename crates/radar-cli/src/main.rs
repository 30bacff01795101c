mod history;
mod render;
mod scan;
mod schedule;
mod settings;

use clap::{Parser, Subcommand};
use radar_core::AppConfig;
use radar_scan::{FileStore, HistoryFilter};
use tracing_subscriber::EnvFilter;

use crate::schedule::ScheduleCommands;
use crate::settings::SettingsCommands;

#[derive(Debug, Parser)]
#[command(name = "listing-radar")]
#[command(about = "Scan job and apartment listings through the radar agents")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one scan now with the saved settings
    Scan,
    /// Show scan metrics and the latest listings
    Dashboard {
        /// Show demonstration data instead of the real history
        #[arg(long)]
        sample: bool,
    },
    /// Browse past scans, newest first
    History {
        /// Only scans containing this kind of listing: all, jobs or apartments
        #[arg(long, default_value = "all")]
        filter: HistoryFilter,
        /// Show demonstration data instead of the real history
        #[arg(long)]
        sample: bool,
        /// Print every listing of the scan with this id
        #[arg(long)]
        expand: Option<String>,
    },
    /// Inspect or toggle the recurring scan schedule
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Show or edit the search criteria
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// List the cooperating agents
    Agents,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("listing-radar: run with --help to see available commands");
        return Ok(());
    };

    let config = radar_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, data_dir = %config.data_dir.display(), "configuration loaded");

    match command {
        Commands::Scan => scan::run_scan(&config).await,
        Commands::Dashboard { sample } => {
            scan::run_dashboard(&store(&config), sample);
            Ok(())
        }
        Commands::History {
            filter,
            sample,
            expand,
        } => history::run_history(&store(&config), filter, sample, expand.as_deref()),
        Commands::Schedule { command } => schedule::run_schedule(&config, command).await,
        Commands::Settings { command } => settings::run_settings(&store(&config), command),
        Commands::Agents => {
            render::print_agents();
            Ok(())
        }
    }
}

fn store(config: &AppConfig) -> FileStore {
    FileStore::new(&config.data_dir)
}

#[cfg(test)]
mod tests;
