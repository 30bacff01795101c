//! Domain types and configuration shared by every `listing-radar` crate.
//!
//! Scan payloads originate from an untrusted external agent, so [`ScanResult`]
//! and [`Listing`] decode leniently: every field is optional and values of the
//! wrong JSON type are treated as absent rather than failing the whole payload.

pub mod agents;
pub mod app_config;
pub mod config;
pub mod display;
pub mod lenient;
pub mod listing;
pub mod scan;
pub mod schedule;
pub mod settings;

use thiserror::Error;

pub use agents::{find_agent, AgentProfile, AGENTS, MANAGER_AGENT_ID};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_SCHEDULE_ID};
pub use display::{cron_to_human, format_timestamp, parse_timestamp, time_ago, time_ago_at};
pub use listing::{Listing, ListingKind};
pub use scan::{HistoryEntry, ScanResult, ScanStatus};
pub use schedule::{ExecutionLog, Schedule, DEFAULT_TIMEZONE};
pub use settings::{add_tag, ListingType, Settings, FREQUENCY_PRESETS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
