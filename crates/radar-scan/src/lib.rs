//! Scan lifecycle and local result cache.
//!
//! A scan composes an instruction from the user's [`radar_core::Settings`],
//! invokes the manager agent once, normalises its loosely-typed reply with
//! [`parser::parse`], and records successful results in the newest-first
//! [`HistoryStore`]. Independently, [`ScheduleReconciler`] mirrors the remote
//! periodic schedule and its recent executions.

pub mod history;
pub mod instruction;
pub mod orchestrator;
pub mod parser;
pub mod reconciler;
pub mod sample;
pub mod settings;
pub mod storage;
pub mod view;

pub use history::{HistoryError, HistoryFilter, HistoryStore, HISTORY_KEY};
pub use instruction::compose_instruction;
pub use orchestrator::{
    AlreadyScanning, ScanAttempt, ScanFailure, ScanMachine, ScanOrchestrator, ScanOutcome, ScanPhase,
    StatusLevel, StatusMessage,
};
pub use parser::{parse, ParseError};
pub use reconciler::{ScheduleAction, ScheduleReconciler, ScheduleSnapshot, ToggleOutcome};
pub use settings::{SettingsError, SettingsStore, SETTINGS_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use view::{DashboardMetrics, HistoryView};
