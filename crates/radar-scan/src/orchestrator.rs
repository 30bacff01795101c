//! Single-flight scan lifecycle.
//!
//! [`ScanMachine`] holds the pure transition logic; [`ScanOrchestrator`] wires
//! it to the agent, the parser and the history.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{SecondsFormat, Utc};
use radar_core::{find_agent, AgentProfile, HistoryEntry, ScanResult, Settings};
use radar_platform::AgentInvoker;

use crate::history::{HistoryError, HistoryStore};
use crate::instruction::compose_instruction;
use crate::parser::{parse, ParseError};
use crate::storage::KeyValueStore;

pub const SCANNING_MESSAGE: &str = "Scanning for listings... This may take a minute.";
pub const REMOTE_FAILURE_MESSAGE: &str = "Scan failed. Please check your settings and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

/// User-facing status line. Stays visible until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Why a scan produced no history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFailure {
    /// The agent call itself failed (network, HTTP status, undecodable body).
    Remote(String),
    /// The agent answered but the reply was unusable.
    Parse(ParseError),
    /// The parsed result could not be added to the history.
    History(HistoryError),
}

impl ScanFailure {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ScanFailure::Remote(_) | ScanFailure::History(_) => REMOTE_FAILURE_MESSAGE.to_owned(),
            ScanFailure::Parse(e) => e.user_message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Recorded(HistoryEntry),
    Failed(ScanFailure),
}

/// Returned by [`ScanMachine::start`] when a scan is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyScanning;

/// Pure scan state. Terminal phases are transient: `complete` reports them
/// and leaves the machine `Idle`.
#[derive(Debug, Clone)]
pub struct ScanMachine {
    phase: ScanPhase,
    active_agent: Option<String>,
}

impl Default for ScanMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanMachine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: ScanPhase::Idle,
            active_agent: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    /// Agent nominally in control while scanning.
    #[must_use]
    pub fn active_agent(&self) -> Option<&str> {
        self.active_agent.as_deref()
    }

    /// `Idle -> Scanning`.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyScanning`] and leaves the state untouched if a scan
    /// is in flight.
    pub fn start(&mut self, agent_id: &str) -> Result<StatusMessage, AlreadyScanning> {
        if self.is_scanning() {
            return Err(AlreadyScanning);
        }
        self.phase = ScanPhase::Scanning;
        self.active_agent = Some(agent_id.to_owned());
        Ok(StatusMessage::new(StatusLevel::Info, SCANNING_MESSAGE))
    }

    /// `Scanning -> Succeeded | Failed -> Idle`. Returns the terminal phase
    /// passed through and the status message it emits.
    pub fn complete(&mut self, outcome: &ScanOutcome) -> (ScanPhase, StatusMessage) {
        let settled = match outcome {
            ScanOutcome::Recorded(entry) => (
                ScanPhase::Succeeded,
                StatusMessage::new(StatusLevel::Success, success_text(&entry.result)),
            ),
            ScanOutcome::Failed(failure) => (
                ScanPhase::Failed,
                StatusMessage::new(StatusLevel::Error, failure.user_message()),
            ),
        };
        self.phase = ScanPhase::Idle;
        self.active_agent = None;
        settled
    }

    fn reset(&mut self) {
        self.phase = ScanPhase::Idle;
        self.active_agent = None;
    }
}

fn success_text(result: &ScanResult) -> String {
    let mut text = format!("Scan complete -- {} new listings found", result.total_found());
    if result.email_was_sent() {
        text.push_str(", email sent!");
    }
    text
}

/// Result of a scan request.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanAttempt {
    /// A scan was already running; this request was dropped.
    AlreadyScanning,
    Finished {
        outcome: ScanOutcome,
        status: StatusMessage,
    },
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the machine to `Idle` if a scan future is dropped mid-flight.
struct InFlight<'a> {
    machine: &'a Mutex<ScanMachine>,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock(self.machine).reset();
        }
    }
}

pub struct ScanOrchestrator<A, S> {
    agent: A,
    agent_id: String,
    machine: Mutex<ScanMachine>,
    history: Mutex<HistoryStore<S>>,
    status: Mutex<Option<StatusMessage>>,
}

impl<A: AgentInvoker, S: KeyValueStore> ScanOrchestrator<A, S> {
    pub fn new(agent: A, agent_id: impl Into<String>, history: HistoryStore<S>) -> Self {
        Self {
            agent,
            agent_id: agent_id.into(),
            machine: Mutex::new(ScanMachine::new()),
            history: Mutex::new(history),
            status: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn phase(&self) -> ScanPhase {
        lock(&self.machine).phase()
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        lock(&self.machine).is_scanning()
    }

    /// Profile of the agent currently driving a scan, if any.
    #[must_use]
    pub fn active_agent(&self) -> Option<&'static AgentProfile> {
        lock(&self.machine).active_agent().and_then(find_agent)
    }

    /// The current status line, if one has not been dismissed.
    #[must_use]
    pub fn status(&self) -> Option<StatusMessage> {
        lock(&self.status).clone()
    }

    pub fn dismiss_status(&self) {
        lock(&self.status).take();
    }

    /// Locks the history for reading. Do not hold the guard across a scan.
    pub fn history(&self) -> MutexGuard<'_, HistoryStore<S>> {
        lock(&self.history)
    }

    /// Runs one scan with `settings`. A request made while another scan is
    /// in flight is dropped and returns [`ScanAttempt::AlreadyScanning`].
    pub async fn scan(&self, settings: &Settings) -> ScanAttempt {
        let started = lock(&self.machine).start(&self.agent_id);
        let Ok(scanning) = started else {
            tracing::debug!("scan request ignored: a scan is already in flight");
            return ScanAttempt::AlreadyScanning;
        };
        let mut in_flight = InFlight {
            machine: &self.machine,
            armed: true,
        };
        *lock(&self.status) = Some(scanning);

        let instruction = compose_instruction(settings);
        tracing::info!(agent_id = %self.agent_id, "scan started");

        let outcome = match self.agent.invoke(&instruction, &self.agent_id).await {
            Ok(envelope) => match parse(&envelope) {
                Ok(result) => match self.record(result) {
                    Ok(entry) => ScanOutcome::Recorded(entry),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to record scan in history");
                        ScanOutcome::Failed(ScanFailure::History(e))
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "scan reply unusable");
                    ScanOutcome::Failed(ScanFailure::Parse(e))
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "agent invocation failed");
                ScanOutcome::Failed(ScanFailure::Remote(e.to_string()))
            }
        };

        let (phase, status) = lock(&self.machine).complete(&outcome);
        in_flight.armed = false;
        tracing::info!(?phase, status = %status, "scan finished");
        *lock(&self.status) = Some(status.clone());

        ScanAttempt::Finished { outcome, status }
    }

    fn record(&self, result: ScanResult) -> Result<HistoryEntry, HistoryError> {
        let now = Utc::now();
        let mut history = lock(&self.history);
        let timestamp = result
            .scan_timestamp
            .clone()
            .filter(|ts| !ts.trim().is_empty())
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true));
        let entry = HistoryEntry {
            id: history.next_id(now.timestamp_millis()),
            timestamp,
            result,
        };
        history.append(entry.clone())?;
        tracing::info!(
            entry_id = %entry.id,
            listings = entry.result.total_found(),
            "scan recorded"
        );
        Ok(entry)
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
