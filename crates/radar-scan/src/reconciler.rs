//! Mirror of the remote periodic-scan schedule.
//!
//! Local state is only ever replaced with what the remote side reports; a
//! toggle never flips `is_active` locally but refetches instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use radar_core::{ExecutionLog, Schedule};
use radar_platform::ScheduleService;

/// Latest known schedule and its most recent executions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    pub schedule: Option<Schedule>,
    pub logs: Vec<ExecutionLog>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAction {
    Pause,
    Resume,
}

impl ScheduleAction {
    /// Pause an active schedule, resume a paused one.
    #[must_use]
    pub fn for_schedule(schedule: &Schedule) -> Self {
        if schedule.is_active {
            Self::Pause
        } else {
            Self::Resume
        }
    }
}

impl std::fmt::Display for ScheduleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleAction::Pause => write!(f, "pause"),
            ScheduleAction::Resume => write!(f, "resume"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Another refresh or toggle was in flight; nothing was sent.
    Busy,
    /// The mutation was attempted and the state refetched.
    Toggled {
        action: ScheduleAction,
        /// Why the mutation failed, if it did. The snapshot is still fresh.
        mutation_error: Option<String>,
        snapshot: ScheduleSnapshot,
    },
}

/// Clears the busy flag when dropped.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ScheduleReconciler<S> {
    service: S,
    target_id: String,
    log_limit: u32,
    busy: AtomicBool,
    snapshot: Mutex<ScheduleSnapshot>,
}

impl<S: ScheduleService> ScheduleReconciler<S> {
    pub fn new(service: S, target_id: impl Into<String>, log_limit: u32) -> Self {
        Self {
            service,
            target_id: target_id.into(),
            log_limit,
            busy: AtomicBool::new(false),
            snapshot: Mutex::new(ScheduleSnapshot::default()),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ScheduleSnapshot {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Refetches the schedule and its logs. Returns `None` without contacting
    /// the remote side when a refresh or toggle is already running.
    pub async fn refresh(&self) -> Option<ScheduleSnapshot> {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!("schedule refresh skipped: reconciler busy");
            return None;
        };
        Some(self.reconcile().await)
    }

    /// Pauses an active schedule or resumes a paused one, then refetches
    /// regardless of whether the mutation succeeded.
    pub async fn toggle(&self, schedule: &Schedule) -> ToggleOutcome {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!(schedule_id = %schedule.id, "schedule toggle dropped: reconciler busy");
            return ToggleOutcome::Busy;
        };

        let action = ScheduleAction::for_schedule(schedule);
        let result = match action {
            ScheduleAction::Pause => self.service.pause(&schedule.id).await,
            ScheduleAction::Resume => self.service.resume(&schedule.id).await,
        };
        let mutation_error = match result {
            Ok(()) => {
                tracing::info!(schedule_id = %schedule.id, %action, "schedule mutation accepted");
                None
            }
            Err(e) => {
                tracing::warn!(schedule_id = %schedule.id, %action, error = %e, "schedule mutation failed");
                Some(e.to_string())
            }
        };

        let snapshot = self.reconcile().await;
        ToggleOutcome::Toggled {
            action,
            mutation_error,
            snapshot,
        }
    }

    async fn reconcile(&self) -> ScheduleSnapshot {
        let (listed, logs) = tokio::join!(
            self.service.list(),
            self.service.logs(&self.target_id, self.log_limit)
        );

        let schedule = match listed {
            Ok(resp) if resp.success => {
                select_schedule(resp.schedules.unwrap_or_default(), &self.target_id)
            }
            Ok(resp) => {
                tracing::warn!(error = ?resp.error, "schedule listing reported failure");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to list schedules");
                None
            }
        };

        let executions = match logs {
            Ok(resp) if resp.success => resp.executions.map(|mut executions| {
                executions.truncate(usize::try_from(self.log_limit).unwrap_or(usize::MAX));
                executions
            }),
            Ok(resp) => {
                tracing::warn!(error = ?resp.error, "execution log fetch reported failure");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch execution logs");
                None
            }
        };

        let mut snapshot = self.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(schedule) = schedule {
            snapshot.schedule = Some(schedule);
        }
        if let Some(executions) = executions {
            snapshot.logs = executions;
        }
        snapshot.clone()
    }
}

/// The target schedule, else the first one listed.
fn select_schedule(schedules: Vec<Schedule>, target_id: &str) -> Option<Schedule> {
    let mut fallback = None;
    for schedule in schedules {
        if schedule.id == target_id {
            return Some(schedule);
        }
        if fallback.is_none() {
            fallback = Some(schedule);
        }
    }
    if let Some(first) = &fallback {
        tracing::info!(target_id, fallback_id = %first.id, "target schedule not listed; using first schedule");
    }
    fallback
}

#[cfg(test)]
#[path = "reconciler_test.rs"]
mod tests;
