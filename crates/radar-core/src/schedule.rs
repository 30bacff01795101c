//! Local mirror of the remote periodic-scan schedule.
//!
//! These values are a disposable cache of remote state: they are refetched
//! after every mutation and never patched locally.

use serde::{Deserialize, Serialize};

use crate::display::cron_to_human;
use crate::lenient;

/// Timezone shown when the remote schedule does not report one.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// A remote schedule. Only `id` is required; every other field falls back
/// to a default when absent or of the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(deserialize_with = "lenient::identifier")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cron_expression: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub next_run_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_run_at: Option<String>,
}

impl Schedule {
    #[must_use]
    pub fn timezone_or_default(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    #[must_use]
    pub fn describe_cadence(&self) -> String {
        cron_to_human(&self.cron_expression)
    }

    #[must_use]
    pub fn state_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Paused"
        }
    }
}

/// One recorded run of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionLog {
    #[serde(deserialize_with = "lenient::identifier")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub executed_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub success: bool,
}

impl ExecutionLog {
    #[must_use]
    pub fn outcome_label(&self) -> &'static str {
        if self.success {
            "Success"
        } else {
            "Failed"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_remote_schedule_with_optional_fields_missing() {
        let schedule: Schedule = serde_json::from_value(serde_json::json!({
            "id": "sched-1",
            "is_active": true,
            "cron_expression": "0 * * * *"
        }))
        .unwrap();
        assert!(schedule.is_active);
        assert_eq!(schedule.timezone_or_default(), DEFAULT_TIMEZONE);
        assert_eq!(schedule.describe_cadence(), "Every hour");
        assert_eq!(schedule.state_label(), "Active");
        assert!(schedule.next_run_time.is_none());
    }

    #[test]
    fn execution_log_outcome_label() {
        let log: ExecutionLog = serde_json::from_value(serde_json::json!({
            "id": "run-1",
            "executed_at": "2026-02-20T14:00:00Z",
            "success": false
        }))
        .unwrap();
        assert_eq!(log.outcome_label(), "Failed");
    }

    #[test]
    fn wrong_typed_schedule_fields_fall_back_to_defaults() {
        let schedule: Schedule = serde_json::from_value(serde_json::json!({
            "id": "6998a1",
            "is_active": "yes",
            "cron_expression": null,
            "timezone": null,
            "next_run_time": 17
        }))
        .unwrap();
        assert!(!schedule.is_active);
        assert!(schedule.cron_expression.is_empty());
        assert_eq!(schedule.timezone_or_default(), DEFAULT_TIMEZONE);
        assert_eq!(schedule.next_run_time.as_deref(), Some("17"));
    }

    #[test]
    fn numeric_execution_ids_are_accepted() {
        let log: ExecutionLog = serde_json::from_value(serde_json::json!({
            "id": 42,
            "success": "true"
        }))
        .unwrap();
        assert_eq!(log.id, "42");
        assert!(log.success);
        assert!(log.executed_at.is_none());
    }

    #[test]
    fn schedule_without_usable_id_is_rejected() {
        assert!(serde_json::from_value::<Schedule>(serde_json::json!({"id": null})).is_err());
        assert!(serde_json::from_value::<Schedule>(serde_json::json!({"is_active": true})).is_err());
    }
}
